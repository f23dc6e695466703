//! Generator configuration describing the source layout and manifest identifiers.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GenerateError, Result};
use crate::models::ManifestTemplate;

/// File name looked up in the base directory when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = "gwt-manifest.json";

/// Version of the running generator, compared against `min_generator_version`.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Caller-supplied generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
  /// Directory scanned for files, relative to the base directory.
  pub source_root: String,
  /// Directory that module source paths are made relative to, relative to `source_root`.
  pub module_base: String,
  /// Extension designating module sources. A leading dot is optional.
  pub module_extension: String,
  /// Filename globs a file must match to be listed.
  pub include: Vec<String>,
  /// Filename globs that drop a file even when it matches `include`.
  pub exclude: Vec<String>,
  /// Module name written to the `rename-to` attribute.
  pub rename_to: String,
  /// Source package written to the `path` attribute of `<source>`.
  pub source_path: String,
  /// Configuration property collecting static resources.
  pub static_property: String,
  /// Manifest destination, relative to the base directory.
  pub output: String,
  /// Oldest generator version this configuration was written for.
  pub min_generator_version: Option<String>,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      source_root: "src".into(),
      module_base: "org/parallax3d/parallax".into(),
      module_extension: "java".into(),
      include: vec![
        "*.java".into(),
        "*.fs".into(),
        "*.vs".into(),
        "*.glsl".into(),
      ],
      exclude: Vec::new(),
      rename_to: "parallax".into(),
      source_path: "parallax".into(),
      static_property: "app.files.classpath".into(),
      output: "src/org/parallax3d/Parallax.gwt.xml".into(),
      min_generator_version: None,
    }
  }
}

impl GeneratorConfig {
  /// Load `gwt-manifest.json` from the base directory, falling back to defaults.
  ///
  /// Returns the config together with the file it was read from, if any. A file that
  /// exists but fails to parse is still reported as an error.
  pub fn discover(base_dir: &Path) -> Result<(Self, Option<PathBuf>)> {
    let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.is_file() {
      log::debug!(
        "no {} in {}, using defaults",
        DEFAULT_CONFIG_FILE,
        base_dir.display()
      );
      return Ok((Self::default(), None));
    }
    let config = Self::from_path(&candidate)?;
    Ok((config, Some(candidate)))
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::io(path, source))?;
    let config: Self = serde_json::from_str(&content).map_err(|source| GenerateError::Config {
      path: path.to_path_buf(),
      source,
    })?;
    log::debug!("loaded generator config from {}", path.display());
    Ok(config)
  }

  /// Module extension without a leading dot.
  pub fn module_extension(&self) -> &str {
    self.module_extension.trim_start_matches('.')
  }

  /// Absolute (or base-relative) directory to scan.
  pub fn source_root_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.source_root)
  }

  /// Directory module source paths are made relative to.
  pub fn module_base_path(&self, base_dir: &Path) -> PathBuf {
    self.source_root_path(base_dir).join(&self.module_base)
  }

  /// Destination of the rendered manifest.
  pub fn output_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.output)
  }

  /// Borrow the identifiers written into the document.
  pub fn template(&self) -> ManifestTemplate<'_> {
    ManifestTemplate {
      rename_to: &self.rename_to,
      source_path: &self.source_path,
      static_property: &self.static_property,
    }
  }

  /// Log a warning when this generator is older than the configured minimum.
  ///
  /// Returns `true` when the advisory fired. Generation continues either way.
  pub fn warn_if_outdated(&self) -> bool {
    let Some(required) = self.min_generator_version.as_deref() else {
      return false;
    };
    if compare_versions(GENERATOR_VERSION, required) == Ordering::Less {
      log::warn!(
        "generator version {} is older than the minimum {} requested by the configuration; \
         output may differ from what the project expects",
        GENERATOR_VERSION,
        required
      );
      return true;
    }
    false
  }
}

/// Compare dot separated numeric versions, treating missing or non-numeric parts as zero.
fn compare_versions(left: &str, right: &str) -> Ordering {
  let parse = |value: &str| -> Vec<u64> {
    value
      .trim()
      .trim_start_matches('v')
      .split('.')
      .map(|part| {
        let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
      })
      .collect()
  };

  let left = parse(left);
  let right = parse(right);
  let len = left.len().max(right.len());
  (0..len)
    .map(|i| {
      let a = left.get(i).copied().unwrap_or(0);
      let b = right.get(i).copied().unwrap_or(0);
      a.cmp(&b)
    })
    .find(|ordering| ordering.is_ne())
    .unwrap_or(Ordering::Equal)
}
