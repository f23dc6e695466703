//! Manifest build orchestrator: configuration in, module descriptor out.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::manifest::{is_up_to_date, render_manifest, scan_source_tree, write_manifest};
use crate::models::ManifestArtifacts;
use crate::selection::FileSelection;

/// High-level helper running the scan, render and write steps for one configuration.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
  config: GeneratorConfig,
  base_dir: PathBuf,
  config_source: Option<PathBuf>,
}

impl ManifestBuilder {
  /// Create a builder resolving relative config paths against `base_dir`.
  pub fn new(config: GeneratorConfig, base_dir: impl Into<PathBuf>) -> Self {
    Self {
      config,
      base_dir: base_dir.into(),
      config_source: None,
    }
  }

  /// Record the file the configuration was loaded from so it is reported as a rerun path.
  pub fn with_config_source(mut self, path: Option<PathBuf>) -> Self {
    self.config_source = path;
    self
  }

  /// Resolved manifest destination.
  pub fn output_path(&self) -> PathBuf {
    self.config.output_path(&self.base_dir)
  }

  /// Scan the source tree and render the manifest without touching the destination.
  pub fn build(&self) -> Result<ManifestArtifacts> {
    self.config.warn_if_outdated();

    let source_root = self.config.source_root_path(&self.base_dir);
    let module_base = self.config.module_base_path(&self.base_dir);
    let selection = FileSelection::from_globs(&self.config.include, &self.config.exclude)?;

    log::debug!(
      "scanning {} (module base {})",
      source_root.display(),
      module_base.display()
    );
    let scan = scan_source_tree(
      &source_root,
      &module_base,
      self.config.module_extension(),
      &selection,
    )?;
    let document = render_manifest(&scan, &self.config.template());

    let mut rerun_paths = vec![source_root];
    rerun_paths.extend(self.config_source.clone());

    Ok(ManifestArtifacts {
      document,
      output_path: self.output_path(),
      scan,
      rerun_paths,
    })
  }

  /// Build the manifest and write it to the configured destination.
  pub fn generate(&self) -> Result<ManifestArtifacts> {
    let artifacts = self.build()?;
    write_manifest(&artifacts.output_path, &artifacts.document)?;
    log::info!(
      "wrote {} ({} sources, {} static resources)",
      artifacts.output_path.display(),
      artifacts.scan.module_sources.len(),
      artifacts.scan.static_resources.len()
    );
    Ok(artifacts)
  }

  /// Returns `true` when the destination already matches a fresh build.
  pub fn check(&self) -> Result<bool> {
    let artifacts = self.build()?;
    is_up_to_date(&artifacts.output_path, &artifacts.document)
  }
}

impl ManifestArtifacts {
  /// `cargo:rerun-if-changed` lines for use from a build script.
  pub fn cargo_rerun_directives(&self) -> Vec<String> {
    self
      .rerun_paths
      .iter()
      .map(|path| format!("cargo:rerun-if-changed={}", display_path(path)))
      .collect()
  }
}

fn display_path(path: &Path) -> String {
  path.to_string_lossy().into_owned()
}
