//! Data structures produced while generating a module manifest.

use std::path::PathBuf;

/// Which manifest section a file is listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
  /// Compiled module source, listed as a `source` include.
  ModuleSource,
  /// Anything else that passed the filters, listed as a configuration property value.
  StaticResource,
}

/// A file discovered under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
  /// Forward-slash path relative to the module base or the scan root.
  pub relative_path: String,
  /// File extension without the leading dot; empty when the file has none.
  pub extension: String,
  /// Section the entry belongs to.
  pub category: FileCategory,
}

/// Categorised scan output, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
  /// Files whose extension equals the module extension.
  pub module_sources: Vec<FileEntry>,
  /// Every other retained file.
  pub static_resources: Vec<FileEntry>,
}

impl ScanResult {
  /// Append an entry to the sequence matching its category.
  pub fn push(&mut self, entry: FileEntry) {
    match entry.category {
      FileCategory::ModuleSource => self.module_sources.push(entry),
      FileCategory::StaticResource => self.static_resources.push(entry),
    }
  }

  /// Total number of listed files.
  pub fn len(&self) -> usize {
    self.module_sources.len() + self.static_resources.len()
  }

  /// Returns `true` when no file was retained.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Identifiers written into the manifest document.
#[derive(Debug, Clone, Copy)]
pub struct ManifestTemplate<'a> {
  /// Value of the `rename-to` attribute on `<module>`.
  pub rename_to: &'a str,
  /// Value of the `path` attribute on `<source>`.
  pub source_path: &'a str,
  /// Multi-valued configuration property collecting static resources.
  pub static_property: &'a str,
}

/// Everything produced by [`crate::ManifestBuilder`].
#[derive(Debug, Clone)]
pub struct ManifestArtifacts {
  /// Rendered manifest document.
  pub document: String,
  /// Resolved destination of the manifest.
  pub output_path: PathBuf,
  /// Categorised files the document was rendered from.
  pub scan: ScanResult,
  /// File system paths that should trigger regenerating the manifest when changed.
  pub rerun_paths: Vec<PathBuf>,
}
