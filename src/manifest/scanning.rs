//! Directory scanning that collects and categorises manifest entries.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{GenerateError, Result};
use crate::models::{FileCategory, FileEntry, ScanResult};
use crate::paths::relative_manifest_path;
use crate::selection::FileInclusion;

/// Walk `root` and split every retained file into module sources and static resources.
///
/// Files are visited in order of their root-relative path so the result only depends on
/// the tree contents. Module sources are expressed relative to `module_base`, static
/// resources relative to `root`.
pub fn scan_source_tree<S: FileInclusion + ?Sized>(
  root: &Path,
  module_base: &Path,
  module_extension: &str,
  selection: &S,
) -> Result<ScanResult> {
  if !root.is_dir() {
    return Err(GenerateError::NotFound {
      path: root.to_path_buf(),
    });
  }

  let module_extension = module_extension.trim_start_matches('.');
  let mut result = ScanResult::default();

  for (root_relative, path) in collect_files_sorted(root) {
    let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
      continue;
    };
    if !selection.is_included(&file_name) {
      log::debug!("skipping {root_relative}");
      continue;
    }

    let extension = path
      .extension()
      .map(|ext| ext.to_string_lossy().into_owned())
      .unwrap_or_default();

    let entry = if extension == module_extension {
      let relative_path = relative_manifest_path(&path, module_base).unwrap_or_else(|| {
        log::warn!(
          "{} is outside the module base {}, listing it relative to the source root",
          root_relative,
          module_base.display()
        );
        root_relative.clone()
      });
      FileEntry {
        relative_path,
        extension,
        category: FileCategory::ModuleSource,
      }
    } else {
      FileEntry {
        relative_path: root_relative,
        extension,
        category: FileCategory::StaticResource,
      }
    };

    result.push(entry);
  }

  Ok(result)
}

/// Every regular file below `root`, keyed and sorted by its normalised relative path.
///
/// Unreadable entries are logged and skipped.
fn collect_files_sorted(root: &Path) -> Vec<(String, PathBuf)> {
  let mut files = Vec::new();

  for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
    let entry = match entry {
      Ok(entry) => entry,
      Err(err) => {
        log::warn!("skipping unreadable entry under {}: {}", root.display(), err);
        continue;
      }
    };

    if !is_regular_file(&entry) {
      continue;
    }

    let path = entry.into_path();
    if let Some(relative) = relative_manifest_path(&path, root) {
      files.push((relative, path));
    }
  }

  files.sort_by(|(a, _), (b, _)| a.cmp(b));
  files
}

fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
  let file_type = entry.file_type();
  if file_type.is_file() {
    return true;
  }
  // symlinks count when they resolve to a file
  file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}
