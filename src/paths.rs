//! Relative path helpers used when listing files in the manifest.

use std::path::Path;

/// Normalise a relative path for the manifest.
///
/// The generated path always uses forward slashes so that the manifest is identical on
/// every platform, regardless of the native separator used when the files were discovered.
/// Any leading `./` segments are removed.
pub fn normalize_relative_path(path: &str) -> String {
  let mut normalized = path.replace('\\', "/");
  while let Some(rest) = normalized.strip_prefix("./") {
    normalized = rest.to_string();
  }
  normalized
}

/// Express `path` relative to `base` in manifest form.
///
/// Returns `None` when `path` does not live under `base`.
pub fn relative_manifest_path(path: &Path, base: &Path) -> Option<String> {
  path
    .strip_prefix(base)
    .ok()
    .map(|relative| normalize_relative_path(&relative.to_string_lossy()))
}
