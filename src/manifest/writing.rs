//! Persisting the rendered manifest.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{GenerateError, Result};

/// Truncate or create `destination` and write the document into it.
///
/// The parent directory must already exist. The write is not atomic.
pub fn write_manifest(destination: &Path, document: &str) -> Result<()> {
  let mut file = File::create(destination).map_err(|source| GenerateError::io(destination, source))?;
  file
    .write_all(document.as_bytes())
    .and_then(|_| file.flush())
    .map_err(|source| GenerateError::io(destination, source))
}

/// Whether `destination` already holds exactly `document`.
///
/// A missing destination is reported as stale rather than as an error.
pub fn is_up_to_date(destination: &Path, document: &str) -> Result<bool> {
  match fs::read(destination) {
    Ok(existing) => Ok(existing == document.as_bytes()),
    Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
    Err(err) => Err(GenerateError::io(destination, err)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn overwrites_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Module.gwt.xml");
    fs::write(&path, "a much longer previous document").unwrap();

    write_manifest(&path, "<module/>\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "<module/>\n");
  }

  #[test]
  fn missing_parent_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("Module.gwt.xml");

    let err = write_manifest(&path, "<module/>\n").unwrap_err();

    assert!(matches!(err, GenerateError::Io { .. }));
    assert!(!dir.path().join("missing").exists());
  }

  #[test]
  fn detects_stale_missing_and_current_documents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Module.gwt.xml");

    assert!(!is_up_to_date(&path, "<module/>\n").unwrap());

    fs::write(&path, "<module/>").unwrap();
    assert!(!is_up_to_date(&path, "<module/>\n").unwrap());

    fs::write(&path, "<module/>\n").unwrap();
    assert!(is_up_to_date(&path, "<module/>\n").unwrap());
  }
}
