//! Error type shared by every generation step.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that abort manifest generation.
#[derive(Debug, Error)]
pub enum GenerateError {
  /// The source root does not exist or is not a directory.
  #[error("source root not found: {}", path.display())]
  NotFound {
    /// Path that was expected to be a directory.
    path: PathBuf,
  },
  /// Reading or writing a file failed.
  #[error("failed to access {}: {source}", path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The configuration file is not valid JSON for [`crate::GeneratorConfig`].
  #[error("failed to parse {}: {source}", path.display())]
  Config {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_json::Error,
  },
  /// A glob pattern could not be compiled.
  #[error("invalid file pattern `{pattern}`: {source}")]
  Pattern {
    /// The offending glob as written by the caller.
    pattern: String,
    /// Source regex error.
    #[source]
    source: regex::Error,
  },
}

impl GenerateError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
