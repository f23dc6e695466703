#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod paths;
pub mod selection;

pub use builder::ManifestBuilder;
pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use models::{FileCategory, FileEntry, ManifestArtifacts, ManifestTemplate, ScanResult};
pub use selection::{FileInclusion, FileSelection};
