//! Manifest generation broken into focused submodules for easier testing.

mod rendering;
mod scanning;
mod writing;

pub use rendering::render_manifest;
pub use scanning::scan_source_tree;
pub use writing::{is_up_to_date, write_manifest};
