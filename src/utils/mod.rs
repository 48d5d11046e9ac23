//! Utility helpers: output file naming and module persistence.
pub mod files;

pub use files::{resolve_output_path, suggested_file_name, ModuleWriter};
