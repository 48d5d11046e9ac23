#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// File name offered for a search: spaces and path separators become
/// underscores, extension appended.
pub fn suggested_file_name(name: &str, extension: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}{}", stem, extension)
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(|c| c == '/' || c == '\\')
}

/// Decide where a module is written.
///
/// No `output` means `default_dir/<file_name>`. An existing directory, or a
/// path ending in a separator, receives `<file_name>`; anything else is used
/// as the file path itself.
pub fn resolve_output_path(output: Option<&Path>, default_dir: &Path, file_name: &str) -> PathBuf {
    match output {
        None => default_dir.join(file_name),
        Some(path) if path.is_dir() || ends_with_separator(path) => path.join(file_name),
        Some(path) => path.to_path_buf(),
    }
}

fn output_exists(path: &Path) -> AppError {
    AppError::new(
        ErrorCategory::IoError,
        format!("{} already exists", path.display()),
    )
    .with_code("OUTPUT_EXISTS")
    .with_suggestion("Pass --force to overwrite it or choose another --output")
}

/// Writes generated modules to disk.
pub struct ModuleWriter {
    overwrite: bool,
}

impl ModuleWriter {
    pub fn new(overwrite: bool) -> Self {
        ModuleWriter { overwrite }
    }

    pub async fn write(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::new(
                    ErrorCategory::IoError,
                    format!("Failed to create directory {}: {}", parent.display(), e),
                )
            })?;
        }

        let write_failed = |e: std::io::Error| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to write {}: {}", path.display(), e),
            )
        };

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create(self.overwrite)
            .truncate(self.overwrite)
            .create_new(!self.overwrite)
            .open(path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => output_exists(path),
                _ => write_failed(e),
            })?;
        file.write_all(contents.as_bytes())
            .await
            .map_err(write_failed)?;
        file.flush().await.map_err(write_failed)?;

        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote module");
        Ok(())
    }
}
