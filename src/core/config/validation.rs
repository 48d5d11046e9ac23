#![allow(clippy::result_large_err)]

use super::AppConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &AppConfig) -> Result<(), AppError> {
        let extension = &config.output.extension;
        if extension.trim().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigurationError,
                "output.extension cannot be empty",
            ));
        }

        if !extension.starts_with('.') || extension.contains(['/', '\\']) {
            return Err(AppError::new(
                ErrorCategory::ConfigurationError,
                format!(
                    "output.extension must start with '.' and contain no path separators (got '{}')",
                    extension
                ),
            ));
        }

        if config.output.directory.as_os_str().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigurationError,
                "output.directory cannot be empty",
            ));
        }

        Ok(())
    }
}
