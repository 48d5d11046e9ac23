#![allow(clippy::result_large_err)]

use super::{AppConfig, CONFIG_FILE_NAME};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::{Path, PathBuf};

pub const ENV_OUTPUT_EXTENSION: &str = "SEARCH_RECREATE_OUTPUT_EXTENSION";
pub const ENV_OUTPUT_DIR: &str = "SEARCH_RECREATE_OUTPUT_DIR";
pub const ENV_UNTERMINATED_FRAGMENT: &str = "SEARCH_RECREATE_UNTERMINATED_FRAGMENT";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from an explicit path, or from `search-recreate.toml` in `dir`.
    /// An explicit path must exist; the implicit one falls back to defaults.
    /// Environment variables override file values.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?.ok_or_else(|| {
                AppError::new(
                    ErrorCategory::ConfigurationError,
                    format!("Config file {} does not exist", path.display()),
                )
                .with_code("CONFIG_NOT_FOUND")
            })?,
            None => Self::load_from_file(&Self::default_path(dir))?.unwrap_or_default(),
        };

        Self::apply_env_overrides(&mut config)?;
        Ok(config)
    }

    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<AppConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigurationError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(config))
    }

    fn apply_env_overrides(config: &mut AppConfig) -> Result<(), AppError> {
        if let Ok(extension) = env::var(ENV_OUTPUT_EXTENSION) {
            config.output.extension = extension;
        }

        if let Ok(directory) = env::var(ENV_OUTPUT_DIR) {
            config.output.directory = PathBuf::from(directory);
        }

        if let Ok(policy) = env::var(ENV_UNTERMINATED_FRAGMENT) {
            config.transform.unterminated_fragment = policy.parse().map_err(|e: String| {
                AppError::new(ErrorCategory::ConfigurationError, e)
                    .with_context("variable", ENV_UNTERMINATED_FRAGMENT)
            })?;
        }

        Ok(())
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "SEARCH_RECREATE_OUTPUT_EXTENSION - Override the saved file extension (default: .js)",
            "SEARCH_RECREATE_OUTPUT_DIR - Override the directory for saved modules (default: .)",
            "SEARCH_RECREATE_UNTERMINATED_FRAGMENT - end-of-script, drop-last-char or reject",
        ]
    }
}
