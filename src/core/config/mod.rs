use crate::core::transformer::{TransformOptions, UnterminatedFragment};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "search-recreate.toml";

/// Main configuration loaded from search-recreate.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Where and how generated modules are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Fragment extraction behaviour
    #[serde(default)]
    pub transform: TransformConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Extension appended to suggested file names, including the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory receiving saved modules when no output path is given
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

/// Transform configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TransformConfig {
    #[serde(default)]
    pub unterminated_fragment: UnterminatedFragment,
}

impl AppConfig {
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            unterminated_fragment: self.transform.unterminated_fragment,
        }
    }
}

fn default_extension() -> String {
    ".js".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            directory: default_directory(),
        }
    }
}
