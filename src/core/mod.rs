pub mod config;
pub mod error;
pub mod template;
pub mod transformer;
pub mod types;

pub use config::{AppConfig, ConfigLoader, ConfigValidator};
pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use transformer::{
    generate_module, transform, transform_with, SearchModule, SearchModuleRequest,
    TransformError, TransformOptions, UnterminatedFragment,
};
pub use types::*;
