use crate::core::transformer::UnterminatedFragment;
use clap::Args;
use std::path::PathBuf;

/// The four inputs of a transform plus shared configuration flags.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Exported saved search script ("-" or omitted reads stdin)
    #[arg(long, short = 's', value_name = "FILE", help_heading = "Search Input")]
    pub script: Option<PathBuf>,

    /// Title of the recreated search
    #[arg(long, short = 'n', value_name = "TEXT", help_heading = "Search Input")]
    pub name: Option<String>,

    /// Suffix appended to 'customsearch' to form the search id
    #[arg(long = "id", value_name = "SUFFIX", help_heading = "Search Input")]
    pub id_suffix: Option<String>,

    /// Description written as comments at the top of the module
    #[arg(
        long,
        value_name = "TEXT",
        conflicts_with = "description_file",
        help_heading = "Search Input"
    )]
    pub description: Option<String>,

    /// Read the description from a file instead
    #[arg(long, value_name = "FILE", help_heading = "Search Input")]
    pub description_file: Option<PathBuf>,

    /// How to end the fragment when the script has no closing anchor
    #[arg(long, value_name = "POLICY", help_heading = "Extraction")]
    pub unterminated: Option<UnterminatedFragment>,

    /// Path to config file (default: ./search-recreate.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit the bare module or a JSON document with the extracted values
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        help_heading = "Output Options"
    )]
    pub format: OutputFormat,
}

#[derive(Args, Clone, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target file, or directory receiving the suggested file name
    #[arg(long, short = 'o', value_name = "PATH", help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    /// Overwrite the target file if it already exists
    #[arg(long, help_heading = "Output Options")]
    pub force: bool,
}

#[derive(Args, Clone, Debug)]
pub struct SuggestNameArgs {
    /// Search name to derive the file name from
    #[arg(long, short = 'n', value_name = "TEXT")]
    pub name: String,

    /// Path to config file (default: ./search-recreate.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The generated module exactly as it would be saved
    Text,
    /// JSON payload suitable for downstream tooling
    Json,
}
