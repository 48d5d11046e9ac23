pub mod args;
pub mod commands;
pub mod input;

pub use args::{InputArgs, OutputFormat, PreviewArgs, SaveArgs, SuggestNameArgs};
use clap::{Parser, Subcommand};
use std::path::Path;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "search-recreate")]
#[command(version = crate::VERSION)]
#[command(about = "Recreate NetSuite saved searches from exported search scripts")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: export a saved search as a script, preview the recreated module, then save it and upload it to the target account."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Print the recreated search module",
        long_about = "Preview extracts the search.create fragment from the exported script and prints the generated module (text or JSON) without writing any file.",
        after_help = "Example:\n    search-recreate preview --script export.js --name \"Open Orders\" --id _open_orders --description \"Orders awaiting fulfilment\""
    )]
    Preview(PreviewArgs),
    #[command(
        about = "Generate the module and write it to a file",
        long_about = "Save generates the same module as preview and writes it to --output, or to the configured output directory under a name derived from --name.",
        after_help = "Example:\n    search-recreate save --script export.js --name \"Open Orders\" --id _open_orders --description-file notes.txt -o scripts/"
    )]
    Save(SaveArgs),
    #[command(
        about = "Print the file name suggested for a search",
        long_about = "Suggest-name replaces spaces in the search name with underscores and appends the configured extension.",
        after_help = "Example:\n    search-recreate suggest-name --name \"Open Orders\""
    )]
    SuggestName(SuggestNameArgs),
}

impl Command {
    /// Explicit config file passed on the command line, if any.
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Preview(args) => args.input.config.as_deref(),
            Command::Save(args) => args.input.config.as_deref(),
            Command::SuggestName(args) => args.config.as_deref(),
        }
    }

    /// Whether stdout carries the command result.
    pub fn writes_result_to_stdout(&self) -> bool {
        matches!(self, Command::Preview(_) | Command::SuggestName(_))
    }
}

pub async fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Preview(preview_args) => commands::preview(preview_args).await,
        Command::Save(save_args) => commands::save(save_args).await,
        Command::SuggestName(suggest_args) => commands::suggest_name(suggest_args).await,
    }
}
