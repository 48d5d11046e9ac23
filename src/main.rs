use clap::Parser;
use search_recreate::cli::{self, Args};
use search_recreate::core::{AppError, DefaultErrorReporter, ErrorReporter};
use search_recreate::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let reporter = DefaultErrorReporter::new();

    let guard = match logging::init(&args.command) {
        Ok(guard) => Some(guard),
        Err(err) => {
            reporter.report_warning("logging disabled", Some(format!("{:#}", err)));
            None
        }
    };

    let code = match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.report_error(&AppError::from(err));
            ExitCode::FAILURE
        }
    };

    drop(guard);
    code
}
