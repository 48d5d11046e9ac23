use crate::cli::args::InputArgs;
use crate::core::transformer::SearchModuleRequest;
use crate::Result;
use anyhow::Context;
use std::io::IsTerminal;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Gather the four transform inputs from flags, files and stdin.
///
/// Absent values become empty strings so the transformer reports every
/// missing field at once.
pub async fn collect(args: &InputArgs) -> Result<SearchModuleRequest> {
    let script = match args.script.as_deref() {
        Some(path) if path != Path::new("-") => read_file(path, "script").await?,
        Some(_) => read_stdin().await?,
        None if std::io::stdin().is_terminal() => String::new(),
        None => read_stdin().await?,
    };

    let description = match (&args.description, args.description_file.as_deref()) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_file(path, "description").await?,
        (None, None) => String::new(),
    };

    Ok(SearchModuleRequest::new(
        script,
        args.name.clone().unwrap_or_default(),
        args.id_suffix.clone().unwrap_or_default(),
        description,
    ))
}

async fn read_file(path: &Path, what: &str) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {} file {}", what, path.display()))
}

async fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("failed to read script from stdin")?;
    Ok(buffer)
}
