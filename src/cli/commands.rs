use crate::{
    cli::args::{InputArgs, OutputFormat, PreviewArgs, SaveArgs, SuggestNameArgs},
    cli::input,
    core::{
        transformer::{self, SearchModule, SearchModuleRequest, TransformOptions},
        AppConfig, ConfigLoader, ConfigValidator,
    },
    utils::files::{resolve_output_path, suggested_file_name, ModuleWriter},
    Result,
};
use anyhow::Context;
use serde::Serialize;
use std::env;
use std::path::Path;

/// JSON document printed by `preview --format json`.
#[derive(Debug, Serialize)]
struct PreviewReport<'a> {
    file_name: String,
    #[serde(flatten)]
    module: &'a SearchModule,
}

fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    let config = ConfigLoader::load(explicit, &cwd)?;
    ConfigValidator::validate(&config)?;
    Ok(config)
}

fn transform_options(config: &AppConfig, args: &InputArgs) -> TransformOptions {
    let mut options = config.transform_options();
    if let Some(policy) = args.unterminated {
        options.unterminated_fragment = policy;
    }
    options
}

async fn build_module(
    args: &InputArgs,
    config: &AppConfig,
) -> Result<(SearchModuleRequest, SearchModule)> {
    let request = input::collect(args).await?;
    let options = transform_options(config, args);
    tracing::debug!(policy = %options.unterminated_fragment, "transforming script");
    let module = transformer::transform_with(&request, &options)?;
    Ok((request, module))
}

/// Handles `search-recreate preview`.
pub async fn preview(args: PreviewArgs) -> Result<()> {
    let config = load_config(args.input.config.as_deref())?;
    let (request, module) = build_module(&args.input, &config).await?;

    match args.format {
        OutputFormat::Text => print!("{}", module.source),
        OutputFormat::Json => {
            let report = PreviewReport {
                file_name: suggested_file_name(&request.name, &config.output.extension),
                module: &module,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Handles `search-recreate save`.
pub async fn save(args: SaveArgs) -> Result<()> {
    let config = load_config(args.input.config.as_deref())?;
    let (request, module) = build_module(&args.input, &config).await?;

    let file_name = suggested_file_name(&request.name, &config.output.extension);
    let path = resolve_output_path(
        args.output.as_deref(),
        &config.output.directory,
        &file_name,
    );

    ModuleWriter::new(args.force)
        .write(&path, &module.source)
        .await?;

    println!("Script saved successfully to:\n{}", path.display());
    Ok(())
}

/// Handles `search-recreate suggest-name`.
pub async fn suggest_name(args: SuggestNameArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    println!(
        "{}",
        suggested_file_name(&args.name, &config.output.extension)
    );
    Ok(())
}
