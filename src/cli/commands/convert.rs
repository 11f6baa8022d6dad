//! Convert and diagram command implementations

use std::path::Path;

use tracing::debug;

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::cli::output::render_conversion;
use crate::cli::{ConvertArgs, InputArgs};
use crate::convert::{convert, generate_diagram};
use crate::models::ConversionOptions;

/// Handle the `convert` command
pub fn handle_convert(args: &ConvertArgs) -> Result<String, CliError> {
    let options = load_options(args)?;
    debug!(?options, "conversion options");

    let content = load_input(&args.source)?;
    let conversion = convert(&content, &options)?;

    render_conversion(&conversion, args.output)
}

/// Handle the `diagram` command
pub fn handle_diagram(args: &InputArgs) -> Result<String, CliError> {
    let content = load_input(args)?;
    Ok(generate_diagram(&content)?)
}

/// Build conversion options: config file first, then flags on top
pub fn load_options(args: &ConvertArgs) -> Result<ConversionOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => read_config(path)?,
        None => ConversionOptions::default(),
    };

    if args.no_timestamps {
        options.add_timestamps = false;
    }
    if args.no_primary_key {
        options.add_primary_key = false;
    }
    if args.no_snake_case {
        options.use_snake_case = false;
    }

    Ok(options)
}

fn read_config(path: &Path) -> Result<ConversionOptions, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    toml::from_str(&text).map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))
}
