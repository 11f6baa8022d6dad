//! CLI command handlers
//!
//! Handlers return the text to print so the binary owns stdout.

mod convert;

pub use convert::{handle_convert, handle_diagram, load_options};

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::error::CliError;
use crate::cli::output::render_example_list;
use crate::cli::{Command, InputArgs};
use crate::templates::{find_example, format_json};

/// Dispatch a parsed command
pub fn run(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Convert(args) => handle_convert(args),
        Command::Diagram(args) => handle_diagram(args),
        Command::Examples => Ok(render_example_list()),
        Command::Format(args) => handle_format(args),
    }
}

/// Handle the `format` command
pub fn handle_format(args: &InputArgs) -> Result<String, CliError> {
    let content = load_input(args)?;
    Ok(format_json(&content)?)
}

/// Load the JSON document from an example, a file, or stdin
pub fn load_input(args: &InputArgs) -> Result<String, CliError> {
    match (&args.example, &args.input) {
        (Some(_), Some(_)) => Err(CliError::InvalidArgument(
            "pass either an input file or --example, not both".to_string(),
        )),
        (Some(name), None) => {
            let example = find_example(name).ok_or_else(|| CliError::UnknownExample(name.clone()))?;
            debug!(example = example.name, "using built-in example");
            Ok(example.json())
        }
        (None, Some(path)) if path != "-" => {
            let path = PathBuf::from(path);
            std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
        }
        (None, _) => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
            Ok(content)
        }
    }
}
