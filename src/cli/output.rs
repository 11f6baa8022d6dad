//! Output formatting for CLI

use clap::ValueEnum;

use crate::cli::error::CliError;
use crate::convert::Conversion;

/// What `convert` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SQL statements only
    Sql,
    /// Mermaid diagram only
    Diagram,
    /// SQL followed by the diagram
    Both,
    /// Statements, tables and diagram as JSON
    Json,
    /// Statements, tables and diagram as YAML
    Yaml,
}

/// Render a conversion for the terminal
pub fn render_conversion(conversion: &Conversion, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Sql => Ok(conversion.statements.clone()),
        OutputFormat::Diagram => Ok(conversion.diagram.clone()),
        OutputFormat::Both => Ok(format!(
            "{}\n\n{}",
            conversion.statements, conversion.diagram
        )),
        OutputFormat::Json => serde_json::to_string_pretty(conversion)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(conversion).map_err(|e| CliError::SerializationError(e.to_string()))
        }
    }
}

/// One line per example: slug, name and description
pub fn render_example_list() -> String {
    crate::templates::EXAMPLES
        .iter()
        .map(|e| format!("{:<22} {} - {}", e.slug(), e.name, e.description))
        .collect::<Vec<_>>()
        .join("\n")
}
