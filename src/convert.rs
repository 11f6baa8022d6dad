//! Pipeline entry points: JSON text in, SQL schema and ER diagram out
//!
//! Every call is independent. Input is parsed strictly (no lenient JSON),
//! the root must be an object, and any failure is returned as a single
//! [`PipelineError`] with no partial output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

use crate::discovery::{Discovery, discover};
use crate::export::{MermaidExporter, SqlExporter};
use crate::models::{ConversionOptions, TableCandidate};

/// Errors in the input document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input is not syntactically valid JSON
    #[error("{0}")]
    InvalidJson(String),

    /// Root value is an array
    #[error("Please provide a JSON object or named objects, not an array at the root level")]
    RootIsArray,

    /// Root value is a scalar or null
    #[error("Invalid JSON: Expected an object")]
    RootNotObject { found: &'static str },
}

impl From<serde_json::Error> for ConversionError {
    fn from(e: serde_json::Error) -> Self {
        ConversionError::InvalidJson(e.to_string())
    }
}

/// Pipeline stage that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Schema,
    Diagram,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Schema => write!(f, "Failed to parse JSON"),
            Stage::Diagram => write!(f, "Failed to generate diagram"),
        }
    }
}

/// A [`ConversionError`] tagged with the stage it was raised in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage}: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: ConversionError,
}

impl PipelineError {
    fn schema(source: ConversionError) -> Self {
        Self {
            stage: Stage::Schema,
            source,
        }
    }

    fn diagram(source: ConversionError) -> Self {
        Self {
            stage: Stage::Diagram,
            source,
        }
    }
}

/// Output of [`convert_to_schema`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaConversion {
    /// SQL statements separated by blank lines
    pub statements: String,
    /// Discovered tables, one per `CREATE TABLE` statement
    pub tables: Vec<TableCandidate>,
}

/// Output of [`convert`]: both renderings of one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub statements: String,
    pub tables: Vec<TableCandidate>,
    pub diagram: String,
}

/// Parse JSON text and require an object at the root
pub fn parse_document(json: &str) -> Result<Map<String, Value>, ConversionError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Err(ConversionError::RootIsArray),
        other => Err(ConversionError::RootNotObject {
            found: value_type_name(&other),
        }),
    }
}

/// Parse and discover in one step
pub fn discover_document(json: &str) -> Result<Discovery, ConversionError> {
    parse_document(json).map(|root| discover(&root))
}

/// Infer a PostgreSQL schema from an example document
///
/// ```rust
/// use json2sql::{ConversionOptions, convert_to_schema};
///
/// let result = convert_to_schema(r#"{"user": {"name": "John"}}"#, &ConversionOptions::default())?;
/// assert_eq!(result.tables.len(), 1);
/// assert!(result.statements.starts_with("CREATE TABLE user ("));
/// # Ok::<(), json2sql::PipelineError>(())
/// ```
pub fn convert_to_schema(
    json: &str,
    options: &ConversionOptions,
) -> Result<SchemaConversion, PipelineError> {
    let discovery = discover_document(json).map_err(PipelineError::schema)?;
    let statements = SqlExporter::new(*options).export(&discovery).content;

    info!(tables = discovery.tables.len(), "generated SQL schema");

    Ok(SchemaConversion {
        statements,
        tables: discovery.tables,
    })
}

/// Generate a Mermaid ER diagram from an example document
pub fn generate_diagram(json: &str) -> Result<String, PipelineError> {
    let discovery = discover_document(json).map_err(PipelineError::diagram)?;

    info!(
        tables = discovery.tables.len(),
        relationships = discovery.relationships.len(),
        "generated ER diagram"
    );

    Ok(MermaidExporter.export(&discovery).content)
}

/// Run both generators over the same document
pub fn convert(json: &str, options: &ConversionOptions) -> Result<Conversion, PipelineError> {
    let schema = convert_to_schema(json, options)?;
    let diagram = generate_diagram(json)?;

    Ok(Conversion {
        statements: schema.statements,
        tables: schema.tables,
        diagram,
    })
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
