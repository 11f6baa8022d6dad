//! json2sql - infer a relational schema from an example JSON document
//!
//! Provides:
//! - Column type inference for JSON values
//! - Table and relationship discovery from nesting and naming conventions
//! - PostgreSQL DDL generation
//! - Mermaid ER diagram generation
//! - Canned example documents and a JSON pretty-printer
//!
//! ## Example
//!
//! ```rust
//! use json2sql::{ConversionOptions, convert_to_schema, generate_diagram};
//!
//! let json = r#"{"order": {"items": [{"product_id": 1, "quantity": 2}]}}"#;
//!
//! let schema = convert_to_schema(json, &ConversionOptions::default())?;
//! assert_eq!(schema.tables.len(), 2);
//! assert!(schema.statements.contains("ADD CONSTRAINT fk_items_order"));
//!
//! let diagram = generate_diagram(json)?;
//! assert!(diagram.contains("ORDER ||--o{ ITEMS"));
//! # Ok::<(), json2sql::PipelineError>(())
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;
pub mod discovery;
pub mod export;
pub mod inference;
pub mod models;
pub mod naming;
pub mod templates;

pub use convert::{
    Conversion, ConversionError, PipelineError, SchemaConversion, Stage, convert,
    convert_to_schema, discover_document, generate_diagram, parse_document,
};
pub use discovery::{Discovery, discover};
pub use export::{ExportResult, MermaidExporter, SqlExporter};
pub use inference::{ColumnType, DiagramType, infer_column_type, infer_diagram_type};
pub use models::{
    Cardinality, Column, ConversionOptions, Relationship, RelationshipKind, TableCandidate,
    TableOrigin,
};
pub use naming::{NameStyle, normalize_name};
pub use templates::{EXAMPLES, ExampleTemplate, find_example, format_json};
