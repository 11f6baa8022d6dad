//! Column types produced by inference

use serde::{Deserialize, Serialize};

/// Maximum length of a string sample that still maps to `VARCHAR(255)`
pub const VARCHAR_MAX_LEN: usize = 255;

/// Precision of inferred decimal columns
pub const DECIMAL_PRECISION: u8 = 10;

/// Scale of inferred decimal columns
pub const DECIMAL_SCALE: u8 = 2;

/// PostgreSQL column type inferred from a single JSON sample
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ColumnType {
    /// Whole numbers
    Integer,
    /// Fixed-point numbers
    Decimal { precision: u8, scale: u8 },
    /// true / false
    Boolean,
    /// Date or date-time strings
    Timestamp,
    /// Canonical UUID strings
    Uuid,
    /// Strings of at most `length` characters
    Varchar { length: usize },
    /// Unbounded strings, and the fallback for `null`
    Text,
    /// Opaque JSON document (objects, empty arrays)
    Jsonb,
    /// Array of the inner type, inferred from the first element
    Array { items: Box<ColumnType> },
}

impl ColumnType {
    /// The default `DECIMAL(10,2)` type
    pub fn decimal() -> Self {
        ColumnType::Decimal {
            precision: DECIMAL_PRECISION,
            scale: DECIMAL_SCALE,
        }
    }

    /// The default `VARCHAR(255)` type
    pub fn varchar() -> Self {
        ColumnType::Varchar {
            length: VARCHAR_MAX_LEN,
        }
    }

    /// Wrap a type as an array of that type
    pub fn array_of(items: ColumnType) -> Self {
        ColumnType::Array {
            items: Box::new(items),
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({},{})", precision, scale)
            }
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::Timestamp => write!(f, "TIMESTAMP"),
            ColumnType::Uuid => write!(f, "UUID"),
            ColumnType::Varchar { length } => write!(f, "VARCHAR({})", length),
            ColumnType::Text => write!(f, "TEXT"),
            ColumnType::Jsonb => write!(f, "JSONB"),
            ColumnType::Array { items } => write!(f, "{}[]", items),
        }
    }
}

/// Simplified type used only to label diagram attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
    Text,
    Varchar,
    Int,
    Decimal,
    Boolean,
    Array,
    Jsonb,
}

impl DiagramType {
    /// Lower-case label written into the diagram
    pub fn label(&self) -> &'static str {
        match self {
            DiagramType::Text => "text",
            DiagramType::Varchar => "varchar",
            DiagramType::Int => "int",
            DiagramType::Decimal => "decimal",
            DiagramType::Boolean => "boolean",
            DiagramType::Array => "array",
            DiagramType::Jsonb => "jsonb",
        }
    }
}

impl std::fmt::Display for DiagramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
