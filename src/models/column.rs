//! Column model for generated tables

use serde::{Deserialize, Serialize};

use crate::inference::ColumnType;

/// Column model representing one field of a generated table
///
/// # Example
///
/// ```rust
/// use json2sql::models::Column;
/// use json2sql::inference::ColumnType;
///
/// let column = Column::new("email".to_string(), &ColumnType::varchar()).not_null();
/// assert_eq!(column.definition(), "email VARCHAR(255) NOT NULL");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name, already normalized for the target style
    pub name: String,
    /// Physical PostgreSQL type (e.g. "VARCHAR(255)", "SERIAL")
    pub data_type: String,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Whether this column is the primary key (default: false)
    #[serde(default)]
    pub primary_key: bool,
    /// Default value expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Create a nullable column of an inferred type
    pub fn new(name: String, data_type: &ColumnType) -> Self {
        Self::with_physical_type(name, data_type.to_string())
    }

    /// Create a nullable column with a literal physical type
    pub fn with_physical_type(name: String, data_type: String) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
            primary_key: false,
            default: None,
        }
    }

    /// Surrogate `id SERIAL PRIMARY KEY` column
    pub fn surrogate_key() -> Self {
        Self {
            primary_key: true,
            ..Self::with_physical_type("id".to_string(), "SERIAL".to_string())
        }
    }

    /// `TIMESTAMP DEFAULT CURRENT_TIMESTAMP` audit column
    pub fn audit_timestamp(name: &str) -> Self {
        Self {
            default: Some("CURRENT_TIMESTAMP".to_string()),
            ..Self::new(name.to_string(), &ColumnType::Timestamp)
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Render the column as it appears inside `CREATE TABLE (...)`
    pub fn definition(&self) -> String {
        let mut def = format!("{} {}", self.name, self.data_type);

        if !self.nullable {
            def.push_str(" NOT NULL");
        }

        if self.primary_key {
            def.push_str(" PRIMARY KEY");
        }

        if let Some(default) = &self.default {
            def.push_str(" DEFAULT ");
            def.push_str(default);
        }

        def
    }
}
