//! Export functionality
//!
//! Provides exporters for:
//! - SQL (PostgreSQL DDL)
//! - Mermaid ER diagrams

pub mod mermaid;
pub mod sql;

use serde::{Deserialize, Serialize};

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

// Re-export for convenience
pub use mermaid::MermaidExporter;
pub use sql::SqlExporter;
