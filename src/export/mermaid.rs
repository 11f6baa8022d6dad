//! Mermaid ER diagram exporter

use std::fmt::Write;

use crate::discovery::Discovery;
use crate::export::ExportResult;
use crate::inference::infer_diagram_type;
use crate::models::{TableCandidate, is_object_array};
use crate::naming::normalize_name;

/// Diagram emitted when no tables were discovered
pub const EMPTY_DIAGRAM: &str = "erDiagram\n  %% No tables to display";

/// Exporter for Mermaid `erDiagram` descriptions.
///
/// Names are always converted to snake_case; entity names are upper-cased.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidExporter;

impl MermaidExporter {
    /// Render the full diagram: entity blocks followed by relationship edges
    pub fn render(discovery: &Discovery) -> String {
        if discovery.is_empty() {
            return EMPTY_DIAGRAM.to_string();
        }

        let mut out = String::from("erDiagram\n");

        for table in &discovery.tables {
            out.push_str(&Self::entity_block(table));
        }

        for rel in &discovery.relationships {
            // Writing to a String cannot fail
            let _ = write!(
                out,
                "\n  {} {} {} : \"{}\"",
                rel.from.to_uppercase(),
                rel.cardinality.mermaid_symbol(),
                rel.to.to_uppercase(),
                rel.label()
            );
        }

        out
    }

    /// One entity block with a synthetic key, scalar attributes and audit timestamps.
    ///
    /// Nested objects and arrays of objects are left out; they appear as edges.
    pub fn entity_block(table: &TableCandidate) -> String {
        let mut block = format!("\n  {} {{\n", normalize_name(&table.name).to_uppercase());
        block.push_str("    int id PK\n");

        for (field, value) in &table.fields {
            if value.is_object() || is_object_array(value) {
                continue;
            }

            let name = normalize_name(field);
            let data_type = infer_diagram_type(value);
            if name.ends_with("_id") {
                let _ = writeln!(block, "    {} {} FK", data_type, name);
            } else {
                let _ = writeln!(block, "    {} {}", data_type, name);
            }
        }

        block.push_str("    timestamp created_at\n");
        block.push_str("    timestamp updated_at\n");
        block.push_str("  }\n");
        block
    }

    pub fn export(&self, discovery: &Discovery) -> ExportResult {
        ExportResult {
            content: Self::render(discovery),
            format: "mermaid".to_string(),
        }
    }
}
