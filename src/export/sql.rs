//! SQL exporter generating PostgreSQL DDL from discovered tables.
//!
//! Identifiers are emitted unquoted, after applying the configured
//! [`NameStyle`]. The same style is used for table, column, constraint and
//! index names, so every constraint references columns that exist.

use serde_json::Value;

use crate::discovery::Discovery;
use crate::export::ExportResult;
use crate::inference::{ColumnType, infer_column_type};
use crate::models::{Column, ConversionOptions, TableCandidate, is_object_array};
use crate::naming::NameStyle;

/// Comment line introducing the trailing index statements
pub const INDEX_SECTION_HEADER: &str = "\n-- Indexes for better query performance";

/// A `CREATE TABLE` definition ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<Column>,
}

impl TableDefinition {
    /// Render as a `CREATE TABLE` statement
    ///
    /// ```rust
    /// use json2sql::export::sql::TableDefinition;
    /// use json2sql::models::Column;
    ///
    /// let table = TableDefinition {
    ///     name: "users".to_string(),
    ///     columns: vec![Column::surrogate_key()],
    /// };
    /// assert_eq!(table.to_sql(), "CREATE TABLE users (\n  id SERIAL PRIMARY KEY\n);");
    /// ```
    pub fn to_sql(&self) -> String {
        let column_defs: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("  {}", c.definition()))
            .collect();

        format!("CREATE TABLE {} (\n{}\n);", self.name, column_defs.join(",\n"))
    }
}

/// Exporter for PostgreSQL schema statements
#[derive(Debug, Clone, Default)]
pub struct SqlExporter {
    options: ConversionOptions,
}

impl SqlExporter {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    fn style(&self) -> NameStyle {
        self.options.name_style()
    }

    /// Build the table definition for a candidate.
    ///
    /// Child tables (nested objects and arrays of objects) gain an integer
    /// `<parent>_id` column. Sample fields whose styled name equals that
    /// column are folded into it: the first one is replaced in place, later
    /// ones are dropped. Without such a field the column is appended after
    /// the sample fields.
    pub fn table_definition(&self, table: &TableCandidate) -> TableDefinition {
        let style = self.style();
        let foreign_key = table
            .parent
            .as_ref()
            .map(|parent| style.apply(&format!("{}_id", parent)));
        let mut columns = Vec::with_capacity(table.fields.len() + 3);

        if self.options.add_primary_key {
            columns.push(Column::surrogate_key());
        }

        let mut foreign_key_emitted = false;
        for (field, value) in &table.fields {
            let name = style.apply(field);

            if foreign_key.as_deref() == Some(name.as_str()) {
                if !foreign_key_emitted {
                    columns.push(Self::foreign_key_column(name));
                    foreign_key_emitted = true;
                }
                continue;
            }

            // Arrays of objects become their own tables
            if is_object_array(value) {
                continue;
            }

            columns.push(Self::field_column(name, value));
        }

        if let Some(fk) = foreign_key.filter(|_| !foreign_key_emitted) {
            columns.push(Self::foreign_key_column(fk));
        }

        if self.options.add_timestamps {
            columns.push(Column::audit_timestamp("created_at"));
            columns.push(Column::audit_timestamp("updated_at"));
        }

        TableDefinition {
            name: style.apply(&table.name),
            columns,
        }
    }

    /// Column for one sample field. NOT NULL is added whenever the sample is non-null.
    fn field_column(name: String, value: &Value) -> Column {
        let column = Column::new(name, &infer_column_type(value));
        if value.is_null() { column } else { column.not_null() }
    }

    fn foreign_key_column(name: String) -> Column {
        Column::new(name, &ColumnType::Integer).not_null()
    }

    /// `ALTER TABLE` statement linking a child table to its parent's primary key
    pub fn foreign_key_constraint(&self, child: &str, parent: &str) -> String {
        let style = self.style();
        let child = style.apply(child);
        let parent_table = style.apply(parent);
        let column = style.apply(&format!("{}_id", parent));

        format!(
            "ALTER TABLE {child}\n  ADD CONSTRAINT {}\n  FOREIGN KEY ({column})\n  REFERENCES {parent_table}(id)\n  ON DELETE CASCADE;",
            Self::constraint_name(&child, &parent_table)
        )
    }

    /// Constraint names are unique per (child, parent) pair, and discovery
    /// never yields the same child twice.
    pub fn constraint_name(child: &str, parent: &str) -> String {
        format!("fk_{}_{}", child, parent)
    }

    /// `CREATE INDEX` statement on a table's `created_at` column
    pub fn created_at_index(&self, table: &str) -> String {
        let name = self.style().apply(table);
        format!("CREATE INDEX idx_{name}_created_at ON {name}(created_at);")
    }

    /// All statements in generation order
    pub fn statements(&self, discovery: &Discovery) -> Vec<String> {
        let mut statements = Vec::with_capacity(discovery.tables.len() * 3 + 1);

        for table in &discovery.tables {
            statements.push(self.table_definition(table).to_sql());

            if let Some(parent) = &table.parent {
                statements.push(self.foreign_key_constraint(&table.name, parent));
            }
        }

        statements.push(INDEX_SECTION_HEADER.to_string());
        if self.options.add_timestamps {
            for table in &discovery.tables {
                statements.push(self.created_at_index(&table.name));
            }
        }

        statements
    }

    /// Export discovered tables as a single SQL script
    pub fn export(&self, discovery: &Discovery) -> ExportResult {
        ExportResult {
            content: self.statements(discovery).join("\n\n"),
            format: "sql".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::discover;
    use serde_json::json;

    fn discovery_of(value: Value) -> Discovery {
        discover(value.as_object().unwrap())
    }

    #[test]
    fn test_simple_table() {
        let discovery = discovery_of(json!({"user": {"name": "John", "email": "a@b.com"}}));
        let sql = SqlExporter::default().table_definition(&discovery.tables[0]).to_sql();

        assert_eq!(
            sql,
            "CREATE TABLE user (\n  id SERIAL PRIMARY KEY,\n  name VARCHAR(255) NOT NULL,\n  email VARCHAR(255) NOT NULL,\n  created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,\n  updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP\n);"
        );
    }

    #[test]
    fn test_null_field_is_nullable() {
        let discovery = discovery_of(json!({"comment": {"parentComment_id": null}}));
        let table = SqlExporter::default().table_definition(&discovery.tables[0]);
        assert_eq!(table.columns[1].definition(), "parent_comment_id TEXT");
    }

    #[test]
    fn test_object_arrays_are_skipped_but_objects_are_jsonb() {
        let discovery = discovery_of(json!({
            "order": {"items": [{"qty": 1}], "address": {"city": "SF"}, "tags": ["a"]}
        }));
        let table = SqlExporter::default().table_definition(&discovery.tables[0]);
        let names: Vec<_> = table.columns.iter().map(|c| c.definition()).collect();

        assert_eq!(
            names,
            vec![
                "id SERIAL PRIMARY KEY",
                "address JSONB NOT NULL",
                "tags VARCHAR(255)[] NOT NULL",
                "created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
                "updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
            ]
        );
    }

    #[test]
    fn test_child_gets_foreign_key_column() {
        let discovery = discovery_of(json!({"order": {"items": [{"product_id": 1}]}}));
        let exporter = SqlExporter::default();
        let items = exporter.table_definition(discovery.table("items").unwrap());

        assert_eq!(items.name, "items");
        assert_eq!(items.columns[2].definition(), "order_id INTEGER NOT NULL");
    }

    #[test]
    fn test_existing_foreign_key_field_is_replaced_in_place() {
        let discovery = discovery_of(json!({
            "order": {"items": [{"order_id": "abc", "qty": 2}]}
        }));
        let options = ConversionOptions::builder()
            .add_primary_key(false)
            .add_timestamps(false)
            .build();
        let items = SqlExporter::new(options).table_definition(discovery.table("items").unwrap());
        let defs: Vec<_> = items.columns.iter().map(|c| c.definition()).collect();

        assert_eq!(defs, vec!["order_id INTEGER NOT NULL", "qty INTEGER NOT NULL"]);
    }

    #[test]
    fn test_snake_case_foreign_key_field_under_camel_case_parent() {
        let discovery = discovery_of(json!({
            "blogPost": {"comments": [{"blog_post_id": 1, "blogPost_id": 2, "text": "x"}]}
        }));
        let options = ConversionOptions::builder()
            .add_primary_key(false)
            .add_timestamps(false)
            .build();
        let comments =
            SqlExporter::new(options).table_definition(discovery.table("comments").unwrap());
        let defs: Vec<_> = comments.columns.iter().map(|c| c.definition()).collect();

        assert_eq!(
            defs,
            vec!["blog_post_id INTEGER NOT NULL", "text VARCHAR(255) NOT NULL"]
        );
    }

    #[test]
    fn test_preserve_style_keeps_distinct_foreign_key_field() {
        let discovery = discovery_of(json!({
            "blogPost": {"comments": [{"blog_post_id": 1}]}
        }));
        let options = ConversionOptions::builder()
            .add_primary_key(false)
            .add_timestamps(false)
            .use_snake_case(false)
            .build();
        let comments =
            SqlExporter::new(options).table_definition(discovery.table("comments").unwrap());
        let defs: Vec<_> = comments.columns.iter().map(|c| c.definition()).collect();

        assert_eq!(
            defs,
            vec!["blog_post_id INTEGER NOT NULL", "blogPost_id INTEGER NOT NULL"]
        );
    }

    #[test]
    fn test_foreign_key_constraint() {
        let exporter = SqlExporter::default();
        assert_eq!(
            exporter.foreign_key_constraint("lineItems", "purchaseOrder"),
            "ALTER TABLE line_items\n  ADD CONSTRAINT fk_line_items_purchase_order\n  FOREIGN KEY (purchase_order_id)\n  REFERENCES purchase_order(id)\n  ON DELETE CASCADE;"
        );
    }

    #[test]
    fn test_preserve_style_is_consistent() {
        let options = ConversionOptions::builder().use_snake_case(false).build();
        let exporter = SqlExporter::new(options);

        assert_eq!(
            exporter.foreign_key_constraint("lineItems", "purchaseOrder"),
            "ALTER TABLE lineItems\n  ADD CONSTRAINT fk_lineItems_purchaseOrder\n  FOREIGN KEY (purchaseOrder_id)\n  REFERENCES purchaseOrder(id)\n  ON DELETE CASCADE;"
        );
        assert_eq!(
            exporter.created_at_index("userProfile"),
            "CREATE INDEX idx_userProfile_created_at ON userProfile(created_at);"
        );
    }

    #[test]
    fn test_statement_order() {
        let discovery = discovery_of(json!({
            "order": {"items": [{"qty": 1}]},
            "customer": {"name": "a"}
        }));
        let statements = SqlExporter::default().statements(&discovery);

        assert_eq!(statements.len(), 8);
        assert!(statements[0].starts_with("CREATE TABLE order ("));
        assert!(statements[1].starts_with("CREATE TABLE items ("));
        assert!(statements[2].starts_with("ALTER TABLE items"));
        assert!(statements[3].starts_with("CREATE TABLE customer ("));
        assert_eq!(statements[4], INDEX_SECTION_HEADER);
        assert_eq!(
            statements[5],
            "CREATE INDEX idx_order_created_at ON order(created_at);"
        );
        assert_eq!(
            statements[7],
            "CREATE INDEX idx_customer_created_at ON customer(created_at);"
        );
    }

    #[test]
    fn test_no_indexes_without_timestamps() {
        let discovery = discovery_of(json!({"customer": {"name": "a"}}));
        let options = ConversionOptions::builder().add_timestamps(false).build();
        let statements = SqlExporter::new(options).statements(&discovery);

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1], INDEX_SECTION_HEADER);
        assert!(!statements[0].contains("created_at"));
    }
}
