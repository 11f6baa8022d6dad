//! Table and relationship discovery
//!
//! A single walk over the root object is shared by the SQL and diagram
//! exporters so both always agree on which tables exist.
//!
//! Rules, applied to the root object's entries in document order:
//!
//! - An object value becomes a table. Each of its fields holding a non-empty
//!   array of objects introduces a child table sampled from the first
//!   element, and each field holding an object introduces a child table
//!   sampled from that object. Children are only discovered one level deep.
//! - A non-empty array whose first element is an object becomes a table
//!   sampled from that element. Its fields are not scanned for children.
//! - Everything else (scalars, `null`, empty arrays, arrays of scalars) is
//!   ignored.
//!
//! The first registration of a name wins. Later candidates with the same
//! name are dropped without merging.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{
    Cardinality, Relationship, TableCandidate, TableOrigin, first_object_element,
};
use crate::naming::normalize_name;

/// Result of discovery: tables in discovery order and the derived edges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    pub tables: Vec<TableCandidate>,
    pub relationships: Vec<Relationship>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Look up a table by its raw name
    pub fn table(&self, name: &str) -> Option<&TableCandidate> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Discover tables and relationships in a root object
pub fn discover(root: &Map<String, Value>) -> Discovery {
    let tables = discover_tables(root);
    let relationships = detect_relationships(&tables);

    debug!(
        tables = tables.len(),
        relationships = relationships.len(),
        "discovery complete"
    );

    Discovery {
        tables,
        relationships,
    }
}

/// Walk the root object and collect table candidates
pub fn discover_tables(root: &Map<String, Value>) -> Vec<TableCandidate> {
    let mut tables: Vec<TableCandidate> = Vec::new();

    for (key, value) in root {
        match value {
            Value::Object(fields) => {
                let candidate = TableCandidate::root(key.clone(), fields.clone(), TableOrigin::Root);
                if !register(&mut tables, candidate) {
                    continue;
                }

                for (field, field_value) in fields {
                    let child = if let Some(sample) = first_object_element(field_value) {
                        TableCandidate::child(
                            field.clone(),
                            sample.clone(),
                            TableOrigin::Collection,
                            key.clone(),
                        )
                    } else if let Value::Object(nested) = field_value {
                        TableCandidate::child(
                            field.clone(),
                            nested.clone(),
                            TableOrigin::Nested,
                            key.clone(),
                        )
                    } else {
                        continue;
                    };
                    register(&mut tables, child);
                }
            }
            Value::Array(_) => match first_object_element(value) {
                Some(sample) => {
                    let candidate =
                        TableCandidate::root(key.clone(), sample.clone(), TableOrigin::RootArray);
                    register(&mut tables, candidate);
                }
                None => debug!(key = %key, "ignoring array without object elements"),
            },
            _ => debug!(key = %key, "ignoring scalar top-level value"),
        }
    }

    tables
}

/// Append a candidate unless its name is taken. Returns whether it was added.
fn register(tables: &mut Vec<TableCandidate>, candidate: TableCandidate) -> bool {
    if tables.iter().any(|t| t.name == candidate.name) {
        debug!(table = %candidate.name, "dropping duplicate table candidate");
        return false;
    }
    tables.push(candidate);
    true
}

/// Derive relationship edges for a set of tables.
///
/// Edges are returned in three groups: structural one-to-many edges for
/// array-of-object fields, structural one-to-one edges for nested object
/// fields, then edges implied by field names. Duplicates across groups are
/// kept.
pub fn detect_relationships(tables: &[TableCandidate]) -> Vec<Relationship> {
    let mut relationships = Vec::new();

    for table in tables {
        let from = normalize_name(&table.name);
        for (field, value) in &table.fields {
            if first_object_element(value).is_some() {
                relationships.push(Relationship::structural(
                    from.clone(),
                    normalize_name(field),
                    Cardinality::OneToMany,
                ));
            }
        }
    }

    for table in tables {
        let from = normalize_name(&table.name);
        for (field, value) in &table.fields {
            if value.is_object() {
                relationships.push(Relationship::structural(
                    from.clone(),
                    normalize_name(field),
                    Cardinality::OneToOne,
                ));
            }
        }
    }

    relationships.extend(detect_naming_relationships(tables));
    relationships
}

/// Edges implied by field names alone.
///
/// A field named `<other>_id` yields a many-to-one edge to `<other>`. A field
/// named exactly like another table and holding an object yields a
/// one-to-one edge. Only known tables are considered, and a table never
/// references itself.
pub fn detect_naming_relationships(tables: &[TableCandidate]) -> Vec<Relationship> {
    let table_names: Vec<String> = tables.iter().map(|t| normalize_name(&t.name)).collect();
    let mut relationships = Vec::new();

    for table in tables {
        let from = normalize_name(&table.name);

        for (field, value) in &table.fields {
            let field_name = normalize_name(field);

            for target in &table_names {
                if *target != from && is_foreign_key_for(&field_name, target) {
                    relationships.push(Relationship::naming_convention(
                        from.clone(),
                        target.clone(),
                        Cardinality::ManyToOne,
                    ));
                }
            }

            if field_name != from && value.is_object() && table_names.contains(&field_name) {
                relationships.push(Relationship::naming_convention(
                    from.clone(),
                    field_name,
                    Cardinality::OneToOne,
                ));
            }
        }
    }

    relationships
}

/// `field` is exactly `<table>_id`
fn is_foreign_key_for(field: &str, table: &str) -> bool {
    field
        .strip_suffix("_id")
        .is_some_and(|prefix| prefix == table)
}
