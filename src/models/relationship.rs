//! Relationships between discovered tables

use serde::{Deserialize, Serialize};

/// Cardinality of a relationship edge, read from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    OneToOne,
    ManyToOne,
    OneToMany,
}

impl Cardinality {
    /// Mermaid crow's-foot connector for this cardinality
    pub fn mermaid_symbol(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "||--||",
            Cardinality::ManyToOne => "}o--||",
            Cardinality::OneToMany => "||--o{",
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cardinality::OneToOne => write!(f, "one-to-one"),
            Cardinality::ManyToOne => write!(f, "many-to-one"),
            Cardinality::OneToMany => write!(f, "one-to-many"),
        }
    }
}

/// How a relationship was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipKind {
    /// From document nesting (nested object or array of objects)
    Structural,
    /// From a field name matching another table (`<table>` or `<table>_id`)
    NamingConvention,
}

/// A derived edge between two tables. Endpoint names are snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from: String,
    pub to: String,
    pub cardinality: Cardinality,
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn structural(from: String, to: String, cardinality: Cardinality) -> Self {
        Self {
            from,
            to,
            cardinality,
            kind: RelationshipKind::Structural,
        }
    }

    pub fn naming_convention(from: String, to: String, cardinality: Cardinality) -> Self {
        Self {
            from,
            to,
            cardinality,
            kind: RelationshipKind::NamingConvention,
        }
    }

    /// Edge label used in the diagram
    pub fn label(&self) -> &'static str {
        match (self.kind, self.cardinality) {
            (RelationshipKind::NamingConvention, _) => "references",
            (RelationshipKind::Structural, Cardinality::OneToMany) => "has many",
            (RelationshipKind::Structural, _) => "has one",
        }
    }
}
