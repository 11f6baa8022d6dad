//! Table candidates discovered from a JSON document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where in the document a table candidate was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableOrigin {
    /// A top-level key whose value is an object
    Root,
    /// A top-level key whose value is an array of objects
    RootArray,
    /// A nested object field of a root table
    Nested,
    /// An array-of-objects field of a root table
    Collection,
}

/// An inferred table together with the sample it was derived from.
///
/// `fields` holds one representative value per field, in document order.
/// The values are only used to infer column types, never as row data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCandidate {
    /// Table name exactly as it appears in the document
    pub name: String,
    /// Representative field set
    pub fields: Map<String, Value>,
    /// How the table was discovered
    pub origin: TableOrigin,
    /// Raw name of the table whose field introduced this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl TableCandidate {
    /// Create a top-level table candidate
    pub fn root(name: String, fields: Map<String, Value>, origin: TableOrigin) -> Self {
        Self {
            name,
            fields,
            origin,
            parent: None,
        }
    }

    /// Create a table candidate introduced by a field of `parent`
    pub fn child(
        name: String,
        fields: Map<String, Value>,
        origin: TableOrigin,
        parent: String,
    ) -> Self {
        Self {
            name,
            fields,
            origin,
            parent: Some(parent),
        }
    }
}

/// Returns the first element of `value` if it is a non-empty array whose
/// first element is an object
pub fn first_object_element(value: &Value) -> Option<&Map<String, Value>> {
    value.as_array()?.first()?.as_object()
}

/// Whether a field holds a non-empty array of objects
pub fn is_object_array(value: &Value) -> bool {
    first_object_element(value).is_some()
}
