//! Models module
//!
//! Defines the data structures shared by discovery and the exporters.

pub mod column;
pub mod options;
pub mod relationship;
pub mod table;

pub use column::Column;
pub use options::{ConversionOptions, ConversionOptionsBuilder};
pub use relationship::{Cardinality, Relationship, RelationshipKind};
pub use table::{TableCandidate, TableOrigin, first_object_element, is_object_array};
