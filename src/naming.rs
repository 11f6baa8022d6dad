//! Identifier normalization between camelCase and snake_case

use serde::{Deserialize, Serialize};

/// Naming convention applied to emitted identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// Convert to snake_case
    #[default]
    Snake,
    /// Emit identifiers exactly as they appear in the document
    Preserve,
}

impl NameStyle {
    pub fn from_snake_case_flag(use_snake_case: bool) -> Self {
        if use_snake_case {
            NameStyle::Snake
        } else {
            NameStyle::Preserve
        }
    }

    pub fn apply(&self, identifier: &str) -> String {
        match self {
            NameStyle::Snake => normalize_name(identifier),
            NameStyle::Preserve => identifier.to_string(),
        }
    }
}

/// Convert an identifier to snake_case.
///
/// An underscore is inserted before every uppercase letter and the result is
/// lowercased. If the identifier started with an uppercase letter, the
/// underscore produced for it is dropped. Already normalized input is
/// returned unchanged.
///
/// ```rust
/// use json2sql::naming::normalize_name;
///
/// assert_eq!(normalize_name("shippingAddress"), "shipping_address");
/// assert_eq!(normalize_name("UserProfile"), "user_profile");
/// assert_eq!(normalize_name("team_member"), "team_member");
/// ```
pub fn normalize_name(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for ch in identifier.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    if identifier.starts_with(|c: char| c.is_ascii_uppercase()) {
        out.remove(0);
    }

    out
}
