//! Options controlling SQL generation

use serde::{Deserialize, Serialize};

use crate::naming::NameStyle;

/// Options for schema conversion. Every option defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Append `created_at` / `updated_at` columns and `created_at` indexes
    pub add_timestamps: bool,

    /// Prepend an `id SERIAL PRIMARY KEY` column
    pub add_primary_key: bool,

    /// Convert identifiers to snake_case
    pub use_snake_case: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            add_timestamps: true,
            add_primary_key: true,
            use_snake_case: true,
        }
    }
}

impl ConversionOptions {
    /// Create a builder for custom options
    pub fn builder() -> ConversionOptionsBuilder {
        ConversionOptionsBuilder::default()
    }

    /// Naming style implied by `use_snake_case`
    pub fn name_style(&self) -> NameStyle {
        NameStyle::from_snake_case_flag(self.use_snake_case)
    }
}

/// Builder for ConversionOptions
#[derive(Debug, Default)]
pub struct ConversionOptionsBuilder {
    options: ConversionOptions,
}

impl ConversionOptionsBuilder {
    pub fn add_timestamps(mut self, enabled: bool) -> Self {
        self.options.add_timestamps = enabled;
        self
    }

    pub fn add_primary_key(mut self, enabled: bool) -> Self {
        self.options.add_primary_key = enabled;
        self
    }

    pub fn use_snake_case(mut self, enabled: bool) -> Self {
        self.options.use_snake_case = enabled;
        self
    }

    pub fn build(self) -> ConversionOptions {
        self.options
    }
}
