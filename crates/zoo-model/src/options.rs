//! Configuration options for normalization and rendering.

use serde::{Deserialize, Serialize};

/// Literal used for every unknown field value.
pub const DEFAULT_SENTINEL: &str = "N/A";

/// Marker in the HTML template that receives the rendered cards.
pub const DEFAULT_PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// How to treat a record whose `characteristics` mapping is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacteristicsMode {
    /// Default `diet` and `type` to the sentinel, like every other field.
    #[default]
    Lenient,
    /// Reject the record and stop normalization.
    Strict,
}

/// Which placeholder occurrences in the template are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaceholderMode {
    /// Replace the first occurrence only.
    #[default]
    First,
    /// Replace every occurrence.
    All,
}

/// Options for record normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Value substituted for missing fields and exempt from formatting.
    pub sentinel: String,
    /// Handling of records without `characteristics`.
    pub characteristics: CharacteristicsMode,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            characteristics: CharacteristicsMode::default(),
        }
    }
}

impl NormalizationOptions {
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_characteristics(mut self, mode: CharacteristicsMode) -> Self {
        self.characteristics = mode;
        self
    }

    /// Strict options: records must carry a `characteristics` mapping.
    pub fn strict() -> Self {
        Self::default().with_characteristics(CharacteristicsMode::Strict)
    }
}

/// Options for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Token replaced by the rendered cards.
    pub placeholder: String,
    /// Replace the first or every occurrence of the token.
    pub placeholder_mode: PlaceholderMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_mode: PlaceholderMode::default(),
        }
    }
}

impl RenderOptions {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_placeholder_mode(mut self, mode: PlaceholderMode) -> Self {
        self.placeholder_mode = mode;
        self
    }
}
