//! Animal record types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the animal data file, as read.
///
/// No schema is enforced. Every field keeps its raw JSON value so that the
/// normalizer can decide how to degrade when a field is missing or has an
/// unexpected shape. Keys other than these three are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Display name of the animal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Ordered list of locations; only the first one is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Value>,
    /// Mapping holding `diet` and `type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Value>,
}

impl RawRecord {
    /// Look up a key inside `characteristics`.
    ///
    /// Returns `None` when the key is absent and also when `characteristics`
    /// itself is absent or not an object. Use [`RawRecord::has_characteristics`]
    /// to tell those cases apart.
    pub fn characteristic(&self, key: &str) -> Option<&Value> {
        match &self.characteristics {
            Some(Value::Object(map)) => map.get(key),
            _ => None,
        }
    }

    /// True when `characteristics` is present and is an object.
    pub fn has_characteristics(&self) -> bool {
        matches!(self.characteristics, Some(Value::Object(_)))
    }

    /// First element of `locations`, if it is a non-empty array.
    pub fn first_location(&self) -> Option<&Value> {
        match &self.locations {
            Some(Value::Array(items)) => items.first(),
            _ => None,
        }
    }
}

/// The four display fields extracted from a [`RawRecord`].
///
/// Every field always holds a value; unknown values carry the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub name: String,
    pub diet: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AnimalRecord {
    pub fn new(
        name: impl Into<String>,
        diet: impl Into<String>,
        location: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            diet: diet.into(),
            location: location.into(),
            kind: kind.into(),
        }
    }
}
