use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;
use crate::errors::AssayResult;

/// A stored automation pattern from the pattern library.
///
/// Library JSON is loosely typed, so every field is optional on the way in.
/// Collection fields are coerced to lists of strings (see [`lenient`]) and
/// fields this type does not model are kept in `extra` so that a loaded
/// pattern can be written back without losing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique id. Empty means the pattern has not been assigned one yet.
    #[serde(default, deserialize_with = "lenient::pattern_id")]
    pub pattern_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::domain", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Automatable / Partially Automatable / Not Automatable.
    #[serde(default, deserialize_with = "lenient::feasibility", skip_serializing_if = "Option::is_none")]
    pub feasibility: Option<String>,
    #[serde(default, deserialize_with = "lenient::pattern_type")]
    pub pattern_type: Vec<String>,
    #[serde(default, deserialize_with = "lenient::tech_stack")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "lenient::compliance")]
    pub compliance_requirements: Vec<String>,
    #[serde(default, deserialize_with = "lenient::integrations")]
    pub integrations: Vec<String>,
    #[serde(default, deserialize_with = "lenient::input_requirements")]
    pub input_requirements: Vec<String>,
    #[serde(default, deserialize_with = "lenient::confidence", skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::complexity", skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    /// Unmodelled fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pattern {
    /// Create an otherwise empty pattern with the given id.
    pub fn new(pattern_id: impl Into<String>) -> Self {
        Self {
            pattern_id: pattern_id.into(),
            ..Self::default()
        }
    }

    /// Whether a non-blank `pattern_id` is present.
    pub fn has_id(&self) -> bool {
        !self.pattern_id.trim().is_empty()
    }

    /// Parse a single pattern from JSON text.
    pub fn from_json_str(source: &str) -> AssayResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Convert a parsed JSON value into a pattern.
    pub fn from_value(value: Value) -> AssayResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
