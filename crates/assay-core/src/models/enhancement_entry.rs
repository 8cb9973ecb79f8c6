use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry in the append-only pattern enhancement log.
///
/// Emitted each time a candidate is merged into an existing pattern and
/// actually contributes new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementEntry {
    /// The pattern that was enhanced. Never the candidate's id.
    pub pattern_id: String,
    /// The discarded candidate the values came from.
    pub source_pattern_id: String,
    pub session_id: String,
    /// Field name -> values appended to that field.
    pub fields_added: BTreeMap<String, Vec<String>>,
    pub timestamp: DateTime<Utc>,
}

impl EnhancementEntry {
    /// Total number of values appended across all fields.
    pub fn values_added(&self) -> usize {
        self.fields_added.values().map(Vec::len).sum()
    }
}
