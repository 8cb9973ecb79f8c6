use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern library configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory holding one JSON file per pattern.
    pub pattern_dir: String,
    /// Prefix for ids assigned to newly created patterns.
    pub pattern_id_prefix: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            pattern_dir: defaults::DEFAULT_PATTERN_DIR.to_string(),
            pattern_id_prefix: defaults::DEFAULT_PATTERN_ID_PREFIX.to_string(),
        }
    }
}
