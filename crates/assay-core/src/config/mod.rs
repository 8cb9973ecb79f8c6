pub mod defaults;
mod library_config;
mod observability_config;
mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use library_config::LibraryConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use crate::errors::{AssayError, AssayResult, LibraryError};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssayConfig {
    pub scoring: ScoringConfig,
    pub library: LibraryConfig,
    pub observability: ObservabilityConfig,
}

impl AssayConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> AssayResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| AssayError::Config {
            reason: e.to_string(),
        })?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> AssayResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| LibraryError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }
}
