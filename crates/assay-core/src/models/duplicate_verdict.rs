use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical outcome of thresholding a composite similarity.
///
/// Variants are declared in increasing severity, so `Ord` compares severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateVerdict {
    Distinct,
    ConceptuallySimilar,
    NearDuplicate,
    ExactDuplicate,
}

impl DuplicateVerdict {
    /// Exact and near duplicates are merged into the existing pattern.
    pub fn is_mergeable(self) -> bool {
        matches!(self, Self::ExactDuplicate | Self::NearDuplicate)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Distinct => "distinct",
            Self::ConceptuallySimilar => "conceptually_similar",
            Self::NearDuplicate => "near_duplicate",
            Self::ExactDuplicate => "exact_duplicate",
        }
    }
}

impl fmt::Display for DuplicateVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
