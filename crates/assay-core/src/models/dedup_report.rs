use serde::{Deserialize, Serialize};

use super::{DuplicateVerdict, SimilarityScore};

/// One non-distinct pair found by a library-wide scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePair {
    /// The pattern that appears first in library order; merges keep this id.
    pub first_id: String,
    pub second_id: String,
    pub score: SimilarityScore,
    pub verdict: DuplicateVerdict,
}

/// A pattern left out of a scan, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPattern {
    /// Position in the scanned slice.
    pub index: usize,
    pub pattern_id: String,
    pub reason: String,
}

/// Result of scanning a pattern library for near-duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DedupReport {
    pub patterns_scanned: usize,
    pub comparisons: usize,
    /// Sorted by composite descending, then by ids.
    pub pairs: Vec<DuplicatePair>,
    pub skipped: Vec<SkippedPattern>,
}

impl DedupReport {
    /// Pairs that warrant a merge.
    pub fn mergeable(&self) -> impl Iterator<Item = &DuplicatePair> {
        self.pairs.iter().filter(|p| p.verdict.is_mergeable())
    }

    /// Number of pairs with the given verdict.
    pub fn count(&self, verdict: DuplicateVerdict) -> usize {
        self.pairs.iter().filter(|p| p.verdict == verdict).count()
    }
}
