use serde::{Deserialize, Serialize};

/// Component and composite similarity between two patterns.
///
/// Every component lies in [0.0, 1.0]. `tech_stack` is reported for
/// auditing but does not contribute to `composite`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    /// Jaccard overlap of extracted business-process keywords.
    pub business_process: f64,
    /// 1.0 when domains match case-insensitively, else 0.0.
    pub domain: f64,
    /// Jaccard overlap of pattern-type tags.
    pub pattern_type: f64,
    /// 1.0 equal, partial credit when adjacent, else 0.0.
    pub feasibility: f64,
    /// Jaccard overlap of compliance requirements.
    pub compliance: f64,
    /// Jaccard overlap of tech stacks.
    pub tech_stack: f64,
    /// Weighted blend of the first five components, in [0.0, 1.0].
    pub composite: f64,
}

impl SimilarityScore {
    /// Composite as a percentage, for log lines and reports.
    pub fn percent(&self) -> f64 {
        self.composite * 100.0
    }
}
