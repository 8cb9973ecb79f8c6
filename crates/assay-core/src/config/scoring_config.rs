use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{AssayError, AssayResult};

/// Weights and thresholds for pattern similarity scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of business-process keyword overlap.
    pub business_process_weight: f64,
    /// Weight of the domain match flag.
    pub domain_weight: f64,
    /// Weight of pattern-type overlap.
    pub pattern_type_weight: f64,
    /// Weight of feasibility alignment.
    pub feasibility_weight: f64,
    /// Weight of compliance overlap.
    pub compliance_weight: f64,
    /// Composite at or above this is an exact duplicate.
    pub exact_duplicate_threshold: f64,
    /// Composite at or above this is a near duplicate.
    pub near_duplicate_threshold: f64,
    /// Composite at or above this is conceptually similar.
    pub conceptual_threshold: f64,
    /// When false, feasibility alignment is exact-match only.
    pub feasibility_adjacency: bool,
    /// Score given to adjacent feasibility levels.
    pub adjacent_feasibility_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            business_process_weight: defaults::DEFAULT_BUSINESS_PROCESS_WEIGHT,
            domain_weight: defaults::DEFAULT_DOMAIN_WEIGHT,
            pattern_type_weight: defaults::DEFAULT_PATTERN_TYPE_WEIGHT,
            feasibility_weight: defaults::DEFAULT_FEASIBILITY_WEIGHT,
            compliance_weight: defaults::DEFAULT_COMPLIANCE_WEIGHT,
            exact_duplicate_threshold: defaults::DEFAULT_EXACT_DUPLICATE_THRESHOLD,
            near_duplicate_threshold: defaults::DEFAULT_NEAR_DUPLICATE_THRESHOLD,
            conceptual_threshold: defaults::DEFAULT_CONCEPTUAL_THRESHOLD,
            feasibility_adjacency: defaults::DEFAULT_FEASIBILITY_ADJACENCY,
            adjacent_feasibility_score: defaults::DEFAULT_ADJACENT_FEASIBILITY_SCORE,
        }
    }
}

impl ScoringConfig {
    /// The five composite weights in scoring order.
    pub fn weights(&self) -> [(&'static str, f64); 5] {
        [
            ("business_process_weight", self.business_process_weight),
            ("domain_weight", self.domain_weight),
            ("pattern_type_weight", self.pattern_type_weight),
            ("feasibility_weight", self.feasibility_weight),
            ("compliance_weight", self.compliance_weight),
        ]
    }

    /// Reject configurations that could push a composite outside [0, 1]
    /// or make the verdict bands overlap.
    pub fn validate(&self) -> AssayResult<()> {
        let mut sum = 0.0;
        for (name, weight) in self.weights() {
            if !(0.0..=1.0).contains(&weight) {
                return Err(AssayError::Config {
                    reason: format!("{name} = {weight} is outside [0, 1]"),
                });
            }
            sum += weight;
        }
        if (sum - 1.0).abs() > defaults::WEIGHT_SUM_TOLERANCE {
            return Err(AssayError::Config {
                reason: format!("scoring weights sum to {sum}, expected 1.0"),
            });
        }

        let ordered = 0.0 <= self.conceptual_threshold
            && self.conceptual_threshold <= self.near_duplicate_threshold
            && self.near_duplicate_threshold <= self.exact_duplicate_threshold
            && self.exact_duplicate_threshold <= 1.0;
        if !ordered {
            return Err(AssayError::Config {
                reason: format!(
                    "thresholds must satisfy 0 <= conceptual ({}) <= near ({}) <= exact ({}) <= 1",
                    self.conceptual_threshold,
                    self.near_duplicate_threshold,
                    self.exact_duplicate_threshold
                ),
            });
        }

        if !(0.0..=1.0).contains(&self.adjacent_feasibility_score) {
            return Err(AssayError::Config {
                reason: format!(
                    "adjacent_feasibility_score = {} is outside [0, 1]",
                    self.adjacent_feasibility_score
                ),
            });
        }
        Ok(())
    }
}
