//! DuplicateClassifier: fixed-threshold verdicts with inclusive lower bounds.

use assay_core::config::ScoringConfig;
use assay_core::{DuplicateVerdict, SimilarityScore};

/// Maps a composite similarity to a [`DuplicateVerdict`].
///
/// A composite exactly on a threshold gets the more severe verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateClassifier {
    exact: f64,
    near: f64,
    conceptual: f64,
}

impl DuplicateClassifier {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            exact: config.exact_duplicate_threshold,
            near: config.near_duplicate_threshold,
            conceptual: config.conceptual_threshold,
        }
    }

    pub fn classify(&self, score: &SimilarityScore) -> DuplicateVerdict {
        self.classify_composite(score.composite)
    }

    /// Total over [0, 1]; NaN is distinct.
    pub fn classify_composite(&self, composite: f64) -> DuplicateVerdict {
        if composite >= self.exact {
            DuplicateVerdict::ExactDuplicate
        } else if composite >= self.near {
            DuplicateVerdict::NearDuplicate
        } else if composite >= self.conceptual {
            DuplicateVerdict::ConceptuallySimilar
        } else {
            DuplicateVerdict::Distinct
        }
    }
}

impl Default for DuplicateClassifier {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        let c = DuplicateClassifier::default();
        assert_eq!(c.classify_composite(0.99), DuplicateVerdict::ExactDuplicate);
        assert_eq!(c.classify_composite(0.95), DuplicateVerdict::NearDuplicate);
        assert_eq!(c.classify_composite(0.70), DuplicateVerdict::ConceptuallySimilar);
    }

    #[test]
    fn just_below_boundaries() {
        let c = DuplicateClassifier::default();
        assert_eq!(c.classify_composite(0.989999), DuplicateVerdict::NearDuplicate);
        assert_eq!(c.classify_composite(0.949999), DuplicateVerdict::ConceptuallySimilar);
        assert_eq!(c.classify_composite(0.699999), DuplicateVerdict::Distinct);
    }

    #[test]
    fn extremes() {
        let c = DuplicateClassifier::default();
        assert_eq!(c.classify_composite(1.0), DuplicateVerdict::ExactDuplicate);
        assert_eq!(c.classify_composite(0.0), DuplicateVerdict::Distinct);
        assert_eq!(c.classify_composite(f64::NAN), DuplicateVerdict::Distinct);
    }

    #[test]
    fn custom_thresholds() {
        let config = ScoringConfig {
            conceptual_threshold: 0.5,
            ..ScoringConfig::default()
        };
        let c = DuplicateClassifier::from_config(&config);
        assert_eq!(c.classify_composite(0.55), DuplicateVerdict::ConceptuallySimilar);
    }
}
