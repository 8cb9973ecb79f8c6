//! SimilarityScorer: weighted composite over five pattern components.

use assay_core::config::ScoringConfig;
use assay_core::constants::COMPOSITE_PRECISION;
use assay_core::errors::AssayResult;
use assay_core::{NormalizedPattern, Pattern, SimilarityScore};

use crate::algorithms::{feasibility_alignment, jaccard};

/// Pure pattern-to-pattern scorer.
///
/// `composite = w_bp*business_process + w_d*domain + w_pt*pattern_type
///  + w_f*feasibility + w_c*compliance`, clamped to [0, 1] and rounded to
/// [`COMPOSITE_PRECISION`] decimal places.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    config: ScoringConfig,
}

impl SimilarityScorer {
    /// Create a scorer, rejecting weights that do not sum to 1.0.
    pub fn new(config: ScoringConfig) -> AssayResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score two raw patterns.
    pub fn score(&self, a: &Pattern, b: &Pattern) -> SimilarityScore {
        self.score_normalized(&NormalizedPattern::from_pattern(a), &NormalizedPattern::from_pattern(b))
    }

    /// Score two already-normalized patterns. Used by library scans so each
    /// pattern is normalized once rather than once per pair.
    pub fn score_normalized(&self, a: &NormalizedPattern, b: &NormalizedPattern) -> SimilarityScore {
        let business_process = jaccard(&a.business_keywords, &b.business_keywords);
        let domain = if a.domain == b.domain { 1.0 } else { 0.0 };
        let pattern_type = jaccard(&a.pattern_type, &b.pattern_type);
        let feasibility = feasibility_alignment(a, b, &self.config);
        let compliance = jaccard(&a.compliance, &b.compliance);
        let tech_stack = jaccard(&a.tech_stack, &b.tech_stack);

        let c = &self.config;
        let raw = c.business_process_weight * business_process
            + c.domain_weight * domain
            + c.pattern_type_weight * pattern_type
            + c.feasibility_weight * feasibility
            + c.compliance_weight * compliance;

        SimilarityScore {
            business_process,
            domain,
            pattern_type,
            feasibility,
            compliance,
            tech_stack,
            composite: round_composite(raw),
        }
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

/// Clamp to [0, 1] and drop float noise so that sums like
/// 0.4 + 0.2 + 0.2 + 0.1 + 0.05 land exactly on 0.95.
fn round_composite(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    let scale = 10f64.powi(COMPOSITE_PRECISION);
    ((raw.clamp(0.0, 1.0) * scale).round() / scale).clamp(0.0, 1.0)
}
