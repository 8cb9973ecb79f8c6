//! Feasibility alignment on the automatable → not-automatable scale.

use assay_core::config::ScoringConfig;
use assay_core::NormalizedPattern;

/// 1.0 for equal levels, `adjacent_feasibility_score` for neighbouring
/// levels (when adjacency is enabled), else 0.0.
///
/// Two absent labels align; one absent label does not. Unrecognized labels
/// only align with an identical label.
pub fn feasibility_alignment(
    a: &NormalizedPattern,
    b: &NormalizedPattern,
    config: &ScoringConfig,
) -> f64 {
    match (&a.feasibility, &b.feasibility) {
        (None, None) => 1.0,
        (None, Some(_)) | (Some(_), None) => 0.0,
        (Some(raw_a), Some(raw_b)) => match (a.feasibility_level, b.feasibility_level) {
            (Some(la), Some(lb)) if la == lb => 1.0,
            (Some(la), Some(lb)) if config.feasibility_adjacency && la.is_adjacent(lb) => {
                config.adjacent_feasibility_score
            }
            (Some(_), Some(_)) => 0.0,
            _ => {
                if raw_a == raw_b {
                    1.0
                } else {
                    0.0
                }
            }
        },
    }
}
