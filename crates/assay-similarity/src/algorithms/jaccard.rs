//! Jaccard overlap with the vacuous-identity convention.

use std::collections::BTreeSet;

/// `|A ∩ B| / |A ∪ B|`. Two empty sets are identical (1.0).
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
