use std::collections::BTreeSet;

use super::{extract_business_keywords, Feasibility, Pattern};

/// Scoring view of a [`Pattern`]: case-folded sets with blanks removed.
///
/// Building one never fails. Missing collections are empty sets and
/// a blank domain or feasibility is treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPattern {
    pub pattern_id: String,
    pub domain: Option<String>,
    /// Lowercased raw feasibility label.
    pub feasibility: Option<String>,
    /// Parsed feasibility level, if the label is recognized.
    pub feasibility_level: Option<Feasibility>,
    pub pattern_type: BTreeSet<String>,
    pub tech_stack: BTreeSet<String>,
    pub compliance: BTreeSet<String>,
    pub business_keywords: BTreeSet<String>,
}

impl NormalizedPattern {
    pub fn from_pattern(pattern: &Pattern) -> Self {
        let feasibility = normalize_scalar(pattern.feasibility.as_deref());
        let feasibility_level = feasibility.as_deref().and_then(Feasibility::parse);
        Self {
            pattern_id: pattern.pattern_id.trim().to_string(),
            domain: normalize_scalar(pattern.domain.as_deref()),
            feasibility,
            feasibility_level,
            pattern_type: normalize_set(&pattern.pattern_type),
            tech_stack: normalize_set(&pattern.tech_stack),
            compliance: normalize_set(&pattern.compliance_requirements),
            business_keywords: extract_business_keywords(&pattern.description),
        }
    }
}

impl From<&Pattern> for NormalizedPattern {
    fn from(pattern: &Pattern) -> Self {
        Self::from_pattern(pattern)
    }
}

/// Case-fold and trim a list into a set, dropping blank entries.
pub fn normalize_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| normalize_key(v))
        .filter(|v| !v.is_empty())
        .collect()
}

/// Trimmed, lowercased comparison key.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalize_scalar(value: Option<&str>) -> Option<String> {
    value.map(normalize_key).filter(|v| !v.is_empty())
}
