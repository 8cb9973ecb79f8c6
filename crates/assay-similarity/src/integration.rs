//! Integration decision: mergeable match → ENHANCE existing, else CREATE new.

use serde::Serialize;

use assay_core::{DuplicateVerdict, SimilarityScore};

/// The best library match found for a candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternMatch {
    pub existing_id: String,
    /// Position of the match in the scanned library slice.
    pub index: usize,
    pub score: SimilarityScore,
    pub verdict: DuplicateVerdict,
}

/// What to do with a new candidate pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum IntegrationAction {
    /// Merge the candidate into an existing pattern.
    Enhance(PatternMatch),
    /// Store the candidate as a new pattern. `closest` is the best
    /// non-mergeable match, if the library had any comparable pattern.
    Create { closest: Option<PatternMatch> },
}

impl IntegrationAction {
    /// Decide from the best match of a scan.
    pub fn from_best(best: Option<PatternMatch>) -> Self {
        match best {
            Some(m) if m.verdict.is_mergeable() => Self::Enhance(m),
            closest => Self::Create { closest },
        }
    }

    pub fn is_enhance(&self) -> bool {
        matches!(self, Self::Enhance(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match(composite: f64, verdict: DuplicateVerdict) -> PatternMatch {
        PatternMatch {
            existing_id: "PAT-001".into(),
            index: 0,
            score: SimilarityScore {
                business_process: composite,
                domain: composite,
                pattern_type: composite,
                feasibility: composite,
                compliance: composite,
                tech_stack: composite,
                composite,
            },
            verdict,
        }
    }

    #[test]
    fn creates_when_no_existing() {
        assert_eq!(
            IntegrationAction::from_best(None),
            IntegrationAction::Create { closest: None }
        );
    }

    #[test]
    fn enhances_when_near_duplicate() {
        let action = IntegrationAction::from_best(Some(make_match(0.96, DuplicateVerdict::NearDuplicate)));
        match action {
            IntegrationAction::Enhance(m) => assert_eq!(m.existing_id, "PAT-001"),
            _ => panic!("expected Enhance"),
        }
    }

    #[test]
    fn creates_but_reports_conceptual_match() {
        let action =
            IntegrationAction::from_best(Some(make_match(0.8, DuplicateVerdict::ConceptuallySimilar)));
        match action {
            IntegrationAction::Create { closest: Some(m) } => {
                assert_eq!(m.verdict, DuplicateVerdict::ConceptuallySimilar)
            }
            _ => panic!("expected Create with closest match"),
        }
    }
}
