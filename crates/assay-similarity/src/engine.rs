//! DedupEngine: score → classify → (merge | no-op), plus library-wide scans.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use assay_core::config::ScoringConfig;
use assay_core::errors::{AssayResult, ValidationError};
use assay_core::models::{DedupReport, DuplicatePair, SkippedPattern};
use assay_core::traits::IEnhancementLog;
use assay_core::{DuplicateVerdict, NormalizedPattern, Pattern, SimilarityScore};

use crate::classifier::DuplicateClassifier;
use crate::integration::{IntegrationAction, PatternMatch};
use crate::merger::{MergeOutcome, PatternMerger};
use crate::scorer::SimilarityScorer;

/// Scored and classified comparison of two patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub score: SimilarityScore,
    pub verdict: DuplicateVerdict,
}

/// The deduplication engine.
///
/// Holds no pattern state. Scans are pure; only [`merge`](Self::merge)
/// has a side effect (the enhancement log entry).
pub struct DedupEngine {
    scorer: SimilarityScorer,
    classifier: DuplicateClassifier,
    merger: PatternMerger,
}

impl DedupEngine {
    /// Create an engine from a validated scoring config.
    pub fn new(config: ScoringConfig, log: Arc<dyn IEnhancementLog>) -> AssayResult<Self> {
        let classifier = DuplicateClassifier::from_config(&config);
        let scorer = SimilarityScorer::new(config)?;
        Ok(Self {
            scorer,
            classifier,
            merger: PatternMerger::new(log),
        })
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    pub fn classifier(&self) -> &DuplicateClassifier {
        &self.classifier
    }

    pub fn merger(&self) -> &PatternMerger {
        &self.merger
    }

    /// Score and classify two distinct patterns.
    pub fn compare(&self, a: &Pattern, b: &Pattern) -> AssayResult<Comparison> {
        if !a.has_id() {
            return Err(ValidationError::MissingPatternId { role: "first" }.into());
        }
        if !b.has_id() {
            return Err(ValidationError::MissingPatternId { role: "second" }.into());
        }
        if a.pattern_id.trim() == b.pattern_id.trim() {
            return Err(ValidationError::SelfComparison {
                pattern_id: a.pattern_id.clone(),
            }
            .into());
        }
        let score = self.scorer.score(a, b);
        let verdict = self.classifier.classify(&score);
        debug!(
            first = %a.pattern_id,
            second = %b.pattern_id,
            composite = score.composite,
            verdict = %verdict,
            "patterns compared"
        );
        Ok(Comparison { score, verdict })
    }

    /// Scan `library` for the pattern most similar to `candidate`.
    ///
    /// Library entries without an id, or with the candidate's id, are
    /// skipped. Ties keep the earliest library entry.
    pub fn find_match(&self, candidate: &Pattern, library: &[Pattern]) -> AssayResult<IntegrationAction> {
        if !candidate.has_id() {
            return Err(ValidationError::MissingPatternId { role: "candidate" }.into());
        }
        let candidate_id = candidate.pattern_id.trim();
        let normalized = NormalizedPattern::from_pattern(candidate);

        let mut best: Option<PatternMatch> = None;
        for (index, existing) in library.iter().enumerate() {
            if !existing.has_id() || existing.pattern_id.trim() == candidate_id {
                debug!(index, pattern_id = %existing.pattern_id, "skipping library entry");
                continue;
            }
            let score = self
                .scorer
                .score_normalized(&NormalizedPattern::from_pattern(existing), &normalized);
            let better = best
                .as_ref()
                .map_or(true, |b| score.composite > b.score.composite);
            if better {
                best = Some(PatternMatch {
                    existing_id: existing.pattern_id.clone(),
                    index,
                    verdict: self.classifier.classify(&score),
                    score,
                });
            }
        }

        let action = IntegrationAction::from_best(best);
        match &action {
            IntegrationAction::Enhance(m) => info!(
                candidate = %candidate.pattern_id,
                existing = %m.existing_id,
                composite = m.score.composite,
                verdict = %m.verdict,
                "candidate matches existing pattern"
            ),
            IntegrationAction::Create { closest } => info!(
                candidate = %candidate.pattern_id,
                closest = closest.as_ref().map(|m| m.existing_id.as_str()).unwrap_or("-"),
                closest_composite = closest.as_ref().map_or(0.0, |m| m.score.composite),
                "no duplicate found"
            ),
        }
        Ok(action)
    }

    /// Merge `candidate` into `existing`, emitting an enhancement entry.
    pub fn merge(&self, existing: &Pattern, candidate: &Pattern, session_id: &str) -> AssayResult<MergeOutcome> {
        self.merger.merge(existing, candidate, session_id)
    }

    /// Compare every pair of library patterns and report the non-distinct ones.
    ///
    /// Patterns without an id, and repeats of an id already seen, are left
    /// out and listed in [`DedupReport::skipped`].
    pub fn scan_library(&self, patterns: &[Pattern]) -> DedupReport {
        let _span = info_span!("assay.dedup_scan", patterns = patterns.len()).entered();

        let mut skipped = Vec::new();
        let mut seen = HashSet::new();
        let mut eligible: Vec<NormalizedPattern> = Vec::with_capacity(patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            if !pattern.has_id() {
                skipped.push(SkippedPattern {
                    index,
                    pattern_id: pattern.pattern_id.clone(),
                    reason: "missing pattern_id".to_string(),
                });
                continue;
            }
            let normalized = NormalizedPattern::from_pattern(pattern);
            if !seen.insert(normalized.pattern_id.clone()) {
                skipped.push(SkippedPattern {
                    index,
                    pattern_id: pattern.pattern_id.clone(),
                    reason: "duplicate pattern_id".to_string(),
                });
                continue;
            }
            eligible.push(normalized);
        }

        let n = eligible.len();
        let mut pairs: Vec<DuplicatePair> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                let eligible = &eligible;
                ((i + 1)..n).filter_map(move |j| {
                    let score = self.scorer.score_normalized(&eligible[i], &eligible[j]);
                    let verdict = self.classifier.classify(&score);
                    (verdict != DuplicateVerdict::Distinct).then(|| DuplicatePair {
                        first_id: eligible[i].pattern_id.clone(),
                        second_id: eligible[j].pattern_id.clone(),
                        score,
                        verdict,
                    })
                })
            })
            .collect();

        pairs.sort_by(|a, b| {
            b.score
                .composite
                .total_cmp(&a.score.composite)
                .then_with(|| a.first_id.cmp(&b.first_id))
                .then_with(|| a.second_id.cmp(&b.second_id))
        });

        let report = DedupReport {
            patterns_scanned: n,
            comparisons: n * n.saturating_sub(1) / 2,
            pairs,
            skipped,
        };
        info!(
            scanned = report.patterns_scanned,
            comparisons = report.comparisons,
            exact = report.count(DuplicateVerdict::ExactDuplicate),
            near = report.count(DuplicateVerdict::NearDuplicate),
            conceptual = report.count(DuplicateVerdict::ConceptuallySimilar),
            skipped = report.skipped.len(),
            "library dedup scan complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use assay_core::EnhancementEntry;

    #[derive(Default)]
    struct VecLog(Mutex<Vec<EnhancementEntry>>);

    impl IEnhancementLog for VecLog {
        fn record(&self, entry: EnhancementEntry) -> AssayResult<()> {
            self.0.lock().unwrap().push(entry);
            Ok(())
        }
        fn entries_for(&self, pattern_id: &str) -> AssayResult<Vec<EnhancementEntry>> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.pattern_id == pattern_id)
                .cloned()
                .collect())
        }
    }

    fn engine() -> DedupEngine {
        DedupEngine::new(ScoringConfig::default(), Arc::new(VecLog::default())).unwrap()
    }

    fn finance(id: &str, description: &str) -> Pattern {
        let mut p = Pattern::new(id);
        p.domain = Some("finance".into());
        p.description = description.into();
        p.feasibility = Some("Automatable".into());
        p.pattern_type = vec!["workflow_automation".into()];
        p
    }

    #[test]
    fn compare_rejects_self() {
        let p = Pattern::new("PAT-001");
        assert!(engine().compare(&p, &p).is_err());
    }

    #[test]
    fn compare_rejects_missing_ids() {
        let err = engine().compare(&Pattern::new("A"), &Pattern::default()).unwrap_err();
        assert!(err.to_string().contains("second"));
    }

    #[test]
    fn find_match_skips_same_id_and_unidentified_entries() {
        let candidate = finance("PAT-001", "invoice approval");
        let library = vec![Pattern::default(), candidate.clone()];
        let action = engine().find_match(&candidate, &library).unwrap();
        assert_eq!(action, IntegrationAction::Create { closest: None });
    }

    #[test]
    fn find_match_prefers_highest_composite_then_earliest() {
        let candidate = finance("NEW", "invoice approval");
        let library = vec![
            finance("PAT-001", "payroll"),
            finance("PAT-002", "invoice approval"),
            finance("PAT-003", "invoice approval"),
        ];
        match engine().find_match(&candidate, &library).unwrap() {
            IntegrationAction::Enhance(m) => {
                assert_eq!(m.existing_id, "PAT-002");
                assert_eq!(m.index, 1);
                assert_eq!(m.verdict, DuplicateVerdict::ExactDuplicate);
            }
            other => panic!("expected Enhance, got {other:?}"),
        }
    }

    #[test]
    fn scan_reports_skips() {
        let library = vec![
            finance("PAT-001", "invoice"),
            Pattern::default(),
            finance("PAT-001", "invoice"),
        ];
        let report = engine().scan_library(&library);
        assert_eq!(report.patterns_scanned, 1);
        assert_eq!(report.comparisons, 0);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].index, 1);
        assert_eq!(report.skipped[1].reason, "duplicate pattern_id");
    }

    #[test]
    fn scan_orders_pairs_by_composite() {
        let library = vec![
            finance("PAT-001", "invoice approval"),
            finance("PAT-002", "invoice approval"),
            finance("PAT-003", "invoice payment"),
        ];
        let report = engine().scan_library(&library);
        assert_eq!(report.comparisons, 3);
        assert_eq!(report.pairs[0].first_id, "PAT-001");
        assert_eq!(report.pairs[0].second_id, "PAT-002");
        assert_eq!(report.pairs[0].verdict, DuplicateVerdict::ExactDuplicate);
        for window in report.pairs.windows(2) {
            assert!(window[0].score.composite >= window[1].score.composite);
        }
    }
}
