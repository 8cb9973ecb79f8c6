//! Property tests for assay-similarity: symmetry, self-similarity, bounds,
//! threshold monotonicity, merge idempotence and identity preservation.

use std::sync::Arc;

use proptest::prelude::*;

use assay_core::config::ScoringConfig;
use assay_core::errors::AssayResult;
use assay_core::traits::IEnhancementLog;
use assay_core::{EnhancementEntry, Pattern};
use assay_similarity::{merge_patterns, DedupEngine, DuplicateClassifier, PatternMerger, SimilarityScorer};

struct NullLog;

impl IEnhancementLog for NullLog {
    fn record(&self, _entry: EnhancementEntry) -> AssayResult<()> {
        Ok(())
    }
    fn entries_for(&self, _pattern_id: &str) -> AssayResult<Vec<EnhancementEntry>> {
        Ok(Vec::new())
    }
}

const TECH: &[&str] = &["Python", "python", "Rust", "Kafka", "OAuth2", "AWS Lambda", "Redis", ""];
const TYPES: &[&str] = &["auth", "AUTH", "etl", "workflow_automation", "ticket_routing"];
const COMPLIANCE: &[&str] = &["SOX", "sox", "GDPR", "HIPAA", "CCPA"];
const DOMAINS: &[&str] = &["finance", "Finance", "hr", "banking", " "];
const FEASIBILITY: &[&str] = &[
    "Automatable",
    "Partially Automatable",
    "Not Automatable",
    "partial",
    "unknown",
];
const DESCRIPTIONS: &[&str] = &[
    "",
    "Invoice approval and payment",
    "customer onboarding with document verification",
    "Support ticket triage",
    "payroll report",
    "nothing relevant here",
];

fn pick_list(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(pool), 0..4)
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

fn pick_opt(pool: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(pool).prop_map(str::to_string))
}

fn arb_pattern(id: &'static str) -> impl Strategy<Value = Pattern> {
    (
        pick_list(TECH),
        pick_list(TYPES),
        pick_list(COMPLIANCE),
        pick_opt(DOMAINS),
        pick_opt(FEASIBILITY),
        prop::sample::select(DESCRIPTIONS),
        prop::option::of(0.0f64..=1.0),
    )
        .prop_map(move |(tech, types, compliance, domain, feasibility, description, confidence)| {
            let mut p = Pattern::new(id);
            p.tech_stack = tech;
            p.pattern_type = types;
            p.compliance_requirements = compliance;
            p.domain = domain;
            p.feasibility = feasibility;
            p.description = description.to_string();
            p.confidence_score = confidence;
            p
        })
}

fn engine() -> DedupEngine {
    DedupEngine::new(ScoringConfig::default(), Arc::new(NullLog)).unwrap()
}

proptest! {
    #[test]
    fn prop_symmetric(a in arb_pattern("A"), b in arb_pattern("B")) {
        let scorer = SimilarityScorer::default();
        let ab = scorer.score(&a, &b);
        let ba = scorer.score(&b, &a);
        prop_assert_eq!(ab.composite, ba.composite);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_self_similarity_is_one(a in arb_pattern("A")) {
        let scorer = SimilarityScorer::default();
        prop_assert_eq!(scorer.score(&a, &a).composite, 1.0);
    }

    #[test]
    fn prop_bounded(a in arb_pattern("A"), b in arb_pattern("B")) {
        let s = SimilarityScorer::default().score(&a, &b);
        for v in [s.business_process, s.domain, s.pattern_type, s.feasibility, s.compliance, s.tech_stack, s.composite] {
            prop_assert!((0.0..=1.0).contains(&v), "component {} out of range", v);
        }
    }

    #[test]
    fn prop_threshold_monotonic(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
        let c = DuplicateClassifier::default();
        let (hi, lo) = if x >= y { (x, y) } else { (y, x) };
        prop_assert!(c.classify_composite(hi) >= c.classify_composite(lo));
    }

    #[test]
    fn prop_classification_monotonic_over_scores(
        a in arb_pattern("A"),
        b in arb_pattern("B"),
        c in arb_pattern("C"),
    ) {
        let eng = engine();
        let ab = eng.compare(&a, &b).unwrap();
        let ac = eng.compare(&a, &c).unwrap();
        if ab.score.composite >= ac.score.composite {
            prop_assert!(ab.verdict >= ac.verdict);
        } else {
            prop_assert!(ab.verdict <= ac.verdict);
        }
    }

    #[test]
    fn prop_merge_idempotent(existing in arb_pattern("E"), candidate in arb_pattern("C")) {
        let (once, _) = merge_patterns(&existing, &candidate).unwrap();
        let (twice, added) = merge_patterns(&once, &candidate).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(added.is_empty());
    }

    #[test]
    fn prop_merge_preserves_identity(existing in arb_pattern("E"), candidate in arb_pattern("C")) {
        let merger = PatternMerger::new(Arc::new(NullLog));
        let outcome = merger.merge(&existing, &candidate, "prop").unwrap();
        prop_assert_eq!(outcome.pattern.pattern_id.as_str(), "E");
        // Existing values are kept, in order, as a prefix.
        prop_assert!(outcome.pattern.tech_stack.starts_with(&existing.tech_stack));
        prop_assert!(outcome.pattern.compliance_requirements.starts_with(&existing.compliance_requirements));
        prop_assert!(outcome.pattern.pattern_type.starts_with(&existing.pattern_type));
    }
}
