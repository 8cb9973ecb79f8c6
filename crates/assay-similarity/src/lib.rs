//! # assay-similarity
//!
//! Pattern deduplication: score → classify → (merge | no-op).
//! Weighted Jaccard-style scoring over business-process keywords, domain,
//! pattern type, feasibility and compliance; fixed-threshold verdicts;
//! order-preserving union merges with an append-only enhancement trail.

pub mod algorithms;
pub mod classifier;
pub mod engine;
pub mod integration;
pub mod merger;
pub mod scorer;

pub use classifier::DuplicateClassifier;
pub use engine::{Comparison, DedupEngine};
pub use integration::{IntegrationAction, PatternMatch};
pub use merger::{merge_patterns, MergeOutcome, PatternMerger};
pub use scorer::SimilarityScorer;
