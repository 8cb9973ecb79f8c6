pub mod dedup_report;
pub mod duplicate_verdict;
pub mod enhancement_entry;
pub mod similarity_score;

pub use dedup_report::{DedupReport, DuplicatePair, SkippedPattern};
pub use duplicate_verdict::DuplicateVerdict;
pub use enhancement_entry::EnhancementEntry;
pub use similarity_score::SimilarityScore;
