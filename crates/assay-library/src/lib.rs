//! # assay-library
//!
//! Pattern library plumbing around the dedup engine: JSON directory storage,
//! an append-only enhancement log, the single-writer [`PatternStore`], and
//! tracing initialization.

pub mod enhancement_log;
pub mod json_directory;
pub mod observability;
pub mod store;

pub use enhancement_log::InMemoryEnhancementLog;
pub use json_directory::{JsonPatternDirectory, LoadFailure, LoadReport};
pub use store::{PatternStore, Resolution};
