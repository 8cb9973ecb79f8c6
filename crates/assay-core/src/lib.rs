//! # assay-core
//!
//! Foundation crate for the Assay pattern library.
//! Defines the pattern model, similarity/verdict types, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod pattern;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AssayConfig;
pub use errors::{AssayError, AssayResult};
pub use models::{DuplicateVerdict, EnhancementEntry, SimilarityScore};
pub use pattern::{Feasibility, NormalizedPattern, Pattern};
