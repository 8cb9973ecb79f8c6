// Single source of truth for all default values.

// --- Scoring weights (must sum to 1.0) ---
pub const DEFAULT_BUSINESS_PROCESS_WEIGHT: f64 = 0.4;
pub const DEFAULT_DOMAIN_WEIGHT: f64 = 0.2;
pub const DEFAULT_PATTERN_TYPE_WEIGHT: f64 = 0.2;
pub const DEFAULT_FEASIBILITY_WEIGHT: f64 = 0.1;
pub const DEFAULT_COMPLIANCE_WEIGHT: f64 = 0.1;

// --- Verdict thresholds (inclusive lower bounds) ---
pub const DEFAULT_EXACT_DUPLICATE_THRESHOLD: f64 = 0.99;
pub const DEFAULT_NEAR_DUPLICATE_THRESHOLD: f64 = 0.95;
pub const DEFAULT_CONCEPTUAL_THRESHOLD: f64 = 0.70;

// --- Feasibility alignment ---
pub const DEFAULT_FEASIBILITY_ADJACENCY: bool = true;
pub const DEFAULT_ADJACENT_FEASIBILITY_SCORE: f64 = 0.5;

// --- Library ---
pub const DEFAULT_PATTERN_DIR: &str = "data/patterns";
pub const DEFAULT_PATTERN_ID_PREFIX: &str = "PAT";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

/// Tolerance used when checking that the weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
