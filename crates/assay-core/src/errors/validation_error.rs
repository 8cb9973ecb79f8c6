/// Input validation errors raised before any comparison or merge runs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{role} pattern is missing a pattern_id")]
    MissingPatternId { role: &'static str },

    #[error("pattern {pattern_id} cannot be compared with itself")]
    SelfComparison { pattern_id: String },

    #[error("merge not warranted for verdict {verdict}")]
    MergeNotWarranted { verdict: String },
}
