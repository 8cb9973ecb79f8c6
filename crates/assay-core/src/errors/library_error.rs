/// Pattern library errors for load/save and lookup.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("I/O error at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("pattern not found: {pattern_id}")]
    PatternNotFound { pattern_id: String },

    #[error("duplicate pattern id in library: {pattern_id}")]
    DuplicatePatternId { pattern_id: String },
}
