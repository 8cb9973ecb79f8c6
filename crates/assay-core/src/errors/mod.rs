mod library_error;
mod validation_error;

pub use library_error::LibraryError;
pub use validation_error::ValidationError;

/// Top-level error for the Assay workspace.
#[derive(Debug, thiserror::Error)]
pub enum AssayError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("pattern library error: {0}")]
    Library(#[from] LibraryError),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    Concurrency(String),
}

pub type AssayResult<T> = Result<T, AssayError>;
