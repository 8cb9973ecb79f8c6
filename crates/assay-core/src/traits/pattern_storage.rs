use crate::errors::AssayResult;
use crate::pattern::Pattern;

/// Persistence for the pattern library.
pub trait IPatternStorage: Send + Sync {
    /// Load every stored pattern, in a stable order.
    fn load_all(&self) -> AssayResult<Vec<Pattern>>;

    /// Create or overwrite the stored copy of a pattern.
    fn save(&self, pattern: &Pattern) -> AssayResult<()>;

    /// Delete the stored copy of a pattern. Removing an absent id is not an error.
    fn remove(&self, pattern_id: &str) -> AssayResult<()>;
}
