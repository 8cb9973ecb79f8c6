use crate::errors::AssayResult;
use crate::models::EnhancementEntry;

/// Append-only sink for pattern enhancement events.
///
/// Storage is owned by the implementor; merges only emit entries.
pub trait IEnhancementLog: Send + Sync {
    /// Append an entry. Entries are never rewritten.
    fn record(&self, entry: EnhancementEntry) -> AssayResult<()>;

    /// All entries recorded for a pattern, oldest first.
    fn entries_for(&self, pattern_id: &str) -> AssayResult<Vec<EnhancementEntry>>;
}
