//! Append-only, in-process enhancement log.

use std::sync::Mutex;

use assay_core::errors::{AssayError, AssayResult};
use assay_core::traits::IEnhancementLog;
use assay_core::EnhancementEntry;

/// Enhancement log held in memory. Entries are only ever appended.
#[derive(Debug, Default)]
pub struct InMemoryEnhancementLog {
    entries: Mutex<Vec<EnhancementEntry>>,
}

impl InMemoryEnhancementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every entry, oldest first.
    pub fn all(&self) -> AssayResult<Vec<EnhancementEntry>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> AssayResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> AssayResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> AssayResult<std::sync::MutexGuard<'_, Vec<EnhancementEntry>>> {
        self.entries
            .lock()
            .map_err(|e| AssayError::Concurrency(format!("enhancement log lock poisoned: {e}")))
    }
}

impl IEnhancementLog for InMemoryEnhancementLog {
    fn record(&self, entry: EnhancementEntry) -> AssayResult<()> {
        self.lock()?.push(entry);
        Ok(())
    }

    fn entries_for(&self, pattern_id: &str) -> AssayResult<Vec<EnhancementEntry>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|e| e.pattern_id == pattern_id)
            .cloned()
            .collect())
    }
}
