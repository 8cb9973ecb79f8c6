//! Single-writer pattern library shared across requests.
//!
//! Readers take `Arc` snapshots and never block on writers. Writers are
//! serialized by an async mutex, build the next library off to the side,
//! persist it, then publish it as the new snapshot (read-copy-update).

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use assay_core::config::{defaults, AssayConfig};
use assay_core::errors::{AssayError, AssayResult, LibraryError};
use assay_core::models::DedupReport;
use assay_core::traits::{IEnhancementLog, IPatternStorage};
use assay_core::{EnhancementEntry, Pattern};
use assay_similarity::{DedupEngine, IntegrationAction, MergeOutcome, PatternMatch};

use crate::json_directory::JsonPatternDirectory;

/// How a submitted candidate ended up in the library.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The candidate was merged into an existing pattern and discarded.
    Enhanced {
        pattern: Pattern,
        matched: PatternMatch,
        entry: Option<EnhancementEntry>,
    },
    /// The candidate was stored as a new pattern.
    Created {
        pattern: Pattern,
        closest: Option<PatternMatch>,
    },
}

impl Resolution {
    /// The pattern as it now stands in the library.
    pub fn pattern(&self) -> &Pattern {
        match self {
            Self::Enhanced { pattern, .. } | Self::Created { pattern, .. } => pattern,
        }
    }
}

/// Shared pattern library with a single-writer discipline.
pub struct PatternStore {
    engine: DedupEngine,
    snapshot: RwLock<Arc<Vec<Pattern>>>,
    writer: Mutex<()>,
    storage: Option<Arc<dyn IPatternStorage>>,
    id_prefix: String,
}

impl PatternStore {
    /// In-memory store over an initial set of patterns.
    pub fn new(engine: DedupEngine, patterns: Vec<Pattern>) -> Self {
        Self {
            engine,
            snapshot: RwLock::new(Arc::new(patterns)),
            writer: Mutex::new(()),
            storage: None,
            id_prefix: defaults::DEFAULT_PATTERN_ID_PREFIX.to_string(),
        }
    }

    /// Store backed by persistent storage; loads the current library.
    pub fn with_storage(engine: DedupEngine, storage: Arc<dyn IPatternStorage>) -> AssayResult<Self> {
        let patterns = storage.load_all()?;
        let mut store = Self::new(engine, patterns);
        store.storage = Some(storage);
        Ok(store)
    }

    /// Build a store from configuration: JSON directory storage at
    /// `library.pattern_dir`, scoring from `scoring`.
    pub fn from_config(config: &AssayConfig, log: Arc<dyn IEnhancementLog>) -> AssayResult<Self> {
        let engine = DedupEngine::new(config.scoring.clone(), log)?;
        let storage = Arc::new(JsonPatternDirectory::open(&config.library.pattern_dir)?);
        Ok(Self::with_storage(engine, storage)?.with_id_prefix(&config.library.pattern_id_prefix))
    }

    /// Prefix for ids assigned to new patterns submitted without one.
    pub fn with_id_prefix(mut self, prefix: &str) -> Self {
        self.id_prefix = prefix.to_string();
        self
    }

    pub fn engine(&self) -> &DedupEngine {
        &self.engine
    }

    /// Current library. Cheap; never waits for a writer.
    pub fn snapshot(&self) -> AssayResult<Arc<Vec<Pattern>>> {
        self.snapshot
            .read()
            .map(|guard| Arc::clone(&*guard))
            .map_err(|e| AssayError::Concurrency(format!("snapshot lock poisoned: {e}")))
    }

    pub fn len(&self) -> AssayResult<usize> {
        Ok(self.snapshot()?.len())
    }

    pub fn is_empty(&self) -> AssayResult<bool> {
        Ok(self.snapshot()?.is_empty())
    }

    pub fn get(&self, pattern_id: &str) -> AssayResult<Option<Pattern>> {
        Ok(self
            .snapshot()?
            .iter()
            .find(|p| p.pattern_id == pattern_id)
            .cloned())
    }

    /// Near-duplicate report over the current snapshot.
    pub fn dedup_report(&self) -> AssayResult<DedupReport> {
        Ok(self.engine.scan_library(&self.snapshot()?))
    }

    /// Enhance an existing pattern with `candidate`, or add it as new.
    pub async fn submit(&self, candidate: Pattern, session_id: &str) -> AssayResult<Resolution> {
        let _guard = self.writer.lock().await;
        self.resolve(candidate, session_id)
    }

    /// Blocking variant of [`submit`](Self::submit) for non-async callers.
    ///
    /// # Panics
    /// Panics if called from within an async runtime context.
    pub fn submit_blocking(&self, candidate: Pattern, session_id: &str) -> AssayResult<Resolution> {
        let _guard = self.writer.blocking_lock();
        self.resolve(candidate, session_id)
    }

    /// Merge every exact/near-duplicate pair in the library.
    ///
    /// The earlier pattern of each pair absorbs the later one, which is
    /// removed. A pattern takes part in at most one merge per call, so run
    /// again to collapse chains.
    ///
    /// Every survivor is saved before any absorbed pattern is removed, so a
    /// storage failure part-way leaves redundant files, never lost ones. On
    /// failure the snapshot is left unpublished while the enhancement
    /// entries already recorded stay in the log.
    pub async fn merge_duplicates(&self, session_id: &str) -> AssayResult<Vec<MergeOutcome>> {
        let _guard = self.writer.lock().await;
        let current = self.snapshot()?;
        let report = self.engine.scan_library(&current);

        let mut working: Vec<Pattern> = current.as_ref().clone();
        let mut involved: HashSet<String> = HashSet::new();
        let mut absorbed: HashSet<String> = HashSet::new();
        let mut outcomes = Vec::new();

        for pair in report.mergeable() {
            if involved.contains(&pair.first_id) || involved.contains(&pair.second_id) {
                continue;
            }
            let (Some(i), Some(j)) = (
                position(&working, &pair.first_id),
                position(&working, &pair.second_id),
            ) else {
                continue;
            };
            let outcome = self.engine.merge(&working[i], &working[j], session_id)?;
            working[i] = outcome.pattern.clone();
            involved.insert(pair.first_id.clone());
            involved.insert(pair.second_id.clone());
            absorbed.insert(pair.second_id.clone());
            outcomes.push(outcome);
        }

        if outcomes.is_empty() {
            return Ok(outcomes);
        }

        working.retain(|p| !absorbed.contains(&p.pattern_id));
        if let Some(storage) = &self.storage {
            for outcome in outcomes.iter().filter(|o| o.changed()) {
                storage.save(&outcome.pattern)?;
            }
            for id in &absorbed {
                storage.remove(id)?;
            }
        }
        self.publish(working)?;

        info!(
            merged = outcomes.len(),
            removed = absorbed.len(),
            "library duplicates merged"
        );
        Ok(outcomes)
    }

    /// Score → classify → (merge | insert). Caller holds the writer lock.
    ///
    /// The enhancement entry is recorded before storage is written; a
    /// storage failure leaves the entry in place and the snapshot unchanged.
    fn resolve(&self, mut candidate: Pattern, session_id: &str) -> AssayResult<Resolution> {
        let current = self.snapshot()?;

        if candidate.has_id() {
            candidate.pattern_id = candidate.pattern_id.trim().to_string();
            if position(&current, &candidate.pattern_id).is_some() {
                return Err(LibraryError::DuplicatePatternId {
                    pattern_id: candidate.pattern_id,
                }
                .into());
            }
        } else {
            candidate.pattern_id = self.next_id(&current);
        }

        match self.engine.find_match(&candidate, &current)? {
            IntegrationAction::Enhance(matched) => {
                let outcome = self.engine.merge(&current[matched.index], &candidate, session_id)?;
                if outcome.changed() {
                    if let Some(storage) = &self.storage {
                        storage.save(&outcome.pattern)?;
                    }
                    let mut next = current.as_ref().clone();
                    next[matched.index] = outcome.pattern.clone();
                    self.publish(next)?;
                }
                Ok(Resolution::Enhanced {
                    pattern: outcome.pattern,
                    matched,
                    entry: outcome.entry,
                })
            }
            IntegrationAction::Create { closest } => {
                if let Some(storage) = &self.storage {
                    storage.save(&candidate)?;
                }
                let mut next = current.as_ref().clone();
                next.push(candidate.clone());
                self.publish(next)?;
                info!(pattern_id = %candidate.pattern_id, session_id, "pattern created");
                Ok(Resolution::Created {
                    pattern: candidate,
                    closest,
                })
            }
        }
    }

    fn next_id(&self, current: &[Pattern]) -> String {
        loop {
            let suffix = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
            let id = format!("{}-{}", self.id_prefix, suffix);
            if position(current, &id).is_none() {
                return id;
            }
            warn!(%id, "generated pattern id collided, retrying");
        }
    }

    fn publish(&self, patterns: Vec<Pattern>) -> AssayResult<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|e| AssayError::Concurrency(format!("snapshot lock poisoned: {e}")))?;
        *guard = Arc::new(patterns);
        Ok(())
    }
}

fn position(patterns: &[Pattern], pattern_id: &str) -> Option<usize> {
    let pattern_id = pattern_id.trim();
    patterns.iter().position(|p| p.pattern_id.trim() == pattern_id)
}
