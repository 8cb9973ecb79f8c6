//! PatternMerger: union-based enhancement of an existing pattern.
//!
//! The existing pattern keeps its id; the candidate is discarded. Callers
//! sharing a pattern list across requests must serialize merges into the
//! same pattern (see `assay-library`'s `PatternStore`).

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use assay_core::errors::{AssayResult, ValidationError};
use assay_core::pattern::normalized::normalize_key;
use assay_core::traits::IEnhancementLog;
use assay_core::{DuplicateVerdict, EnhancementEntry, Pattern};

/// Result of a successful merge.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The enhanced existing pattern.
    pub pattern: Pattern,
    /// The log entry emitted, or `None` when the candidate added nothing.
    pub entry: Option<EnhancementEntry>,
}

impl MergeOutcome {
    pub fn changed(&self) -> bool {
        self.entry.is_some()
    }
}

/// Merge `candidate` into a copy of `existing`.
///
/// Returns the enhanced pattern and, per field, the values that were
/// appended. Validation happens before any field is touched, so an error
/// means nothing was merged.
pub fn merge_patterns(
    existing: &Pattern,
    candidate: &Pattern,
) -> AssayResult<(Pattern, BTreeMap<String, Vec<String>>)> {
    if !existing.has_id() {
        return Err(ValidationError::MissingPatternId { role: "existing" }.into());
    }
    if !candidate.has_id() {
        return Err(ValidationError::MissingPatternId { role: "candidate" }.into());
    }
    if existing.pattern_id.trim() == candidate.pattern_id.trim() {
        return Err(ValidationError::SelfComparison {
            pattern_id: existing.pattern_id.clone(),
        }
        .into());
    }

    let mut merged = existing.clone();
    let mut fields_added = BTreeMap::new();

    let lists: [(&str, &mut Vec<String>, &[String]); 4] = [
        ("tech_stack", &mut merged.tech_stack, candidate.tech_stack.as_slice()),
        ("pattern_type", &mut merged.pattern_type, candidate.pattern_type.as_slice()),
        (
            "compliance_requirements",
            &mut merged.compliance_requirements,
            candidate.compliance_requirements.as_slice(),
        ),
        ("integrations", &mut merged.integrations, candidate.integrations.as_slice()),
    ];
    for (field, target, incoming) in lists {
        let added = union_in_order(target, incoming);
        if !added.is_empty() {
            fields_added.insert(field.to_string(), added);
        }
    }

    if let Some(incoming) = candidate.confidence_score {
        let raised = match merged.confidence_score {
            Some(current) => incoming > current,
            None => true,
        };
        if raised {
            merged.confidence_score = Some(incoming);
            fields_added.insert("confidence_score".to_string(), vec![incoming.to_string()]);
        }
    }

    Ok((merged, fields_added))
}

/// Append entries of `incoming` not already in `target` (case-insensitive),
/// keeping `target`'s order. Returns the appended values.
fn union_in_order(target: &mut Vec<String>, incoming: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = target.iter().map(|v| normalize_key(v)).collect();
    let mut added = Vec::new();
    for value in incoming {
        let key = normalize_key(value);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        let value = value.trim().to_string();
        target.push(value.clone());
        added.push(value);
    }
    added
}

/// Merges candidates into existing patterns and records each enhancement.
pub struct PatternMerger {
    log: Arc<dyn IEnhancementLog>,
}

impl PatternMerger {
    pub fn new(log: Arc<dyn IEnhancementLog>) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &Arc<dyn IEnhancementLog> {
        &self.log
    }

    /// Merge `candidate` into `existing` and emit an [`EnhancementEntry`]
    /// when at least one value was added.
    ///
    /// Not re-entrant for a shared pattern: two concurrent merges into the
    /// same existing pattern would each start from the same copy.
    pub fn merge(
        &self,
        existing: &Pattern,
        candidate: &Pattern,
        session_id: &str,
    ) -> AssayResult<MergeOutcome> {
        let (pattern, fields_added) = merge_patterns(existing, candidate)?;

        if fields_added.is_empty() {
            debug!(
                pattern_id = %existing.pattern_id,
                candidate_id = %candidate.pattern_id,
                "candidate added nothing new"
            );
            return Ok(MergeOutcome {
                pattern,
                entry: None,
            });
        }

        let entry = EnhancementEntry {
            pattern_id: pattern.pattern_id.clone(),
            source_pattern_id: candidate.pattern_id.clone(),
            session_id: session_id.to_string(),
            fields_added,
            timestamp: Utc::now(),
        };
        self.log.record(entry.clone())?;

        info!(
            pattern_id = %entry.pattern_id,
            candidate_id = %entry.source_pattern_id,
            session_id = %entry.session_id,
            values_added = entry.values_added(),
            "pattern enhanced"
        );

        Ok(MergeOutcome {
            pattern,
            entry: Some(entry),
        })
    }

    /// Like [`merge`](Self::merge), but only for exact or near duplicates.
    pub fn merge_with_verdict(
        &self,
        existing: &Pattern,
        candidate: &Pattern,
        verdict: DuplicateVerdict,
        session_id: &str,
    ) -> AssayResult<MergeOutcome> {
        if !verdict.is_mergeable() {
            return Err(ValidationError::MergeNotWarranted {
                verdict: verdict.to_string(),
            }
            .into());
        }
        self.merge(existing, candidate, session_id)
    }
}
