//! JSON pattern library on disk: one pattern object (or an array of them)
//! per `*.json` file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::{debug, info, warn};

use assay_core::errors::{AssayError, AssayResult, LibraryError};
use assay_core::traits::IPatternStorage;
use assay_core::Pattern;

/// A file (or array element) that could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Patterns loaded from a directory, plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub patterns: Vec<Pattern>,
    pub failures: Vec<LoadFailure>,
}

/// Directory-backed pattern storage.
///
/// Remembers which file each loaded pattern came from, so saves and removals
/// go back to the same file even when it is not named after the pattern id.
pub struct JsonPatternDirectory {
    dir: PathBuf,
    locations: Mutex<HashMap<String, PathBuf>>,
}

impl JsonPatternDirectory {
    /// Open a library directory, creating it if missing.
    pub fn open(dir: impl Into<PathBuf>) -> AssayResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
        Ok(Self {
            dir,
            locations: Mutex::new(HashMap::new()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every `*.json` file in file-name order.
    ///
    /// Bad files are reported, not fatal: one broken entry must not hide
    /// the rest of the library.
    pub fn load(&self) -> AssayResult<LoadReport> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)
            .map_err(|e| io_err(&self.dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut report = LoadReport::default();
        let mut locations = HashMap::new();
        for path in paths {
            match read_file(&path) {
                Ok(patterns) => {
                    for pattern in patterns {
                        if pattern.has_id() {
                            locations
                                .entry(pattern.pattern_id.trim().to_string())
                                .or_insert_with(|| path.clone());
                        }
                        report.patterns.push(pattern);
                    }
                }
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "skipping unreadable pattern file");
                    report.failures.push(LoadFailure { path, reason });
                }
            }
        }

        *self.lock()? = locations;
        info!(
            dir = %self.dir.display(),
            loaded = report.patterns.len(),
            failed = report.failures.len(),
            "pattern library loaded"
        );
        Ok(report)
    }

    /// The file a pattern is (or would be) stored in.
    pub fn path_for(&self, pattern_id: &str) -> AssayResult<PathBuf> {
        Ok(self
            .lock()?
            .get(pattern_id.trim())
            .cloned()
            .unwrap_or_else(|| self.dir.join(format!("{}.json", file_stem(pattern_id)))))
    }

    fn lock(&self) -> AssayResult<MutexGuard<'_, HashMap<String, PathBuf>>> {
        self.locations
            .lock()
            .map_err(|e| AssayError::Concurrency(format!("library index lock poisoned: {e}")))
    }
}

impl IPatternStorage for JsonPatternDirectory {
    fn load_all(&self) -> AssayResult<Vec<Pattern>> {
        Ok(self.load()?.patterns)
    }

    fn save(&self, pattern: &Pattern) -> AssayResult<()> {
        let path = self.path_for(&pattern.pattern_id)?;
        let value = serde_json::to_value(pattern)?;

        // Array files are rewritten with the one element replaced. A file
        // owned by another pattern becomes an array holding both.
        let document = match read_value(&path) {
            Some(Value::Array(mut items)) => {
                match items.iter().position(|item| has_id(item, &pattern.pattern_id)) {
                    Some(i) => items[i] = value,
                    None => items.push(value),
                }
                Value::Array(items)
            }
            Some(existing @ Value::Object(_)) if !has_id(&existing, &pattern.pattern_id) => {
                warn!(
                    pattern_id = %pattern.pattern_id,
                    path = %path.display(),
                    "pattern file already holds another pattern, storing both"
                );
                Value::Array(vec![existing, value])
            }
            _ => value,
        };
        write_atomic(&path, &document)?;
        self.lock()?.insert(pattern.pattern_id.trim().to_string(), path.clone());
        debug!(pattern_id = %pattern.pattern_id, path = %path.display(), "pattern saved");
        Ok(())
    }

    fn remove(&self, pattern_id: &str) -> AssayResult<()> {
        let path = self.path_for(pattern_id)?;
        match read_value(&path) {
            Some(Value::Array(items)) => {
                let remaining: Vec<Value> = items.into_iter().filter(|i| !has_id(i, pattern_id)).collect();
                if remaining.is_empty() {
                    fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
                } else {
                    write_atomic(&path, &Value::Array(remaining))?;
                }
            }
            Some(value) if has_id(&value, pattern_id) => {
                fs::remove_file(&path).map_err(|e| io_err(&path, e))?
            }
            _ => {}
        }
        self.lock()?.remove(pattern_id.trim());
        debug!(pattern_id, path = %path.display(), "pattern removed");
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<Vec<Pattern>, String> {
    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let value: Value = serde_json::from_str(&source).map_err(|e| e.to_string())?;
    match value {
        Value::Object(_) => Ok(vec![Pattern::from_value(value).map_err(|e| e.to_string())?]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(_) => Pattern::from_value(item).map_err(|e| format!("element {i}: {e}")),
                _ => Err(format!("element {i} is not a pattern object")),
            })
            .collect(),
        _ => Err("expected a pattern object or an array of them".to_string()),
    }
}

fn read_value(path: &Path) -> Option<Value> {
    let source = fs::read_to_string(path).ok()?;
    serde_json::from_str(&source).ok()
}

/// Id match using the same coercion the loader applies.
fn has_id(value: &Value, pattern_id: &str) -> bool {
    let stored = match value.get("pattern_id") {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => return false,
    };
    !stored.is_empty() && stored == pattern_id.trim()
}

fn write_atomic(path: &Path, value: &Value) -> AssayResult<()> {
    let body = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(|e| io_err(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    Ok(())
}

/// Keep ids usable as file names. Rewritten ids carry a short hash of the
/// raw id so two ids never map to the same file.
fn file_stem(pattern_id: &str) -> String {
    let id = pattern_id.trim();
    let safe: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '_' })
        .collect();
    if safe == id {
        return safe;
    }
    let hash = blake3::hash(id.as_bytes()).to_hex().to_string();
    format!("{safe}-{}", &hash[..8])
}

fn io_err(path: &Path, e: std::io::Error) -> AssayError {
    LibraryError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
    .into()
}
