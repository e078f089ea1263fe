//! Parse and validate an externally supplied backup document.
//!
//! Accepts either a bare JSON array of entries or an object with a
//! `mediaItems` array. Invalid entries are dropped without comment; only a
//! document with no valid entries at all is an error.

use lib4maria_catalog::{Clock, MediaEntry, is_valid_entry};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid file format: {0}")]
    MalformedDocument(String),
    #[error("No valid media items found in file")]
    NoValidEntries,
    #[error("Error reading file {path}: {source}")]
    FileReadFailure {
        path: String,
        source: std::io::Error,
    },
    #[error("An import is already in progress")]
    ImportInProgress,
}

impl ImportError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }
}

/// Counts from validating one document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    /// Entries present in the document.
    pub candidates: usize,
    /// Entries that passed validation.
    pub accepted: usize,
    /// Entries dropped by validation.
    pub skipped: usize,
}

/// A validated document, ready to merge.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedImport {
    pub entries: Vec<MediaEntry>,
    pub stats: ImportStats,
}

/// Parse `raw` and return the valid entries with fresh ids.
///
/// The clock is read once; the entry at position `i` among the survivors gets
/// id `now + i`, so ids are unique within the batch. They can still equal an
/// existing id if the catalog already holds ids in that range; see
/// [`merge_additive`](crate::merge_additive).
pub fn parse_import(raw: &str, clock: &dyn Clock) -> Result<Vec<MediaEntry>, ImportError> {
    parse_document(raw, clock).map(|parsed| parsed.entries)
}

/// Like [`parse_import`], but also reports how many candidates were dropped.
pub fn parse_document(raw: &str, clock: &dyn Clock) -> Result<ParsedImport, ImportError> {
    let doc: Value = serde_json::from_str(raw)
        .map_err(|e| ImportError::malformed(format!("not valid JSON ({e})")))?;

    let candidates = match doc {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("mediaItems") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ImportError::malformed(
                    "expected an array or an object with a `mediaItems` array",
                ));
            }
        },
        _ => {
            return Err(ImportError::malformed(
                "expected an array or an object with a `mediaItems` array",
            ));
        }
    };

    let total = candidates.len();
    let valid: Vec<Value> = candidates.into_iter().filter(is_valid_entry).collect();
    if valid.is_empty() {
        log::debug!("Import rejected: 0 of {} candidates valid", total);
        return Err(ImportError::NoValidEntries);
    }

    let timestamp = clock.now_millis();
    let entries: Vec<MediaEntry> = valid
        .into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| with_id(candidate, timestamp + index as i64))
        .collect();

    let stats = ImportStats {
        candidates: total,
        accepted: entries.len(),
        skipped: total - entries.len(),
    };
    log::debug!(
        "Import parsed: {} accepted, {} skipped",
        stats.accepted,
        stats.skipped
    );
    if entries.is_empty() {
        return Err(ImportError::NoValidEntries);
    }
    Ok(ParsedImport { entries, stats })
}

/// Replace the candidate's id and decode it. Fields beyond the known ones are
/// carried into [`MediaEntry::extra`].
fn with_id(candidate: Value, id: i64) -> Option<MediaEntry> {
    let Value::Object(mut obj) = candidate else {
        return None;
    };
    obj.insert("id".to_string(), Value::from(id));
    match serde_json::from_value(Value::Object(obj)) {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("Validated entry failed to decode: {}", e);
            None
        }
    }
}
