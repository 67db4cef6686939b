//! Persisted document access.
//!
//! The document is replaced wholesale by the offline scraper and re-read
//! on every request. Reads degrade: a missing file, unparseable JSON, or a
//! wrong-shaped document all yield an empty store rather than an error.
//! Only unexpected I/O faults (permissions and the like) surface to the
//! caller.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::metrics;
use crate::model::{InsightDocument, InsightRecord};

/// Marker value for `last_updated` when no usable document exists.
pub const NEVER_UPDATED: &str = "never";

/// Result of reading the persisted document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub last_updated: String,
    pub records: Vec<InsightRecord>,
    /// Items present in the file but rejected during validation. Kept as a
    /// diagnostic only; rejected items are not otherwise surfaced.
    pub dropped: usize,
}

impl LoadedDocument {
    fn empty() -> Self {
        Self {
            last_updated: NEVER_UPDATED.to_string(),
            records: Vec::new(),
            dropped: 0,
        }
    }
}

/// Read and validate the insight document at `path`.
///
/// Returns `Err` only for unexpected I/O faults; every data-quality
/// problem degrades to an empty result.
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("Data file not found at {}, returning empty store", path.display());
            return Ok(LoadedDocument::empty());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let root: Value = match serde_json::from_str(&raw) {
        Ok(root) => root,
        Err(err) => {
            error!("Invalid JSON in {}: {}", path.display(), err);
            return Ok(LoadedDocument::empty());
        }
    };

    let Some(object) = root.as_object() else {
        error!("Invalid document structure in {}: top level is not an object", path.display());
        return Ok(LoadedDocument::empty());
    };
    let Some(items) = object.get("items").and_then(Value::as_array) else {
        error!("Invalid document structure in {}: missing items array", path.display());
        return Ok(LoadedDocument::empty());
    };

    let mut records = Vec::with_capacity(items.len());
    let mut dropped = 0usize;
    for item in items {
        match validate_item(item) {
            Some(record) => records.push(record),
            None => {
                dropped += 1;
                debug!("Dropping invalid item: {}", item);
            }
        }
    }

    if dropped > 0 {
        warn!("Dropped {} invalid item(s) while loading {}", dropped, path.display());
    }
    metrics::set_records_loaded(records.len());
    metrics::add_records_dropped(dropped);

    let last_updated = object
        .get("last_updated")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    Ok(LoadedDocument {
        last_updated,
        records,
        dropped,
    })
}

/// The record sequence alone, for callers that do not need the document
/// wrapper.
pub fn load_records(path: &Path) -> Result<Vec<InsightRecord>> {
    Ok(load_document(path)?.records)
}

/// An item is admitted when it is an object whose `title`, `source`, and
/// `summary` are string values, with a non-empty `title`.
fn validate_item(item: &Value) -> Option<InsightRecord> {
    let object = item.as_object()?;
    for key in ["title", "source", "summary"] {
        object.get(key)?.as_str()?;
    }
    if object.get("title")?.as_str()?.is_empty() {
        return None;
    }
    serde_json::from_value(item.clone()).ok()
}

/// Persist a document via temp-file-plus-rename so concurrent readers see
/// either the old file or the new one, never a partial write.
pub fn write_document(path: &Path, document: &InsightDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let body = serde_json::to_vec_pretty(document).context("failed to serialize document")?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);
    fs::write(tmp, &body).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    Ok(())
}
