//! Feedback file read/write helpers
//!
//! The durable feedback store is a single pretty-printed JSON array. Both
//! services share these helpers: ondo-web appends through its single-writer
//! store, ondo-ml reads the file fresh on every prediction.

use crate::error::{Error, Result};
use crate::types::FeedbackEntry;
use std::path::Path;
use tracing::warn;

/// Read the whole feedback collection.
///
/// A missing file is an empty collection, not an error. Any other read or
/// parse failure is logged and also treated as empty, so a torn or corrupt
/// file never takes the service down.
pub fn read_entries(path: &Path) -> Vec<FeedbackEntry> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Failed to read feedback file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    if data.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to parse feedback file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Rewrite the whole feedback collection, pretty-printed.
pub fn write_entries(path: &Path, entries: &[FeedbackEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| Error::Persistence(format!("serialize feedback: {}", e)))?;
    std::fs::write(path, json)
        .map_err(|e| Error::Persistence(format!("write {}: {}", path.display(), e)))?;
    Ok(())
}
