//! Feedback store
//!
//! Durable store for feedback events: one pretty-printed JSON array file,
//! rewritten wholesale on every append. All file access goes through one
//! async mutex, so concurrent submissions cannot race the read-modify-write
//! and drop each other's entries.

use ondo_common::feedback_file;
use ondo_common::types::FeedbackEntry;
use ondo_common::Result;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Single-writer feedback store
pub struct FeedbackStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FeedbackStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Append one entry. Reads the whole collection, appends, rewrites.
    ///
    /// A missing or unreadable file reads as empty; a write failure is a
    /// persistence error and nothing is recorded.
    pub async fn append(&self, entry: FeedbackEntry) -> Result<()> {
        let _guard = self.lock.lock().await;

        let mut entries = feedback_file::read_entries(&self.path);
        entries.push(entry);
        feedback_file::write_entries(&self.path, &entries)
    }

    /// Read the whole collection.
    pub async fn read_all(&self) -> Vec<FeedbackEntry> {
        let _guard = self.lock.lock().await;
        feedback_file::read_entries(&self.path)
    }
}
