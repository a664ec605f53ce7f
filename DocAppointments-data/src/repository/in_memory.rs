use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::models::Document;
use super::errors::RepositoryError;
use super::store::DocumentStore;

/// In-memory document store.
///
/// Clones share the same document, so a clone handed to a repository can be
/// inspected from a test afterwards.
#[derive(Debug, Clone)]
pub struct InMemoryDocumentStore {
    document: Arc<Mutex<Document>>,
    saves: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_document(Document::empty())
    }

    /// Create a store seeded with a document
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
            saves: Arc::new(AtomicUsize::new(0)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent save fail with a storage error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> Result<Document, RepositoryError> {
        let doc = self.document.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        Ok(doc.clone())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn try_load(&self) -> Result<Document, RepositoryError> {
        self.snapshot()
    }

    async fn save(&self, doc: &mut Document) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("Failed to save data".to_string()));
        }

        doc.last_updated = Utc::now();
        let mut stored = self.document.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        *stored = doc.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
