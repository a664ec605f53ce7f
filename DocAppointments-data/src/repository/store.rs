use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, warn};

use crate::models::Document;
use super::errors::RepositoryError;

/// Whole-document persistence.
///
/// Every repository operation performs one `load`, mutates the document in
/// memory and performs at most one `save`. Nothing serializes concurrent
/// callers: two overlapping load/save sequences lose the first writer's
/// changes.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Read the document, reporting unreadable or corrupt state as an error.
    /// A store that has never been written yields an empty document.
    async fn try_load(&self) -> Result<Document, RepositoryError>;

    /// Stamp `last_updated` and overwrite the stored document
    async fn save(&self, doc: &mut Document) -> Result<(), RepositoryError>;

    /// Read the document, falling back to an empty one on any failure
    async fn load(&self) -> Document {
        match self.try_load().await {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Error reading data, starting from an empty document: {}", e);
                Document::empty()
            }
        }
    }
}

/// Document store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file. The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn try_load(&self) -> Result<Document, RepositoryError> {
        debug!("Reading data file: {}", self.path.display());

        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file {} does not exist yet", self.path.display());
                Ok(Document::empty())
            }
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }

    async fn save(&self, doc: &mut Document) -> Result<(), RepositoryError> {
        doc.last_updated = Utc::now();
        let json = serde_json::to_string_pretty(doc)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Error creating data directory {}: {}", parent.display(), e);
                RepositoryError::Storage(format!("Failed to save data: {}", e))
            })?;
        }

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            error!("Error writing data file {}: {}", self.path.display(), e);
            RepositoryError::Storage(format!("Failed to save data: {}", e))
        })?;

        debug!(
            "Saved {} appointments and {} prescriptions to {}",
            doc.appointments.len(),
            doc.prescriptions.len(),
            self.path.display()
        );
        Ok(())
    }
}
