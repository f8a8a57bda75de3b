//! JSON-file-backed persistence for the resume collection.
//!
//! The whole document is read and rewritten on every mutation. A writer lock
//! serializes each load-mutate-save sequence so concurrent requests cannot
//! interleave and lose updates.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::models::resume::{PersistedStore, Resume};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    /// The data file exists but does not parse. Kept distinct from an empty
    /// store so callers can tell corruption from absence.
    #[error("data file is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Handle to the single JSON data file. Cloning shares the writer lock.
#[derive(Clone)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Opens the store at `path`, seeding an empty document on first run.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            write_document(&path, &PersistedStore::default())?;
            info!("Seeded new data file at {}", path.display());
        }
        Ok(Self {
            path,
            lock: Arc::new(Mutex::new(())),
        })
    }

    /// Returns every stored resume (at most one in practice).
    pub async fn list(&self) -> Result<Vec<Resume>, StoreError> {
        let _guard = self.lock.lock().await;
        let doc = read_document(&self.path)?;
        Ok(doc.resumes)
    }

    /// Assigns the next id to `fields` and stores the result.
    ///
    /// Creating a resume replaces the whole collection: the service keeps at
    /// most one resume, and any previously stored one is discarded. The id
    /// counter still advances on every create.
    pub async fn create(&self, mut fields: Map<String, Value>) -> Result<Resume, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = read_document(&self.path)?;
        // A client-supplied id is discarded; the counter is the only id source.
        fields.remove("id");
        let resume = Resume {
            id: doc.next_id,
            fields,
        };
        doc.resumes = vec![resume.clone()];
        doc.next_id += 1;
        write_document(&self.path, &doc)?;
        Ok(resume)
    }

    /// Looks up a resume by id. `None` when no record matches.
    pub async fn get(&self, id: u64) -> Result<Option<Resume>, StoreError> {
        let _guard = self.lock.lock().await;
        let doc = read_document(&self.path)?;
        Ok(doc.resumes.into_iter().find(|r| r.id == id))
    }

    /// Shallow-merges `patch` onto the resume with `id` and persists the
    /// result. The id field is immutable and never merged. `None` when no
    /// record matches.
    pub async fn update(
        &self,
        id: u64,
        patch: Map<String, Value>,
    ) -> Result<Option<Resume>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = read_document(&self.path)?;
        let Some(resume) = doc.resumes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        for (key, value) in patch {
            if key != "id" {
                resume.fields.insert(key, value);
            }
        }
        let merged = resume.clone();
        write_document(&self.path, &doc)?;
        Ok(Some(merged))
    }

    /// Removes the resume with `id` if present. Deleting an absent id is not
    /// an error.
    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = read_document(&self.path)?;
        doc.resumes.retain(|r| r.id != id);
        write_document(&self.path, &doc)?;
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<PersistedStore, StoreError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Data file missing at {}, treating as empty", path.display());
            return Ok(PersistedStore::default());
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&raw)?)
}

fn write_document(path: &Path, doc: &PersistedStore) -> Result<(), StoreError> {
    // 2-space indentation, matching the file layout clients already know.
    let pretty = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, pretty)?;
    Ok(())
}
