//! JSON file implementation of the progress store.
//!
//! The whole record is one pretty-printed JSON object. Reads never fail the
//! caller: a missing or corrupt file logs a warning and yields the fresh
//! default record.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Progress;
use crate::domain::ports::ProgressStore;

/// Progress store backed by a single JSON file.
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    /// Creates a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgressStore for FileProgressStore {
    async fn load(&self) -> Progress {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no progress file, starting fresh");
                return Progress::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read progress, starting fresh");
                return Progress::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(progress) => progress,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "progress file malformed, starting fresh");
                Progress::default()
            }
        }
    }

    async fn save(&self, progress: &Progress) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(progress)
            .map_err(|e| DomainError::Persistence(e.to_string()))?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), xp = progress.xp, level = progress.level, "progress saved");
        Ok(())
    }
}
