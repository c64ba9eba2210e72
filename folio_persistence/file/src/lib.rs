use std::path::{Path, PathBuf};

use anyhow::Context;
use folio_models::contact::ContactSubmission;
use folio_persistence_contracts::contact::{ContactRepository, CONTACT_LOG_CAPACITY};
use tracing::warn;

mod locked;

pub use locked::LockedContactRepository;

pub const CONTACT_LOG_FILE: &str = "contacts.json";

/// File-backed submission log: one JSON document holding the retained
/// submissions in insertion order.
///
/// A missing, unreadable or corrupt document is treated as an empty log and
/// never fails an append; write failures do propagate. `append` is a
/// read-modify-write of the whole document without locking, so concurrent
/// writers can race (last writer wins). Wrap in [`LockedContactRepository`]
/// to serialize access within one process.
#[derive(Debug, Clone)]
pub struct FileContactRepository {
    path: PathBuf,
}

impl FileContactRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(CONTACT_LOG_FILE),
        }
    }

    async fn read_log(&self) -> Vec<ContactSubmission> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(
                    "Failed to read contact log at {}, treating it as empty: {err}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(log) => log,
            Err(err) => {
                warn!(
                    "Contact log at {} is corrupt, starting over: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }
}

impl ContactRepository for FileContactRepository {
    async fn append(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let mut log = self.read_log().await;

        log.push(submission.clone());
        if log.len() > CONTACT_LOG_CAPACITY {
            log.drain(..log.len() - CONTACT_LOG_CAPACITY);
        }

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.with_context(|| {
                format!("Failed to create data directory at {}", dir.display())
            })?;
        }

        let raw = serde_json::to_vec_pretty(&log)?;
        tokio::fs::write(&self.path, raw).await.with_context(|| {
            format!("Failed to write contact log at {}", self.path.display())
        })
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        Ok(self.read_log().await)
    }
}
