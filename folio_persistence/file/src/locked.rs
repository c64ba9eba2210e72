use std::sync::Arc;

use folio_models::contact::ContactSubmission;
use folio_persistence_contracts::contact::ContactRepository;
use tokio::sync::Mutex;

/// Serializes all access to the wrapped repository through a process-local
/// mutex, closing its read-modify-write race for a single writer process.
#[derive(Debug, Clone)]
pub struct LockedContactRepository<R> {
    inner: R,
    lock: Arc<Mutex<()>>,
}

impl<R> LockedContactRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lock: Arc::default(),
        }
    }
}

impl<R: ContactRepository> ContactRepository for LockedContactRepository<R> {
    async fn append(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        self.inner.append(submission).await
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        let _guard = self.lock.lock().await;
        self.inner.list().await
    }
}
