use std::future::Future;

use folio_models::contact::ContactSubmission;

/// Maximum number of submissions retained in the log. Older entries are
/// evicted first (pure FIFO truncation).
pub const CONTACT_LOG_CAPACITY: usize = 100;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository: Send + Sync + 'static {
    /// Appends one submission to the durable log, evicting the oldest entries
    /// beyond [`CONTACT_LOG_CAPACITY`].
    fn append(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Returns every retained submission in insertion order.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRepository {
    pub fn with_append(
        mut self,
        submission: ContactSubmission,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list(mut self, result: Vec<ContactSubmission>) -> Self {
        self.expect_list()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }
}
