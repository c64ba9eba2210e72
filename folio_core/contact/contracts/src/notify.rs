use std::future::Future;

use folio_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactNotifyService: Send + Sync + 'static {
    /// Dispatches the operator notification and the submitter confirmation
    /// for a persisted submission.
    ///
    /// Best-effort: an `Err` summarizes what could not be delivered and is
    /// meant for diagnostics only, never for the client response.
    fn notify(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactNotifyService {
    pub fn with_notify(
        mut self,
        submission: ContactSubmission,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
