use std::future::Future;

use folio_models::contact::{ContactReceipt, ContactRequest, ContactSubmission};
use thiserror::Error;

pub mod notify;
pub mod validate;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Runs the full submission pipeline: validate, persist, notify.
    ///
    /// Validation failures are a normal outcome and carry the full list of
    /// reasons; notification failures never affect the result.
    fn submit(
        &self,
        request: ContactRequest,
    ) -> impl Future<Output = Result<ContactReceipt, ContactSubmitError>> + Send;

    /// Returns the persisted submission log in insertion order.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Submission failed validation.")]
    Invalid(Vec<String>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        request: ContactRequest,
        result: Result<ContactReceipt, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
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
