use folio_models::contact::{ContactFormData, SanitizedContactForm};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactValidateService: Send + Sync + 'static {
    /// Checks every rule independently and reports all failures together; on
    /// success returns the sanitized form fields.
    fn validate(&self, form: &ContactFormData) -> Result<SanitizedContactForm, Vec<String>>;
}

#[cfg(feature = "mock")]
impl MockContactValidateService {
    pub fn with_validate(
        mut self,
        form: ContactFormData,
        result: Result<SanitizedContactForm, Vec<String>>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| result);
        self
    }
}
