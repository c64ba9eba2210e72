use anyhow::Context;
use folio_core_contact_contracts::{
    notify::ContactNotifyService, validate::ContactValidateService, ContactFeatureService,
    ContactSubmitError,
};
use folio_di::Build;
use folio_models::contact::{ContactReceipt, ContactRequest, ContactSubmission};
use folio_persistence_contracts::contact::ContactRepository;
use folio_shared_contracts::{id::IdService, time::TimeService};
use tracing::{info, warn};

pub mod notify;
pub mod validate;

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_USER_AGENT: &str = "unknown";

#[derive(Debug, Clone, Default, Build)]
pub struct ContactFeatureServiceImpl<Validate, Id, Time, ContactRepo, Notify> {
    validate: Validate,
    id: Id,
    time: Time,
    contact_repo: ContactRepo,
    notify: Notify,
}

impl<Validate, Id, Time, ContactRepo, Notify> ContactFeatureService
    for ContactFeatureServiceImpl<Validate, Id, Time, ContactRepo, Notify>
where
    Validate: ContactValidateService,
    Id: IdService,
    Time: TimeService,
    ContactRepo: ContactRepository,
    Notify: ContactNotifyService,
{
    async fn submit(&self, request: ContactRequest) -> Result<ContactReceipt, ContactSubmitError> {
        let form = self
            .validate
            .validate(&request.form)
            .map_err(ContactSubmitError::Invalid)?;

        let now = self.time.now();
        let submission = ContactSubmission {
            id: self.id.generate(),
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            timestamp: request.timestamp.unwrap_or_else(|| now.to_rfc3339()),
            user_agent: request
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
            language: request.language.unwrap_or_else(|| DEFAULT_LANGUAGE.into()),
            source_address: request.source_address,
            created_at: now,
        };

        self.contact_repo
            .append(&submission)
            .await
            .context("Failed to persist contact submission")?;

        if let Err(err) = self.notify.notify(&submission).await {
            warn!("Failed to dispatch contact notification emails: {err:#}");
        }

        info!(
            "New contact message from {} ({}): {}",
            *submission.name, *submission.email, *submission.subject
        );

        Ok(ContactReceipt {
            id: submission.id,
            timestamp: submission.timestamp,
        })
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        self.contact_repo
            .list()
            .await
            .context("Failed to read contact submission log")
    }
}
