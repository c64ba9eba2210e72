use std::sync::Arc;

use anyhow::bail;
use chrono::DateTime;
use folio_core_contact_contracts::notify::ContactNotifyService;
use folio_di::Build;
use folio_email_contracts::template::TemplateEmailService;
use folio_models::{
    contact::ContactSubmission,
    email_address::{EmailAddress, EmailAddressWithName},
};
use folio_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};
use tracing::{debug, warn};

/// Dispatches the two contact emails.
///
/// Constructed without a template email service when no mail relay is
/// configured (or the startup connectivity check failed); it then stays
/// disabled for the process lifetime and every dispatch is a no-op.
#[derive(Debug, Clone, Build)]
pub struct ContactNotifyServiceImpl<TemplateEmail> {
    template_email: Option<TemplateEmail>,
    config: ContactNotifyConfig,
}

#[derive(Debug, Clone)]
pub struct ContactNotifyConfig {
    /// Destination for operator notifications.
    pub operator: Arc<EmailAddress>,
}

impl<TemplateEmail> ContactNotifyServiceImpl<TemplateEmail> {
    pub fn new(template_email: Option<TemplateEmail>, config: ContactNotifyConfig) -> Self {
        Self {
            template_email,
            config,
        }
    }
}

impl<TemplateEmail> ContactNotifyService for ContactNotifyServiceImpl<TemplateEmail>
where
    TemplateEmail: TemplateEmailService,
{
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let Some(template_email) = &self.template_email else {
            debug!("Email notifications are disabled, skipping dispatch");
            return Ok(());
        };

        // The submitted address satisfies the form's shape rule but may still
        // not be a relay-representable mailbox.
        let submitter = match submission.email.parse::<EmailAddressWithName>() {
            Ok(mailbox) => Some(mailbox),
            Err(err) => {
                warn!(
                    "Submitter address {:?} is not a deliverable mailbox: {err}",
                    &*submission.email
                );
                None
            }
        };

        let timestamp = format_timestamp(&submission.timestamp);
        let mut failed = Vec::new();

        let notification = ContactNotificationTemplate {
            name: submission.name.clone().into_inner(),
            email: submission.email.clone().into_inner(),
            subject: submission.subject.clone().into_inner(),
            message: submission.message.clone().into_inner(),
            timestamp: timestamp.clone(),
            source_address: submission.source_address.to_string(),
            user_agent: submission.user_agent.clone(),
            language: submission.language.clone(),
        };
        let operator = EmailAddressWithName::from((*self.config.operator).clone());
        match template_email
            .send_contact_notification_email(operator, submitter.clone(), &notification)
            .await
        {
            Ok(true) => {}
            Ok(false) => failed.push("the relay rejected the operator notification".to_owned()),
            Err(err) => {
                warn!("Failed to send operator notification: {err:#}");
                failed.push("sending the operator notification errored".to_owned());
            }
        }

        if let Some(submitter) = submitter {
            let confirmation = ContactConfirmationTemplate {
                name: submission.name.clone().into_inner(),
                subject: submission.subject.clone().into_inner(),
                timestamp,
            };
            match template_email
                .send_contact_confirmation_email(submitter, &confirmation)
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    failed.push("the relay rejected the submitter confirmation".to_owned())
                }
                Err(err) => {
                    warn!("Failed to send submitter confirmation: {err:#}");
                    failed.push("sending the submitter confirmation errored".to_owned());
                }
            }
        } else {
            failed.push("the submitter confirmation was skipped".to_owned());
        }

        if !failed.is_empty() {
            bail!("{}", failed.join("; "));
        }

        Ok(())
    }
}

/// Renders a client-reported timestamp for display in the emails; values
/// that are not RFC 3339 are shown verbatim.
fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S %:z").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use folio_demo::contact::SUBMISSION;
    use folio_email_contracts::template::MockTemplateEmailService;
    use folio_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn disabled_notifier_is_a_no_op() {
        // Arrange
        let sut = ContactNotifyServiceImpl::<MockTemplateEmailService>::new(None, config());

        // Act
        let result = sut.notify(&SUBMISSION).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn sends_both_emails() {
        // Arrange
        let template_email = MockTemplateEmailService::new()
            .with_send_contact_notification_email(
                "contact@example.com".parse().unwrap(),
                Some("jane@example.com".parse().unwrap()),
                notification(),
                Ok(true),
            )
            .with_send_contact_confirmation_email(
                "jane@example.com".parse().unwrap(),
                confirmation(),
                Ok(true),
            );

        let sut = ContactNotifyServiceImpl::new(Some(template_email), config());

        // Act
        let result = sut.notify(&SUBMISSION).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn operator_failure_still_sends_the_confirmation() {
        // Arrange
        let template_email = MockTemplateEmailService::new()
            .with_send_contact_notification_email(
                "contact@example.com".parse().unwrap(),
                Some("jane@example.com".parse().unwrap()),
                notification(),
                Err(anyhow::anyhow!("connection reset")),
            )
            .with_send_contact_confirmation_email(
                "jane@example.com".parse().unwrap(),
                confirmation(),
                Ok(true),
            );

        let sut = ContactNotifyServiceImpl::new(Some(template_email), config());

        // Act
        let result = sut.notify(&SUBMISSION).await;

        // Assert
        assert_matches!(result, Err(_));
    }

    #[tokio::test]
    async fn rejected_confirmation_is_reported() {
        // Arrange
        let template_email = MockTemplateEmailService::new()
            .with_send_contact_notification_email(
                "contact@example.com".parse().unwrap(),
                Some("jane@example.com".parse().unwrap()),
                notification(),
                Ok(true),
            )
            .with_send_contact_confirmation_email(
                "jane@example.com".parse().unwrap(),
                confirmation(),
                Ok(false),
            );

        let sut = ContactNotifyServiceImpl::new(Some(template_email), config());

        // Act
        let result = sut.notify(&SUBMISSION).await;

        // Assert
        assert_matches!(result, Err(_));
    }

    fn config() -> ContactNotifyConfig {
        ContactNotifyConfig {
            operator: Arc::new("contact@example.com".parse().unwrap()),
        }
    }

    fn notification() -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello there".into(),
            message: "This is a valid message body.".into(),
            timestamp: "2024-05-14 12:34:56 +00:00".into(),
            source_address: "203.0.113.7".into(),
            user_agent: "Mozilla/5.0".into(),
            language: "en".into(),
        }
    }

    fn confirmation() -> ContactConfirmationTemplate {
        ContactConfirmationTemplate {
            name: "Jane Doe".into(),
            subject: "Hello there".into(),
            timestamp: "2024-05-14 12:34:56 +00:00".into(),
        }
    }
}
