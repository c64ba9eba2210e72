use folio_di::Build;
use folio_email_contracts::{template::TemplateEmailService, ContentType, Email, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_templates_contracts::{
    ContactConfirmationTemplate, ContactNotificationTemplate, Template, TemplateService,
};

#[derive(Debug, Clone, Build)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS> {
    pub fn new(email: EmailS, template: TemplateS) -> Self {
        Self { email, template }
    }
}

impl<EmailS, TemplateS> TemplateEmailService for TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: Option<EmailAddressWithName>,
        data: &ContactNotificationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("[Portfolio] New contact message: {}", data.subject);
        self.send_email(recipient, reply_to, data, subject).await
    }

    async fn send_contact_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(recipient, None, data, "Your message has been received")
            .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        reply_to: Option<EmailAddressWithName>,
        data: &T,
        subject: impl Into<String>,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: self.template.render(data)?,
                content_type: ContentType::Html,
                reply_to,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use folio_email_contracts::MockEmailService;
    use folio_templates_contracts::MockTemplateService;

    use super::*;

    #[tokio::test]
    async fn notification() {
        // Arrange
        let data = notification_data();

        let template = MockTemplateService::new().with_render(data.clone(), "<html>".into());
        let email = MockEmailService::new().with_send(
            Email {
                recipient: "operator@example.com".parse().unwrap(),
                subject: "[Portfolio] New contact message: Hello there".into(),
                body: "<html>".into(),
                content_type: ContentType::Html,
                reply_to: Some("jane@example.com".parse().unwrap()),
            },
            true,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_notification_email(
                "operator@example.com".parse().unwrap(),
                Some("jane@example.com".parse().unwrap()),
                &data,
            )
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn confirmation() {
        // Arrange
        let data = ContactConfirmationTemplate {
            name: "Jane Doe".into(),
            subject: "Hello there".into(),
            timestamp: "2024-05-14 12:34:56 UTC".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "<html>".into());
        let email = MockEmailService::new().with_send(
            Email {
                recipient: "jane@example.com".parse().unwrap(),
                subject: "Your message has been received".into(),
                body: "<html>".into(),
                content_type: ContentType::Html,
                reply_to: None,
            },
            true,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_confirmation_email("jane@example.com".parse().unwrap(), &data)
            .await;

        // Assert
        assert!(result.unwrap());
    }

    fn notification_data() -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello there".into(),
            message: "This is a valid message body.".into(),
            timestamp: "2024-05-14 12:34:56 UTC".into(),
            source_address: "203.0.113.7".into(),
            user_agent: "Mozilla/5.0".into(),
            language: "en".into(),
        }
    }
}
