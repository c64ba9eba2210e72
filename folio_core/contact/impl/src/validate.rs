use folio_core_contact_contracts::validate::ContactValidateService;
use folio_di::Build;
use folio_models::contact::{
    ContactEmail, ContactFormData, ContactMessageBody, ContactName, ContactSubject,
    SanitizedContactForm,
};

mod spam;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct ContactValidateServiceImpl;

impl ContactValidateService for ContactValidateServiceImpl {
    fn validate(&self, form: &ContactFormData) -> Result<SanitizedContactForm, Vec<String>> {
        let mut errors = Vec::new();

        let name = ContactName::try_new(form.name.clone());
        if name.is_err() {
            errors.push("Name must be between 2 and 100 characters".to_owned());
        }

        let email = ContactEmail::try_new(form.email.clone());
        if email.is_err() {
            errors.push("Email address is not valid".to_owned());
        }

        let subject = ContactSubject::try_new(form.subject.clone());
        if subject.is_err() {
            errors.push("Subject must be between 5 and 200 characters".to_owned());
        }

        let message = ContactMessageBody::try_new(form.message.clone());
        if message.is_err() {
            errors.push("Message must be between 10 and 2000 characters".to_owned());
        }

        let content = format!("{} {} {}", form.name, form.subject, form.message);
        if spam::is_spam(&content) {
            errors.push("Message was flagged as spam".to_owned());
        }

        match (name, email, subject, message) {
            (Ok(name), Ok(email), Ok(subject), Ok(message)) if errors.is_empty() => {
                Ok(SanitizedContactForm {
                    name,
                    email,
                    subject,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_a_valid_form() {
        // Arrange
        let form = form("Jo", "jo@x.com", "Hello there", "This is a valid message body.");

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        let sanitized = result.unwrap();
        assert_eq!(&*sanitized.name, "Jo");
        assert_eq!(&*sanitized.email, "jo@x.com");
    }

    #[test]
    fn reports_every_failing_rule() {
        // Arrange
        let form = form("J", "bad", "Hi", "short");

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        assert_eq!(
            result.unwrap_err(),
            vec![
                "Name must be between 2 and 100 characters",
                "Email address is not valid",
                "Subject must be between 5 and 200 characters",
                "Message must be between 10 and 2000 characters",
            ]
        );
    }

    #[test]
    fn sanitizes_the_accepted_fields() {
        // Arrange
        let form = form(
            "  Jane <script>Doe  ",
            " jane@example.com ",
            "Hello <b>there</b>",
            "This is a valid message body.",
        );

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        let sanitized = result.unwrap();
        assert_eq!(&*sanitized.name, "Jane scriptDoe");
        assert_eq!(&*sanitized.email, "jane@example.com");
        assert_eq!(&*sanitized.subject, "Hello bthere/b");
    }

    #[test]
    fn flags_denylisted_keywords_in_any_case() {
        for content in ["Click Here for details", "you are a WINNER", "free lottery"] {
            let form = form(
                "Jane Doe",
                "jane@example.com",
                "Hello there",
                &format!("{content}, plus a valid message body."),
            );

            let result = ContactValidateServiceImpl.validate(&form);

            assert_eq!(
                result.unwrap_err(),
                vec!["Message was flagged as spam"],
                "{content}"
            );
        }
    }

    #[test]
    fn keyword_must_match_a_whole_word() {
        // Arrange
        let form = form(
            "Jane Doe",
            "jane@example.com",
            "Winners announced",
            "The casinos of Monaco are architectural marvels.",
        );

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        result.unwrap();
    }

    #[test]
    fn flags_multiple_urls() {
        // Arrange
        let form = form(
            "Jane Doe",
            "jane@example.com",
            "Hello there",
            "See http://a.example and also https://b.example for details.",
        );

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        assert_eq!(result.unwrap_err(), vec!["Message was flagged as spam"]);
    }

    #[test]
    fn allows_a_single_url() {
        // Arrange
        let form = form(
            "Jane Doe",
            "jane@example.com",
            "Hello there",
            "My site lives at https://jane.example these days.",
        );

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        result.unwrap();
    }

    #[test]
    fn flags_long_uppercase_runs() {
        // Arrange
        let form = form(
            "Jane Doe",
            "jane@example.com",
            "Hello there",
            "Please have a look at PROJECTXYZAB when you get a chance.",
        );

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        assert_eq!(result.unwrap_err(), vec!["Message was flagged as spam"]);
    }

    #[test]
    fn allows_short_uppercase_runs() {
        // Arrange
        let form = form(
            "Jane Doe",
            "jane@example.com",
            "Hello there",
            "The HTTPAPI module needs a review.",
        );

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        result.unwrap();
    }

    #[test]
    fn spam_is_reported_alongside_field_errors() {
        // Arrange
        let form = form("J", "jane@example.com", "Hello there", "Buy now while stocks last, truly.");

        // Act
        let result = ContactValidateServiceImpl.validate(&form);

        // Assert
        assert_eq!(
            result.unwrap_err(),
            vec![
                "Name must be between 2 and 100 characters",
                "Message was flagged as spam",
            ]
        );
    }

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}
