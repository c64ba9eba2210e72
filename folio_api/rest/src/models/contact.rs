use std::net::IpAddr;

use folio_models::contact::{ContactFormData, ContactRequest};
use serde::Deserialize;

/// Contact form body as submitted by the front end.
///
/// Every field is optional at the parsing boundary; missing required fields
/// surface as validation errors rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
    pub user_agent: Option<String>,
    pub language: Option<String>,
}

impl ApiContactRequest {
    /// Combines the body with request metadata captured server-side.
    pub fn into_contact_request(
        self,
        source_address: IpAddr,
        header_user_agent: Option<String>,
    ) -> ContactRequest {
        ContactRequest {
            form: ContactFormData {
                name: self.name.unwrap_or_default(),
                email: self.email.unwrap_or_default(),
                subject: self.subject.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            },
            timestamp: self.timestamp,
            user_agent: self.user_agent.or(header_user_agent),
            language: self.language,
            source_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_camel_case_metadata() {
        let request: ApiContactRequest = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hello there",
            "message": "This is a valid message body.",
            "userAgent": "Mozilla/5.0",
            "language": "en",
        }))
        .unwrap();

        let request = request.into_contact_request("203.0.113.7".parse().unwrap(), None);
        assert_eq!(request.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(request.form.name, "Jane Doe");
    }

    #[test]
    fn falls_back_to_the_header_user_agent() {
        let request = ApiContactRequest::default()
            .into_contact_request("203.0.113.7".parse().unwrap(), Some("curl/8.0".into()));

        assert_eq!(request.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(request.form.name, "");
    }
}
