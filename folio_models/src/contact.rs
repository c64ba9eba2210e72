use std::{net::IpAddr, sync::LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::macros::{id, nutype_string};

id!(ContactSubmissionId);

/// Basic `local@domain.tld` shape. Deliverability is not checked here; the
/// notifier deals with addresses the mail relay cannot represent.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

nutype_string!(ContactName(
    sanitize(with = sanitize_text),
    validate(len_char_min = 2, len_char_max = 100)
));

nutype_string!(ContactEmail(
    sanitize(trim),
    validate(regex = CONTACT_EMAIL_REGEX)
));

nutype_string!(ContactSubject(
    sanitize(with = sanitize_text),
    validate(len_char_min = 5, len_char_max = 200)
));

nutype_string!(ContactMessageBody(
    sanitize(with = sanitize_text),
    validate(len_char_min = 10, len_char_max = 2000)
));

/// Trims surrounding whitespace and deletes every literal `<` and `>`.
///
/// This is not HTML escaping; anything rendering these values as HTML must
/// escape them downstream.
fn sanitize_text(value: String) -> String {
    value.trim().replace(['<', '>'], "")
}

/// One contact-form message, as persisted in the submission log.
///
/// `timestamp` is the client-reported value (kept verbatim) or the server
/// receipt time; `created_at` is always the persist time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessageBody,
    pub timestamp: String,
    pub user_agent: String,
    pub language: String,
    pub source_address: IpAddr,
    pub created_at: DateTime<Utc>,
}

/// Raw form fields as submitted by the client, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Form fields that have passed validation and sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedContactForm {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessageBody,
}

/// Everything the contact feature needs to process one inbound submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub form: ContactFormData,
    pub timestamp: Option<String>,
    pub user_agent: Option<String>,
    pub language: Option<String>,
    pub source_address: IpAddr,
}

/// Returned to the client after a submission has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: ContactSubmissionId,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_markup_and_whitespace() {
        let name = ContactName::try_new("  Jane <b>Doe</b>  ").unwrap();
        assert_eq!(&*name, "Jane bDoe/b");
    }

    #[test]
    fn sanitize_is_idempotent_on_clean_input() {
        let clean = "Jane Doe";
        let once = ContactName::try_new(clean).unwrap();
        let twice = ContactName::try_new(once.clone().into_inner()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(&*twice, clean);
    }

    #[test]
    fn name_length_bounds() {
        assert!(ContactName::try_new("J").is_err());
        assert!(ContactName::try_new("Jo").is_ok());
        assert!(ContactName::try_new("x".repeat(100)).is_ok());
        assert!(ContactName::try_new("x".repeat(101)).is_err());
    }

    #[test]
    fn email_shape() {
        for valid in ["jo@x.com", "a.b@c.d.e", "weird+tag@host.tld"] {
            assert!(ContactEmail::try_new(valid).is_ok(), "{valid}");
        }
        for invalid in ["bad", "no@dot", "two@@x.com", "spaces in@x.com", "@x.com", "a@.x"] {
            assert!(ContactEmail::try_new(invalid).is_err(), "{invalid}");
        }
    }

    #[test]
    fn submission_uses_camel_case_on_the_wire() {
        let submission = ContactSubmission {
            id: uuid::uuid!("0191c3a4-b7e2-7d10-9a41-7fb1a3c0de55").into(),
            name: "Jane Doe".try_into().unwrap(),
            email: "jane@example.com".try_into().unwrap(),
            subject: "Hello there".try_into().unwrap(),
            message: "This is a valid message body.".try_into().unwrap(),
            timestamp: "2024-05-14T12:34:56Z".into(),
            user_agent: "tests".into(),
            language: "en".into(),
            source_address: "127.0.0.1".parse().unwrap(),
            created_at: "2024-05-14T12:34:56Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["sourceAddress"], "127.0.0.1");
        assert_eq!(json["userAgent"], "tests");
        assert!(json["createdAt"].is_string());
    }
}
