use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use folio_models::contact::{ContactFormData, ContactSubmission};
use uuid::{uuid, Uuid};

/// Raw form fields matching [`SUBMISSION`], as a client would submit them.
pub static FORM: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: "Jane Doe".into(),
    email: "jane@example.com".into(),
    subject: "Hello there".into(),
    message: "This is a valid message body.".into(),
});

pub static SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: uuid!("0191c3a4-b7e2-7d10-9a41-7fb1a3c0de55").into(),
    name: "Jane Doe".try_into().unwrap(),
    email: "jane@example.com".try_into().unwrap(),
    subject: "Hello there".try_into().unwrap(),
    message: "This is a valid message body.".try_into().unwrap(),
    timestamp: "2024-05-14T12:34:56+00:00".into(),
    user_agent: "Mozilla/5.0".into(),
    language: "en".into(),
    source_address: "203.0.113.7".parse().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 14, 12, 34, 56).unwrap(),
});

/// A distinct valid submission, for tests that fill the log.
pub fn numbered_submission(n: usize) -> ContactSubmission {
    ContactSubmission {
        id: Uuid::new_v4().into(),
        message: format!("This is message number {n} in the log.")
            .try_into()
            .unwrap(),
        ..SUBMISSION.clone()
    }
}
