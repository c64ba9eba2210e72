use serde::Serialize;

pub mod contact;

/// Failure envelope shared by every non-2xx API response.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_empty_detail_fields() {
        let json = serde_json::to_value(ApiFailure::new("Forbidden")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Forbidden"})
        );
    }
}
