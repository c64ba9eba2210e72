use serde::{Deserialize, Serialize};

pub mod contact;
pub mod email_address;
mod macros;

/// Deployment mode of the running process, read once at startup.
///
/// Development mode unlocks debug affordances (the contact listing endpoint,
/// error details in 500 responses, permissive CORS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    Development,
    Production,
}

impl EnvironmentMode {
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => "development".fmt(f),
            Self::Production => "production".fmt(f),
        }
    }
}
