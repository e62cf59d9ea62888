//! Wire types for `POST /api/contact`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body. `phone` is only sent when the page has a phone field and
/// the visitor filled it in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
}

/// Response body. The backend uses the same shape for success and failure,
/// whatever the HTTP status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactResponse {
    /// Server-provided failure text, if any non-blank one was sent.
    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().map(str::trim).filter(|text| !text.is_empty())
    }
}
