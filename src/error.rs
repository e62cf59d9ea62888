//! Error types for contact submission and configuration loading.
//!
//! ERROR HANDLING
//! ==============
//! Validation variants carry the exact alert text shown to the visitor, so
//! the router can surface `err.to_string()` without a second lookup table.
//! Transport variants keep the underlying message for logging only.

use crate::consts::{MSG_MISSING_EMAIL, MSG_MISSING_NAME_OR_MESSAGE};

/// Error raised while validating or delivering a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Name or message was empty after trimming.
    #[error("{}", MSG_MISSING_NAME_OR_MESSAGE)]
    MissingNameOrMessage,
    /// The email route was chosen without a reply address.
    #[error("{}", MSG_MISSING_EMAIL)]
    MissingEmail,
    /// The request body could not be serialized.
    #[error("failed to encode contact request: {0}")]
    Encode(String),
    /// The request never produced a response.
    #[error("contact request failed: {0}")]
    Network(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("failed to decode contact response: {0}")]
    Decode(String),
}

/// Error returned by [`crate::config::PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded config block is not valid JSON for [`crate::config::PageConfig`].
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}
