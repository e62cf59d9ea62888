//! Page-level configuration.
//!
//! DESIGN
//! ======
//! Two historical copies of the page script differed only in a few
//! behaviors. Those differences are flags here instead of forks. Defaults
//! match the more complete variant; a page may override any field through an
//! inline `<script type="application/json" id="page-config">` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{CONTACT_PATH, DEFAULT_BACKEND_URL, DEFAULT_CONTACT_EMAIL, DEFAULT_WHATSAPP_NUMBER};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Base URL of the contact backend, without a trailing path.
    pub backend_url: String,
    /// Recipient of the `mailto:` fallback.
    pub contact_email: String,
    /// Destination number for the chat deep link.
    pub whatsapp_number: String,
    /// Restore the scroll offset after opening the mobile nav.
    pub restore_scroll_on_open: bool,
    /// Mirror the nav-active marker class onto `<main>`.
    pub toggle_main_class: bool,
    /// Run the force-reveal pass after load and on first scroll.
    pub force_reveal_fallback: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_owned(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_owned(),
            restore_scroll_on_open: true,
            toggle_main_class: false,
            force_reveal_fallback: true,
        }
    }
}

impl PageConfig {
    /// Parse an override block. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`Self::from_json`], but logs and falls back to defaults.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default page config");
                Self::default()
            }
        }
    }

    /// Full URL of the contact endpoint.
    #[must_use]
    pub fn contact_endpoint(&self) -> String {
        format!("{}{CONTACT_PATH}", self.backend_url.trim_end_matches('/'))
    }
}
