//! Contact form routing: remote API first, with email and chat fallbacks.
//!
//! ARCHITECTURE
//! ============
//! `behaviors::contact_form` reads the form into a [`RawContactFields`] and
//! hands it to [`submit`] together with a [`ContactUi`] (alerts, submit
//! button, navigation) and a [`ContactTransport`] (the HTTP call). Keeping
//! both behind traits lets the whole routing table run in native tests.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures abort before any side effect. Delivery failures are
//! terminal for the attempt: the visitor sees one alert and may resubmit or
//! switch route. The submit control is restored on every delivery outcome.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;

use crate::config::PageConfig;
use crate::consts::{
    CHAT_HEADER_LINE, DEFAULT_MAIL_SUBJECT, MSG_NETWORK_ERROR, MSG_SEND_FAILED, MSG_SENT, SUBMIT_LABEL_DEFAULT,
    SUBMIT_LABEL_SENDING,
};
use crate::error::ContactError;
use crate::net::types::{ContactRequest, ContactResponse};
use crate::util::links::{mailto_url, whatsapp_url};

/// Delivery channel picked by the form's route selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactRoute {
    /// POST to the backend, which relays to a Telegram chat.
    #[default]
    Telegram,
    /// Open the visitor's mail client.
    Email,
    /// Open a chat deep link in a new browsing context.
    WhatsApp,
}

impl ContactRoute {
    /// Map the selector value. Missing or empty selects the remote API;
    /// unknown values fall through to the chat link.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | "telegram") => Self::Telegram,
            Some("email") => Self::Email,
            Some(_) => Self::WhatsApp,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::Email => "email",
            Self::WhatsApp => "whatsapp",
        }
    }
}

/// Field values as read from the page; `None` means the field is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub route: Option<String>,
}

/// A trimmed submission with its route resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub route: ContactRoute,
}

fn trimmed(value: Option<&String>) -> String {
    value.map_or_else(String::new, |v| v.trim().to_owned())
}

impl ContactSubmission {
    #[must_use]
    pub fn from_raw(raw: &RawContactFields) -> Self {
        Self {
            name: trimmed(raw.name.as_ref()),
            email: trimmed(raw.email.as_ref()),
            phone: trimmed(raw.phone.as_ref()),
            subject: trimmed(raw.subject.as_ref()),
            message: trimmed(raw.message.as_ref()),
            route: ContactRoute::parse(raw.route.as_deref().map(str::trim)),
        }
    }

    /// Check required fields for the chosen route.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingNameOrMessage`] when name or message is empty,
    /// then [`ContactError::MissingEmail`] for the email route without a
    /// reply address.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingNameOrMessage);
        }
        if self.route == ContactRoute::Email && self.email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        Ok(())
    }

    #[must_use]
    pub fn request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            phone: self.phone.clone(),
        }
    }

    #[must_use]
    pub fn mail_subject(&self) -> &str {
        if self.subject.is_empty() { DEFAULT_MAIL_SUBJECT } else { &self.subject }
    }

    #[must_use]
    pub fn mail_body(&self) -> String {
        let mut body = format!("Name: {}\nEmail: {}", self.name, self.email);
        if !self.subject.is_empty() {
            body.push_str(&format!("\nSubject: {}", self.subject));
        }
        body.push_str(&format!("\n\n{}", self.message));
        body
    }

    /// Header, name, optional email and subject, a blank line, then the message.
    #[must_use]
    pub fn chat_text(&self) -> String {
        let mut lines = vec![CHAT_HEADER_LINE.to_owned(), format!("Name: {}", self.name)];
        if !self.email.is_empty() {
            lines.push(format!("Email: {}", self.email));
        }
        if !self.subject.is_empty() {
            lines.push(format!("Subject: {}", self.subject));
        }
        lines.push(String::new());
        lines.push(self.message.clone());
        lines.join("\n")
    }
}

/// Page-side effects of a submission.
pub trait ContactUi {
    /// Blocking, user-facing message.
    fn alert(&self, message: &str);
    /// Current submit label, `None` when there is no submit control.
    fn submit_label(&self) -> Option<String>;
    fn set_submit_state(&self, disabled: bool, label: &str);
    fn reset_form(&self);
    /// Navigate the current browsing context.
    fn navigate(&self, url: &str);
    /// Open `url` in a new browsing context.
    fn open_external(&self, url: &str);
}

/// Delivery to the contact backend.
pub trait ContactTransport {
    /// POST `request` and decode the JSON reply, whatever the HTTP status.
    fn send(&self, request: &ContactRequest) -> impl Future<Output = Result<ContactResponse, ContactError>>;
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ContactError),
    Sent,
    ServerRejected(String),
    NetworkFailed(ContactError),
    MailOpened(String),
    ChatOpened(String),
}

/// Validate `submission` and deliver it over its route.
pub async fn submit<U, T>(submission: &ContactSubmission, ui: &U, transport: &T, config: &PageConfig) -> SubmitOutcome
where
    U: ContactUi,
    T: ContactTransport,
{
    if let Err(err) = submission.validate() {
        ui.alert(&err.to_string());
        return SubmitOutcome::Invalid(err);
    }
    log::info!("contact submission via {}", submission.route.as_str());

    match submission.route {
        ContactRoute::Telegram => send_remote(submission, ui, transport).await,
        ContactRoute::Email => {
            let url = mailto_url(&config.contact_email, submission.mail_subject(), &submission.mail_body());
            ui.navigate(&url);
            SubmitOutcome::MailOpened(url)
        }
        ContactRoute::WhatsApp => {
            let url = whatsapp_url(&config.whatsapp_number, &submission.chat_text());
            ui.open_external(&url);
            SubmitOutcome::ChatOpened(url)
        }
    }
}

async fn send_remote<U, T>(submission: &ContactSubmission, ui: &U, transport: &T) -> SubmitOutcome
where
    U: ContactUi,
    T: ContactTransport,
{
    let original_label = ui
        .submit_label()
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| SUBMIT_LABEL_DEFAULT.to_owned());
    ui.set_submit_state(true, SUBMIT_LABEL_SENDING);

    let outcome = match transport.send(&submission.request()).await {
        Ok(response) if response.success => {
            ui.alert(MSG_SENT);
            ui.reset_form();
            SubmitOutcome::Sent
        }
        Ok(response) => {
            let reason = response.error_text().unwrap_or(MSG_SEND_FAILED).to_owned();
            log::warn!("contact backend rejected submission: {reason}");
            ui.alert(&format!("❌ {reason}"));
            SubmitOutcome::ServerRejected(reason)
        }
        Err(err) => {
            log::error!("Contact form error: {err}");
            ui.alert(MSG_NETWORK_ERROR);
            SubmitOutcome::NetworkFailed(err)
        }
    };

    ui.set_submit_state(false, &original_label);
    outcome
}
