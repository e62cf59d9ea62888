//! Outbound `mailto:` and chat deep-link builders.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::consts::WHATSAPP_BASE_URL;

/// `mailto:` link with a pre-filled subject and body.
#[must_use]
pub fn mailto_url(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Chat deep link to `number` with a pre-filled message.
#[must_use]
pub fn whatsapp_url(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("{WHATSAPP_BASE_URL}{digits}?text={}", urlencoding::encode(text))
}
