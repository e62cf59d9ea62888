//! Typewriter phrase parsing and sanitization.
//!
//! The phrase list comes from a single comma-separated attribute. One known
//! phrase may itself contain commas, so it is located first and everything
//! from it to the end of the attribute is kept as the final phrase.

#[cfg(test)]
#[path = "phrases_test.rs"]
mod phrases_test;

use serde::Serialize;

use crate::consts::{
    TYPED_BACK_DELAY_MS, TYPED_BACK_SPEED_MS, TYPED_CURSOR, TYPED_MARKER_PHRASE, TYPED_TYPE_SPEED_MS,
};

/// Split the raw attribute into trimmed, non-empty phrases.
#[must_use]
pub fn parse_phrases(raw: &str) -> Vec<String> {
    match find_ignore_ascii_case(raw, TYPED_MARKER_PHRASE) {
        Some(index) => {
            let (leading, trailing) = raw.split_at(index);
            let mut phrases = split_on_commas(leading);
            phrases.push(trailing.trim().to_owned());
            phrases
        }
        None => split_on_commas(raw),
    }
}

/// Drop a leading "I'm a " (straight or curly apostrophe, any case) and any
/// phrase left empty.
#[must_use]
pub fn sanitize_phrases(phrases: Vec<String>) -> Vec<String> {
    phrases
        .into_iter()
        .map(|phrase| match strip_role_prefix(&phrase) {
            Some(rest) => rest.to_owned(),
            None => phrase,
        })
        .filter(|phrase| !phrase.is_empty())
        .collect()
}

/// Parse then sanitize.
#[must_use]
pub fn phrases_from_attr(raw: &str) -> Vec<String> {
    sanitize_phrases(parse_phrases(raw))
}

/// Remainder of `phrase` after an `I'm a` prefix followed by whitespace.
#[must_use]
pub fn strip_role_prefix(phrase: &str) -> Option<&str> {
    let rest = phrase.strip_prefix(|c: char| c == 'I' || c == 'i')?;
    let rest = rest.strip_prefix(|c: char| c == '\'' || c == '\u{2019}')?;
    let head = rest.get(..3)?;
    if !head.eq_ignore_ascii_case("m a") {
        return None;
    }
    let after = &rest[3..];
    let body = after.trim_start();
    if body.len() == after.len() {
        return None;
    }
    Some(body.trim_end())
}

fn split_on_commas(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Byte index of the first ASCII-case-insensitive match of `needle`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() || pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len())
        .filter(|&i| haystack.is_char_boundary(i))
        .find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Options handed to the page's rotating-typewriter constructor.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedOptions {
    pub strings: Vec<String>,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub smart_backspace: bool,
    pub cursor_char: String,
}

impl TypedOptions {
    #[must_use]
    pub fn new(strings: Vec<String>) -> Self {
        Self {
            strings,
            type_speed: TYPED_TYPE_SPEED_MS,
            back_speed: TYPED_BACK_SPEED_MS,
            back_delay: TYPED_BACK_DELAY_MS,
            looped: true,
            smart_backspace: true,
            cursor_char: TYPED_CURSOR.to_owned(),
        }
    }
}
