//! Per-field validation rules for the contact form

use super::field::{FieldName, FieldSet};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Please enter your name.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email (e.g., name@example.com).";
pub const TITLE_REQUIRED: &str = "Please add a short subject.";
pub const MESSAGE_REQUIRED: &str = "Please tell us how we can help.";

// `\s` in the regex crate does not cover the byte-order mark, so it is listed
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("email pattern is a valid regex")
});

/// Whitespace for the emptiness checks: Unicode whitespace plus U+FEFF
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// True when nothing but whitespace (or byte-order marks) was typed
fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

/// Basic `local@domain.tld` shape check on the untrimmed value
pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Error message per field; an empty string means the field is fine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    messages: [&'static str; 4],
}

impl ErrorSet {
    pub fn get(&self, field: FieldName) -> &'static str {
        self.messages[field.index()]
    }

    pub fn is_valid(&self) -> bool {
        self.messages.iter().all(|m| m.is_empty())
    }

    /// Fields that currently fail their rule, in form order
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| !self.get(*f).is_empty())
            .collect()
    }
}

fn required(value: &str, message: &'static str) -> &'static str {
    if is_blank(value) {
        message
    } else {
        ""
    }
}

fn check(field: FieldName, value: &str) -> &'static str {
    match field {
        FieldName::Name => required(value, NAME_REQUIRED),
        FieldName::Email => {
            if is_blank(value) {
                EMAIL_REQUIRED
            } else if !is_email(value) {
                EMAIL_INVALID
            } else {
                ""
            }
        }
        FieldName::Title => required(value, TITLE_REQUIRED),
        FieldName::Message => required(value, MESSAGE_REQUIRED),
    }
}

/// Compute the error set for the given values. Pure; call as often as needed.
pub fn compute_errors(fields: &FieldSet) -> ErrorSet {
    let mut errors = ErrorSet::default();
    for field in FieldName::ALL {
        errors.messages[field.index()] = check(field, fields.get(field));
    }
    errors
}
