//! Contact form field value objects

use serde::{Deserialize, Serialize};

/// The four contact form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Title,
    Message,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Title,
        FieldName::Message,
    ];

    /// Payload key sent to the mail relay
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Title => "title",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Title => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Jane Doe",
            Self::Email => "you@example.com",
            Self::Title => "Short summary (e.g., spring dinner party)",
            Self::Message => "Share the occasion, date, guest count, and any must-have dishes...",
        }
    }

    /// Whether Enter inserts a newline instead of advancing focus
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position of the field in form order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Title => 2,
            Self::Message => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Current values of the contact form.
///
/// Serializes to exactly the four relay payload keys. Values are kept
/// verbatim; only emptiness checks trim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
}

impl FieldSet {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Title => &self.title,
            FieldName::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Title => &mut self.title,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        *self.get_mut(field) = value;
    }
}

/// Which fields the user has left at least once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedSet {
    flags: [bool; 4],
}

impl TouchedSet {
    pub fn is_touched(&self, field: FieldName) -> bool {
        self.flags[field.index()]
    }

    pub fn touch(&mut self, field: FieldName) {
        self.flags[field.index()] = true;
    }

    pub fn touch_all(&mut self) {
        self.flags = [true; 4];
    }

    #[cfg(test)]
    pub fn any(&self) -> bool {
        self.flags.iter().any(|t| *t)
    }
}
