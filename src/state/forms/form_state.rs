//! Contact form state: field values, touched flags and focus

use super::field::{FieldName, FieldSet, TouchedSet};
use super::validation::ErrorSet;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus slot of the Send button row
pub const SEND_BUTTON_INDEX: usize = 4;

/// Holds what the user typed and which fields they have visited
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FieldSet,
    touched: TouchedSet,
    /// 0..=3 are the fields in `FieldName::ALL` order, 4 is the Send button
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    #[cfg(test)]
    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.fields.get(field)
    }

    /// Overwrite a field's value. Touched flags are left alone.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Mark a field as visited. Idempotent.
    pub fn touch(&mut self, field: FieldName) {
        self.touched.touch(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.touch_all();
    }

    /// Clear every value and touched flag; focus is kept
    pub fn reset(&mut self) {
        self.fields = FieldSet::default();
        self.touched = TouchedSet::default();
    }

    /// The error to show for a field: hidden until the field is touched
    pub fn displayed_error(&self, field: FieldName, errors: &ErrorSet) -> &'static str {
        if self.touched.is_touched(field) {
            errors.get(field)
        } else {
            ""
        }
    }

    /// Field under focus, or `None` on the Send button
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_send_button_active(&self) -> bool {
        self.active_field_index == SEND_BUTTON_INDEX
    }

    /// Move focus straight to a field
    #[cfg(test)]
    pub fn focus(&mut self, field: FieldName) {
        self.set_active_field(field.index());
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field_name() {
            self.fields.get_mut(field).push(c);
        }
    }

    /// Remove the last character from the focused field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_field_name() {
            self.fields.get_mut(field).pop();
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, title, message, send button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus off a field counts as leaving it
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SEND_BUTTON_INDEX);
        if index != self.active_field_index {
            if let Some(left) = self.active_field_name() {
                self.touch(left);
            }
        }
        self.active_field_index = index;
    }
}
