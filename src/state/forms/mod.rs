//! Contact form domain layer
//!
//! Field values, touched flags and the pure validation rules that the
//! submission controller and the contact page build on.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FieldSet, TouchedSet};
pub use form_state::{ContactForm, Form};
pub use validation::{compute_errors, ErrorSet};
