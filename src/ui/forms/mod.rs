//! Form rendering module
//!
//! - `field_renderer`: input box with inline error line
//! - `contact_form`: the Contact view

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact;
