//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_action_button, render_sidebar_button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_review_dialog};
