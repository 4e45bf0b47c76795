//! Dialog components for TUI

mod base;
mod error_dialog;
mod review_dialog;

pub use error_dialog::render_error_dialog;
pub use review_dialog::render_review_dialog;
