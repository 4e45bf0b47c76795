//! UI module for rendering the TUI

mod bio;
mod components;
mod forms;
mod home;
mod layout;
mod services;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_review_dialog};
use ratatui::Frame;
pub use widgets::render_scrollable_list;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Services => services::draw(frame, main_area, app),
        View::Bio => bio::draw(frame, main_area),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    if let Some(testimonial) = app.state.open_testimonial() {
        render_review_dialog(frame, testimonial);
    }

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.queued_error_count());
    }
}
