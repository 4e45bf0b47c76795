//! Full testimonial dialog opened from the Home feedback cards

use super::base::{render_dialog, DialogConfig};
use crate::content::Testimonial;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_review_dialog(frame: &mut Frame, testimonial: &Testimonial) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let title = format!("Review from {}", testimonial.name);

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            color: Color::Cyan,
            message: testimonial.quote,
            hint: Some(Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", key),
                Span::raw(" or "),
                Span::styled("Esc", key),
                Span::raw(" to close"),
            ])),
            max_width: 70,
        },
    );
}
