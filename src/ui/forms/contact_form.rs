//! Contact page: the form card and the direct-contact info card

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::content::{CONTACT_EMAIL, CONTACT_LEAD, CONTACT_PHONE, HOURS, QUOTE_NOTE, SERVICE_AREA};
use crate::platform::SEND_SHORTCUT;
use crate::state::{compute_errors, ContactPage, FieldName, SubmissionStatus};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows for a single-line field: bordered input plus the error line
const FIELD_HEIGHT: u16 = 4;

/// Draw the Contact view
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.state.contact.as_ref() else {
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    draw_form_card(frame, columns[0], page);
    draw_info_card(frame, columns[1]);
}

fn draw_form_card(frame: &mut Frame, area: Rect, page: &ContactPage) {
    let block = Block::default()
        .title(" Send a message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Subject
            Constraint::Min(FIELD_HEIGHT),    // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Length(1),            // Status
            Constraint::Length(1),            // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    let form = &page.form;
    let errors = compute_errors(form.fields());
    for (idx, field) in FieldName::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field,
            form.value(field),
            form.displayed_error(field, &errors),
            form.active_field_name() == Some(field),
        );
    }

    let submitting = page.controller.is_submitting();
    render_action_button(
        frame,
        chunks[4],
        if submitting { "Sending..." } else { "Send" },
        form.is_send_button_active(),
        !submitting,
    );

    if let Some(line) = status_line(page.controller.status()) {
        frame.render_widget(Paragraph::new(line), chunks[5]);
    }

    draw_help_text(
        frame,
        chunks[6],
        &format!("Tab/Shift+Tab: move  Enter: next or newline  {SEND_SHORTCUT}: send"),
    );
}

/// Green for success, red for failure, nothing when idle
fn status_line(status: &SubmissionStatus) -> Option<Line<'_>> {
    let color = if status.is_success() {
        Color::Green
    } else {
        Color::Red
    };
    status.message().map(|msg| {
        Line::from(Span::styled(
            msg,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    })
}

fn draw_info_card(frame: &mut Frame, area: Rect) {
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(CONTACT_LEAD),
        Line::from(""),
        Line::from(Span::styled("Email", label)),
        Line::from(Span::styled(CONTACT_EMAIL, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled("Phone", label)),
        Line::from(CONTACT_PHONE),
        Line::from(""),
        Line::from(Span::styled("Hours", label)),
        Line::from(HOURS),
        Line::from(""),
        Line::from(Span::styled("Service area", label)),
        Line::from(SERVICE_AREA),
        Line::from(""),
        Line::from(Span::styled(QUOTE_NOTE, Style::default().fg(Color::DarkGray))),
    ];

    let block = Block::default()
        .title(" Prefer to reach out directly? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
