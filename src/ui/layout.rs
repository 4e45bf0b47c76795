//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::{BRAND, TAGLINE};
use crate::platform::{COPY_SHORTCUT, SEND_SHORTCUT};
use crate::state::View;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 22;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the sidebar: brand header and one button per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(4)]; // Brand
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(brand, chunks[0]);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            view.shortcut(),
            view.label(),
            app.state.current_view == *view,
        );
    }
}

/// Draw the status bar: key hints, copy feedback and the footer
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = if app.state.is_review_open() {
        "Enter/Esc:close review".to_string()
    } else {
        view_hints(app.state.current_view)
    };
    let mut spans = vec![Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let footer = footer_text(chrono::Local::now().year());
    let footer_width = footer.chars().count() as u16;
    let footer_area = Rect {
        x: status_area.right().saturating_sub(footer_width),
        width: footer_width.min(status_area.width),
        ..status_area
    };
    let footer_widget =
        Paragraph::new(footer).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(footer_widget, footer_area);
}

fn footer_text(year: i32) -> String {
    format!(" © {year} {BRAND} ")
}

/// Keyboard hints for the current view
fn view_hints(view: View) -> String {
    match view {
        View::Home => {
            "1-4:pages  h/l:reviews  Enter:read review  c:contact  y:copy email  q:quit"
                .to_string()
        }
        View::Services => "j/k:nav  Enter:details  Esc:back  q:quit".to_string(),
        View::Bio => "1-4:pages  Esc:back  q:quit".to_string(),
        View::Contact => format!(
            "Tab:next  {SEND_SHORTCUT}:send  {COPY_SHORTCUT}:copy email  Esc:back"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_names_year_and_brand() {
        assert_eq!(footer_text(2026), " © 2026 Sarina's Kitchen ");
    }

    #[test]
    fn test_contact_hints_mention_send() {
        assert!(view_hints(View::Contact).contains("Ctrl+S:send"));
    }

    #[test]
    fn test_home_hints_mention_reviews() {
        assert!(view_hints(View::Home).contains("Enter:read review"));
    }

    #[test]
    fn test_layout_reserves_status_row() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(main.height, 29);
        assert_eq!(main.x, SIDEBAR_WIDTH);
    }
}
