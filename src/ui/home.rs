//! Home view

use crate::app::App;
use crate::content::{
    truncate_words, Testimonial, BRAND, HOME_INTRO, PREVIEW_WORDS, PROCESS_STEPS, SERVICES,
    TAGLINE, TESTIMONIALS, TESTIMONIALS_LEAD,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows for the feedback block: borders, lead line and the cards
const FEEDBACK_HEIGHT: u16 = 12;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),               // Hero
            Constraint::Min(5),                  // Services snapshot + process
            Constraint::Length(3),               // Call to action
            Constraint::Length(FEEDBACK_HEIGHT), // Client feedback
        ])
        .split(area);

    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(BRAND, heading)),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(HOME_INTRO),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));
    frame.render_widget(hero, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let snapshot: Vec<Line> = SERVICES
        .iter()
        .flat_map(|service| {
            [
                Line::from(Span::styled(
                    service.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    service.description,
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(snapshot)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" What we offer ").borders(Borders::ALL)),
        columns[0],
    );

    let process: Vec<Line> = PROCESS_STEPS
        .iter()
        .enumerate()
        .flat_map(|(idx, (name, blurb))| {
            [
                Line::from(Span::styled(format!("{}. {name}", idx + 1), heading)),
                Line::from(*blurb),
                Line::from(""),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(process)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" How it works ").borders(Borders::ALL)),
        columns[1],
    );

    let cta = Paragraph::new(Line::from(vec![
        Span::raw("Planning something? Press "),
        Span::styled("c", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" to start a conversation."),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)));
    frame.render_widget(cta, chunks[2]);

    draw_feedback(frame, chunks[3], app.state.selected_testimonial);
}

fn draw_feedback(frame: &mut Frame, area: Rect, selected: usize) {
    let block = Block::default().title(" Client Feedback ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(TESTIMONIALS_LEAD, Style::default().fg(Color::Gray))),
        rows[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, TESTIMONIALS.len() as u32);
            TESTIMONIALS.len()
        ])
        .split(rows[1]);
    for (idx, testimonial) in TESTIMONIALS.iter().enumerate() {
        draw_testimonial_card(frame, cards[idx], testimonial, idx == selected);
    }
}

/// Stars, the shortened quote, the client name and a "Read full review" row
fn draw_testimonial_card(
    frame: &mut Frame,
    area: Rect,
    testimonial: &Testimonial,
    selected: bool,
) {
    let border = if selected { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let preview = truncate_words(testimonial.quote, PREVIEW_WORDS);
    let body = Paragraph::new(vec![
        Line::from(Span::styled("*****", Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            format!("\u{201c}{preview}\u{201d}"),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("- {}", testimonial.name),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, rows[0]);

    let button = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(" Read full review ", button)).alignment(Alignment::Center),
        rows[1],
    );
}
