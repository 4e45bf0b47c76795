//! Bio view: Sarina's story, the About cards and where to find us

use crate::content::{AboutCard, ABOUT_CARDS, BIO_PARAGRAPHS, FIND_US_PARAGRAPHS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows for the row of About cards
const CARDS_HEIGHT: u16 = 16;

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),               // Story
            Constraint::Length(CARDS_HEIGHT), // Philosophy, teaching, highlights
            Constraint::Length(8),            // Where you'll find us
        ])
        .split(area);

    let block = Block::default()
        .title(" Meet Sarina ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(paragraph_lines(BIO_PARAGRAPHS))
            .wrap(Wrap { trim: true })
            .block(block),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, ABOUT_CARDS.len() as u32);
            ABOUT_CARDS.len()
        ])
        .split(chunks[1]);
    for (card, column) in ABOUT_CARDS.iter().zip(columns.iter()) {
        draw_card(frame, *column, card);
    }

    frame.render_widget(
        Paragraph::new(paragraph_lines(FIND_US_PARAGRAPHS))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Where You'll Find Us ")
                    .borders(Borders::ALL),
            ),
        chunks[2],
    );
}

/// Paragraphs separated by blank lines
fn paragraph_lines(paragraphs: &'static [&'static str]) -> Vec<Line<'static>> {
    paragraphs
        .iter()
        .flat_map(|paragraph| [Line::from(*paragraph), Line::from("")])
        .collect()
}

fn draw_card(frame: &mut Frame, area: Rect, card: &AboutCard) {
    let mut lines: Vec<Line> = card
        .points
        .iter()
        .map(|point| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Yellow)),
                Span::raw(*point),
            ])
        })
        .collect();
    if let Some(note) = card.note {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            note,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", card.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}
