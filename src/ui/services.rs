//! Services view: offering list with an expandable details panel

use super::render_scrollable_list;
use crate::app::App;
use crate::content::{Service, SERVICES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let expanded = app.state.expanded_service;
    let items: Vec<ListItem> = SERVICES
        .iter()
        .enumerate()
        .map(|(idx, service)| {
            let marker = if expanded == Some(idx) { "▾" } else { "▸" };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{marker} "), Style::default().fg(Color::Yellow)),
                    Span::styled(service.title, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", service.description),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Services ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));
    render_scrollable_list(frame, chunks[0], list, app.state.selected_index);

    let details = match expanded.and_then(|idx| SERVICES.get(idx)) {
        Some(service) => details_lines(service),
        None => vec![Line::from(Span::styled(
            "Press Enter to view details",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    frame.render_widget(
        Paragraph::new(details)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Details ").borders(Borders::ALL)),
        chunks[1],
    );
}

fn details_lines(service: &Service) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            service.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(service.details),
        Line::from(""),
        Line::from(Span::styled(
            "Popular requests",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        service
            .examples
            .iter()
            .map(|example| Line::from(format!("  • {example}"))),
    );
    lines
}
