//! Header Component
//!
//! Top header bar with the application title, a greeting for the signed-in
//! worker, and the current date.

use crate::tui::app::App;
use chrono::Timelike;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render the header component
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Title section
            Constraint::Min(1),     // Greeting
            Constraint::Length(16), // Date
        ])
        .split(area);

    let title = Paragraph::new("  SHIFTDECK")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(title, header_chunks[0]);

    let greeting = Paragraph::new(greeting_text(app))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(app.state.route.display_name()),
        );
    f.render_widget(greeting, header_chunks[1]);

    let date = Paragraph::new(app.now().format("%a %b %-d").to_string())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Today"),
        );
    f.render_widget(date, header_chunks[2]);
}

/// Time-of-day greeting for the signed-in worker
fn greeting_text(app: &App) -> String {
    let greeting = match app.now().hour() {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{}, {}", greeting, app.config.profile.name)
}
