//! Bookings Screen
//!
//! Confirmed bookings filtered by status tab.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListState, Tabs},
};

use crate::filter::BookingTab;
use crate::tui::{
    app::App,
    components::{
        cards::{booking_list_item, render_empty_message},
        header::render_header,
        navigation::render_navigation,
        status_bar::render_status_bar,
    },
    screens::screen_chunks,
};

/// Render the complete bookings screen
pub fn render_bookings(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_bookings_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

fn render_bookings_content(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status tabs
            Constraint::Min(0),    // Booking list
        ])
        .split(area);

    render_status_tabs(f, app, rows[0]);

    let visible = app.visible_bookings();
    if visible.is_empty() {
        render_empty_message(
            f,
            "No bookings",
            &format!(
                "There are no {} bookings to display",
                app.state.bookings.tab.label().to_lowercase()
            ),
            rows[1],
        );
        return;
    }

    let items: Vec<_> = visible.iter().map(booking_list_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("My Bookings ({})", visible.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 30, 60)));

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.bookings.selected.min(visible.len() - 1)));
    f.render_stateful_widget(list, rows[1], &mut list_state);
}

fn render_status_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = BookingTab::ALL
        .iter()
        .map(|tab| Line::from(tab.label()))
        .collect();

    let selected = BookingTab::ALL
        .iter()
        .position(|t| *t == app.state.bookings.tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Filter"),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected)
        .divider("|");

    f.render_widget(tabs, area);
}
