//! Shifts Marketplace Screen
//!
//! Open shifts near the configured search address: location header, the
//! filtered shift list, favorite toggling, and navigation into details.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListState, Paragraph},
};

use crate::tui::{
    app::App,
    components::{
        cards::{render_empty_message, shift_list_item},
        header::render_header,
        navigation::render_navigation,
        status_bar::render_status_bar,
        ACCENT,
    },
    screens::screen_chunks,
};

/// Render the complete shifts screen
pub fn render_shifts(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_shifts_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

fn render_shifts_content(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Location header
            Constraint::Min(0),    // Shift list
        ])
        .split(area);

    render_location_header(f, app, rows[0]);

    if app.state.shifts.state.is_loading() && !app.state.shifts.state.is_refreshing() {
        let loading = Paragraph::new("Loading shifts...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(loading, rows[1]);
        return;
    }

    let visible = app.visible_shifts();
    if visible.is_empty() {
        render_empty_message(
            f,
            "No shifts available",
            "Try adjusting your search criteria",
            rows[1],
        );
        return;
    }

    let items: Vec<_> = visible.iter().map(shift_list_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Available Shifts ({})", visible.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 30, 60)));

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.shifts.selected.min(visible.len() - 1)));
    f.render_stateful_widget(list, rows[1], &mut list_state);
}

/// Current search location and result summary
fn render_location_header(f: &mut Frame, app: &App, area: Rect) {
    let search = &app.config.search;
    let content = vec![
        Line::from(vec![
            Span::styled("⌖ ", Style::default().fg(ACCENT)),
            Span::styled(
                search.address.clone(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{} shifts within {} miles · o:Filters",
                search.total_results, search.radius_miles
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}
