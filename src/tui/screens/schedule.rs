//! Schedule Screen
//!
//! The worker's calendar, filtered by time bucket (all/upcoming/ongoing/
//! past) against the app clock.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListState, Paragraph, Tabs},
};

use crate::filter::TimeBucket;
use crate::tui::{
    app::App,
    components::{
        cards::{render_empty_message, schedule_list_item},
        header::render_header,
        navigation::render_navigation,
        status_bar::render_status_bar,
    },
    screens::screen_chunks,
};

/// Render the complete schedule screen
pub fn render_schedule(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_schedule_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

fn render_schedule_content(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bucket tabs
            Constraint::Min(0),    // Shift list
        ])
        .split(area);

    render_bucket_tabs(f, app, rows[0]);

    if app.state.schedule.state.is_loading() && !app.state.schedule.state.is_refreshing() {
        let loading = Paragraph::new("Loading schedule...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(loading, rows[1]);
        return;
    }

    let visible = app.visible_schedule();
    if visible.is_empty() {
        render_empty_message(
            f,
            "No shifts found",
            &format!(
                "There are no {} shifts to display",
                app.state.schedule.tab.label().to_lowercase()
            ),
            rows[1],
        );
        return;
    }

    let items: Vec<_> = visible.iter().map(schedule_list_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("My Schedule ({})", visible.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 30, 60)));

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.schedule.selected.min(visible.len() - 1)));
    f.render_stateful_widget(list, rows[1], &mut list_state);
}

fn render_bucket_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = TimeBucket::ALL
        .iter()
        .map(|bucket| Line::from(bucket.label()))
        .collect();

    let selected = TimeBucket::ALL
        .iter()
        .position(|b| *b == app.state.schedule.tab)
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
