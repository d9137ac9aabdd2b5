//! Home Dashboard Screen
//!
//! The main dashboard: next-shift banner, stat cards, the three chart
//! sections (shifts worked, shift distribution, earnings trend), and the
//! wallet summary.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::mock::next_shift_banner;
use crate::tui::{
    app::App,
    components::{
        cards::{render_next_shift, render_stats_row, render_wallet_card},
        charts::render_chart_section,
        header::render_header,
        navigation::render_navigation,
        status_bar::render_status_bar,
    },
    screens::screen_chunks,
};

/// Render the complete home screen
pub fn render_home(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_home_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

/// Render the dashboard content area
fn render_home_content(f: &mut Frame, area: Rect, app: &App) {
    let home = &app.state.home;

    // First load shows a plain placeholder; refreshes keep the content up
    if home.state.is_loading() && !home.state.is_refreshing() {
        let loading = Paragraph::new("Loading dashboard data...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(loading, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Banner + stat cards
            Constraint::Min(8),    // Chart sections
            Constraint::Length(3), // Wallet summary
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let (next_time, next_location) = next_shift_banner(app.now());
    render_next_shift(f, &next_time, &next_location, top[0]);
    render_stats_row(f, &app.state.store.stats, top[1]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    for (i, section) in home.sections.iter().enumerate() {
        if let Some(chunk) = chart_chunks.get(i) {
            render_chart_section(f, section, *chunk, home.focus == i);
        }
    }

    render_wallet_card(f, &app.state.store.stats, rows[2]);
}
