//! Schedule Detail Screen
//!
//! Detail view for one calendar shift. Unknown ids land on the not-found
//! view with a manual back action.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::filter::TimeBucket;
use crate::model::ScheduledShift;
use crate::tui::{
    app::App,
    components::{
        header::render_header, navigation::render_navigation, rgb,
        status_bar::render_status_bar, ACCENT, POSITIVE,
    },
    screens::{screen_chunks, shift_details::render_not_found},
};

/// Render the complete schedule detail screen
pub fn render_schedule_details(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_details_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

fn render_details_content(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state.schedule_details.state;

    if state.is_loading() {
        let loading = Paragraph::new("Loading shift details...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(loading, area);
        return;
    }

    if state.is_not_found() {
        render_not_found(f, area, "Shift not found");
        return;
    }

    let Some(shift) = state.loaded() else {
        return;
    };

    render_loaded_details(f, area, shift, app);
}

fn render_loaded_details(f: &mut Frame, area: Rect, shift: &ScheduledShift, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Role + location
            Constraint::Length(6), // Schedule facts
            Constraint::Min(0),
        ])
        .split(area);

    let favorite = if shift.is_favorite { "♥" } else { "♡" };
    let mut title_line = vec![
        Span::styled(
            format!("[{}] ", shift.role_type.as_str()),
            Style::default()
                .fg(rgb(shift.role_type.badge_color()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            shift.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", favorite), Style::default().fg(Color::Red)),
    ];
    if let Some(badge) = &shift.badge {
        title_line.push(Span::styled(
            format!(" {}", badge),
            Style::default().fg(Color::Cyan),
        ));
    }

    let summary = vec![
        Line::from(title_line),
        Line::from(Span::styled(
            shift.location.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Status: {}", shift.status.as_str()),
            Style::default().fg(ACCENT),
        )),
    ];
    f.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .padding(Padding::horizontal(1)),
        ),
        rows[0],
    );

    let bucket = TimeBucket::of(shift.start, shift.end, app.now());
    let facts = vec![
        Line::from(vec![
            Span::styled("When      ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} · {}", shift.date_label(), shift.time_label()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Pay       ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("${}/hr (${} total)", shift.hourly_rate, shift.total_pay()),
                Style::default().fg(POSITIVE),
            ),
        ]),
        Line::from(vec![
            Span::styled("Distance  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} miles", shift.distance_miles),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Timing    ", Style::default().fg(Color::Gray)),
            Span::styled(bucket.label(), Style::default().fg(Color::Cyan)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(facts).block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        ),
        rows[1],
    );
}
