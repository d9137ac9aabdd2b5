//! Profile Screen
//!
//! The worker's identity card plus categorized settings entries. The
//! activity rows navigate to the bookings and wallet screens; the rest are
//! placeholders for surfaces this build does not carry.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::tui::{
    app::{App, Route},
    components::{
        header::render_header, navigation::render_navigation,
        status_bar::render_status_bar, ACCENT,
    },
    screens::screen_chunks,
};

/// One settings entry
pub struct SettingRow {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target: Option<Route>,
}

/// The settings entries, grouped by category, in display order
pub fn setting_rows() -> Vec<SettingRow> {
    vec![
        SettingRow {
            category: "Activity",
            title: "My Bookings",
            description: "View and manage your shifts",
            target: Some(Route::Bookings),
        },
        SettingRow {
            category: "Activity",
            title: "Payments",
            description: "Payment methods and history",
            target: Some(Route::Wallet),
        },
        SettingRow {
            category: "Account",
            title: "Profile Settings",
            description: "Update your personal information",
            target: None,
        },
        SettingRow {
            category: "Account",
            title: "Notifications",
            description: "Manage your notification preferences",
            target: None,
        },
        SettingRow {
            category: "Account",
            title: "Security",
            description: "Password and authentication settings",
            target: None,
        },
        SettingRow {
            category: "Preferences",
            title: "Language",
            description: "Change your app language",
            target: None,
        },
        SettingRow {
            category: "Preferences",
            title: "Appearance",
            description: "Light, dark and system themes",
            target: None,
        },
        SettingRow {
            category: "Support",
            title: "Help Center",
            description: "Get help with using the app",
            target: None,
        },
    ]
}

/// Render the complete profile screen
pub fn render_profile(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_profile_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

fn render_profile_content(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Identity card
            Constraint::Min(0),    // Settings list
        ])
        .split(area);

    let identity = Paragraph::new(vec![
        Line::from(Span::styled(
            app.config.profile.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.config.profile.email.clone(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(identity, rows[0]);

    let setting_rows = setting_rows();
    let items: Vec<ListItem> = setting_rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", row.category),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<18}", row.title),
                    Style::default().fg(Color::White),
                ),
                Span::styled(row.description, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Settings")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 30, 60)));

    let mut list_state = ListState::default();
    list_state.select(Some(
        app.state.profile.selected.min(setting_rows.len().saturating_sub(1)),
    ));
    f.render_stateful_widget(list, rows[1], &mut list_state);
}
