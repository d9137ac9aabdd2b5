//! Wallet Screen
//!
//! Earnings balances, the masked payout account, and payment activity.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::model::{PaymentActivity, PaymentStatus};
use crate::tui::{
    app::App,
    components::{
        header::render_header, navigation::render_navigation,
        status_bar::render_status_bar, ACCENT, POSITIVE,
    },
    screens::screen_chunks,
};

/// Render the complete wallet screen
pub fn render_wallet(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_wallet_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

fn render_wallet_content(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Balance cards
            Constraint::Length(3), // Payout account
            Constraint::Min(0),    // Payment activity
        ])
        .split(area);

    render_balances(f, app, rows[0]);

    let account = Paragraph::new(Line::from(vec![
        Span::styled("Account ", Style::default().fg(Color::Gray)),
        Span::styled("********1234", Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .title("Payout account")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(account, rows[1]);

    render_activity(f, &app.state.store.payments, rows[2]);
}

fn render_balances(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let total = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("${}", app.state.store.stats.total_earnings),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Total Earnings",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(total, chunks[0]);

    let pending = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("${}", app.state.store.stats.pending_earnings),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Processing",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(pending, chunks[1]);
}

fn render_activity(f: &mut Frame, payments: &[PaymentActivity], area: Rect) {
    let items: Vec<ListItem> = payments
        .iter()
        .map(|activity| {
            let (status_label, status_color) = match activity.status {
                PaymentStatus::Success => ("Success", POSITIVE),
                PaymentStatus::Processing => ("Processing", Color::Yellow),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<18}", activity.title()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<14}", activity.date_label),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("${:<8}", activity.amount),
                    Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(status_label, Style::default().fg(status_color)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Payment Activity")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(list, area);
}
