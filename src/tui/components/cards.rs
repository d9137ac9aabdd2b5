//! Card Components
//!
//! List rows and small panels shared by the screens: shift rows, schedule
//! rows, booking rows, stat cards, the next-shift banner, and the wallet
//! summary card.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
};

use crate::model::{BookedShift, BookingStatus, DashboardStats, ScheduledShift, Shift};
use crate::tui::components::{rgb, ACCENT, POSITIVE};

/// Favorite marker
fn favorite_span(is_favorite: bool) -> Span<'static> {
    if is_favorite {
        Span::styled("♥", Style::default().fg(Color::Red))
    } else {
        Span::styled("♡", Style::default().fg(Color::DarkGray))
    }
}

/// Role badge, colored per license type
fn role_badge(role_type: crate::model::RoleType) -> Span<'static> {
    Span::styled(
        format!("[{}]", role_type.as_str()),
        Style::default()
            .fg(rgb(role_type.badge_color()))
            .add_modifier(Modifier::BOLD),
    )
}

/// A marketplace shift as a three-line list row
pub fn shift_list_item(shift: &Shift) -> ListItem<'static> {
    let mut title_spans = vec![
        role_badge(shift.role_type),
        Span::raw(" "),
        Span::styled(
            shift.role.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        favorite_span(shift.is_favorite),
    ];
    if shift.long_term {
        title_spans.push(Span::styled(
            " LONG TERM",
            Style::default().fg(Color::Cyan),
        ));
    }

    let lines = vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            format!("  {}", shift.location),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {} · {}", shift.date_label(), shift.time_label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" · ${}/hr", shift.hourly_rate),
                Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {} mi", shift.distance_miles),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    ListItem::new(lines)
}

/// A calendar shift as a three-line list row
pub fn schedule_list_item(shift: &ScheduledShift) -> ListItem<'static> {
    let mut title_spans = vec![
        role_badge(shift.role_type),
        Span::raw(" "),
        Span::styled(
            shift.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        favorite_span(shift.is_favorite),
    ];
    if let Some(badge) = &shift.badge {
        title_spans.push(Span::styled(
            format!(" {}", badge),
            Style::default().fg(Color::Cyan),
        ));
    }

    let status_color = match shift.status {
        crate::model::ScheduleStatus::Scheduled => POSITIVE,
        crate::model::ScheduleStatus::Requested => Color::Yellow,
    };

    let lines = vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            format!("  {}", shift.location),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {} · {}", shift.date_label(), shift.time_label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" · ${}/hr", shift.hourly_rate),
                Style::default().fg(POSITIVE),
            ),
            Span::raw(" · "),
            Span::styled(shift.status.as_str(), Style::default().fg(status_color)),
        ]),
    ];

    ListItem::new(lines)
}

/// A booking as a three-line list row
pub fn booking_list_item(booking: &BookedShift) -> ListItem<'static> {
    let status_color = match booking.status {
        BookingStatus::Upcoming => Color::Blue,
        BookingStatus::Completed => POSITIVE,
        BookingStatus::Canceled => Color::Red,
    };

    let lines = vec![
        Line::from(vec![
            role_badge(booking.role_type),
            Span::raw(" "),
            Span::styled(
                booking.facility.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", booking.status.as_str()),
                Style::default().fg(status_color),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", booking.location),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {} · {}", booking.date_label, booking.time_label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" · ${}", booking.amount),
                Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    ListItem::new(lines)
}

/// The next-shift banner on the home dashboard
pub fn render_next_shift(f: &mut Frame, time: &str, location: &str, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::styled("Next shift: ", Style::default().fg(Color::Gray)),
            Span::styled(
                time.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            location.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let banner = Paragraph::new(content).block(
        Block::default()
            .title("Upcoming")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(banner, area);
}

/// One stat card (value + label)
pub fn render_stat_card(
    f: &mut Frame,
    value: String,
    label: &str,
    color: Color,
    area: Rect,
) {
    let content = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(card, area);
}

/// The stat cards row on the home dashboard
pub fn render_stats_row(f: &mut Frame, stats: &DashboardStats, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_stat_card(
        f,
        stats.scheduled_shifts.to_string(),
        "Scheduled Shifts",
        Color::Rgb(13, 148, 136),
        chunks[0],
    );
    render_stat_card(
        f,
        stats.worked_shifts.to_string(),
        "Worked",
        Color::Rgb(59, 130, 246),
        chunks[1],
    );
    render_stat_card(
        f,
        stats.cancelled_shifts.to_string(),
        "Cancelled",
        Color::Rgb(239, 68, 68),
        chunks[2],
    );
}

/// The wallet summary card on the home dashboard
pub fn render_wallet_card(f: &mut Frame, stats: &DashboardStats, area: Rect) {
    let content = Line::from(vec![
        Span::styled("PENDING ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("${}", stats.pending_earnings),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("TOTAL ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("${}", stats.total_earnings),
            Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD),
        ),
        Span::styled("    w:Open wallet", Style::default().fg(Color::DarkGray)),
    ]);

    let card = Paragraph::new(content).block(
        Block::default()
            .title("My Wallet")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(card, area);
}

/// Centered placeholder for empty lists
pub fn render_empty_message(f: &mut Frame, title: &str, description: &str, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        area,
    );
}
