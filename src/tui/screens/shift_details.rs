//! Shift Detail Screen
//!
//! Full detail for one marketplace shift, with the booking confirmation
//! flow. Unknown ids land on the not-found view with a manual back action.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::model::ShiftDetails;
use crate::tui::{
    app::{App, BookingPrompt},
    components::{header::render_header, navigation::render_navigation, status_bar::render_status_bar, rgb, ACCENT, POSITIVE},
    screens::{centered_rect, screen_chunks},
};

/// Render the complete shift detail screen
pub fn render_shift_details(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_details_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);

    match app.state.shift_details.prompt {
        BookingPrompt::Confirming => render_confirm_prompt(f, chunks[2]),
        BookingPrompt::Booked => render_booked_prompt(f, chunks[2]),
        BookingPrompt::Idle => {}
    }
}

fn render_details_content(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state.shift_details.state;

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

    let Some(details) = state.loaded() else {
        return;
    };

    render_loaded_details(f, area, details);
}

/// The not-found terminal view with its manual back action
pub fn render_not_found(f: &mut Frame, area: Rect, message: &str) {
    let content = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to go back",
            Style::default().fg(ACCENT),
        )),
    ];
    f.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        centered_rect(40, 5, area),
    );
}

fn render_loaded_details(f: &mut Frame, area: Rect, details: &ShiftDetails) {
    let shift = &details.shift;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Role, facility, schedule line
            Constraint::Min(5),    // Description + requirements
            Constraint::Length(4), // Contact
        ])
        .split(area);

    let favorite = if shift.is_favorite { "♥" } else { "♡" };
    let summary = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", shift.role_type.as_str()),
                Style::default()
                    .fg(rgb(shift.role_type.badge_color()))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                shift.role.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", favorite), Style::default().fg(Color::Red)),
        ]),
        Line::from(Span::styled(
            format!("{} · {}", details.facility_name, details.address),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} · {}", shift.date_label(), shift.time_label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" · ${}/hr", shift.hourly_rate),
                Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {} mi away · b:Book this shift", shift.distance_miles),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
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

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    f.render_widget(
        Paragraph::new(details.description.clone())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title("About this role")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            ),
        body_chunks[0],
    );

    let requirements: Vec<Line> = details
        .requirements
        .iter()
        .map(|req| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(ACCENT)),
                Span::styled(req.clone(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(requirements).block(
            Block::default()
                .title("Requirements")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        ),
        body_chunks[1],
    );

    let contact = Line::from(vec![
        Span::styled("Contact: ", Style::default().fg(Color::Gray)),
        Span::styled(
            details.contact_person.clone(),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" · {}", details.contact_phone),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(contact).block(
            Block::default()
                .title("Facility contact")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        ),
        rows[2],
    );
}

/// Booking confirmation overlay
fn render_confirm_prompt(f: &mut Frame, area: Rect) {
    let popup = centered_rect(46, 6, area);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to book this shift?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD)),
            Span::styled(":Confirm   ", Style::default().fg(Color::Gray)),
            Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", Style::default().fg(Color::Gray)),
        ]),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .title("Confirm Booking")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        popup,
    );
}

/// Post-booking overlay
fn render_booked_prompt(f: &mut Frame, area: Rect) {
    let popup = centered_rect(46, 6, area);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This shift has been added to your schedule.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("v", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(":View bookings   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default().fg(POSITIVE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(":Find more shifts", Style::default().fg(Color::Gray)),
        ]),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .title("Shift Booked!")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POSITIVE)),
        ),
        popup,
    );
}
