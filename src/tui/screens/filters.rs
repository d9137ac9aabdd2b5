//! Filters Screen
//!
//! Edits a draft filter selection: free-text search, distance
//! (single-select), licenses (multi-select), job type and day
//! (single-select). Applying commits the draft to the shifts list.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::filter::{FilterOption, MultiSelect, SingleSelect};
use crate::tui::{
    app::{App, FilterFocus},
    components::{
        header::render_header, navigation::render_navigation,
        status_bar::render_status_bar, ACCENT,
    },
    screens::screen_chunks,
};

/// Render the complete filters screen
pub fn render_filters(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, app, chunks[0]);
    render_navigation(f, &app.state, chunks[1]);
    render_filters_content(f, chunks[2], app);
    render_status_bar(f, &app.state, chunks[3]);
}

fn render_filters_content(f: &mut Frame, area: Rect, app: &App) {
    let screen = &app.state.filters_screen;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(3), // Distance
            Constraint::Length(3), // Licenses
            Constraint::Length(3), // Job type
            Constraint::Length(3), // Day
            Constraint::Min(0),
        ])
        .split(area);

    render_search_box(f, app, rows[0]);
    render_single_select(
        f,
        "Distance from your address",
        &screen.draft.distance,
        screen.focus == FilterFocus::Distance,
        screen.option_cursor,
        rows[1],
    );
    render_multi_select(
        f,
        "Licence",
        &screen.draft.licenses,
        screen.focus == FilterFocus::Licenses,
        screen.option_cursor,
        rows[2],
    );
    render_single_select(
        f,
        "Job type",
        &screen.draft.job_type,
        screen.focus == FilterFocus::JobType,
        screen.option_cursor,
        rows[3],
    );
    render_single_select(
        f,
        "Day of week",
        &screen.draft.day,
        screen.focus == FilterFocus::Day,
        screen.option_cursor,
        rows[4],
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("a", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(":Apply filters   ", Style::default().fg(Color::Gray)),
        Span::styled("x", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(":Reset   ", Style::default().fg(Color::Gray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(":Back without applying", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(hint, rows[5]);
}

fn border_color(focused: bool, editing: bool) -> Color {
    if editing {
        Color::Green
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

fn render_search_box(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.state.filters_screen;
    let focused = screen.focus == FilterFocus::Search;

    let title = if screen.editing_search {
        "Search [EDITING]"
    } else {
        "Search"
    };

    let value = screen.search_input.value();
    let content = if value.is_empty() && !screen.editing_search {
        Line::from(Span::styled(
            "Skill, facility etc",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        )];
        if screen.editing_search {
            spans.push(Span::styled("▏", Style::default().fg(Color::Green)));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused, screen.editing_search)))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Options rendered inline; the selected one is marked, the cursor is
/// underlined while the category has focus
fn option_spans<'a>(
    options: &'a [FilterOption],
    is_selected: impl Fn(usize) -> bool,
    focused: bool,
    cursor: usize,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let mut style = if is_selected(i) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if focused && cursor == i {
            style = style.add_modifier(Modifier::UNDERLINED).fg(Color::Yellow);
        }
        let marker = if is_selected(i) { "●" } else { "○" };
        spans.push(Span::styled(
            format!("{} {}  ", marker, option.label),
            style,
        ));
    }
    spans
}

fn render_single_select(
    f: &mut Frame,
    title: &str,
    select: &SingleSelect,
    focused: bool,
    cursor: usize,
    area: Rect,
) {
    let spans = option_spans(
        select.options(),
        |i| i == select.selected_index(),
        focused,
        cursor,
    );
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused, false)))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_multi_select(
    f: &mut Frame,
    title: &str,
    select: &MultiSelect,
    focused: bool,
    cursor: usize,
    area: Rect,
) {
    let spans = option_spans(
        select.options(),
        |i| select.is_selected_index(i),
        focused,
        cursor,
    );
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused, false)))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
