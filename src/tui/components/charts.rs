//! Chart Components
//!
//! Renders a [`ChartSection`] as a bordered card: title and badge, the
//! chart-kind selector, the chart body for the active kind, an optional
//! legend, and the metrics row. The bar body uses ratatui's `BarChart`, the
//! line body its `Chart` widget, and the pie body renders as proportional
//! share rows since the terminal has no arc to offer.

use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Padding, Paragraph},
};

use crate::chart::{ChartKind, ChartSection, ChartSeries};
use crate::tui::components::{rgb, ACCENT, POSITIVE};

/// Render a complete chart section card
pub fn render_chart_section(f: &mut Frame, section: &ChartSection, area: Rect, focused: bool) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };

    let block = Block::default()
        .title(section_title(section))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let has_selector = section.available_kinds().len() > 1;
    let series = section.active_series();
    let has_legend = !series.legend().is_empty() && section.active_kind() != ChartKind::Pie;
    let has_metrics = !section.metrics.is_empty();

    let mut constraints = Vec::new();
    if has_selector {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(3));
    if has_legend {
        constraints.push(Constraint::Length(1));
    }
    if has_metrics {
        constraints.push(Constraint::Length(2));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut next = 0;
    if has_selector {
        render_kind_selector(f, section, chunks[next]);
        next += 1;
    }

    let body = chunks[next];
    next += 1;
    let highlight = section.selection.highlight(series);
    let cursor = focused.then_some(section.cursor);
    match section.active_kind() {
        ChartKind::Bar => render_bar_chart(f, series, highlight, cursor, body),
        ChartKind::Line => render_line_chart(f, series, highlight, cursor, body),
        ChartKind::Pie => render_pie_chart(f, series, highlight, cursor, body),
    }

    if has_legend {
        render_legend(f, series, chunks[next]);
        next += 1;
    }

    if has_metrics {
        render_metrics(f, section, chunks[next]);
    }
}

/// Card title: section title plus the badge and its value
fn section_title(section: &ChartSection) -> Line {
    let mut spans = vec![Span::styled(
        section.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(badge) = &section.badge {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", badge),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(value) = &section.badge_value {
        spans.push(Span::styled(
            format!(" {}", value),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Mutually exclusive chart-kind selector
fn render_kind_selector(f: &mut Frame, section: &ChartSection, area: Rect) {
    let mut spans = Vec::new();
    for kind in section.available_kinds() {
        let active = kind == section.active_kind();
        let style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = if active {
            format!("[{}] ", kind.label())
        } else {
            format!(" {}  ", kind.label())
        };
        spans.push(Span::styled(text, style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Bar rendering with per-point colors and highlight
fn render_bar_chart(
    f: &mut Frame,
    series: &ChartSeries,
    highlight: Option<usize>,
    cursor: Option<usize>,
    area: Rect,
) {
    let bars: Vec<Bar> = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = rgb(series.point_color(i, highlight));
            let label_style = if cursor == Some(i) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .label(Line::from(Span::styled(
                    series.labels()[i].clone(),
                    label_style,
                )))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let bar_width = bar_width_for(area.width, series.len() as u16);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
}

/// Pick a bar width that fits every bar into the available area
fn bar_width_for(area_width: u16, bars: u16) -> u16 {
    if bars == 0 {
        return 1;
    }
    // One column of gap between bars
    let usable = area_width.saturating_sub(bars.saturating_sub(1));
    (usable / bars).clamp(1, 9)
}

/// Line rendering via the Chart widget
fn render_line_chart(
    f: &mut Frame,
    series: &ChartSeries,
    highlight: Option<usize>,
    cursor: Option<usize>,
    area: Rect,
) {
    let points: Vec<(f64, f64)> = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let max = series.points().iter().cloned().fold(0.0_f64, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

    let line_color = highlight
        .map(|i| rgb(series.point_color(i, highlight)))
        .unwrap_or(ACCENT);

    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(line_color))
        .data(&points)];

    let x_labels: Vec<Span> = series
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if cursor == Some(i) {
                Span::styled(
                    label.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else if highlight == Some(i) {
                Span::styled(label.clone(), Style::default().fg(ACCENT))
            } else {
                Span::styled(label.clone(), Style::default().fg(Color::Gray))
            }
        })
        .collect();

    let y_labels = vec![
        Span::styled("0", Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.0}", y_max / 2.0), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.0}", y_max), Style::default().fg(Color::Gray)),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (series.len().saturating_sub(1)) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Pie rendering as proportional share rows
fn render_pie_chart(
    f: &mut Frame,
    series: &ChartSeries,
    highlight: Option<usize>,
    cursor: Option<usize>,
    area: Rect,
) {
    let total = series.total();
    let bar_budget = area.width.saturating_sub(30).max(4) as f64;

    let lines: Vec<Line> = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let share = if total > 0.0 { value / total } else { 0.0 };
            let color = rgb(series.point_color(i, highlight));
            let marker_style = if cursor == Some(i) {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            let filled = "█".repeat((share * bar_budget).round() as usize);
            Line::from(vec![
                Span::styled("● ", marker_style),
                Span::styled(
                    format!("{:<10}", series.labels()[i]),
                    Style::default().fg(Color::White),
                ),
                Span::styled(format!("{:>5.0} ", value), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:>4.0}% ", share * 100.0),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(filled, Style::default().fg(color)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Legend row under bar/line charts
fn render_legend(f: &mut Frame, series: &ChartSeries, area: Rect) {
    let mut spans = Vec::new();
    for (i, item) in series.legend().iter().enumerate() {
        let color = rgb(series.point_color(i, None));
        spans.push(Span::styled("● ", Style::default().fg(color)));
        spans.push(Span::styled(
            format!("{}  ", item),
            Style::default().fg(Color::Gray),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Caller-supplied metrics row under the chart
fn render_metrics(f: &mut Frame, section: &ChartSection, area: Rect) {
    let count = section.metrics.len().max(1) as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (metric, chunk) in section.metrics.iter().zip(chunks.iter()) {
        let value_color = if metric.accent { POSITIVE } else { Color::White };
        let text = vec![
            Line::from(Span::styled(
                metric.label.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                metric.value.clone(),
                Style::default()
                    .fg(value_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            *chunk,
        );
    }
}
