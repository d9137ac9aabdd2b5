//! Chart Data Contract
//!
//! This module defines the data side of the charting layer: a validated
//! label/value series, the chart kind union, the press/selection model, and
//! the section-level configuration (title, badge, kind selector, metrics).
//! Rendering lives in `tui::components::charts`; everything here is plain
//! data so it can be exercised without a terminal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default color for unhighlighted data points (light gray)
pub const DEFAULT_POINT_COLOR: (u8, u8, u8) = (229, 231, 235);

/// Highlight color for the active data point (purple)
pub const ACTIVE_POINT_COLOR: (u8, u8, u8) = (139, 92, 246);

/// Chart series validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Labels and data points must pair up one-to-one
    #[error("series has {labels} labels but {points} data points")]
    LengthMismatch { labels: usize, points: usize },

    /// Per-point colors, when supplied, must cover every point
    #[error("series has {colors} colors but {points} data points")]
    ColorCountMismatch { colors: usize, points: usize },

    /// Active index must address an existing point
    #[error("active index {index} out of range for {points} data points")]
    ActiveIndexOutOfRange { index: usize, points: usize },

    /// A series must contain at least one point
    #[error("series is empty")]
    Empty,
}

/// Supported chart renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    /// Selector label, e.g. "Bar"
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Pie => "Pie",
        }
    }
}

/// An ordered sequence of labeled numeric data points.
///
/// Construction validates the pairing invariants up front: a mismatched
/// label/point count or an out-of-range active index is an error, never a
/// silently garbled rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    labels: Vec<String>,
    points: Vec<f64>,
    colors: Option<Vec<(u8, u8, u8)>>,
    active_index: Option<usize>,
    stroke_width: u16,
    legend: Vec<String>,
}

impl ChartSeries {
    /// Create a series from paired labels and points
    pub fn new(
        labels: Vec<impl Into<String>>,
        points: Vec<f64>,
    ) -> Result<Self, ChartError> {
        if points.is_empty() {
            return Err(ChartError::Empty);
        }
        if labels.len() != points.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                points: points.len(),
            });
        }
        Ok(Self {
            labels: labels.into_iter().map(Into::into).collect(),
            points,
            colors: None,
            active_index: None,
            stroke_width: 2,
            legend: Vec::new(),
        })
    }

    /// Attach one color per point
    pub fn with_colors(mut self, colors: Vec<(u8, u8, u8)>) -> Result<Self, ChartError> {
        if colors.len() != self.points.len() {
            return Err(ChartError::ColorCountMismatch {
                colors: colors.len(),
                points: self.points.len(),
            });
        }
        self.colors = Some(colors);
        Ok(self)
    }

    /// Highlight one point from the start
    pub fn with_active_index(mut self, index: usize) -> Result<Self, ChartError> {
        if index >= self.points.len() {
            return Err(ChartError::ActiveIndexOutOfRange {
                index,
                points: self.points.len(),
            });
        }
        self.active_index = Some(index);
        Ok(self)
    }

    /// Line stroke width (line charts only)
    pub fn with_stroke_width(mut self, width: u16) -> Self {
        self.stroke_width = width;
        self
    }

    /// Legend entries rendered under bar/line charts
    pub fn with_legend(mut self, legend: Vec<impl Into<String>>) -> Self {
        self.legend = legend.into_iter().map(Into::into).collect();
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn stroke_width(&self) -> u16 {
        self.stroke_width
    }

    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    /// Color for one point, accounting for the supplied palette and the
    /// resolved highlight index
    pub fn point_color(&self, index: usize, highlight: Option<usize>) -> (u8, u8, u8) {
        if highlight == Some(index) {
            return ACTIVE_POINT_COLOR;
        }
        self.colors
            .as_ref()
            .and_then(|c| c.get(index).copied())
            .unwrap_or(DEFAULT_POINT_COLOR)
    }

    /// Sum of all points (pie share denominator)
    pub fn total(&self) -> f64 {
        self.points.iter().sum()
    }
}

/// A press on a chart point, reported to the owning screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPress {
    pub value: f64,
    pub index: usize,
}

/// User-driven point selection for a series.
///
/// Pressing an index selects it; pressing the selected index again clears
/// the selection. Every valid press is reported so the owning screen can
/// react to the underlying value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSelection {
    selected: Option<usize>,
}

impl ChartSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press the point at `index`. Returns the press report, or an error if
    /// the index does not address a point in the series.
    pub fn press(
        &mut self,
        series: &ChartSeries,
        index: usize,
    ) -> Result<ChartPress, ChartError> {
        if index >= series.len() {
            return Err(ChartError::ActiveIndexOutOfRange {
                index,
                points: series.len(),
            });
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(ChartPress {
            value: series.points()[index],
            index,
        })
    }

    /// Currently selected index, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The index to highlight: the user's selection wins over the series
    /// default
    pub fn highlight(&self, series: &ChartSeries) -> Option<usize> {
        self.selected.or_else(|| series.active_index())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// A label/value pair rendered in the metrics row under a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartMetric {
    pub label: String,
    pub value: String,
    pub accent: bool,
}

impl ChartMetric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            accent: false,
        }
    }

    /// Render the value in the accent color (e.g. earnings green)
    pub fn accented(mut self) -> Self {
        self.accent = true;
        self
    }
}

/// Section-level chart configuration: a titled card with an allow-listed
/// kind selector, one series per kind, and an optional metrics row.
#[derive(Debug, Clone)]
pub struct ChartSection {
    pub title: String,
    pub badge: Option<String>,
    pub badge_value: Option<String>,
    series: Vec<(ChartKind, ChartSeries)>,
    active_kind: ChartKind,
    pub metrics: Vec<ChartMetric>,
    pub selection: ChartSelection,
    /// Point the next press lands on when the section is focused
    pub cursor: usize,
}

impl ChartSection {
    /// Create a section from its kind/series table. The first supplied kind
    /// becomes the default rendering.
    pub fn new(
        title: impl Into<String>,
        series: Vec<(ChartKind, ChartSeries)>,
    ) -> Result<Self, ChartError> {
        let active_kind = series.first().map(|(kind, _)| *kind).ok_or(ChartError::Empty)?;
        Ok(Self {
            title: title.into(),
            badge: None,
            badge_value: None,
            series,
            active_kind,
            metrics: Vec::new(),
            selection: ChartSelection::new(),
            cursor: 0,
        })
    }

    pub fn with_badge(
        mut self,
        badge: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        self.badge = Some(badge.into());
        self.badge_value = value.map(Into::into);
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<ChartMetric>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Kinds available in the selector, in supply order
    pub fn available_kinds(&self) -> Vec<ChartKind> {
        self.series.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn active_kind(&self) -> ChartKind {
        self.active_kind
    }

    /// Switch the rendering. Kinds outside the allow-list are ignored.
    pub fn select_kind(&mut self, kind: ChartKind) -> bool {
        if self.series.iter().any(|(k, _)| *k == kind) {
            self.active_kind = kind;
            true
        } else {
            false
        }
    }

    /// Cycle to the next available kind
    pub fn next_kind(&mut self) {
        let kinds = self.available_kinds();
        if let Some(pos) = kinds.iter().position(|k| *k == self.active_kind) {
            self.active_kind = kinds[(pos + 1) % kinds.len()];
        }
    }

    /// Series for the active kind
    pub fn active_series(&self) -> &ChartSeries {
        // The allow-list is derived from this table, so the active kind is
        // always present.
        self.series
            .iter()
            .find(|(k, _)| *k == self.active_kind)
            .map(|(_, s)| s)
            .unwrap_or(&self.series[0].1)
    }

    /// Move the press cursor left/right, clamped to the series
    pub fn move_cursor(&mut self, delta: i64) {
        let len = self.active_series().len() as i64;
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as i64 + delta).rem_euclid(len) as usize;
    }

    /// Press the point under the cursor
    pub fn press_cursor(&mut self) -> Result<ChartPress, ChartError> {
        let series = self.active_series().clone();
        self.selection.press(&series, self.cursor)
    }

    /// Update the badge value shown next to the title
    pub fn set_badge_value(&mut self, value: impl Into<String>) {
        self.badge_value = Some(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ChartSeries {
        ChartSeries::new(vec!["Jun", "Jul", "Aug"], vec![30.0, 15.0, 20.0]).unwrap()
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = ChartSeries::new(vec!["Jun", "Jul"], vec![1.0, 2.0, 3.0]);
        assert_eq!(
            result.unwrap_err(),
            ChartError::LengthMismatch {
                labels: 2,
                points: 3
            }
        );
    }

    #[test]
    fn test_empty_series_rejected() {
        let result = ChartSeries::new(Vec::<String>::new(), Vec::new());
        assert_eq!(result.unwrap_err(), ChartError::Empty);
    }

    #[test]
    fn test_color_count_mismatch_rejected() {
        let result = series().with_colors(vec![(0, 0, 0)]);
        assert_eq!(
            result.unwrap_err(),
            ChartError::ColorCountMismatch {
                colors: 1,
                points: 3
            }
        );
    }

    #[test]
    fn test_active_index_bounds() {
        assert!(series().with_active_index(2).is_ok());
        assert_eq!(
            series().with_active_index(3).unwrap_err(),
            ChartError::ActiveIndexOutOfRange {
                index: 3,
                points: 3
            }
        );
    }

    #[test]
    fn test_press_toggles_selection() {
        let series = series();
        let mut selection = ChartSelection::new();

        let press = selection.press(&series, 1).unwrap();
        assert_eq!(press, ChartPress { value: 15.0, index: 1 });
        assert_eq!(selection.selected(), Some(1));

        // Pressing the same index again clears the selection
        selection.press(&series, 1).unwrap();
        assert_eq!(selection.selected(), None);

        // Pressing i then j lands on j
        selection.press(&series, 0).unwrap();
        selection.press(&series, 2).unwrap();
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn test_press_out_of_range() {
        let series = series();
        let mut selection = ChartSelection::new();
        assert!(selection.press(&series, 9).is_err());
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_highlight_prefers_user_selection() {
        let series = series().with_active_index(0).unwrap();
        let mut selection = ChartSelection::new();
        assert_eq!(selection.highlight(&series), Some(0));

        selection.press(&series, 2).unwrap();
        assert_eq!(selection.highlight(&series), Some(2));

        // Toggling off falls back to the series default
        selection.press(&series, 2).unwrap();
        assert_eq!(selection.highlight(&series), Some(0));
    }

    #[test]
    fn test_point_color_resolution() {
        let series = series()
            .with_colors(vec![(1, 1, 1), (2, 2, 2), (3, 3, 3)])
            .unwrap();
        assert_eq!(series.point_color(0, None), (1, 1, 1));
        assert_eq!(series.point_color(0, Some(0)), ACTIVE_POINT_COLOR);
        assert_eq!(series.point_color(1, Some(0)), (2, 2, 2));

        let plain = ChartSeries::new(vec!["a"], vec![1.0]).unwrap();
        assert_eq!(plain.point_color(0, None), DEFAULT_POINT_COLOR);
    }

    #[test]
    fn test_section_kind_allow_list() {
        let mut section = ChartSection::new(
            "Shifts Worked",
            vec![(ChartKind::Bar, series()), (ChartKind::Line, series())],
        )
        .unwrap();

        assert_eq!(section.active_kind(), ChartKind::Bar);
        assert_eq!(
            section.available_kinds(),
            vec![ChartKind::Bar, ChartKind::Line]
        );

        assert!(section.select_kind(ChartKind::Line));
        assert_eq!(section.active_kind(), ChartKind::Line);

        // Pie was not supplied, so it cannot be selected
        assert!(!section.select_kind(ChartKind::Pie));
        assert_eq!(section.active_kind(), ChartKind::Line);

        section.next_kind();
        assert_eq!(section.active_kind(), ChartKind::Bar);
    }

    #[test]
    fn test_section_cursor_wraps() {
        let mut section =
            ChartSection::new("t", vec![(ChartKind::Bar, series())]).unwrap();
        section.move_cursor(-1);
        assert_eq!(section.cursor, 2);
        section.move_cursor(1);
        assert_eq!(section.cursor, 0);
    }
}
