use shiftdeck::chart::{
    ChartError, ChartKind, ChartMetric, ChartSection, ChartSelection, ChartSeries,
    ACTIVE_POINT_COLOR, DEFAULT_POINT_COLOR,
};

fn monthly_series() -> ChartSeries {
    ChartSeries::new(
        vec!["Jun", "Jul", "Aug", "Sep", "Oct", "Nov"],
        vec![30.0, 15.0, 20.0, 20.0, 0.0, 0.0],
    )
    .expect("series should build")
}

#[test]
fn test_mismatched_lengths_are_rejected() {
    let result = ChartSeries::new(vec!["Jun", "Jul", "Aug"], vec![30.0, 15.0]);
    assert!(
        matches!(
            result,
            Err(ChartError::LengthMismatch {
                labels: 3,
                points: 2
            })
        ),
        "mismatched label/point counts must be a construction error"
    );
}

#[test]
fn test_out_of_range_active_index_is_rejected() {
    let result = monthly_series().with_active_index(6);
    assert!(matches!(
        result,
        Err(ChartError::ActiveIndexOutOfRange { index: 6, points: 6 })
    ));
}

#[test]
fn test_double_press_returns_to_unselected() {
    let series = monthly_series();
    let mut selection = ChartSelection::new();

    for index in 0..series.len() {
        let press = selection.press(&series, index).expect("valid press");
        assert_eq!(press.index, index);
        assert_eq!(press.value, series.points()[index]);
        assert_eq!(selection.selected(), Some(index));

        selection.press(&series, index).expect("valid press");
        assert_eq!(
            selection.selected(),
            None,
            "pressing index {} twice should clear the selection",
            index
        );
    }
}

#[test]
fn test_press_i_then_j_selects_j() {
    let series = monthly_series();
    let mut selection = ChartSelection::new();

    selection.press(&series, 1).expect("valid press");
    selection.press(&series, 4).expect("valid press");
    assert_eq!(selection.selected(), Some(4));
}

#[test]
fn test_every_press_reports_value_and_index() {
    let series = monthly_series();
    let mut selection = ChartSelection::new();

    // Both the selecting and the deselecting press report the point
    let first = selection.press(&series, 2).expect("valid press");
    let second = selection.press(&series, 2).expect("valid press");
    assert_eq!(first.value, 20.0);
    assert_eq!(second.value, 20.0);
    assert_eq!(second.index, 2);
}

#[test]
fn test_highlight_color_wins_over_palette() {
    let series = monthly_series()
        .with_colors(vec![DEFAULT_POINT_COLOR; 6])
        .expect("colors should attach")
        .with_active_index(3)
        .expect("index in range");

    let selection = ChartSelection::new();
    let highlight = selection.highlight(&series);
    assert_eq!(highlight, Some(3));
    assert_eq!(series.point_color(3, highlight), ACTIVE_POINT_COLOR);
    assert_eq!(series.point_color(0, highlight), DEFAULT_POINT_COLOR);
}

#[test]
fn test_section_defaults_to_first_supplied_kind() {
    let section = ChartSection::new(
        "Shifts Worked",
        vec![
            (ChartKind::Line, monthly_series()),
            (ChartKind::Bar, monthly_series()),
        ],
    )
    .expect("section should build");

    assert_eq!(section.active_kind(), ChartKind::Line);
}

#[test]
fn test_section_rejects_kinds_outside_allow_list() {
    let mut section = ChartSection::new(
        "Earnings Trend",
        vec![(ChartKind::Line, monthly_series())],
    )
    .expect("section should build");

    assert!(!section.select_kind(ChartKind::Pie));
    assert_eq!(section.active_kind(), ChartKind::Line);
}

#[test]
fn test_section_without_series_is_an_error() {
    let result = ChartSection::new("Empty", Vec::new());
    assert!(matches!(result, Err(ChartError::Empty)));
}

#[test]
fn test_section_press_updates_selection_through_cursor() {
    let mut section = ChartSection::new(
        "Shifts Worked",
        vec![(ChartKind::Bar, monthly_series())],
    )
    .expect("section should build")
    .with_metrics(vec![ChartMetric::new("AVERAGE", "18.75")]);

    section.move_cursor(2);
    let press = section.press_cursor().expect("valid press");
    assert_eq!(press.index, 2);
    assert_eq!(section.selection.selected(), Some(2));

    // Same cursor position pressed again toggles off
    section.press_cursor().expect("valid press");
    assert_eq!(section.selection.selected(), None);
}
