//! List Filtering
//!
//! Tab-based status filters for the schedule and bookings views, the
//! time-bucket filter for the schedule calendar, and the search-filter
//! selection built on the Filters view (distance, licenses, job type, day).

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::{BookedShift, BookingStatus, ScheduledShift, Shift};

/// A status tab: either the catch-all or one concrete status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTab<S> {
    All,
    Status(S),
}

/// Filter a slice by status tab. `All` keeps everything in input order;
/// a concrete status keeps exact matches only.
pub fn filter_by_status<'a, T, S>(
    items: &'a [T],
    tab: StatusTab<S>,
    status_of: impl Fn(&T) -> S,
) -> Vec<&'a T>
where
    S: PartialEq + Copy,
{
    items
        .iter()
        .filter(|item| match tab {
            StatusTab::All => true,
            StatusTab::Status(wanted) => status_of(item) == wanted,
        })
        .collect()
}

/// Time bucket of a calendar entry relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    All,
    Upcoming,
    Ongoing,
    Past,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::All,
        TimeBucket::Upcoming,
        TimeBucket::Ongoing,
        TimeBucket::Past,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::All => "All",
            TimeBucket::Upcoming => "Upcoming",
            TimeBucket::Ongoing => "Ongoing",
            TimeBucket::Past => "Past",
        }
    }

    /// Which bucket a `[start, end)` interval falls in at `now`
    pub fn of(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> TimeBucket {
        if now < start {
            TimeBucket::Upcoming
        } else if now < end {
            TimeBucket::Ongoing
        } else {
            TimeBucket::Past
        }
    }
}

/// Filter scheduled shifts by time bucket at `now`, preserving order
pub fn filter_schedule<'a>(
    shifts: &'a [ScheduledShift],
    bucket: TimeBucket,
    now: NaiveDateTime,
) -> Vec<&'a ScheduledShift> {
    shifts
        .iter()
        .filter(|shift| match bucket {
            TimeBucket::All => true,
            wanted => TimeBucket::of(shift.start, shift.end, now) == wanted,
        })
        .collect()
}

/// Bookings view tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTab {
    All,
    Upcoming,
    Completed,
}

impl BookingTab {
    pub const ALL: [BookingTab; 3] = [BookingTab::All, BookingTab::Upcoming, BookingTab::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            BookingTab::All => "All",
            BookingTab::Upcoming => "Upcoming",
            BookingTab::Completed => "Completed",
        }
    }
}

/// Filter bookings by tab, preserving order
pub fn filter_bookings<'a>(bookings: &'a [BookedShift], tab: BookingTab) -> Vec<&'a BookedShift> {
    let status_tab = match tab {
        BookingTab::All => StatusTab::All,
        BookingTab::Upcoming => StatusTab::Status(BookingStatus::Upcoming),
        BookingTab::Completed => StatusTab::Status(BookingStatus::Completed),
    };
    filter_by_status(bookings, status_tab, |b| b.status)
}

/// One selectable option within a filter category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A category holding exactly one selected option at all times
#[derive(Debug, Clone, PartialEq)]
pub struct SingleSelect {
    options: Vec<FilterOption>,
    selected: usize,
}

impl SingleSelect {
    /// Build from a non-empty option set; the first option starts selected
    pub fn new(options: Vec<FilterOption>) -> Self {
        debug_assert!(!options.is_empty(), "single-select needs options");
        Self {
            options,
            selected: 0,
        }
    }

    /// Select by option id. Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: &str) -> bool {
        match self.options.iter().position(|o| o.id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    pub fn selected(&self) -> &FilterOption {
        &self.options[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// A category holding any subset of its options
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelect {
    options: Vec<FilterOption>,
    selected: Vec<usize>,
}

impl MultiSelect {
    /// Build from an option set with the given ids pre-selected
    pub fn new(options: Vec<FilterOption>, defaults: &[&str]) -> Self {
        let selected = options
            .iter()
            .enumerate()
            .filter(|(_, o)| defaults.contains(&o.id.as_str()))
            .map(|(i, _)| i)
            .collect();
        Self { options, selected }
    }

    /// Toggle one option in or out of the selection
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(index) = self.options.iter().position(|o| o.id == id) else {
            return false;
        };
        match self.selected.iter().position(|&i| i == index) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(index),
        }
        true
    }

    pub fn toggle_index(&mut self, index: usize) {
        if let Some(option) = self.options.get(index) {
            let id = option.id.clone();
            self.toggle(&id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.options
            .iter()
            .position(|o| o.id == id)
            .map(|i| self.selected.contains(&i))
            .unwrap_or(false)
    }

    pub fn is_selected_index(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected option values, in option order
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .enumerate()
            .filter(|(i, _)| self.selected.contains(i))
            .map(|(_, o)| o.value.as_str())
            .collect()
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn reset(&mut self, defaults: &[&str]) {
        self.selected = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| defaults.contains(&o.id.as_str()))
            .map(|(i, _)| i)
            .collect();
    }
}

/// Default license pre-selection on the Filters view
pub const DEFAULT_LICENSES: [&str; 1] = ["l1"];

/// The complete filter selection built on the Filters view
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub search: String,
    pub distance: SingleSelect,
    pub licenses: MultiSelect,
    pub job_type: SingleSelect,
    pub day: SingleSelect,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSelection {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            distance: SingleSelect::new(distance_options()),
            licenses: MultiSelect::new(license_options(), &DEFAULT_LICENSES),
            job_type: SingleSelect::new(job_type_options()),
            day: SingleSelect::new(day_options()),
        }
    }

    /// Restore every category to its default selection
    pub fn reset(&mut self) {
        self.search.clear();
        self.distance.reset();
        self.licenses.reset(&DEFAULT_LICENSES);
        self.job_type.reset();
        self.day.reset();
    }

    /// Selected distance ceiling in miles
    pub fn distance_miles(&self) -> f64 {
        self.distance.selected().value.parse().unwrap_or(f64::MAX)
    }

    fn search_matches(&self, shift: &Shift) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        shift.role.to_lowercase().contains(&needle)
            || shift.location.to_lowercase().contains(&needle)
    }

    fn license_matches(&self, shift: &Shift) -> bool {
        let selected = self.licenses.selected_values();
        if selected.is_empty() {
            return true;
        }
        selected.contains(&shift.role_type.as_str())
    }

    fn job_type_matches(&self, shift: &Shift) -> bool {
        // Shifts only carry a long-term flag, so job types map onto it:
        // full/part-time placements are long-term, the rest are short-term.
        match self.job_type.selected().value.as_str() {
            "all" => true,
            "full-time" | "part-time" => shift.long_term,
            _ => !shift.long_term,
        }
    }

    fn day_matches(&self, shift: &Shift) -> bool {
        let weekend = matches!(shift.start.weekday(), Weekday::Sat | Weekday::Sun);
        match self.day.selected().value.as_str() {
            "weekend" => weekend,
            "weekdays" => !weekend,
            _ => true,
        }
    }

    /// Whether a shift passes every selected criterion
    pub fn matches_shift(&self, shift: &Shift) -> bool {
        shift.distance_miles <= self.distance_miles()
            && self.search_matches(shift)
            && self.license_matches(shift)
            && self.job_type_matches(shift)
            && self.day_matches(shift)
    }

    /// Apply the selection to a shift list, preserving order
    pub fn apply<'a>(&self, shifts: &'a [Shift]) -> Vec<&'a Shift> {
        shifts.iter().filter(|s| self.matches_shift(s)).collect()
    }
}

/// Distance options, in miles
pub fn distance_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("d1", "5 miles", "5"),
        FilterOption::new("d2", "10 miles", "10"),
        FilterOption::new("d3", "15 miles", "15"),
        FilterOption::new("d4", "25 miles", "25"),
        FilterOption::new("d5", "50 miles", "50"),
        FilterOption::new("d6", "100 miles", "100"),
    ]
}

/// License options
pub fn license_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("l1", "CNA", "CNA"),
        FilterOption::new("l2", "LPN", "LPN"),
        FilterOption::new("l3", "RN", "RN"),
        FilterOption::new("l4", "STNA", "STNA"),
        FilterOption::new("l5", "GNA", "GNA"),
        FilterOption::new("l6", "LNA", "LNA"),
        FilterOption::new("l7", "CMA", "CMA"),
        FilterOption::new("l8", "LVN", "LVN"),
    ]
}

/// Job type options
pub fn job_type_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("j1", "All", "all"),
        FilterOption::new("j2", "Full-time", "full-time"),
        FilterOption::new("j3", "Part-time", "part-time"),
        FilterOption::new("j4", "Contract", "contract"),
        FilterOption::new("j5", "Temporary", "temporary"),
        FilterOption::new("j6", "Per Diem", "per-diem"),
    ]
}

/// Day-of-week options
pub fn day_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("day1", "All Shifts", "all"),
        FilterOption::new("day2", "Weekend", "weekend"),
        FilterOption::new("day3", "Weekdays", "weekdays"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[derive(Debug, PartialEq)]
    struct Row {
        id: &'static str,
        status: &'static str,
    }

    #[test]
    fn test_all_tab_preserves_everything_in_order() {
        let rows = vec![
            Row { id: "1", status: "upcoming" },
            Row { id: "2", status: "completed" },
            Row { id: "3", status: "upcoming" },
        ];
        let out = filter_by_status(&rows, StatusTab::<&str>::All, |r| r.status);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].id, "1");
        assert_eq!(out[2].id, "3");
    }

    #[test]
    fn test_status_tab_exact_match() {
        let rows = vec![
            Row { id: "1", status: "upcoming" },
            Row { id: "2", status: "completed" },
        ];
        let out = filter_by_status(&rows, StatusTab::Status("completed"), |r| r.status);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
    }

    #[test]
    fn test_time_bucket_boundaries() {
        let start = at(10, 8);
        let end = at(10, 17);
        assert_eq!(TimeBucket::of(start, end, at(9, 12)), TimeBucket::Upcoming);
        assert_eq!(TimeBucket::of(start, end, at(10, 8)), TimeBucket::Ongoing);
        assert_eq!(TimeBucket::of(start, end, at(10, 12)), TimeBucket::Ongoing);
        assert_eq!(TimeBucket::of(start, end, at(10, 17)), TimeBucket::Past);
        assert_eq!(TimeBucket::of(start, end, at(11, 9)), TimeBucket::Past);
    }

    #[test]
    fn test_buckets_partition() {
        // Every interval lands in exactly one non-All bucket for a fixed now
        let now = at(10, 12);
        let intervals = [
            (at(9, 8), at(9, 17)),
            (at(10, 8), at(10, 17)),
            (at(11, 8), at(11, 17)),
            (at(10, 12), at(10, 20)),
        ];
        for (start, end) in intervals {
            let bucket = TimeBucket::of(start, end, now);
            let matches = [TimeBucket::Upcoming, TimeBucket::Ongoing, TimeBucket::Past]
                .iter()
                .filter(|b| **b == bucket)
                .count();
            assert_eq!(matches, 1);
        }
    }

    #[test]
    fn test_single_select_always_has_exactly_one() {
        let mut select = SingleSelect::new(distance_options());
        assert_eq!(select.selected().id, "d1");

        assert!(select.select("d4"));
        assert_eq!(select.selected().id, "d4");

        // Unknown ids never clear the selection
        assert!(!select.select("bogus"));
        assert_eq!(select.selected().id, "d4");

        select.reset();
        assert_eq!(select.selected().id, "d1");
    }

    #[test]
    fn test_multi_select_toggle_is_involution() {
        let mut select = MultiSelect::new(license_options(), &DEFAULT_LICENSES);
        assert!(select.is_selected("l1"));

        select.toggle("l3");
        assert!(select.is_selected("l3"));
        select.toggle("l3");
        assert!(!select.is_selected("l3"));
        assert!(select.is_selected("l1"));

        // Multi-select may legitimately become empty
        select.toggle("l1");
        assert_eq!(select.selected_values().len(), 0);
    }

    #[test]
    fn test_filter_selection_applies_distance_and_license() {
        use crate::model::{RoleType, Shift};
        let shift = |id: &str, role_type, distance, weekday_start: NaiveDateTime| Shift {
            id: id.to_string(),
            role: "Registered Nurse".to_string(),
            role_type,
            location: "Heber City".to_string(),
            start: weekday_start,
            end: weekday_start + chrono::Duration::hours(8),
            hourly_rate: 40.0,
            distance_miles: distance,
            long_term: false,
            is_favorite: false,
        };
        // Jun 9 2023 is a Friday, Jun 10 a Saturday
        let shifts = vec![
            shift("1", RoleType::Cna, 3.0, at(9, 8)),
            shift("2", RoleType::Rn, 3.0, at(9, 8)),
            shift("3", RoleType::Cna, 80.0, at(9, 8)),
            shift("4", RoleType::Cna, 3.0, at(10, 8)),
        ];

        let mut selection = FilterSelection::new();
        // Defaults: 5 miles, CNA only
        let out = selection.apply(&shifts);
        assert_eq!(
            out.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "4"]
        );

        selection.day.select("day3");
        let out = selection.apply(&shifts);
        assert_eq!(out.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), vec!["1"]);

        selection.reset();
        selection.search = "nurse".to_string();
        selection.distance.select("d6");
        selection.licenses.toggle("l3");
        let out = selection.apply(&shifts);
        assert_eq!(out.len(), 4);
    }
}
