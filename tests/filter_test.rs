use chrono::{NaiveDate, NaiveDateTime};

use shiftdeck::filter::{
    filter_bookings, filter_by_status, filter_schedule, BookingTab, FilterSelection, StatusTab,
    TimeBucket,
};
use shiftdeck::mock;
use shiftdeck::model::BookingStatus;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 9)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[derive(Debug, Clone, PartialEq)]
struct Entity {
    id: &'static str,
    status: &'static str,
}

#[test]
fn test_all_tab_returns_full_set_in_order() {
    let entities = vec![
        Entity { id: "1", status: "upcoming" },
        Entity { id: "2", status: "completed" },
        Entity { id: "3", status: "canceled" },
    ];

    let out = filter_by_status(&entities, StatusTab::<&str>::All, |e| e.status);
    assert_eq!(
        out.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec!["1", "2", "3"]
    );
}

#[test]
fn test_named_tab_matches_exactly() {
    let entities = vec![
        Entity { id: "1", status: "upcoming" },
        Entity { id: "2", status: "completed" },
    ];

    let out = filter_by_status(&entities, StatusTab::Status("completed"), |e| e.status);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "2");
}

#[test]
fn test_booking_tabs() {
    let bookings = mock::mock_bookings();

    let all = filter_bookings(&bookings, BookingTab::All);
    assert_eq!(all.len(), bookings.len());

    let upcoming = filter_bookings(&bookings, BookingTab::Upcoming);
    assert!(upcoming.iter().all(|b| b.status == BookingStatus::Upcoming));
    assert_eq!(upcoming.len(), 2);

    let completed = filter_bookings(&bookings, BookingTab::Completed);
    assert_eq!(completed.len(), 2);

    // Canceled bookings only show under All
    assert_eq!(
        all.len(),
        upcoming.len() + completed.len() + 1,
        "one canceled booking expected in the sample data"
    );
}

#[test]
fn test_schedule_buckets_partition_the_calendar() {
    let now = reference_time();
    let shifts = mock::mock_scheduled_shifts(now);

    let upcoming = filter_schedule(&shifts, TimeBucket::Upcoming, now);
    let ongoing = filter_schedule(&shifts, TimeBucket::Ongoing, now);
    let past = filter_schedule(&shifts, TimeBucket::Past, now);
    let all = filter_schedule(&shifts, TimeBucket::All, now);

    assert_eq!(all.len(), shifts.len());
    assert_eq!(upcoming.len() + ongoing.len() + past.len(), shifts.len());

    for shift in upcoming {
        assert!(shift.start > now);
    }
    for shift in ongoing {
        assert!(shift.start <= now && now < shift.end);
    }
    for shift in past {
        assert!(shift.end <= now);
    }
}

#[test]
fn test_bucket_boundary_instants() {
    let start = reference_time();
    let end = start + chrono::Duration::hours(8);

    assert_eq!(TimeBucket::of(start, end, start), TimeBucket::Ongoing);
    assert_eq!(TimeBucket::of(start, end, end), TimeBucket::Past);
    assert_eq!(
        TimeBucket::of(start, end, start - chrono::Duration::seconds(1)),
        TimeBucket::Upcoming
    );
}

#[test]
fn test_selection_invariant_single_select_never_empty() {
    let mut selection = FilterSelection::new();

    assert_eq!(selection.distance.selected().id, "d1");
    assert_eq!(selection.job_type.selected().id, "j1");
    assert_eq!(selection.day.selected().id, "day1");

    // Selecting bogus ids cannot break the invariant
    selection.distance.select("zzz");
    assert_eq!(selection.distance.selected().id, "d1");

    selection.distance.select("d5");
    selection.reset();
    assert_eq!(selection.distance.selected().id, "d1");
}

#[test]
fn test_selection_applies_to_mock_shifts() {
    let shifts = mock::mock_shifts(reference_time());

    let mut selection = FilterSelection::new();
    selection.distance.select("d6");
    selection.licenses.toggle("l2"); // add LPN
    selection.licenses.toggle("l3"); // add RN

    let out = selection.apply(&shifts);
    // CNA (default) + LPN + RN licensed shifts within 100 miles
    assert_eq!(
        out.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["1", "2", "3", "4", "5", "7"]
    );

    selection.search = "pediatrics".to_string();
    let out = selection.apply(&shifts);
    assert_eq!(out.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), vec!["7"]);
}
