use chrono::{NaiveDate, NaiveDateTime};

use shiftdeck::model::BookingStatus;
use shiftdeck::store::{Action, DataStore};

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 9)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_favorite_toggle_twice_restores_original_state() {
    let store = DataStore::seeded(reference_time());
    let original: Vec<(String, bool)> = store
        .shift_list()
        .iter()
        .map(|s| (s.id.clone(), s.is_favorite))
        .collect();

    let store = store
        .apply(Action::ToggleShiftFavorite("4".to_string()))
        .apply(Action::ToggleShiftFavorite("4".to_string()));

    let after: Vec<(String, bool)> = store
        .shift_list()
        .iter()
        .map(|s| (s.id.clone(), s.is_favorite))
        .collect();
    assert_eq!(original, after);
}

#[test]
fn test_favorite_toggle_leaves_other_entities_unchanged() {
    let store = DataStore::seeded(reference_time());
    let store = store.apply(Action::ToggleScheduledFavorite("s2".to_string()));

    assert!(store.scheduled["s2"].is_favorite);
    assert!(store.scheduled["s1"].is_favorite, "s1 starts favorited");
    assert!(!store.scheduled["s3"].is_favorite);
}

#[test]
fn test_booking_flow_appends_and_counts() {
    let store = DataStore::seeded(reference_time());
    let before = store.bookings.len();

    let store = store.apply(Action::BookShift("5".to_string()));
    assert_eq!(store.bookings.len(), before + 1);

    let booking = store.bookings.last().expect("booking appended");
    assert_eq!(booking.status, BookingStatus::Upcoming);
    assert_eq!(booking.facility, "University Medical Center");
    // Overnight 7 PM - 7 AM is twelve hours at $450/hr
    assert_eq!(booking.amount, 5400.0);
}

#[test]
fn test_not_found_lookups_return_none() {
    let store = DataStore::seeded(reference_time());
    assert!(store.shift_details("does-not-exist").is_none());
    assert!(store.scheduled_shift("does-not-exist").is_none());
}

#[test]
fn test_scheduled_list_preserves_id_order() {
    let store = DataStore::seeded(reference_time());
    let ids: Vec<String> = store.scheduled_list().iter().map(|s| s.id.clone()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
