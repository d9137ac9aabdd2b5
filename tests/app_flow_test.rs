#![cfg(feature = "tui")]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent};

use shiftdeck::config::AppConfig;
use shiftdeck::fetch::{Clock, ManualClock};
use shiftdeck::store::DataStore;
use shiftdeck::tui::app::{App, BookingPrompt, Route};
use shiftdeck::tui::events::Event;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 9)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn new_app() -> (App, ManualClock) {
    let clock = ManualClock::new(reference_time());
    let store = DataStore::seeded(clock.now());
    let config = AppConfig {
        fetch_latency_ms: 300,
        ..AppConfig::default()
    };
    let app = App::new(config, store, Box::new(clock.clone())).expect("app should build");
    (app, clock)
}

fn key(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::from(code)))
        .expect("key event should be handled");
}

/// Advance past the simulated fetch latency and deliver a tick
fn settle(app: &mut App, clock: &ManualClock) {
    clock.advance(Duration::milliseconds(300));
    app.handle_event(Event::Tick).expect("tick");
}

#[test]
fn test_starts_on_home_and_loads() {
    let (mut app, clock) = new_app();

    assert_eq!(app.state.route, Route::Home);
    assert!(app.state.home.state.is_loading());

    settle(&mut app, &clock);
    assert!(app.state.home.state.loaded().is_some());
}

#[test]
fn test_tab_navigation() {
    let (mut app, _clock) = new_app();

    key(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state.route, Route::Shifts);
    assert!(app.state.shifts.state.is_loading());

    key(&mut app, KeyCode::Tab);
    assert_eq!(app.state.route, Route::Schedule);

    key(&mut app, KeyCode::BackTab);
    assert_eq!(app.state.route, Route::Shifts);

    key(&mut app, KeyCode::Char('4'));
    assert_eq!(app.state.route, Route::Profile);
}

#[test]
fn test_shifts_load_and_favorite_toggle_roundtrip() {
    let (mut app, clock) = new_app();

    key(&mut app, KeyCode::Char('2'));
    settle(&mut app, &clock);

    let visible = app.visible_shifts();
    assert_eq!(visible.len(), 7, "no filters applied yet");

    // Second row is the pre-favorited CNA shift
    key(&mut app, KeyCode::Down);
    let before = app.visible_shifts()[1].is_favorite;

    key(&mut app, KeyCode::Char('f'));
    assert_eq!(app.visible_shifts()[1].is_favorite, !before);

    key(&mut app, KeyCode::Char('f'));
    assert_eq!(app.visible_shifts()[1].is_favorite, before);
}

#[test]
fn test_open_details_from_list() {
    let (mut app, clock) = new_app();

    key(&mut app, KeyCode::Char('2'));
    settle(&mut app, &clock);

    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.route, Route::ShiftDetails("2".to_string()));
    assert!(app.state.shift_details.state.is_loading());

    settle(&mut app, &clock);
    let details = app
        .state
        .shift_details
        .state
        .loaded()
        .expect("details should load");
    assert_eq!(details.shift.id, "2");

    // Escape pops back to the list and resets the detail machine
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.state.route, Route::Shifts);
    assert!(app.state.shift_details.state.is_idle());
}

#[test]
fn test_booking_flow() {
    let (mut app, clock) = new_app();

    app.push_route(Route::ShiftDetails("3".to_string()));
    settle(&mut app, &clock);

    let bookings_before = app.state.store.bookings.len();

    key(&mut app, KeyCode::Char('b'));
    assert_eq!(app.state.shift_details.prompt, BookingPrompt::Confirming);

    key(&mut app, KeyCode::Char('y'));
    assert_eq!(app.state.shift_details.prompt, BookingPrompt::Booked);
    assert_eq!(app.state.store.bookings.len(), bookings_before + 1);
    assert_eq!(app.state.store.bookings.last().unwrap().id, "b3");

    key(&mut app, KeyCode::Char('v'));
    assert_eq!(app.state.route, Route::Bookings);
    assert_eq!(app.visible_bookings().len(), bookings_before + 1);
}

#[test]
fn test_booking_can_be_cancelled() {
    let (mut app, clock) = new_app();

    app.push_route(Route::ShiftDetails("1".to_string()));
    settle(&mut app, &clock);

    let before = app.state.store.bookings.len();
    key(&mut app, KeyCode::Char('b'));
    key(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state.shift_details.prompt, BookingPrompt::Idle);
    assert_eq!(app.state.store.bookings.len(), before);

    // Escape on the prompt also cancels without leaving the screen
    key(&mut app, KeyCode::Char('b'));
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.state.shift_details.prompt, BookingPrompt::Idle);
    assert!(matches!(app.state.route, Route::ShiftDetails(_)));
}

#[test]
fn test_unknown_id_reaches_not_found_without_crash() {
    let (mut app, clock) = new_app();

    app.push_route(Route::ShiftDetails("999".to_string()));
    settle(&mut app, &clock);
    assert!(app.state.shift_details.state.is_not_found());

    // Manual back action still works from the terminal state
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.state.route, Route::Home);

    app.push_route(Route::ScheduleDetails("missing".to_string()));
    settle(&mut app, &clock);
    assert!(app.state.schedule_details.state.is_not_found());
}

#[test]
fn test_schedule_buckets_through_the_ui() {
    let (mut app, clock) = new_app();

    key(&mut app, KeyCode::Char('3'));
    settle(&mut app, &clock);

    let all = app.visible_schedule();
    assert_eq!(all.len(), 6);

    key(&mut app, KeyCode::Right); // All -> Upcoming
    let upcoming = app.visible_schedule();
    assert!(!upcoming.is_empty());
    for shift in &upcoming {
        assert!(shift.start > app.now());
    }

    key(&mut app, KeyCode::Right); // -> Ongoing
    let ongoing = app.visible_schedule();
    assert_eq!(ongoing.len(), 1);

    key(&mut app, KeyCode::Right); // -> Past
    let past = app.visible_schedule();
    assert_eq!(upcoming.len() + ongoing.len() + past.len(), all.len());
}

#[test]
fn test_filters_apply_from_filters_screen() {
    let (mut app, clock) = new_app();

    key(&mut app, KeyCode::Char('2'));
    settle(&mut app, &clock);
    assert_eq!(app.visible_shifts().len(), 7);

    key(&mut app, KeyCode::Char('o'));
    assert_eq!(app.state.route, Route::Filters);

    // Focus the distance category and pick the 100-mile option
    key(&mut app, KeyCode::Down);
    for _ in 0..5 {
        key(&mut app, KeyCode::Right);
    }
    key(&mut app, KeyCode::Enter);
    assert_eq!(
        app.state.filters_screen.draft.distance.selected().id,
        "d6"
    );

    key(&mut app, KeyCode::Char('a'));
    assert_eq!(app.state.route, Route::Shifts);

    // Default license selection (CNA) now applies along with the distance
    let visible = app.visible_shifts();
    assert_eq!(
        visible.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["2", "4", "7"]
    );
}

#[test]
fn test_filters_escape_leaves_selection_unapplied() {
    let (mut app, clock) = new_app();

    key(&mut app, KeyCode::Char('2'));
    settle(&mut app, &clock);

    key(&mut app, KeyCode::Char('o'));
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Esc);

    assert_eq!(app.state.route, Route::Shifts);
    assert!(app.state.filters.is_none());
    assert_eq!(app.visible_shifts().len(), 7);
}

#[test]
fn test_refresh_keeps_data_visible() {
    let (mut app, clock) = new_app();

    key(&mut app, KeyCode::Char('2'));
    settle(&mut app, &clock);
    assert!(app.state.shifts.state.loaded().is_some());

    key(&mut app, KeyCode::Char('r'));
    assert!(app.state.shifts.state.is_refreshing());

    settle(&mut app, &clock);
    assert!(app.state.shifts.state.loaded().is_some());
}

#[test]
fn test_chart_press_drives_dashboard_stats() {
    let (mut app, clock) = new_app();
    settle(&mut app, &clock);

    // Cursor starts on the first month (June, 30 shifts worked)
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.store.stats.current_month_shifts, 30);
    assert_eq!(app.state.home.sections[0].selection.selected(), Some(0));

    // Pressing the same point again clears the selection
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.home.sections[0].selection.selected(), None);

    // Move to July and select it
    key(&mut app, KeyCode::Right);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.store.stats.current_month_shifts, 15);
}

#[test]
fn test_profile_rows_navigate() {
    let (mut app, _clock) = new_app();

    key(&mut app, KeyCode::Char('4'));
    assert_eq!(app.state.route, Route::Profile);

    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.route, Route::Bookings);

    key(&mut app, KeyCode::Esc);
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.route, Route::Wallet);
}

#[test]
fn test_quit_keys() {
    let (mut app, _clock) = new_app();
    let quit = app
        .handle_event(Event::Key(KeyEvent::from(KeyCode::Char('q'))))
        .expect("quit key");
    assert!(quit);
    assert!(app.state.should_quit);
}
