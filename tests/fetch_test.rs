use chrono::{Duration, NaiveDate, NaiveDateTime};

use shiftdeck::fetch::{Clock, ManualClock, ScreenState};

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 9)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[test]
fn test_lifecycle_idle_loading_loaded() {
    let clock = ManualClock::new(start_time());
    let mut state: ScreenState<Vec<u32>> = ScreenState::Idle;
    assert!(state.is_idle());

    state.start(&clock, Duration::milliseconds(500));
    assert!(state.is_loading());

    // Ticks before the deadline never resolve
    for _ in 0..5 {
        assert!(!state.tick(&clock, || Some(vec![1, 2, 3])));
    }

    clock.advance(Duration::milliseconds(499));
    assert!(!state.tick(&clock, || Some(vec![1, 2, 3])));

    clock.advance(Duration::milliseconds(1));
    assert!(state.tick(&clock, || Some(vec![1, 2, 3])));
    assert_eq!(state.loaded(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_not_found_is_terminal() {
    let clock = ManualClock::new(start_time());
    let mut state: ScreenState<u32> = ScreenState::Idle;

    state.start(&clock, Duration::milliseconds(100));
    clock.advance(Duration::milliseconds(100));
    state.tick(&clock, || None);
    assert!(state.is_not_found());

    // The terminal state survives further ticks and never panics
    clock.advance(Duration::hours(1));
    assert!(!state.tick(&clock, || Some(42)));
    assert!(state.is_not_found());
}

#[test]
fn test_refresh_keeps_loaded_flag() {
    let clock = ManualClock::new(start_time());
    let mut state: ScreenState<u32> = ScreenState::Idle;

    state.start(&clock, Duration::zero());
    state.tick(&clock, || Some(1));

    state.start(&clock, Duration::milliseconds(200));
    assert!(state.is_loading());
    assert!(state.is_refreshing());

    clock.advance(Duration::milliseconds(200));
    state.tick(&clock, || Some(2));
    assert_eq!(state.loaded(), Some(&2));
}

#[test]
fn test_reset_scopes_fetch_to_screen_lifetime() {
    let clock = ManualClock::new(start_time());
    let mut state: ScreenState<u32> = ScreenState::Idle;

    // Simulates navigating away mid-load: the pending deadline must not
    // fire after the reset
    state.start(&clock, Duration::milliseconds(300));
    state.reset();
    clock.advance(Duration::hours(1));
    assert!(!state.tick(&clock, || Some(9)));
    assert!(state.is_idle());
}

#[test]
fn test_manual_clock_is_shared_between_handles() {
    let clock = ManualClock::new(start_time());
    let handle = clock.clone();
    clock.advance(Duration::minutes(5));
    assert_eq!(handle.now(), start_time() + Duration::minutes(5));
}
