//! Simulated Fetch Lifecycle
//!
//! Data screens share one lifecycle: `Idle -> Loading -> Loaded`, with
//! `NotFound` as the terminal state for detail views whose route id matches
//! no record. Loading resolves against an injected [`Clock`] when the tick
//! handler observes the deadline has passed, so tests drive the machine with
//! a [`ManualClock`] instead of real timers, and navigating away simply
//! resets the machine — nothing outlives the screen that started it.

use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDateTime, Utc};

/// Source of "now" for everything time-dependent in the app
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Hand-advanced clock for deterministic tests
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().expect("clock lock poisoned")
    }
}

/// Lifecycle of one data screen
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    /// Nothing requested yet
    Idle,
    /// A simulated fetch is in flight until `deadline`
    Loading {
        deadline: NaiveDateTime,
        refreshing: bool,
    },
    /// Data arrived
    Loaded(T),
    /// The requested record does not exist
    NotFound,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        ScreenState::Idle
    }
}

impl<T> ScreenState<T> {
    /// Begin a fetch that resolves once `latency` has elapsed on `clock`
    pub fn start(&mut self, clock: &dyn Clock, latency: Duration) {
        let refreshing = matches!(self, ScreenState::Loaded(_));
        *self = ScreenState::Loading {
            deadline: clock.now() + latency,
            refreshing,
        };
    }

    /// Resolve the fetch if its deadline has passed. `resolve` supplies the
    /// data, or `None` for a missing record. Returns true on a transition.
    pub fn tick(&mut self, clock: &dyn Clock, resolve: impl FnOnce() -> Option<T>) -> bool {
        match self {
            ScreenState::Loading { deadline, .. } if clock.now() >= *deadline => {
                *self = match resolve() {
                    Some(data) => ScreenState::Loaded(data),
                    None => ScreenState::NotFound,
                };
                true
            }
            _ => false,
        }
    }

    /// Drop any in-flight fetch and return to idle
    pub fn reset(&mut self) {
        *self = ScreenState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ScreenState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading { .. })
    }

    /// Whether the in-flight fetch is a refresh of already-loaded data
    pub fn is_refreshing(&self) -> bool {
        matches!(
            self,
            ScreenState::Loading {
                refreshing: true,
                ..
            }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScreenState::NotFound)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ScreenState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            ScreenState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 9)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_loading_resolves_only_after_deadline() {
        let clock = ManualClock::new(start_time());
        let mut state: ScreenState<u32> = ScreenState::Idle;

        state.start(&clock, Duration::milliseconds(500));
        assert!(state.is_loading());
        assert!(!state.is_refreshing());

        // Before the deadline nothing happens
        assert!(!state.tick(&clock, || Some(7)));
        assert!(state.is_loading());

        clock.advance(Duration::milliseconds(500));
        assert!(state.tick(&clock, || Some(7)));
        assert_eq!(state.loaded(), Some(&7));
    }

    #[test]
    fn test_missing_record_is_terminal_not_found() {
        let clock = ManualClock::new(start_time());
        let mut state: ScreenState<u32> = ScreenState::Idle;

        state.start(&clock, Duration::milliseconds(100));
        clock.advance(Duration::milliseconds(100));
        assert!(state.tick(&clock, || None));
        assert!(state.is_not_found());

        // Further ticks leave the terminal state alone
        assert!(!state.tick(&clock, || Some(1)));
        assert!(state.is_not_found());
    }

    #[test]
    fn test_restart_from_loaded_is_a_refresh() {
        let clock = ManualClock::new(start_time());
        let mut state: ScreenState<u32> = ScreenState::Idle;

        state.start(&clock, Duration::zero());
        state.tick(&clock, || Some(1));
        assert!(state.loaded().is_some());

        state.start(&clock, Duration::milliseconds(100));
        assert!(state.is_refreshing());
    }

    #[test]
    fn test_reset_cancels_in_flight_fetch() {
        let clock = ManualClock::new(start_time());
        let mut state: ScreenState<u32> = ScreenState::Idle;

        state.start(&clock, Duration::milliseconds(100));
        state.reset();
        assert!(state.is_idle());

        // The old deadline no longer resolves anything
        clock.advance(Duration::milliseconds(200));
        assert!(!state.tick(&clock, || Some(1)));
        assert!(state.is_idle());
    }
}
