//! In-Memory Data Store
//!
//! Id-indexed collections for everything the screens read, updated through a
//! pure reducer: `store.apply(action)` consumes the store and returns the
//! next one. Keying by id makes the favorite toggle a map update instead of
//! a full-array scan.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::model::{
    BookedShift, BookingStatus, DashboardStats, PaymentActivity, ScheduledShift, Shift,
    ShiftDetails,
};
use crate::{mock, model::format_date};

/// Everything the screens read, indexed for id lookup
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub shifts: BTreeMap<String, Shift>,
    pub scheduled: BTreeMap<String, ScheduledShift>,
    pub bookings: Vec<BookedShift>,
    pub payments: Vec<PaymentActivity>,
    pub stats: DashboardStats,
}

/// State updates the screens can request
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Flip the favorite flag on a marketplace shift
    ToggleShiftFavorite(String),
    /// Flip the favorite flag on a calendar shift
    ToggleScheduledFavorite(String),
    /// Book a marketplace shift: appends an upcoming booking
    BookShift(String),
}

impl DataStore {
    /// Seed the store from the mock tables, with calendar entries laid out
    /// around `now`
    pub fn seeded(now: NaiveDateTime) -> Self {
        Self {
            shifts: mock::mock_shifts(now)
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect(),
            scheduled: mock::mock_scheduled_shifts(now)
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect(),
            bookings: mock::mock_bookings(),
            payments: mock::mock_payments(),
            stats: mock::mock_stats(),
        }
    }

    /// Apply one action, returning the next store state
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::ToggleShiftFavorite(id) => {
                if let Some(shift) = self.shifts.get_mut(&id) {
                    shift.is_favorite = !shift.is_favorite;
                }
            }
            Action::ToggleScheduledFavorite(id) => {
                if let Some(shift) = self.scheduled.get_mut(&id) {
                    shift.is_favorite = !shift.is_favorite;
                }
            }
            Action::BookShift(id) => {
                if let Some(shift) = self.shifts.get(&id) {
                    self.bookings.push(booking_from_shift(shift));
                    self.stats.scheduled_shifts += 1;
                }
            }
        }
        self
    }

    /// Marketplace shifts in id order
    pub fn shift_list(&self) -> Vec<Shift> {
        self.shifts.values().cloned().collect()
    }

    /// Calendar shifts in id order
    pub fn scheduled_list(&self) -> Vec<ScheduledShift> {
        self.scheduled.values().cloned().collect()
    }

    /// Detail record for one marketplace shift, if it exists
    pub fn shift_details(&self, id: &str) -> Option<ShiftDetails> {
        self.shifts.get(id).cloned().map(mock::shift_details)
    }

    /// One calendar shift, if it exists
    pub fn scheduled_shift(&self, id: &str) -> Option<ScheduledShift> {
        self.scheduled.get(id).cloned()
    }

    /// Whether a marketplace shift already has a booking
    pub fn is_booked(&self, shift_id: &str) -> bool {
        self.bookings.iter().any(|b| b.id == format!("b{}", shift_id))
    }
}

fn booking_from_shift(shift: &Shift) -> BookedShift {
    BookedShift {
        id: format!("b{}", shift.id),
        role_type: shift.role_type,
        facility: shift
            .location
            .split(',')
            .next()
            .unwrap_or(&shift.location)
            .trim()
            .to_string(),
        location: shift.location.clone(),
        date_label: format_date(shift.start),
        time_label: shift.time_label(),
        status: BookingStatus::Upcoming,
        amount: shift.total_pay(),
    }
}
