//! Domain Entities
//!
//! Core data types for the scheduling app: open shifts on the marketplace,
//! shifts already committed to the worker's calendar, confirmed bookings,
//! wallet payment activity, and the aggregate dashboard stats.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// License/role category for a shift posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleType {
    Rn,
    Cna,
    Lpn,
    Other,
}

impl RoleType {
    /// Short label as shown on role badges
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Rn => "RN",
            RoleType::Cna => "CNA",
            RoleType::Lpn => "LPN",
            RoleType::Other => "OTHER",
        }
    }

    /// Badge color for the role, as RGB
    pub fn badge_color(&self) -> (u8, u8, u8) {
        match self {
            RoleType::Rn => (255, 59, 48),
            RoleType::Cna => (255, 149, 0),
            RoleType::Lpn => (52, 199, 89),
            RoleType::Other => (175, 82, 222),
        }
    }
}

/// A single bookable work assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    pub role: String,
    pub role_type: RoleType,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub hourly_rate: f64,
    pub distance_miles: f64,
    pub long_term: bool,
    pub is_favorite: bool,
}

impl Shift {
    /// Display date, e.g. "Jun 9"
    pub fn date_label(&self) -> String {
        format_date(self.start)
    }

    /// Display time range, e.g. "8 AM - 5 PM"
    pub fn time_label(&self) -> String {
        format!("{} - {}", format_hour(self.start), format_hour(self.end))
    }

    /// Shift length in whole hours, overnight shifts included
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }

    /// Total pay for the full shift
    pub fn total_pay(&self) -> f64 {
        self.hourly_rate * self.duration_hours() as f64
    }
}

/// Extended detail record shown on the shift detail view
#[derive(Debug, Clone)]
pub struct ShiftDetails {
    pub shift: Shift,
    pub facility_name: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub address: String,
    pub contact_person: String,
    pub contact_phone: String,
}

/// Commitment status of a shift on the worker's calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Scheduled,
    Requested,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "Scheduled",
            ScheduleStatus::Requested => "Requested",
        }
    }
}

/// A shift already committed to the worker's calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub id: String,
    pub role_type: RoleType,
    pub title: String,
    pub location: String,
    pub badge: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub hourly_rate: f64,
    pub distance_miles: f64,
    pub status: ScheduleStatus,
    pub is_favorite: bool,
}

impl ScheduledShift {
    pub fn date_label(&self) -> String {
        format_date(self.start)
    }

    pub fn time_label(&self) -> String {
        format!("{} - {}", format_hour(self.start), format_hour(self.end))
    }

    pub fn total_pay(&self) -> f64 {
        self.hourly_rate * (self.end - self.start).num_hours() as f64
    }
}

/// Status of a confirmed booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Completed => "Completed",
            BookingStatus::Canceled => "Canceled",
        }
    }
}

/// A booked shift as shown on the bookings view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedShift {
    pub id: String,
    pub role_type: RoleType,
    pub facility: String,
    pub location: String,
    pub date_label: String,
    pub time_label: String,
    pub status: BookingStatus,
    pub amount: f64,
}

/// Direction of a wallet ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    Payout,
    Payment,
}

/// Settlement state of a wallet ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Success,
    Processing,
}

/// One row of wallet payment activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentActivity {
    pub id: String,
    pub kind: PaymentKind,
    pub status: PaymentStatus,
    pub amount: f64,
    pub date_label: String,
}

impl PaymentActivity {
    /// Row title, e.g. "Pay out initiated" / "Payment done"
    pub fn title(&self) -> &'static str {
        match self.kind {
            PaymentKind::Payout => "Pay out initiated",
            PaymentKind::Payment => "Payment done",
        }
    }
}

/// Aggregate stats shown on the home dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub scheduled_shifts: u32,
    pub worked_shifts: u32,
    pub cancelled_shifts: u32,
    pub current_month_shifts: u32,
    pub pending_earnings: f64,
    pub total_earnings: f64,
}

/// Format a timestamp as a short date label, e.g. "Jun 9"
pub fn format_date(ts: NaiveDateTime) -> String {
    ts.format("%b %-d").to_string()
}

/// Format a timestamp as a compact 12-hour label, e.g. "8 AM"
pub fn format_hour(ts: NaiveDateTime) -> String {
    let (pm, hour12) = ts.hour12();
    let suffix = if pm { "PM" } else { "AM" };
    if ts.minute() == 0 {
        format!("{} {}", hour12, suffix)
    } else {
        format!("{}:{:02} {}", hour12, ts.minute(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 9)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(ts(8, 0)), "8 AM");
        assert_eq!(format_hour(ts(17, 0)), "5 PM");
        assert_eq!(format_hour(ts(0, 0)), "12 AM");
        assert_eq!(format_hour(ts(12, 30)), "12:30 PM");
    }

    #[test]
    fn test_shift_labels_and_pay() {
        let shift = Shift {
            id: "1".to_string(),
            role: "Registered Nurse RN".to_string(),
            role_type: RoleType::Rn,
            location: "Heber City, Utah".to_string(),
            start: ts(8, 0),
            end: ts(17, 0),
            hourly_rate: 40.0,
            distance_miles: 3.4,
            long_term: false,
            is_favorite: false,
        };
        assert_eq!(shift.date_label(), "Jun 9");
        assert_eq!(shift.time_label(), "8 AM - 5 PM");
        assert_eq!(shift.duration_hours(), 9);
        assert_eq!(shift.total_pay(), 360.0);
    }

    #[test]
    fn test_role_type_labels() {
        assert_eq!(RoleType::Rn.as_str(), "RN");
        assert_eq!(RoleType::Other.as_str(), "OTHER");
        assert_eq!(RoleType::Rn.badge_color(), (255, 59, 48));
    }
}
