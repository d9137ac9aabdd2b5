//! Mock Data Tables
//!
//! Static sample records standing in for a real data source. Calendar
//! entries are laid out relative to a caller-supplied reference time so the
//! schedule's time buckets are populated no matter when the app runs.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::chart::{
    ChartError, ChartKind, ChartMetric, ChartSection, ChartSeries, DEFAULT_POINT_COLOR,
};
use crate::model::{
    format_date, BookedShift, BookingStatus, DashboardStats, PaymentActivity, PaymentKind,
    PaymentStatus, RoleType, ScheduleStatus, ScheduledShift, Shift, ShiftDetails,
};

fn at(now: NaiveDateTime, days: i64, hour: u32) -> NaiveDateTime {
    let date = now.date() + Duration::days(days);
    date.and_hms_opt(hour, 0, 0).unwrap_or(now)
}

/// Available shifts on the marketplace
pub fn mock_shifts(now: NaiveDateTime) -> Vec<Shift> {
    vec![
        Shift {
            id: "1".to_string(),
            role: "Registered Nurse RN - Long Term Care".to_string(),
            role_type: RoleType::Rn,
            location: "Rocky Mtn Care of Heber - the Lodge Heber City Utah".to_string(),
            start: at(now, 1, 8),
            end: at(now, 1, 17),
            hourly_rate: 400.0,
            distance_miles: 3.4,
            long_term: false,
            is_favorite: false,
        },
        Shift {
            id: "2".to_string(),
            role: "Registered Nurse RN - Long Term Care".to_string(),
            role_type: RoleType::Cna,
            location: "Rocky Mtn Care of Heber - the Lodge Heber City Utah".to_string(),
            start: at(now, 1, 8),
            end: at(now, 1, 17),
            hourly_rate: 400.0,
            distance_miles: 3.4,
            long_term: true,
            is_favorite: true,
        },
        Shift {
            id: "3".to_string(),
            role: "Licensed Practical Nurse - Rehabilitation".to_string(),
            role_type: RoleType::Lpn,
            location: "Aspen Ridge Rehabilitation Center, Utah".to_string(),
            start: at(now, 2, 7),
            end: at(now, 2, 15),
            hourly_rate: 350.0,
            distance_miles: 5.2,
            long_term: false,
            is_favorite: false,
        },
        Shift {
            id: "4".to_string(),
            role: "Certified Nursing Assistant - Senior Care".to_string(),
            role_type: RoleType::Cna,
            location: "Sunrise Senior Living, Salt Lake City".to_string(),
            start: at(now, 3, 15),
            end: at(now, 3, 23),
            hourly_rate: 280.0,
            distance_miles: 7.1,
            long_term: true,
            is_favorite: false,
        },
        Shift {
            id: "5".to_string(),
            role: "Registered Nurse RN - Emergency Department".to_string(),
            role_type: RoleType::Rn,
            location: "University Medical Center, Salt Lake City".to_string(),
            start: at(now, 4, 19),
            end: at(now, 5, 7),
            hourly_rate: 450.0,
            distance_miles: 8.5,
            long_term: false,
            is_favorite: false,
        },
        Shift {
            id: "6".to_string(),
            role: "Home Health Aide - Elderly Care".to_string(),
            role_type: RoleType::Other,
            location: "Visiting Angels, Park City".to_string(),
            start: at(now, 5, 9),
            end: at(now, 5, 17),
            hourly_rate: 250.0,
            distance_miles: 10.2,
            long_term: true,
            is_favorite: false,
        },
        Shift {
            id: "7".to_string(),
            role: "Certified Nursing Assistant - Pediatrics".to_string(),
            role_type: RoleType::Cna,
            location: "Primary Children's Hospital, Salt Lake City".to_string(),
            start: at(now, 6, 10),
            end: at(now, 6, 18),
            hourly_rate: 300.0,
            distance_miles: 12.3,
            long_term: false,
            is_favorite: false,
        },
    ]
}

/// Extended detail record for one marketplace shift
pub fn shift_details(shift: Shift) -> ShiftDetails {
    ShiftDetails {
        shift,
        facility_name: "Rocky Mountain Care Center".to_string(),
        description: "As a healthcare professional, you will be responsible for providing \
                      high-quality care to patients in a fast-paced environment. You will work \
                      with an experienced team of healthcare providers to ensure the best \
                      possible outcomes for patients."
            .to_string(),
        requirements: vec![
            "Active license in good standing".to_string(),
            "BLS/CPR certification".to_string(),
            "Minimum 1 year of experience".to_string(),
            "Excellent communication skills".to_string(),
            "Ability to work in a team environment".to_string(),
        ],
        address: "123 Healthcare Ave, Salt Lake City, UT 84101".to_string(),
        contact_person: "Sarah Johnson".to_string(),
        contact_phone: "(801) 555-1234".to_string(),
    }
}

/// Shifts on the worker's calendar, spread across past/ongoing/upcoming
pub fn mock_scheduled_shifts(now: NaiveDateTime) -> Vec<ScheduledShift> {
    vec![
        ScheduledShift {
            id: "s1".to_string(),
            role_type: RoleType::Rn,
            title: "Long Term Care".to_string(),
            location: "Rocky Mtn Care of Heber, Utah".to_string(),
            badge: Some("NEW".to_string()),
            start: at(now, 1, 9),
            end: at(now, 1, 17),
            hourly_rate: 400.0,
            distance_miles: 3.4,
            status: ScheduleStatus::Scheduled,
            is_favorite: true,
        },
        ScheduledShift {
            id: "s2".to_string(),
            role_type: RoleType::Cna,
            title: "Senior Care".to_string(),
            location: "Sunrise Senior Living, Salt Lake City".to_string(),
            badge: None,
            start: at(now, 2, 15),
            end: at(now, 2, 23),
            hourly_rate: 280.0,
            distance_miles: 7.1,
            status: ScheduleStatus::Requested,
            is_favorite: false,
        },
        ScheduledShift {
            id: "s3".to_string(),
            role_type: RoleType::Lpn,
            title: "Rehabilitation".to_string(),
            location: "Aspen Ridge Rehabilitation Center, Utah".to_string(),
            badge: None,
            start: now - Duration::hours(2),
            end: now + Duration::hours(6),
            hourly_rate: 350.0,
            distance_miles: 5.2,
            status: ScheduleStatus::Scheduled,
            is_favorite: false,
        },
        ScheduledShift {
            id: "s4".to_string(),
            role_type: RoleType::Rn,
            title: "Emergency Department".to_string(),
            location: "University Medical Center, Salt Lake City".to_string(),
            badge: None,
            start: at(now, -3, 19),
            end: at(now, -2, 7),
            hourly_rate: 450.0,
            distance_miles: 8.5,
            status: ScheduleStatus::Scheduled,
            is_favorite: false,
        },
        ScheduledShift {
            id: "s5".to_string(),
            role_type: RoleType::Cna,
            title: "Pediatrics".to_string(),
            location: "Primary Children's Hospital, Salt Lake City".to_string(),
            badge: None,
            start: at(now, -7, 10),
            end: at(now, -7, 18),
            hourly_rate: 300.0,
            distance_miles: 12.3,
            status: ScheduleStatus::Requested,
            is_favorite: false,
        },
        ScheduledShift {
            id: "s6".to_string(),
            role_type: RoleType::Other,
            title: "Elderly Care".to_string(),
            location: "Visiting Angels, Park City".to_string(),
            badge: Some("LONG TERM".to_string()),
            start: at(now, 4, 9),
            end: at(now, 4, 17),
            hourly_rate: 250.0,
            distance_miles: 10.2,
            status: ScheduleStatus::Scheduled,
            is_favorite: false,
        },
    ]
}

/// Confirmed bookings
pub fn mock_bookings() -> Vec<BookedShift> {
    vec![
        BookedShift {
            id: "1".to_string(),
            role_type: RoleType::Rn,
            facility: "Rocky Mtn. Care".to_string(),
            location: "Heber City, Utah".to_string(),
            date_label: "June 15, 2023".to_string(),
            time_label: "8:00 AM - 5:00 PM".to_string(),
            status: BookingStatus::Upcoming,
            amount: 400.0,
        },
        BookedShift {
            id: "2".to_string(),
            role_type: RoleType::Cna,
            facility: "University Medical Center".to_string(),
            location: "Salt Lake City, Utah".to_string(),
            date_label: "June 18, 2023".to_string(),
            time_label: "7:00 AM - 3:00 PM".to_string(),
            status: BookingStatus::Upcoming,
            amount: 320.0,
        },
        BookedShift {
            id: "3".to_string(),
            role_type: RoleType::Lpn,
            facility: "Aspen Ridge".to_string(),
            location: "Park City, Utah".to_string(),
            date_label: "June 5, 2023".to_string(),
            time_label: "3:00 PM - 11:00 PM".to_string(),
            status: BookingStatus::Completed,
            amount: 350.0,
        },
        BookedShift {
            id: "4".to_string(),
            role_type: RoleType::Rn,
            facility: "Sunrise Senior Living".to_string(),
            location: "Sandy, Utah".to_string(),
            date_label: "May 28, 2023".to_string(),
            time_label: "8:00 AM - 5:00 PM".to_string(),
            status: BookingStatus::Completed,
            amount: 390.0,
        },
        BookedShift {
            id: "5".to_string(),
            role_type: RoleType::Cna,
            facility: "Mountain View Hospital".to_string(),
            location: "Payson, Utah".to_string(),
            date_label: "May 25, 2023".to_string(),
            time_label: "7:00 PM - 7:00 AM".to_string(),
            status: BookingStatus::Canceled,
            amount: 280.0,
        },
    ]
}

/// Wallet payment activity, newest first
pub fn mock_payments() -> Vec<PaymentActivity> {
    vec![
        PaymentActivity {
            id: "1".to_string(),
            kind: PaymentKind::Payout,
            status: PaymentStatus::Processing,
            amount: 231.0,
            date_label: "9 Jun, 2023".to_string(),
        },
        PaymentActivity {
            id: "2".to_string(),
            kind: PaymentKind::Payment,
            status: PaymentStatus::Success,
            amount: 32.0,
            date_label: "5 Jun, 2023".to_string(),
        },
        PaymentActivity {
            id: "3".to_string(),
            kind: PaymentKind::Payment,
            status: PaymentStatus::Success,
            amount: 898.0,
            date_label: "1 Jun, 2023".to_string(),
        },
        PaymentActivity {
            id: "4".to_string(),
            kind: PaymentKind::Payment,
            status: PaymentStatus::Success,
            amount: 123.0,
            date_label: "29 May, 2023".to_string(),
        },
        PaymentActivity {
            id: "5".to_string(),
            kind: PaymentKind::Payment,
            status: PaymentStatus::Success,
            amount: 2055.0,
            date_label: "20 May, 2023".to_string(),
        },
    ]
}

/// Aggregate dashboard stats
pub fn mock_stats() -> DashboardStats {
    DashboardStats {
        scheduled_shifts: 12,
        worked_shifts: 86,
        cancelled_shifts: 3,
        current_month_shifts: 20,
        pending_earnings: 1250.0,
        total_earnings: 4875.0,
    }
}

/// The worker's next committed shift, as shown on the home banner
pub fn next_shift_banner(now: NaiveDateTime) -> (String, String) {
    let tomorrow = at(now, 1, 9);
    (
        format!("Tomorrow {}, 9:00 AM", format_date(tomorrow)),
        "Memorial Hospital, Floor 3".to_string(),
    )
}

const CHART_MONTHS: [&str; 6] = ["Jun", "Jul", "Aug", "Sep", "Oct", "Nov"];

/// Month name for the dashboard badge
pub fn month_name(now: NaiveDateTime) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTHS[now.month0() as usize]
}

/// "Shifts Worked" section: bar/line/pie over the last six months
pub fn shifts_worked_section(
    stats: &DashboardStats,
    now: NaiveDateTime,
) -> Result<ChartSection, ChartError> {
    let monthly = vec![30.0, 15.0, 20.0, stats.current_month_shifts as f64, 0.0, 0.0];

    let bar = ChartSeries::new(CHART_MONTHS.to_vec(), monthly.clone())?
        .with_colors(vec![DEFAULT_POINT_COLOR; 6])?
        .with_active_index(3)?
        .with_legend(vec!["Monthly Shifts"]);

    let line = ChartSeries::new(CHART_MONTHS.to_vec(), monthly)?
        .with_stroke_width(4)
        .with_legend(vec!["Monthly Trend"]);

    let pie = ChartSeries::new(
        vec!["Completed", "Scheduled", "Cancelled"],
        vec![
            stats.worked_shifts as f64,
            stats.scheduled_shifts as f64,
            stats.cancelled_shifts as f64,
        ],
    )?
    .with_colors(vec![(59, 130, 246), (13, 148, 136), (239, 68, 68)])?;

    Ok(ChartSection::new(
        "Shifts Worked",
        vec![
            (ChartKind::Bar, bar),
            (ChartKind::Line, line),
            (ChartKind::Pie, pie),
        ],
    )?
    .with_badge(
        month_name(now),
        Some(stats.current_month_shifts.to_string()),
    )
    .with_metrics(vec![
        ChartMetric::new("AVERAGE", "18.75"),
        ChartMetric::new("TARGET", "22"),
        ChartMetric::new("TREND", "+5.3%").accented(),
    ]))
}

/// "Shift Distribution" section: pie over times of day
pub fn distribution_section() -> Result<ChartSection, ChartError> {
    let pie = ChartSeries::new(
        vec!["Morning", "Afternoon", "Night"],
        vec![40.0, 35.0, 25.0],
    )?
    .with_colors(vec![(16, 185, 129), (245, 158, 11), (99, 102, 241)])?;

    ChartSection::new("Shift Distribution", vec![(ChartKind::Pie, pie)])
}

/// "Earnings Trend" section: line over the last six months
pub fn earnings_section(stats: &DashboardStats) -> Result<ChartSection, ChartError> {
    let line = ChartSeries::new(
        CHART_MONTHS.to_vec(),
        vec![1200.0, 800.0, 1800.0, 2500.0, 0.0, 0.0],
    )?
    .with_colors(vec![(16, 185, 129); 6])?
    .with_stroke_width(4);

    Ok(
        ChartSection::new("Earnings Trend", vec![(ChartKind::Line, line)])?
            .with_badge("This Year", None::<String>)
            .with_metrics(vec![
                ChartMetric::new("TOTAL EARNED", format!("${}", stats.total_earnings)).accented(),
                ChartMetric::new("MONTHLY AVG", "$1,625").accented(),
            ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_schedule, TimeBucket};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 9)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_mock_shifts_have_unique_ids() {
        let shifts = mock_shifts(now());
        let mut ids: Vec<_> = shifts.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), shifts.len());
    }

    #[test]
    fn test_schedule_covers_every_bucket() {
        let shifts = mock_scheduled_shifts(now());
        for bucket in [TimeBucket::Upcoming, TimeBucket::Ongoing, TimeBucket::Past] {
            assert!(
                !filter_schedule(&shifts, bucket, now()).is_empty(),
                "bucket {:?} should not be empty",
                bucket
            );
        }
    }

    #[test]
    fn test_dashboard_sections_build() {
        let stats = mock_stats();
        let section = shifts_worked_section(&stats, now()).unwrap();
        assert_eq!(section.available_kinds().len(), 3);
        assert_eq!(section.active_series().points()[3], 20.0);

        assert!(distribution_section().is_ok());
        assert!(earnings_section(&stats).is_ok());
    }
}
