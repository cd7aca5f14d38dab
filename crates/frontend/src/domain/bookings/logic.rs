//! Pure booking-form math: duration, cost and time-option rules.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Bookable start/end times, on the hour.
pub const TIME_SLOTS: [&str; 13] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
    "18:00", "19:00", "20:00",
];

fn hour_of(time: &str) -> Option<i64> {
    time.split(':').next()?.parse().ok()
}

/// Whole hours between two "HH:MM" selections, floored at zero.
pub fn session_hours(start: &str, end: &str) -> i64 {
    match (hour_of(start), hour_of(end)) {
        (Some(start_hour), Some(end_hour)) => (end_hour - start_hour).max(0),
        _ => 0,
    }
}

/// Running cost estimate for the selected range.
pub fn session_cost(start: &str, end: &str, hourly_rate: f64) -> f64 {
    session_hours(start, end) as f64 * hourly_rate
}

/// An end-time option is selectable only when strictly later than the start.
pub fn end_time_selectable(option: &str, start: &str) -> bool {
    !start.is_empty() && option > start
}

/// Combine a calendar date with an "HH:MM" selection into a UTC instant for
/// submission as an RFC 3339 timestamp.
pub fn combine_date_time(date: NaiveDate, time: &str) -> Option<DateTime<Utc>> {
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(DateTime::from_naive_utc_and_offset(date.and_time(time), Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_hours() {
        assert_eq!(session_hours("09:00", "13:00"), 4);
        assert_eq!(session_hours("10:00", "10:00"), 0);
        // never negative
        assert_eq!(session_hours("15:00", "09:00"), 0);
        assert_eq!(session_hours("", "13:00"), 0);
    }

    #[test]
    fn test_session_cost() {
        assert_eq!(session_cost("09:00", "13:00", 20.0), 80.0);
        assert_eq!(session_cost("09:00", "09:00", 20.0), 0.0);
    }

    #[test]
    fn test_end_time_selectable() {
        assert!(end_time_selectable("11:00", "10:00"));
        assert!(!end_time_selectable("10:00", "10:00"));
        assert!(!end_time_selectable("09:00", "10:00"));
        assert!(!end_time_selectable("11:00", ""));
    }

    #[test]
    fn test_combine_date_time() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let instant = combine_date_time(date, "09:00").unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-06-01T09:00:00+00:00");
        assert!(combine_date_time(date, "9am").is_none());
    }
}
