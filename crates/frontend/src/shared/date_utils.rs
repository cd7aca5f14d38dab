//! Display formatting for backend instants.

use chrono::{DateTime, Utc};

/// Format an instant as "YYYY-MM-DD HH:MM" for table cells.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

/// Format an instant as a bare "YYYY-MM-DD" date.
pub fn format_day(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Format a booked session as "YYYY-MM-DD HH:MM-HH:MM".
pub fn format_session(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{} {}-{}",
        start.format("%Y-%m-%d"),
        start.format("%H:%M"),
        end.format("%H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_instant(instant), "2024-03-15 14:02");
        assert_eq!(format_day(instant), "2024-03-15");
    }

    #[test]
    fn test_format_session() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap();
        assert_eq!(format_session(start, end), "2024-06-01 09:00-13:00");
    }
}
