//! Display formatting for the ISO dates and `HH:MM` times stored on records.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared_types::TIME_FORMAT;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// "2025-03-14" → "Mar 14, 2025". Unparseable input is returned unchanged.
pub fn format_date_human(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, DATE_FORMAT) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// "14:30" → "2:30 PM".
pub fn format_time_12h(time_str: &str) -> String {
    match NaiveTime::parse_from_str(time_str, TIME_FORMAT) {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => time_str.to_string(),
    }
}

/// "2025-03-14T09:05:00" → "Mar 14, 2025 9:05 AM".
pub fn format_datetime_human(datetime_str: &str) -> String {
    match NaiveDateTime::parse_from_str(datetime_str, DATETIME_FORMAT) {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => format_date_human(datetime_str),
    }
}

/// "09:00" and "10:30" → "9:00 AM – 10:30 AM".
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{} \u{2013} {}", format_time_12h(start), format_time_12h(end))
}

/// Worked hours with one decimal, e.g. "7.5 h".
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1} h")
}

/// Current local time in the stored datetime format.
pub fn now_timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format(DATETIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dates() {
        assert_eq!(format_date_human("2025-03-14"), "Mar 14, 2025");
        assert_eq!(format_date_human("2025-12-01"), "Dec 1, 2025");
        assert_eq!(format_date_human("soon"), "soon");
    }

    #[test]
    fn times() {
        assert_eq!(format_time_12h("14:30"), "2:30 PM");
        assert_eq!(format_time_12h("00:05"), "12:05 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
        assert_eq!(format_time_12h("9am"), "9am");
    }

    #[test]
    fn datetimes() {
        assert_eq!(format_datetime_human("2025-03-14T09:05:00"), "Mar 14, 2025 9:05 AM");
        assert_eq!(format_datetime_human("2025-03-14"), "Mar 14, 2025");
    }

    #[test]
    fn ranges_and_hours() {
        assert_eq!(format_time_range("09:00", "10:30"), "9:00 AM \u{2013} 10:30 AM");
        assert_eq!(format_hours(7.0), "7.0 h");
        assert_eq!(format_hours(7.83), "7.8 h");
    }

    #[test]
    fn timestamp_round_trips_through_formatter() {
        let stamp = now_timestamp();
        assert!(NaiveDateTime::parse_from_str(&stamp, DATETIME_FORMAT).is_ok());
    }
}
