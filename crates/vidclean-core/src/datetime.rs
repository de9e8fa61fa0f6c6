//! Publish-timestamp parsing.
//!
//! Scrapes carry the publish instant as `2025/03/10 14:30` (seconds and
//! ISO-style hyphens both appear in older exports). Parsing tries each
//! recognized format in order and fails softly: an unrecognized value is
//! reported as missing rather than raised.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Fixed weekday vocabulary, Monday-first.
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Parse a raw timestamp cell. Date-only values get midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Weekday label for a parsed date. Always derived from the date value
/// itself so the label cannot drift from the date column.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_datetime_without_seconds() {
        let parsed = parse_timestamp("2025/03/10 14:30").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(parsed.time(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn parses_hyphen_datetime_with_seconds() {
        let parsed = parse_timestamp("2024-12-01 08:05:59").unwrap();
        assert_eq!(parsed.time(), NaiveTime::from_hms_opt(8, 5, 59).unwrap());
    }

    #[test]
    fn date_only_gets_midnight() {
        let parsed = parse_timestamp("2025/01/02").unwrap();
        assert_eq!(parsed.time(), NaiveTime::MIN);
    }

    #[test]
    fn unparsable_is_none() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("-").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2025/13/40 99:99").is_none());
    }

    #[test]
    fn weekday_labels_are_monday_first() {
        // 2025-03-10 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(weekday_label(monday), "Monday");
        assert_eq!(weekday_label(monday.succ_opt().unwrap()), "Tuesday");
        // 2025-03-16 is the following Sunday.
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        assert_eq!(weekday_label(sunday), "Sunday");
    }
}
