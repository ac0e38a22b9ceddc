//! Date helper functions

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Date helper errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {0:?}")]
    Invalid(String),
}

/// Parse a post date
///
/// A plain `YYYY-MM-DD` date is read as local midnight. Anything containing
/// a `T` is read as a local date-time, or as RFC 3339 converted to local time.
pub fn parse_date_string(s: &str) -> Result<NaiveDateTime, DateError> {
    let s = s.trim();
    let invalid = || DateError::Invalid(s.to_string());

    if !s.contains('T') {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(invalid);
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .map_err(|_| invalid())
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Coarse age of `date` as seen from `now`
///
/// Compares calendar fields, not elapsed time: the year difference wins if
/// positive, then the month difference, then the day-of-month difference.
/// Otherwise the date is "Today".
pub fn relative_age(date: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let years = now.year() - date.year();
    let months = now.month() as i32 - date.month() as i32;
    let days = now.day() as i32 - date.day() as i32;

    if years > 0 {
        format!("{}y ago", years)
    } else if months > 0 {
        format!("{}mo ago", months)
    } else if days > 0 {
        format!("{}d ago", days)
    } else {
        "Today".to_string()
    }
}

/// Format a post date against the local clock
///
/// # Examples
/// ```ignore
/// format_date("2024-01-01", true) // -> "January 1, 2024 (1y ago)"
/// ```
pub fn format_date(date: &str, include_relative: bool) -> Result<String, DateError> {
    format_date_at(date, include_relative, &Local::now().naive_local())
}

/// Format a post date with an explicit "now"
pub fn format_date_at(
    date: &str,
    include_relative: bool,
    now: &NaiveDateTime,
) -> Result<String, DateError> {
    let target = parse_date_string(date)?;
    let full = full_date(&target);

    if !include_relative {
        return Ok(full);
    }

    Ok(format!("{} ({})", full, relative_age(&target, now)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        parse_date_string(s).unwrap()
    }

    #[test]
    fn test_full_date_without_relative() {
        let now = at("2025-01-01");
        assert_eq!(
            format_date_at("2024-01-01", false, &now).unwrap(),
            "January 1, 2024"
        );
    }

    #[test]
    fn test_relative_years() {
        let now = at("2025-01-01");
        assert_eq!(
            format_date_at("2024-01-01", true, &now).unwrap(),
            "January 1, 2024 (1y ago)"
        );
    }

    #[test]
    fn test_same_day_is_today() {
        let now = at("2024-06-15T18:45:00");
        assert_eq!(
            format_date_at("2024-06-15", true, &now).unwrap(),
            "June 15, 2024 (Today)"
        );
    }

    #[test]
    fn test_months_and_days() {
        let now = at("2024-03-20");
        assert_eq!(relative_age(&at("2024-01-05"), &now), "2mo ago");
        assert_eq!(relative_age(&at("2024-03-02"), &now), "18d ago");
    }

    #[test]
    fn test_calendar_field_subtraction() {
        // One day apart, but across a month boundary
        assert_eq!(relative_age(&at("2024-01-31"), &at("2024-02-01")), "1mo ago");
        // Across a year boundary the year wins
        assert_eq!(relative_age(&at("2023-12-31"), &at("2024-01-01")), "1y ago");
        // Future year with an earlier month still reports months
        assert_eq!(relative_age(&at("2025-01-01"), &at("2024-03-01")), "2mo ago");
        assert_eq!(relative_age(&at("2025-06-10"), &at("2024-01-01")), "Today");
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(
            at("2024-01-05T10:30:00").format("%Y-%m-%d %H:%M").to_string(),
            "2024-01-05 10:30"
        );
        assert_eq!(
            at("2024-01-05T10:30").format("%H:%M").to_string(),
            "10:30"
        );
        assert!(parse_date_string("2024-01-05T10:30:00Z").is_ok());
        assert_eq!(
            parse_date_string("yesterday"),
            Err(DateError::Invalid("yesterday".to_string()))
        );
        assert!(format_date("not a date", true).is_err());
    }
}
