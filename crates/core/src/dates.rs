//! Date parsing for date-typed payload fields.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::Timestamp;

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (taken as
/// midnight UTC).
pub fn parse_date(input: &str) -> Option<Timestamp> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_date("2021-06-01T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.day(), 1);
    }

    #[test]
    fn parses_plain_date_as_midnight_utc() {
        let dt = parse_date("2019-03-15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2019, 3, 15));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("March 2019").is_none());
        assert!(parse_date("2019-13-01").is_none());
    }
}
