//! Shared utility functions for hydro crates.

/// Timestamp utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{
        DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
    };

    /// Naive layouts accepted when a timestamp carries no offset. Such
    /// timestamps are read as UTC.
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    /// Parse an ISO-8601 timestamp, keeping its embedded offset.
    ///
    /// Accepts full RFC 3339 (`2021-02-01T00:00:00.000+02:00`), minute
    /// precision with an offset (`2021-02-01T00:00Z`), naive date-times and
    /// bare dates. Anything without an offset is taken to be UTC.
    pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, DateError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DateError::Empty);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt);
        }
        let with_offset = match s.strip_suffix('Z') {
            Some(rest) => format!("{rest}+00:00"),
            None => s.to_string(),
        };
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, "%Y-%m-%dT%H:%M%:z") {
            return Ok(dt);
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(utc(naive));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(utc(date.and_time(NaiveTime::MIN)));
        }
        Err(DateError::Unrecognised(s.to_string()))
    }

    fn utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
        Utc.from_utc_datetime(&naive).fixed_offset()
    }

    /// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn format_timestamp(date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Midnight of the calendar day `date` falls on, in its own offset.
    pub fn start_of_day(date: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let midnight = date.date_naive().and_time(NaiveTime::MIN);
        date.offset()
            .from_local_datetime(&midnight)
            .single()
            .unwrap_or(*date)
    }

    /// True when no entry of `others` is the same instant as `date`.
    pub fn is_unique_date<Tz: TimeZone>(date: &DateTime<Tz>, others: &[DateTime<Tz>]) -> bool {
        !others.iter().any(|other| other == date)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Duration, Timelike};

        #[test]
        fn test_parse_rfc3339_keeps_offset() {
            let dt = parse_timestamp("2021-02-01T00:00:00.000+02:00").unwrap();
            assert_eq!(dt.offset().local_minus_utc(), 7200);
            assert_eq!(dt.hour(), 0);
        }

        #[test]
        fn test_parse_minute_precision() {
            let dt = parse_timestamp("2021-02-01T01:00Z").unwrap();
            assert_eq!(dt.offset().local_minus_utc(), 0);
            assert_eq!(dt.hour(), 1);
            assert_eq!(dt.minute(), 0);
        }

        #[test]
        fn test_parse_naive_is_utc() {
            let dt = parse_timestamp("2021-02-01T06:30:00").unwrap();
            assert_eq!(dt.offset().local_minus_utc(), 0);
            let day = parse_timestamp("2021-02-01").unwrap();
            assert_eq!(day.hour(), 0);
        }

        #[test]
        fn test_parse_garbage() {
            assert_eq!(
                parse_timestamp(" yesterday "),
                Err(DateError::Unrecognised("yesterday".to_string()))
            );
            assert_eq!(parse_timestamp("  "), Err(DateError::Empty));
            assert_eq!(
                DateError::Unrecognised("01/02/2021".to_string()).to_string(),
                "Unrecognised timestamp \"01/02/2021\""
            );
        }

        #[test]
        fn test_format_timestamp() {
            let dt = parse_timestamp("2021-02-01T00:00:00+02:00").unwrap();
            assert_eq!(
                format_timestamp(&dt.with_timezone(&Utc)),
                "2021-01-31T22:00:00.000Z"
            );
        }

        #[test]
        fn test_start_of_day() {
            let dt = parse_timestamp("2021-02-01T18:45:00+08:00").unwrap();
            let start = start_of_day(&dt);
            assert_eq!(start, parse_timestamp("2021-02-01T00:00:00+08:00").unwrap());
        }

        #[test]
        fn test_is_unique_date() {
            let first = parse_timestamp("2021-05-20").unwrap();
            let second = first + Duration::days(1);
            let third = first + Duration::days(2);
            assert!(!is_unique_date(&first, &[first, second, third]));
            assert!(is_unique_date(&first, &[second, third]));
            assert!(is_unique_date(&first, &[]));
        }
    }
}

/// Error types for the timestamp helpers
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum DateError {
        /// Blank input where a timestamp was expected
        #[error("Timestamp is empty")]
        Empty,

        /// Text matched none of the accepted ISO-8601 layouts
        #[error("Unrecognised timestamp {0:?}")]
        Unrecognised(String),
    }
}
