//! Civil-time handling for the SL APIs.
//!
//! SL expresses every timestamp in local Swedish civil time, without an
//! offset. Decoded values are therefore `NaiveDateTime` in Europe/Stockholm
//! wall-clock time, and callers supplying an explicit query time have it
//! coerced into that timezone first.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The civil timezone all provider timestamps are expressed in.
pub const PROVIDER_TIMEZONE: Tz = chrono_tz::Europe::Stockholm;

/// Error returned when a provider timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: expected {expected}")]
pub struct TimeError {
    value: String,
    expected: &'static str,
}

impl TimeError {
    fn new(value: &str, expected: &'static str) -> Self {
        Self {
            value: value.to_string(),
            expected,
        }
    }
}

/// The current wall-clock time in the provider's timezone.
pub fn now_in_provider_timezone() -> NaiveDateTime {
    Utc::now().with_timezone(&PROVIDER_TIMEZONE).naive_local()
}

/// Coerce an offset-aware instant into provider wall-clock time.
pub fn to_provider_timezone<Z: TimeZone>(date_time: DateTime<Z>) -> NaiveDateTime {
    date_time.with_timezone(&PROVIDER_TIMEZONE).naive_local()
}

/// Parse a combined timestamp in the departure-board format,
/// e.g. `2024-03-15T14:30:00`.
pub fn parse_combined(value: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| TimeError::new(value, "%Y-%m-%dT%H:%M:%S"))
}

/// Parse a split date + time pair in the trip-planner format,
/// e.g. `2024-03-15` + `14:30:00`. Seconds are optional.
pub fn parse_date_time_pair(date: &str, time: &str) -> Result<NaiveDateTime, TimeError> {
    let combined = format!("{date} {time}");
    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M"))
        .map_err(|_| TimeError::new(&combined, "%Y-%m-%d %H:%M[:%S]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_combined_timestamp() {
        let parsed = parse_combined("2024-03-15T14:30:05").unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.day(), 15);
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.minute(), 30);
        assert_eq!(parsed.second(), 5);
    }

    #[test]
    fn parse_combined_rejects_garbage() {
        assert!(parse_combined("2024-03-15 14:30:05").is_err());
        assert!(parse_combined("not a time").is_err());
        assert!(parse_combined("").is_err());
    }

    #[test]
    fn parse_pair_with_seconds() {
        let parsed = parse_date_time_pair("2024-03-15", "14:30:05").unwrap();
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.second(), 5);
    }

    #[test]
    fn parse_pair_without_seconds() {
        let parsed = parse_date_time_pair("2024-03-15", "14:30").unwrap();
        assert_eq!(parsed.minute(), 30);
        assert_eq!(parsed.second(), 0);
    }

    #[test]
    fn parse_pair_rejects_bad_date() {
        assert!(parse_date_time_pair("15/03/2024", "14:30").is_err());
    }

    #[test]
    fn coerce_utc_into_stockholm() {
        // Stockholm is UTC+1 in winter.
        let utc = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let local = to_provider_timezone(utc);
        assert_eq!(local.hour(), 13);

        // And UTC+2 in summer.
        let utc = Utc.with_ymd_and_hms(2024, 7, 10, 12, 0, 0).unwrap();
        let local = to_provider_timezone(utc);
        assert_eq!(local.hour(), 14);
    }
}
