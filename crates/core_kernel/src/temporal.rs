//! Temporal helpers for premium schedules
//!
//! Due-date stepping adds calendar months with day clamping: January 31
//! plus one month is February 28 (or 29). All timestamps are UTC; the
//! company's logical clock is advanced externally.

use chrono::{DateTime, Months, Utc};
use thiserror::Error;

/// Errors that can occur during temporal calculations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Date out of range when adding {months} months to {start}")]
    OutOfRange { start: DateTime<Utc>, months: u32 },
}

/// Adds `months` calendar months to a timestamp, clamping the day of
/// month when the target month is shorter.
pub fn plus_months(start: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>, TemporalError> {
    start
        .checked_add_months(Months::new(months))
        .ok_or(TemporalError::OutOfRange { start, months })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_plus_months_simple() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let stepped = plus_months(start, 3).unwrap();
        assert_eq!(stepped, Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_plus_months_clamps_day() {
        let start = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
        let stepped = plus_months(start, 1).unwrap();
        assert_eq!(stepped, Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_plus_months_year_rollover() {
        let start = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let stepped = plus_months(start, 6).unwrap();
        assert_eq!(stepped, Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap());
    }
}
