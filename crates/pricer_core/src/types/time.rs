//! Timestamp type and year fraction helpers for trade date fields.
//!
//! This module provides:
//! - `Timestamp`: UTC instant wrapper around `chrono::DateTime<Utc>` using the
//!   FIRE wire format (`YYYY-MM-DDTHH:MM:SSZ`)
//! - Whole-day differences between timestamps
//! - Actual/basis year fractions built on whole days
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{year_fraction, Timestamp};
//!
//! let start = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
//! let end = Timestamp::parse("2024-07-01T00:00:00Z").unwrap();
//!
//! assert_eq!(end.days_since(start), 182);
//! let yf = year_fraction(start, end, 365.0);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Wire format of every date field in a FIRE trade record.
pub const FIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const SECONDS_PER_DAY: i64 = 86_400;

/// UTC instant with whole-day arithmetic.
///
/// Differences between timestamps are counted in whole days, rounding towards
/// negative infinity, so a 36 hour gap is 1 day and a -36 hour gap is -2 days.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Timestamp;
///
/// let ts = Timestamp::parse("2024-06-15T12:30:00Z").unwrap();
/// assert_eq!(ts.to_string(), "2024-06-15T12:30:00Z");
///
/// let midnight = Timestamp::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(ts.days_since(midnight), 0);
/// assert_eq!(midnight.days_since(ts), -1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parses a timestamp in the FIRE format `YYYY-MM-DDTHH:MM:SSZ`.
    ///
    /// Any other layout (date only, fractional seconds, numeric offsets) is
    /// rejected with `DateError::ParseError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Timestamp;
    ///
    /// assert!(Timestamp::parse("2018-06-29T00:00:00Z").is_ok());
    /// assert!(Timestamp::parse("2018-06-29").is_err());
    /// assert!(Timestamp::parse("2018-02-30T00:00:00Z").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDateTime::parse_from_str(s, FIRE_TIMESTAMP_FORMAT)
            .map(|naive| Timestamp(Utc.from_utc_datetime(&naive)))
            .map_err(|e| DateError::ParseError {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Creates a timestamp at midnight UTC on the given calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Timestamp(Utc.from_utc_datetime(&naive)))
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Wraps an existing UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }

    /// Returns the underlying `DateTime<Utc>`.
    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }

    /// Whole days elapsed from `earlier` to `self` (floored, may be negative).
    pub fn days_since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// Shifts the timestamp by a signed number of days.
    pub fn add_days(self, days: i64) -> Self {
        Timestamp(self.0 + chrono::Duration::days(days))
    }
}

impl Sub for Timestamp {
    type Output = i64;

    /// Whole days between two timestamps, see [`Timestamp::days_since`].
    fn sub(self, other: Self) -> i64 {
        self.days_since(other)
    }
}

impl FromStr for Timestamp {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Timestamp::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FIRE_TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Year fraction between two timestamps as whole days over `days_per_year`.
///
/// Negative when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{year_fraction, Timestamp};
///
/// let start = Timestamp::from_ymd(2023, 1, 1).unwrap();
/// let end = Timestamp::from_ymd(2024, 1, 1).unwrap();
///
/// assert_eq!(year_fraction(start, end, 365.0), 1.0);
/// assert_eq!(year_fraction(end, start, 365.0), -1.0);
/// ```
#[inline]
pub fn year_fraction(start: Timestamp, end: Timestamp, days_per_year: f64) -> f64 {
    (end - start) as f64 / days_per_year
}
