//! Wall-clock time values.
//!
//! A [`TimeValue`] is an `HH:MM` clock reading with no date attached. Night
//! windows and fixed ranges are expressed as pairs of these, so comparisons
//! need to know whether the second value belongs to the following day.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, CriteriaResult};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A wall-clock time of day with minute precision.
///
/// Ordering and equality are defined on the `(hour, minute)` pair only.
///
/// # Example
///
/// ```
/// use worktime_criteria::models::TimeValue;
///
/// let start = TimeValue::parse("22:00").unwrap();
/// assert_eq!(start.to_minutes(), 1320);
/// assert_eq!(start.to_string(), "22:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeValue {
    hour: u8,
    minute: u8,
}

impl TimeValue {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeValue = TimeValue { hour: 0, minute: 0 };

    /// Creates a time value, returning `None` when out of range.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Parses a zero-padded `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidTimeFormat`] if the text is not exactly
    /// two digits, a colon and two digits, or if the hour or minute is out of
    /// range.
    pub fn parse(s: &str) -> CriteriaResult<Self> {
        let invalid = || CriteriaError::InvalidTimeFormat {
            value: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }

        let two_digits = |hi: u8, lo: u8| -> Option<u8> {
            if hi.is_ascii_digit() && lo.is_ascii_digit() {
                Some((hi - b'0') * 10 + (lo - b'0'))
            } else {
                None
            }
        };

        let hour = two_digits(bytes[0], bytes[1]).ok_or_else(invalid)?;
        let minute = two_digits(bytes[3], bytes[4]).ok_or_else(invalid)?;

        Self::new(hour, minute).ok_or_else(invalid)
    }

    /// Returns the hour component (0-23).
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component (0-59).
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the number of minutes since midnight, in `0..=1439`.
    pub const fn to_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Compares `a` against `b`, optionally treating `b` as next-day.
    ///
    /// When `crosses_midnight` is set, `b` is shifted by a full day before the
    /// comparison, so an end time numerically earlier than its start still
    /// orders after it.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use worktime_criteria::models::TimeValue;
    ///
    /// let start = TimeValue::parse("22:00").unwrap();
    /// let end = TimeValue::parse("06:00").unwrap();
    ///
    /// assert_eq!(TimeValue::compare_with_rollover(start, end, false), Ordering::Greater);
    /// assert_eq!(TimeValue::compare_with_rollover(start, end, true), Ordering::Less);
    /// ```
    pub fn compare_with_rollover(a: TimeValue, b: TimeValue, crosses_midnight: bool) -> Ordering {
        let a_minutes = a.to_minutes();
        let b_minutes = if crosses_midnight {
            b.to_minutes() + MINUTES_PER_DAY
        } else {
            b.to_minutes()
        };
        a_minutes.cmp(&b_minutes)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeValue {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeValue {
    type Error = CriteriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.to_string()
    }
}
