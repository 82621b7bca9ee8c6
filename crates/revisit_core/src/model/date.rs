//! Calendar date value object and day arithmetic.
//!
//! # Responsibility
//! - Convert civil `(year, month, day)` triples to comparable ordinal days.
//! - Compute signed day differences between two dates.
//!
//! # Invariants
//! - Conversion is pure proleptic Gregorian: two dates N calendar days apart
//!   produce ordinal values that differ by exactly N.
//! - No time-zone or local-clock input anywhere in this module; the
//!   `mktime`-style seconds conversion is off-limits because it mis-subtracts
//!   across daylight-saving transitions.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for calendar conversions.
pub type DateResult<T> = Result<T, DateError>;

/// Calendar conversion error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The `(year, month, day)` triple does not name a real calendar day.
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year}-{month}-{day}")
            }
        }
    }
}

impl Error for DateError {}

/// Immutable civil calendar date.
///
/// Construction does not validate the triple; validation happens at
/// conversion time so callers can hold not-yet-checked user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Converts this date to days since 1970-01-01 (proleptic Gregorian).
    ///
    /// # Errors
    /// - `DateError::InvalidDate` when month is outside `1..=12` or day is
    ///   outside the month's length (leap years included).
    pub fn to_ordinal_day(self) -> DateResult<i64> {
        if self.month < 1 || self.month > 12 {
            return Err(self.invalid());
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(self.invalid());
        }

        // Howard Hinnant's days_from_civil, epoch 1970-01-01.
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = i64::from(self.month) + if self.month > 2 { -3 } else { 9 };
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        Ok(era * 146_097 + doe - 719_468)
    }

    /// Inverse conversion: builds the date named by an ordinal day.
    ///
    /// Every `i64` names some proleptic-Gregorian day, so this is total.
    pub fn from_ordinal_day(ordinal: i64) -> Self {
        let z = ordinal + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = (y + i64::from(month <= 2)) as i32;
        Self { year, month, day }
    }

    fn invalid(self) -> DateError {
        DateError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Signed day difference, positive when `to` is chronologically after `from`.
///
/// # Errors
/// - `DateError::InvalidDate` when either endpoint fails conversion.
pub fn day_difference(from: Date, to: Date) -> DateResult<i64> {
    Ok(to.to_ordinal_day()? - from.to_ordinal_day()?)
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
