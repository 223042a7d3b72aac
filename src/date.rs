//! date.rs
//!
//! Calendar dates as entered on the birth-date form, in `dd/mm/yyyy` form.
//!
//! `CalendarDate` is a thin wrapper over `chrono::NaiveDate`, so a value of
//! this type always names a real Gregorian day (no 31 February, no 29
//! February outside leap years).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AgeError;

/// Earliest year the text parser accepts.
pub const MIN_PARSE_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date, rejecting days that do not exist in the given month/year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, AgeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(AgeError::InvalidDateValue { day, month, year })
    }

    /// Current local date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }
}

impl FromStr for CalendarDate {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = AgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_date(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// Formats a date as `dd/mm/yyyy`.
pub fn format_date(date: CalendarDate) -> String {
    date.to_string()
}

/// Parses `dd/mm/yyyy` into a real calendar date.
///
/// Component widths are not enforced: any run of ASCII digits is accepted, so
/// `1/1/1990` reads the same as `01/01/1990`, and years past 9999 written by
/// `format_date` parse back.
///
/// The day is checked against the actual month length, so `31/02/2024`
/// is rejected with `InvalidDateValue` rather than accepted by a plain
/// 1–31 range check.
pub fn parse_date(text: &str) -> Result<CalendarDate, AgeError> {
    let text = text.trim();
    let format_error = || AgeError::InvalidDateFormat(text.to_string());

    let parts: Vec<&str> = text.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(format_error());
    };

    let day: u32 = parse_component(day).ok_or_else(format_error)?;
    let month: u32 = parse_component(month).ok_or_else(format_error)?;
    let year: i32 = parse_component(year).ok_or_else(format_error)?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year < MIN_PARSE_YEAR {
        return Err(AgeError::InvalidDateValue { day, month, year });
    }

    CalendarDate::new(year, month, day)
}

// Digits only: rejects signs, whitespace and empty parts that `str::parse` would
// otherwise accept or report differently.
fn parse_component<T: FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Returns number of days in a given month/year (handles leap years).
/// Months outside 1–12 have no days.
pub fn days_in_month(month: u32, year: i32) -> u32 {
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

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
