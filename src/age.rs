//! age.rs
//!
//! Calendar-aware elapsed age between a birth date and a reference date:
//!     years, months, days
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • day underflow (borrowing from the month before the reference month)
//!   • month underflow (borrowing from years, including after a day borrow)
//!   • leap years
//!   • varying month lengths, including a birth day longer than a short
//!     February (31 January vs. 1 March borrows a second month)

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::date::{CalendarDate, days_in_month};
use crate::error::AgeError;
use crate::format::{Locale, format_elapsed_age_in};

/// Whole years, months and days elapsed between two dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ElapsedAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl ElapsedAge {
    pub const fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Total calendar months (`years * 12 + months`).
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    pub fn to_phrase(&self, locale: Locale) -> String {
        format_elapsed_age_in(*self, locale)
    }
}

impl fmt::Display for ElapsedAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_phrase(Locale::English))
    }
}

/// Computes the elapsed age of `birth` as seen on `reference`.
///
/// Fails with `ReferenceBeforeBirth` when `reference` precedes `birth`.
pub fn compute_elapsed_age(
    birth: CalendarDate,
    reference: CalendarDate,
) -> Result<ElapsedAge, AgeError> {
    if reference < birth {
        return Err(AgeError::ReferenceBeforeBirth { birth, reference });
    }

    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Add days from the month before `reference` (28–31 depending on
        // month & leap year).
        let prev_month = previous_month(reference.month());
        days += days_in_month(prev_month, reference.year()) as i32;

        // A 29–31 birth day can still exceed a short February; borrow once
        // more from January.
        if days < 0 {
            months -= 1;
            days += days_in_month(previous_month(prev_month), reference.year()) as i32;
        }
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let age = ElapsedAge::new(years as u32, months as u32, days as u32);
    debug!(%birth, %reference, ?age, "computed elapsed age");
    Ok(age)
}

fn previous_month(month: u32) -> u32 {
    if month == 1 { 12 } else { month - 1 }
}
