//! Error types for date parsing and age calculation

use thiserror::Error;

use crate::date::CalendarDate;

/// Errors surfaced to the caller as user-input problems
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("Invalid date format: {0:?} (expected dd/mm/yyyy)")]
    InvalidDateFormat(String),

    #[error("Invalid date value: {day:02}/{month:02}/{year}")]
    InvalidDateValue { day: u32, month: u32, year: i32 },

    #[error("Reference date {reference} is before birth date {birth}")]
    ReferenceBeforeBirth {
        birth: CalendarDate,
        reference: CalendarDate,
    },

    #[error("Date {date} is after the latest selectable date {latest}")]
    DateInFuture {
        date: CalendarDate,
        latest: CalendarDate,
    },
}

impl AgeError {
    /// Every variant comes from bad user input; nothing here is worth retrying.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AgeError::InvalidDateFormat(_)
                | AgeError::InvalidDateValue { .. }
                | AgeError::ReferenceBeforeBirth { .. }
                | AgeError::DateInFuture { .. }
        )
    }
}
