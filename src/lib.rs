//! Calendar-aware age calculator: parse a birth date, compute the whole
//! years/months/days elapsed up to a reference date, and render the result.

pub mod age;
pub mod cli;
pub mod date;
pub mod error;
pub mod form;
pub mod format;

pub use age::{ElapsedAge, compute_elapsed_age};
pub use date::{CalendarDate, days_in_month, format_date, is_leap_year, parse_date};
pub use error::AgeError;
pub use form::AgeForm;
pub use format::{Locale, format_elapsed_age, format_elapsed_age_in};
