//! State of the birth-date form: the selected date, whether the picker is
//! showing, and the last rendered result. Owned by whichever front end drives
//! it; the calculator and formatter stay pure.

use tracing::{debug, warn};

use crate::age::compute_elapsed_age;
use crate::date::{CalendarDate, format_date, parse_date};
use crate::error::AgeError;
use crate::format::Locale;

#[derive(Debug, Clone)]
pub struct AgeForm {
    selected: CalendarDate,
    max_date: CalendarDate,
    picker_open: bool,
    locale: Locale,
    result: String,
}

impl AgeForm {
    /// A fresh form preselects `today`, which is also the latest pickable date.
    pub fn new(today: CalendarDate, locale: Locale) -> Self {
        Self {
            selected: today,
            max_date: today,
            picker_open: false,
            locale,
            result: String::new(),
        }
    }

    pub fn selected(&self) -> CalendarDate {
        self.selected
    }

    pub fn selected_label(&self) -> String {
        format_date(self.selected)
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    /// Handles the picker closing. `None` means it was dismissed and the
    /// previous selection stays.
    pub fn pick(&mut self, date: Option<CalendarDate>) -> Result<(), AgeError> {
        self.picker_open = false;

        let Some(date) = date else {
            debug!("picker dismissed");
            return Ok(());
        };

        if date > self.max_date {
            warn!(%date, max = %self.max_date, "picked date is in the future");
            return Err(AgeError::DateInFuture {
                date,
                latest: self.max_date,
            });
        }

        self.selected = date;
        Ok(())
    }

    /// Text-field entry. On failure the selection is kept and the result
    /// shows the invalid-date message.
    pub fn enter_text(&mut self, text: &str) -> Result<CalendarDate, AgeError> {
        match parse_date(text) {
            Ok(date) => {
                self.selected = date;
                Ok(date)
            }
            Err(e) => {
                warn!(input = text, error = %e, "rejected date input");
                self.result = self.locale.invalid_date_message().to_string();
                Err(e)
            }
        }
    }

    /// Computes the age of the selected date as of `today` and stores the
    /// rendered phrase.
    pub fn submit(&mut self, today: CalendarDate) -> &str {
        self.result = match compute_elapsed_age(self.selected, today) {
            Ok(age) => age.to_phrase(self.locale),
            Err(e) => {
                warn!(error = %e, "cannot compute age");
                self.locale.invalid_date_message().to_string()
            }
        };
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn form() -> AgeForm {
        AgeForm::new(date(2024, 5, 15), Locale::English)
    }

    #[test]
    fn test_new_form_selects_today() {
        let form = form();
        assert_eq!(form.selected(), date(2024, 5, 15));
        assert_eq!(form.selected_label(), "15/05/2024");
        assert_eq!(form.result(), "");
        assert!(!form.is_picker_open());
    }

    #[test]
    fn test_submit_without_changes_is_zero_days() {
        let mut form = form();
        assert_eq!(form.submit(date(2024, 5, 15)), "0 days");
    }

    #[test]
    fn test_pick_then_submit() {
        let mut form = form();
        form.open_picker();
        assert!(form.is_picker_open());

        form.pick(Some(date(2000, 5, 20))).unwrap();
        assert!(!form.is_picker_open());
        assert_eq!(
            form.submit(date(2024, 5, 15)),
            "23 years, 11 months, 25 days"
        );
        assert_eq!(form.result(), "23 years, 11 months, 25 days");
    }

    #[test]
    fn test_dismissed_picker_keeps_selection() {
        let mut form = form();
        form.pick(Some(date(1990, 1, 1))).unwrap();
        form.open_picker();
        form.pick(None).unwrap();
        assert!(!form.is_picker_open());
        assert_eq!(form.selected(), date(1990, 1, 1));
    }

    #[test]
    fn test_future_pick_is_rejected() {
        let mut form = form();
        let err = form.pick(Some(date(2024, 5, 16))).unwrap_err();
        assert_eq!(
            err,
            AgeError::DateInFuture {
                date: date(2024, 5, 16),
                latest: date(2024, 5, 15),
            }
        );
        assert_eq!(form.selected(), date(2024, 5, 15));
    }

    #[test]
    fn test_text_entry() {
        let mut form = AgeForm::new(date(2024, 5, 15), Locale::Portuguese);
        assert_eq!(form.enter_text("15/05/2000"), Ok(date(2000, 5, 15)));
        assert_eq!(form.submit(date(2024, 5, 15)), "24 anos");
    }

    #[test]
    fn test_bad_text_shows_invalid_message() {
        let mut form = AgeForm::new(date(2024, 5, 15), Locale::Portuguese);
        form.enter_text("01/01/2000").unwrap();
        assert!(form.enter_text("31/02/2024").is_err());
        assert_eq!(form.result(), "data inválida");
        assert_eq!(form.selected(), date(2000, 1, 1));
    }

    #[test]
    fn test_typed_future_date_renders_invalid() {
        let mut form = form();
        form.enter_text("01/01/2030").unwrap();
        assert_eq!(form.submit(date(2024, 5, 15)), "invalid date");
    }
}
