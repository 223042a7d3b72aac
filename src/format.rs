//! Human-readable age phrases, e.g. "23 years, 11 months, 25 days".

use clap::ValueEnum;

use crate::age::ElapsedAge;

/// Language used for age phrases and messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "pt")]
    Portuguese,
}

struct Words {
    year: (&'static str, &'static str),
    month: (&'static str, &'static str),
    day: (&'static str, &'static str),
    invalid_date: &'static str,
}

impl Locale {
    fn words(self) -> Words {
        match self {
            Locale::English => Words {
                year: ("year", "years"),
                month: ("month", "months"),
                day: ("day", "days"),
                invalid_date: "invalid date",
            },
            Locale::Portuguese => Words {
                year: ("ano", "anos"),
                month: ("mês", "meses"),
                day: ("dia", "dias"),
                invalid_date: "data inválida",
            },
        }
    }

    /// Message shown in place of a result when the input could not be used.
    pub fn invalid_date_message(self) -> &'static str {
        self.words().invalid_date
    }
}

/// Formats an age in English.
pub fn format_elapsed_age(age: ElapsedAge) -> String {
    format_elapsed_age_in(age, Locale::English)
}

/// Joins the non-zero components with ", ". Zero components are skipped, and
/// an all-zero age reads as "0 days".
pub fn format_elapsed_age_in(age: ElapsedAge, locale: Locale) -> String {
    let words = locale.words();

    let parts: Vec<String> = [
        (age.years, words.year),
        (age.months, words.month),
        (age.days, words.day),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, forms)| format!("{n} {}", plural(n, forms)))
    .collect();

    if parts.is_empty() {
        return format!("0 {}", words.day.1);
    }
    parts.join(", ")
}

fn plural(n: u32, (one, many): (&'static str, &'static str)) -> &'static str {
    if n == 1 { one } else { many }
}
