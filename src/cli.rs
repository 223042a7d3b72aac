//! CLI argument definitions

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::date::CalendarDate;
use crate::format::Locale;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// The age phrase only
    #[default]
    Text,
    /// Birth date, reference date, components and phrase as JSON
    Json,
}

/// CLI arguments for agecalc
#[derive(Parser, Debug)]
#[command(name = "agecalc")]
#[command(version, about = "Elapsed years, months and days since a birth date")]
#[command(long_about = r#"
Computes how many whole years, months and days have passed since a birth date.

Dates are written dd/mm/yyyy. Without a BIRTH argument, dates are read one per
line from stdin and the age is printed for each; an empty line ends the session.

Example:
  agecalc 14/06/1992
  agecalc --locale pt --today 15/05/2024 20/05/2000
  agecalc --output json 31/12/1999
"#)]
pub struct Cli {
    /// Birth date (dd/mm/yyyy); omit for interactive mode
    pub birth: Option<String>,

    /// Reference date used instead of the current local date
    #[arg(long, value_name = "DD/MM/YYYY", env = "AGECALC_TODAY")]
    pub today: Option<CalendarDate>,

    /// Language of the age phrase
    #[arg(short, long, value_enum, default_value = "en", env = "AGECALC_LOCALE")]
    pub locale: Locale,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The date ages are measured against.
    pub fn reference_date(&self) -> CalendarDate {
        self.today.unwrap_or_else(CalendarDate::today)
    }

    pub fn log_filter(&self) -> EnvFilter {
        match self.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    }
}
