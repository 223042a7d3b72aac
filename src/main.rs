use std::io::{self, BufRead, Write};

use agecalc::cli::{Cli, OutputFormat};
use agecalc::{AgeForm, CalendarDate, ElapsedAge, Locale, compute_elapsed_age, parse_date};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct AgeReport {
    birth: CalendarDate,
    reference: CalendarDate,
    age: ElapsedAge,
    phrase: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let today = cli.reference_date();
    info!(%today, locale = ?cli.locale, "starting agecalc");

    match cli.birth.as_deref() {
        Some(text) => one_shot(text, today, cli.locale, cli.output),
        None => interactive(today, cli.locale),
    }
}

fn one_shot(text: &str, today: CalendarDate, locale: Locale, output: OutputFormat) -> Result<()> {
    let birth = parse_date(text).context("Failed to read birth date")?;
    let age = compute_elapsed_age(birth, today).context("Failed to compute age")?;
    let phrase = age.to_phrase(locale);

    match output {
        OutputFormat::Text => println!("{phrase}"),
        OutputFormat::Json => {
            let report = AgeReport {
                birth,
                reference: today,
                age,
                phrase,
            };
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}

// One date per line, like typing into the form's text field and pressing
// the calculate button.
fn interactive(today: CalendarDate, locale: Locale) -> Result<()> {
    let mut form = AgeForm::new(today, locale);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "[{}] > ", form.selected_label())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        if form.enter_text(&line).is_ok() {
            form.submit(today);
        }
        writeln!(stdout, "{}", form.result())?;
    }

    Ok(())
}
