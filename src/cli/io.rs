use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use dialoguer::{theme::ColorfulTheme, Input};

use crate::dates;

use super::{output, CliError};

/// Where field values come from: dialoguer prompts in interactive mode,
/// plain stdin lines when running scripted.
pub enum Prompter {
    Interactive(ColorfulTheme),
    Script,
}

impl Prompter {
    pub fn interactive() -> Self {
        Self::Interactive(ColorfulTheme::default())
    }

    /// Reads one free-form value. End of input in script mode is reported
    /// as an interrupt so the shell can wind down.
    pub fn text(&self, prompt: &str) -> Result<String, CliError> {
        match self {
            Prompter::Interactive(theme) => Ok(Input::<String>::with_theme(theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?),
            Prompter::Script => {
                print!("{}: ", prompt);
                io::stdout().flush()?;
                read_stdin_line()
            }
        }
    }

    /// Reads an account number. `None` means the input did not parse; the
    /// warning has already been printed and the caller abandons the
    /// operation.
    pub fn account_number(&self, prompt: &str) -> Result<Option<u32>, CliError> {
        let raw = self.text(prompt)?;
        match raw.trim().parse::<u32>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                output::warning(format!("`{}` is not an account number.", raw.trim()));
                Ok(None)
            }
        }
    }

    /// Reads a non-negative monetary amount, or `None` on garbage input.
    pub fn amount(&self, prompt: &str) -> Result<Option<f64>, CliError> {
        let raw = self.text(prompt)?;
        match raw.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(Some(amount)),
            _ => {
                output::warning(format!("`{}` is not a valid amount.", raw.trim()));
                Ok(None)
            }
        }
    }

    /// Reads a calendar date as start-of-day UTC, or `None` on a format
    /// error.
    pub fn date(&self, prompt: &str) -> Result<Option<DateTime<Utc>>, CliError> {
        let raw = self.text(&format!("{} (YYYY-MM-DD)", prompt))?;
        match dates::parse_day(&raw) {
            Ok(day) => Ok(Some(day)),
            Err(err) => {
                output::warning(err);
                Ok(None)
            }
        }
    }
}

fn read_stdin_line() -> Result<String, CliError> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(CliError::Interrupted);
    }
    Ok(line.trim().to_string())
}
