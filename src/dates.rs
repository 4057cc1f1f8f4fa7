use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Calendar-date format accepted at the CLI boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
#[error("invalid date `{input}`: expected YYYY-MM-DD")]
pub struct DateParseError {
    pub input: String,
}

/// Parses a `YYYY-MM-DD` string into the start of that day in UTC. The
/// ledger core consumes the returned timestamp as-is.
pub fn parse_day(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let trimmed = input.trim();
    let day = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| DateParseError {
        input: trimmed.to_string(),
    })?;
    Ok(DateTime::from_naive_utc_and_offset(
        day.and_time(NaiveTime::MIN),
        Utc,
    ))
}
