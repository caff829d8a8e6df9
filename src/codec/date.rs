//! Date formatting and parsing
//!
//! Files carry dates as `YYYY/M/D` without zero padding. Parsing also accepts
//! the padded form and ISO `YYYY-MM-DD`.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::DateRange;

const ACCEPTED_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Render a date as `YYYY/M/D`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%-m/%-d").to_string()
}

/// Render a date with a strftime format
///
/// Fails instead of panicking on formats chrono cannot apply to a plain date,
/// such as unknown specifiers or time fields.
pub fn format_date_with(date: NaiveDate, format: &str) -> LedgerResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))
        .map_err(|_| LedgerError::Format(format!("Invalid date format: '{}'", format)))?;
    Ok(out)
}

/// Check that `format` can render dates
pub fn validate_date_format(format: &str) -> LedgerResult<()> {
    format_date_with(NaiveDate::MIN, format).map(|_| ())
}

/// Parse a calendar date
pub fn parse_date(text: &str) -> LedgerResult<NaiveDate> {
    let text = text.trim();

    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| LedgerError::Parse(format!("Could not parse date: '{}'", text)))
}

/// Parse both ends of an inclusive range and check their order
pub fn parse_date_range(start: &str, end: &str) -> LedgerResult<DateRange> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    DateRange::new(start, end).ok_or(LedgerError::Range { start, end })
}
