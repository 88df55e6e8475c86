//! Birth date parsing, formatting and age validation.
//!
//! Dates cross three representations: the storage form (`YYYY-MM-DD`,
//! sometimes with a trailing midnight timestamp when read back from
//! older dumps), the display form (`DD.MM.YYYY`) shown in templates,
//! and [`NaiveDate`] inside the domain. Parsing never fails silently;
//! malformed input is a [`DateError`].

use chrono::{Months, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Minimum age (exclusive) a person must exceed.
pub const MIN_AGE: u32 = 18;
/// Maximum age (exclusive) a person must stay under.
pub const MAX_AGE: u32 = 60;

const STORAGE_FORMAT: &str = "%Y-%m-%d";
const STORAGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    /// Input did not parse as a date in any accepted representation.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Parses the storage representation, accepting a plain `YYYY-MM-DD`
/// value or an ISO-8601-like timestamp such as `1990-04-01T00:00:00Z`.
pub fn parse_storage(value: &str) -> Result<NaiveDate, DateError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, STORAGE_FORMAT) {
        return Ok(date);
    }
    NaiveDateTime::parse_from_str(value, STORAGE_TIMESTAMP_FORMAT)
        .map(|dt| dt.date())
        .map_err(|_| DateError::InvalidDate(value.to_string()))
}

/// Parses the display representation (`DD.MM.YYYY`).
pub fn parse_display(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, DISPLAY_FORMAT)
        .map_err(|_| DateError::InvalidDate(value.to_string()))
}

pub fn format_storage(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Reformats a storage date into the display form.
pub fn to_display(value: &str) -> Result<String, DateError> {
    parse_storage(value).map(format_display)
}

/// Returns whether the birth date corresponds to an age strictly
/// between [`MIN_AGE`] and [`MAX_AGE`] years as of `today`. Both
/// bounds are exclusive: a person turning exactly 18 or 60 today is
/// rejected.
pub fn is_age_valid(birth_date: NaiveDate, today: NaiveDate) -> bool {
    let Some(earliest) = today.checked_sub_months(Months::new(MAX_AGE * 12)) else {
        return false;
    };
    let Some(latest) = today.checked_sub_months(Months::new(MIN_AGE * 12)) else {
        return false;
    };
    earliest < birth_date && birth_date < latest
}
