//! The one date format the family tree accepts: `DD/MM/YYYY`.
//!
//! Dates are parsed once, where text enters the crate, and carried as
//! [`NaiveDate`] from then on.

use chrono::NaiveDate;

use crate::error::{FamilyError, FamilyResult};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `DD/MM/YYYY` date. ISO `YYYY-MM-DD` input is rejected with a
/// reason that names the expected format.
pub fn parse_date(value: &str) -> FamilyResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        let reason = if looks_like_iso(trimmed) {
            "ISO dates are not accepted, expected DD/MM/YYYY".to_string()
        } else {
            format!("expected DD/MM/YYYY ({})", e)
        };
        FamilyError::InvalidDate {
            value: value.to_string(),
            reason,
        }
    })
}

/// Parses an optional date, treating blank input as absent.
pub fn parse_optional_date(value: Option<&str>) -> FamilyResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn looks_like_iso(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == 3 && parts[0].len() == 4 && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}
