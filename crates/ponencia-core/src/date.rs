//! Date parsing for source records.
//!
//! Source files mix ISO dates with the long forms used on decision headers
//! ("March 5, 1990", "Mar. 5, 1990") and US-style slashes ("03/05/1990").

use chrono::NaiveDate;

use crate::error::RecordError;

const FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b. %d, %Y", "%b %d, %Y", "%m/%d/%Y"];

/// Parse a required date field.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, RecordError> {
    let trimmed = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| RecordError::MalformedDate {
            field,
            value: raw.to_string(),
        })
}

/// Parse an optional date field; blank strings count as absent.
pub fn parse_optional(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, RecordError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(field, s).map(Some),
    }
}

/// Whole calendar years from `start` to `end` (0 when `end` precedes `start`).
pub fn whole_years(start: NaiveDate, end: NaiveDate) -> u32 {
    use chrono::Datelike;

    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
