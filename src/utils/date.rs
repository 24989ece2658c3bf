//! Date/timestamp utilities for the `Próximo` column and the CLI date filters.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

pub const NEXT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const LOG_STAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Strict parse of a stored `Próximo` timestamp. `None` on anything that does
/// not match `DD/MM/YYYY HH:MM:SS` exactly.
pub fn parse_next(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), NEXT_FORMAT).ok()
}

/// Serialize a `Próximo` timestamp back to its stored form.
pub fn serialize_next(dt: Option<NaiveDateTime>) -> String {
    match dt {
        None => String::new(),
        Some(dt) => dt.format(NEXT_FORMAT).to_string(),
    }
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a user-supplied filter date (`DD/MM/YYYY`).
pub fn parse_filter_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Resolve an optional `--from`/`--to` pair against the dates actually present
/// in the table: absent bounds default to the min/max `Próximo` date, or today
/// when the table holds no parseable timestamp at all.
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    dates: &[NaiveDate],
) -> AppResult<(NaiveDate, NaiveDate)> {
    let min = dates.iter().min().copied().unwrap_or_else(today);
    let max = dates.iter().max().copied().unwrap_or_else(today);

    let from = match from {
        Some(s) => parse_filter_date(s)?,
        None => min,
    };
    let to = match to {
        Some(s) => parse_filter_date(s)?,
        None => max,
    };

    Ok((from, to))
}
