//! Calendar-date ↔ day-ordinal conversion.
//!
//! The regression x-axis is a day ordinal: whole days since 1970-01-01
//! (negative before it), no timezone handling. The parser and the predictor
//! must share this conversion; fitting on one axis and evaluating on
//! another shifts every estimate silently, so both call into this module
//! and nothing else converts dates.

use chrono::NaiveDate;
use thiserror::Error;

/// Fixed input format for calendar dates at the API boundary.
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Error)]
pub enum DateError {
    #[error("invalid date '{0}': expected YYYYMMDD (8 digits, no separators)")]
    InvalidDate(String),
}

/// Parse a compact `YYYYMMDD` date string.
///
/// Strict: exactly 8 ASCII digits forming a valid calendar date.
/// `"2024-01-01"` and `"2024011"` both fail.
pub fn parse_compact_date(s: &str) -> Result<NaiveDate, DateError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, COMPACT_DATE_FORMAT)
        .map_err(|_| DateError::InvalidDate(s.to_string()))
}

/// Ordinal zero point.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

/// Day ordinal for a calendar date.
pub fn day_ordinal(date: NaiveDate) -> f64 {
    (date - epoch()).num_days() as f64
}

/// Inverse of `day_ordinal`, for display. Fractional parts are dropped;
/// ordinals outside the calendar (a divergent extrapolation, say) are None.
pub fn ordinal_to_date(ordinal: f64) -> Option<NaiveDate> {
    let days = chrono::Duration::try_days(ordinal as i64)?;
    epoch().checked_add_signed(days)
}
