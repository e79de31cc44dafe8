//! Series parser — raw chartdata text to a typed `TimeSeries`.
//!
//! The source text mixes a `key:value` preamble with data records. Record
//! detection is structural: exactly six comma-separated fields and no
//! header-marker token. Everything else is dropped silently. Conversion of
//! the kept records is all-or-nothing.

use super::source::DataError;
use crate::domain::date::{day_ordinal, parse_compact_date};
use crate::domain::series::TimeSeries;

/// Tokens marking the source's header rows (`values:...`, `labels:...`),
/// which can also split into exactly six fields. Case-sensitive, matching
/// the source's casing.
const HEADER_MARKERS: [&str; 2] = ["values", "labels"];

/// Fields in a data record: date, close, high, low, open, volume.
const RECORD_FIELDS: usize = 6;

/// Parse raw chartdata text into a `TimeSeries`.
///
/// Fails `EmptySeries` when no record lines survive filtering, and
/// `MalformedRecord` when any kept line fails conversion; a single bad
/// line means the whole fetch is untrustworthy, so there is no partial
/// result. Record order is preserved.
pub fn parse_series(raw: &str) -> Result<TimeSeries, DataError> {
    let records: Vec<&str> = raw.lines().filter(|line| is_record(line)).collect();

    if records.is_empty() {
        return Err(DataError::EmptySeries);
    }

    let mut series = TimeSeries::with_capacity(records.len());

    for line in records {
        let fields: Vec<&str> = line.split(',').collect();

        let date = parse_compact_date(fields[0].trim()).map_err(|e| {
            DataError::MalformedRecord {
                line: line.to_string(),
                reason: e.to_string(),
            }
        })?;

        series.dates.push(day_ordinal(date));
        series.close.push(parse_field(line, fields[1], "close")?);
        series.high.push(parse_field(line, fields[2], "high")?);
        series.low.push(parse_field(line, fields[3], "low")?);
        series.open.push(parse_field(line, fields[4], "open")?);
        series.volume.push(parse_field(line, fields[5], "volume")?);
    }

    Ok(series)
}

fn is_record(line: &str) -> bool {
    line.split(',').count() == RECORD_FIELDS
        && !HEADER_MARKERS.iter().any(|marker| line.contains(marker))
}

fn parse_field(line: &str, field: &str, name: &str) -> Result<f64, DataError> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| DataError::MalformedRecord {
            line: line.to_string(),
            reason: format!("{name} field '{}' is not numeric", field.trim()),
        })
}
