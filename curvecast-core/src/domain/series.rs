//! TimeSeries — the parsed quote history as parallel columns.

use serde::{Deserialize, Serialize};

/// Parsed daily quote history: six parallel columns of equal length.
///
/// Dates are day ordinals (see `domain::date`); the other columns are raw
/// floats from the source. Record order is exactly the source's line order;
/// the parser never sorts, so dates are non-decreasing only because the
/// source emits them that way.
///
/// Immutable once built; a new retrieval replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub dates: Vec<f64>,
    pub close: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub open: Vec<f64>,
    pub volume: Vec<f64>,
}

impl TimeSeries {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            dates: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            open: Vec::with_capacity(n),
            volume: Vec::with_capacity(n),
        }
    }

    /// Number of records. All six columns share this length.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First and last date ordinals of the window, if any records exist.
    pub fn date_span(&self) -> Option<(f64, f64)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> TimeSeries {
        TimeSeries {
            dates: vec![1.0, 2.0, 3.0],
            close: vec![10.0, 11.0, 12.0],
            high: vec![10.5, 11.5, 12.5],
            low: vec![9.5, 10.5, 11.5],
            open: vec![10.0, 10.8, 11.9],
            volume: vec![1000.0, 1100.0, 900.0],
        }
    }

    #[test]
    fn len_counts_records() {
        let series = sample_series();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
    }

    #[test]
    fn date_span_covers_first_and_last() {
        assert_eq!(sample_series().date_span(), Some((1.0, 3.0)));
        assert_eq!(TimeSeries::with_capacity(0).date_span(), None);
    }

    #[test]
    fn series_serialization_roundtrip() {
        let series = sample_series();
        let json = serde_json::to_string(&series).unwrap();
        let deser: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, deser);
    }
}
