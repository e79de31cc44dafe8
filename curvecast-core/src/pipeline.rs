//! The orchestrator — fetch, parse, fit, predict, in that order.
//!
//! One `Pipeline` owns the series and fits for exactly one symbol/range
//! load; loading again discards and rebuilds both. Build one instance per
//! logical request: `load_series` mutates state in place, so a shared
//! instance races under concurrent callers.

use crate::data::parse::parse_series;
use crate::data::source::{DataError, QuoteSource};
use crate::domain::date::{day_ordinal, parse_compact_date, DateError};
use crate::domain::series::TimeSeries;
use crate::fit::{fit_series, FitError, LinearFit, PolynomialFit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// Predict was called before a successful fit: an ordering bug in the
    /// front end, not a data condition.
    #[error("no fit available: load a series and fit it before predicting")]
    FitNotReady,
}

/// A single on-demand price estimate.
///
/// Recomputed on every call, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Day ordinal the polynomial was evaluated at.
    pub date_ordinal: f64,
    /// Estimated close price. May be negative or absurd far outside the
    /// fitted window; extrapolation is unguarded by design.
    pub price: f64,
}

/// Read-only view of a fitted pipeline, for front ends and renderers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitView<'a> {
    pub series: &'a TimeSeries,
    pub polynomial: &'a PolynomialFit,
    pub linear: &'a LinearFit,
}

enum State {
    Empty,
    Loaded {
        series: TimeSeries,
    },
    Fitted {
        series: TimeSeries,
        polynomial: PolynomialFit,
        linear: LinearFit,
    },
}

pub struct Pipeline<S: QuoteSource> {
    source: S,
    state: State,
}

impl<S: QuoteSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: State::Empty,
        }
    }

    /// Fetch and parse a fresh series, discarding any prior series and fit.
    ///
    /// On retrieval or parse failure the pipeline is left Empty and the
    /// error surfaces; stale data is never kept behind a failed load.
    pub fn load_series(&mut self, symbol: &str, range: &str) -> Result<(), PipelineError> {
        self.state = State::Empty;
        let raw = self.source.fetch(symbol, range)?;
        let series = parse_series(&raw)?;
        self.state = State::Loaded { series };
        Ok(())
    }

    /// Fit the loaded series if not already fitted.
    ///
    /// The fit is memoized per load: a second call on a fitted pipeline is
    /// a no-op, and `load_series` is the only way to invalidate it. A fit
    /// failure keeps the loaded series (the load itself succeeded).
    pub fn ensure_fit(&mut self) -> Result<(), PipelineError> {
        match std::mem::replace(&mut self.state, State::Empty) {
            State::Empty => Err(PipelineError::FitNotReady),
            State::Loaded { series } => match fit_series(&series) {
                Ok((polynomial, linear)) => {
                    self.state = State::Fitted {
                        series,
                        polynomial,
                        linear,
                    };
                    Ok(())
                }
                Err(e) => {
                    self.state = State::Loaded { series };
                    Err(e.into())
                }
            },
            fitted @ State::Fitted { .. } => {
                self.state = fitted;
                Ok(())
            }
        }
    }

    /// Evaluate the fitted polynomial at a calendar date.
    pub fn predict_at(&self, date: NaiveDate) -> Result<Prediction, PipelineError> {
        let State::Fitted { polynomial, .. } = &self.state else {
            return Err(PipelineError::FitNotReady);
        };
        let date_ordinal = day_ordinal(date);
        Ok(Prediction {
            date_ordinal,
            price: polynomial.value_at(date_ordinal),
        })
    }

    /// Front-end entry point: load, fit, and expose the fitted values.
    pub fn produce_fit(
        &mut self,
        symbol: &str,
        range: &str,
    ) -> Result<FitView<'_>, PipelineError> {
        self.load_series(symbol, range)?;
        self.ensure_fit()?;
        self.fit_view().ok_or(PipelineError::FitNotReady)
    }

    /// Front-end entry point: price estimate for a compact `YYYYMMDD` date.
    ///
    /// Requires a prior successful `produce_fit` (or `load_series` +
    /// `ensure_fit`) in the same session.
    pub fn produce_prediction(&self, date_str: &str) -> Result<Prediction, PipelineError> {
        let date = parse_compact_date(date_str)?;
        self.predict_at(date)
    }

    /// Read-only view of the fitted values, if any.
    pub fn fit_view(&self) -> Option<FitView<'_>> {
        match &self.state {
            State::Fitted {
                series,
                polynomial,
                linear,
            } => Some(FitView {
                series,
                polynomial,
                linear,
            }),
            _ => None,
        }
    }

    /// The loaded series, if any.
    pub fn series(&self) -> Option<&TimeSeries> {
        match &self.state {
            State::Loaded { series } | State::Fitted { series, .. } => Some(series),
            State::Empty => None,
        }
    }

    pub fn polynomial(&self) -> Option<&PolynomialFit> {
        match &self.state {
            State::Fitted { polynomial, .. } => Some(polynomial),
            _ => None,
        }
    }

    pub fn linear(&self) -> Option<&LinearFit> {
        match &self.state {
            State::Fitted { linear, .. } => Some(linear),
            _ => None,
        }
    }

    /// True once a fit exists for the current load.
    pub fn is_fitted(&self) -> bool {
        matches!(self.state, State::Fitted { .. })
    }
}
