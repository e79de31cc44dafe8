//! Ordinary least-squares line over the same (date ordinal, close) pairs.

use super::FitError;
use serde::{Deserialize, Serialize};

/// Slope and intercept of the comparison line.
///
/// Chart-only: the predictor never evaluates this fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Line value at a day ordinal.
    pub fn value_at(&self, ordinal: f64) -> f64 {
        self.intercept + self.slope * ordinal
    }
}

/// Closed-form OLS in centered form.
///
/// Raw ordinals sit in the tens of thousands, where the uncentered sums
/// `n·Σx² − (Σx)²` cancel catastrophically; centering keeps full precision.
pub(crate) fn fit(x: &[f64], y: &[f64]) -> Result<LinearFit, FitError> {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        sxx += dx * dx;
        sxy += dx * (yi - mean_y);
    }

    if sxx == 0.0 {
        return Err(FitError::Degenerate);
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Ok(LinearFit { slope, intercept })
}
