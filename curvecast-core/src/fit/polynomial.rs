//! Degree-5 polynomial least-squares fit and Horner evaluation.

use super::lstsq;
use super::FitError;
use serde::{Deserialize, Serialize};

/// Fixed polynomial degree.
pub const DEGREE: usize = 5;

/// Coefficients of the fitted polynomial, highest degree first:
/// `price ≈ c[0]·x⁵ + c[1]·x⁴ + … + c[5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialFit {
    coefficients: [f64; DEGREE + 1],
}

impl PolynomialFit {
    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64; DEGREE + 1] {
        &self.coefficients
    }

    /// Evaluate the polynomial at a day ordinal (Horner form).
    ///
    /// No bounds check against the fitted window: ordinals outside it
    /// extrapolate, and far outside they diverge to absurd or negative
    /// prices. That is the contract, surfaced to the caller as-is.
    pub fn value_at(&self, ordinal: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, &c| acc * ordinal + c)
    }
}

/// Least-squares degree-5 fit to (x, y) pairs over the raw x values.
///
/// The Vandermonde basis is handed to the solver lowest power first, so its
/// trailing-rank truncation drops the highest powers when the window is too
/// narrow to determine them at the ordinal magnitude, degrading to a
/// lower-degree fit rather than failing or returning noise.
///
/// Callers guarantee `x.len() >= DEGREE + 1`.
pub(crate) fn fit(x: &[f64], y: &[f64]) -> Result<PolynomialFit, FitError> {
    let columns: Vec<Vec<f64>> = (0..=DEGREE)
        .map(|power| x.iter().map(|&v| v.powi(power as i32)).collect())
        .collect();

    let mut solved = lstsq::solve(columns, y.to_vec())?;
    solved.reverse();

    let mut coefficients = [0.0; DEGREE + 1];
    coefficients.copy_from_slice(&solved);
    Ok(PolynomialFit { coefficients })
}
