//! Curve fitting over (date ordinal, close) pairs.

pub mod linear;
mod lstsq;
pub mod polynomial;

pub use linear::LinearFit;
pub use polynomial::PolynomialFit;

use crate::domain::series::TimeSeries;
use thiserror::Error;

/// Points required to determine the polynomial: degree + 1.
pub const MIN_POINTS: usize = polynomial::DEGREE + 1;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("insufficient data: need {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// The least-squares system lost rank, e.g. every point on one date.
    #[error("degenerate series: least-squares system is rank-deficient")]
    Degenerate,
}

/// Fit both curves to a series.
///
/// The polynomial drives prediction; the line exists for side-by-side
/// comparison on a chart and is never evaluated by the predictor. Both fits
/// share the same x domain: the raw date ordinals, not a normalized copy.
pub fn fit_series(series: &TimeSeries) -> Result<(PolynomialFit, LinearFit), FitError> {
    if series.len() < MIN_POINTS {
        return Err(FitError::InsufficientData {
            required: MIN_POINTS,
            actual: series.len(),
        });
    }

    let polynomial = polynomial::fit(&series.dates, &series.close)?;
    let linear = linear::fit(&series.dates, &series.close)?;
    Ok((polynomial, linear))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(points: &[(f64, f64)]) -> TimeSeries {
        let mut series = TimeSeries::with_capacity(points.len());
        for &(date, close) in points {
            series.dates.push(date);
            series.close.push(close);
            series.high.push(close + 1.0);
            series.low.push(close - 1.0);
            series.open.push(close);
            series.volume.push(1000.0);
        }
        series
    }

    #[test]
    fn five_points_is_insufficient() {
        let series = series_of(&[(1.0, 10.0), (2.0, 12.0), (3.0, 9.0), (4.0, 15.0), (5.0, 11.0)]);
        match fit_series(&series) {
            Err(FitError::InsufficientData { required, actual }) => {
                assert_eq!(required, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("expected InsufficientData, got: {other:?}"),
        }
    }

    #[test]
    fn six_points_fit_with_six_coefficients() {
        let series = series_of(&[
            (1.0, 10.0),
            (2.0, 12.0),
            (3.0, 9.0),
            (4.0, 15.0),
            (5.0, 11.0),
            (6.0, 14.0),
        ]);
        let (polynomial, linear) = fit_series(&series).unwrap();
        assert_eq!(polynomial.coefficients().len(), 6);
        assert!(linear.slope.is_finite());
        assert!(linear.intercept.is_finite());
    }

    #[test]
    fn all_points_on_one_date_is_degenerate() {
        let series = series_of(&[
            (5.0, 10.0),
            (5.0, 12.0),
            (5.0, 9.0),
            (5.0, 15.0),
            (5.0, 11.0),
            (5.0, 14.0),
        ]);
        assert!(matches!(fit_series(&series), Err(FitError::Degenerate)));
    }
}
