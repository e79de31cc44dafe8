//! Householder-QR least squares with trailing-rank truncation.
//!
//! Solves min ‖Ax − b‖₂ for a tall dense system, column-major. Columns are
//! equilibrated to unit norm before factoring and the solution is unscaled
//! afterwards: with raw day ordinals in the tens of thousands the
//! Vandermonde columns span ~25 orders of magnitude, and an unscaled
//! factorization (or normal equations, which square the conditioning) loses
//! every significant digit.
//!
//! Callers order columns from most- to least-fundamental (for a polynomial
//! basis: constant first, highest power last). When a trailing direction is
//! indistinguishable from the span of the earlier columns at working
//! precision, its coefficient is pinned to zero and the leading block is
//! solved alone, the same cutoff an SVD-based solver applies to negligible
//! singular values, restricted to trailing columns so a nested basis
//! degrades to a lower-degree fit instead of an arbitrary one.

use super::FitError;

/// Solve the least-squares system given by `columns` (each of length
/// `rhs.len()`). Returns one coefficient per column; coefficients of
/// truncated trailing columns are zero.
///
/// Fails `Degenerate` only when not even the first column carries signal.
/// Requires at least as many rows as columns; `fit_series` guards that.
pub(crate) fn solve(
    mut columns: Vec<Vec<f64>>,
    mut rhs: Vec<f64>,
) -> Result<Vec<f64>, FitError> {
    let ncols = columns.len();
    let nrows = rhs.len();
    debug_assert!(nrows >= ncols);
    debug_assert!(columns.iter().all(|col| col.len() == nrows));

    // Equilibrate: scale every column to unit norm, remember the scales.
    let scales: Vec<f64> = columns
        .iter()
        .map(|col| {
            let norm = col.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                norm
            } else {
                1.0
            }
        })
        .collect();
    for (col, &scale) in columns.iter_mut().zip(&scales) {
        for v in col.iter_mut() {
            *v /= scale;
        }
    }

    // Rank cutoff on the R diagonal, relative to the unit-normed columns.
    // Same shape as numpy's lstsq default rcond.
    let tol = nrows as f64 * f64::EPSILON;

    // Householder triangularization, reflecting the rhs along the way.
    // Stops at the first column with no independent component left.
    let mut rank = ncols;
    for k in 0..ncols {
        let head = columns[k][k];
        let norm = columns[k][k..]
            .iter()
            .map(|v| v * v)
            .sum::<f64>()
            .sqrt();
        if norm <= tol {
            rank = k;
            break;
        }

        let alpha = if head >= 0.0 { -norm } else { norm };
        let mut v = columns[k][k..].to_vec();
        v[0] -= alpha;
        let vtv: f64 = v.iter().map(|e| e * e).sum();

        for col in columns.iter_mut().skip(k) {
            reflect(&v, vtv, &mut col[k..]);
        }
        reflect(&v, vtv, &mut rhs[k..]);
    }

    if rank == 0 {
        return Err(FitError::Degenerate);
    }

    // Back-substitute through the leading rank × rank block of R.
    let mut coefficients = vec![0.0; ncols];
    for i in (0..rank).rev() {
        let mut sum = rhs[i];
        for j in i + 1..rank {
            sum -= columns[j][i] * coefficients[j];
        }
        coefficients[i] = sum / columns[i][i];
    }

    // Undo the equilibration.
    for (c, &scale) in coefficients.iter_mut().zip(&scales) {
        *c /= scale;
    }

    Ok(coefficients)
}

/// Apply the Householder reflection I − 2vvᵀ/vᵀv to `target` in place.
fn reflect(v: &[f64], vtv: f64, target: &mut [f64]) {
    let dot: f64 = v.iter().zip(target.iter()).map(|(a, b)| a * b).sum();
    let tau = 2.0 * dot / vtv;
    for (t, &e) in target.iter_mut().zip(v) {
        *t -= tau * e;
    }
}
