//! Sample grids: validation and uniform construction.

use thiserror::Error;

/// Errors for malformed sample grids.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least 2 points (got {len})")]
    TooFewPoints { len: usize },
    #[error("grid point at index {index} is not finite")]
    NonFinite { index: usize },
    /// First index `i` with `grid[i] <= grid[i - 1]`.
    #[error("grid must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },
}

/// Check that `grid` has at least two finite, strictly increasing points.
pub fn validate_grid(grid: &[f64]) -> Result<(), GridError> {
    if grid.len() < 2 {
        tracing::debug!(len = grid.len(), "grid too short");
        return Err(GridError::TooFewPoints { len: grid.len() });
    }
    if let Some(index) = grid.iter().position(|x| !x.is_finite()) {
        tracing::debug!(index, "non-finite grid point");
        return Err(GridError::NonFinite { index });
    }
    if let Some(i) = grid.windows(2).position(|w| w[1] <= w[0]) {
        tracing::debug!(index = i + 1, "grid not strictly increasing");
        return Err(GridError::NotStrictlyIncreasing { index: i + 1 });
    }
    Ok(())
}

/// `n` equally spaced points from `a` to `b` inclusive; the last point is exactly `b`.
///
/// Errors
/// - `TooFewPoints` if `n < 2`.
/// - `NonFinite` if an endpoint is not finite.
/// - `NotStrictlyIncreasing` if `b <= a`, or if the span is too small to
///   separate `n` points in `f64`.
pub fn linspace(a: f64, b: f64, n: usize) -> Result<Vec<f64>, GridError> {
    if n < 2 {
        return Err(GridError::TooFewPoints { len: n });
    }
    if !a.is_finite() {
        return Err(GridError::NonFinite { index: 0 });
    }
    if !b.is_finite() {
        return Err(GridError::NonFinite { index: n - 1 });
    }
    if b <= a {
        return Err(GridError::NotStrictlyIncreasing { index: 1 });
    }
    let h = (b - a) / (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n).map(|i| a + h * i as f64).collect();
    if let Some(last) = xs.last_mut() {
        *last = b;
    }
    validate_grid(&xs)?;
    Ok(xs)
}
