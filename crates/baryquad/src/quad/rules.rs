//! Composite Newton–Cotes rules on an ordered grid.
//!
//! - `left_endpoint_rule`: rectangle at the left end of each interval (exact for constants).
//! - `trapezoid_rule`: mean of both ends (exact for lines).
//! - `simpson_rule`: ends plus midpoint, weights 1-4-1 (exact for cubics).
//!
//! The integrand is a scalar `Fn(f64) -> f64`; the rules map it over the grid
//! themselves. Every rule validates the grid before the first evaluation.
//!
//! References
//! - Code cross-refs: `grid::validate_grid`, `Rule`
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::grid::{validate_grid, GridError};

/// Σ (x_{i+1} - x_i) · f(x_i). Evaluates `f` once per interval; the last grid point is unused.
pub fn left_endpoint_rule<F>(grid: &[f64], f: F) -> Result<f64, GridError>
where
    F: Fn(f64) -> f64,
{
    validate_grid(grid)?;
    tracing::trace!(rule = %Rule::LeftEndpoint, intervals = grid.len() - 1, "integrate");
    Ok(grid.windows(2).map(|w| (w[1] - w[0]) * f(w[0])).sum())
}

/// Σ (x_{i+1} - x_i) · (f(x_i) + f(x_{i+1})) / 2. Evaluates `f` once per grid point.
pub fn trapezoid_rule<F>(grid: &[f64], f: F) -> Result<f64, GridError>
where
    F: Fn(f64) -> f64,
{
    validate_grid(grid)?;
    tracing::trace!(rule = %Rule::Trapezoid, intervals = grid.len() - 1, "integrate");
    let mut fa = f(grid[0]);
    let mut total = 0.0;
    for w in grid.windows(2) {
        let fb = f(w[1]);
        total += (w[1] - w[0]) * (fa + fb) / 2.0;
        fa = fb;
    }
    Ok(total)
}

/// Σ (x_{i+1} - x_i) · (f(x_i) + 4 f(m_i) + f(x_{i+1})) / 6 with `m_i` the interval midpoint.
///
/// Evaluates `f` once per grid point and once per midpoint (`2n + 1` calls for `n` intervals).
pub fn simpson_rule<F>(grid: &[f64], f: F) -> Result<f64, GridError>
where
    F: Fn(f64) -> f64,
{
    validate_grid(grid)?;
    tracing::trace!(rule = %Rule::Simpson, intervals = grid.len() - 1, "integrate");
    let mut fa = f(grid[0]);
    let mut total = 0.0;
    for w in grid.windows(2) {
        let (a, b) = (w[0], w[1]);
        let fm = f(0.5 * (a + b));
        let fb = f(b);
        total += (b - a) * (fa + 4.0 * fm + fb) / 6.0;
        fa = fb;
    }
    Ok(total)
}

/// Quadrature rule selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    LeftEndpoint,
    Trapezoid,
    Simpson,
}

impl Rule {
    /// All rules, in increasing order of accuracy.
    pub const ALL: [Rule; 3] = [Rule::LeftEndpoint, Rule::Trapezoid, Rule::Simpson];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Rule::LeftEndpoint => "left",
            Rule::Trapezoid => "trapezoid",
            Rule::Simpson => "simpson",
        }
    }

    /// Highest polynomial degree integrated exactly on any grid.
    #[inline]
    pub fn order(self) -> u32 {
        match self {
            Rule::LeftEndpoint => 0,
            Rule::Trapezoid => 1,
            Rule::Simpson => 3,
        }
    }

    pub fn integrate<F>(self, grid: &[f64], f: F) -> Result<f64, GridError>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Rule::LeftEndpoint => left_endpoint_rule(grid, f),
            Rule::Trapezoid => trapezoid_rule(grid, f),
            Rule::Simpson => simpson_rule(grid, f),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Unknown rule name passed to `Rule::from_str`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown quadrature rule '{0}' (expected left, trapezoid, or simpson)")]
pub struct ParseRuleError(pub String);

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ParseRuleError(s.to_owned()))
    }
}
