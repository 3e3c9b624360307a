//! Definite integrals of scalar functions on ordered sample grids.
//!
//! Purpose
//! - Approximate ∫ f over `[x_0, x_n]` piecewise on the intervals of a strictly
//!   increasing grid with the left-endpoint, trapezoid, or Simpson rule.
//! - Reject malformed grids with `GridError` before `f` is ever called.
//!
//! Conventions
//! - Integrands are scalar closures `Fn(f64) -> f64`; no vectorized form.
//! - Grids are borrowed slices; `linspace` builds uniform ones.

mod grid;
mod rules;

pub use grid::{linspace, validate_grid, GridError};
pub use rules::{left_endpoint_rule, simpson_rule, trapezoid_rule, ParseRuleError, Rule};
