//! Small numerical kernels: triangle barycentrics and grid quadrature.
//!
//! - `bary`: Cartesian ↔ barycentric conversion on a triangle and containment tests.
//! - `quad`: left-endpoint, trapezoid, and Simpson rules on an ordered grid.
//!
//! The two modules are independent. Every function is pure and synchronous;
//! malformed input surfaces as a typed error, never as a sentinel value.
//! Events are emitted through `tracing`; installing a subscriber is up to the caller.

pub mod bary;
pub mod quad;

use thiserror::Error;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bary::{BaryCfg, BaryError, Triangle};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
pub use quad::{GridError, Rule};

/// Any error from this crate, for callers mixing both modules behind one `?`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Bary(#[from] BaryError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bary::{
        barycentric_to_cartesian, cartesian_to_barycentric, cartesian_to_barycentric_cfg,
        is_inside_triangle, is_inside_triangle_eps, is_strictly_inside_triangle, BaryCfg,
        BaryError, Triangle,
    };
    pub use crate::quad::{
        left_endpoint_rule, linspace, simpson_rule, trapezoid_rule, GridError, Rule,
    };
    pub use crate::Error;
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::vector;

    /// Integrate the first barycentric coordinate along the bottom edge of a triangle.
    fn edge_weight_integral(tri: &Triangle, n: usize) -> Result<f64, Error> {
        let grid = linspace(0.0, 1.0, n)?;
        let mut weights = Vec::with_capacity(n);
        for &t in &grid {
            let p = tri.v[0] + (tri.v[1] - tri.v[0]) * t;
            weights.push((t, cartesian_to_barycentric(tri, p)?[0]));
        }
        // The rule only evaluates grid points; anything else poisons the sum.
        let lookup = |x: f64| {
            weights
                .iter()
                .find(|(t, _)| *t == x)
                .map_or(f64::NAN, |(_, w)| *w)
        };
        Ok(trapezoid_rule(&grid, lookup)?)
    }

    #[test]
    fn errors_convert_into_crate_error() {
        let tri = Triangle::new(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
        // λ1 falls linearly from 1 to 0 along v1→v2, so the mean is 1/2.
        let got = edge_weight_integral(&tri, 9).unwrap();
        assert!((got - 0.5).abs() < 1e-12);

        assert!(matches!(
            edge_weight_integral(&tri, 1),
            Err(Error::Grid(GridError::TooFewPoints { len: 1 }))
        ));
        let flat = Triangle::new(vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]);
        assert!(matches!(
            edge_weight_integral(&flat, 5),
            Err(Error::Bary(BaryError::DegenerateTriangle { .. }))
        ));
    }

    #[test]
    fn crate_error_is_transparent() {
        let err: Error = GridError::TooFewPoints { len: 0 }.into();
        assert_eq!(err.to_string(), "grid must have at least 2 points (got 0)");
    }
}
