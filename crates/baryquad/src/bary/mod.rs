//! Barycentric coordinates on a single triangle.
//!
//! Purpose
//! - Convert points between Cartesian and barycentric coordinates relative to
//!   an ordered triangle, and test containment.
//! - Fail loudly on collinear vertices (`BaryError::DegenerateTriangle`) and on
//!   malformed dynamic input (`BaryError::InvalidShape`).
//!
//! Conventions
//! - Points are `Vector2<f64>`, coordinates are `Vector3<f64>` ordered like the
//!   triangle's vertices, and the third vertex is the affine reference.
//! - Boundary points are inside for `is_inside_triangle`; use
//!   `is_strictly_inside_triangle` for the open interior.
//!
//! References
//! - Code cross-refs: `Triangle`, `BaryCfg`, `cartesian_to_barycentric`

pub mod rand;
mod solve;
mod types;

pub use solve::{
    barycentric_to_cartesian, cartesian_to_barycentric, cartesian_to_barycentric_cfg,
    is_inside_triangle, is_inside_triangle_eps, is_strictly_inside_triangle,
};
pub use types::{point_from_slice, BaryCfg, BaryError, Triangle};
