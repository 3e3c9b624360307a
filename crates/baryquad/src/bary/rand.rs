//! Uniform sampling inside a triangle.
//!
//! Model
//! - Draw `r1, r2 ~ U[0,1)` and map to `(1 - √r1, √r1 (1 - r2), √r1 r2)`; the
//!   square root makes the density uniform in area.
//! - `sample_points` seeds a `StdRng` so draws are reproducible.

use nalgebra::{Vector2, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::solve::barycentric_to_cartesian;
use super::types::Triangle;

/// Barycentric coordinates of a uniform point in the standard simplex.
/// All entries are non-negative and sum to 1 up to rounding.
pub fn sample_uniform_bary<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f64> {
    let s = rng.gen::<f64>().sqrt();
    let r2 = rng.gen::<f64>();
    Vector3::new(1.0 - s, s * (1.0 - r2), s * r2)
}

/// Uniform point inside `tri`.
pub fn sample_uniform<R: Rng + ?Sized>(tri: &Triangle, rng: &mut R) -> Vector2<f64> {
    barycentric_to_cartesian(tri, sample_uniform_bary(rng))
}

/// `n` uniform points inside `tri`, reproducible from `seed`.
pub fn sample_points(tri: &Triangle, n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| sample_uniform(tri, &mut rng)).collect()
}
