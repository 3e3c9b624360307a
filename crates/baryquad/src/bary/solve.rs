//! Cartesian ↔ barycentric conversion and containment predicates.
//!
//! - `cartesian_to_barycentric`: LU solve of the 2×2 system anchored at `v3`.
//! - `barycentric_to_cartesian`: vertex matrix times the coefficient vector.
//! - `is_inside_triangle` and its strict / eps-aware variants.
//!
//! References
//! - Code cross-refs: `types::{Triangle, BaryCfg, BaryError}`
use nalgebra::{Vector2, Vector3};

use super::types::{BaryCfg, BaryError, Triangle};

/// Barycentric coordinates of `p` with respect to `tri`, using `BaryCfg::default()`.
pub fn cartesian_to_barycentric(
    tri: &Triangle,
    p: Vector2<f64>,
) -> Result<Vector3<f64>, BaryError> {
    cartesian_to_barycentric_cfg(tri, p, BaryCfg::default())
}

/// Barycentric coordinates of `p` with respect to `tri`.
///
/// Solves `[v1-v3  v2-v3] (λ1, λ2)ᵀ = p - v3` by LU with partial pivoting and
/// sets `λ3 = 1 - (λ1 + λ2)`, so the coordinates sum to 1 by construction.
/// Coordinates may be negative (point outside).
///
/// Errors with `DegenerateTriangle` if the frame fails the normalized determinant
/// test or the LU factor turns out singular.
pub fn cartesian_to_barycentric_cfg(
    tri: &Triangle,
    p: Vector2<f64>,
    cfg: BaryCfg,
) -> Result<Vector3<f64>, BaryError> {
    let det = tri.check_nondegenerate(cfg)?;
    let rhs = p - tri.v[2];
    let l = tri.affine_frame().lu().solve(&rhs).ok_or_else(|| {
        tracing::debug!(det, "singular LU factor");
        BaryError::DegenerateTriangle { det }
    })?;
    Ok(Vector3::new(l.x, l.y, 1.0 - (l.x + l.y)))
}

/// Cartesian point `[v1 v2 v3] · λ`.
///
/// Pre: `l` sums to 1 (not checked). Other weights give the corresponding
/// linear, not affine, combination of the vertices.
#[inline]
pub fn barycentric_to_cartesian(tri: &Triangle, l: Vector3<f64>) -> Vector2<f64> {
    tri.vertex_matrix() * l
}

/// Closed containment: all coordinates `>= 0`, so edges and vertices count as inside.
pub fn is_inside_triangle(tri: &Triangle, p: Vector2<f64>) -> Result<bool, BaryError> {
    is_inside_triangle_eps(tri, p, 0.0)
}

/// Open containment: all coordinates `> 0`; boundary points are outside.
pub fn is_strictly_inside_triangle(tri: &Triangle, p: Vector2<f64>) -> Result<bool, BaryError> {
    let l = cartesian_to_barycentric(tri, p)?;
    Ok(l.iter().all(|&c| c > 0.0))
}

/// Containment with slack: all coordinates `>= -eps`.
/// Positive `eps` enlarges the triangle, negative shrinks it.
pub fn is_inside_triangle_eps(
    tri: &Triangle,
    p: Vector2<f64>,
    eps: f64,
) -> Result<bool, BaryError> {
    let l = cartesian_to_barycentric(tri, p)?;
    Ok(l.iter().all(|&c| c >= -eps))
}
