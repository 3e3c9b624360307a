//! Triangle type, tolerances, and errors for barycentric conversion.
//!
//! - `BaryCfg`: centralizes the determinant epsilon used to reject singular systems.
//! - `Triangle`: three ordered vertices; the order fixes the order of (λ1, λ2, λ3).
//! - `BaryError`: degenerate triangles and malformed dynamically sized input.
//!
//! References
//! - Code cross-refs: `solve::{cartesian_to_barycentric, barycentric_to_cartesian}`

use nalgebra::{DMatrix, Matrix2, Matrix2x3, Vector2};
use thiserror::Error;

/// Barycentric configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct BaryCfg {
    /// Shape threshold: the affine frame `[e1 e2]` is treated as singular when
    /// `|det(e1/|e1|, e2/|e2|)| <= eps_det`, independent of the triangle's size.
    pub eps_det: f64,
}

impl Default for BaryCfg {
    fn default() -> Self {
        Self { eps_det: 1e-12 }
    }
}

/// Errors surfaced by barycentric conversion and shape validation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BaryError {
    /// Vertices are collinear or coincident; the 2×2 system has no unique solution.
    /// `det` is the determinant of the unit-column frame (0 for coincident vertices).
    #[error("triangle is degenerate (collinear or coincident vertices, det = {det:e})")]
    DegenerateTriangle { det: f64 },
    /// Dynamically sized input does not have the fixed arity of a triangle or point.
    #[error("{what} has invalid shape: expected {expected}, got {got}")]
    InvalidShape {
        what: &'static str,
        expected: &'static str,
        got: String,
    },
}

/// Triangle in R² given by three ordered vertices.
///
/// Invariants:
/// - `v[0]`, `v[1]`, `v[2]` are vertices 1, 2, 3; `v[2]` is the affine reference.
/// - No degeneracy check at construction; see `is_degenerate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v: [Vector2<f64>; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { v: [a, b, c] }
    }

    /// Build from a slice of vertices; exactly three are required.
    pub fn from_slice(vertices: &[Vector2<f64>]) -> Result<Self, BaryError> {
        let v: [Vector2<f64>; 3] = vertices.try_into().map_err(|_| BaryError::InvalidShape {
            what: "triangle",
            expected: "3 vertices",
            got: format!("{} vertices", vertices.len()),
        })?;
        Ok(Self { v })
    }

    /// Build from a 2×3 matrix with one vertex per column (`[x1 x2 x3; y1 y2 y3]`).
    pub fn from_matrix(m: &DMatrix<f64>) -> Result<Self, BaryError> {
        if m.shape() != (2, 3) {
            let (r, c) = m.shape();
            return Err(BaryError::InvalidShape {
                what: "triangle matrix",
                expected: "2x3",
                got: format!("{r}x{c}"),
            });
        }
        let col = |j: usize| Vector2::new(m[(0, j)], m[(1, j)]);
        Ok(Self::new(col(0), col(1), col(2)))
    }

    /// Vertex matrix `[v1 v2 v3]` (2×3, one column per vertex).
    #[inline]
    pub fn vertex_matrix(&self) -> Matrix2x3<f64> {
        Matrix2x3::from_columns(&self.v)
    }

    /// System matrix `[v1 - v3, v2 - v3]` relative to the third vertex.
    #[inline]
    pub fn affine_frame(&self) -> Matrix2<f64> {
        Matrix2::from_columns(&[self.v[0] - self.v[2], self.v[1] - self.v[2]])
    }

    #[inline]
    pub fn centroid(&self) -> Vector2<f64> {
        (self.v[0] + self.v[1] + self.v[2]) / 3.0
    }

    /// Signed area; positive when the vertices run counterclockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * self.affine_frame().determinant()
    }

    #[inline]
    pub fn is_degenerate(&self, cfg: BaryCfg) -> bool {
        self.check_nondegenerate(cfg).is_err()
    }

    /// Shape-only degeneracy test: determinant of the frame with unit columns,
    /// i.e. the sine of the angle at `v3`. Coincident vertices (zero-length
    /// edge) are rejected before normalizing.
    ///
    /// Edge lengths use `hypot` so the test holds for coordinates near the
    /// limits of `f64` (e.g. 1e160 or 1e-300), where squared norms over/underflow.
    pub(crate) fn check_nondegenerate(&self, cfg: BaryCfg) -> Result<f64, BaryError> {
        let e1 = self.v[0] - self.v[2];
        let e2 = self.v[1] - self.v[2];
        let n1 = e1.x.hypot(e1.y);
        let n2 = e2.x.hypot(e2.y);
        if !(n1.is_finite() && n2.is_finite()) || n1 == 0.0 || n2 == 0.0 {
            tracing::debug!(n1, n2, "degenerate triangle (zero-length or non-finite edge)");
            return Err(BaryError::DegenerateTriangle { det: 0.0 });
        }
        let det = Matrix2::from_columns(&[e1 / n1, e2 / n2]).determinant();
        if !det.is_finite() || det.abs() <= cfg.eps_det {
            tracing::debug!(det, eps_det = cfg.eps_det, "degenerate triangle");
            return Err(BaryError::DegenerateTriangle { det });
        }
        Ok(det)
    }
}

/// Point from a dynamically sized coordinate slice; exactly two entries are required.
pub fn point_from_slice(coords: &[f64]) -> Result<Vector2<f64>, BaryError> {
    match coords {
        [x, y] => Ok(Vector2::new(*x, *y)),
        _ => Err(BaryError::InvalidShape {
            what: "point",
            expected: "2 coordinates",
            got: format!("{} coordinates", coords.len()),
        }),
    }
}
