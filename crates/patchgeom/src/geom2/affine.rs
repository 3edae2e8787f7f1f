//! 2D affine transform `x ↦ M x + t` stored as six coefficients.
//!
//! `[x'; y'] = [[xx, xy], [yx, yy]] · [x; y] + [x0; y0]`
//!
//! Composition goes through the homogeneous 3×3 form (`nalgebra::Matrix3`).
//! `is_identity` is an exact comparison: it gates the skip of the matrix
//! product in `apply_to`.

use nalgebra::{Matrix2, Matrix3};
use std::ops::Mul;

use super::point::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineMatrix {
    pub xx: f64,
    pub xy: f64,
    pub x0: f64,
    pub yx: f64,
    pub yy: f64,
    pub y0: f64,
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    #[inline]
    pub const fn new(xx: f64, xy: f64, x0: f64, yx: f64, yy: f64, y0: f64) -> Self {
        Self {
            xx,
            xy,
            x0,
            yx,
            yy,
            y0,
        }
    }
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }
    #[inline]
    pub fn translation(delta: Point) -> Self {
        Self::new(1.0, 0.0, delta.x, 0.0, 1.0, delta.y)
    }
    #[inline]
    pub fn scale(factor: Point) -> Self {
        Self::new(factor.x, 0.0, 0.0, 0.0, factor.y, 0.0)
    }
    /// Counter-clockwise rotation about the origin, in radians.
    #[inline]
    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, -s, 0.0, s, c, 0.0)
    }
    /// `x' = x + k.x * y`, `y' = k.y * x + y`.
    #[inline]
    pub fn shear(k: Point) -> Self {
        Self::new(1.0, k.x, 0.0, k.y, 1.0, 0.0)
    }
    /// Pixel space (origin top-left, y down) to cartesian space centred in a
    /// `width × height` area (y up).
    #[inline]
    pub fn pixel_to_cartesian(width: f64, height: f64) -> Self {
        Self::new(1.0, 0.0, -width * 0.5, 0.0, -1.0, height * 0.5)
    }
    /// Inverse of `pixel_to_cartesian` for the same area.
    #[inline]
    pub fn cartesian_to_pixel(width: f64, height: f64) -> Self {
        Self::new(1.0, 0.0, width * 0.5, 0.0, -1.0, height * 0.5)
    }

    /// Exact equality with the identity coefficients.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    #[inline]
    pub fn apply_to(&self, p: Point) -> Point {
        if self.is_identity() {
            return p;
        }
        Point::new(
            self.xx * p.x + self.xy * p.y + self.x0,
            self.yx * p.x + self.yy * p.y + self.y0,
        )
    }

    /// Linear part only (no translation); for direction vectors.
    #[inline]
    pub fn apply_to_vector(&self, v: Point) -> Point {
        Point::new(self.xx * v.x + self.xy * v.y, self.yx * v.x + self.yy * v.y)
    }

    /// `self ∘ other`: the result applies `other` first, then `self`.
    pub fn composed_with(&self, other: &AffineMatrix) -> AffineMatrix {
        if other.is_identity() {
            return *self;
        }
        if self.is_identity() {
            return *other;
        }
        Self::from_matrix3(&(self.to_matrix3() * other.to_matrix3()))
    }

    /// Inverse transform, `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<AffineMatrix> {
        match self.to_matrix3().try_inverse() {
            Some(inv) => Some(Self::from_matrix3(&inv)),
            None => {
                tracing::debug!(det = self.determinant(), "singular affine matrix");
                None
            }
        }
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.linear().determinant()
    }

    #[inline]
    pub fn linear(&self) -> Matrix2<f64> {
        Matrix2::new(self.xx, self.xy, self.yx, self.yy)
    }

    /// Homogeneous form with last row `[0, 0, 1]`.
    #[inline]
    pub fn to_matrix3(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.xx, self.xy, self.x0, //
            self.yx, self.yy, self.y0, //
            0.0, 0.0, 1.0,
        )
    }

    /// Reads the top two rows; the last row is ignored.
    #[inline]
    pub fn from_matrix3(m: &Matrix3<f64>) -> Self {
        Self::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
        )
    }
}

impl Mul for AffineMatrix {
    type Output = AffineMatrix;
    #[inline]
    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        self.composed_with(&rhs)
    }
}

impl Mul<Point> for AffineMatrix {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        self.apply_to(rhs)
    }
}
