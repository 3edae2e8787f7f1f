//! 2D point/vector value with curve distance queries.
//!
//! - Vector algebra on `Point` (operators, `dot`, `cross`, `angle`, `rotate`).
//! - Distance and nearness to segments, quadratic curves (closed form through
//!   `solvers::solve`), and cubic curves (sampled search, see below).
//!
//! Cubic distance
//! - There is no closed form in use for the cubic case. The curve is sampled
//!   uniformly (`GeomCfg::nearest_samples`), then every bracket
//!   `[t_{i-1}, t_{i+1}]` around a sampled local minimum is refined by
//!   golden-section search on the squared distance. A basin narrower than one
//!   sampling step can still be missed.
//!
//! References
//! - Code cross-refs: `solvers::solve`, `segment::Segment`, `bezier::{BezierQuad, BezierCubic}`

use nalgebra::Vector2;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::solvers::solve;
use super::types::{GeomCfg, CURVE_STEPS};

/// 2D coordinate or vector. Any real pair is valid; NaN/Inf propagate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Linear interpolation `begin + (end - begin) * t`.
    #[inline]
    pub fn from_line(begin: Point, end: Point, t: f64) -> Point {
        begin + (end - begin) * t
    }

    /// Quadratic Bernstein evaluation.
    #[inline]
    pub fn from_line_quad(begin: Point, ctrl: Point, end: Point, t: f64) -> Point {
        let mt = 1.0 - t;
        begin * (mt * mt) + ctrl * (2.0 * mt * t) + end * (t * t)
    }

    /// Cubic Bernstein evaluation.
    #[inline]
    pub fn from_line_cubic(begin: Point, ctrl1: Point, ctrl2: Point, end: Point, t: f64) -> Point {
        let mt = 1.0 - t;
        begin * (mt * mt * mt)
            + ctrl1 * (3.0 * mt * mt * t)
            + ctrl2 * (3.0 * mt * t * t)
            + end * (t * t * t)
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product (signed parallelogram area).
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance from the origin.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    /// Polar angle in radians, `atan2(y, x)`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unit vector in the same direction; `None` for the zero vector.
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Counter-clockwise rotation about the origin.
    #[inline]
    pub fn rotate(self, angle: f64) -> Point {
        let (s, c) = angle.sin_cos();
        Point::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    pub fn rotate_around(self, center: Point, angle: f64) -> Point {
        (self - center).rotate(angle) + center
    }

    /// Distance to the segment `[begin, end]` (projection clamped to the segment).
    pub fn distance_to_segment(self, begin: Point, end: Point) -> f64 {
        let d = end - begin;
        let len2 = d.length_squared();
        if len2 == 0.0 {
            tracing::trace!(?begin, "zero-length segment, endpoint distance");
            return self.distance(begin).min(self.distance(end));
        }
        let t = ((self - begin).dot(d) / len2).clamp(0.0, 1.0);
        self.distance(Point::from_line(begin, end, t))
    }

    /// Distance to the quadratic curve `(begin, ctrl, end)`.
    pub fn distance_to_quad(self, begin: Point, ctrl: Point, end: Point) -> f64 {
        let t = quad_nearest_param(self, begin, ctrl, end);
        self.distance(Point::from_line_quad(begin, ctrl, end, t))
    }

    /// Distance to the cubic curve `(begin, ctrl1, ctrl2, end)` (sampled + refined).
    pub fn distance_to_cubic(self, begin: Point, ctrl1: Point, ctrl2: Point, end: Point) -> f64 {
        self.distance_to_cubic_with(begin, ctrl1, ctrl2, end, &GeomCfg::default())
    }

    pub fn distance_to_cubic_with(
        self,
        begin: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
        cfg: &GeomCfg,
    ) -> f64 {
        let t = cubic_nearest_param(self, [begin, ctrl1, ctrl2, end], cfg);
        self.distance(Point::from_line_cubic(begin, ctrl1, ctrl2, end, t))
    }

    #[inline]
    pub fn near(self, other: Point, threshold: f64) -> bool {
        self.distance(other) <= threshold
    }

    #[inline]
    pub fn near_segment(self, begin: Point, end: Point, threshold: f64) -> bool {
        self.distance_to_segment(begin, end) <= threshold
    }

    #[inline]
    pub fn near_quad(self, begin: Point, ctrl: Point, end: Point, threshold: f64) -> bool {
        self.distance_to_quad(begin, ctrl, end) <= threshold
    }

    /// One-sided test: true as soon as one of `CURVE_STEPS + 1` samples is close enough.
    pub fn near_cubic(
        self,
        begin: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
        threshold: f64,
    ) -> bool {
        (0..=CURVE_STEPS).any(|i| {
            let t = i as f64 / CURVE_STEPS as f64;
            self.near(Point::from_line_cubic(begin, ctrl1, ctrl2, end, t), threshold)
        })
    }
}

/// Parameter in [0,1] of the point on the quadratic curve closest to `p`.
///
/// Roots of d/dt |P(t) - p|² are clamped to [0,1]; both endpoints are always
/// candidates, so a root-free (or fully degenerate) curve falls back to them.
pub(crate) fn quad_nearest_param(p: Point, begin: Point, ctrl: Point, end: Point) -> f64 {
    let a = ctrl - begin;
    let b = begin - ctrl * 2.0 + end;
    let c = begin - p;
    let roots = solve(
        b.dot(b),
        3.0 * a.dot(b),
        2.0 * a.dot(a) + c.dot(b),
        c.dot(a),
    );
    let dist2 = |t: f64| (Point::from_line_quad(begin, ctrl, end, t) - p).length_squared();
    let mut best_t = 0.0;
    let mut best = dist2(0.0);
    let end_d = dist2(1.0);
    if end_d < best {
        best_t = 1.0;
        best = end_d;
    }
    for &r in roots.as_slice() {
        if !r.is_finite() {
            continue;
        }
        let t = r.clamp(0.0, 1.0);
        let d = dist2(t);
        if d < best {
            best = d;
            best_t = t;
        }
    }
    best_t
}

/// Parameter in [0,1] of the (approximately) closest point on a cubic curve.
///
/// Every discrete local minimum of the uniform samples is refined, so a
/// second basin with a slightly lower minimum is not lost to sampling error.
pub(crate) fn cubic_nearest_param(p: Point, pts: [Point; 4], cfg: &GeomCfg) -> f64 {
    let [b, c1, c2, e] = pts;
    let dist2 = |t: f64| (Point::from_line_cubic(b, c1, c2, e, t) - p).length_squared();
    let n = cfg.samples();
    let at = |i: usize| i as f64 / n as f64;
    let samples: Vec<f64> = (0..=n).map(|i| dist2(at(i))).collect();
    let mut best_t = 0.0;
    let mut best = f64::INFINITY;
    for i in 0..=n {
        let v = samples[i];
        let falling = i == 0 || v < samples[i - 1];
        let rising = i == n || v <= samples[i + 1];
        if !(falling && rising) {
            continue;
        }
        if v < best {
            best = v;
            best_t = at(i);
        }
        let lo = at(i.saturating_sub(1));
        let hi = at((i + 1).min(n));
        let t = golden_section_min(&dist2, lo, hi, cfg.refine_iters);
        let d = dist2(t);
        if d < best {
            best = d;
            best_t = t;
        }
    }
    best_t
}

/// Golden-section search for the minimum of a unimodal `f` on `[lo, hi]`.
fn golden_section_min<F: Fn(f64) -> f64>(f: &F, mut lo: f64, mut hi: f64, iters: usize) -> f64 {
    const INV_PHI: f64 = 0.618_033_988_749_894_9;
    let mut x1 = hi - INV_PHI * (hi - lo);
    let mut x2 = lo + INV_PHI * (hi - lo);
    let mut f1 = f(x1);
    let mut f2 = f(x2);
    for _ in 0..iters {
        if f1 <= f2 {
            hi = x2;
            x2 = x1;
            f2 = f1;
            x1 = hi - INV_PHI * (hi - lo);
            f1 = f(x1);
        } else {
            lo = x1;
            x1 = x2;
            f1 = f2;
            x2 = lo + INV_PHI * (hi - lo);
            f2 = f(x2);
        }
    }
    0.5 * (lo + hi)
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}
impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}
impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
/// Component-wise product.
impl Mul for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}
impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}
/// Component-wise quotient.
impl Div for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: Point) -> Point {
        Point::new(self.x / rhs.x, self.y / rhs.y)
    }
}
impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl MulAssign<f64> for Point {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}
