//! Quadratic and cubic Bezier curves.
//!
//! Evaluation is direct Bernstein form. Intersection uses uniform
//! discretization: the curve is cut into `GeomCfg::curve_steps` chords of equal
//! parameter width and each chord is tested exactly (`Segment::intersection`).
//! Crossings that enter and leave within a single chord's parameter interval on
//! a sharply bent curve can be missed; the step count is fixed, not adaptive.
//!
//! Nearest point
//! - Quadratic: closed form through the cubic solver (`point::quad_nearest_param`).
//! - Cubic: uniform sampling plus golden-section refinement (`point::cubic_nearest_param`).

use super::affine::AffineMatrix;
use super::point::{cubic_nearest_param, quad_nearest_param, Point};
use super::rect::Rectangle;
use super::segment::Segment;
use super::types::GeomCfg;

/// Parametric curve on `t ∈ [0, 1]`.
pub trait Curve {
    fn point_at(&self, t: f64) -> Point;
    fn start_point(&self) -> Point;
    fn end_point(&self) -> Point;
    /// Axis-aligned box around all control points (contains the curve).
    fn control_bounds(&self) -> Rectangle;

    /// `steps` chords `[P(i/steps), P((i+1)/steps)]`, `i = 0..steps`.
    fn chords(&self, steps: usize) -> Chords<'_, Self>
    where
        Self: Sized,
    {
        Chords::new(self, steps)
    }

    fn intersects_segment_with(&self, seg: &Segment, cfg: &GeomCfg) -> bool
    where
        Self: Sized,
    {
        if !self.control_bounds().overlaps(&seg.bounds()) {
            return false;
        }
        self.chords(cfg.steps()).any(|c| c.intersects(seg))
    }
}

/// Iterator over the chords of a curve.
pub struct Chords<'a, C> {
    curve: &'a C,
    steps: usize,
    i: usize,
    prev: Point,
}

impl<'a, C: Curve> Chords<'a, C> {
    fn new(curve: &'a C, steps: usize) -> Self {
        Self {
            curve,
            steps: steps.max(1),
            i: 0,
            prev: curve.start_point(),
        }
    }
}

impl<C: Curve> Iterator for Chords<'_, C> {
    type Item = Segment;
    fn next(&mut self) -> Option<Segment> {
        if self.i >= self.steps {
            return None;
        }
        self.i += 1;
        let next = if self.i == self.steps {
            self.curve.end_point()
        } else {
            self.curve.point_at(self.i as f64 / self.steps as f64)
        };
        let chord = Segment::new(self.prev, next);
        self.prev = next;
        Some(chord)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.steps - self.i;
        (left, Some(left))
    }
}

impl<C: Curve> ExactSizeIterator for Chords<'_, C> {}

fn bounds_of(points: &[Point]) -> Rectangle {
    let mut lo = points[0];
    let mut hi = points[0];
    for p in &points[1..] {
        lo.x = lo.x.min(p.x);
        lo.y = lo.y.min(p.y);
        hi.x = hi.x.max(p.x);
        hi.y = hi.y.max(p.y);
    }
    Rectangle::from_corners(lo, hi)
}

/// Quadratic curve with one control point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierQuad {
    pub start: Point,
    pub ctrl: Point,
    pub end: Point,
}

impl BezierQuad {
    #[inline]
    pub const fn new(start: Point, ctrl: Point, end: Point) -> Self {
        Self { start, ctrl, end }
    }

    /// Parameter of the closest point to `p`.
    #[inline]
    pub fn nearest_param(&self, p: Point) -> f64 {
        quad_nearest_param(p, self.start, self.ctrl, self.end)
    }
    #[inline]
    pub fn nearest_point(&self, p: Point) -> Point {
        self.point_at(self.nearest_param(p))
    }
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        p.distance_to_quad(self.start, self.ctrl, self.end)
    }
    #[inline]
    pub fn near(&self, p: Point, threshold: f64) -> bool {
        self.distance(p) <= threshold
    }

    #[inline]
    pub fn intersects_segment(&self, seg: &Segment) -> bool {
        self.intersects_segment_with(seg, &GeomCfg::default())
    }
    pub fn intersects_quad(&self, other: &BezierQuad) -> bool {
        let cfg = GeomCfg::default();
        self.control_bounds().overlaps(&other.control_bounds())
            && self
                .chords(cfg.steps())
                .any(|c| other.intersects_segment_with(&c, &cfg))
    }
    pub fn intersects_cubic(&self, other: &BezierCubic) -> bool {
        let cfg = GeomCfg::default();
        self.control_bounds().overlaps(&other.control_bounds())
            && self
                .chords(cfg.steps())
                .any(|c| other.intersects_segment_with(&c, &cfg))
    }

    pub fn transformed(&self, m: &AffineMatrix) -> BezierQuad {
        BezierQuad::new(m.apply_to(self.start), m.apply_to(self.ctrl), m.apply_to(self.end))
    }
}

impl Curve for BezierQuad {
    #[inline]
    fn point_at(&self, t: f64) -> Point {
        Point::from_line_quad(self.start, self.ctrl, self.end, t)
    }
    #[inline]
    fn start_point(&self) -> Point {
        self.start
    }
    #[inline]
    fn end_point(&self) -> Point {
        self.end
    }
    fn control_bounds(&self) -> Rectangle {
        bounds_of(&[self.start, self.ctrl, self.end])
    }
}

/// Cubic curve with two control points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierCubic {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl BezierCubic {
    #[inline]
    pub const fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    #[inline]
    fn points(&self) -> [Point; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Parameter of the (approximately) closest point to `p`.
    #[inline]
    pub fn nearest_param(&self, p: Point) -> f64 {
        self.nearest_param_with(p, &GeomCfg::default())
    }
    #[inline]
    pub fn nearest_param_with(&self, p: Point, cfg: &GeomCfg) -> f64 {
        cubic_nearest_param(p, self.points(), cfg)
    }
    #[inline]
    pub fn nearest_point(&self, p: Point) -> Point {
        self.point_at(self.nearest_param(p))
    }
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        p.distance(self.nearest_point(p))
    }
    #[inline]
    pub fn distance_with(&self, p: Point, cfg: &GeomCfg) -> f64 {
        p.distance(self.point_at(self.nearest_param_with(p, cfg)))
    }
    /// Sampled one-sided test, see `Point::near_cubic`.
    #[inline]
    pub fn near(&self, p: Point, threshold: f64) -> bool {
        p.near_cubic(self.start, self.ctrl1, self.ctrl2, self.end, threshold)
    }

    #[inline]
    pub fn intersects_segment(&self, seg: &Segment) -> bool {
        self.intersects_segment_with(seg, &GeomCfg::default())
    }
    pub fn intersects_quad(&self, other: &BezierQuad) -> bool {
        let cfg = GeomCfg::default();
        self.control_bounds().overlaps(&other.control_bounds())
            && self
                .chords(cfg.steps())
                .any(|c| other.intersects_segment_with(&c, &cfg))
    }
    pub fn intersects_cubic(&self, other: &BezierCubic) -> bool {
        let cfg = GeomCfg::default();
        self.control_bounds().overlaps(&other.control_bounds())
            && self
                .chords(cfg.steps())
                .any(|c| other.intersects_segment_with(&c, &cfg))
    }

    pub fn transformed(&self, m: &AffineMatrix) -> BezierCubic {
        BezierCubic::new(
            m.apply_to(self.start),
            m.apply_to(self.ctrl1),
            m.apply_to(self.ctrl2),
            m.apply_to(self.end),
        )
    }
}

impl Curve for BezierCubic {
    #[inline]
    fn point_at(&self, t: f64) -> Point {
        Point::from_line_cubic(self.start, self.ctrl1, self.ctrl2, self.end, t)
    }
    #[inline]
    fn start_point(&self) -> Point {
        self.start
    }
    #[inline]
    fn end_point(&self) -> Point {
        self.end
    }
    fn control_bounds(&self) -> Rectangle {
        bounds_of(&self.points())
    }
}
