//! Axis-aligned rectangles (y grows downward: `top = y`, `bottom = y + h`).
//!
//! - `contains` / `overlaps` are inclusive on every edge.
//! - Curve overlap walks the curve's chords (`Curve::chords`) and reports a hit
//!   as soon as an endpoint is inside or a chord crosses the box. This catches
//!   curves that bow into the box between two outside endpoints, within the
//!   chord resolution.

use super::bezier::{BezierCubic, BezierQuad, Curve};
use super::point::Point;
use super::segment::Segment;
use super::types::GeomCfg;

/// Width/height with an optional locked aspect ratio (`width / height`) and a
/// minimum bound honoured by the setters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    width: f64,
    height: f64,
    ratio: Option<f64>,
    min: Point,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ratio: None,
            min: Point::zero(),
        }
    }
    /// Lock the aspect ratio; ignored unless finite and positive.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = (ratio.is_finite() && ratio > 0.0).then_some(ratio);
        let w = self.width;
        self.set_width(w);
        self
    }
    pub fn with_min(mut self, min_width: f64, min_height: f64) -> Self {
        self.min = Point::new(min_width.max(0.0), min_height.max(0.0));
        let w = self.width;
        self.set_width(w);
        self
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }
    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(self.min.x);
        if let Some(r) = self.ratio {
            self.height = self.width / r;
            if self.height < self.min.y {
                self.height = self.min.y;
                self.width = self.height * r;
            }
        } else {
            self.height = self.height.max(self.min.y);
        }
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(self.min.y);
        if let Some(r) = self.ratio {
            self.width = self.height * r;
            if self.width < self.min.x {
                self.width = self.min.x;
                self.height = self.width / r;
            }
        } else {
            self.width = self.width.max(self.min.x);
        }
    }

    /// Raw resize, no ratio or minimum handling.
    #[inline]
    fn grow(&mut self, delta: Point) {
        self.width += delta.x;
        self.height += delta.y;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub position: Point,
    pub size: Size,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point::new(x, y),
            size: Size::new(width, height),
        }
    }
    /// Smallest rectangle with both points as corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, a.x.max(b.x) - x, a.y.max(b.y) - y)
    }

    #[inline]
    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }
    #[inline]
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width()
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height()
    }
    #[inline]
    pub fn left(&self) -> f64 {
        self.position.x
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.position.y
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width()
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height()
    }
    #[inline]
    pub fn centre(&self) -> Point {
        Point::new(
            self.position.x + self.size.width() * 0.5,
            self.position.y + self.size.height() * 0.5,
        )
    }
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }
    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }
    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }
    /// Top, right, bottom, left edges (clockwise on screen).
    pub fn edges(&self) -> [Segment; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
    #[inline]
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        self.contains(other.top_left()) && self.contains(other.bottom_right())
    }

    /// Separating-axis test, touching edges count as overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }

    pub fn overlaps_segment(&self, seg: &Segment) -> bool {
        if self.contains(seg.start) || self.contains(seg.end) {
            return true;
        }
        self.overlaps(&seg.bounds()) && self.edges().iter().any(|e| e.intersects(seg))
    }

    #[inline]
    pub fn overlaps_quad(&self, curve: &BezierQuad) -> bool {
        self.overlaps_curve_with(curve, &GeomCfg::default())
    }
    #[inline]
    pub fn overlaps_cubic(&self, curve: &BezierCubic) -> bool {
        self.overlaps_curve_with(curve, &GeomCfg::default())
    }

    pub fn overlaps_curve_with<C: Curve>(&self, curve: &C, cfg: &GeomCfg) -> bool {
        if self.contains(curve.start_point()) || self.contains(curve.end_point()) {
            return true;
        }
        self.overlaps(&curve.control_bounds())
            && curve
                .chords(cfg.steps())
                .any(|c| self.overlaps_segment(&c))
    }

    /// Grow symmetrically about the centre by `delta` on every side (in place,
    /// no clamping).
    #[inline]
    pub fn expand(&mut self, delta: f64) {
        self.expand_by(Point::new(delta, delta));
    }
    pub fn expand_by(&mut self, delta: Point) {
        self.position -= delta;
        self.size.grow(delta * 2.0);
    }
    #[inline]
    pub fn reduce(&mut self, delta: f64) {
        self.expand(-delta);
    }
    #[inline]
    pub fn reduce_by(&mut self, delta: Point) {
        self.expand_by(-delta);
    }

    /// Copy grown by `delta` per side; width and height are clamped at zero
    /// (a collapsed axis sits on the centre). The ratio lock and minimum are
    /// carried over but not re-applied, as with `expand_by`.
    ///
    /// For `delta >= 0` the new edges never fall inside the old ones, so every
    /// point `self` contains is still contained.
    #[inline]
    pub fn expanded(&self, delta: f64) -> Rectangle {
        self.expanded_by(Point::new(delta, delta))
    }
    pub fn expanded_by(&self, delta: Point) -> Rectangle {
        let (x, w) = grown_span(self.x(), self.width(), delta.x);
        let (y, h) = grown_span(self.y(), self.height(), delta.y);
        let mut size = self.size;
        size.width = w;
        size.height = h;
        Rectangle {
            position: Point::new(x, y),
            size,
        }
    }
    #[inline]
    pub fn reduced(&self, delta: f64) -> Rectangle {
        self.expanded(-delta)
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle::from_corners(
            Point::new(self.left().min(other.left()), self.top().min(other.top())),
            Point::new(
                self.right().max(other.right()),
                self.bottom().max(other.bottom()),
            ),
        )
    }
}

/// Start and length of `[start, start + len]` grown by `delta` on both ends.
fn grown_span(start: f64, len: f64, delta: f64) -> (f64, f64) {
    let mut w = len + 2.0 * delta;
    if w < 0.0 {
        return (start + len * 0.5, 0.0);
    }
    let lo = start - delta;
    if delta >= 0.0 {
        let hi = (start + len) + delta;
        // rounding in `lo + w` may land below the old end
        while lo + w < hi {
            w = if w > 0.0 { f64::from_bits(w.to_bits() + 1) } else { f64::from_bits(1) };
        }
    }
    (lo, w)
}
