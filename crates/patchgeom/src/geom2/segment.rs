//! Finite line segment: projection, distance, and exact intersection.
//!
//! Intersection
//! - Shared endpoints are accepted immediately.
//! - Non-parallel segments solve the 2×2 system with the 2D cross product;
//!   both parameters must lie in [0,1].
//! - Parallel segments: collinear ones intersect iff their projections onto
//!   `self` overlap (the point returned is the first overlapping point along
//!   `self`); zero-length segments intersect iff the point lies exactly on the
//!   other segment.
//!
//! `a.intersects(&b) == b.intersects(&a)` holds bit-for-bit: the non-parallel
//! parameters come from the same cross products in both orders, and the
//! collinear overlap is always decided in the frame of the lexicographically
//! smaller segment.

use std::cmp::Ordering;

use super::affine::AffineMatrix;
use super::bezier::{BezierCubic, BezierQuad};
use super::point::Point;
use super::rect::Rectangle;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector `end - start`.
    #[inline]
    pub fn vector(&self) -> Point {
        self.end - self.start
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        Point::from_line(self.start, self.end, t)
    }

    /// Closest point on the segment and its distance to `p`.
    pub fn project(&self, p: Point) -> (Point, f64) {
        let d = self.vector();
        let len2 = d.length_squared();
        if len2 == 0.0 {
            let (ds, de) = (p.distance(self.start), p.distance(self.end));
            return if ds <= de {
                (self.start, ds)
            } else {
                (self.end, de)
            };
        }
        let t = ((p - self.start).dot(d) / len2).clamp(0.0, 1.0);
        let on = self.point_at(t);
        (on, p.distance(on))
    }

    #[inline]
    pub fn nearest_point(&self, p: Point) -> Point {
        self.project(p).0
    }
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        self.project(p).1
    }
    #[inline]
    pub fn near(&self, p: Point, threshold: f64) -> bool {
        self.distance(p) <= threshold
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection(other).is_some()
    }

    /// Intersection point with `other`, if any.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        if self.start == other.start || self.start == other.end {
            return Some(self.start);
        }
        if self.end == other.start || self.end == other.end {
            return Some(self.end);
        }
        let d1 = self.vector();
        let d2 = other.vector();
        let divisor = d1.cross(d2);
        if divisor == 0.0 {
            return self.parallel_intersection(other);
        }
        let r = other.start - self.start;
        let along1 = r.cross(d2) / divisor;
        let along2 = r.cross(d1) / divisor;
        if (0.0..=1.0).contains(&along1) && (0.0..=1.0).contains(&along2) {
            Some(self.start + d1 * along1)
        } else {
            None
        }
    }

    fn parallel_intersection(&self, other: &Segment) -> Option<Point> {
        let (len1, len2) = (self.vector().length_squared(), other.vector().length_squared());
        if len1 == 0.0 && len2 == 0.0 {
            // distinct points; equal ones were accepted above
            return None;
        }
        if len1 == 0.0 {
            return other.contains_exact(self.start).then_some(self.start);
        }
        if len2 == 0.0 {
            return self.contains_exact(other.start).then_some(other.start);
        }
        // The overlap is decided in one frame for both argument orders.
        let swapped = self.lex_cmp(other) == Ordering::Greater;
        let (base, moving) = if swapped { (other, self) } else { (self, other) };
        let (lo, hi) = base.collinear_overlap(moving)?;
        if !swapped {
            return Some(base.start + base.vector() * (lo / len1));
        }
        // first overlapping point along `self`
        let len_b = base.vector().length_squared();
        let (p_lo, p_hi) = (base.point_at(lo / len_b), base.point_at(hi / len_b));
        let d1 = self.vector();
        if (p_lo - self.start).dot(d1) <= (p_hi - self.start).dot(d1) {
            Some(p_lo)
        } else {
            Some(p_hi)
        }
    }

    /// Overlap of `other` projected onto `self`, in `[0, |d|²]` numerator space;
    /// `None` when the segments are not collinear or do not overlap.
    fn collinear_overlap(&self, other: &Segment) -> Option<(f64, f64)> {
        let d = self.vector();
        let r = other.start - self.start;
        if d.cross(r) != 0.0 {
            return None;
        }
        let a = r.dot(d);
        let b = (other.end - self.start).dot(d);
        let lo = a.min(b).max(0.0);
        let hi = a.max(b).min(d.length_squared());
        (lo <= hi).then_some((lo, hi))
    }

    /// Total lexicographic order on `(start.x, start.y, end.x, end.y)`.
    fn lex_cmp(&self, other: &Segment) -> Ordering {
        let a = [self.start.x, self.start.y, self.end.x, self.end.y];
        let b = [other.start.x, other.start.y, other.end.x, other.end.y];
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Exact point-on-segment test (no tolerance).
    fn contains_exact(&self, p: Point) -> bool {
        let d = self.vector();
        let rel = p - self.start;
        if d.cross(rel) != 0.0 {
            return false;
        }
        let along = rel.dot(d);
        along >= 0.0 && along <= d.length_squared()
    }

    /// Intersection of `[a1, a2]` with `[b1, b2]`.
    #[inline]
    pub fn intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
        Segment::new(a1, a2).intersection(&Segment::new(b1, b2))
    }

    #[inline]
    pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
        Segment::intersect(a1, a2, b1, b2).is_some()
    }

    /// Delegates to the curve (curves own their discretization).
    #[inline]
    pub fn intersects_quad(&self, curve: &BezierQuad) -> bool {
        curve.intersects_segment(self)
    }
    #[inline]
    pub fn intersects_cubic(&self, curve: &BezierCubic) -> bool {
        curve.intersects_segment(self)
    }

    #[inline]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::from_corners(self.start, self.end)
    }

    #[inline]
    pub fn transformed(&self, m: &AffineMatrix) -> Segment {
        Segment::new(m.apply_to(self.start), m.apply_to(self.end))
    }
}
