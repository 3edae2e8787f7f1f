//! Compound shape made of typed nodes.
//!
//! Node consumption
//! - `Move`: starts a disjoint sub-path at the node; yields a point element.
//! - `Linear`: edge from the previous point to the node.
//! - `Quadratic`: the node is the control point, the following node the end;
//!   two nodes are consumed.
//! - `Cubic`: the node and the following one are controls, the third is the
//!   end; three nodes are consumed.
//!
//! `Path::elements` implements this rule once; distance, proximity and
//! overlap queries (and renderers) walk the elements instead of raw nodes.
//! A curve whose trailing nodes are missing ends the walk.

use super::affine::AffineMatrix;
use super::bezier::{BezierCubic, BezierQuad, Curve};
use super::point::Point;
use super::rect::Rectangle;
use super::segment::Segment;
use super::types::GeomCfg;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Move,
    Linear,
    Quadratic,
    Cubic,
}

impl Mode {
    /// Number of nodes a segment of this mode consumes.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            Mode::Move | Mode::Linear => 1,
            Mode::Quadratic => 2,
            Mode::Cubic => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub point: Point,
    pub mode: Mode,
}

impl Node {
    #[inline]
    pub const fn new(point: Point, mode: Mode) -> Self {
        Self { point, mode }
    }
}

/// One drawn piece of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    Point(Point),
    Line(Segment),
    Quad(BezierQuad),
    Cubic(BezierCubic),
}

impl Element {
    pub fn distance_with(&self, p: Point, cfg: &GeomCfg) -> f64 {
        match self {
            Element::Point(q) => p.distance(*q),
            Element::Line(s) => s.distance(p),
            Element::Quad(c) => c.distance(p),
            Element::Cubic(c) => c.distance_with(p, cfg),
        }
    }

    pub fn near(&self, p: Point, threshold: f64) -> bool {
        match self {
            Element::Point(q) => p.near(*q, threshold),
            Element::Line(s) => s.near(p, threshold),
            Element::Quad(c) => c.near(p, threshold),
            Element::Cubic(c) => c.near(p, threshold),
        }
    }

    pub fn overlaps_with(&self, rect: &Rectangle, cfg: &GeomCfg) -> bool {
        match self {
            Element::Point(q) => rect.contains(*q),
            Element::Line(s) => rect.overlaps_segment(s),
            Element::Quad(c) => rect.overlaps_curve_with(c, cfg),
            Element::Cubic(c) => rect.overlaps_curve_with(c, cfg),
        }
    }

    /// Control-point bounds (exact for points and lines).
    pub fn bounds(&self) -> Rectangle {
        match self {
            Element::Point(q) => Rectangle::from_corners(*q, *q),
            Element::Line(s) => s.bounds(),
            Element::Quad(c) => c.control_bounds(),
            Element::Cubic(c) => c.control_bounds(),
        }
    }
}

/// Ordered node list; see the module docs for the consumption rule.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<Node>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
    /// Single-node path (a `Move` to `p`).
    pub fn with_point(p: Point) -> Self {
        Self {
            nodes: vec![Node::new(p, Mode::Move)],
        }
    }
    /// Takes the nodes as given; the walk tolerates truncated curves.
    #[inline]
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.nodes.last().map(|n| n.point)
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.nodes.push(Node::new(p, Mode::Move));
        self
    }

    /// Edge to `p`; on an empty path this is a `move_to`.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        if self.nodes.is_empty() {
            return self.move_to(p);
        }
        self.nodes.push(Node::new(p, Mode::Linear));
        self
    }

    /// On an empty path the curve starts at `ctrl`.
    pub fn quadratic_to(&mut self, ctrl: Point, end: Point) -> &mut Self {
        if self.nodes.is_empty() {
            self.move_to(ctrl);
        }
        self.nodes.push(Node::new(ctrl, Mode::Quadratic));
        self.nodes.push(Node::new(end, Mode::Quadratic));
        self
    }

    /// On an empty path the curve starts at `ctrl1`.
    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, end: Point) -> &mut Self {
        if self.nodes.is_empty() {
            self.move_to(ctrl1);
        }
        self.nodes.push(Node::new(ctrl1, Mode::Cubic));
        self.nodes.push(Node::new(ctrl2, Mode::Cubic));
        self.nodes.push(Node::new(end, Mode::Cubic));
        self
    }

    /// Line back to the start of the current sub-path unless already there.
    pub fn close(&mut self) -> &mut Self {
        if self.nodes.len() < 2 {
            return self;
        }
        let start = self
            .nodes
            .iter()
            .rev()
            .find(|n| n.mode == Mode::Move)
            .unwrap_or(&self.nodes[0])
            .point;
        if self.last_point() != Some(start) {
            self.nodes.push(Node::new(start, Mode::Linear));
        }
        self
    }

    #[inline]
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            nodes: &self.nodes,
            i: 0,
            previous: None,
        }
    }

    /// Minimum distance over all elements; `f64::INFINITY` for an empty path.
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        self.distance_with(p, &GeomCfg::default())
    }
    pub fn distance_with(&self, p: Point, cfg: &GeomCfg) -> f64 {
        self.elements()
            .map(|e| e.distance_with(p, cfg))
            .fold(f64::INFINITY, f64::min)
    }

    /// True at the first element within `threshold` of `p`.
    pub fn near(&self, p: Point, threshold: f64) -> bool {
        self.elements().any(|e| e.near(p, threshold))
    }

    #[inline]
    pub fn overlaps(&self, rect: &Rectangle) -> bool {
        self.overlaps_with(rect, &GeomCfg::default())
    }
    pub fn overlaps_with(&self, rect: &Rectangle, cfg: &GeomCfg) -> bool {
        self.elements().any(|e| e.overlaps_with(rect, cfg))
    }

    /// Union of element bounds; `None` for an empty path.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.elements()
            .map(|e| e.bounds())
            .reduce(|a, b| a.union(&b))
    }

    pub fn transform(&mut self, m: &AffineMatrix) {
        for n in &mut self.nodes {
            n.point = m.apply_to(n.point);
        }
    }
    pub fn transformed(&self, m: &AffineMatrix) -> Path {
        let mut out = self.clone();
        out.transform(m);
        out
    }
}

impl FromIterator<Node> for Path {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::from_nodes(iter.into_iter().collect())
    }
}

impl Extend<Node> for Path {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

/// Walks a path's nodes, yielding drawn elements.
pub struct Elements<'a> {
    nodes: &'a [Node],
    i: usize,
    previous: Option<Point>,
}

impl Iterator for Elements<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        let node = *self.nodes.get(self.i)?;
        let arity = node.mode.arity();
        if self.i + arity > self.nodes.len() {
            tracing::debug!(
                index = self.i,
                mode = ?node.mode,
                len = self.nodes.len(),
                "truncated curve nodes, path walk stops"
            );
            self.i = self.nodes.len();
            return None;
        }
        let (nodes, base) = (self.nodes, self.i);
        let at = |k: usize| nodes[base + k].point;
        let element = match (node.mode, self.previous) {
            (Mode::Move, _) | (Mode::Linear, None) => Element::Point(node.point),
            (Mode::Linear, Some(prev)) => Element::Line(Segment::new(prev, node.point)),
            (Mode::Quadratic, prev) => {
                let ctrl = at(0);
                Element::Quad(BezierQuad::new(prev.unwrap_or(ctrl), ctrl, at(1)))
            }
            (Mode::Cubic, prev) => {
                let ctrl1 = at(0);
                Element::Cubic(BezierCubic::new(prev.unwrap_or(ctrl1), ctrl1, at(1), at(2)))
            }
        };
        self.previous = Some(at(arity - 1));
        self.i += arity;
        Some(element)
    }
}
