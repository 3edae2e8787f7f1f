//! Flat numeric-list form of each primitive, for attribute persistence.
//!
//! | type           | layout                          |
//! |----------------|---------------------------------|
//! | `Point`        | `[x, y]`                        |
//! | `Size`         | `[w, h]`                        |
//! | `Rectangle`    | `[x, y, w, h]`                  |
//! | `Segment`      | `[x1, y1, x2, y2]`              |
//! | `BezierQuad`   | 3 points                        |
//! | `BezierCubic`  | 4 points                        |
//! | `AffineMatrix` | `[xx, xy, x0, yx, yy, y0]`      |
//! | `Path`         | `[x, y, mode]` per node         |
//!
//! Path mode codes: Move = 0, Linear = 1, Quadratic = 2, Cubic = 3.
//! `from_values` returns `None` on a length mismatch or unknown mode code.

use super::affine::AffineMatrix;
use super::bezier::{BezierCubic, BezierQuad};
use super::path::{Mode, Node, Path};
use super::point::Point;
use super::rect::{Rectangle, Size};
use super::segment::Segment;

pub trait ValueList: Sized {
    fn to_values(&self) -> Vec<f64>;
    fn from_values(values: &[f64]) -> Option<Self>;
}

fn points(values: &[f64], n: usize) -> Option<Vec<Point>> {
    if values.len() != 2 * n {
        return None;
    }
    Some(
        values
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect(),
    )
}

fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

impl ValueList for Point {
    fn to_values(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        match *values {
            [x, y] => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

impl ValueList for Size {
    fn to_values(&self) -> Vec<f64> {
        vec![self.width(), self.height()]
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        match *values {
            [w, h] => Some(Size::new(w, h)),
            _ => None,
        }
    }
}

impl ValueList for Rectangle {
    fn to_values(&self) -> Vec<f64> {
        vec![self.x(), self.y(), self.width(), self.height()]
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        match *values {
            [x, y, w, h] => Some(Rectangle::new(x, y, w, h)),
            _ => None,
        }
    }
}

impl ValueList for Segment {
    fn to_values(&self) -> Vec<f64> {
        flatten(&[self.start, self.end])
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        let p = points(values, 2)?;
        Some(Segment::new(p[0], p[1]))
    }
}

impl ValueList for BezierQuad {
    fn to_values(&self) -> Vec<f64> {
        flatten(&[self.start, self.ctrl, self.end])
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        let p = points(values, 3)?;
        Some(BezierQuad::new(p[0], p[1], p[2]))
    }
}

impl ValueList for BezierCubic {
    fn to_values(&self) -> Vec<f64> {
        flatten(&[self.start, self.ctrl1, self.ctrl2, self.end])
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        let p = points(values, 4)?;
        Some(BezierCubic::new(p[0], p[1], p[2], p[3]))
    }
}

impl ValueList for AffineMatrix {
    fn to_values(&self) -> Vec<f64> {
        vec![self.xx, self.xy, self.x0, self.yx, self.yy, self.y0]
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        match *values {
            [xx, xy, x0, yx, yy, y0] => Some(AffineMatrix::new(xx, xy, x0, yx, yy, y0)),
            _ => None,
        }
    }
}

impl Mode {
    #[inline]
    pub fn code(self) -> f64 {
        match self {
            Mode::Move => 0.0,
            Mode::Linear => 1.0,
            Mode::Quadratic => 2.0,
            Mode::Cubic => 3.0,
        }
    }
    pub fn from_code(code: f64) -> Option<Mode> {
        match code {
            c if c == 0.0 => Some(Mode::Move),
            c if c == 1.0 => Some(Mode::Linear),
            c if c == 2.0 => Some(Mode::Quadratic),
            c if c == 3.0 => Some(Mode::Cubic),
            _ => None,
        }
    }
}

impl ValueList for Path {
    fn to_values(&self) -> Vec<f64> {
        self.nodes()
            .iter()
            .flat_map(|n| [n.point.x, n.point.y, n.mode.code()])
            .collect()
    }
    fn from_values(values: &[f64]) -> Option<Self> {
        if values.len() % 3 != 0 {
            return None;
        }
        values
            .chunks_exact(3)
            .map(|c| Mode::from_code(c[2]).map(|m| Node::new(Point::new(c[0], c[1]), m)))
            .collect()
    }
}
