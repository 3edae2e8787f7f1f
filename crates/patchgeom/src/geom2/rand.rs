//! Random shapes for benchmarks and randomized tests (replay tokens).
//!
//! Purpose
//! - Small, deterministic generators for points, segments, rectangles, and
//!   mixed paths. Every draw is reproducible from a `(seed, index)` token.
//!
//! Model
//! - Coordinates are uniform in `PathCfg::extent` (a rectangle).
//! - Paths are built node by node through the public builder, so they obey the
//!   node consumption rule; each segment kind is drawn with the configured
//!   weights, and sub-paths are closed with probability `close_prob`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::path::Path;
use super::point::Point;
use super::rect::Rectangle;
use super::segment::Segment;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random path configuration.
#[derive(Clone, Copy, Debug)]
pub struct PathCfg {
    /// Number of drawn segments (excluding the initial move).
    pub segments: usize,
    /// Relative weights of line, quadratic, and cubic segments.
    pub weights: [f64; 3],
    /// Probability that a segment starts a new sub-path instead.
    pub move_prob: f64,
    pub close_prob: f64,
    pub extent: Rectangle,
}

impl Default for PathCfg {
    fn default() -> Self {
        Self {
            segments: 16,
            weights: [1.0, 1.0, 1.0],
            move_prob: 0.1,
            close_prob: 0.2,
            extent: Rectangle::new(0.0, 0.0, 100.0, 100.0),
        }
    }
}

fn draw_point<R: Rng>(rng: &mut R, extent: &Rectangle) -> Point {
    Point::new(
        extent.x() + rng.gen::<f64>() * extent.width(),
        extent.y() + rng.gen::<f64>() * extent.height(),
    )
}

pub fn draw_segment(extent: &Rectangle, tok: ReplayToken) -> Segment {
    let mut rng = tok.to_std_rng();
    Segment::new(draw_point(&mut rng, extent), draw_point(&mut rng, extent))
}

/// Rectangle with both corners inside `extent`.
pub fn draw_rect(extent: &Rectangle, tok: ReplayToken) -> Rectangle {
    let mut rng = tok.to_std_rng();
    Rectangle::from_corners(draw_point(&mut rng, extent), draw_point(&mut rng, extent))
}

/// Draw a random path with `cfg.segments` segments after the initial move.
pub fn draw_path(cfg: PathCfg, tok: ReplayToken) -> Path {
    let mut rng = tok.to_std_rng();
    let ext = cfg.extent;
    let w = cfg.weights.map(|x| x.max(0.0));
    let total: f64 = w.iter().sum();
    let mut path = Path::new();
    path.move_to(draw_point(&mut rng, &ext));
    for _ in 0..cfg.segments {
        if rng.gen_bool(cfg.move_prob.clamp(0.0, 1.0)) {
            if rng.gen_bool(cfg.close_prob.clamp(0.0, 1.0)) {
                path.close();
            }
            path.move_to(draw_point(&mut rng, &ext));
            continue;
        }
        let pick = if total > 0.0 {
            rng.gen::<f64>() * total
        } else {
            0.0
        };
        if pick < w[0] || total <= 0.0 {
            path.line_to(draw_point(&mut rng, &ext));
        } else if pick < w[0] + w[1] {
            let c = draw_point(&mut rng, &ext);
            path.quadratic_to(c, draw_point(&mut rng, &ext));
        } else {
            let c1 = draw_point(&mut rng, &ext);
            let c2 = draw_point(&mut rng, &ext);
            path.cubic_to(c1, c2, draw_point(&mut rng, &ext));
        }
    }
    if rng.gen_bool(cfg.close_prob.clamp(0.0, 1.0)) {
        path.close();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::path::Element;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_path(PathCfg::default(), tok);
        let p2 = draw_path(PathCfg::default(), tok);
        assert_eq!(p1, p2);
        let other = draw_path(PathCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, other);
    }

    #[test]
    fn paths_stay_in_extent_and_walk_fully() {
        let cfg = PathCfg::default();
        for index in 0..20 {
            let p = draw_path(cfg, ReplayToken { seed: 3, index });
            assert!(p.nodes().iter().all(|n| cfg.extent.contains(n.point)));
            // every node is consumed by exactly one element
            let consumed: usize = p
                .elements()
                .map(|e| match e {
                    Element::Point(_) | Element::Line(_) => 1,
                    Element::Quad(_) => 2,
                    Element::Cubic(_) => 3,
                })
                .sum();
            assert_eq!(consumed, p.len());
        }
    }

    #[test]
    fn lines_only_weights() {
        let cfg = PathCfg {
            weights: [1.0, 0.0, 0.0],
            move_prob: 0.0,
            close_prob: 0.0,
            ..PathCfg::default()
        };
        let p = draw_path(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(p.len(), cfg.segments + 1);
        assert!(p.elements().skip(1).all(|e| matches!(e, Element::Line(_))));
    }
}
