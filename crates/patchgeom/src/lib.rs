//! 2D geometry kernel for patcher views.
//!
//! Points, segments, quadratic/cubic Bezier curves, rectangles, multi-segment
//! paths, and affine transforms, plus the distance / proximity / overlap /
//! intersection queries that selection and hit-testing build on.
//!
//! Everything is synchronous and side-effect free. Degenerate geometry is
//! handled by explicit fallback branches (nearest endpoint, "no
//! intersection"), never by panics or error values; partial operations return
//! `Option`.
//!
//! Logging: the kernel emits `tracing` events at `trace`/`debug` level on
//! degenerate fallbacks and never installs a subscriber.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    AffineMatrix, BezierCubic, BezierQuad, Curve, Element, GeomCfg, Mode, Node, Path, Point,
    Rectangle, Segment, Size, ValueList,
};
pub use nalgebra::{Matrix2 as Mat2, Matrix3 as Mat3, Vector2 as Vec2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_path, draw_rect, draw_segment, PathCfg, ReplayToken};
    pub use crate::geom2::{
        solve, AffineMatrix, BezierCubic, BezierQuad, Curve, Element, GeomCfg, Mode, Node, Path,
        Point, Rectangle, Roots, Segment, Size, ValueList,
    };
}
