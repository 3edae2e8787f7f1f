//! 2D geometry kernel (value types and hit-test queries).
//!
//! Purpose
//! - Answer the three questions an interactive vector surface asks: how far
//!   is a point from a shape, is a point/rectangle touching a shape, and do two
//!   shapes intersect.
//! - Keep every type a plain `Copy` value (except `Path`, which owns its node
//!   list); no shared ownership, no interior mutability.
//!
//! Layout
//! - `point` carries vector math and the distance kernels (`solvers` for the
//!   quadratic case); `segment`, `bezier`, and `rect` build on it; `path`
//!   dispatches per element.
//! - `types` holds step counts, `values` the flat numeric-list adapter, and
//!   `rand` deterministic fixtures.
//!
//! Approximations
//! - Curve intersection and rectangle/curve overlap are discretized with a
//!   fixed chord count (`GeomCfg::curve_steps`).
//! - Cubic distance/nearest point use sampling plus golden-section refinement.
//!
//! Code cross-refs: `Point`, `Segment`, `BezierQuad`, `BezierCubic`,
//! `Rectangle`, `Path`, `AffineMatrix`, `GeomCfg`

pub mod affine;
pub mod bezier;
pub mod path;
pub mod point;
pub mod rand;
pub mod rect;
pub mod segment;
mod solvers;
mod types;
pub mod values;

pub use affine::AffineMatrix;
pub use bezier::{BezierCubic, BezierQuad, Chords, Curve};
pub use path::{Element, Elements, Mode, Node, Path};
pub use point::Point;
pub use rect::{Rectangle, Size};
pub use segment::Segment;
pub use solvers::{solve, Roots};
pub use types::{GeomCfg, CURVE_STEPS, NEAREST_SAMPLES, REFINE_ITERS};
pub use values::ValueList;
