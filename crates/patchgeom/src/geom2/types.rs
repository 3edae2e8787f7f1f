//! Discretization and refinement settings shared by curve queries.
//!
//! - `GeomCfg`: step counts for chord walks, nearest-point sampling, and the
//!   golden-section refinement that follows it.
//!
//! Policy
//! - Defaults are fixed constants so that call sites without a config behave
//!   identically everywhere. Queries that discretize also have a `*_with`
//!   variant taking an explicit `GeomCfg`.

/// Number of equal parameter steps used to turn a curve into chords.
pub const CURVE_STEPS: usize = 100;
/// Number of uniform samples taken before refining a nearest-point search.
pub const NEAREST_SAMPLES: usize = 100;
/// Golden-section iterations run on the bracketing sample interval.
pub const REFINE_ITERS: usize = 48;

/// Geometry configuration (step counts).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeomCfg {
    /// Chords per curve for intersection and overlap tests. Clamped to >= 1.
    pub curve_steps: usize,
    /// Uniform samples per curve for nearest-point search. Clamped to >= 2.
    pub nearest_samples: usize,
    pub refine_iters: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            curve_steps: CURVE_STEPS,
            nearest_samples: NEAREST_SAMPLES,
            refine_iters: REFINE_ITERS,
        }
    }
}

impl GeomCfg {
    #[inline]
    pub(crate) fn steps(&self) -> usize {
        self.curve_steps.max(1)
    }
    #[inline]
    pub(crate) fn samples(&self) -> usize {
        self.nearest_samples.max(2)
    }
}
