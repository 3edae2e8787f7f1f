//! Closed-form real root solver for polynomials of degree <= 3.
//!
//! - `solve(a, b, c, d)`: real roots of `a t³ + b t² + c t + d = 0`.
//!
//! Branch structure (callers depend on root count and order)
//! - `a ≠ 0`: normalize, depress to `x³ + p x + q` with `t = x - b/3`, and
//!   classify by `D = q² + 4p³/27`:
//!   - `D == 0` → 2 roots `2u - b/3`, `-u - b/3` with `u = ∛(-q/2)` (second is repeated);
//!   - `D > 0`  → 1 root via Cardano radicals;
//!   - `D < 0`  → 3 roots via the trigonometric form (`acos`), k = 0, 1, 2.
//! - `a == 0`: quadratic on the discriminant `c² - 4bd`, then linear.
//!
//! A root count of 0 is a normal outcome, not a failure.

use std::f64::consts::PI;

/// Up to three real roots; only the first `count` entries are meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Roots {
    count: usize,
    sol: [f64; 3],
}

impl Roots {
    #[inline]
    fn none() -> Self {
        Self::default()
    }
    #[inline]
    fn one(r: f64) -> Self {
        Self {
            count: 1,
            sol: [r, 0.0, 0.0],
        }
    }
    #[inline]
    fn two(r1: f64, r2: f64) -> Self {
        Self {
            count: 2,
            sol: [r1, r2, 0.0],
        }
    }
    #[inline]
    fn three(r1: f64, r2: f64, r3: f64) -> Self {
        Self {
            count: 3,
            sol: [r1, r2, r3],
        }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.sol[..self.count]
    }
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Real roots of `a t³ + b t² + c t + d = 0`.
pub fn solve(a: f64, b: f64, c: f64, d: f64) -> Roots {
    if a != 0.0 {
        return solve_cubic(b / a, c / a, d / a);
    }
    if b != 0.0 {
        let disc = c * c - 4.0 * b * d;
        if disc < 0.0 {
            return Roots::none();
        }
        if disc == 0.0 {
            return Roots::one(-c / (2.0 * b));
        }
        let sq = disc.sqrt();
        return Roots::two((-c + sq) / (2.0 * b), (-c - sq) / (2.0 * b));
    }
    if c != 0.0 {
        return Roots::one(-d / c);
    }
    Roots::none()
}

/// Monic cubic `t³ + b t² + c t + d`.
fn solve_cubic(b: f64, c: f64, d: f64) -> Roots {
    let offset = -b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let disc = q * q + 4.0 * p * p * p / 27.0;
    if disc == 0.0 {
        let u = (-q / 2.0).cbrt();
        Roots::two(2.0 * u + offset, -u + offset)
    } else if disc > 0.0 {
        let sq = disc.sqrt();
        let u = ((-q + sq) / 2.0).cbrt();
        let v = ((-q - sq) / 2.0).cbrt();
        Roots::one(u + v + offset)
    } else {
        // disc < 0 implies p < 0
        let r = 2.0 * (-p / 3.0).sqrt();
        let arg = ((3.0 * q) / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
        let phi = arg.acos() / 3.0;
        Roots::three(
            r * phi.cos() + offset,
            r * (phi - 2.0 * PI / 3.0).cos() + offset,
            r * (phi - 4.0 * PI / 3.0).cos() + offset,
        )
    }
}
