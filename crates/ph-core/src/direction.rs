//! Normalised heading type.
//!
//! A `Direction` is a single angle held in the half-open range `[0, 2π)`.
//! Reduction happens in the constructor, so no value outside that range can
//! ever be observed.  Every combining operation returns a fresh `Direction`.
//!
//! # Orientation convention
//!
//! [`Direction::unit`] returns `(-sin a, cos a)`: angle 0 points along the
//! positive second axis (y / height) and angles increase towards negative
//! x.  Sensor geometry relies on this exact convention.
//!
//! # Multiplication
//!
//! `Direction * Direction` multiplies the two *raw magnitudes* and reduces
//! the product.  It is not a rotation composition; it exists so that a
//! rotation step can be scaled by a random factor.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use rand::Rng;

/// A heading in radians, always in `[0, 2π)`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct Direction(f64);

/// Reduce `a` into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `TAU`; that
/// case folds back to zero.  Negative zero becomes positive zero.
#[inline]
fn reduce(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r + 0.0 }
}

impl Direction {
    pub const ZERO: Direction = Direction(0.0);

    /// Direction with value `a mod 2π`.
    #[inline]
    pub fn from_angle(a: f64) -> Self {
        Direction(reduce(a))
    }

    /// Direction drawn uniformly from `[0, 2π)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Direction::from_angle(rng.gen_range(0.0..TAU))
    }

    /// The canonical angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Unit vector `(-sin a, cos a)`.
    #[inline]
    pub fn unit(self) -> (f64, f64) {
        let (sin, cos) = self.0.sin_cos();
        (-sin, cos)
    }

    /// Multiply the raw magnitude by `factor` and reduce.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Direction::from_angle(self.0 * factor)
    }

    /// Signed shortest rotation from `self` to `other`, in `(-π, π]`.
    pub fn delta_to(self, other: Direction) -> f64 {
        let d = other.0 - self.0;
        if d > std::f64::consts::PI {
            d - TAU
        } else if d <= -std::f64::consts::PI {
            d + TAU
        } else {
            d
        }
    }
}

impl From<f64> for Direction {
    #[inline]
    fn from(a: f64) -> Self {
        Direction::from_angle(a)
    }
}

impl From<Direction> for f64 {
    #[inline]
    fn from(d: Direction) -> f64 {
        d.0
    }
}

// ── Combining operations ──────────────────────────────────────────────────────
//
// Each pair (Direction ∘ Direction, Direction ∘ f64) is defined once via a
// macro so that both operand kinds reduce through the same constructor.

macro_rules! combine {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Direction {
            type Output = Direction;
            #[inline]
            fn $method(self, rhs: Direction) -> Direction {
                Direction::from_angle(self.0 $op rhs.0)
            }
        }

        impl $trait<f64> for Direction {
            type Output = Direction;
            #[inline]
            fn $method(self, rhs: f64) -> Direction {
                Direction::from_angle(self.0 $op rhs)
            }
        }
    };
}

combine!(Add, add, +);
combine!(Sub, sub, -);
combine!(Mul, mul, *);

impl Neg for Direction {
    type Output = Direction;
    #[inline]
    fn neg(self) -> Direction {
        Direction::from_angle(-self.0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}
