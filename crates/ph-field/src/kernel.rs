//! 3×3 diffusion kernel.

use crate::{FieldError, FieldResult};

/// Reference kernel mass: 1 % of the local trail decays every tick.
pub const DEFAULT_MASS: f32 = 0.99;

/// Row-major 3×3 weights, `weights[(dy + 1) * 3 + (dx + 1)]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kernel {
    weights: [f32; 9],
}

impl Kernel {
    /// Eight equal neighbour weights and a zero centre, scaled so all
    /// weights sum to `mass`.
    pub fn ring(mass: f32) -> FieldResult<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(FieldError::KernelMass(mass));
        }
        let w = mass / 8.0;
        Ok(Self {
            weights: [w, w, w, w, 0.0, w, w, w, w],
        })
    }

    /// Weight applied to the neighbour at offset `(dx, dy)`, each in `-1..=1`.
    #[inline]
    pub fn weight(&self, dx: isize, dy: isize) -> f32 {
        self.weights[((dy + 1) * 3 + (dx + 1)) as usize]
    }

    #[inline]
    pub(crate) fn weights(&self) -> &[f32; 9] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn mass(&self) -> f32 {
        self.weights.iter().sum()
    }
}

impl Default for Kernel {
    fn default() -> Self {
        let w = DEFAULT_MASS / 8.0;
        Self {
            weights: [w, w, w, w, 0.0, w, w, w, w],
        }
    }
}
