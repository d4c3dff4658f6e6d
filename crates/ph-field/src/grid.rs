//! Index arithmetic shared by the field, its views, and the agents.

/// A cell of a field, already wrapped into its extent.
///
/// Only produced by the wrapping helpers below, so every `CellIndex` handed
/// out by a field is in bounds for that field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex {
    x: usize,
    y: usize,
}

impl CellIndex {
    /// Wrap integer coordinates toroidally into `width × height`.
    #[inline]
    pub fn wrapped(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x: wrap_index(x, width),
            y: wrap_index(y, height),
        }
    }

    /// Truncate a continuous point toward zero, then wrap it.
    ///
    /// A probe at `x = -0.5` reads column 0, not column `width - 1`.
    #[inline]
    pub fn from_point(px: f64, py: f64, width: usize, height: usize) -> Self {
        Self::wrapped(px as i64, py as i64, width, height)
    }

    #[inline]
    pub fn x(self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(self) -> usize {
        self.y
    }

    /// Flat row-major offset into a field of the given width.
    #[inline]
    pub(crate) fn offset(self, width: usize) -> usize {
        self.y * width + self.x
    }
}

/// Non-negative modulo of an integer coordinate.
#[inline]
pub fn wrap_index(i: i64, n: usize) -> usize {
    i.rem_euclid(n as i64) as usize
}

/// Wrap a continuous coordinate into `[0, extent)`.
///
/// `rem_euclid` may round a tiny negative value up to exactly `extent`; that
/// case folds back to zero so the result is always strictly below `extent`.
#[inline]
pub fn wrap_coord(v: f64, extent: f64) -> f64 {
    let r = v.rem_euclid(extent);
    if r >= extent { 0.0 } else { r }
}

/// Mirror an index one step outside `[0, n)` back inside without repeating
/// the edge cell (`-1 → 1`, `n → n - 2`).  A single-cell axis maps to 0.
#[inline]
pub(crate) fn reflect101(i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let n = n as isize;
    let r = if i < 0 {
        -i
    } else if i >= n {
        2 * (n - 1) - i
    } else {
        i
    };
    r as usize
}
