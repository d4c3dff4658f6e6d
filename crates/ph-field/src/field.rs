//! The owned trail grid.

use ph_core::{BorderMode, DepositPolicy, PhysarumConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::{reflect101, CellIndex};
use crate::{FieldError, FieldResult, FieldSnapshot, FieldView, Kernel};

/// Dense `width × height` scalar trail grid plus its diffusion operator.
///
/// Dimensions never change after construction.  Values are nominally in
/// `[0, 1]` but only [`DepositPolicy::Clamped`] enforces that.
///
/// Diffusion double-buffers: `scratch` receives the convolved grid and is
/// then swapped with `cells`, so no per-tick allocation happens.
#[derive(Clone, Debug)]
pub struct TrailField {
    width:   usize,
    height:  usize,
    cells:   Vec<f32>,
    scratch: Vec<f32>,
    kernel:  Kernel,
    border:  BorderMode,
    policy:  DepositPolicy,
}

impl TrailField {
    /// Zero-initialised field with the default kernel, `Reflect101`
    /// borders and unclamped deposits.
    pub fn new(width: usize, height: usize) -> FieldResult<Self> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyField { width, height });
        }
        let n = width * height;
        Ok(Self {
            width,
            height,
            cells:   vec![0.0; n],
            scratch: vec![0.0; n],
            kernel:  Kernel::default(),
            border:  BorderMode::default(),
            policy:  DepositPolicy::default(),
        })
    }

    /// Field with pre-set contents, row-major (`y * width + x`).
    pub fn from_cells(width: usize, height: usize, cells: Vec<f32>) -> FieldResult<Self> {
        let mut field = Self::new(width, height)?;
        if cells.len() != field.cells.len() {
            return Err(FieldError::BufferSize { width, height, got: cells.len() });
        }
        field.cells = cells;
        Ok(field)
    }

    /// Field sized and configured from a validated simulation config.
    pub fn from_config(config: &PhysarumConfig) -> FieldResult<Self> {
        config.validate()?;
        Ok(Self::new(config.width, config.height)?
            .with_kernel(Kernel::ring(config.kernel_mass)?)
            .with_border(config.border)
            .with_policy(config.deposit_policy))
    }

    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    pub fn with_policy(mut self, policy: DepositPolicy) -> Self {
        self.policy = policy;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn border(&self) -> BorderMode {
        self.border
    }

    pub fn policy(&self) -> DepositPolicy {
        self.policy
    }

    /// Value at a cell.
    #[inline]
    pub fn get(&self, cell: CellIndex) -> f32 {
        self.cells[cell.offset(self.width)]
    }

    /// Toroidally wrapped cell for integer coordinates.
    #[inline]
    pub fn cell(&self, x: i64, y: i64) -> CellIndex {
        CellIndex::wrapped(x, y, self.width, self.height)
    }

    /// Borrowed read-only view of the current grid.
    #[inline]
    pub fn view(&self) -> FieldView<'_> {
        FieldView::from_parts(self.width, self.height, &self.cells)
    }

    /// Owned copy of the current grid.
    pub fn snapshot(&self) -> FieldSnapshot {
        self.view().to_snapshot()
    }

    /// Overwrite `snapshot` with the current grid, reusing its allocation
    /// when the dimensions already match.
    pub fn copy_into(&self, snapshot: &mut FieldSnapshot) {
        snapshot.refill(self.width, self.height, &self.cells);
    }

    /// Sum of all cells.
    pub fn total_mass(&self) -> f64 {
        self.view().total_mass()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `amount` to `cell`, then apply the deposit policy.
    ///
    /// # Panics
    /// Panics if `cell` was wrapped for a field of different dimensions.
    #[inline]
    pub fn deposit(&mut self, cell: CellIndex, amount: f32) {
        let v = &mut self.cells[cell.offset(self.width)];
        *v += amount;
        if self.policy == DepositPolicy::Clamped {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// Replace every cell with the kernel-weighted sum of its 3×3
    /// neighbourhood, resolving out-of-range neighbours with the border mode.
    pub fn diffuse(&mut self) {
        let w = self.width;
        let cols = neighbour_table(w, self.border);
        let rows = neighbour_table(self.height, self.border);
        let weights = self.kernel.weights();
        let src = &self.cells;

        let convolve_row = |y: usize, out: &mut [f32]| {
            let row_offsets = rows[y].map(|yy| yy * w);
            for (x, o) in out.iter_mut().enumerate() {
                let xs = cols[x];
                let mut acc = 0.0f32;
                for (ky, &base) in row_offsets.iter().enumerate() {
                    for (kx, &xx) in xs.iter().enumerate() {
                        acc += weights[ky * 3 + kx] * src[base + xx];
                    }
                }
                *o = acc;
            }
        };

        #[cfg(feature = "parallel")]
        self.scratch
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, out)| convolve_row(y, out));

        #[cfg(not(feature = "parallel"))]
        self.scratch
            .chunks_mut(w)
            .enumerate()
            .for_each(|(y, out)| convolve_row(y, out));

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}

/// `[i - 1, i, i + 1]` resolved for every index along an axis of length `n`.
fn neighbour_table(n: usize, border: BorderMode) -> Vec<[usize; 3]> {
    (0..n)
        .map(|i| match border {
            BorderMode::Reflect101 => {
                let i = i as isize;
                [reflect101(i - 1, n), i as usize, reflect101(i + 1, n)]
            }
            BorderMode::Wrap => [(i + n - 1) % n, i, (i + 1) % n],
        })
        .collect()
}
