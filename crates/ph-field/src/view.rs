//! Read-only access to field contents.
//!
//! [`FieldView`] borrows a grid and cannot mutate it; it is what renderers
//! and sensing agents see.  [`FieldSnapshot`] owns a copy and is used by
//! the snapshot tick model and by renderers that must outlive a tick.

use crate::grid::CellIndex;
use crate::{FieldError, FieldResult};

/// Borrowed, immutable view of a `width × height` grid.
#[derive(Copy, Clone, Debug)]
pub struct FieldView<'a> {
    width:  usize,
    height: usize,
    cells:  &'a [f32],
}

impl<'a> FieldView<'a> {
    /// Wrap a row-major buffer.  Fails if the length does not match.
    pub fn new(width: usize, height: usize, cells: &'a [f32]) -> FieldResult<Self> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyField { width, height });
        }
        if cells.len() != width * height {
            return Err(FieldError::BufferSize { width, height, got: cells.len() });
        }
        Ok(Self::from_parts(width, height, cells))
    }

    #[inline]
    pub(crate) fn from_parts(width: usize, height: usize, cells: &'a [f32]) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell values, `y * width + x`.
    #[inline]
    pub fn cells(&self) -> &'a [f32] {
        self.cells
    }

    /// Value at a wrapped cell.
    #[inline]
    pub fn at(&self, cell: CellIndex) -> f32 {
        self.cells[cell.offset(self.width)]
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Cell containing a continuous point: truncate toward zero, then wrap.
    #[inline]
    pub fn cell_at(&self, px: f64, py: f64) -> CellIndex {
        CellIndex::from_point(px, py, self.width, self.height)
    }

    /// Value of the cell containing a continuous point.
    #[inline]
    pub fn sample(&self, px: f64, py: f64) -> f32 {
        self.at(self.cell_at(px, py))
    }

    /// Sum of all cells, accumulated in `f64`.
    pub fn total_mass(&self) -> f64 {
        self.cells.iter().map(|&v| v as f64).sum()
    }

    /// Largest cell value.
    pub fn max_value(&self) -> f32 {
        self.cells.iter().copied().fold(f32::MIN, f32::max)
    }

    /// One byte per cell: value × 255, saturated into `0..=255`, row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.cells.len());
        self.write_bytes(&mut out);
        out
    }

    /// Like [`to_bytes`](Self::to_bytes), reusing `out`'s allocation.
    pub fn write_bytes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&v| (v * 255.0).clamp(0.0, 255.0) as u8));
    }

    /// Owned copy of the viewed grid.
    pub fn to_snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            width:  self.width,
            height: self.height,
            cells:  self.cells.to_vec(),
        }
    }
}

/// Owned copy of a grid, detached from the field it was taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    width:  usize,
    height: usize,
    cells:  Vec<f32>,
}

impl FieldSnapshot {
    #[inline]
    pub fn view(&self) -> FieldView<'_> {
        FieldView::from_parts(self.width, self.height, &self.cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn refill(&mut self, width: usize, height: usize, cells: &[f32]) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.extend_from_slice(cells);
    }
}
