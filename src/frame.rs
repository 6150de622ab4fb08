//! Matrix frame buffers.

use crate::color::Rgb;
use crate::geometry::{COLUMNS, LED_COUNT, ROWS, flip_index, logical_index};

/// One frame of the 5x5 matrix in logical row-major order.
///
/// Row 0 is the top row, column 0 the left column. `None` means the cell is
/// off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorBuffer {
    cells: [Option<Rgb>; LED_COUNT],
}

impl ColorBuffer {
    /// An all-off frame.
    pub const fn new() -> Self {
        Self {
            cells: [None; LED_COUNT],
        }
    }

    /// A frame with every cell set to `color`.
    pub const fn filled(color: Rgb) -> Self {
        Self {
            cells: [Some(color); LED_COUNT],
        }
    }

    /// Build a frame lighting the given logical indices.
    ///
    /// Indices outside of the matrix are ignored.
    pub fn from_indices(indices: &[u8], color: Rgb) -> Self {
        let mut frame = Self::new();
        for &index in indices {
            frame.set(usize::from(index), Some(color));
        }
        frame
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied().flatten()
    }

    /// Set a cell by logical index, ignoring out of range indices.
    pub fn set(&mut self, index: usize, color: Option<Rgb>) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    pub fn get_at(&self, row: usize, col: usize) -> Option<Rgb> {
        if row >= ROWS || col >= COLUMNS {
            return None;
        }
        self.get(logical_index(row, col))
    }

    pub fn set_at(&mut self, row: usize, col: usize, color: Option<Rgb>) {
        if row < ROWS && col < COLUMNS {
            self.set(logical_index(row, col), color);
        }
    }

    pub fn clear(&mut self) {
        self.cells = [None; LED_COUNT];
    }

    pub fn fill(&mut self, color: Rgb) {
        self.cells = [Some(color); LED_COUNT];
    }

    /// Number of cells that are on.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Option<Rgb>; LED_COUNT] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Rgb>> + '_ {
        self.cells.iter().copied()
    }

    /// Reorder into physical wire order, see [`flip_index`].
    pub fn to_wire(&self) -> WireBuffer {
        let mut cells = [None; LED_COUNT];
        for (index, cell) in self.cells.iter().enumerate() {
            cells[flip_index(index)] = *cell;
        }
        WireBuffer { cells }
    }
}

/// The same 25 colors in the order the device wires them.
///
/// Only produced right before transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireBuffer {
    cells: [Option<Rgb>; LED_COUNT],
}

impl WireBuffer {
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Rgb>> + '_ {
        self.cells.iter().copied()
    }
}
