//! A single grid snapshot.

use super::color::Color;
use super::grid::{CELL_COUNT, Coord, to_coord};

/// One frame: a color per cell, ordered by linear cell index.
///
/// Frames decoded from a short trailing chunk keep their logical length so
/// they re-encode to the same chunk. Cells past that length read as
/// background; the first write past it pads the frame to full length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: [Color; CELL_COUNT],
    len: usize,
}

impl Frame {
    /// All-background frame.
    pub fn blank() -> Self {
        Self::filled(Color::Background)
    }

    pub fn filled(color: Color) -> Self {
        Self {
            cells: [color; CELL_COUNT],
            len: CELL_COUNT,
        }
    }

    /// Build a frame from a chunk of wire codes. Characters past
    /// `CELL_COUNT` are ignored.
    pub fn from_codes(codes: &str) -> Self {
        let mut cells = [Color::Background; CELL_COUNT];
        let mut len = 0;
        for (cell, code) in cells.iter_mut().zip(codes.chars()) {
            *cell = Color::from_code(code);
            len += 1;
        }
        Self { cells, len }
    }

    /// Color at `index`, background past the logical length.
    #[inline]
    pub fn get(&self, index: usize) -> Color {
        self.cells.get(index).copied().unwrap_or_default()
    }

    /// O(1) single-cell write. `index` must be below `CELL_COUNT`.
    #[inline]
    pub fn set(&mut self, index: usize, color: Color) {
        debug_assert!(index < CELL_COUNT, "cell index {index} out of range");
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
            if index >= self.len {
                self.len = CELL_COUNT;
            }
        }
    }

    /// Number of cells carried on the wire.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True unless this frame came from a short trailing chunk.
    pub fn is_complete(&self) -> bool {
        self.len == CELL_COUNT
    }

    /// Append this frame's wire codes to `out`.
    pub fn write_codes(&self, out: &mut String) {
        out.extend(self.cells[..self.len].iter().map(|c| c.code()));
    }

    /// Append all `CELL_COUNT` codes, padding a short frame with background.
    pub fn write_padded_codes(&self, out: &mut String) {
        out.extend(self.cells.iter().map(|c| c.code()));
    }

    pub fn to_codes(&self) -> String {
        let mut out = String::with_capacity(self.len);
        self.write_codes(&mut out);
        out
    }

    /// Every cell of the grid with its (padded) color.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &color)| (to_coord(i), color))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}
