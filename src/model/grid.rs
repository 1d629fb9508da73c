//! Linear cell index ↔ (row, column) mapping for the fixed square grid.

use crate::error::EditorError;

/// Cells per side.
pub const GRID_SIDE: usize = 16;

/// Cells per frame.
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Grid position of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major linear index.
    #[inline]
    pub fn index(self) -> usize {
        to_index(self.row, self.col)
    }
}

/// Row-major: `col = index % N`, `row = index / N`.
#[inline]
pub fn to_coord(index: usize) -> Coord {
    Coord {
        row: index / GRID_SIDE,
        col: index % GRID_SIDE,
    }
}

#[inline]
pub fn to_index(row: usize, col: usize) -> usize {
    row * GRID_SIDE + col
}

/// [`to_index`] that rejects coordinates outside the grid.
pub fn checked_index(row: usize, col: usize) -> Result<usize, EditorError> {
    if row >= GRID_SIDE || col >= GRID_SIDE {
        return Err(EditorError::CellOutOfRange { row, col });
    }
    Ok(to_index(row, col))
}
