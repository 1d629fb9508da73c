//! Rendering sink and the geometry that feeds it.

use crate::model::{Color, Coord, Frame, GRID_SIDE, Palette};
use crate::schema::EditorConfig;

/// Write-only drawing target, e.g. a browser canvas.
pub trait Surface {
    /// Fill the square with top-left corner `(x, y)` and side `size`.
    fn draw_cell(&mut self, x: u32, y: u32, size: u32, color: &str);

    /// Show the frame counter text.
    fn frame_label(&mut self, _label: &str) {}
}

/// `"Frame 2 of 5"` for a zero-based cursor.
pub fn frame_label(cursor: usize, count: usize) -> String {
    format!("Frame {} of {}", cursor + 1, count)
}

/// Turns frames and cells into [`Surface`] calls.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    cell_size: u32,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            palette: Palette::new(&config.palette),
            cell_size: config.cell_size,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Side of the whole grid in pixels.
    pub fn surface_size(&self) -> u32 {
        self.cell_size * GRID_SIDE as u32
    }

    /// Pixel origin `(x, y)` of a cell.
    #[inline]
    pub fn cell_origin(&self, coord: Coord) -> (u32, u32) {
        (
            coord.col as u32 * self.cell_size,
            coord.row as u32 * self.cell_size,
        )
    }

    pub fn draw_cell<S: Surface + ?Sized>(&self, surface: &mut S, coord: Coord, color: Color) {
        let (x, y) = self.cell_origin(coord);
        surface.draw_cell(x, y, self.cell_size, self.palette.value(color));
    }

    /// One draw call per cell.
    pub fn draw_frame<S: Surface + ?Sized>(&self, surface: &mut S, frame: &Frame) {
        for (coord, color) in frame.cells() {
            self.draw_cell(surface, coord, color);
        }
    }
}

/// Text-mode surface: keeps the last color drawn in each cell.
///
/// Used by the CLI and handy for asserting on what was drawn.
#[derive(Debug, Clone)]
pub struct TextSurface {
    palette: Palette,
    cell_size: u32,
    cells: [[Color; GRID_SIDE]; GRID_SIDE],
    label: String,
    draw_calls: usize,
}

impl TextSurface {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            palette: Palette::new(&config.palette),
            cell_size: config.cell_size,
            cells: [[Color::Background; GRID_SIDE]; GRID_SIDE],
            label: String::new(),
            draw_calls: 0,
        }
    }

    /// Last color drawn at `coord`, background outside the grid.
    pub fn cell(&self, coord: Coord) -> Color {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .unwrap_or_default()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn reset_draw_calls(&mut self) {
        self.draw_calls = 0;
    }

    /// Grid as block characters, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(GRID_SIDE * (GRID_SIDE * 2 * 3 + 1));
        for row in &self.cells {
            for &color in row {
                let glyph = match color {
                    Color::Background => ' ',
                    Color::Light => '░',
                    Color::Medium => '▒',
                    Color::Dark => '█',
                };
                out.push(glyph);
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl Surface for TextSurface {
    fn draw_cell(&mut self, x: u32, y: u32, size: u32, color: &str) {
        self.draw_calls += 1;
        let size = size.max(1);
        let (row, col) = ((y / size) as usize, (x / size) as usize);
        if row < GRID_SIDE && col < GRID_SIDE {
            self.cells[row][col] = self.palette.color_of(color);
        }
    }

    fn frame_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}
