//! Input adapters: pointer positions and keyboard commands.

use crate::model::{Coord, GRID_SIDE};

/// Pointer position in surface-local pixels, from mouse or touch alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
}

impl PointerInput {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Grid cell under the pointer, `None` outside the grid.
    pub fn cell(self, cell_size: u32) -> Option<Coord> {
        if cell_size == 0 || !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }
        if self.x < 0.0 || self.y < 0.0 {
            return None;
        }
        let size = f64::from(cell_size);
        let row = (self.y / size).floor() as usize;
        let col = (self.x / size).floor() as usize;
        (row < GRID_SIDE && col < GRID_SIDE).then_some(Coord { row, col })
    }
}

/// Whether a paint stroke is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    pressed: bool,
}

impl PointerTracker {
    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Editor actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FirstFrame,
    PreviousFrame,
    NextFrame,
    LastFrame,
    Clear,
    Copy,
    Paste,
    DeleteFrame,
    Play,
    Stop,
    Save,
}

impl Command {
    /// Map a `KeyboardEvent.code` value.
    pub fn from_key(code: &str) -> Option<Self> {
        let command = match code {
            "ArrowLeft" => Command::PreviousFrame,
            "ArrowRight" => Command::NextFrame,
            "Home" => Command::FirstFrame,
            "End" => Command::LastFrame,
            "KeyC" => Command::Clear,
            "KeyY" => Command::Copy,
            "KeyV" => Command::Paste,
            "Delete" | "Backspace" => Command::DeleteFrame,
            "KeyP" => Command::Play,
            "Space" => Command::Stop,
            "KeyS" => Command::Save,
            _ => return None,
        };
        Some(command)
    }
}
