//! Ordered frame sequence with the current-frame cursor.

use log::debug;

use super::color::Color;
use super::frame::Frame;
use super::grid::checked_index;
use crate::error::EditorError;

/// Non-empty sequence of frames plus the cursor of the frame being edited.
///
/// Invariant: `frames` is never empty and `cursor < frames.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStore {
    frames: Vec<Frame>,
    cursor: usize,
}

impl FrameStore {
    /// Take ownership of `frames`, cursor at the first one.
    pub fn new(frames: Vec<Frame>) -> Result<Self, EditorError> {
        if frames.is_empty() {
            return Err(EditorError::EmptyAnimation);
        }
        Ok(Self { frames, cursor: 0 })
    }

    /// Single all-background frame.
    pub fn blank() -> Self {
        Self {
            frames: vec![Frame::blank()],
            cursor: 0,
        }
    }

    pub fn first_frame(&mut self) {
        self.cursor = 0;
    }

    /// No-op at the first frame.
    pub fn prev_frame(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Advance, appending a blank frame first when at the last one.
    pub fn next_frame(&mut self) {
        if self.cursor == self.frames.len() - 1 {
            self.frames.push(Frame::blank());
            debug!("appended frame {}", self.frames.len());
        }
        self.cursor += 1;
    }

    pub fn last_frame(&mut self) {
        self.cursor = self.frames.len() - 1;
    }

    /// Move the cursor to an explicit frame.
    pub fn set_cursor(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.frames.len() {
            return Err(EditorError::FrameOutOfRange {
                index,
                count: self.frames.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Remove the current frame.
    ///
    /// The cursor keeps its number and so lands on the following frame,
    /// except when the last frame was removed, where it steps back by one.
    /// Removing the only frame is rejected.
    pub fn delete_current(&mut self) -> Result<Frame, EditorError> {
        if self.frames.len() == 1 {
            return Err(EditorError::EmptyAnimation);
        }
        let removed = self.frames.remove(self.cursor);
        if self.cursor == self.frames.len() {
            self.cursor -= 1;
        }
        debug!(
            "deleted frame, {} left, cursor at {}",
            self.frames.len(),
            self.cursor
        );
        Ok(removed)
    }

    pub fn clear_current(&mut self) {
        self.frames[self.cursor] = Frame::blank();
    }

    /// Overwrite the current frame.
    pub fn replace_current(&mut self, frame: Frame) {
        self.frames[self.cursor] = frame;
    }

    /// Write one cell of the current frame. Returns its linear index.
    pub fn set_cell(&mut self, row: usize, col: usize, color: Color) -> Result<usize, EditorError> {
        let index = checked_index(row, col)?;
        self.frames[self.cursor].set(index, color);
        Ok(index)
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.cursor]
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Zero-based cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_last(&self) -> bool {
        self.cursor == self.frames.len() - 1
    }
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::blank()
    }
}
