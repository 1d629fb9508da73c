//! Wire string format: frames concatenated, `CELL_COUNT` codes each.

use std::fmt;

use crate::model::{CELL_COUNT, Frame};

/// A wire string whose length is not a multiple of the frame size.
///
/// Not an error: the trailing chunk is kept as a short frame and reads as
/// background past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeAnomaly {
    /// Index of the short frame.
    pub frame: usize,
    /// Cells actually present in it.
    pub cells: usize,
}

impl fmt::Display for DecodeAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {} has {} of {} cells",
            self.frame, self.cells, CELL_COUNT
        )
    }
}

/// Split a wire string into frames of `CELL_COUNT` codes.
///
/// The final chunk may be short and is kept verbatim. Empty input yields no
/// frames; callers that need a non-empty animation must reject that.
pub fn decode(data: &str) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(data.len().div_ceil(CELL_COUNT));
    let mut start = 0;
    let mut count = 0;
    for (i, _) in data.char_indices() {
        if count == CELL_COUNT {
            frames.push(Frame::from_codes(&data[start..i]));
            start = i;
            count = 0;
        }
        count += 1;
    }
    if count > 0 {
        frames.push(Frame::from_codes(&data[start..]));
    }
    frames
}

/// Concatenate every frame's codes in order.
///
/// Only the final frame may go out short. A short frame that has since
/// moved away from the end is padded, or every frame after it would shift.
pub fn encode(frames: &[Frame]) -> String {
    let mut out = String::with_capacity(frames.len() * CELL_COUNT);
    let last = frames.len().saturating_sub(1);
    for (i, frame) in frames.iter().enumerate() {
        if i == last {
            frame.write_codes(&mut out);
        } else {
            frame.write_padded_codes(&mut out);
        }
    }
    out
}

/// Report a short trailing chunk, if any.
pub fn inspect(data: &str) -> Option<DecodeAnomaly> {
    let total = data.chars().count();
    let cells = total % CELL_COUNT;
    (cells != 0).then_some(DecodeAnomaly {
        frame: total / CELL_COUNT,
        cells,
    })
}
