//! Animation wire format, playback and storage.
//!
//! # Wire Format
//!
//! An animation travels as a JSON record whose `data` field is every frame's
//! color codes concatenated, 256 characters per frame:
//!
//! ```text
//! { "title": "Blink", "data": "0000...0000" "1111...1111" ... }
//!                              \_ frame 0 _/ \_ frame 1 _/
//! Codes: 0 background, 1 light, 2 medium, 3 dark (anything else: background)
//! ```
//!
//! A trailing chunk shorter than 256 codes is kept as a short frame and reads
//! as background past its end.

pub mod format;
mod library;
mod player;

pub use format::DecodeAnomaly;
#[cfg(not(target_arch = "wasm32"))]
pub use library::AnimationLibrary;
pub use library::{AnimationSource, is_valid_id};
pub use player::{PlaybackScheduler, PlaybackState, PlaybackTicket, TickHandle, TickOutcome};
