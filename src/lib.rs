//! Anigram - a 16x16, four-color pixel-art sprite animator.
//!
//! This crate provides the editing model behind the animator: frames of
//! indexed colors, the compact wire string they travel as, frame navigation
//! and editing, and timer-driven playback.
//!
//! # Architecture
//!
//! The crate is split into four main modules:
//!
//! - `model`: Colors, grid geometry, frames and the frame sequence
//! - `animation`: Wire format, playback scheduling and storage
//! - `session`: The editing façade plus its rendering and input seams
//! - `schema`: Configuration and wire record types
//!
//! # Example
//!
//! ```rust,no_run
//! use anigram::{
//!     model::Color,
//!     schema::{AnimationRecord, EditorConfig},
//!     session::{EditSession, TextSurface},
//! };
//!
//! let config = EditorConfig::default();
//! let record = AnimationRecord::new("Blink", "0".repeat(256) + &"1".repeat(256));
//! let mut session = EditSession::new(&record, &config, TextSurface::new(&config))?;
//!
//! session.select_color(Color::Dark);
//! session.paint_cell(3, 4)?;
//! session.next_frame();
//!
//! println!("{}", session.surface().render());
//! println!("{}", session.export_wire_string().len());
//! # Ok::<(), anigram::EditorError>(())
//! ```

pub mod animation;
pub mod error;
pub mod model;
pub mod schema;
pub mod session;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use error::{EditorError, FetchError};
pub use model::{Color, Frame, FrameStore};
pub use schema::{AnimationRecord, EditorConfig, PlaybackConfig};
pub use session::EditSession;
