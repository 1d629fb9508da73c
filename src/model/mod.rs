//! Model module - Colors, grid geometry, frames and the frame sequence.

mod color;
mod frame;
mod grid;
mod store;

pub use color::*;
pub use frame::*;
pub use grid::*;
pub use store::*;
