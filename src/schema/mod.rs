//! Schema module - Configuration and wire record types.

mod config;
mod record;

pub use config::*;
pub use record::*;
