//! Error types shared by the editing model, codec and persistence layers.

use crate::schema::ConfigError;

/// Failures surfaced by editing operations and session construction.
///
/// Codec-level anomalies (unknown color codes, short trailing frames) are
/// recovered locally and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Animation must contain at least one frame")]
    EmptyAnimation,
    #[error("Cell ({row}, {col}) is outside the grid")]
    CellOutOfRange { row: usize, col: usize },
    #[error("Frame {index} is out of range ({count} frames)")]
    FrameOutOfRange { index: usize, count: usize },
    #[error("Could not load animation: {0}")]
    Fetch(#[from] FetchError),
    #[error("Invalid editor configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Failures from an animation source (network, disk).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Animation {0} not found")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed animation record: {0}")]
    Malformed(#[from] serde_json::Error),
}
