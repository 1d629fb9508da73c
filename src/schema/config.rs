//! Configuration types for the editor and playback.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Color, GRID_SIDE};

/// Top-level editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Size of one grid cell on the drawing surface, in pixels.
    pub cell_size: u32,
    /// Display values for the four indexed colors.
    pub palette: PaletteConfig,
    /// Playback timing.
    pub playback: PlaybackConfig,
    /// Paint color selected when a session starts.
    pub initial_color: Color,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: 16,
            palette: PaletteConfig::default(),
            playback: PlaybackConfig::default(),
            initial_color: Color::Medium,
        }
    }
}

/// Display values (CSS colors) per indexed color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub background: String,
    pub light: String,
    pub medium: String,
    pub dark: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: "#d2d2d2".into(),
            light: "#ffffff".into(),
            medium: "#999999".into(),
            dark: "#000000".into(),
        }
    }
}

impl PaletteConfig {
    fn values(&self) -> [&str; 4] {
        [&self.background, &self.light, &self.medium, &self.dark]
    }
}

/// Inter-frame delay and loop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Delay between frames in milliseconds.
    pub delay_ms: u64,
    /// Restart from the first frame after the last one.
    pub looping: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            delay_ms: 325,
            looping: false,
        }
    }
}

/// Live playback inputs, read again on every tick.
pub trait PlaybackSettings {
    fn delay(&self) -> Duration;
    fn looping(&self) -> bool;
}

impl PlaybackSettings for PlaybackConfig {
    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    fn looping(&self) -> bool {
        self.looping
    }
}

impl EditorConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The whole grid must stay addressable in u32 pixels.
        if self.cell_size == 0 || self.cell_size.checked_mul(GRID_SIDE as u32).is_none() {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        let values = self.palette.values();
        for (i, value) in values.iter().enumerate() {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyPaletteValue(Color::from_index(i as u8)));
            }
            if values[..i].iter().any(|v| v.eq_ignore_ascii_case(value)) {
                return Err(ConfigError::DuplicatePaletteValue(value.to_string()));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cell size {0} is out of range")]
    InvalidCellSize(u32),
    #[error("Palette value for {0:?} must not be empty")]
    EmptyPaletteValue(Color),
    #[error("Palette value {0} is used for more than one color")]
    DuplicatePaletteValue(String),
    #[error("Could not parse configuration: {0}")]
    Parse(serde_json::Error),
}
