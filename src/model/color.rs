//! Indexed colors and their single-character wire codes.

use serde::{Deserialize, Serialize};

use crate::schema::PaletteConfig;

/// One of the four paintable colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    /// Default/erased cell.
    #[default]
    Background = 0,
    Light = 1,
    Medium = 2,
    Dark = 3,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; 4] = [Color::Background, Color::Light, Color::Medium, Color::Dark];

    /// Decode a wire character. Anything outside `0..=3` is background.
    #[inline]
    pub fn from_code(code: char) -> Self {
        match code {
            '1' => Color::Light,
            '2' => Color::Medium,
            '3' => Color::Dark,
            _ => Color::Background,
        }
    }

    /// Wire character for this color.
    #[inline]
    pub fn code(self) -> char {
        match self {
            Color::Background => '0',
            Color::Light => '1',
            Color::Medium => '2',
            Color::Dark => '3',
        }
    }

    /// Color from its numeric index, background for anything else.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Color::Light,
            2 => Color::Medium,
            3 => Color::Dark,
            _ => Color::Background,
        }
    }
}

/// Display values (CSS colors) for the four indexed colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    values: [String; 4],
}

impl Palette {
    pub fn new(config: &PaletteConfig) -> Self {
        Self {
            values: [
                config.background.clone(),
                config.light.clone(),
                config.medium.clone(),
                config.dark.clone(),
            ],
        }
    }

    /// Display value handed to the rendering surface.
    #[inline]
    pub fn value(&self, color: Color) -> &str {
        &self.values[color as usize]
    }

    /// Inverse of [`Palette::value`]. Unknown values map to background,
    /// so they encode as `0`.
    pub fn color_of(&self, value: &str) -> Color {
        Color::ALL
            .into_iter()
            .find(|&c| self.values[c as usize].eq_ignore_ascii_case(value))
            .unwrap_or(Color::Background)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(&PaletteConfig::default())
    }
}
