//! Position-based color assignment.

use ratatui::style::Color;
use std::str::FromStr;

use crate::config::error::ConfigError;

/// Colors of [`crate::config::schema::DEFAULT_PALETTE`] as RGB values.
const DEFAULT_COLORS: [Color; 5] = [
    Color::Rgb(0xFD, 0xA4, 0xAF),
    Color::Rgb(0xA5, 0xB4, 0xFC),
    Color::Rgb(0x6E, 0xE7, 0xB7),
    Color::Rgb(0xFB, 0xCF, 0xE8),
    Color::Rgb(0xFD, 0xE6, 0x8A),
];

/// A non-empty, fixed list of colors indexed by entity position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl Palette {
    /// Parses colors such as `#FDA4AF` or `lightblue`.
    pub fn from_strs<S: AsRef<str>>(colors: &[S]) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "tui.palette".to_string(),
                value: "[]".to_string(),
                message: "palette needs at least one color".to_string(),
            });
        }
        let colors = colors
            .iter()
            .map(|c| {
                let raw = c.as_ref();
                Color::from_str(raw).map_err(|e| ConfigError::InvalidValue {
                    key: "tui.palette".to_string(),
                    value: raw.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Color for the entity at `position`, wrapping around the palette.
    pub fn color_for(&self, position: usize) -> Color {
        self.colors[position % self.colors.len()]
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
