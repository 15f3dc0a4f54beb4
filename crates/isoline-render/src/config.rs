//! Render configuration.

use crate::error::{RenderError, Result};
use serde::{Deserialize, Serialize};

/// Largest canvas side, in pixels, the renderer will allocate.
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Configuration for drawing segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels between adjacent grid samples
    pub pixels_per_cell: f32,
    /// Blank border around the grid, in pixels
    pub margin: f32,
    /// Line width in pixels
    pub line_width: f32,
    /// Line color as `#RRGGBB` or `#RRGGBBAA`
    pub line_color: String,
    /// Background color as `#RRGGBB` or `#RRGGBBAA`
    pub background: String,
    /// Draw row 0 at the bottom (y axis pointing up, as in a plot)
    pub flip_y: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pixels_per_cell: 24.0,
            margin: 12.0,
            line_width: 1.5,
            line_color: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
            flip_y: true,
        }
    }
}

impl RenderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RENDER_PIXELS_PER_CELL") {
            if let Ok(ppc) = val.parse() {
                config.pixels_per_cell = ppc;
            }
        }

        if let Ok(val) = std::env::var("RENDER_LINE_WIDTH") {
            if let Ok(width) = val.parse() {
                config.line_width = width;
            }
        }

        if let Ok(val) = std::env::var("RENDER_LINE_COLOR") {
            config.line_color = val;
        }

        if let Ok(val) = std::env::var("RENDER_FLIP_Y") {
            config.flip_y = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.pixels_per_cell.is_finite() && self.pixels_per_cell > 0.0) {
            return Err(RenderError::invalid_config("pixels_per_cell must be > 0"));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(RenderError::invalid_config("margin must be >= 0"));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(RenderError::invalid_config("line_width must be > 0"));
        }
        self.line_rgba()?;
        self.background_rgba()?;
        Ok(())
    }

    pub fn line_rgba(&self) -> Result<[u8; 4]> {
        hex_to_rgba(&self.line_color).ok_or_else(|| {
            RenderError::invalid_config(format!("bad line_color '{}'", self.line_color))
        })
    }

    pub fn background_rgba(&self) -> Result<[u8; 4]> {
        hex_to_rgba(&self.background).ok_or_else(|| {
            RenderError::invalid_config(format!("bad background '{}'", self.background))
        })
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
pub fn hex_to_rgba(hex: &str) -> Option<[u8; 4]> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#FF0000"), Some([255, 0, 0, 255]));
        assert_eq!(hex_to_rgba("00ff00"), Some([0, 255, 0, 255]));
        assert_eq!(hex_to_rgba("#0000FF80"), Some([0, 0, 255, 128]));
        assert_eq!(hex_to_rgba("#GGGGGG"), None);
        assert_eq!(hex_to_rgba("#FFF"), None);
        assert_eq!(hex_to_rgba("#ÿÿÿ"), None);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = RenderConfig {
            pixels_per_cell: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            line_color: "black".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RenderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig = serde_json::from_str(r##"{"line_color": "#FF0000"}"##).unwrap();
        assert_eq!(config.line_color, "#FF0000");
        assert_eq!(config.pixels_per_cell, 24.0);
        assert!(config.flip_y);
    }
}
