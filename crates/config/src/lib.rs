//! Shared configuration for hexagon tile generation
//!
//! This crate provides the single source of truth for the region colors
//! written into template and mask images. The palette can be overridden
//! from a JSON file; any color left out of the file keeps its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels
pub type Rgba = [u8; 4];

/// Outline color of the template image
pub const BORDER_COLOR: Rgba = [0x00, 0x00, 0x00, 0xff];

/// Mask color for the outline and everything inside it
pub const MIDDLE_COLOR: Rgba = [0xff, 0xff, 0xff, 0xff];

/// Mask color for the upper-left corner outside the hexagon
pub const UPPER_LEFT_COLOR: Rgba = [0xff, 0xff, 0x00, 0xff];

/// Mask color for the upper-right corner outside the hexagon
pub const UPPER_RIGHT_COLOR: Rgba = [0xff, 0x00, 0xff, 0xff];

/// Mask color for the lower-left corner outside the hexagon
pub const LOWER_LEFT_COLOR: Rgba = [0x00, 0xff, 0x00, 0xff];

/// Mask color for the lower-right corner outside the hexagon
pub const LOWER_RIGHT_COLOR: Rgba = [0x00, 0x00, 0xff, 0xff];

/// Value of every canvas pixel that was never drawn
pub const BLANK_COLOR: Rgba = [0x00, 0x00, 0x00, 0x00];

/// Environment variable naming a palette file
pub const PALETTE_ENV: &str = "HEXTILE_PALETTE";

/// Errors raised while loading a palette
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read palette {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid palette: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Border color {0:?} is the blank canvas value and would leave the template empty")]
    TransparentBorder(Rgba),

    #[error("Palette colors must be distinct, {first} and {second} are both {color:?}")]
    DuplicateColor {
        first: &'static str,
        second: &'static str,
        color: Rgba,
    },
}

/// Region colors used by the rasterizer and the mask deriver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub border: Rgba,
    pub middle: Rgba,
    pub upper_left: Rgba,
    pub upper_right: Rgba,
    pub lower_left: Rgba,
    pub lower_right: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: BORDER_COLOR,
            middle: MIDDLE_COLOR,
            upper_left: UPPER_LEFT_COLOR,
            upper_right: UPPER_RIGHT_COLOR,
            lower_left: LOWER_LEFT_COLOR,
            lower_right: LOWER_RIGHT_COLOR,
        }
    }
}

impl Palette {
    /// Parse a palette from JSON, e.g. `{"middle": [255, 255, 255, 255]}`
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let palette: Palette = serde_json::from_str(json)?;
        palette.validate()?;
        Ok(palette)
    }

    /// Load a palette from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Resolve the palette from an explicit path, then `HEXTILE_PALETTE`,
    /// falling back to the defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match std::env::var_os(PALETTE_ENV) {
                Some(path) => Self::load(PathBuf::from(path)),
                None => Ok(Self::default()),
            },
        }
    }

    /// Mask colors (middle and the four quadrants) paired with their names
    pub fn mask_colors(&self) -> [(&'static str, Rgba); 5] {
        [
            ("middle", self.middle),
            ("upper_left", self.upper_left),
            ("upper_right", self.upper_right),
            ("lower_left", self.lower_left),
            ("lower_right", self.lower_right),
        ]
    }

    /// The mask is a lookup table, so its colors have to be unambiguous
    fn validate(&self) -> Result<(), ConfigError> {
        if self.border == BLANK_COLOR {
            return Err(ConfigError::TransparentBorder(self.border));
        }

        let colors = self.mask_colors();
        for (i, &(first, color)) in colors.iter().enumerate() {
            if let Some(&(second, _)) = colors[i + 1..].iter().find(|(_, c)| *c == color) {
                return Err(ConfigError::DuplicateColor {
                    first,
                    second,
                    color,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.border, BORDER_COLOR);
        assert_eq!(palette.middle, MIDDLE_COLOR);
        assert_eq!(palette.upper_left, UPPER_LEFT_COLOR);
        assert_eq!(palette.lower_right, LOWER_RIGHT_COLOR);
        assert!(palette.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let palette = Palette::from_json_str(r#"{"middle": [1, 2, 3, 255]}"#).unwrap();
        assert_eq!(palette.middle, [1, 2, 3, 255]);
        assert_eq!(palette.border, BORDER_COLOR);
        assert_eq!(palette.upper_right, UPPER_RIGHT_COLOR);
    }

    #[test]
    fn test_duplicate_mask_color_rejected() {
        let result = Palette::from_json_str(r#"{"lower_left": [255, 255, 0, 255]}"#);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateColor {
                first: "upper_left",
                second: "lower_left",
                ..
            })
        ));
    }

    #[test]
    fn test_transparent_border_rejected() {
        let result = Palette::from_json_str(r#"{"border": [0, 0, 0, 0]}"#);
        assert!(matches!(
            result,
            Err(ConfigError::TransparentBorder(BLANK_COLOR))
        ));
        // any other fully transparent color is still drawable
        assert!(Palette::from_json_str(r#"{"border": [255, 0, 0, 0]}"#).is_ok());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Palette::from_json_str("{\"border\": [0, 0]}"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Palette::load("/nonexistent/palette.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = std::env::temp_dir().join("hexagon_config_test_palette.json");
        std::fs::write(&path, r#"{"border": [9, 9, 9, 255]}"#).unwrap();
        let palette = Palette::resolve(Some(path.as_path())).unwrap();
        assert_eq!(palette.border, [9, 9, 9, 255]);
        std::fs::remove_file(&path).ok();
    }
}
