//! Hex color parsing for theme tables.
//!
//! Theme palettes store every role as a `#RRGGBB` string. This module turns
//! those strings into channel values for the derived-value functions and
//! formats the two color shapes the stylesheet uses:
//!
//! - [`Rgb`]: a plain channel triplet, parsed from `#RRGGBB` (case-insensitive)
//! - [`Rgba`]: channels plus an opacity, rendered as `rgba(r, g, b, a)`
//!
//! # Example
//!
//! ```rust
//! use echofield_palette::color::{Rgb, Rgba};
//!
//! let blue = Rgb::from_hex("#1e66f5").unwrap();
//! assert_eq!(blue, Rgb(30, 102, 245));
//!
//! let soft = Rgba::new(blue, 0.12);
//! assert_eq!(soft.to_string(), "rgba(30, 102, 245, 0.12)");
//! ```

use std::fmt;

use serde::Serialize;

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The value does not start with `#`.
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    /// The value has the wrong number of digits.
    #[error("color '{value}' must have exactly 6 hex digits, found {len}")]
    InvalidLength { value: String, len: usize },

    /// The value contains a non-hex character.
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#RRGGBB` color. Hex digits are case-insensitive.
    ///
    /// Three-digit shorthand and alpha suffixes are rejected: theme tables
    /// always carry the full six digits.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(value.to_string()))?;

        // Checked before slicing so multi-byte input can never split a char.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(value.to_string()));
        }
        if hex.len() != 6 {
            return Err(ColorError::InvalidLength {
                value: value.to_string(),
                len: hex.len(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidDigit(value.to_string()))
        };

        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Nearest entry in the xterm 256-color palette.
    ///
    /// Candidates are the closest 6x6x6 cube color and the closest step of
    /// the gray ramp; whichever lies nearer in RGB space wins, the cube on
    /// ties.
    pub fn to_ansi256(self) -> u8 {
        let Rgb(r, g, b) = self;

        let level = |c: u8| {
            CUBE_LEVELS
                .iter()
                .enumerate()
                .min_by_key(|&(_, l)| (c as i32 - *l as i32).abs())
                .map_or(0, |(i, _)| i)
        };
        let (ri, gi, bi) = (level(r), level(g), level(b));
        let cube = Rgb(CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
        let cube_index = 16 + 36 * ri as u8 + 6 * gi as u8 + bi as u8;

        let mean = (r as u16 + g as u16 + b as u16) / 3;
        let step = (mean.saturating_sub(3) / 10).min(23) as u8;
        let gray_value = 8 + 10 * step;
        let gray = Rgb(gray_value, gray_value, gray_value);

        if self.distance(gray) < self.distance(cube) {
            232 + step
        } else {
            cube_index
        }
    }

    fn distance(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
        d(self.0, other.0) + d(self.1, other.1) + d(self.2, other.2)
    }
}

/// Channel values of the xterm color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// An RGB color with an opacity, as written into CSS.
///
/// The opacity is kept exactly as given: no clamping, no rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// The three channel integers.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.0, self.rgb.1, self.rgb.2, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Rgb::from_hex("#ff6b35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb(0, 0, 0));
        assert_eq!(Rgb::from_hex("#ffffff").unwrap(), Rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(Rgb::from_hex("#FF6B35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(Rgb::from_hex("#1E66f5").unwrap(), Rgb(30, 102, 245));
    }

    #[test]
    fn test_parse_hex_missing_hash() {
        assert_eq!(
            Rgb::from_hex("ff6b35"),
            Err(ColorError::MissingHash("ff6b35".into()))
        );
    }

    #[test]
    fn test_parse_hex_wrong_length() {
        assert!(matches!(
            Rgb::from_hex("#fff"),
            Err(ColorError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            Rgb::from_hex("#eff1f5e6"),
            Err(ColorError::InvalidLength { len: 8, .. })
        ));
        assert!(Rgb::from_hex("#").is_err());
    }

    #[test]
    fn test_parse_hex_invalid_digits() {
        assert!(matches!(
            Rgb::from_hex("#gggggg"),
            Err(ColorError::InvalidDigit(_))
        ));
        // from_str_radix alone would accept a sign
        assert!(Rgb::from_hex("#+fffff").is_err());
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[test]
    fn test_to_hex_round_trip() {
        let rgb = Rgb::from_hex("#EFF1F5").unwrap();
        assert_eq!(rgb.to_hex(), "#eff1f5");
    }

    #[test]
    fn test_rgba_display_keeps_alpha_verbatim() {
        let rgba = Rgba::new(Rgb(30, 102, 245), 0.12);
        assert_eq!(rgba.to_string(), "rgba(30, 102, 245, 0.12)");

        let rgba = Rgba::new(Rgb(0, 0, 0), 0.3);
        assert_eq!(rgba.to_string(), "rgba(0, 0, 0, 0.3)");

        let rgba = Rgba::new(Rgb(1, 2, 3), 1.0);
        assert_eq!(rgba.to_string(), "rgba(1, 2, 3, 1)");
    }

    #[test]
    fn test_to_ansi256_grayscale() {
        assert_eq!(Rgb(0, 0, 0).to_ansi256(), 16);
        assert_eq!(Rgb(255, 255, 255).to_ansi256(), 231);
        let mid = Rgb(128, 128, 128).to_ansi256();
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_to_ansi256_prefers_exact_ramp_step() {
        // #808080 is step 12 of the gray ramp
        assert_eq!(Rgb(128, 128, 128).to_ansi256(), 244);
        // #5f5f5f sits on the cube
        assert_eq!(Rgb(95, 95, 95).to_ansi256(), 59);
    }

    #[test]
    fn test_to_ansi256_color_cube() {
        assert_eq!(Rgb(255, 0, 0).to_ansi256(), 196);
        assert_eq!(Rgb(0, 255, 0).to_ansi256(), 46);
        assert_eq!(Rgb(0, 0, 255).to_ansi256(), 21);
    }
}
