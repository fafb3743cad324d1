//! Values computed from a theme's colors rather than stored in it.
//!
//! Three derived values appear in every theme block:
//!
//! | Token | Source role | Function |
//! |-------|-------------|----------|
//! | `--accent-contrast` | `base` | [`contrast_color`] |
//! | `--shadow-soft` | `base` | [`shadow_color`] |
//! | `--accent-soft` | `blue` | [`alpha_blend`] at [`ACCENT_SOFT_ALPHA`] |
//!
//! Contrast and shadow both branch on [`brightness`], so they always agree on
//! whether a base color is light or dark.
//!
//! ## Brightness
//!
//! Perceived brightness is the weighted channel sum `0.299 R + 0.587 G +
//! 0.114 B` (ITU-R BT.601), with each channel in `0..=255`. It is computed
//! in integer thousandths so the threshold is exact: a color is
//! [`Brightness::Light`] only when the sum is strictly above 128. Mid gray
//! `#808080` sits exactly on 128 and is dark.
//!
//! ```rust
//! use echofield_palette::derive::{brightness, contrast_color, Brightness};
//!
//! assert_eq!(brightness("#eff1f5"), Brightness::Light);
//! assert_eq!(brightness("#808080"), Brightness::Dark);
//! assert_eq!(contrast_color("#1e1e2e"), "#ffffff");
//! ```

use crate::color::{Rgb, Rgba};

/// Weighted sums above this (in thousandths) are light.
const LIGHT_THRESHOLD_MILLI: u32 = 128_000;

/// Opacity used for the soft accent.
pub const ACCENT_SOFT_ALPHA: f64 = 0.12;

pub const CONTRAST_ON_LIGHT: &str = "#000000";
pub const CONTRAST_ON_DARK: &str = "#ffffff";

pub const SHADOW_ON_LIGHT: &str = "0 8px 16px rgba(15, 23, 42, 0.06)";
pub const SHADOW_ON_DARK: &str = "0 8px 16px rgba(0, 0, 0, 0.3)";

/// Light/dark classification of a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    Light,
    Dark,
}

impl Brightness {
    pub fn contrast_color(self) -> &'static str {
        match self {
            Brightness::Light => CONTRAST_ON_LIGHT,
            Brightness::Dark => CONTRAST_ON_DARK,
        }
    }

    pub fn shadow_color(self) -> &'static str {
        match self {
            Brightness::Light => SHADOW_ON_LIGHT,
            Brightness::Dark => SHADOW_ON_DARK,
        }
    }
}

impl std::fmt::Display for Brightness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Brightness::Light => write!(f, "light"),
            Brightness::Dark => write!(f, "dark"),
        }
    }
}

/// Weighted channel sum in thousandths (`r*299 + g*587 + b*114`).
fn weighted_milli(Rgb(r, g, b): Rgb) -> u32 {
    r as u32 * 299 + g as u32 * 587 + b as u32 * 114
}

/// Perceived brightness in `0.0..=255.0`.
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    weighted_milli(rgb) as f64 / 1000.0
}

pub fn classify(rgb: Rgb) -> Brightness {
    if weighted_milli(rgb) > LIGHT_THRESHOLD_MILLI {
        Brightness::Light
    } else {
        Brightness::Dark
    }
}

/// Classifies a `#RRGGBB` color.
///
/// Malformed input is treated as black, i.e. dark.
pub fn brightness(hex: &str) -> Brightness {
    classify(Rgb::from_hex(hex).unwrap_or_default())
}

/// Text color for content drawn on `hex`: black on light, white on dark.
pub fn contrast_color(hex: &str) -> &'static str {
    brightness(hex).contrast_color()
}

/// Box-shadow specification for surfaces on `hex`.
pub fn shadow_color(hex: &str) -> &'static str {
    brightness(hex).shadow_color()
}

/// Combines `hex` with `alpha` into an `rgba()` value.
///
/// The opacity is carried verbatim. Malformed hex yields zero channels.
pub fn alpha_blend(hex: &str, alpha: f64) -> Rgba {
    Rgba::new(Rgb::from_hex(hex).unwrap_or_default(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_latte_base_is_light() {
        let rgb = Rgb::from_hex("#eff1f5").unwrap();
        assert!(perceived_brightness(rgb) > 238.0);
        assert_eq!(brightness("#eff1f5"), Brightness::Light);
        assert_eq!(contrast_color("#eff1f5"), "#000000");
        assert_eq!(shadow_color("#eff1f5"), SHADOW_ON_LIGHT);
    }

    #[test]
    fn test_mocha_base_is_dark() {
        assert_eq!(brightness("#1e1e2e"), Brightness::Dark);
        assert_eq!(contrast_color("#1e1e2e"), "#ffffff");
        assert_eq!(shadow_color("#1e1e2e"), SHADOW_ON_DARK);
    }

    #[test]
    fn test_threshold_exactly_128_is_dark() {
        // 128 * (299 + 587 + 114) = 128_000
        assert_eq!(weighted_milli(Rgb(128, 128, 128)), 128_000);
        assert_eq!(brightness("#808080"), Brightness::Dark);
        assert_eq!(contrast_color("#808080"), "#ffffff");
    }

    #[test]
    fn test_threshold_one_step_above_is_light() {
        // 128_000 + 114
        assert_eq!(brightness("#808081"), Brightness::Light);
        // 128_000 - 114
        assert_eq!(brightness("#80807f"), Brightness::Dark);
    }

    #[test]
    fn test_alpha_blend_accent() {
        let soft = alpha_blend("#1e66f5", 0.12);
        assert_eq!(soft.channels(), (30, 102, 245));
        assert_eq!(soft.alpha, 0.12);
        assert_eq!(soft.to_string(), "rgba(30, 102, 245, 0.12)");
    }

    #[test]
    fn test_alpha_blend_malformed_is_zero() {
        let bad = alpha_blend("1e66f5", 0.5);
        assert_eq!(bad.channels(), (0, 0, 0));
        assert_eq!(bad.alpha, 0.5);
        assert_eq!(alpha_blend("#xyzxyz", 0.12).channels(), (0, 0, 0));
    }

    #[test]
    fn test_malformed_base_is_dark() {
        assert_eq!(brightness("white"), Brightness::Dark);
        assert_eq!(contrast_color(""), "#ffffff");
        assert_eq!(shadow_color("#fff"), SHADOW_ON_DARK);
    }

    proptest! {
        #[test]
        fn contrast_and_shadow_agree(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = Rgb(r, g, b).to_hex();
            let light = contrast_color(&hex) == CONTRAST_ON_LIGHT;
            let light_shadow = shadow_color(&hex) == SHADOW_ON_LIGHT;
            prop_assert_eq!(light, light_shadow);
        }

        #[test]
        fn brightness_is_monotonic_per_channel(r in 0u8..255, g in any::<u8>(), b in any::<u8>()) {
            let lower = classify(Rgb(r, g, b));
            let higher = classify(Rgb(r + 1, g, b));
            if lower == Brightness::Light {
                prop_assert_eq!(higher, Brightness::Light);
            }
        }

        #[test]
        fn alpha_blend_is_pure(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), alpha in 0.0f64..=1.0) {
            let hex = Rgb(r, g, b).to_hex();
            let first = alpha_blend(&hex, alpha);
            let second = alpha_blend(&hex, alpha);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.channels(), (r, g, b));
            prop_assert_eq!(first.alpha, alpha);
        }

        #[test]
        fn case_does_not_change_classification(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = Rgb(r, g, b).to_hex();
            prop_assert_eq!(brightness(&hex), brightness(&hex.to_uppercase()));
        }
    }
}
