//! Color themes and CSS custom-property generation.
//!
//! `echofield-palette` holds the blog's color themes as a compile-time table
//! and turns them into a single stylesheet. Each theme becomes a rule block
//! scoped by `:root[data-theme="<id>"]`, so switching themes at runtime is a
//! matter of setting one attribute on the document root.
//!
//! # Quick Start
//!
//! ```rust
//! use echofield_palette::{css, ThemeRegistry};
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! let sheet = css::stylesheet(registry);
//!
//! assert!(sheet.starts_with(css::GENERATED_HEADER));
//! assert!(sheet.contains(r#":root[data-theme="latte"] {"#));
//! ```
//!
//! # Modules
//!
//! - [`theme`]: [`ColorRole`], [`ColorTheme`] and the validated [`ThemeRegistry`]
//! - [`derive`]: brightness classification, contrast, shadow and alpha blend
//! - [`css`]: per-theme blocks and the full stylesheet
//! - [`inspect`]: parses a stylesheet back and checks it against a registry
//! - [`color`]: hex parsing and `rgb()`/`rgba()` formatting
//!
//! # Determinism
//!
//! Generation is a pure function of the registry. Regenerating without a
//! table change produces byte-identical output, which is what lets
//! [`inspect::verify`] detect a stale file with a plain comparison of values.

pub mod color;
pub mod css;
pub mod derive;
mod error;
pub mod inspect;
pub mod theme;

pub use color::{ColorError, Rgb, Rgba};
pub use css::{stylesheet, theme_css, write_stylesheet, GenerateReport};
pub use derive::{alpha_blend, brightness, contrast_color, shadow_color, Brightness};
pub use error::PaletteError;
pub use inspect::{parse_stylesheet, verify, InspectError, ThemeBlock};
pub use theme::{
    ColorRole, ColorTheme, RegistryError, RoleGroup, ThemeColors, ThemeRegistry, BUILTIN_THEMES,
    DEFAULT_THEME_ID,
};
