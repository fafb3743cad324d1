//! Ordered, validated theme registry.
//!
//! The registry is the only way the rest of the workspace reaches theme data.
//! It is built once, validated eagerly, and never mutated afterwards:
//!
//! 1. **Validation**: ids are unique and non-empty, every role holds a
//!    `#RRGGBB` value, and the default id names a registered theme
//! 2. **Lookup**: [`ThemeRegistry::get`] returns `None` for unknown ids
//! 3. **Resolution**: [`ThemeRegistry::resolve`] falls back to the default
//!
//! # Example
//!
//! ```rust
//! use echofield_palette::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! assert_eq!(registry.get("mocha").unwrap().name, "Catppuccin Mocha");
//! assert!(registry.get("not-a-theme").is_none());
//! assert_eq!(registry.resolve(Some("not-a-theme")).id, "macchiato");
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::builtin::{BUILTIN_THEMES, DEFAULT_THEME_ID};
use super::role::ColorRole;
use super::theme::ColorTheme;
use crate::color::{ColorError, Rgb};

/// Error returned when a theme table fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The table has no themes at all.
    #[error("theme registry is empty")]
    Empty,

    /// A theme has an empty identifier.
    #[error("theme '{name}' has an empty id")]
    EmptyId { name: String },

    /// Two themes share an identifier.
    #[error("duplicate theme id '{0}'")]
    DuplicateId(String),

    /// A role value is not a `#RRGGBB` color.
    #[error("theme '{theme}' has an invalid value for role '{role}': {source}")]
    InvalidColor {
        theme: String,
        role: ColorRole,
        #[source]
        source: ColorError,
    },

    /// The default id does not name a registered theme.
    #[error("default theme '{0}' is not registered")]
    MissingDefault(String),
}

static BUILTIN: Lazy<Result<ThemeRegistry, RegistryError>> =
    Lazy::new(|| ThemeRegistry::new(BUILTIN_THEMES.iter().cloned(), DEFAULT_THEME_ID));

/// An ordered set of themes with a guaranteed default.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<ColorTheme>,
    default_index: usize,
}

impl ThemeRegistry {
    /// Builds and validates a registry. Order of `themes` is kept.
    pub fn new(
        themes: impl IntoIterator<Item = ColorTheme>,
        default_id: &str,
    ) -> Result<Self, RegistryError> {
        let themes: Vec<ColorTheme> = themes.into_iter().collect();
        if themes.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for theme in &themes {
            if theme.id.is_empty() {
                return Err(RegistryError::EmptyId {
                    name: theme.name.to_string(),
                });
            }
            if !seen.insert(theme.id) {
                return Err(RegistryError::DuplicateId(theme.id.to_string()));
            }
            for (role, value) in theme.colors.iter() {
                Rgb::from_hex(value).map_err(|source| RegistryError::InvalidColor {
                    theme: theme.id.to_string(),
                    role,
                    source,
                })?;
            }
        }

        let default_index = themes
            .iter()
            .position(|t| t.id == default_id)
            .ok_or_else(|| RegistryError::MissingDefault(default_id.to_string()))?;

        tracing::debug!(
            themes = themes.len(),
            default = default_id,
            "theme registry validated"
        );

        Ok(Self {
            themes,
            default_index,
        })
    }

    /// The built-in registry, validated on first access.
    ///
    /// Callers should invoke this at startup so a broken table fails before
    /// any work is done.
    pub fn builtin() -> Result<&'static ThemeRegistry, RegistryError> {
        Lazy::force(&BUILTIN).as_ref().map_err(Clone::clone)
    }

    /// All themes in registry order.
    pub fn themes(&self) -> &[ColorTheme] {
        &self.themes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorTheme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always `false` for a constructed registry; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Theme ids in registry order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.iter().map(|t| t.id)
    }

    /// Looks up a theme by id. Unknown ids give `None`.
    pub fn get(&self, id: &str) -> Option<&ColorTheme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn default_theme(&self) -> &ColorTheme {
        &self.themes[self.default_index]
    }

    pub fn default_id(&self) -> &'static str {
        self.default_theme().id
    }

    /// Resolves a runtime selection to a theme.
    ///
    /// Missing or unknown ids resolve to the default theme.
    pub fn resolve(&self, id: Option<&str>) -> &ColorTheme {
        match id.and_then(|id| self.get(id)) {
            Some(theme) => theme,
            None => {
                tracing::debug!(requested = ?id, "falling back to default theme");
                self.default_theme()
            }
        }
    }
}

impl<'a> IntoIterator for &'a ThemeRegistry {
    type Item = &'a ColorTheme;
    type IntoIter = std::slice::Iter<'a, ColorTheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
