//! Theme and palette types.
//!
//! A [`ColorTheme`] pairs an identifier and display name with a complete
//! [`ThemeColors`] palette. Palettes are plain structs with one field per
//! [`ColorRole`], so a theme that leaves a role out does not compile.

use serde::Serialize;

use super::role::ColorRole;

/// One `#RRGGBB` value per color role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub rosewater: &'static str,
    pub flamingo: &'static str,
    pub pink: &'static str,
    pub mauve: &'static str,
    pub red: &'static str,
    pub maroon: &'static str,
    pub peach: &'static str,
    pub yellow: &'static str,
    pub green: &'static str,
    pub teal: &'static str,
    pub sky: &'static str,
    pub sapphire: &'static str,
    pub blue: &'static str,
    pub lavender: &'static str,
    pub text: &'static str,
    pub subtext1: &'static str,
    pub subtext0: &'static str,
    pub overlay2: &'static str,
    pub overlay1: &'static str,
    pub overlay0: &'static str,
    pub surface2: &'static str,
    pub surface1: &'static str,
    pub surface0: &'static str,
    pub base: &'static str,
    pub mantle: &'static str,
    pub crust: &'static str,
}

impl ThemeColors {
    /// Returns the literal value stored for `role`.
    pub fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Rosewater => self.rosewater,
            ColorRole::Flamingo => self.flamingo,
            ColorRole::Pink => self.pink,
            ColorRole::Mauve => self.mauve,
            ColorRole::Red => self.red,
            ColorRole::Maroon => self.maroon,
            ColorRole::Peach => self.peach,
            ColorRole::Yellow => self.yellow,
            ColorRole::Green => self.green,
            ColorRole::Teal => self.teal,
            ColorRole::Sky => self.sky,
            ColorRole::Sapphire => self.sapphire,
            ColorRole::Blue => self.blue,
            ColorRole::Lavender => self.lavender,
            ColorRole::Text => self.text,
            ColorRole::Subtext1 => self.subtext1,
            ColorRole::Subtext0 => self.subtext0,
            ColorRole::Overlay2 => self.overlay2,
            ColorRole::Overlay1 => self.overlay1,
            ColorRole::Overlay0 => self.overlay0,
            ColorRole::Surface2 => self.surface2,
            ColorRole::Surface1 => self.surface1,
            ColorRole::Surface0 => self.surface0,
            ColorRole::Base => self.base,
            ColorRole::Mantle => self.mantle,
            ColorRole::Crust => self.crust,
        }
    }

    /// Iterates `(role, value)` pairs in stylesheet order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &'static str)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// A named, immutable color theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    /// Short slug used in `data-theme` attributes and storage, e.g. `"mocha"`.
    pub id: &'static str,
    /// Human-readable name, e.g. `"Catppuccin Mocha"`.
    pub name: &'static str,
    pub colors: ThemeColors,
}

impl ColorTheme {
    /// The CSS selector that scopes this theme's block.
    pub fn selector(&self) -> String {
        format!(":root[data-theme=\"{}\"]", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin::BUILTIN_THEMES;

    #[test]
    fn test_get_matches_fields() {
        let latte = &BUILTIN_THEMES[0];
        assert_eq!(latte.colors.get(ColorRole::Base), latte.colors.base);
        assert_eq!(latte.colors.get(ColorRole::Blue), "#1e66f5");
        assert_eq!(latte.colors.get(ColorRole::Crust), latte.colors.crust);
    }

    #[test]
    fn test_iter_covers_every_role_in_order() {
        let latte = &BUILTIN_THEMES[0];
        let roles: Vec<_> = latte.colors.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, ColorRole::ALL.to_vec());
    }

    #[test]
    fn test_selector() {
        let latte = &BUILTIN_THEMES[0];
        assert_eq!(latte.selector(), ":root[data-theme=\"latte\"]");
    }

    #[test]
    fn test_serializes_with_role_names() {
        let value = serde_json::to_value(&BUILTIN_THEMES[4]).unwrap();
        assert_eq!(value["id"], "nord");
        assert_eq!(value["colors"]["subtext0"], BUILTIN_THEMES[4].colors.subtext0);
        assert_eq!(value["colors"].as_object().unwrap().len(), 26);
    }
}
