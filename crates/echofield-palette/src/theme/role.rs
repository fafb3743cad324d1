//! The closed set of color roles every theme fills in.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A named slot in a theme palette.
///
/// The set is closed: a theme supplies a value for every variant. Declaration
/// order is the order roles appear in the generated stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    // Accent palette
    Rosewater,
    Flamingo,
    Pink,
    Mauve,
    Red,
    Maroon,
    Peach,
    Yellow,
    Green,
    Teal,
    Sky,
    Sapphire,
    Blue,
    Lavender,
    // Text and surfaces
    Text,
    Subtext1,
    Subtext0,
    Overlay2,
    Overlay1,
    Overlay0,
    Surface2,
    Surface1,
    Surface0,
    Base,
    Mantle,
    Crust,
}

/// Which half of the palette a role belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGroup {
    Accent,
    Surface,
}

impl ColorRole {
    /// Every role, in stylesheet order.
    pub const ALL: [ColorRole; 26] = [
        ColorRole::Rosewater,
        ColorRole::Flamingo,
        ColorRole::Pink,
        ColorRole::Mauve,
        ColorRole::Red,
        ColorRole::Maroon,
        ColorRole::Peach,
        ColorRole::Yellow,
        ColorRole::Green,
        ColorRole::Teal,
        ColorRole::Sky,
        ColorRole::Sapphire,
        ColorRole::Blue,
        ColorRole::Lavender,
        ColorRole::Text,
        ColorRole::Subtext1,
        ColorRole::Subtext0,
        ColorRole::Overlay2,
        ColorRole::Overlay1,
        ColorRole::Overlay0,
        ColorRole::Surface2,
        ColorRole::Surface1,
        ColorRole::Surface0,
        ColorRole::Base,
        ColorRole::Mantle,
        ColorRole::Crust,
    ];

    /// The role's palette name, e.g. `"surface0"`.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Rosewater => "rosewater",
            ColorRole::Flamingo => "flamingo",
            ColorRole::Pink => "pink",
            ColorRole::Mauve => "mauve",
            ColorRole::Red => "red",
            ColorRole::Maroon => "maroon",
            ColorRole::Peach => "peach",
            ColorRole::Yellow => "yellow",
            ColorRole::Green => "green",
            ColorRole::Teal => "teal",
            ColorRole::Sky => "sky",
            ColorRole::Sapphire => "sapphire",
            ColorRole::Blue => "blue",
            ColorRole::Lavender => "lavender",
            ColorRole::Text => "text",
            ColorRole::Subtext1 => "subtext1",
            ColorRole::Subtext0 => "subtext0",
            ColorRole::Overlay2 => "overlay2",
            ColorRole::Overlay1 => "overlay1",
            ColorRole::Overlay0 => "overlay0",
            ColorRole::Surface2 => "surface2",
            ColorRole::Surface1 => "surface1",
            ColorRole::Surface0 => "surface0",
            ColorRole::Base => "base",
            ColorRole::Mantle => "mantle",
            ColorRole::Crust => "crust",
        }
    }

    /// The custom property declared for this role, e.g. `"--ctp-base"`.
    pub fn css_property(self) -> String {
        format!("--ctp-{}", self.name())
    }

    pub fn group(self) -> RoleGroup {
        if self < ColorRole::Text {
            RoleGroup::Accent
        } else {
            RoleGroup::Surface
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name() == lower)
            .ok_or_else(|| format!("Unknown color role: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_unique_names() {
        let mut names: Vec<_> = ColorRole::ALL.iter().map(|r| r.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ColorRole::ALL.len());
    }

    #[test]
    fn test_groups_split_at_text() {
        let accents = ColorRole::ALL
            .iter()
            .filter(|r| r.group() == RoleGroup::Accent)
            .count();
        assert_eq!(accents, 14);
        assert_eq!(ColorRole::Lavender.group(), RoleGroup::Accent);
        assert_eq!(ColorRole::Text.group(), RoleGroup::Surface);
        assert_eq!(ColorRole::Crust.group(), RoleGroup::Surface);
    }

    #[test]
    fn test_css_property() {
        assert_eq!(ColorRole::Surface0.css_property(), "--ctp-surface0");
        assert_eq!(ColorRole::Base.css_property(), "--ctp-base");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("base".parse::<ColorRole>().unwrap(), ColorRole::Base);
        assert_eq!("Sapphire".parse::<ColorRole>().unwrap(), ColorRole::Sapphire);
        assert!("purple".parse::<ColorRole>().is_err());
    }
}
