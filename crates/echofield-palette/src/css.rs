//! Stylesheet generation.
//!
//! Each theme becomes one rule scoped by `:root[data-theme="<id>"]`, so every
//! block can live in the same file and the page picks one by setting a single
//! attribute on the document root. A block has three sections:
//!
//! 1. **Palette**: one `--ctp-<role>` declaration per role, copied literally
//! 2. **Aliases**: semantic tokens (`--bg`, `--accent`, ...) that reference
//!    the palette with `var(...)` instead of repeating values
//! 3. **Derived**: `--accent-soft`, `--accent-contrast` and `--shadow-soft`,
//!    computed by [`crate::derive`]
//!
//! [`stylesheet`] concatenates every block in registry order behind a
//! generated-file header. The output depends only on the registry, so
//! regenerating without a table change produces identical bytes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::derive::{alpha_blend, contrast_color, shadow_color, ACCENT_SOFT_ALPHA};
use crate::error::PaletteError;
use crate::theme::{ColorRole, ColorTheme, RoleGroup, ThemeColors, ThemeRegistry};

/// First line of every generated stylesheet.
pub const GENERATED_HEADER: &str = "/* Auto-generated theme CSS - do not edit manually */\n\n";

/// Alpha suffix appended to `base` for the translucent header background.
pub const HEADER_ALPHA_SUFFIX: &str = "E6";

/// How a semantic token gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticValue {
    /// `var(--ctp-<role>)`.
    Alias(ColorRole),
    /// The role's hex with [`HEADER_ALPHA_SUFFIX`] appended.
    Translucent(ColorRole),
    /// The role blended at [`ACCENT_SOFT_ALPHA`].
    Soft(ColorRole),
    /// Black or white, whichever reads on the role.
    Contrast(ColorRole),
    /// Box shadow suited to the role's brightness.
    Shadow(ColorRole),
}

impl SemanticValue {
    pub fn render(self, colors: &ThemeColors) -> String {
        match self {
            SemanticValue::Alias(role) => format!("var({})", role.css_property()),
            SemanticValue::Translucent(role) => {
                format!("{}{}", colors.get(role), HEADER_ALPHA_SUFFIX)
            }
            SemanticValue::Soft(role) => {
                alpha_blend(colors.get(role), ACCENT_SOFT_ALPHA).to_string()
            }
            SemanticValue::Contrast(role) => contrast_color(colors.get(role)).to_string(),
            SemanticValue::Shadow(role) => shadow_color(colors.get(role)).to_string(),
        }
    }
}

/// Semantic tokens in the order they are written.
pub const SEMANTIC_TOKENS: &[(&str, SemanticValue)] = &[
    ("--bg", SemanticValue::Alias(ColorRole::Base)),
    ("--bg-elevated", SemanticValue::Alias(ColorRole::Mantle)),
    ("--bg-header", SemanticValue::Translucent(ColorRole::Base)),
    ("--text", SemanticValue::Alias(ColorRole::Text)),
    ("--text-muted", SemanticValue::Alias(ColorRole::Subtext0)),
    ("--accent", SemanticValue::Alias(ColorRole::Blue)),
    ("--accent-soft", SemanticValue::Soft(ColorRole::Blue)),
    ("--accent-strong", SemanticValue::Alias(ColorRole::Sapphire)),
    ("--accent-contrast", SemanticValue::Contrast(ColorRole::Base)),
    ("--border-subtle", SemanticValue::Alias(ColorRole::Surface0)),
    ("--border-strong", SemanticValue::Alias(ColorRole::Surface1)),
    ("--shadow-soft", SemanticValue::Shadow(ColorRole::Base)),
];

/// Renders one theme's rule block.
pub fn theme_css(theme: &ColorTheme) -> String {
    let mut out = String::with_capacity(2048);
    out.push('\n');
    out.push_str(&format!("{} {{\n", theme.selector()));
    out.push_str("  /* Catppuccin palette */\n");

    let mut previous_group = RoleGroup::Accent;
    for (role, value) in theme.colors.iter() {
        if role.group() != previous_group {
            out.push('\n');
            previous_group = role.group();
        }
        out.push_str(&declaration(&role.css_property(), value));
    }

    out.push_str("\n  /* Semantic tokens */\n");
    for (token, value) in SEMANTIC_TOKENS {
        out.push_str(&declaration(token, &value.render(&theme.colors)));
    }
    out.push_str("}\n");
    out
}

fn declaration(property: &str, value: &str) -> String {
    format!("  {}: {};\n", property, value)
}

/// Renders the complete artifact: header plus every block in registry order.
pub fn stylesheet(registry: &ThemeRegistry) -> String {
    let mut css = String::from(GENERATED_HEADER);
    for theme in registry {
        css.push_str(&theme_css(theme));
    }
    css
}

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub themes: usize,
    pub bytes: usize,
}

/// Generates the stylesheet and writes it to `path` in one write.
///
/// Missing parent directories are created.
pub fn write_stylesheet(
    registry: &ThemeRegistry,
    path: impl AsRef<Path>,
) -> Result<GenerateReport, PaletteError> {
    let path = path.as_ref();
    let css = stylesheet(registry);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PaletteError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, &css).map_err(|source| PaletteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Generated themes.css with {} themes", registry.len());

    Ok(GenerateReport {
        path: path.to_path_buf(),
        themes: registry.len(),
        bytes: css.len(),
    })
}
