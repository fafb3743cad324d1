//! Color themes and the registry that serves them.
//!
//! A theme is a fixed palette: one `#RRGGBB` value for each of the 26
//! [`ColorRole`]s. The set of themes is a compile-time table
//! ([`BUILTIN_THEMES`]) wrapped in a validated [`ThemeRegistry`].
//!
//! ## Lookup vs. Resolution
//!
//! Two ways in, for two kinds of caller:
//!
//! - [`ThemeRegistry::get`] answers "is this a theme?" and returns `None` for
//!   anything unknown. Selection code uses it to validate stored values.
//! - [`ThemeRegistry::resolve`] answers "which theme should render?" and
//!   never fails: unknown or missing ids fall back to [`DEFAULT_THEME_ID`].

mod builtin;
mod registry;
mod role;
#[allow(clippy::module_inception)]
mod theme;

pub use builtin::{BUILTIN_THEMES, DEFAULT_THEME_ID};
pub use registry::{RegistryError, ThemeRegistry};
pub use role::{ColorRole, RoleGroup};
pub use theme::{ColorTheme, ThemeColors};
