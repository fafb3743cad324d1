//! Theme and language selection for the echofield blog.
//!
//! `echofield-select` decides which theme a page renders with and persists
//! the reader's choice. A selection is read back from a chain of sources
//! with automatic fallback:
//!
//! ```text
//! SelectionChain
//! ├── StorageSource  → None (nothing stored)
//! ├── CookieSource   → Some("nord") ← registered, returns this
//! └── registry default "macchiato" (not reached)
//! ```
//!
//! Stored ids are only accepted when the registry knows them, so a stale
//! value from a removed theme silently falls through.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use echofield_palette::ThemeRegistry;
//! use echofield_select::{CookieJar, MemoryStore, Page, SwitcherPanel, ThemeSwitcher};
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! let page = Page::with_switcher(SwitcherPanel::for_registry(registry));
//! let mut switcher = ThemeSwitcher::new(
//!     registry,
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(CookieJar::from_header("theme=latte")),
//!     page,
//! );
//!
//! switcher.init().unwrap();
//! assert_eq!(switcher.page().root_theme.as_deref(), Some("latte"));
//! ```
//!
//! # Testing
//!
//! Both store traits have in-memory implementations ([`MemoryStore`],
//! [`CookieJar`]) and the switcher accepts an injected clock, so behavior can
//! be checked without a browser or the wall clock.

mod chain;
mod cookie;
mod error;
mod lang;
mod source;
pub mod sources;
mod store;
mod switcher;

pub use chain::SelectionChain;
pub use cookie::{
    cookie_value, expiry_after, CookieJar, CookieStore, SetCookie, COOKIE_LIFETIME_MONTHS,
    THEME_COOKIE_NAME,
};
pub use error::StoreError;
pub use lang::{
    LangForm, LangPill, LangSubmission, LangSwitcher, LANGUAGES, LANGUAGE_FIELD, SET_LANGUAGE_URL,
};
pub use source::{ResolvedSelection, SelectionSource, SelectionSourceKind};
pub use sources::{CookieSource, FixedSource, StorageSource};
pub use store::{FileStore, KeyValueStore, MemoryStore, THEME_STORAGE_KEY};
pub use switcher::{Page, SwitcherEvent, SwitcherPanel, ThemeButton, ThemeModal, ThemeSwitcher};
