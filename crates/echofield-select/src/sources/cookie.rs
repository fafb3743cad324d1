//! Cookie source.

use std::sync::Arc;

use crate::cookie::{CookieStore, THEME_COOKIE_NAME};
use crate::source::{SelectionSource, SelectionSourceKind};
use crate::StoreError;

/// Read the theme id from the page's cookies.
#[derive(Clone)]
pub struct CookieSource {
    cookies: Arc<dyn CookieStore>,
    name: String,
}

impl CookieSource {
    /// Read the standard theme cookie from `cookies`.
    pub fn new(cookies: Arc<dyn CookieStore>) -> Self {
        Self {
            cookies,
            name: THEME_COOKIE_NAME.to_string(),
        }
    }

    /// Use a different cookie name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl SelectionSource for CookieSource {
    fn kind(&self) -> SelectionSourceKind {
        SelectionSourceKind::Cookie
    }

    fn read(&self) -> Result<Option<String>, StoreError> {
        self.cookies.get(&self.name)
    }
}

impl std::fmt::Debug for CookieSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
