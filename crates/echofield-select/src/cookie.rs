//! Cookie persistence for the selected theme.
//!
//! The cookie lets the server render the right `data-theme` before any
//! script runs, so the selection is written both to storage and here.
//!
//! Lookup follows `document.cookie` conventions: the header is a
//! `name=value; name=value` list, and [`cookie_value`] finds one entry by
//! splitting on `"; <name>="`. A name that occurs twice splits into three
//! parts and resolves to nothing.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Months, Utc};

use crate::StoreError;

/// Cookie holding the selected theme id.
pub const THEME_COOKIE_NAME: &str = "theme";

/// How long a written theme cookie lives.
pub const COOKIE_LIFETIME_MONTHS: u32 = 12;

/// Finds the value of cookie `name` in a `document.cookie`-style header.
///
/// Returns `None` when the cookie is absent, empty, or present more than once.
///
/// ```rust
/// use echofield_select::cookie_value;
///
/// assert_eq!(cookie_value("a=1; theme=nord; b=2", "theme").as_deref(), Some("nord"));
/// assert_eq!(cookie_value("theme=", "theme"), None);
/// assert_eq!(cookie_value("theme=a; theme=b", "theme"), None);
/// ```
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    let haystack = format!("; {}", header);
    let needle = format!("; {}=", name);
    let parts: Vec<&str> = haystack.split(needle.as_str()).collect();
    if parts.len() != 2 {
        return None;
    }
    let value = parts[1].split(';').next().unwrap_or_default();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A cookie assignment, rendered as the string written to `document.cookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub expires: DateTime<Utc>,
}

impl SetCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires,
        }
    }

    /// The theme cookie for `id`, expiring a year after `now`.
    pub fn theme(id: &str, now: DateTime<Utc>) -> Self {
        Self::new(THEME_COOKIE_NAME, id, expiry_after(now))
    }
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; expires={}; path=/; SameSite=Lax",
            self.name,
            self.value,
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }
}

/// Same wall-clock time, [`COOKIE_LIFETIME_MONTHS`] later.
///
/// Feb 29 clamps to Feb 28 of the following year.
pub fn expiry_after(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(COOKIE_LIFETIME_MONTHS))
        .unwrap_or(now)
}

/// Abstraction over the page's cookies.
pub trait CookieStore: Send + Sync {
    /// The current `document.cookie`-style header.
    fn header(&self) -> Result<String, StoreError>;

    /// Apply a cookie assignment.
    fn set(&self, cookie: &SetCookie) -> Result<(), StoreError>;

    /// Value of cookie `name`, using [`cookie_value`] semantics.
    fn get(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(cookie_value(&self.header()?, name))
    }
}

/// In-memory cookie jar.
///
/// Keeps entries in header order. Assigning an existing name replaces its
/// first occurrence, a new name is appended. Every assignment is recorded.
#[derive(Debug, Default)]
pub struct CookieJar {
    entries: Mutex<Vec<(String, String)>>,
    written: Mutex<Vec<SetCookie>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a jar from an existing header, duplicates included.
    pub fn from_header(header: &str) -> Self {
        let entries = header
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((name, value)) => (name.to_string(), value.to_string()),
                None => (String::new(), segment.to_string()),
            })
            .collect();
        Self {
            entries: Mutex::new(entries),
            written: Mutex::new(Vec::new()),
        }
    }

    /// Assignments made through [`CookieStore::set`], oldest first.
    pub fn written(&self) -> Vec<SetCookie> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_written(&self) -> Option<SetCookie> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl CookieStore for CookieJar {
    fn header(&self) -> Result<String, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let parts: Vec<String> = entries
            .iter()
            .map(|(name, value)| {
                if name.is_empty() {
                    value.clone()
                } else {
                    format!("{}={}", name, value)
                }
            })
            .collect();
        Ok(parts.join("; "))
    }

    fn set(&self, cookie: &SetCookie) -> Result<(), StoreError> {
        {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            match entries.iter_mut().find(|(name, _)| *name == cookie.name) {
                Some(entry) => entry.1 = cookie.value.clone(),
                None => entries.push((cookie.name.clone(), cookie.value.clone())),
            }
        }
        tracing::debug!(cookie = %cookie, "set cookie");
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cookie.clone());
        Ok(())
    }
}
