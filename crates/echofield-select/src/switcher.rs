//! Theme switcher behavior over a headless page model.
//!
//! The page is reduced to what the switcher touches: the root element's
//! `data-theme` attribute, the theme buttons inside the switcher panel, and
//! the modal dialog that hosts them. [`ThemeSwitcher`] binds to a [`Page`],
//! applies the resolved theme on [`init`](ThemeSwitcher::init), and reacts
//! to [`SwitcherEvent`]s the way the browser widget reacts to clicks and
//! keys.
//!
//! A selection is written to three places: the root attribute (what renders),
//! key-value storage (what the next page load reads first), and the theme
//! cookie (what the server reads).

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use echofield_palette::ThemeRegistry;

use crate::chain::SelectionChain;
use crate::cookie::{CookieStore, SetCookie};
use crate::store::{KeyValueStore, THEME_STORAGE_KEY};
use crate::StoreError;

/// A `[data-theme-id]` button in the switcher panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeButton {
    pub theme_id: Option<String>,
    /// Whether the button carries the `is-active` class.
    pub active: bool,
    /// The `aria-checked` attribute, once set.
    pub aria_checked: Option<bool>,
}

impl ThemeButton {
    pub fn new(theme_id: impl Into<String>) -> Self {
        Self {
            theme_id: Some(theme_id.into()),
            active: false,
            aria_checked: None,
        }
    }

    /// A button missing its theme id.
    pub fn without_id() -> Self {
        Self {
            theme_id: None,
            active: false,
            aria_checked: None,
        }
    }
}

/// The dialog hosting the theme buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeModal {
    pub open: bool,
    pub has_close_button: bool,
}

/// The switcher container and its controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitcherPanel {
    pub buttons: Vec<ThemeButton>,
    pub modal: Option<ThemeModal>,
    pub has_trigger: bool,
}

impl SwitcherPanel {
    /// A complete panel with one button per registered theme.
    pub fn for_registry(registry: &ThemeRegistry) -> Self {
        Self {
            buttons: registry.ids().map(ThemeButton::new).collect(),
            modal: Some(ThemeModal {
                open: false,
                has_close_button: true,
            }),
            has_trigger: true,
        }
    }
}

/// The parts of a document the switcher reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// `data-theme` on the root element.
    pub root_theme: Option<String>,
    pub switcher: Option<SwitcherPanel>,
}

impl Page {
    pub fn with_switcher(panel: SwitcherPanel) -> Self {
        Self {
            root_theme: None,
            switcher: Some(panel),
        }
    }

    /// Ids of buttons currently marked active.
    pub fn active_buttons(&self) -> Vec<&str> {
        self.switcher
            .iter()
            .flat_map(|panel| panel.buttons.iter())
            .filter(|button| button.active)
            .filter_map(|button| button.theme_id.as_deref())
            .collect()
    }

    pub fn modal_open(&self) -> bool {
        self.switcher
            .as_ref()
            .and_then(|panel| panel.modal.as_ref())
            .is_some_and(|modal| modal.open)
    }
}

/// User interactions the switcher responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitcherEvent {
    /// The button that opens the modal.
    TriggerClicked,
    /// The modal's close button.
    CloseClicked,
    /// A click on the modal backdrop.
    BackdropClicked,
    EscapePressed,
    /// The theme button at this index.
    ThemeClicked(usize),
}

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Binds theme selection to a [`Page`].
pub struct ThemeSwitcher<'r> {
    registry: &'r ThemeRegistry,
    storage: Arc<dyn KeyValueStore>,
    cookies: Arc<dyn CookieStore>,
    clock: Clock,
    page: Page,
    bound: bool,
}

impl<'r> ThemeSwitcher<'r> {
    pub fn new(
        registry: &'r ThemeRegistry,
        storage: Arc<dyn KeyValueStore>,
        cookies: Arc<dyn CookieStore>,
        page: Page,
    ) -> Self {
        Self {
            registry,
            storage,
            cookies,
            clock: Box::new(Utc::now),
            page,
            bound: false,
        }
    }

    /// Replace the time source used for cookie expiry.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    /// Whether [`init`](Self::init) bound to the page.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Applies the stored theme and binds event handling.
    ///
    /// Does nothing and returns `false` when the page has no switcher panel,
    /// no modal, or no theme buttons. Otherwise the current theme is resolved
    /// from storage, then the cookie, then the registry default, applied
    /// without touching the buttons, and the matching button is marked.
    pub fn init(&mut self) -> Result<bool, StoreError> {
        let ready = self
            .page
            .switcher
            .as_ref()
            .is_some_and(|panel| panel.modal.is_some() && !panel.buttons.is_empty());
        if !ready {
            tracing::debug!("theme switcher not present, skipping");
            return Ok(false);
        }

        let current = SelectionChain::standard(
            self.registry,
            Arc::clone(&self.storage),
            Arc::clone(&self.cookies),
        )
        .resolve();

        self.set_theme(&current.id, false)?;
        self.mark_buttons(&current.id);
        self.bound = true;

        tracing::debug!(theme = %current.id, source = %current.source, "theme switcher ready");
        Ok(true)
    }

    /// Selects a theme.
    ///
    /// An unregistered id logs a warning and changes nothing; the return
    /// value is `false`. A registered id is written to the root attribute,
    /// storage and the cookie, and marks the buttons when `update_ui` is set.
    pub fn set_theme(&mut self, id: &str, update_ui: bool) -> Result<bool, StoreError> {
        if !self.registry.contains(id) {
            tracing::warn!("Theme {} not found", id);
            return Ok(false);
        }

        self.page.root_theme = Some(id.to_string());
        self.storage.set(THEME_STORAGE_KEY, id)?;
        self.cookies.set(&SetCookie::theme(id, (self.clock)()))?;

        if update_ui {
            self.mark_buttons(id);
        }
        Ok(true)
    }

    /// Reacts to a user interaction. Ignored until bound.
    pub fn handle(&mut self, event: SwitcherEvent) -> Result<(), StoreError> {
        if !self.bound {
            return Ok(());
        }

        match event {
            SwitcherEvent::TriggerClicked => {
                if self.panel().is_some_and(|panel| panel.has_trigger) {
                    self.set_modal_open(true);
                }
            }
            SwitcherEvent::CloseClicked => {
                let has_close = self
                    .panel()
                    .and_then(|panel| panel.modal.as_ref())
                    .is_some_and(|modal| modal.has_close_button);
                if has_close {
                    self.set_modal_open(false);
                }
            }
            SwitcherEvent::BackdropClicked | SwitcherEvent::EscapePressed => {
                self.set_modal_open(false);
            }
            SwitcherEvent::ThemeClicked(index) => {
                let theme_id = self
                    .panel()
                    .and_then(|panel| panel.buttons.get(index))
                    .and_then(|button| button.theme_id.clone())
                    .filter(|id| !id.is_empty());
                if let Some(id) = theme_id {
                    self.set_theme(&id, true)?;
                    self.set_modal_open(false);
                }
            }
        }
        Ok(())
    }

    fn panel(&self) -> Option<&SwitcherPanel> {
        self.page.switcher.as_ref()
    }

    fn set_modal_open(&mut self, open: bool) {
        if let Some(modal) = self
            .page
            .switcher
            .as_mut()
            .and_then(|panel| panel.modal.as_mut())
        {
            modal.open = open;
        }
    }

    fn mark_buttons(&mut self, active_id: &str) {
        let Some(panel) = self.page.switcher.as_mut() else {
            return;
        };
        for button in &mut panel.buttons {
            let is_active = button.theme_id.as_deref() == Some(active_id);
            button.active = is_active;
            button.aria_checked = Some(is_active);
        }
    }
}

impl fmt::Debug for ThemeSwitcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSwitcher")
            .field("page", &self.page)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}
