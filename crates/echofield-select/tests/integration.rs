//! Integration tests for echofield-select.
//!
//! These simulate page loads against shared stores to check that a choice
//! made on one load is what the next load renders.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use echofield_palette::ThemeRegistry;
use echofield_select::{
    CookieJar, CookieStore, FileStore, KeyValueStore, MemoryStore, Page, SelectionChain,
    SelectionSourceKind, SwitcherEvent, SwitcherPanel, ThemeSwitcher, THEME_COOKIE_NAME,
    THEME_STORAGE_KEY,
};

fn registry() -> &'static ThemeRegistry {
    ThemeRegistry::builtin().unwrap()
}

fn full_page() -> Page {
    Page::with_switcher(SwitcherPanel::for_registry(registry()))
}

fn index_of(id: &str) -> usize {
    registry().ids().position(|candidate| candidate == id).unwrap()
}

// ============================================================================
// Selection survives a reload
// ============================================================================

#[test]
fn choice_persists_to_next_load_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.yaml");
    let cookies = Arc::new(CookieJar::new());

    // First load: nothing stored, pick gruvbox-dark.
    let mut first = ThemeSwitcher::new(
        registry(),
        Arc::new(FileStore::new(&path)),
        cookies.clone(),
        full_page(),
    );
    first.init().unwrap();
    assert_eq!(first.page().root_theme.as_deref(), Some("macchiato"));
    first.handle(SwitcherEvent::TriggerClicked).unwrap();
    first
        .handle(SwitcherEvent::ThemeClicked(index_of("gruvbox-dark")))
        .unwrap();

    // Second load: fresh store handle over the same file.
    let mut second = ThemeSwitcher::new(
        registry(),
        Arc::new(FileStore::new(&path)),
        cookies.clone(),
        full_page(),
    );
    second.init().unwrap();
    assert_eq!(second.page().root_theme.as_deref(), Some("gruvbox-dark"));
    assert_eq!(second.page().active_buttons(), vec!["gruvbox-dark"]);
}

#[test]
fn server_side_resolution_from_cookie_only() {
    let cookies = Arc::new(CookieJar::new());
    let mut switcher = ThemeSwitcher::new(
        registry(),
        Arc::new(MemoryStore::new()),
        cookies.clone(),
        full_page(),
    )
    .with_clock(|| Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
    switcher.init().unwrap();
    switcher.set_theme("tokyo-night", true).unwrap();

    // The server sees only the cookie header.
    let header = cookies.header().unwrap();
    let resolved = SelectionChain::standard(
        registry(),
        Arc::new(MemoryStore::new()),
        Arc::new(CookieJar::from_header(&header)),
    )
    .resolve();
    assert_eq!(resolved.id, "tokyo-night");
    assert_eq!(resolved.source, SelectionSourceKind::Cookie);
}

#[test]
fn storage_and_cookie_agree_after_selection() {
    let storage = Arc::new(MemoryStore::new());
    let cookies = Arc::new(CookieJar::from_header("csrftoken=abc; lang=uk"));
    let mut switcher =
        ThemeSwitcher::new(registry(), storage.clone(), cookies.clone(), full_page());
    switcher.init().unwrap();
    switcher.set_theme("nord", true).unwrap();

    assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("nord"));
    assert_eq!(cookies.get(THEME_COOKIE_NAME).unwrap().as_deref(), Some("nord"));
    assert_eq!(cookies.header().unwrap(), "csrftoken=abc; lang=uk; theme=nord");
}

#[test]
fn stale_stored_theme_is_replaced_on_init() {
    let storage = Arc::new(MemoryStore::new().with(THEME_STORAGE_KEY, "removed-theme"));
    let cookies = Arc::new(CookieJar::new());
    let mut switcher =
        ThemeSwitcher::new(registry(), storage.clone(), cookies.clone(), full_page());
    switcher.init().unwrap();

    assert_eq!(
        storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("macchiato")
    );
}

#[test]
fn corrupt_store_falls_back_to_cookie() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.yaml");
    std::fs::write(&path, "[not, a, map]").unwrap();

    let resolved = SelectionChain::standard(
        registry(),
        Arc::new(FileStore::new(&path)),
        Arc::new(CookieJar::from_header("theme=latte")),
    )
    .resolve();
    assert_eq!(resolved.id, "latte");
    assert_eq!(resolved.source, SelectionSourceKind::Cookie);
}
