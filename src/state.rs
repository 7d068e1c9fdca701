//! Application state management for steptabs
//!
//! This module defines the central `AppState` struct that owns the tab list,
//! the generated document, user settings and transient UI state. Every tab
//! mutation goes through `AppState` so the document is regenerated and the
//! session is persisted in one place.

use crate::config::{load_config, save_config_silent, Page, Settings};
use crate::export::{assemble_with, DocumentOptions};
use crate::store::{session, JsonFileStore, KeyValueStore, MemoryStore};
use crate::tabs::TabList;
use log::{debug, info, warn};

/// How long the "Copied!" label stays visible, in seconds.
pub const COPIED_LABEL_SECS: f64 = 3.0;

/// Default lifetime of a toast message, in seconds.
pub const TOAST_SECS: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// UI-related state flags.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the hamburger menu popup is open
    pub menu_open: bool,
    /// Index of the tab whose title is being edited
    pub editing_index: Option<usize>,
    /// Text of the title being edited
    pub rename_buffer: String,
    /// Whether the rename field should grab keyboard focus next frame
    pub focus_rename: bool,
    /// When the "Copied!" label should disappear (seconds since app start)
    pub copied_expires_at: Option<f64>,
    /// Temporary toast message (shown in the footer)
    pub toast_message: Option<String>,
    /// When the toast message should expire (seconds since app start)
    pub toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state struct.
#[derive(Debug)]
pub struct AppState {
    /// The tutorial being edited
    tabs: TabList,
    /// Generated document for `tabs`, kept in sync after every mutation
    document: String,
    /// User settings (loaded from config)
    pub settings: Settings,
    /// UI-related state
    pub ui: UiState,
    /// Where the tab session is persisted
    store: Box<dyn KeyValueStore>,
    /// Whether settings have been modified and need saving
    settings_dirty: bool,
}

impl AppState {
    /// Create the state from the user's config and the on-disk tab store.
    ///
    /// Falls back to an in-memory store when no data directory exists, in
    /// which case tabs are not kept across runs.
    pub fn new() -> Self {
        let settings = load_config();
        let store: Box<dyn KeyValueStore> = match JsonFileStore::open_default() {
            Ok(store) => {
                info!("Using tab store at {}", store.path().display());
                Box::new(store)
            }
            Err(e) => {
                warn!("{}; tabs will not be saved between runs", e);
                Box::new(MemoryStore::new())
            }
        };
        Self::with_parts(settings, store)
    }

    /// Create the state from explicit settings and store.
    pub fn with_parts(settings: Settings, store: Box<dyn KeyValueStore>) -> Self {
        let tabs = session::load_tabs(store.as_ref());
        info!(
            "Restored {} tab(s), active tab index: {}",
            tabs.len(),
            tabs.active_index()
        );

        let document = assemble_with(tabs.tabs(), &DocumentOptions::from_settings(&settings));
        Self {
            tabs,
            document,
            settings,
            ui: UiState::default(),
            store,
            settings_dirty: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tabs(&self) -> &TabList {
        &self.tabs
    }

    /// The generated HTML document for the current tabs.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Document options derived from the current settings.
    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions::from_settings(&self.settings)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tab Management
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new tab and make it active.
    pub fn add_tab(&mut self) -> Option<usize> {
        let index = self.tabs.add()?;
        debug!("Added tab {}", index);
        self.tabs_changed();
        Some(index)
    }

    /// Remove the active tab, unless it is protected or the last one.
    pub fn remove_active_tab(&mut self) -> bool {
        let index = self.tabs.active_index();
        if !self.tabs.remove_active() {
            return false;
        }
        debug!("Removed tab {}", index);
        if self.ui.editing_index.is_some() {
            self.finish_rename();
        }
        self.tabs_changed();
        true
    }

    pub fn rename_tab(&mut self, index: usize, title: impl Into<String>) -> bool {
        if !self.tabs.rename(index, title) {
            return false;
        }
        self.tabs_changed();
        true
    }

    pub fn set_tab_content(&mut self, index: usize, content: impl Into<String>) -> bool {
        if !self.tabs.set_content(index, content) {
            return false;
        }
        self.tabs_changed();
        true
    }

    /// Make a tab active. The document does not depend on the active tab,
    /// so only the session is saved.
    pub fn set_active_tab(&mut self, index: usize) -> bool {
        if !self.tabs.set_active(index) {
            return false;
        }
        self.save_tabs();
        true
    }

    /// Start editing the title of a tab. Ignored for the setup tab.
    pub fn begin_rename(&mut self, index: usize) -> bool {
        if !self.tabs.can_rename(index) {
            return false;
        }
        self.ui.rename_buffer = self
            .tabs
            .get(index)
            .map(|tab| tab.title.clone())
            .unwrap_or_default();
        self.ui.editing_index = Some(index);
        self.ui.focus_rename = true;
        true
    }

    /// Apply the rename buffer to the tab being edited.
    pub fn apply_rename_buffer(&mut self) {
        if let Some(index) = self.ui.editing_index {
            let title = self.ui.rename_buffer.clone();
            self.rename_tab(index, title);
        }
    }

    /// Stop editing a title.
    pub fn finish_rename(&mut self) {
        self.ui.editing_index = None;
        self.ui.focus_rename = false;
        self.ui.rename_buffer.clear();
    }

    fn tabs_changed(&mut self) {
        self.regenerate_document();
        self.save_tabs();
    }

    fn regenerate_document(&mut self) {
        self.document = assemble_with(self.tabs.tabs(), &self.document_options());
    }

    fn save_tabs(&mut self) {
        if let Err(e) = session::save(self.store.as_mut(), &self.tabs) {
            warn!("Failed to save tabs: {}", e);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// The page currently shown.
    pub fn page(&self) -> Page {
        self.settings.last_page
    }

    /// Switch page and remember it for the next launch.
    pub fn navigate(&mut self, page: Page) {
        self.ui.menu_open = false;
        if self.settings.last_page != page {
            debug!("Navigating to {:?}", page);
            self.settings.last_page = page;
            self.settings_dirty = true;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.ui.menu_open = !self.ui.menu_open;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Management
    // ─────────────────────────────────────────────────────────────────────────

    /// Update settings and mark as dirty.
    ///
    /// The document is regenerated since its title and styling come from
    /// the settings.
    pub fn update_settings<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        f(&mut self.settings);
        self.settings_dirty = true;
        self.regenerate_document();
    }

    /// Mark settings as dirty (needing to be saved).
    pub fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Save settings to config file if modified.
    ///
    /// Returns `true` if settings were saved.
    pub fn save_settings_if_dirty(&mut self) -> bool {
        if self.settings_dirty {
            if save_config_silent(&self.settings) {
                self.settings_dirty = false;
                info!("Settings saved");
                return true;
            }
            warn!("Failed to save settings");
        }
        false
    }

    /// Prepare state for application shutdown.
    pub fn shutdown(&mut self) {
        self.save_tabs();
        self.settings_dirty = true;
        self.save_settings_if_dirty();
        info!("AppState shutdown complete");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UI State Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Show the "Copied!" label for [`COPIED_LABEL_SECS`].
    pub fn mark_copied(&mut self, current_time: f64) {
        self.ui.copied_expires_at = Some(current_time + COPIED_LABEL_SECS);
    }

    /// Whether the "Copied!" label is visible at `current_time`.
    pub fn is_copied(&self, current_time: f64) -> bool {
        self.ui
            .copied_expires_at
            .is_some_and(|expires_at| current_time < expires_at)
    }

    /// Show a temporary toast message (disappears after duration).
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Clear expired toast and "Copied!" state.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
        if !self.is_copied(current_time) {
            self.ui.copied_expires_at = None;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::session::{ACTIVE_TAB_KEY, TABS_KEY};
    use crate::tabs::{Tab, MAX_TABS};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Store whose contents stay observable after it is moved into the state.
    #[derive(Debug, Clone, Default)]
    struct SharedStore(Rc<RefCell<HashMap<String, String>>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&mut self, key: &str, value: String) -> crate::error::Result<()> {
            self.0.borrow_mut().insert(key.to_string(), value);
            Ok(())
        }
    }

    fn fresh_state() -> AppState {
        AppState::with_parts(Settings::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_initial_state_has_setup_tab_and_document() {
        let state = fresh_state();
        assert_eq!(state.tabs().len(), 1);
        assert!(state.document().starts_with("<!DOCTYPE html>"));
        assert!(state.document().contains("1. Setup"));
        assert_eq!(state.page(), Page::Tabs);
    }

    #[test]
    fn test_document_follows_mutations() {
        let mut state = fresh_state();

        assert_eq!(state.add_tab(), Some(1));
        assert!(state.document().contains("2. Step 2"));

        assert!(state.rename_tab(1, "Install"));
        assert!(state.document().contains("2. Install"));

        assert!(state.set_tab_content(1, "- npm install"));
        assert!(state.document().contains("<li>npm install</li>"));

        assert!(state.remove_active_tab());
        assert!(!state.document().contains("Install"));
    }

    #[test]
    fn test_add_tab_stops_at_limit() {
        let mut state = fresh_state();
        while state.tabs().can_add() {
            state.add_tab();
        }
        assert_eq!(state.tabs().len(), MAX_TABS);
        assert_eq!(state.add_tab(), None);
    }

    #[test]
    fn test_setup_tab_is_protected() {
        let mut state = fresh_state();
        state.add_tab();
        state.set_active_tab(0);

        assert!(!state.remove_active_tab());
        assert!(!state.rename_tab(0, "Other"));
        assert!(!state.begin_rename(0));
        assert_eq!(state.ui.editing_index, None);
    }

    #[test]
    fn test_rename_flow() {
        let mut state = fresh_state();
        state.add_tab();

        assert!(state.begin_rename(1));
        assert_eq!(state.ui.rename_buffer, "Step 2");
        assert!(state.ui.focus_rename);

        state.ui.rename_buffer = "Deploy".to_string();
        state.apply_rename_buffer();
        assert_eq!(state.tabs().get(1).map(|t| t.title.as_str()), Some("Deploy"));

        state.finish_rename();
        assert_eq!(state.ui.editing_index, None);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let store = SharedStore::default();
        let mut state = AppState::with_parts(Settings::default(), Box::new(store.clone()));

        state.add_tab();
        state.set_tab_content(1, "body");
        state.set_active_tab(0);

        assert_eq!(store.get(ACTIVE_TAB_KEY).as_deref(), Some("0"));
        let saved: Vec<Tab> = serde_json::from_str(&store.get(TABS_KEY).unwrap()).unwrap();
        assert_eq!(saved[1], Tab::new("Step 2", "body"));

        let restored = AppState::with_parts(Settings::default(), Box::new(store));
        assert_eq!(restored.tabs(), state.tabs());
        assert_eq!(restored.document(), state.document());
    }

    #[test]
    fn test_settings_change_regenerates_document() {
        let mut state = fresh_state();
        state.update_settings(|s| {
            s.document_title = "Week 1".to_string();
            s.include_styles = false;
        });
        assert!(state.document().contains("<title>Week 1</title>"));
        assert!(!state.document().contains("<style>"));
    }

    #[test]
    fn test_navigate_closes_menu_and_remembers_page() {
        let mut state = fresh_state();
        state.toggle_menu();
        assert!(state.ui.menu_open);

        state.navigate(Page::About);
        assert!(!state.ui.menu_open);
        assert_eq!(state.page(), Page::About);
        assert!(state.settings_dirty);
    }

    #[test]
    fn test_copied_label_expires() {
        let mut state = fresh_state();
        state.mark_copied(10.0);
        assert!(state.is_copied(12.9));
        assert!(!state.is_copied(13.0));

        state.update_toast(13.5);
        assert_eq!(state.ui.copied_expires_at, None);
    }

    #[test]
    fn test_toast_expires() {
        let mut state = fresh_state();
        state.show_toast("Exported", 1.0, TOAST_SECS);
        state.update_toast(2.0);
        assert_eq!(state.ui.toast_message.as_deref(), Some("Exported"));

        state.update_toast(1.0 + TOAST_SECS);
        assert_eq!(state.ui.toast_message, None);
    }
}
