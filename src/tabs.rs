//! Tutorial tab list
//!
//! This module defines the `Tab` record the user edits and the `TabList`
//! that owns the ordered tabs together with the active index. All mutations
//! go through `TabList` so its invariants always hold:
//!
//! - there is at least one tab and never more than [`MAX_TABS`]
//! - the tab at index 0 ("Setup") can be neither removed nor renamed
//! - the active index always points at an existing tab

use log::debug;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum number of tabs a tutorial may have.
pub const MAX_TABS: usize = 15;

/// Index of the protected setup tab.
pub const SETUP_TAB_INDEX: usize = 0;

/// Title of the seeded first tab.
pub const SETUP_TAB_TITLE: &str = "Setup";

/// Content of the seeded first tab.
pub const SETUP_TAB_CONTENT: &str = "make sure you have vscode installed.\n- install node.js\n- install git\n\n1. open vscode\n2. start coding";

/// Placeholder content for newly added tabs.
pub const NEW_TAB_CONTENT: &str = "new tab content...";

// ─────────────────────────────────────────────────────────────────────────────
// Tab
// ─────────────────────────────────────────────────────────────────────────────

/// A named unit of tutorial content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Short label shown on the tab header (may be empty)
    pub title: String,
    /// Multi-line body text, compiled to HTML on export
    pub content: String,
}

impl Tab {
    /// Create a tab from a title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The seeded "Setup" tab.
    pub fn setup() -> Self {
        Self::new(SETUP_TAB_TITLE, SETUP_TAB_CONTENT)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tab List
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered, bounded list of tabs plus the currently active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabList {
    tabs: Vec<Tab>,
    active: usize,
}

impl Default for TabList {
    fn default() -> Self {
        Self::new()
    }
}

// A tab list is never empty, so there is no `is_empty`
#[allow(clippy::len_without_is_empty)]
impl TabList {
    /// Create the default list: a single "Setup" tab.
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab::setup()],
            active: 0,
        }
    }

    /// Build a list from restored parts, repairing anything out of bounds.
    ///
    /// An empty list falls back to the default seed, a list longer than
    /// [`MAX_TABS`] is truncated, and the active index is clamped.
    pub fn from_parts(mut tabs: Vec<Tab>, active: usize) -> Self {
        if tabs.is_empty() {
            debug!("No tabs to restore, using the default setup tab");
            return Self::new();
        }

        if tabs.len() > MAX_TABS {
            debug!("Truncating {} restored tabs to {}", tabs.len(), MAX_TABS);
            tabs.truncate(MAX_TABS);
        }

        let active = active.min(tabs.len() - 1);
        Self { tabs, active }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// All tabs in order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs (always at least 1).
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Get a tab by index.
    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Index of the active tab.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active tab.
    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    /// Whether the tab at `index` is the protected setup tab.
    pub fn is_protected(&self, index: usize) -> bool {
        index == SETUP_TAB_INDEX
    }

    /// Whether another tab can be added.
    pub fn can_add(&self) -> bool {
        self.tabs.len() < MAX_TABS
    }

    /// Whether the active tab can be removed.
    pub fn can_remove(&self) -> bool {
        !self.is_protected(self.active) && self.tabs.len() > 1
    }

    /// Whether the tab at `index` can be renamed.
    pub fn can_rename(&self, index: usize) -> bool {
        index < self.tabs.len() && !self.is_protected(index)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new "Step N" tab and make it active.
    ///
    /// Returns the new tab's index, or `None` when the list is full.
    pub fn add(&mut self) -> Option<usize> {
        if !self.can_add() {
            debug!("Tab limit of {} reached, not adding", MAX_TABS);
            return None;
        }

        let title = format!("Step {}", self.tabs.len() + 1);
        self.tabs.push(Tab::new(title, NEW_TAB_CONTENT));
        self.active = self.tabs.len() - 1;
        Some(self.active)
    }

    /// Remove the active tab.
    ///
    /// Refused for the setup tab and for the last remaining tab. The active
    /// index stays in place unless it fell off the end of the list.
    pub fn remove_active(&mut self) -> bool {
        if !self.can_remove() {
            return false;
        }

        self.tabs.remove(self.active);
        self.active = self.active.min(self.tabs.len() - 1);
        true
    }

    /// Change the title of a tab without reordering.
    pub fn rename(&mut self, index: usize, title: impl Into<String>) -> bool {
        if !self.can_rename(index) {
            return false;
        }
        self.tabs[index].title = title.into();
        true
    }

    /// Replace the content of a tab.
    pub fn set_content(&mut self, index: usize, content: impl Into<String>) -> bool {
        match self.tabs.get_mut(index) {
            Some(tab) => {
                tab.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Make the tab at `index` active.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.active = index;
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
