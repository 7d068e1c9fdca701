//! Tab session save and restore.
//!
//! The tab list is stored as a JSON array of `{title, content}` under
//! `userTabs`, and the active index as a decimal string under
//! `activeTabIndex`.

use super::KeyValueStore;
use crate::error::Result;
use crate::tabs::{Tab, TabList};
use log::{debug, warn};

/// Key holding the serialized tab array.
pub const TABS_KEY: &str = "userTabs";

/// Key holding the active tab index.
pub const ACTIVE_TAB_KEY: &str = "activeTabIndex";

/// Restore the tab list, falling back to the default seed.
///
/// A missing, malformed or empty tab array yields the default list. A
/// missing or malformed active index yields 0; an out of range one is
/// clamped by [`TabList::from_parts`].
pub fn load_tabs(store: &dyn KeyValueStore) -> TabList {
    let tabs = match store.get(TABS_KEY) {
        Some(raw) => match serde_json::from_str::<Vec<Tab>>(&raw) {
            Ok(tabs) => tabs,
            Err(e) => {
                warn!("Stored tabs are malformed, using defaults: {}", e);
                return TabList::new();
            }
        },
        None => {
            debug!("No stored tabs, using defaults");
            return TabList::new();
        }
    };

    let active = store
        .get(ACTIVE_TAB_KEY)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(0);

    TabList::from_parts(tabs, active)
}

/// Persist the tab list and active index.
pub fn save(store: &mut dyn KeyValueStore, tabs: &TabList) -> Result<()> {
    let json = serde_json::to_string(tabs.tabs())?;
    store.set(TABS_KEY, json)?;
    store.set(ACTIVE_TAB_KEY, tabs.active_index().to_string())?;
    debug!("Saved {} tab(s)", tabs.len());
    Ok(())
}
