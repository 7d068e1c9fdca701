//! Persistent key-value storage for the tab session
//!
//! The tab list is stored as string values under fixed keys, so the storage
//! backend only needs to get and set strings. `JsonFileStore` backs the real
//! app; `MemoryStore` is used when no data directory is available and in tests.

mod file;
pub mod session;

pub use file::JsonFileStore;

use crate::error::Result;
use std::collections::HashMap;

/// String key-value storage.
pub trait KeyValueStore: std::fmt::Debug {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Volatile store that forgets everything on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("userTabs"), None);

        store.set("userTabs", "[]".to_string()).unwrap();
        assert_eq!(store.get("userTabs").as_deref(), Some("[]"));

        store.set("userTabs", "[1]".to_string()).unwrap();
        assert_eq!(store.get("userTabs").as_deref(), Some("[1]"));
    }
}
