//! JSON file backed store
//!
//! All entries live in one JSON object on disk. Every `set` rewrites the
//! whole file through a temporary sibling and a rename.

use super::KeyValueStore;
use crate::config::APP_NAME;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store file name inside the data directory
const STORE_FILE_NAME: &str = "storage.json";

/// Store backed by a JSON object of string values.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `<data_dir>/steptabs/storage.json`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigDirNotFound` if the data directory cannot be determined.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .map(|base| base.join(APP_NAME))
            .ok_or(Error::ConfigDirNotFound)?;
        Ok(Self::open(dir.join(STORE_FILE_NAME)))
    }

    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// also treated as empty and will be overwritten on the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable store at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!(
            "Opened store at {} with {} entries",
            path.display(),
            entries.len()
        );
        Self { path, entries }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let save_err = |source: Box<dyn std::error::Error + Send + Sync>| Error::StoreSave {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| save_err(Box::new(e)))?;
        }

        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| save_err(Box::new(e)))?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(|e| save_err(Box::new(e)))?;
        fs::rename(&temp_path, &self.path).map_err(|e| save_err(Box::new(e)))?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    Ok(serde_json::from_str(&contents)?)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}
