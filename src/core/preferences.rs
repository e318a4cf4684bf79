//! # Preference Store
//!
//! A tiny key-value store holding the one setting that outlives a session:
//! the display language, under [`LANGUAGE_KEY`].
//!
//! The in-memory language in `LocaleResolver` is the source of truth while
//! the app runs. The store is a write-through cache read once at the next
//! startup, so a failed write only costs the next session its preference.

use log::{debug, warn};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const LANGUAGE_KEY: &str = "language";

pub trait PreferenceStore {
    /// `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Writes synchronously; the value is durable when this returns `Ok`.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// JSON object on disk, e.g. `{"language": "fr"}`.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> io::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        // Only a corrupt file is replaced; other read failures keep it intact
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(
                    "Discarding corrupt preferences at {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        atomic_write_json(&self.path, &entries)?;
        debug!("Preference {} = {} written to {}", key, value, self.path.display());
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// In-memory store. Clones share the same entries, so a test can hand one
/// clone to a resolver and read the "disk" through another.
#[derive(Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
