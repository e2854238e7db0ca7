//! Persisted boolean flags
//!
//! A tiny key-value store for the handful of booleans the app remembers
//! between launches. Values live in one JSON object on disk:
//!
//! ```json
//! { "onboarding": false }
//! ```
//!
//! [`PersistedFlagStore`] never fails. If the backend cannot be read or
//! written the store logs a warning and keeps the value in memory for the
//! rest of the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config;

/// File name of the preferences object inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("value for {key:?} is not a boolean")]
    Malformed { key: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Where flag values actually live.
pub trait FlagBackend {
    /// Stored value for `key`, or `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<bool>>;
    /// Durably store `value` under `key`.
    fn store(&mut self, key: &str, value: bool) -> Result<()>;
}

/// JSON object on disk, one entry per flag.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.json` inside the app data directory.
    pub fn in_data_dir() -> Self {
        Self::new(config::data_dir().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                if contents.trim().is_empty() {
                    return Ok(Map::new());
                }
                Ok(serde_json::from_str(&contents)?)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl FlagBackend for JsonFileBackend {
    fn load(&self, key: &str) -> Result<Option<bool>> {
        match self.read_map()?.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(StorageError::Malformed { key: key.to_string() }),
        }
    }

    fn store(&mut self, key: &str, value: bool) -> Result<()> {
        // Keep whatever else is in the file, unless it is unreadable garbage
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Json(e)) => {
                log::warn!("replacing corrupt {}: {e}", self.path.display());
                Map::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), Value::Bool(value));
        let contents = serde_json::to_string_pretty(&map)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write beside the target and swap it in, so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory backend. Clones share the same values, so dropping a store and
/// building a new one on a clone behaves like an app relaunch.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: Rc<RefCell<HashMap<String, bool>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.values.borrow().get(key).copied())
    }

    fn store(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// Reads and writes named boolean flags on top of a [`FlagBackend`].
pub struct PersistedFlagStore {
    backend: Box<dyn FlagBackend>,
    /// Values whose write failed; they win over the backend for this session.
    fallback: HashMap<String, bool>,
    degraded: bool,
}

impl PersistedFlagStore {
    pub fn new(backend: impl FlagBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            fallback: HashMap::new(),
            degraded: false,
        }
    }

    /// Store backed by `preferences.json` in the app data directory.
    pub fn open_default() -> Self {
        let backend = JsonFileBackend::in_data_dir();
        log::debug!("flag store at {}", backend.path().display());
        Self::new(backend)
    }

    /// Stored value for `key`, or `default` if nothing was ever written.
    /// The default is not written back.
    pub fn read(&self, key: &str, default: bool) -> bool {
        if let Some(value) = self.fallback.get(key) {
            return *value;
        }
        match self.backend.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                log::warn!("could not read flag {key:?}, using {default}: {e}");
                default
            }
        }
    }

    pub fn write(&mut self, key: &str, value: bool) {
        match self.backend.store(key, value) {
            Ok(()) => {
                self.fallback.remove(key);
            }
            Err(e) => {
                log::warn!("could not persist flag {key:?}, keeping it for this session: {e}");
                self.fallback.insert(key.to_string(), value);
                self.degraded = true;
            }
        }
    }

    /// True once any write has failed during this session.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that refuses everything.
    struct BrokenBackend;

    impl FlagBackend for BrokenBackend {
        fn load(&self, _key: &str) -> Result<Option<bool>> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }

        fn store(&mut self, _key: &str, _value: bool) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }
    }

    #[test]
    fn test_read_default_when_missing() {
        let backend = MemoryBackend::new();
        let store = PersistedFlagStore::new(backend.clone());
        assert!(store.read("onboarding", true));
        assert!(!store.read("onboarding", false));
        // Default is not written back
        assert_eq!(backend.load("onboarding").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let mut store = PersistedFlagStore::new(MemoryBackend::new());
        store.write("onboarding", false);
        assert!(!store.read("onboarding", true));
        store.write("onboarding", true);
        assert!(store.read("onboarding", false));
    }

    #[test]
    fn test_value_survives_relaunch() {
        let backend = MemoryBackend::new();
        {
            let mut store = PersistedFlagStore::new(backend.clone());
            store.write("onboarding", false);
        }
        let store = PersistedFlagStore::new(backend);
        assert!(!store.read("onboarding", true));
    }

    #[test]
    fn test_json_file_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        let mut store = PersistedFlagStore::new(JsonFileBackend::new(&path));
        assert!(store.read("onboarding", true));
        assert!(!path.exists());
        store.write("onboarding", false);
        assert!(path.exists());

        let store = PersistedFlagStore::new(JsonFileBackend::new(&path));
        assert!(!store.read("onboarding", true));
        assert!(!store.is_degraded());
    }

    #[test]
    fn test_json_file_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, r#"{"theme": "blue", "onboarding": true}"#).unwrap();

        let mut backend = JsonFileBackend::new(&path);
        backend.store("onboarding", false).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let map: Map<String, Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(map.get("theme"), Some(&Value::String("blue".into())));
        assert_eq!(map.get("onboarding"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_json_file_malformed_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, r#"{"onboarding": "yes"}"#).unwrap();

        let backend = JsonFileBackend::new(&path);
        assert!(matches!(
            backend.load("onboarding"),
            Err(StorageError::Malformed { .. })
        ));
        // The store falls back to the default instead
        let store = PersistedFlagStore::new(backend);
        assert!(store.read("onboarding", true));
    }

    #[test]
    fn test_json_file_corrupt_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let store = PersistedFlagStore::new(JsonFileBackend::new(&path));
        assert!(store.read("onboarding", true));
    }

    #[test]
    fn test_write_repairs_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let mut store = PersistedFlagStore::new(JsonFileBackend::new(&path));
        store.write("onboarding", false);
        assert!(!store.is_degraded());

        // Completion survives a relaunch
        let store = PersistedFlagStore::new(JsonFileBackend::new(&path));
        assert!(!store.read("onboarding", true));
        let map: Map<String, Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(map.get("onboarding"), Some(&Value::Bool(false)));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_broken_backend_keeps_session_value() {
        let mut store = PersistedFlagStore::new(BrokenBackend);
        assert!(store.read("onboarding", true));
        assert!(!store.is_degraded());

        store.write("onboarding", false);
        assert!(store.is_degraded());
        assert!(!store.read("onboarding", true));
    }
}
