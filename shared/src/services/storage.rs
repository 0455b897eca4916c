//! Durable key-value storage for serialized collections.
//!
//! Every collection is one key holding one JSON document. Backends only move
//! strings; [`JsonStore`] owns serialization and the soft-fail policy.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};

use crate::utilities::errors::AppError;

pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replaces the whole payload stored under `key`.
    fn write(&self, key: &str, payload: &str) -> Result<(), AppError>;
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
            || key.contains("..")
        {
            return Err(AppError::StorageError(format!(
                "Invalid storage key '{key}'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        let staging = self.dir.join(format!("{key}.json.tmp"));

        // Readers only ever see the old file or the new one.
        fs::write(&staging, payload)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}

#[derive(Default, Debug)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        match self.entries.read() {
            Ok(entries) => {
                let mut keys: Vec<String> = entries.keys().cloned().collect();
                keys.sort();
                keys
            }
            Err(_) => Vec::new(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::StorageError("Memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::StorageError("Memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

/// Typed load/save of named collections on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl std::fmt::Debug for JsonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl JsonStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    pub fn key(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.namespace, name)
        }
    }

    pub fn try_load<T>(&self, name: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let key = self.key(name);
        match self.backend.read(&key)? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Returns `fallback` when the key is missing, unreadable, or does not
    /// parse. Failures are logged, never raised.
    pub fn load<T>(&self, name: &str, fallback: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_load(name) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("no stored payload for '{}', using fallback", self.key(name));
                fallback
            }
            Err(e) => {
                warn!("failed to load '{}', using fallback: {e}", self.key(name));
                fallback
            }
        }
    }

    pub fn try_save<T>(&self, name: &str, value: &T) -> Result<(), AppError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(value)?;
        self.backend.write(&self.key(name), &payload)
    }

    /// Last write wins. A failed write is logged and the in-memory state
    /// remains authoritative for the session.
    pub fn save<T>(&self, name: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        if let Err(e) = self.try_save(name, value) {
            error!("failed to persist '{}': {e}", self.key(name));
        }
    }
}
