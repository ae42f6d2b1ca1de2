// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Persistence of [`WorkdaySettings`].

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ohno::EnrichableExt;
use parking_lot::Mutex;
use serde_json::Value;

use crate::{StoreError, WorkdaySettings};

/// A store of JSON documents addressed by string keys.
pub trait KeyValueStore {
    /// Reads the document stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read or parsed.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replaces the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// A process-local store. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_owned(), value);
        Ok(())
    }
}

/// Stores each key as `<key>.json` inside a directory.
///
/// The directory is created on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path(key);

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(StoreError::from(error)).enrich_with(|| format!("reading {}", path.display())),
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(StoreError::from)
            .enrich_with(|| format!("parsing {}", path.display()))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let path = self.path(key);

        std::fs::create_dir_all(&self.dir)
            .map_err(StoreError::from)
            .enrich_with(|| format!("creating {}", self.dir.display()))?;

        let text = serde_json::to_string_pretty(&value)?;

        std::fs::write(&path, text)
            .map_err(StoreError::from)
            .enrich_with(|| format!("writing {}", path.display()))
    }
}

/// Loads and saves [`WorkdaySettings`] through a [`KeyValueStore`].
///
/// Both operations degrade instead of failing: load falls back to defaults field by
/// field, and save reports failures through `tracing` only.
///
/// # Examples
///
/// ```
/// use timeleft::store::{MemoryStore, SettingsStore};
/// use timeleft::{ClockTime, WorkdaySettings};
///
/// let settings = SettingsStore::new(MemoryStore::new());
/// assert_eq!(settings.load(), WorkdaySettings::default());
///
/// let early = WorkdaySettings::default().with_start(ClockTime::new(7, 30)?);
/// settings.save(&early);
/// assert_eq!(settings.load(), early);
/// # Ok::<(), timeleft::SettingsError>(())
/// ```
#[derive(Debug)]
pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Key under which the settings document is stored.
    pub const KEY: &'static str = "workdaySettings";

    /// Wraps a key-value store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the stored settings.
    ///
    /// Missing or invalid fields take their defaults. An unreadable document yields
    /// the default settings.
    #[must_use]
    pub fn load(&self) -> WorkdaySettings {
        match self.store.get(Self::KEY) {
            Ok(Some(value)) => WorkdaySettings::from_value(&value),
            Ok(None) => WorkdaySettings::default(),
            Err(error) => {
                tracing::warn!(
                    settings.key = Self::KEY,
                    settings.error = %error,
                    "timeleft.settings.load"
                );
                WorkdaySettings::default()
            }
        }
    }

    /// Persists `settings`, replacing what was stored.
    pub fn save(&self, settings: &WorkdaySettings) {
        if let Err(error) = self.try_save(settings) {
            tracing::warn!(
                settings.key = Self::KEY,
                settings.error = %error,
                "timeleft.settings.save"
            );
        }
    }

    fn try_save(&self, settings: &WorkdaySettings) -> Result<(), StoreError> {
        let value = serde_json::to_value(settings)?;
        self.store.set(Self::KEY, value)
    }
}
