//! Durable key/value store: one pretty-printed JSON file per logical key.
//!
//! Reads never fail hard: a missing or unreadable key yields the caller's
//! fallback. Writes go to a temp file first and are renamed into place.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Expenses,
    Categories,
    Settings,
    Debug,
}

impl StoreKey {
    pub const ALL: [StoreKey; 4] = [
        StoreKey::Expenses,
        StoreKey::Categories,
        StoreKey::Settings,
        StoreKey::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Expenses => "expenses",
            StoreKey::Categories => "categories",
            StoreKey::Settings => "settings",
            StoreKey::Debug => "debug",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> Result<()> {
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("serialize {key}"))?;
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("replace {}", path.display()))?;
        debug!(%key, path = %path.display(), "saved");
        Ok(())
    }

    pub fn load<T: DeserializeOwned>(&self, key: StoreKey, fallback: T) -> T {
        let path = self.path(key);
        if !path.exists() {
            return fallback;
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(%key, error = %e, "failed to read; using fallback");
                return fallback;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(%key, error = %e, "failed to parse; using fallback");
                self.quarantine(key);
                fallback
            }
        }
    }

    /// Move an unparseable file aside so the next save can't overwrite it.
    fn quarantine(&self, key: StoreKey) {
        let path = self.path(key);
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let backup = self.dir.join(format!("{}.json.corrupt-{stamp}", key.as_str()));
        match fs::rename(&path, &backup) {
            Ok(()) => warn!(%key, backup = %backup.display(), "kept unreadable file"),
            Err(e) => warn!(%key, error = %e, "failed to move unreadable file aside"),
        }
    }

    pub fn remove(&self, key: StoreKey) {
        let path = self.path(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(%key, error = %e, "failed to remove");
            }
        }
    }

    pub fn clear(&self) {
        for key in StoreKey::ALL {
            self.remove(key);
        }
    }
}
