//! SQLite-backed storage.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{DocumentUpdate, Storage, StorageKey};
use crate::{
    db::Database,
    error::{CramError, Result},
};

/// Stores each document as one row of a SQLite file.
///
/// A fresh connection is opened for every call, so the storage can be shared
/// across threads without holding a connection. [`Storage::update`] runs in a
/// single immediate transaction, which keeps read-modify-write cycles atomic
/// even between processes sharing the file.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    path: PathBuf,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `path` and prepares the
    /// schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CramError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Database::new(&path)?;
        Ok(Self { path })
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for SqliteStorage {
    fn load(&self, key: &StorageKey) -> Result<Option<Value>> {
        let db = Database::new(&self.path)?;
        match db.load_document(&key.to_string())? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &StorageKey, value: &Value) -> Result<()> {
        let mut db = Database::new(&self.path)?;
        db.save_document(&key.to_string(), &value.to_string())
    }

    fn update(&self, key: &StorageKey, apply: DocumentUpdate<'_>) -> Result<()> {
        let mut db = Database::new(&self.path)?;
        db.update_document(&key.to_string(), |raw| {
            let current = raw.map(|raw| serde_json::from_str(&raw)).transpose()?;
            Ok(apply(current)?.map(|value| value.to_string()))
        })
    }
}
