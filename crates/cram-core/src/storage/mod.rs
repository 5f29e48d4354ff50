//! The storage collaborator: an opaque key/value persistence boundary.
//!
//! The engine never talks to a database directly. [`crate::tasks::TaskStore`]
//! and [`crate::calendar::ObstacleCalendar`] read a per-user JSON document
//! through [`Storage::load`] and change it through [`Storage::update`], which
//! reads and writes the document as one atomic step. A missing key means
//! "start from the default document".
//!
//! [`crate::locks::UserLocks`] only serializes writers inside one process.
//! Several processes sharing a SQLite file rely on [`Storage::update`] alone.
//!
//! Two implementations ship with the crate:
//!
//! - [`SqliteStorage`]: one SQLite file, one row per key
//! - [`MemoryStorage`]: an in-memory fake for tests
//!
//! Failures surface as [`crate::CramError::StorageUnavailable`]; retrying is
//! left to the implementation.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{CramError, Result};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Kind of per-user collection stored under a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Tasks,
    Obstacles,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Tasks => "tasks",
            CollectionKind::Obstacles => "obstacles",
        }
    }
}

/// Address of one persisted document: a user and a collection kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    pub user: String,
    pub kind: CollectionKind,
}

impl StorageKey {
    pub fn new(user: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            user: user.into(),
            kind,
        }
    }

    pub fn tasks(user: impl Into<String>) -> Self {
        Self::new(user, CollectionKind::Tasks)
    }

    pub fn obstacles(user: impl Into<String>) -> Self {
        Self::new(user, CollectionKind::Obstacles)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user, self.kind.as_str())
    }
}

/// Key/value persistence for JSON documents.
pub trait Storage: Send + Sync {
    /// Reads the document stored under `key`, or `None` if nothing was
    /// saved yet.
    fn load(&self, key: &StorageKey) -> Result<Option<Value>>;

    /// Replaces the document stored under `key`.
    fn save(&self, key: &StorageKey, value: &Value) -> Result<()>;

    /// Reads the document under `key`, passes it to `apply` and stores what
    /// `apply` returns, with no other writer able to touch the key in
    /// between. `Ok(None)` from `apply` keeps the stored document. An error
    /// from `apply` aborts without writing.
    fn update(&self, key: &StorageKey, apply: DocumentUpdate<'_>) -> Result<()>;
}

/// Read-modify-write step handed to [`Storage::update`].
pub type DocumentUpdate<'a> = Box<dyn FnOnce(Option<Value>) -> Result<Option<Value>> + 'a>;

/// Whether [`modify_document`] writes the changed document back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Save,
    Skip,
}

/// Loads and decodes the document under `key`, falling back to `T::default()`.
pub fn load_document<T>(storage: &dyn Storage, key: &StorageKey) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match storage.load(key)? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(T::default()),
    }
}

/// Encodes and saves `document` under `key`.
pub fn save_document<T>(storage: &dyn Storage, key: &StorageKey, document: &T) -> Result<()>
where
    T: Serialize,
{
    let value = serde_json::to_value(document)?;
    storage.save(key, &value)
}

/// Atomically decodes the document under `key`, lets `change` edit it and
/// saves the result.
pub fn update_document<T, R>(
    storage: &dyn Storage,
    key: &StorageKey,
    change: impl FnOnce(&mut T) -> Result<R>,
) -> Result<R>
where
    T: Serialize + DeserializeOwned + Default,
{
    modify_document(storage, key, |document| {
        change(document).map(|output| (output, Write::Save))
    })
}

/// Like [`update_document`], but `change` decides whether the edited
/// document is written back.
pub fn modify_document<T, R>(
    storage: &dyn Storage,
    key: &StorageKey,
    change: impl FnOnce(&mut T) -> Result<(R, Write)>,
) -> Result<R>
where
    T: Serialize + DeserializeOwned + Default,
{
    let mut output = None;
    storage.update(
        key,
        Box::new(|current: Option<Value>| -> Result<Option<Value>> {
            let mut document: T = match current {
                Some(value) => serde_json::from_value(value)?,
                None => T::default(),
            };
            let (result, write) = change(&mut document)?;
            output = Some(result);
            match write {
                Write::Save => Ok(Some(serde_json::to_value(&document)?)),
                Write::Skip => Ok(None),
            }
        }),
    )?;
    output.ok_or_else(|| {
        CramError::storage(format!("Update of document '{key}' never ran")).with_source(
            std::io::Error::new(std::io::ErrorKind::Other, "update closure not invoked"),
        )
    })
}
