//! In-memory storage for tests and embedding.

use std::{
    collections::HashMap,
    io,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex, PoisonError,
    },
};

use serde_json::Value;

use super::{DocumentUpdate, Storage, StorageKey};
use crate::error::{CramError, Result};

/// Keeps documents in a map. Can be switched offline to exercise
/// storage-failure paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, Value>>,
    offline: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent load and save fail (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Raw document stored under `key`, bypassing the offline switch.
    pub fn get(&self, key: &StorageKey) -> Option<Value> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key.to_string())
            .cloned()
    }

    /// Number of documents written so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_online(&self, action: &str, key: &StorageKey) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CramError::storage(format!("Failed to {action} document '{key}'"))
                .with_source(io::Error::new(io::ErrorKind::NotConnected, "storage offline")));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &StorageKey) -> Result<Option<Value>> {
        self.check_online("load", key)?;
        Ok(self.get(key))
    }

    fn save(&self, key: &StorageKey, value: &Value) -> Result<()> {
        self.check_online("save", key)?;
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn update(&self, key: &StorageKey, apply: DocumentUpdate<'_>) -> Result<()> {
        self.check_online("update", key)?;
        let mut documents = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let name = key.to_string();
        if let Some(value) = apply(documents.get(&name).cloned())? {
            documents.insert(name, value);
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_load_missing_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load(&StorageKey::tasks("alice")).unwrap(), None);
    }

    #[test]
    fn test_keys_partition_by_user_and_kind() {
        let storage = MemoryStorage::new();
        storage
            .save(&StorageKey::tasks("alice"), &json!({"n": 1}))
            .unwrap();
        storage
            .save(&StorageKey::obstacles("alice"), &json!({"n": 2}))
            .unwrap();

        assert_eq!(
            storage.load(&StorageKey::tasks("alice")).unwrap(),
            Some(json!({"n": 1}))
        );
        assert_eq!(
            storage.load(&StorageKey::obstacles("alice")).unwrap(),
            Some(json!({"n": 2}))
        );
        assert_eq!(storage.load(&StorageKey::tasks("bob")).unwrap(), None);
    }

    #[test]
    fn test_update_counts_only_real_writes() {
        let storage = MemoryStorage::new();
        let key = StorageKey::tasks("alice");

        storage
            .update(&key, Box::new(|_| Ok(Some(json!({"n": 1})))))
            .unwrap();
        storage.update(&key, Box::new(|_| Ok(None))).unwrap();
        assert_eq!(storage.writes(), 1);
        assert_eq!(storage.get(&key), Some(json!({"n": 1})));
    }

    #[test]
    fn test_offline_reports_storage_unavailable() {
        let storage = MemoryStorage::new();
        storage.set_offline(true);

        let err = storage.load(&StorageKey::tasks("alice")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
        let err = storage
            .save(&StorageKey::tasks("alice"), &json!({}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
        let err = storage
            .update(&StorageKey::tasks("alice"), Box::new(|_| Ok(None)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);

        storage.set_offline(false);
        assert!(storage.load(&StorageKey::tasks("alice")).is_ok());
    }
}
