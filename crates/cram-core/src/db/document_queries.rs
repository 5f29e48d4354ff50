//! Key/value document queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::error::{Result, StorageResultExt};

const SELECT_DOCUMENT_SQL: &str = "SELECT value FROM documents WHERE key = ?1";
const UPSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads the raw JSON stored under `key`, if any.
    pub fn load_document(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_DOCUMENT_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to load document")
    }

    /// Stores `value` under `key`, replacing any previous document.
    pub fn save_document(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .storage_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_DOCUMENT_SQL,
            params![key, value, Timestamp::now().to_string()],
        )
        .storage_context("Failed to save document")?;

        tx.commit().storage_context("Failed to commit transaction")
    }

    /// Reads the document under `key`, runs `apply` on it and stores the
    /// replacement it returns, all inside one `BEGIN IMMEDIATE` transaction.
    ///
    /// The write lock is taken before the read, so a second connection
    /// (possibly in another process) waits on the busy timeout instead of
    /// reading a document that is about to change.
    pub fn update_document<F>(&mut self, key: &str, apply: F) -> Result<()>
    where
        F: FnOnce(Option<String>) -> Result<Option<String>>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .storage_context("Failed to begin transaction")?;

        let current: Option<String> = tx
            .query_row(SELECT_DOCUMENT_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to load document")?;

        // Dropping the transaction on error rolls it back
        if let Some(value) = apply(current)? {
            tx.execute(
                UPSERT_DOCUMENT_SQL,
                params![key, value, Timestamp::now().to_string()],
            )
            .storage_context("Failed to save document")?;
        }

        tx.commit().storage_context("Failed to commit transaction")
    }
}
