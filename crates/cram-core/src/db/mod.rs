//! Database operations and SQLite management for persisted documents.
//!
//! This module provides the low-level SQLite access behind
//! [`crate::storage::SqliteStorage`]. It handles connections, schema
//! management, and the key/value document queries.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, StorageResultExt};

pub mod document_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mostly useful in tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().storage_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
