//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::{run_blocking, Planner};
use crate::{
    calendar::ObstacleCalendar,
    clock::{Clock, SystemClock},
    error::{CramError, Result},
    locks::UserLocks,
    models::TaskLimits,
    storage::{SqliteStorage, Storage},
    tasks::{PriorityEngine, RetentionPolicy, TaskStore},
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Arc<dyn Storage>>,
    limits: TaskLimits,
    retention: RetentionPolicy,
    engine: PriorityEngine,
    clock: Option<Arc<dyn Clock>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            storage: None,
            limits: TaskLimits::default(),
            retention: RetentionPolicy::default(),
            engine: PriorityEngine::default(),
            clock: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cram/cram.db` or `~/.local/share/cram/cram.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `storage` instead of a SQLite file.
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Sets the bounds new tasks are validated against.
    pub fn with_limits(mut self, limits: TaskLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets how long completed tasks stay visible.
    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    /// Sets the source of the current time.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `CramError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `CramError::StorageUnavailable` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let storage: Arc<dyn Storage> = match self.storage {
            Some(storage) => storage,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                debug!("Opening database at {}", db_path.display());
                let sqlite = run_blocking(move || SqliteStorage::open(db_path)).await?;
                Arc::new(sqlite)
            }
        };

        let locks = Arc::new(UserLocks::new());
        let tasks = TaskStore::new(storage.clone(), locks.clone(), self.limits, self.retention);
        let calendar = ObstacleCalendar::new(storage, locks);
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        Ok(Planner::new(tasks, calendar, self.engine, clock))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cram")
            .place_data_file("cram.db")
            .map_err(|e| CramError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
