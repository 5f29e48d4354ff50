//! Core library for the Cram study planner.
//!
//! This crate provides the engine behind the `cram` CLI: a per-user task
//! list scored and ranked by priority, a retention policy that evicts
//! finished work after a grace window, and a weekly obstacle calendar that
//! answers free/busy questions for every hour of the week.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): tasks, obstacles, the weekly grid and the
//!   persisted documents
//! - **Task engine** ([`tasks`]): [`TaskStore`], [`PriorityEngine`],
//!   [`RetentionPolicy`] and the greedy daily plan
//! - **Calendar** ([`calendar`]): [`ObstacleCalendar`] and slot resolution
//! - **Storage** ([`storage`]): the key/value persistence boundary with a
//!   SQLite implementation and an in-memory fake
//! - **Planner** ([`planner`]): the async facade used by the CLI and the MCP
//!   server
//!
//! Presentation lives in the CLI crate; nothing here formats output for a
//! terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use cram_core::{
//!     params::{AddObstacle, NewObstacle, UserScope},
//!     storage::MemoryStorage,
//!     PlannerBuilder,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_storage(Arc::new(MemoryStorage::new()))
//!     .build()
//!     .await?;
//!
//! planner
//!     .add_obstacle(&AddObstacle {
//!         user: "alice".to_string(),
//!         obstacle: NewObstacle {
//!             day: "Mon".to_string(),
//!             start_hour: 9,
//!             end_hour: 17,
//!             label: "College".to_string(),
//!         },
//!     })
//!     .await?;
//!
//! let grid = planner
//!     .weekly_grid(&UserScope { user: "alice".to_string() })
//!     .await?;
//! assert_eq!(grid.total_free_hours(), 160);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod clock;
pub mod db;
pub mod error;
pub mod locks;
pub mod models;
pub mod params;
pub mod planner;
pub mod storage;
pub mod tasks;

// Re-export commonly used types
pub use calendar::ObstacleCalendar;
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use error::{CramError, ErrorKind, Result};
pub use locks::UserLocks;
pub use models::{
    DailyPlan, Day, Obstacle, ObstacleId, RankedTask, SlotStatus, Task, TaskId, TaskLimits,
    WeeklyGrid,
};
pub use params::{
    AddObstacle, AddTask, NewObstacle, NewTask, ObstacleRef, PlanDay, SetTaskDone, SlotQuery,
    UserScope,
};
pub use planner::{Planner, PlannerBuilder};
pub use storage::{MemoryStorage, SqliteStorage, Storage, StorageKey};
pub use tasks::{PriorityEngine, RetentionPolicy, TaskStore};
