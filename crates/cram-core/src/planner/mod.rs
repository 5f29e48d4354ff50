//! High-level planner API for tasks and weekly obstacles.
//!
//! This module provides the main [`Planner`] interface used by the CLI and
//! the MCP server. The planner wires the engine components together and
//! runs their blocking storage work off the async runtime.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / MCP      │    │    Planner      │    │  TaskStore /    │
//! │  handlers       │───▶│  (task_ops,     │───▶│  ObstacleCal.   │───▶ Storage
//! │                 │    │  obstacle_ops)  │    │  (+ locks)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`task_ops`]: Task operations (add, done, list, rank, pending, plan, sweep)
//! - [`obstacle_ops`]: Obstacle operations (add, list, remove, status, grid,
//!   reset)
//!
//! Every read of the task list goes through the retention sweep first, so
//! completed tasks past the grace window are never returned.
//!
//! # Usage Examples
//!
//! ```rust
//! use cram_core::{
//!     params::{AddTask, NewTask, UserScope},
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
//!     .add_task(&AddTask {
//!         user: "alice".to_string(),
//!         task: NewTask {
//!             title: "Math HW".to_string(),
//!             subject: "Math".to_string(),
//!             deadline: "2030-01-10".to_string(),
//!             difficulty: 4,
//!             importance: 5,
//!             workload: 3,
//!         },
//!     })
//!     .await?;
//!
//! let ranked = planner
//!     .rank_tasks(&UserScope { user: "alice".to_string() })
//!     .await?;
//! assert_eq!(ranked.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::Zoned;
use tokio::task;

use crate::{
    calendar::ObstacleCalendar,
    clock::Clock,
    error::{CramError, Result},
    tasks::{PriorityEngine, TaskStore},
};

pub mod builder;
pub mod obstacle_ops;
pub mod task_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing tasks and obstacles.
#[derive(Clone)]
pub struct Planner {
    pub(crate) tasks: Arc<TaskStore>,
    pub(crate) calendar: Arc<ObstacleCalendar>,
    pub(crate) engine: PriorityEngine,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Planner {
    pub(crate) fn new(
        tasks: TaskStore,
        calendar: ObstacleCalendar,
        engine: PriorityEngine,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tasks: Arc::new(tasks),
            calendar: Arc::new(calendar),
            engine,
            clock,
        }
    }

    /// Current time according to the configured clock.
    pub fn now(&self) -> Zoned {
        self.clock.now()
    }

    /// The scoring engine in use.
    pub fn engine(&self) -> &PriorityEngine {
        &self.engine
    }
}

/// Runs blocking engine work on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| CramError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}
