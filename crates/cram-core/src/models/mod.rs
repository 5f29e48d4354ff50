//! Data models for tasks, obstacles, and the views derived from them.
//!
//! This module contains the plain data structures the engine owns and
//! produces. None of them carry presentation concerns; formatting lives in
//! the CLI crate.
//!
//! - [`Task`] and [`TaskId`]: a user's study tasks
//! - [`Obstacle`], [`ObstacleId`] and [`Day`]: recurring weekly blocked hours
//! - [`SlotStatus`] and [`WeeklyGrid`]: free/busy classification per hour
//! - [`RankedTask`] and [`DailyPlan`]: read models built by the priority
//!   engine
//! - [`TaskList`] and [`ObstacleList`]: the per-user documents persisted
//!   through [`crate::storage::Storage`]
//! - [`TaskLimits`] and [`Bound`]: configurable attribute ranges
//!
//! # Examples
//!
//! ```rust
//! use cram_core::models::{Task, TaskId};
//! use jiff::{civil::date, Timestamp};
//!
//! let mut task = Task {
//!     id: TaskId(1),
//!     title: "Math HW".to_string(),
//!     subject: "Math".to_string(),
//!     deadline: date(2024, 3, 1),
//!     difficulty: 4,
//!     importance: 5,
//!     workload: 3,
//!     done: false,
//!     completed_at: None,
//!     created_at: Timestamp::UNIX_EPOCH,
//! };
//!
//! task.set_done(true, Timestamp::UNIX_EPOCH);
//! assert!(task.completed_at.is_some());
//! ```

pub mod documents;
pub mod grid;
pub mod limits;
pub mod obstacle;
pub mod ranked;
pub mod task;

#[cfg(test)]
mod tests;

pub use documents::{ObstacleList, TaskList};
pub use grid::{GridRow, SlotStatus, WeeklyGrid};
pub use limits::{Bound, TaskLimits};
pub use obstacle::{check_hour, check_hour_range, Day, Obstacle, ObstacleId, HOURS_PER_DAY};
pub use ranked::{DailyPlan, RankedTask};
pub use task::{Task, TaskId};
