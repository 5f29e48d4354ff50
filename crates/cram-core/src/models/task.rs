//! Task model definition and related functionality.

use std::fmt;

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// Stable identifier of a task within one user's task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A study task owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Identifier assigned at creation, never reused within a user's list
    pub id: TaskId,

    /// Display title (never used for identity)
    pub title: String,

    /// Free-text subject the task belongs to
    #[serde(default)]
    pub subject: String,

    /// Calendar date the task is due
    pub deadline: Date,

    /// How hard the task is
    pub difficulty: u8,

    /// How much the task matters
    pub importance: u8,

    /// Estimated effort in hours
    pub workload: u8,

    /// Whether the task has been completed
    #[serde(default)]
    pub done: bool,

    /// When the task was completed; present exactly when `done` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,
}

impl Task {
    /// Transitions the task to `done`, keeping `completed_at` in step.
    ///
    /// Marking a finished task as done again keeps the original completion
    /// time, so repeated calls do not extend its retention.
    pub fn set_done(&mut self, done: bool, now: Timestamp) {
        match (self.done, done) {
            (false, true) => self.completed_at = Some(now),
            (true, false) => self.completed_at = None,
            _ => {}
        }
        self.done = done;
    }

    /// Whether the deadline has passed without the task being finished.
    pub fn is_overdue(&self, today: Date) -> bool {
        !self.done && self.deadline < today
    }

    /// Whole days from `today` until the deadline. Negative once overdue.
    pub fn days_left(&self, today: Date) -> i64 {
        today.duration_until(self.deadline).as_hours() / 24
    }
}
