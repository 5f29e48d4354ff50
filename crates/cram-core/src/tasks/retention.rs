//! Eviction of completed tasks after a grace window.

use jiff::{SignedDuration, Timestamp};

use crate::models::Task;

/// Keeps completed tasks visible for a grace window, then drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    grace: SignedDuration,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            grace: SignedDuration::from_hours(24),
        }
    }
}

impl RetentionPolicy {
    /// Policy with a custom grace window.
    pub fn with_grace(grace: SignedDuration) -> Self {
        Self { grace }
    }

    pub fn grace(&self) -> SignedDuration {
        self.grace
    }

    /// Whether `task` finished at least one grace window before `now`.
    pub fn is_expired(&self, task: &Task, now: Timestamp) -> bool {
        match (task.done, task.completed_at) {
            (true, Some(completed_at)) => now.duration_since(completed_at) >= self.grace,
            _ => false,
        }
    }

    /// Removes expired tasks in place, preserving the order of the rest.
    /// Returns how many were removed.
    pub fn sweep(&self, tasks: &mut Vec<Task>, now: Timestamp) -> usize {
        let before = tasks.len();
        tasks.retain(|task| !self.is_expired(task, now));
        before - tasks.len()
    }
}
