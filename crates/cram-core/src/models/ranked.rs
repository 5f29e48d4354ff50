//! Derived read models produced by the priority engine.

use serde::{Deserialize, Serialize};

use super::Task;

/// A task together with the facts computed for it at ranking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTask {
    #[serde(flatten)]
    pub task: Task,

    /// Priority score; larger ranks higher
    pub score: i64,

    /// Deadline passed while still unfinished
    pub overdue: bool,
}

/// Tasks picked for today's study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Hours the user said were available
    pub available_hours: u8,

    /// Picked tasks, highest priority first
    pub tasks: Vec<RankedTask>,

    /// Hours left unassigned after picking
    pub remaining_hours: u8,

    /// Hours the last picked task runs past the available time
    pub overbooked_hours: u8,
}

impl DailyPlan {
    /// Whether nothing was picked.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
