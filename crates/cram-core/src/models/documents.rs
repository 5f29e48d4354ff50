//! Persisted per-user documents handed to the storage collaborator.

use serde::{Deserialize, Serialize};

use super::{Obstacle, ObstacleId, Task, TaskId};

/// A user's task collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    /// Next identifier to hand out; only ever grows
    #[serde(default)]
    pub next_id: u64,

    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Reserves the next task identifier.
    pub fn allocate_id(&mut self) -> TaskId {
        // Older documents may predate the counter.
        let floor = self.tasks.iter().map(|t| t.id.0 + 1).max().unwrap_or(0);
        let id = self.next_id.max(floor).max(1);
        self.next_id = id + 1;
        TaskId(id)
    }

    /// Finds a task by identifier.
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}

/// A user's obstacle collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleList {
    #[serde(default)]
    pub next_id: u64,

    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleList {
    /// Reserves the next obstacle identifier.
    pub fn allocate_id(&mut self) -> ObstacleId {
        let floor = self
            .obstacles
            .iter()
            .map(|o| o.id.0 + 1)
            .max()
            .unwrap_or(0);
        let id = self.next_id.max(floor).max(1);
        self.next_id = id + 1;
        ObstacleId(id)
    }
}
