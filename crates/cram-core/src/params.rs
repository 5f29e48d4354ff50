//! Parameter structures for cram operations
//!
//! This module contains shared parameter structures used across the
//! interfaces (CLI, MCP) without framework-specific derives beyond serde and
//! the optional JSON schema. Interface layers build these from their own
//! argument types and hand them to [`crate::Planner`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Raw user input (dates, day labels) stays as strings here; parsing and
//! range checks happen in the core so every interface rejects the same
//! inputs the same way.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CramError, Result};

/// Rejects blank user identifiers.
pub fn validate_user(user: &str) -> Result<&str> {
    if user.trim().is_empty() {
        Err(CramError::invalid_input("user").with_reason("must not be empty"))
    } else {
        Ok(user)
    }
}

/// Parameters for operations scoped to a single user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserScope {
    /// Identifier of the user whose data to use
    pub user: String,
}

/// Fields describing a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NewTask {
    /// Title of the task (required, non-empty)
    pub title: String,
    /// Free-text subject
    #[serde(default)]
    pub subject: String,
    /// Due date as YYYY-MM-DD; past dates are accepted
    pub deadline: String,
    /// Difficulty within the configured bounds (default 1-5)
    pub difficulty: u8,
    /// Importance within the configured bounds (default 1-5)
    pub importance: u8,
    /// Estimated effort in hours (default 1-10)
    pub workload: u8,
}

/// Parameters for adding a task to a user's list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddTask {
    /// Identifier of the owning user
    pub user: String,
    /// Task fields
    #[serde(flatten)]
    pub task: NewTask,
}

/// Parameters for marking a task done or not done.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetTaskDone {
    /// Identifier of the owning user
    pub user: String,
    /// ID of the task
    pub id: u64,
    /// New completion state
    pub done: bool,
}

/// Parameters for building a daily study plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanDay {
    /// Identifier of the user
    pub user: String,
    /// Hours available for study today (1-24)
    pub hours: u8,
}

/// Fields describing a new weekly obstacle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NewObstacle {
    /// Weekday label such as "Mon" or "Monday"
    pub day: String,
    /// First blocked hour (0-23)
    pub start_hour: u8,
    /// First free hour after the block (1-24), exclusive
    pub end_hour: u8,
    /// Description of the commitment
    #[serde(default)]
    pub label: String,
}

/// Parameters for adding an obstacle to a user's week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddObstacle {
    /// Identifier of the owning user
    pub user: String,
    /// Obstacle fields
    #[serde(flatten)]
    pub obstacle: NewObstacle,
}

/// Parameters addressing a single obstacle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ObstacleRef {
    /// Identifier of the owning user
    pub user: String,
    /// ID of the obstacle
    pub id: u64,
}

/// Parameters for querying one hour slot of the week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SlotQuery {
    /// Identifier of the user
    pub user: String,
    /// Weekday label such as "Tue"
    pub day: String,
    /// Hour slot (0-23)
    pub hour: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user() {
        assert_eq!(validate_user("alice").unwrap(), "alice");
        assert!(validate_user("").is_err());
        assert!(validate_user("   ").is_err());
    }

    #[test]
    fn test_add_task_flattens_fields() {
        let params: AddTask = serde_json::from_str(
            r#"{"user":"alice","title":"Math HW","deadline":"2024-03-01","difficulty":4,"importance":5,"workload":3}"#,
        )
        .unwrap();
        assert_eq!(params.user, "alice");
        assert_eq!(params.task.title, "Math HW");
        assert_eq!(params.task.subject, "");
        assert_eq!(params.task.workload, 3);
    }
}
