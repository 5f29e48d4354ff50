//! Markdown formatting for planner results.
//!
//! Core types carry no presentation logic, so this module wraps them in
//! small newtypes that implement [`std::fmt::Display`]. The same output is
//! printed by the terminal renderer and returned as MCP tool text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Core Models    │    │ Display Wrappers│    │   Formatted     │
//! │  (Task, Grid)   │───▶│ (TaskLines, ..) │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`tasks`]: task detail, task lists, rankings and daily plans
//! - [`calendar`]: obstacle lists, slot status and the weekly grid

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

pub mod calendar;
pub mod tasks;

pub use calendar::{GridView, ObstacleLines, ObstacleView, SlotView};
pub use tasks::{PlanView, RankedLines, TaskLines, TaskView};

/// Formats a timestamp in the system time zone as `YYYY-MM-DD HH:MM TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// One-line confirmation for operations without a richer result.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Removed 2 completed tasks");
        assert_eq!(success.to_string(), "Success: Removed 2 completed tasks\n");

        let failure = OperationStatus {
            message: "Nothing to do".to_string(),
            success: false,
        };
        assert!(failure.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_local_datetime_has_date_and_time() {
        let ts: Timestamp = "2024-05-20T08:00:00Z".parse().unwrap();
        let output = LocalDateTime(&ts).to_string();
        assert!(output.contains(':'));
        assert!(output.starts_with("2024-05-"));
    }
}
