use std::sync::Arc;

use cram_core::{FixedClock, Planner, PlannerBuilder};
use jiff::Timestamp;
use tempfile::TempDir;

/// Helper function to create a test planner backed by a SQLite file
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Same as [`create_test_planner`] but with a clock pinned to `now`.
pub async fn create_test_planner_at(now: &str) -> (TempDir, Arc<FixedClock>, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let clock = Arc::new(FixedClock::at(
        now.parse::<Timestamp>().expect("Invalid timestamp"),
    ));
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(clock.clone())
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, clock, planner)
}
