//! Integration tests sharing one database between the CLI and the library
//!
//! Data written through one interface must be visible through the other,
//! with the same ids and the same ordering.

use std::{path::Path, process::Command};

use cram_core::{
    params::{AddObstacle, AddTask, NewObstacle, NewTask, UserScope},
    Planner, PlannerBuilder, SlotStatus,
};
use tempfile::TempDir;

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command for `user` and capture its output
fn run_cli_command(db_path: &Path, user: &str, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_cram"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .arg("--user")
        .arg(user)
        .args(args)
        .output()
        .expect("Failed to run CLI command");

    assert!(
        output.status.success(),
        "cram {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn new_task(user: &str, title: &str, importance: u8) -> AddTask {
    AddTask {
        user: user.to_string(),
        task: NewTask {
            title: title.to_string(),
            subject: "History".to_string(),
            deadline: "2099-03-01".to_string(),
            difficulty: 1,
            importance,
            workload: 2,
        },
    }
}

#[tokio::test]
async fn test_cli_sees_tasks_added_through_library() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");

    planner.add_task(&new_task("carol", "Essay", 2)).await.unwrap();
    planner.add_task(&new_task("carol", "Exam prep", 5)).await.unwrap();

    let output = run_cli_command(&db_path, "carol", &["task", "rank"]);
    let exam = output.find("**Exam prep**").expect("Exam prep missing");
    let essay = output.find("**Essay**").expect("Essay missing");
    assert!(exam < essay, "unexpected order:\n{output}");

    let output = run_cli_command(&db_path, "someone-else", &["task", "list"]);
    assert!(output.contains("No tasks."));
}

#[tokio::test]
async fn test_library_sees_changes_made_through_cli() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");

    run_cli_command(
        &db_path,
        "dave",
        &[
            "task",
            "add",
            "Lab report",
            "--deadline",
            "2099-02-01",
            "--difficulty",
            "3",
            "--importance",
            "4",
            "--workload",
            "5",
        ],
    );
    run_cli_command(&db_path, "dave", &["task", "done", "1"]);

    let tasks = planner
        .list_tasks(&UserScope {
            user: "dave".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Lab report");
    assert!(tasks[0].done);
    assert!(tasks[0].completed_at.is_some());
}

#[tokio::test]
async fn test_grid_matches_between_interfaces() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");

    planner
        .add_obstacle(&AddObstacle {
            user: "erin".to_string(),
            obstacle: NewObstacle {
                day: "Wed".to_string(),
                start_hour: 8,
                end_hour: 10,
                label: "Gym".to_string(),
            },
        })
        .await
        .unwrap();
    run_cli_command(&db_path, "erin", &["obstacle", "add", "Wed", "9", "11", "Seminar"]);

    let grid = planner
        .weekly_grid(&UserScope {
            user: "erin".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(
        grid.status(cram_core::Day::Wed, 9).and_then(SlotStatus::label),
        Some("Seminar")
    );

    let output = run_cli_command(&db_path, "erin", &["obstacle", "status", "Wed", "8"]);
    assert!(output.contains("Wed 08:00 is busy: Gym (obstacle 1)"));

    let output = run_cli_command(&db_path, "erin", &["obstacle", "grid"]);
    assert!(output.contains(&format!(
        "{}h free this week",
        grid.total_free_hours()
    )));
}
