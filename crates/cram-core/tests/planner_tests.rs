mod common;

use cram_core::{
    AddObstacle, AddTask, ErrorKind, NewObstacle, NewTask, ObstacleRef, PlanDay, SetTaskDone,
    SlotQuery, SlotStatus, UserScope,
};
use jiff::SignedDuration;

fn scope(user: &str) -> UserScope {
    UserScope {
        user: user.to_string(),
    }
}

fn new_task(user: &str, title: &str, deadline: &str, difficulty: u8, importance: u8, workload: u8) -> AddTask {
    AddTask {
        user: user.to_string(),
        task: NewTask {
            title: title.to_string(),
            subject: "General".to_string(),
            deadline: deadline.to_string(),
            difficulty,
            importance,
            workload,
        },
    }
}

#[tokio::test]
async fn test_complete_task_workflow() {
    let (_temp_dir, clock, planner) = common::create_test_planner_at("2024-05-20T08:00:00Z").await;

    // Five tasks, scores 14, 16, 18, 20 and 22 on 2024-05-20
    let mut ids = Vec::new();
    for (title, importance) in [("E", 1), ("D", 2), ("C", 3), ("B", 4), ("A", 5)] {
        let task = planner
            .add_task(&new_task("alice", title, "2024-05-20", 1, importance, 1))
            .await
            .expect("Failed to add task");
        ids.push(task.id);
    }

    let ranked = planner.rank_tasks(&scope("alice")).await.unwrap();
    let titles: Vec<&str> = ranked.iter().map(|r| r.task.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C", "D", "E"]);
    let scores: Vec<i64> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![22, 20, 18, 16, 14]);

    // Finish the top task: it drops to the bottom but stays visible
    let done = planner
        .set_task_done(&SetTaskDone {
            user: "alice".to_string(),
            id: ids[4].0,
            done: true,
        })
        .await
        .unwrap();
    assert!(done.done);
    assert!(done.completed_at.is_some());

    let ranked = planner.rank_tasks(&scope("alice")).await.unwrap();
    assert_eq!(ranked.last().unwrap().task.title, "A");
    assert_eq!(planner.pending_tasks(&scope("alice")).await.unwrap().len(), 4);

    // Undo and redo restarts the grace window
    clock.advance(SignedDuration::from_hours(12));
    planner
        .set_task_done(&SetTaskDone {
            user: "alice".to_string(),
            id: ids[4].0,
            done: false,
        })
        .await
        .unwrap();
    planner
        .set_task_done(&SetTaskDone {
            user: "alice".to_string(),
            id: ids[4].0,
            done: true,
        })
        .await
        .unwrap();

    clock.advance(SignedDuration::from_hours(13));
    assert_eq!(planner.list_tasks(&scope("alice")).await.unwrap().len(), 5);

    clock.advance(SignedDuration::from_hours(11));
    let remaining = planner.list_tasks(&scope("alice")).await.unwrap();
    assert_eq!(remaining.len(), 4);
    assert!(remaining.iter().all(|t| t.title != "A"));

    // Ids are never reused after eviction
    let next = planner
        .add_task(&new_task("alice", "F", "2024-05-30", 1, 1, 1))
        .await
        .unwrap();
    assert!(next.id > ids[4]);
}

#[tokio::test]
async fn test_daily_plan_uses_ranking() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    planner
        .add_task(&new_task("bob", "Low", "2099-01-01", 1, 1, 2))
        .await
        .unwrap();
    planner
        .add_task(&new_task("bob", "High", "2099-01-01", 5, 5, 3))
        .await
        .unwrap();

    let plan = planner
        .daily_plan(&PlanDay {
            user: "bob".to_string(),
            hours: 3,
        })
        .await
        .unwrap();
    assert_eq!(plan.tasks.len(), 1);
    assert_eq!(plan.tasks[0].task.title, "High");
    assert_eq!(plan.remaining_hours, 0);
    assert_eq!(plan.overbooked_hours, 0);
}

#[tokio::test]
async fn test_invalid_task_input_rejected() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let cases = [
        new_task("alice", "   ", "2099-01-01", 1, 1, 1),
        new_task("alice", "Essay", "next friday", 1, 1, 1),
        new_task("alice", "Essay", "2099-01-01", 0, 1, 1),
        new_task("alice", "Essay", "2099-01-01", 1, 6, 1),
        new_task("alice", "Essay", "2099-01-01", 1, 1, 11),
    ];
    for case in &cases {
        let err = planner.add_task(case).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "case: {case:?}");
    }
    assert!(planner.list_tasks(&scope("alice")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_complete_obstacle_workflow() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let college = planner
        .add_obstacle(&AddObstacle {
            user: "alice".to_string(),
            obstacle: NewObstacle {
                day: "Monday".to_string(),
                start_hour: 9,
                end_hour: 17,
                label: "College".to_string(),
            },
        })
        .await
        .unwrap();
    let lunch = planner
        .add_obstacle(&AddObstacle {
            user: "alice".to_string(),
            obstacle: NewObstacle {
                day: "mon".to_string(),
                start_hour: 12,
                end_hour: 13,
                label: "Lunch".to_string(),
            },
        })
        .await
        .unwrap();

    let status = |hour: u8| SlotQuery {
        user: "alice".to_string(),
        day: "Mon".to_string(),
        hour,
    };
    assert!(planner.slot_status(&status(8)).await.unwrap().is_free());
    assert_eq!(
        planner.slot_status(&status(12)).await.unwrap().label(),
        Some("Lunch")
    );
    assert_eq!(
        planner.slot_status(&status(16)).await.unwrap().label(),
        Some("College")
    );
    assert!(planner.slot_status(&status(17)).await.unwrap().is_free());

    // Grid agrees with point queries
    let grid = planner.weekly_grid(&scope("alice")).await.unwrap();
    for hour in 0..24 {
        let point = planner.slot_status(&status(hour)).await.unwrap();
        assert_eq!(grid.status(cram_core::Day::Mon, hour), Some(&point));
    }

    // Removing the later obstacle uncovers the earlier one
    planner
        .remove_obstacle(&ObstacleRef {
            user: "alice".to_string(),
            id: lunch.id.0,
        })
        .await
        .unwrap();
    assert_eq!(
        planner.slot_status(&status(12)).await.unwrap(),
        SlotStatus::Busy {
            obstacle_id: college.id,
            label: "College".to_string()
        }
    );

    let err = planner
        .remove_obstacle(&ObstacleRef {
            user: "alice".to_string(),
            id: lunch.id.0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(planner.reset_obstacles(&scope("alice")).await.unwrap(), 1);
    assert!(planner.list_obstacles(&scope("alice")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_users_are_isolated() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    planner
        .add_task(&new_task("alice", "Alice's task", "2099-01-01", 1, 1, 1))
        .await
        .unwrap();
    planner
        .add_obstacle(&AddObstacle {
            user: "alice".to_string(),
            obstacle: NewObstacle {
                day: "Sun".to_string(),
                start_hour: 0,
                end_hour: 24,
                label: "Rest".to_string(),
            },
        })
        .await
        .unwrap();

    assert!(planner.list_tasks(&scope("bob")).await.unwrap().is_empty());
    let grid = planner.weekly_grid(&scope("bob")).await.unwrap();
    assert_eq!(grid.total_free_hours(), 168);
    let grid = planner.weekly_grid(&scope("alice")).await.unwrap();
    assert_eq!(grid.total_free_hours(), 144);
}

#[tokio::test]
async fn test_concurrent_adds_allocate_unique_ids() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let planner = planner.clone();
        handles.push(tokio::spawn(async move {
            planner
                .add_task(&new_task("alice", &format!("Task {i}"), "2099-01-01", 1, 1, 1))
                .await
                .expect("Failed to add task")
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
    assert_eq!(planner.list_tasks(&scope("alice")).await.unwrap().len(), 16);
}
