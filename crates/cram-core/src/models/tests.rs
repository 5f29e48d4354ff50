//! Tests for the models module.

use jiff::{civil::date, Timestamp, ToSpan};

use super::*;
use crate::error::ErrorKind;

fn sample_task() -> Task {
    Task {
        id: TaskId(1),
        title: "Math HW".to_string(),
        subject: "Math".to_string(),
        deadline: date(2024, 3, 10),
        difficulty: 4,
        importance: 5,
        workload: 3,
        done: false,
        completed_at: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn test_set_done_keeps_completed_at_in_step() {
    let mut task = sample_task();
    let t0 = Timestamp::UNIX_EPOCH;
    let t1 = t0 + 5.hours();

    task.set_done(true, t0);
    assert!(task.done);
    assert_eq!(task.completed_at, Some(t0));

    // Re-marking keeps the original completion time
    task.set_done(true, t1);
    assert_eq!(task.completed_at, Some(t0));

    task.set_done(false, t1);
    assert!(!task.done);
    assert_eq!(task.completed_at, None);

    task.set_done(false, t1);
    assert_eq!(task.completed_at, None);
}

#[test]
fn test_days_left_and_overdue() {
    let task = sample_task();
    assert_eq!(task.days_left(date(2024, 3, 10)), 0);
    assert_eq!(task.days_left(date(2024, 3, 7)), 3);
    assert_eq!(task.days_left(date(2024, 3, 12)), -2);

    assert!(!task.is_overdue(date(2024, 3, 10)));
    assert!(task.is_overdue(date(2024, 3, 11)));

    let mut finished = task.clone();
    finished.set_done(true, Timestamp::UNIX_EPOCH);
    assert!(!finished.is_overdue(date(2024, 3, 11)));
}

#[test]
fn test_task_serializes_dates_as_iso_strings() {
    let task = sample_task();
    let json = serde_json::to_value(&task).expect("serialize");
    assert_eq!(json["deadline"], "2024-03-10");
    assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    assert!(json.get("completed_at").is_none());

    let back: Task = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, task);
}

#[test]
fn test_day_parsing() {
    assert_eq!("Mon".parse::<Day>().unwrap(), Day::Mon);
    assert_eq!("tuesday".parse::<Day>().unwrap(), Day::Tue);
    assert_eq!(" SUN ".parse::<Day>().unwrap(), Day::Sun);

    let err = "Funday".parse::<Day>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_day_from_weekday() {
    assert_eq!(Day::from(date(2024, 3, 11).weekday()), Day::Mon);
    assert_eq!(Day::from(date(2024, 3, 17).weekday()), Day::Sun);
}

#[test]
fn test_hour_range_validation() {
    assert!(check_hour_range(0, 24).is_ok());
    assert!(check_hour_range(9, 10).is_ok());
    assert!(check_hour_range(9, 9).is_err());
    assert!(check_hour_range(12, 9).is_err());
    assert!(check_hour_range(24, 25).is_err());
    assert!(check_hour_range(0, 25).is_err());

    assert!(check_hour(23).is_ok());
    assert_eq!(check_hour(24).unwrap_err().kind(), ErrorKind::Validation);
}

#[test]
fn test_obstacle_covers_half_open_interval() {
    let obstacle = Obstacle {
        id: ObstacleId(1),
        day: Day::Tue,
        start_hour: 9,
        end_hour: 12,
        label: "Class".to_string(),
    };
    assert!(!obstacle.covers(Day::Tue, 8));
    assert!(obstacle.covers(Day::Tue, 9));
    assert!(obstacle.covers(Day::Tue, 11));
    assert!(!obstacle.covers(Day::Tue, 12));
    assert!(!obstacle.covers(Day::Wed, 10));
    assert_eq!(obstacle.duration_hours(), 3);
}

#[test]
fn test_bound_check_never_clamps() {
    let bound = Bound::new(1, 5).unwrap();
    assert_eq!(bound.check("difficulty", 5).unwrap(), 5);
    let err = bound.check("difficulty", 6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("between 1 and 5"));

    assert!(Bound::new(5, 1).is_err());
    let single = Bound::new(3, 3).unwrap();
    assert_eq!((single.min(), single.max()), (3, 3));
}

#[test]
fn test_ten_point_limits() {
    let limits = TaskLimits::ten_point();
    assert!(limits.importance.contains(10));
    assert!(limits.difficulty.contains(10));
    assert!(!TaskLimits::default().importance.contains(10));
    assert_eq!(limits.workload.max(), 10);
    for bound in [limits.difficulty, limits.importance, limits.workload] {
        assert!(bound.min() <= bound.max());
    }
}

#[test]
fn test_allocate_id_is_monotonic() {
    let mut list = TaskList::default();
    assert_eq!(list.allocate_id(), TaskId(1));
    assert_eq!(list.allocate_id(), TaskId(2));

    // A document without a counter still avoids existing ids
    let mut legacy = TaskList {
        next_id: 0,
        tasks: vec![Task {
            id: TaskId(7),
            ..sample_task()
        }],
    };
    assert_eq!(legacy.allocate_id(), TaskId(8));
}

#[test]
fn test_empty_grid_counts() {
    let grid = WeeklyGrid::build(|_, _| SlotStatus::Free);
    assert_eq!(grid.rows.len(), 7);
    assert!(grid.iter().all(|row| row.slots.len() == 24));
    assert_eq!(grid.total_free_hours(), 168);
    assert_eq!(grid.status(Day::Fri, 23), Some(&SlotStatus::Free));
    assert_eq!(grid.status(Day::Fri, 24), None);
}

#[test]
fn test_slot_status_serialization() {
    let busy = SlotStatus::Busy {
        obstacle_id: ObstacleId(2),
        label: "Lunch".to_string(),
    };
    let json = serde_json::to_value(&busy).unwrap();
    assert_eq!(json["status"], "busy");
    assert_eq!(json["label"], "Lunch");
    assert_eq!(busy.label(), Some("Lunch"));
    assert!(!busy.is_free());
}
