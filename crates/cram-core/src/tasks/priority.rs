//! Task priority scoring and ranking.
//!
//! A task's score combines what the user told us about it with how close
//! its deadline is:
//!
//! ```text
//! days_left = deadline - today            (whole days, negative if overdue)
//! urgency   = clamp(10 - days_left, 0, 10)
//! score     = importance * 2 + difficulty + workload + urgency
//! ```
//!
//! Urgency saturates: an overdue task is exactly as urgent as one due today.
//!
//! Ranking orders unfinished tasks before finished ones, then by score
//! (highest first), then by earlier deadline, then by insertion order.

use std::cmp::Ordering;

use jiff::civil::Date;

use crate::models::{RankedTask, Task};

/// Days before the deadline at which urgency starts to build.
pub const DEFAULT_URGENCY_HORIZON: i64 = 10;

/// Computes priority scores and the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityEngine {
    urgency_horizon: i64,
}

impl Default for PriorityEngine {
    fn default() -> Self {
        Self {
            urgency_horizon: DEFAULT_URGENCY_HORIZON,
        }
    }
}

impl PriorityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deadline-proximity contribution, in `0..=horizon`.
    pub fn urgency(&self, task: &Task, today: Date) -> i64 {
        (self.urgency_horizon - task.days_left(today)).clamp(0, self.urgency_horizon)
    }

    /// Priority score of `task` as of `today`. Larger means more important.
    pub fn score(&self, task: &Task, today: Date) -> i64 {
        i64::from(task.importance) * 2
            + i64::from(task.difficulty)
            + i64::from(task.workload)
            + self.urgency(task, today)
    }

    /// Scores a task and derives its overdue flag.
    pub fn evaluate(&self, task: &Task, today: Date) -> RankedTask {
        RankedTask {
            task: task.clone(),
            score: self.score(task, today),
            overdue: task.is_overdue(today),
        }
    }

    /// Orders `tasks` by priority. Pure and stable; tasks with identical keys
    /// keep their relative order.
    pub fn rank(&self, tasks: &[Task], today: Date) -> Vec<RankedTask> {
        let mut ranked: Vec<RankedTask> = tasks.iter().map(|t| self.evaluate(t, today)).collect();
        ranked.sort_by(compare_ranked);
        ranked
    }
}

/// Total order used by [`PriorityEngine::rank`].
fn compare_ranked(a: &RankedTask, b: &RankedTask) -> Ordering {
    a.task
        .done
        .cmp(&b.task.done)
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| a.task.deadline.cmp(&b.task.deadline))
        .then_with(|| a.task.id.cmp(&b.task.id))
}
