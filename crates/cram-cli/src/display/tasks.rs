//! Task, ranking and daily plan formatting.

use std::fmt;

use cram_core::{DailyPlan, RankedTask, Task};

use super::LocalDateTime;

fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

fn subject_suffix(task: &Task) -> String {
    if task.subject.is_empty() {
        String::new()
    } else {
        format!(" ({})", task.subject)
    }
}

/// Full details of a single task.
pub struct TaskView<'a>(pub &'a Task);

impl fmt::Display for TaskView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;
        writeln!(f, "### {}. {}{}", task.id, task.title, subject_suffix(task))?;
        writeln!(f)?;
        writeln!(f, "- Deadline: {}", task.deadline)?;
        writeln!(
            f,
            "- Difficulty: {}, Importance: {}, Workload: {}h",
            task.difficulty, task.importance, task.workload
        )?;
        match &task.completed_at {
            Some(at) => writeln!(f, "- Status: done ({})", LocalDateTime(at))?,
            None => writeln!(f, "- Status: open")?,
        }
        writeln!(f, "- Created: {}", LocalDateTime(&task.created_at))
    }
}

/// Tasks in insertion order, one line each.
pub struct TaskLines<'a>(pub &'a [Task]);

impl fmt::Display for TaskLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks.");
        }
        for task in self.0 {
            writeln!(
                f,
                "- {} {}. **{}**{} due {}, {}h",
                checkbox(task.done),
                task.id,
                task.title,
                subject_suffix(task),
                task.deadline,
                task.workload
            )?;
        }
        Ok(())
    }
}

/// Tasks in priority order with their scores.
pub struct RankedLines<'a>(pub &'a [RankedTask]);

impl RankedLines<'_> {
    fn fmt_line(f: &mut fmt::Formatter<'_>, position: usize, ranked: &RankedTask) -> fmt::Result {
        let task = &ranked.task;
        write!(
            f,
            "{}. {} {}. **{}**{} score {}, due {}, {}h",
            position,
            checkbox(task.done),
            task.id,
            task.title,
            subject_suffix(task),
            ranked.score,
            task.deadline,
            task.workload
        )?;
        if ranked.overdue {
            write!(f, " *overdue*")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for RankedLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks.");
        }
        for (index, ranked) in self.0.iter().enumerate() {
            Self::fmt_line(f, index + 1, ranked)?;
        }
        Ok(())
    }
}

/// Today's picks and the hours left over.
pub struct PlanView<'a>(pub &'a DailyPlan);

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "# Study Plan ({}h available)", plan.available_hours)?;
        writeln!(f)?;
        if plan.is_empty() {
            writeln!(f, "Nothing to study.")?;
            return Ok(());
        }
        write!(f, "{}", RankedLines(&plan.tasks))?;
        writeln!(f)?;
        writeln!(f, "Remaining: {}h", plan.remaining_hours)?;
        if plan.overbooked_hours > 0 {
            writeln!(f, "Overbooked by {}h", plan.overbooked_hours)?;
        }
        Ok(())
    }
}
