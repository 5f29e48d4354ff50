//! Greedy daily study plan.

use crate::{
    error::{CramError, Result},
    models::{DailyPlan, RankedTask},
};

/// Most hours a single day can offer.
pub const MAX_DAILY_HOURS: u8 = 24;

/// Picks pending tasks in rank order while study hours remain.
///
/// Each picked task consumes its `workload` hours. The last pick may run
/// past the available time; the overshoot is reported in
/// [`DailyPlan::overbooked_hours`]. Finished tasks are skipped.
pub fn plan_day(ranked: &[RankedTask], available_hours: u8) -> Result<DailyPlan> {
    if available_hours == 0 || available_hours > MAX_DAILY_HOURS {
        return Err(CramError::invalid_input("hours").with_reason(format!(
            "must be between 1 and {MAX_DAILY_HOURS}, got {available_hours}"
        )));
    }

    let mut remaining = i32::from(available_hours);
    let mut tasks = Vec::new();
    for candidate in ranked.iter().filter(|r| !r.task.done) {
        if remaining <= 0 {
            break;
        }
        remaining -= i32::from(candidate.task.workload);
        tasks.push(candidate.clone());
    }

    Ok(DailyPlan {
        available_hours,
        tasks,
        remaining_hours: u8::try_from(remaining.max(0)).unwrap_or(0),
        overbooked_hours: u8::try_from((-remaining).max(0)).unwrap_or(u8::MAX),
    })
}
