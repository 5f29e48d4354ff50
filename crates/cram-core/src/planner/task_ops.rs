//! Task operations for the Planner.

use super::{run_blocking, Planner};
use crate::{
    error::Result,
    models::{DailyPlan, RankedTask, Task, TaskId},
    params::{AddTask, PlanDay, SetTaskDone, UserScope},
    tasks::plan_day,
};

impl Planner {
    /// Adds a task to the user's list and returns it.
    ///
    /// # Errors
    ///
    /// Returns `CramError::InvalidInput` for an empty title, a malformed
    /// deadline, or an attribute outside the configured bounds.
    pub async fn add_task(&self, params: &AddTask) -> Result<Task> {
        let store = self.tasks.clone();
        let now = self.clock.now().timestamp();
        let params = params.clone();

        run_blocking(move || {
            let id = store.add(&params.user, &params.task, now)?;
            store.get(&params.user, id, now)
        })
        .await
    }

    /// Marks a task done or not done and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns `CramError::TaskNotFound` if the user has no such task.
    pub async fn set_task_done(&self, params: &SetTaskDone) -> Result<Task> {
        let store = self.tasks.clone();
        let now = self.clock.now().timestamp();
        let params = params.clone();

        run_blocking(move || store.set_done(&params.user, TaskId(params.id), params.done, now))
            .await
    }

    /// Lists the user's tasks in insertion order.
    pub async fn list_tasks(&self, params: &UserScope) -> Result<Vec<Task>> {
        let store = self.tasks.clone();
        let now = self.clock.now().timestamp();
        let user = params.user.clone();

        run_blocking(move || store.list(&user, now)).await
    }

    /// Lists the user's tasks highest priority first, finished tasks last.
    ///
    /// The clock is read once; the same instant drives both the sweep and
    /// the urgency of each task.
    pub async fn rank_tasks(&self, params: &UserScope) -> Result<Vec<RankedTask>> {
        let store = self.tasks.clone();
        let now = self.clock.now();
        let timestamp = now.timestamp();
        let user = params.user.clone();

        let tasks = run_blocking(move || store.list(&user, timestamp)).await?;
        Ok(self.engine.rank(&tasks, now.date()))
    }

    /// Ranked unfinished tasks only.
    pub async fn pending_tasks(&self, params: &UserScope) -> Result<Vec<RankedTask>> {
        let ranked = self.rank_tasks(params).await?;
        Ok(ranked.into_iter().filter(|r| !r.task.done).collect())
    }

    /// Picks today's tasks from the ranking within the available hours.
    pub async fn daily_plan(&self, params: &PlanDay) -> Result<DailyPlan> {
        let ranked = self
            .rank_tasks(&UserScope {
                user: params.user.clone(),
            })
            .await?;
        plan_day(&ranked, params.hours)
    }

    /// Evicts completed tasks past the grace window. Returns how many were
    /// removed.
    pub async fn sweep(&self, params: &UserScope) -> Result<usize> {
        let store = self.tasks.clone();
        let now = self.clock.now().timestamp();
        let user = params.user.clone();

        run_blocking(move || store.prune(&user, now)).await
    }
}
