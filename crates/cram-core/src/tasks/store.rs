//! Per-user task collections.

use std::sync::Arc;

use jiff::{civil::Date, Timestamp};
use log::{debug, warn};

use super::RetentionPolicy;
use crate::{
    error::{CramError, Result},
    locks::UserLocks,
    models::{Task, TaskId, TaskLimits, TaskList},
    params::{validate_user, NewTask},
    storage::{modify_document, update_document, Storage, StorageKey, Write},
};

/// Owns every user's task list.
///
/// Each operation loads the user's [`TaskList`], applies the change and saves
/// it back in one [`Storage::update`] while holding that user's lock. Every
/// path sweeps expired completed tasks first, so they are never returned and
/// can never be reopened.
pub struct TaskStore {
    storage: Arc<dyn Storage>,
    locks: Arc<UserLocks>,
    limits: TaskLimits,
    retention: RetentionPolicy,
}

impl TaskStore {
    pub fn new(
        storage: Arc<dyn Storage>,
        locks: Arc<UserLocks>,
        limits: TaskLimits,
        retention: RetentionPolicy,
    ) -> Self {
        Self {
            storage,
            locks,
            limits,
            retention,
        }
    }

    pub fn limits(&self) -> &TaskLimits {
        &self.limits
    }

    /// Validates and appends a new task. Past deadlines are accepted.
    pub fn add(&self, user: &str, input: &NewTask, now: Timestamp) -> Result<TaskId> {
        validate_user(user)?;
        let title = input.title.trim();
        if title.is_empty() {
            return Err(CramError::invalid_input("title").with_reason("must not be empty"));
        }
        let deadline = parse_deadline(&input.deadline)?;
        let difficulty = self.limits.difficulty.check("difficulty", input.difficulty)?;
        let importance = self.limits.importance.check("importance", input.importance)?;
        let workload = self.limits.workload.check("workload", input.workload)?;

        self.locks.with_user(user, || {
            let key = StorageKey::tasks(user);
            let id = update_document(self.storage.as_ref(), &key, |list: &mut TaskList| {
                let id = list.allocate_id();
                list.tasks.push(Task {
                    id,
                    title: title.to_string(),
                    subject: input.subject.trim().to_string(),
                    deadline,
                    difficulty,
                    importance,
                    workload,
                    done: false,
                    completed_at: None,
                    created_at: now,
                });
                Ok(id)
            })?;
            debug!("user {user}: added task {id} ({title})");
            Ok(id)
        })
    }

    /// Marks a task done or not done. Setting the current value again is a
    /// no-op that still persists. A task past its grace window is gone and
    /// reports [`CramError::TaskNotFound`].
    pub fn set_done(&self, user: &str, id: TaskId, done: bool, now: Timestamp) -> Result<Task> {
        validate_user(user)?;
        self.locks.with_user(user, || {
            let key = StorageKey::tasks(user);
            let updated = update_document(self.storage.as_ref(), &key, |list: &mut TaskList| {
                self.retention.sweep(&mut list.tasks, now);
                let task = list
                    .get_mut(id)
                    .ok_or(CramError::TaskNotFound { id: id.0 })?;
                task.set_done(done, now);
                Ok(task.clone())
            })?;
            debug!("user {user}: task {id} done={done}");
            Ok(updated)
        })
    }

    /// Returns the live collection in insertion order after sweeping.
    pub fn list(&self, user: &str, now: Timestamp) -> Result<Vec<Task>> {
        validate_user(user)?;
        self.locks
            .with_user(user, || self.sweep_locked(user, now).map(|(tasks, _)| tasks))
    }

    /// Looks up one live task.
    pub fn get(&self, user: &str, id: TaskId, now: Timestamp) -> Result<Task> {
        self.list(user, now)?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(CramError::TaskNotFound { id: id.0 })
    }

    /// Removes completed tasks past the grace window. Returns how many were
    /// removed.
    pub fn prune(&self, user: &str, now: Timestamp) -> Result<usize> {
        validate_user(user)?;
        self.locks
            .with_user(user, || self.sweep_locked(user, now).map(|(_, removed)| removed))
    }

    /// Loads the user's list and evicts expired tasks. Caller holds the
    /// user's lock.
    fn sweep_locked(&self, user: &str, now: Timestamp) -> Result<(Vec<Task>, usize)> {
        let key = StorageKey::tasks(user);
        let (tasks, removed) =
            modify_document(self.storage.as_ref(), &key, |list: &mut TaskList| {
                let removed = self.retention.sweep(&mut list.tasks, now);
                let write = if removed > 0 { Write::Save } else { Write::Skip };
                Ok(((list.tasks.clone(), removed), write))
            })?;
        if removed > 0 {
            warn!("user {user}: evicted {removed} completed task(s)");
        }
        Ok((tasks, removed))
    }
}

/// Parses a `YYYY-MM-DD` deadline.
pub fn parse_deadline(raw: &str) -> Result<Date> {
    raw.trim().parse::<Date>().map_err(|e| {
        CramError::invalid_input("deadline")
            .with_reason(format!("'{raw}' is not a valid YYYY-MM-DD date: {e}"))
    })
}
