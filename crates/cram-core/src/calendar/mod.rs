//! The weekly availability engine.
//!
//! A user's week is a set of recurring [`Obstacle`]s, each blocking a
//! half-open hour range `[start, end)` on one day. Obstacles may overlap;
//! when several cover the same slot, the one added most recently wins. The
//! same rule drives both [`ObstacleCalendar::status_at`] and
//! [`ObstacleCalendar::weekly_grid`].

use std::sync::Arc;

use log::debug;

use crate::{
    error::{CramError, Result},
    locks::UserLocks,
    models::{
        check_hour, check_hour_range, Day, Obstacle, ObstacleId, ObstacleList, SlotStatus,
        WeeklyGrid,
    },
    params::{validate_user, NewObstacle},
    storage::{load_document, update_document, Storage, StorageKey},
};


/// Resolves the status of one slot from a set of obstacles.
///
/// Among obstacles covering the slot, the highest id (latest insertion)
/// wins.
pub fn resolve_slot(obstacles: &[Obstacle], day: Day, hour: u8) -> SlotStatus {
    obstacles
        .iter()
        .filter(|o| o.covers(day, hour))
        .max_by_key(|o| o.id)
        .map_or(SlotStatus::Free, |o| SlotStatus::Busy {
            obstacle_id: o.id,
            label: o.label.clone(),
        })
}

/// Builds the 7x24 grid for a set of obstacles.
pub fn build_grid(obstacles: &[Obstacle]) -> WeeklyGrid {
    WeeklyGrid::build(|day, hour| resolve_slot(obstacles, day, hour))
}

/// Owns every user's weekly obstacles.
pub struct ObstacleCalendar {
    storage: Arc<dyn Storage>,
    locks: Arc<UserLocks>,
}

impl ObstacleCalendar {
    pub fn new(storage: Arc<dyn Storage>, locks: Arc<UserLocks>) -> Self {
        Self { storage, locks }
    }

    /// Validates and records a new obstacle. Overlaps are accepted.
    pub fn add_obstacle(&self, user: &str, input: &NewObstacle) -> Result<Obstacle> {
        validate_user(user)?;
        let day: Day = input.day.parse()?;
        check_hour_range(input.start_hour, input.end_hour)?;

        self.locks.with_user(user, || {
            let key = StorageKey::obstacles(user);
            let obstacle =
                update_document(self.storage.as_ref(), &key, |list: &mut ObstacleList| {
                    let obstacle = Obstacle {
                        id: list.allocate_id(),
                        day,
                        start_hour: input.start_hour,
                        end_hour: input.end_hour,
                        label: input.label.trim().to_string(),
                    };
                    list.obstacles.push(obstacle.clone());
                    Ok(obstacle)
                })?;
            debug!(
                "user {user}: added obstacle {} on {day} {}-{}",
                obstacle.id, obstacle.start_hour, obstacle.end_hour
            );
            Ok(obstacle)
        })
    }

    /// All obstacles in insertion order.
    pub fn list_obstacles(&self, user: &str) -> Result<Vec<Obstacle>> {
        validate_user(user)?;
        self.locks.with_user(user, || self.load(user).map(|list| list.obstacles))
    }

    /// Deletes one obstacle.
    pub fn remove_obstacle(&self, user: &str, id: ObstacleId) -> Result<Obstacle> {
        validate_user(user)?;
        self.locks.with_user(user, || {
            let key = StorageKey::obstacles(user);
            let removed =
                update_document(self.storage.as_ref(), &key, |list: &mut ObstacleList| {
                    let index = list
                        .obstacles
                        .iter()
                        .position(|o| o.id == id)
                        .ok_or(CramError::ObstacleNotFound { id: id.0 })?;
                    Ok(list.obstacles.remove(index))
                })?;
            debug!("user {user}: removed obstacle {id}");
            Ok(removed)
        })
    }

    /// Status of a single hour slot on `day`.
    pub fn status_at(&self, user: &str, day: Day, hour: u8) -> Result<SlotStatus> {
        validate_user(user)?;
        check_hour(hour)?;
        let list = self.locks.with_user(user, || self.load(user))?;
        Ok(resolve_slot(&list.obstacles, day, hour))
    }

    /// The full week as a 7x24 grid.
    pub fn weekly_grid(&self, user: &str) -> Result<WeeklyGrid> {
        validate_user(user)?;
        let list = self.locks.with_user(user, || self.load(user))?;
        Ok(build_grid(&list.obstacles))
    }

    /// Clears every obstacle for `user`. Returns how many were removed.
    ///
    /// The id counter survives so later obstacles still sort after earlier
    /// ones.
    pub fn reset(&self, user: &str) -> Result<usize> {
        validate_user(user)?;
        self.locks.with_user(user, || {
            let key = StorageKey::obstacles(user);
            let removed =
                update_document(self.storage.as_ref(), &key, |list: &mut ObstacleList| {
                    let removed = list.obstacles.len();
                    list.next_id = list.allocate_id().0;
                    list.obstacles.clear();
                    Ok(removed)
                })?;
            debug!("user {user}: reset {removed} obstacle(s)");
            Ok(removed)
        })
    }

    fn load(&self, user: &str) -> Result<ObstacleList> {
        load_document(self.storage.as_ref(), &StorageKey::obstacles(user))
    }
}
