//! Obstacle operations for the Planner.

use super::{run_blocking, Planner};
use crate::{
    error::Result,
    models::{Day, Obstacle, ObstacleId, SlotStatus, WeeklyGrid},
    params::{AddObstacle, ObstacleRef, SlotQuery, UserScope},
};

impl Planner {
    /// Records a weekly obstacle. Overlapping obstacles are accepted.
    ///
    /// # Errors
    ///
    /// Returns `CramError::InvalidInput` for an unknown day label or an
    /// invalid hour range.
    pub async fn add_obstacle(&self, params: &AddObstacle) -> Result<Obstacle> {
        let calendar = self.calendar.clone();
        let params = params.clone();

        run_blocking(move || calendar.add_obstacle(&params.user, &params.obstacle)).await
    }

    /// Lists the user's obstacles in insertion order.
    pub async fn list_obstacles(&self, params: &UserScope) -> Result<Vec<Obstacle>> {
        let calendar = self.calendar.clone();
        let user = params.user.clone();

        run_blocking(move || calendar.list_obstacles(&user)).await
    }

    /// Removes one obstacle and returns it.
    pub async fn remove_obstacle(&self, params: &ObstacleRef) -> Result<Obstacle> {
        let calendar = self.calendar.clone();
        let params = params.clone();

        run_blocking(move || calendar.remove_obstacle(&params.user, ObstacleId(params.id))).await
    }

    /// Free/busy status of one hour slot.
    pub async fn slot_status(&self, params: &SlotQuery) -> Result<SlotStatus> {
        let day: Day = params.day.parse()?;
        let calendar = self.calendar.clone();
        let user = params.user.clone();
        let hour = params.hour;

        run_blocking(move || calendar.status_at(&user, day, hour)).await
    }

    /// The user's whole week as a 7x24 grid.
    pub async fn weekly_grid(&self, params: &UserScope) -> Result<WeeklyGrid> {
        let calendar = self.calendar.clone();
        let user = params.user.clone();

        run_blocking(move || calendar.weekly_grid(&user)).await
    }

    /// Clears all of the user's obstacles. Returns how many were removed.
    pub async fn reset_obstacles(&self, params: &UserScope) -> Result<usize> {
        let calendar = self.calendar.clone();
        let user = params.user.clone();

        run_blocking(move || calendar.reset(&user)).await
    }
}
