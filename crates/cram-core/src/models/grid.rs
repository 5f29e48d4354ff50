//! Free/busy slot classification and the weekly timetable view.

use serde::{Deserialize, Serialize};

use super::{Day, ObstacleId, HOURS_PER_DAY};

/// Classification of a single hour slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SlotStatus {
    /// Nothing blocks the slot
    Free,
    /// The slot is blocked by the obstacle that won overlap resolution
    Busy {
        obstacle_id: ObstacleId,
        label: String,
    },
}

impl SlotStatus {
    /// Whether the slot is free.
    pub fn is_free(&self) -> bool {
        matches!(self, SlotStatus::Free)
    }

    /// Label of the blocking obstacle, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            SlotStatus::Free => None,
            SlotStatus::Busy { label, .. } => Some(label),
        }
    }
}

/// One day of the weekly grid: exactly 24 hour slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub day: Day,
    pub slots: Vec<SlotStatus>,
}

/// A 7x24 table of slot statuses, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGrid {
    pub rows: Vec<GridRow>,
}

impl WeeklyGrid {
    /// Builds a grid by asking `status` for every (day, hour) pair.
    pub fn build<F>(mut status: F) -> Self
    where
        F: FnMut(Day, u8) -> SlotStatus,
    {
        let rows = Day::ALL
            .iter()
            .map(|&day| GridRow {
                day,
                slots: (0..HOURS_PER_DAY).map(|hour| status(day, hour)).collect(),
            })
            .collect();
        Self { rows }
    }

    /// Status of a slot, or `None` for an hour outside the day.
    pub fn status(&self, day: Day, hour: u8) -> Option<&SlotStatus> {
        self.rows
            .get(day.index())
            .and_then(|row| row.slots.get(usize::from(hour)))
    }

    /// Number of free hours on `day`.
    pub fn free_hours(&self, day: Day) -> usize {
        self.rows
            .get(day.index())
            .map_or(0, |row| row.slots.iter().filter(|s| s.is_free()).count())
    }

    /// Number of free hours across the whole week.
    pub fn total_free_hours(&self) -> usize {
        Day::ALL.iter().map(|&day| self.free_hours(day)).sum()
    }

    /// Iterates over the rows in week order.
    pub fn iter(&self) -> std::slice::Iter<'_, GridRow> {
        self.rows.iter()
    }
}
