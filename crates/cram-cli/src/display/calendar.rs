//! Obstacle and weekly grid formatting.

use std::fmt;

use cram_core::{models::HOURS_PER_DAY, Day, Obstacle, SlotStatus, WeeklyGrid};

/// A single obstacle as `#id Day HH:00-HH:00 label`.
pub struct ObstacleView<'a>(pub &'a Obstacle);

impl fmt::Display for ObstacleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obstacle = self.0;
        write!(
            f,
            "{}. {} {:02}:00-{:02}:00",
            obstacle.id, obstacle.day, obstacle.start_hour, obstacle.end_hour
        )?;
        if !obstacle.label.is_empty() {
            write!(f, " **{}**", obstacle.label)?;
        }
        Ok(())
    }
}

/// Obstacles in insertion order.
pub struct ObstacleLines<'a>(pub &'a [Obstacle]);

impl fmt::Display for ObstacleLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No obstacles.");
        }
        for obstacle in self.0 {
            writeln!(f, "- {}", ObstacleView(obstacle))?;
        }
        Ok(())
    }
}

/// Answer to "am I free at `day` `hour`?".
pub struct SlotView<'a> {
    pub day: Day,
    pub hour: u8,
    pub status: &'a SlotStatus,
}

impl fmt::Display for SlotView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            SlotStatus::Free => writeln!(f, "{} {:02}:00 is free", self.day, self.hour),
            SlotStatus::Busy { obstacle_id, label } => writeln!(
                f,
                "{} {:02}:00 is busy: {} (obstacle {})",
                self.day, self.hour, label, obstacle_id
            ),
        }
    }
}

/// The week as seven rows of 24 cells, `.` free and `#` busy.
pub struct GridView<'a>(pub &'a WeeklyGrid);

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tens: String = (0..HOURS_PER_DAY).map(|h| char::from(b'0' + h / 10)).collect();
        let ones: String = (0..HOURS_PER_DAY).map(|h| char::from(b'0' + h % 10)).collect();

        writeln!(f, "## Weekly Availability")?;
        writeln!(f)?;
        writeln!(f, "`    {tens}`")?;
        writeln!(f, "`    {ones}`")?;
        for row in self.0.iter() {
            let cells: String = row
                .slots
                .iter()
                .map(|slot| if slot.is_free() { '.' } else { '#' })
                .collect();
            writeln!(
                f,
                "`{} {}` {}h free",
                row.day,
                cells,
                self.0.free_hours(row.day)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{}h free this week (`.` free, `#` busy)",
            self.0.total_free_hours()
        )
    }
}
