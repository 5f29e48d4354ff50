//! Obstacle model: a recurring weekly interval during which a user cannot
//! study.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CramError, Result};

/// Number of hour slots in a day.
pub const HOURS_PER_DAY: u8 = 24;

/// Stable identifier of an obstacle; also encodes insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleId(pub u64);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week an obstacle recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in week order, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Short label used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Position within [`Day::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Day {
    type Err = CramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mon" | "monday" => Ok(Day::Mon),
            "tue" | "tues" | "tuesday" => Ok(Day::Tue),
            "wed" | "wednesday" => Ok(Day::Wed),
            "thu" | "thur" | "thurs" | "thursday" => Ok(Day::Thu),
            "fri" | "friday" => Ok(Day::Fri),
            "sat" | "saturday" => Ok(Day::Sat),
            "sun" | "sunday" => Ok(Day::Sun),
            _ => Err(CramError::invalid_input("day").with_reason(format!("unknown day label '{s}'"))),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<jiff::civil::Weekday> for Day {
    fn from(weekday: jiff::civil::Weekday) -> Self {
        use jiff::civil::Weekday;
        match weekday {
            Weekday::Monday => Day::Mon,
            Weekday::Tuesday => Day::Tue,
            Weekday::Wednesday => Day::Wed,
            Weekday::Thursday => Day::Thu,
            Weekday::Friday => Day::Fri,
            Weekday::Saturday => Day::Sat,
            Weekday::Sunday => Day::Sun,
        }
    }
}

/// A recurring weekly blocked interval `[start_hour, end_hour)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Obstacle {
    /// Identifier assigned at insertion
    pub id: ObstacleId,

    /// Day the obstacle recurs on
    pub day: Day,

    /// First blocked hour (0-23)
    pub start_hour: u8,

    /// First free hour after the block (1-24)
    pub end_hour: u8,

    /// What the user is busy with
    pub label: String,
}

impl Obstacle {
    /// Whether the obstacle blocks `hour` on `day`.
    pub fn covers(&self, day: Day, hour: u8) -> bool {
        self.day == day && self.start_hour <= hour && hour < self.end_hour
    }

    /// Number of blocked hours.
    pub fn duration_hours(&self) -> u8 {
        self.end_hour - self.start_hour
    }
}

/// Validates a single hour slot index.
pub fn check_hour(hour: u8) -> Result<u8> {
    if hour < HOURS_PER_DAY {
        Ok(hour)
    } else {
        Err(CramError::invalid_input("hour")
            .with_reason(format!("must be between 0 and 23, got {hour}")))
    }
}

/// Validates an obstacle's hour range.
pub fn check_hour_range(start_hour: u8, end_hour: u8) -> Result<()> {
    if start_hour >= HOURS_PER_DAY {
        return Err(CramError::invalid_input("start_hour")
            .with_reason(format!("must be between 0 and 23, got {start_hour}")));
    }
    if end_hour == 0 || end_hour > HOURS_PER_DAY {
        return Err(CramError::invalid_input("end_hour")
            .with_reason(format!("must be between 1 and 24, got {end_hour}")));
    }
    if start_hour >= end_hour {
        return Err(CramError::invalid_input("end_hour").with_reason(format!(
            "must be after start hour {start_hour}, got {end_hour}"
        )));
    }
    Ok(())
}
