//! Configurable bounds for task attributes.

use crate::error::{CramError, Result};

/// Inclusive range an integer task attribute must fall into.
///
/// Only [`Bound::new`] builds one outside this module, so `min <= max` always
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    min: u8,
    max: u8,
}

impl Bound {
    /// Creates a bound, rejecting an empty range.
    pub fn new(min: u8, max: u8) -> Result<Self> {
        if min > max {
            return Err(CramError::Configuration {
                message: format!("Bound minimum {min} exceeds maximum {max}"),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Whether `value` lies within the bound.
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Validates `value` for the named field. Values are never clamped.
    pub fn check(&self, field: &str, value: u8) -> Result<u8> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(CramError::invalid_input(field).with_reason(format!(
                "must be between {} and {}, got {value}",
                self.min, self.max
            )))
        }
    }
}

/// Bounds applied to new tasks.
///
/// Defaults to 1-5 for difficulty and importance and 1-10 for workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    pub difficulty: Bound,
    pub importance: Bound,
    pub workload: Bound,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            difficulty: Bound { min: 1, max: 5 },
            importance: Bound { min: 1, max: 5 },
            workload: Bound { min: 1, max: 10 },
        }
    }
}

impl TaskLimits {
    /// Limits using a wider 1-10 scale for difficulty and importance.
    pub fn ten_point() -> Self {
        Self {
            difficulty: Bound { min: 1, max: 10 },
            importance: Bound { min: 1, max: 10 },
            ..Self::default()
        }
    }
}
