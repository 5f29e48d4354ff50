//! Sources of "now" for the engine.
//!
//! Every time-dependent operation reads the current instant through a
//! [`Clock`] so tests can pin it.

use std::sync::Mutex;

use jiff::{tz::TimeZone, SignedDuration, Timestamp, Zoned};

/// Supplies the current zoned time.
pub trait Clock: Send + Sync {
    /// The current instant in the user's time zone.
    fn now(&self) -> Zoned;
}

/// Wall clock in the system time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Zoned>,
}

impl FixedClock {
    /// Pins the clock at `now`.
    pub fn new(now: Zoned) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Pins the clock at a UTC instant.
    pub fn at(timestamp: Timestamp) -> Self {
        Self::new(timestamp.to_zoned(TimeZone::UTC))
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: Zoned) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: SignedDuration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        let tz = now.time_zone().clone();
        let moved = now.timestamp() + duration;
        *now = moved.to_zoned(tz);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.now.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
