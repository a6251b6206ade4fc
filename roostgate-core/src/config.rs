//! Configuration type definitions
//!
//! The door controller is configured entirely at compile time: a fixed
//! schedule table plus motor timing. The firmware crate holds the actual
//! values; these are the board-agnostic types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::schedule::OpenInterval;

/// Maximum schedule entries
pub const MAX_SCHEDULE_ENTRIES: usize = 16;

/// One configured open window, as written by a human: clock time plus
/// duration in minutes. Durations may wrap past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleEntry {
    /// Opening hour (0-23)
    pub hour: u8,
    /// Opening minute (0-59)
    pub minute: u8,
    /// How long the door stays open (minutes, > 0)
    pub duration_min: u16,
}

impl ScheduleEntry {
    pub const fn new(hour: u8, minute: u8, duration_min: u16) -> Self {
        Self {
            hour,
            minute,
            duration_min,
        }
    }

    /// Opening time as minutes since midnight.
    pub const fn start_minute(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Convert to the evaluator's interval representation.
    pub const fn interval(&self) -> OpenInterval {
        OpenInterval::new(self.start_minute(), self.duration_min)
    }
}

/// Motor and startup timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// How long the motor runs when opening (ms)
    pub motor_open_ms: u32,
    /// How long the motor runs when closing (ms)
    pub motor_close_ms: u32,
    /// Grace period after power-on before the first close, giving the
    /// time-sync service a chance to settle the wall clock (ms)
    pub init_grace_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            motor_open_ms: 6000,
            motor_close_ms: 6000,
            init_grace_ms: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_minute() {
        assert_eq!(ScheduleEntry::new(0, 0, 1).start_minute(), 0);
        assert_eq!(ScheduleEntry::new(10, 0, 15).start_minute(), 600);
        assert_eq!(ScheduleEntry::new(23, 59, 2).start_minute(), 1439);
    }

    #[test]
    fn test_default_timing() {
        let timing = TimingConfig::default();
        assert_eq!(timing.motor_open_ms, 6000);
        assert_eq!(timing.motor_close_ms, 6000);
        assert_eq!(timing.init_grace_ms, 2000);
    }
}
