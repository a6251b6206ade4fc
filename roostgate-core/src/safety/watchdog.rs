//! Motor overrun watchdog
//!
//! The state machine always stops the motor at the end of a dwell, so a
//! run lasting longer than the longest dwell plus margin means the control
//! loop has wedged or a command was lost. The watchdog observes the pin
//! levels as they are written and reports a fault the controller turns
//! into a latched [`crate::state::LidState::Error`].

use crate::config::TimingConfig;
use crate::motor::PinLevels;
use crate::state::FaultKind;

/// Allowed overshoot past the longest dwell before a run counts as stuck (ms)
pub const OVERRUN_MARGIN_MS: u32 = 1500;

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// All conditions normal
    Ok,
    /// Safety condition violated
    Fault(FaultKind),
}

/// Tracks how long the motor has been driving.
#[derive(Debug, Clone)]
pub struct MotorWatchdog {
    /// Longest permitted run (ms)
    max_run_ms: u32,
    /// Timestamp the current run started, if one is in progress
    running_since: Option<u32>,
}

impl MotorWatchdog {
    pub fn new(max_run_ms: u32) -> Self {
        Self {
            max_run_ms,
            running_since: None,
        }
    }

    /// Derive the run limit from the configured dwell times.
    pub fn from_timing(timing: &TimingConfig) -> Self {
        Self::new(timing.motor_open_ms.max(timing.motor_close_ms) + OVERRUN_MARGIN_MS)
    }

    /// Record pin levels as they are commanded.
    ///
    /// Unequal levels drive the bridge; equal levels are a hold.
    pub fn observe(&mut self, levels: PinLevels, now_ms: u32) {
        if levels.is_driving() {
            self.running_since = Some(now_ms);
        } else {
            self.running_since = None;
        }
    }

    /// Check for an overrun at the current time.
    pub fn check(&self, now_ms: u32) -> SafetyStatus {
        if let Some(started) = self.running_since {
            if now_ms.wrapping_sub(started) > self.max_run_ms {
                return SafetyStatus::Fault(FaultKind::MotorOverrun);
            }
        }
        SafetyStatus::Ok
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }
}
