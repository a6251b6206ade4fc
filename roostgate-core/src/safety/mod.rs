//! Safety monitoring
//!
//! Watches the levels actually commanded onto the motor pins and raises a
//! fault when a run exceeds its dwell time by the safety margin.

pub mod watchdog;

pub use watchdog::{MotorWatchdog, SafetyStatus, OVERRUN_MARGIN_MS};
