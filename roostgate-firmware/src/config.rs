//! Static configuration
//!
//! The schedule and motor timing are fixed at compile time. Edit and
//! rebuild to change when the door opens.

use roostgate_core::config::{ScheduleEntry, TimingConfig};

/// Configured open windows: (hour, minute, duration in minutes).
/// Windows may overlap and may wrap past midnight.
pub const SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry::new(8, 0, 15),
    ScheduleEntry::new(10, 0, 15),
    ScheduleEntry::new(10, 35, 1),
    ScheduleEntry::new(12, 30, 15),
    ScheduleEntry::new(14, 35, 5),
    ScheduleEntry::new(16, 55, 1),
    ScheduleEntry::new(20, 15, 2),
    ScheduleEntry::new(21, 40, 2),
    ScheduleEntry::new(23, 59, 2),
];

/// Motor run times and startup grace period
pub const TIMING: TimingConfig = TimingConfig {
    motor_open_ms: 6000,
    motor_close_ms: 6000,
    init_grace_ms: 2000,
};

/// Minute of day assumed at power-on, until the time service resyncs the
/// minute clock. 0 = midnight.
pub const BOOT_MINUTE_OF_DAY: u16 = 0;
