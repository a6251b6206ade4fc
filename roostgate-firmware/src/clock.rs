//! Minute-of-day clock
//!
//! The schedule evaluator only needs the current minute of day. Wall-clock
//! truth is owned by an external time service (RTC/NTP); this module is
//! the seam between that service and the control loop: a minute offset at
//! uptime zero, advanced by monotonic uptime. A resync from the time
//! service replaces the offset.

use roostgate_core::schedule::MINUTES_PER_DAY;

pub struct MinuteClock {
    /// Minute of day at uptime zero
    offset_min: u16,
}

impl MinuteClock {
    pub const fn new(boot_minute_of_day: u16) -> Self {
        Self {
            offset_min: boot_minute_of_day % MINUTES_PER_DAY,
        }
    }

    /// Current minute of day (0-1439) for a given uptime.
    ///
    /// The u32 uptime wraps after ~49 days, which jumps the derived
    /// minute; the time service resync corrects for that drift.
    pub fn minute_of_day(&self, now_ms: u32) -> u16 {
        let uptime_min = (now_ms / 60_000) % MINUTES_PER_DAY as u32;
        ((self.offset_min as u32 + uptime_min) % MINUTES_PER_DAY as u32) as u16
    }
}
