//! Open-interval table
//!
//! An ordered, fixed list of open windows in minutes-since-midnight form.
//! Windows may wrap past midnight; overlapping or duplicate windows are
//! legal and simply OR together.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{ScheduleEntry, MAX_SCHEDULE_ENTRIES};

/// Minutes in a day
pub const MINUTES_PER_DAY: u16 = 1440;

/// One open window: start minute plus duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpenInterval {
    /// Start of the window, minutes since midnight (0-1439)
    pub start_minute: u16,
    /// Window length in minutes (> 0)
    pub duration_min: u16,
}

impl OpenInterval {
    pub const fn new(start_minute: u16, duration_min: u16) -> Self {
        Self {
            start_minute,
            duration_min,
        }
    }

    /// Check whether `minute` falls inside this window.
    ///
    /// A window whose end runs past 1440 wraps into the next day, so the
    /// early minutes of the day are also inside it. The end is computed
    /// in u32: start + duration can exceed u16 for large durations.
    pub fn contains(&self, minute: u16) -> bool {
        let end = self.start_minute as u32 + self.duration_min as u32;
        let minute = minute as u32;
        (minute >= self.start_minute as u32 && minute < end)
            || (end >= MINUTES_PER_DAY as u32 && minute < end - MINUTES_PER_DAY as u32)
    }
}

/// Immutable table of open windows.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduleTable {
    intervals: Vec<OpenInterval, MAX_SCHEDULE_ENTRIES>,
}

impl ScheduleTable {
    /// Build a table from configured entries.
    ///
    /// Entries beyond the table capacity are dropped.
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut intervals = Vec::new();
        for entry in entries.iter().take(MAX_SCHEDULE_ENTRIES) {
            let _ = intervals.push(entry.interval());
        }
        Self { intervals }
    }

    /// True if any window contains `minute`.
    pub fn is_open_at(&self, minute: u16) -> bool {
        self.intervals.iter().any(|iv| iv.contains(minute))
    }

    pub fn intervals(&self) -> &[OpenInterval] {
        &self.intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_boundaries() {
        // 10:00 for 15 minutes
        let iv = OpenInterval::new(600, 15);
        assert!(!iv.contains(599));
        assert!(iv.contains(600));
        assert!(iv.contains(614));
        assert!(!iv.contains(615));
    }

    #[test]
    fn test_interval_wraps_midnight() {
        // 23:59 for 2 minutes runs into 00:01
        let iv = OpenInterval::new(1439, 2);
        assert!(iv.contains(1439));
        assert!(iv.contains(0));
        assert!(!iv.contains(1));
        assert!(!iv.contains(1438));
    }

    #[test]
    fn test_maximum_duration_does_not_overflow() {
        // 23:59 plus the largest representable duration covers the whole
        // day; the end computation must not wrap in u16
        let iv = OpenInterval::new(1439, u16::MAX);
        assert!(iv.contains(0));
        assert!(iv.contains(719));
        assert!(iv.contains(1438));
        assert!(iv.contains(1439));
    }

    #[test]
    fn test_interval_ending_exactly_at_midnight() {
        // 23:50 for 10 minutes ends at 24:00; nothing spills into day two
        let iv = OpenInterval::new(1430, 10);
        assert!(iv.contains(1439));
        assert!(!iv.contains(0));
    }

    #[test]
    fn test_table_or_semantics() {
        let entries = [
            ScheduleEntry::new(8, 0, 30),
            ScheduleEntry::new(8, 15, 30), // overlaps the first
        ];
        let table = ScheduleTable::from_entries(&entries);
        // Inside the first window but past the second's start
        assert!(table.is_open_at(8 * 60 + 20));
        // Inside only the first
        assert!(table.is_open_at(8 * 60 + 5));
        // Inside only the second
        assert!(table.is_open_at(8 * 60 + 40));
        assert!(!table.is_open_at(8 * 60 + 45));
    }

    #[test]
    fn test_empty_table_always_closed() {
        let table = ScheduleTable::from_entries(&[]);
        assert!(!table.is_open_at(0));
        assert!(!table.is_open_at(720));
    }

    #[test]
    fn test_capacity_clamp() {
        let entries = [ScheduleEntry::new(1, 0, 1); MAX_SCHEDULE_ENTRIES + 4];
        let table = ScheduleTable::from_entries(&entries);
        assert_eq!(table.intervals().len(), MAX_SCHEDULE_ENTRIES);
    }
}
