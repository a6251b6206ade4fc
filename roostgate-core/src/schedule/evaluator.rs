//! Schedule evaluator with minute-granularity caching
//!
//! The control loop runs sub-second, but the answer can only change when
//! the wall-clock minute does. The evaluator recomputes once per minute
//! and hands back the cached result in between.

use super::table::ScheduleTable;

/// Evaluates "should the door be open right now?" against the table.
#[derive(Debug, Clone)]
pub struct ScheduleEvaluator {
    table: ScheduleTable,
    /// Minute the cached result was computed for. Starts empty so the
    /// first call always evaluates, even at minute 0.
    last_minute: Option<u16>,
    should_be_open: bool,
}

impl ScheduleEvaluator {
    pub fn new(table: ScheduleTable) -> Self {
        Self {
            table,
            last_minute: None,
            should_be_open: false,
        }
    }

    /// Whether the door should be open at `minute` (minutes since
    /// midnight, 0-1439).
    ///
    /// Result is OR'd across all configured windows. Repeated calls
    /// within the same minute return the cached value unchanged.
    pub fn should_be_open(&mut self, minute: u16) -> bool {
        if self.last_minute != Some(minute) {
            self.last_minute = Some(minute);
            self.should_be_open = self.table.is_open_at(minute);
        }
        self.should_be_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleEntry;
    use crate::schedule::table::{OpenInterval, MINUTES_PER_DAY};
    use proptest::prelude::*;

    fn evaluator(entries: &[ScheduleEntry]) -> ScheduleEvaluator {
        ScheduleEvaluator::new(ScheduleTable::from_entries(entries))
    }

    #[test]
    fn test_boundary_minutes() {
        let mut eval = evaluator(&[ScheduleEntry::new(10, 0, 15)]);
        assert!(!eval.should_be_open(599)); // 9:59
        assert!(eval.should_be_open(600)); // 10:00
        assert!(eval.should_be_open(614)); // 10:14
        assert!(!eval.should_be_open(615)); // 10:15
    }

    #[test]
    fn test_wrap_interval() {
        let mut eval = evaluator(&[ScheduleEntry::new(23, 59, 2)]);
        assert!(eval.should_be_open(1439)); // 23:59
        assert!(eval.should_be_open(0)); // 00:00
        assert!(!eval.should_be_open(1)); // 00:01
    }

    #[test]
    fn test_first_call_at_minute_zero_evaluates() {
        // A window covering midnight must be visible on the very first call
        let mut eval = evaluator(&[ScheduleEntry::new(0, 0, 5)]);
        assert!(eval.should_be_open(0));
    }

    #[test]
    fn test_sub_minute_calls_return_cached_value() {
        let mut eval = evaluator(&[ScheduleEntry::new(10, 0, 15)]);
        assert!(eval.should_be_open(600));
        // Same minute, repeated sub-minute polls
        for _ in 0..10 {
            assert!(eval.should_be_open(600));
        }
        assert!(!eval.should_be_open(615));
    }

    proptest! {
        /// Cached evaluation must agree with a brute-force OR over windows.
        #[test]
        fn prop_matches_brute_force_or(
            windows in proptest::collection::vec((0u16..1440, 1u16..=u16::MAX), 0..8),
            minute in 0u16..1440,
        ) {
            let entries: heapless::Vec<ScheduleEntry, 8> = windows
                .iter()
                .map(|&(start, dur)| ScheduleEntry::new((start / 60) as u8, (start % 60) as u8, dur))
                .collect();
            let mut eval = evaluator(&entries);

            let expected = windows.iter().any(|&(start, dur)| {
                OpenInterval::new(start, dur).contains(minute)
            });
            prop_assert_eq!(eval.should_be_open(minute), expected);

            // A second poll in the same minute cannot change the answer
            prop_assert_eq!(eval.should_be_open(minute), expected);

            // And the next minute agrees with the oracle again
            let next = (minute + 1) % MINUTES_PER_DAY;
            let expected_next = windows.iter().any(|&(start, dur)| {
                OpenInterval::new(start, dur).contains(next)
            });
            prop_assert_eq!(eval.should_be_open(next), expected_next);
        }
    }
}
