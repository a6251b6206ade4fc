//! Control loop coordination
//!
//! Ties the schedule evaluator, lid state machine, minute clock, and motor
//! watchdog together. One `tick` per tick signal.

use defmt::*;

use roostgate_core::config::{ScheduleEntry, TimingConfig};
use roostgate_core::motor::{MotorOutput, PinLevels};
use roostgate_core::safety::{MotorWatchdog, SafetyStatus};
use roostgate_core::schedule::{ScheduleEvaluator, ScheduleTable};
use roostgate_core::state::{LidState, LidStateMachine};

use crate::channels::MOTOR_LEVELS;
use crate::clock::MinuteClock;

/// Forwards commanded pin levels to the motor task while letting the
/// watchdog see every write.
struct WatchedMotor<'a> {
    watchdog: &'a mut MotorWatchdog,
    now_ms: u32,
}

impl MotorOutput for WatchedMotor<'_> {
    fn set_levels(&mut self, levels: PinLevels) {
        self.watchdog.observe(levels, self.now_ms);
        MOTOR_LEVELS.signal(levels);
    }
}

/// Controller state for the door
pub struct Controller {
    machine: LidStateMachine,
    evaluator: ScheduleEvaluator,
    watchdog: MotorWatchdog,
    clock: MinuteClock,
}

impl Controller {
    pub fn new(schedule: &[ScheduleEntry], timing: TimingConfig, boot_minute: u16) -> Self {
        let table = ScheduleTable::from_entries(schedule);
        info!("Configured {} open windows", table.intervals().len());
        for iv in table.intervals() {
            info!(
                "- {}:{} for {} minutes",
                iv.start_minute / 60,
                iv.start_minute % 60,
                iv.duration_min
            );
        }

        Self {
            machine: LidStateMachine::new(timing),
            evaluator: ScheduleEvaluator::new(table),
            watchdog: MotorWatchdog::from_timing(&timing),
            clock: MinuteClock::new(boot_minute),
        }
    }

    /// One control tick: evaluate the schedule, sample the override, step
    /// the state machine, then check the watchdog.
    pub fn tick(&mut self, now_ms: u32, override_on: bool) -> LidState {
        let minute = self.clock.minute_of_day(now_ms);
        let should_be_open = self.evaluator.should_be_open(minute);

        let mut motor = WatchedMotor {
            watchdog: &mut self.watchdog,
            now_ms,
        };
        let state = self
            .machine
            .step(should_be_open, override_on, now_ms, &mut motor);

        if let SafetyStatus::Fault(kind) = self.watchdog.check(now_ms) {
            error!("Motor fault: {}, latching error state", kind);
            self.machine.fault(kind);
            // The Error state issues no commands itself; de-energize both
            // windings here.
            self.watchdog.observe(PinLevels::OFF, now_ms);
            MOTOR_LEVELS.signal(PinLevels::OFF);
        }

        state
    }
}
