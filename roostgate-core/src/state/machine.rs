//! State machine definition
//!
//! All door movement is a function of the current state, two boolean
//! inputs (schedule says open, manual override held), and time spent in
//! the current state. Each state has one handler; a handler issues its
//! motor command only on the tick the state was entered, then re-checks
//! its transition guard on every following tick.

use crate::config::TimingConfig;
use crate::motor::{MotorCommand, MotorDrive, MotorOutput};

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidState {
    /// Power-on grace period, waiting for the wall clock to settle
    Init,
    /// Door closed, motor holding the closed level
    Closed,
    /// Motor running open on behalf of the schedule
    AutoOpening,
    /// Door open because the schedule says so
    AutoOpen,
    /// Motor running open on behalf of the override button
    ManualOpening,
    /// Door held open by the override button
    ManualOpen,
    /// Motor running closed
    Closing,
    /// Fault detected; latched until reset
    Error,
}

impl LidState {
    /// Diagnostic label, kept in sync with the enum by the exhaustive match.
    pub fn label(&self) -> &'static str {
        match self {
            LidState::Init => "Init",
            LidState::Closed => "Closed",
            LidState::AutoOpening => "AutoOpening",
            LidState::AutoOpen => "AutoOpen",
            LidState::ManualOpening => "ManualOpening",
            LidState::ManualOpen => "ManualOpen",
            LidState::Closing => "Closing",
            LidState::Error => "Error",
        }
    }

    /// Check if the motor is commanded to run in this state
    pub fn is_moving(&self) -> bool {
        matches!(
            self,
            LidState::AutoOpening | LidState::ManualOpening | LidState::Closing
        )
    }

    /// Check if this is the latched fault state
    pub fn is_error(&self) -> bool {
        matches!(self, LidState::Error)
    }
}

/// Reasons the machine latches into [`LidState::Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Motor kept driving past its dwell time plus safety margin
    MotorOverrun,
}

/// The door state machine.
///
/// Owned by the control loop and mutated only through [`step`]. The clock
/// is injected per tick, so tests drive time directly and multiple
/// independent instances are possible.
///
/// [`step`]: LidStateMachine::step
#[derive(Debug)]
pub struct LidStateMachine {
    current: LidState,
    last: LidState,
    /// Timestamp of the last transition (wrapping u32 milliseconds)
    entered_at: u32,
    timing: TimingConfig,
    drive: MotorDrive,
    fault: Option<FaultKind>,
}

impl LidStateMachine {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            current: LidState::Init,
            // Sentinel differs from Init so the very first tick is an
            // entry event.
            last: LidState::Error,
            entered_at: 0,
            timing,
            drive: MotorDrive::new(),
            fault: None,
        }
    }

    pub fn state(&self) -> LidState {
        self.current
    }

    /// Timestamp of the last accepted transition.
    pub fn entered_at(&self) -> u32 {
        self.entered_at
    }

    pub fn fault_kind(&self) -> Option<FaultKind> {
        self.fault
    }

    /// Advance the machine by one control tick.
    ///
    /// Detects state entry, runs the handler for the current state, and
    /// applies the requested transition. Motor commands are emitted
    /// through `motor` exactly once per state visit, on the entry tick.
    /// Returns the (possibly unchanged) current state.
    pub fn step<M: MotorOutput>(
        &mut self,
        should_be_open: bool,
        override_on: bool,
        now_ms: u32,
        motor: &mut M,
    ) -> LidState {
        let entered = self.current != self.last;
        if entered {
            self.last = self.current;
            self.entered_at = now_ms;
            #[cfg(feature = "defmt")]
            defmt::info!("Entering state: {}", self.current.label());
        }

        let next = match self.current {
            LidState::Init => self.handle_init(now_ms),
            LidState::Closed => self.handle_closed(entered, should_be_open, override_on, motor),
            LidState::AutoOpening => self.handle_auto_opening(entered, now_ms, motor),
            LidState::AutoOpen => self.handle_auto_open(entered, should_be_open, override_on, motor),
            LidState::ManualOpening => self.handle_manual_opening(entered, now_ms, motor),
            LidState::ManualOpen => self.handle_manual_open(entered, override_on, motor),
            LidState::Closing => self.handle_closing(entered, now_ms, motor),
            LidState::Error => self.handle_error(),
        };

        if next != self.current {
            #[cfg(feature = "defmt")]
            defmt::info!(
                "Requested change from {} to {}",
                self.current.label(),
                next.label()
            );
            self.current = next;
        }

        self.current
    }

    /// Latch the machine into [`LidState::Error`].
    ///
    /// No handler leaves `Error`; recovery requires re-constructing the
    /// machine (in practice, a power cycle back through `Init`). The
    /// caller is responsible for de-energizing the motor.
    pub fn fault(&mut self, kind: FaultKind) {
        if !self.current.is_error() {
            self.fault = Some(kind);
            self.current = LidState::Error;
        }
    }

    /// Wrap-safe time spent in the current state.
    fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.entered_at)
    }

    fn issue<M: MotorOutput>(&mut self, cmd: MotorCommand, motor: &mut M) {
        motor.set_levels(self.drive.command(cmd));
    }

    fn handle_init(&mut self, now_ms: u32) -> LidState {
        // Give the time-sync service a moment, then drive to a known state
        if self.elapsed(now_ms) >= self.timing.init_grace_ms {
            LidState::Closing
        } else {
            LidState::Init
        }
    }

    fn handle_closed<M: MotorOutput>(
        &mut self,
        entered: bool,
        should_be_open: bool,
        override_on: bool,
        motor: &mut M,
    ) -> LidState {
        if entered {
            self.issue(MotorCommand::Stop, motor);
        }
        // Schedule wins over the override when both are raised
        if should_be_open {
            #[cfg(feature = "defmt")]
            defmt::debug!("Should be open according to schedule");
            LidState::AutoOpening
        } else if override_on {
            #[cfg(feature = "defmt")]
            defmt::debug!("Override pressed while closed");
            LidState::ManualOpening
        } else {
            LidState::Closed
        }
    }

    fn handle_auto_opening<M: MotorOutput>(
        &mut self,
        entered: bool,
        now_ms: u32,
        motor: &mut M,
    ) -> LidState {
        if entered {
            self.issue(MotorCommand::Open, motor);
        }
        if self.elapsed(now_ms) >= self.timing.motor_open_ms {
            LidState::AutoOpen
        } else {
            LidState::AutoOpening
        }
    }

    fn handle_auto_open<M: MotorOutput>(
        &mut self,
        entered: bool,
        should_be_open: bool,
        override_on: bool,
        motor: &mut M,
    ) -> LidState {
        if entered {
            self.issue(MotorCommand::Stop, motor);
        }
        if !should_be_open {
            #[cfg(feature = "defmt")]
            defmt::debug!("Should be closed according to schedule");
            // Never close on someone holding the override
            if override_on {
                LidState::ManualOpen
            } else {
                LidState::Closing
            }
        } else {
            LidState::AutoOpen
        }
    }

    fn handle_manual_opening<M: MotorOutput>(
        &mut self,
        entered: bool,
        now_ms: u32,
        motor: &mut M,
    ) -> LidState {
        if entered {
            self.issue(MotorCommand::Open, motor);
        }
        if self.elapsed(now_ms) >= self.timing.motor_open_ms {
            LidState::ManualOpen
        } else {
            LidState::ManualOpening
        }
    }

    fn handle_manual_open<M: MotorOutput>(
        &mut self,
        entered: bool,
        override_on: bool,
        motor: &mut M,
    ) -> LidState {
        if entered {
            self.issue(MotorCommand::Stop, motor);
        }
        if !override_on {
            #[cfg(feature = "defmt")]
            defmt::debug!("Override released");
            LidState::Closing
        } else {
            LidState::ManualOpen
        }
    }

    fn handle_closing<M: MotorOutput>(
        &mut self,
        entered: bool,
        now_ms: u32,
        motor: &mut M,
    ) -> LidState {
        if entered {
            self.issue(MotorCommand::Close, motor);
        }
        if self.elapsed(now_ms) >= self.timing.motor_close_ms {
            LidState::Closed
        } else {
            LidState::Closing
        }
    }

    fn handle_error(&mut self) -> LidState {
        // TODO: drive a status indicator from the fault kind
        LidState::Error
    }

    /// Test-only constructor placing the machine mid-flight in `state`.
    #[cfg(test)]
    fn at_state(state: LidState, entered_at: u32, timing: TimingConfig) -> Self {
        Self {
            current: state,
            last: state,
            entered_at,
            timing,
            drive: MotorDrive::new(),
            fault: None,
        }
    }
}
