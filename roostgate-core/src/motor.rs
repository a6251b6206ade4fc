//! Motor intent mapping for the two-pin lid drive
//!
//! The door motor is driven through an H-bridge on two GPIO pins. One of
//! the pins doubles as the status LED, so the idle levels are not neutral:
//! the steady level matches whichever direction last completed.
//!
//! ```text
//! Pin1 / Pin2 -> Function
//!  L      L      Lid closed,  LED off
//!  H      L      Lid closing, LED off
//!  L      H      Lid opening, LED on
//!  H      H      Lid open,    LED on
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logical motor intent, issued by the state machine on state entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorCommand {
    /// Run the motor in the opening direction
    Open,
    /// Hold the steady level of the last completed direction
    Stop,
    /// Run the motor in the closing direction
    Close,
}

/// Levels for the two motor pins (`true` = high).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinLevels {
    pub motor1: bool,
    pub motor2: bool,
}

impl PinLevels {
    /// Both pins low: de-energized, matches the steady-closed level.
    pub const OFF: Self = Self {
        motor1: false,
        motor2: false,
    };

    /// Check whether these levels actually run the motor.
    ///
    /// Equal levels are a hold (steady open or steady closed); unequal
    /// levels drive the bridge in one direction.
    pub fn is_driving(&self) -> bool {
        self.motor1 != self.motor2
    }
}

/// Sink for pin levels produced by the state machine.
///
/// The firmware implementation forwards levels to GPIO; tests record them.
pub trait MotorOutput {
    fn set_levels(&mut self, levels: PinLevels);
}

/// Maps motor commands to pin levels.
///
/// Stop is stateful: it reproduces the steady levels of whichever terminal
/// state was last reached (both high after opening, both low after
/// closing), per the wiring table above. Starts in the closed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorDrive {
    /// True once an open run has started, false once a close run has.
    lid_open: bool,
}

impl MotorDrive {
    pub const fn new() -> Self {
        Self { lid_open: false }
    }

    /// Translate a command into pin levels, updating the terminal-state flag.
    pub fn command(&mut self, cmd: MotorCommand) -> PinLevels {
        match cmd {
            MotorCommand::Open => {
                self.lid_open = true;
                PinLevels {
                    motor1: false,
                    motor2: true,
                }
            }
            MotorCommand::Close => {
                self.lid_open = false;
                PinLevels {
                    motor1: true,
                    motor2: false,
                }
            }
            MotorCommand::Stop => PinLevels {
                motor1: self.lid_open,
                motor2: self.lid_open,
            },
        }
    }
}

impl Default for MotorDrive {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_levels() {
        let mut drive = MotorDrive::new();
        let levels = drive.command(MotorCommand::Open);
        assert_eq!(
            levels,
            PinLevels {
                motor1: false,
                motor2: true
            }
        );
        assert!(levels.is_driving());
    }

    #[test]
    fn test_close_levels() {
        let mut drive = MotorDrive::new();
        let levels = drive.command(MotorCommand::Close);
        assert_eq!(
            levels,
            PinLevels {
                motor1: true,
                motor2: false
            }
        );
        assert!(levels.is_driving());
    }

    #[test]
    fn test_stop_after_open_holds_high() {
        let mut drive = MotorDrive::new();
        drive.command(MotorCommand::Open);
        let levels = drive.command(MotorCommand::Stop);
        assert_eq!(
            levels,
            PinLevels {
                motor1: true,
                motor2: true
            }
        );
        assert!(!levels.is_driving());
    }

    #[test]
    fn test_stop_after_close_holds_low() {
        let mut drive = MotorDrive::new();
        drive.command(MotorCommand::Open);
        drive.command(MotorCommand::Close);
        assert_eq!(drive.command(MotorCommand::Stop), PinLevels::OFF);
    }

    #[test]
    fn test_initial_stop_is_closed_level() {
        // Before any run, stop must hold the steady-closed level
        let mut drive = MotorDrive::new();
        assert_eq!(drive.command(MotorCommand::Stop), PinLevels::OFF);
    }
}
