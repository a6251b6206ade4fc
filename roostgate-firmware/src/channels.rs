//! Inter-task communication
//!
//! Static signals shared between Embassy tasks, using embassy-sync
//! primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use roostgate_core::motor::PinLevels;

/// Motor pin levels commanded by the controller, consumed by the motor task
pub static MOTOR_LEVELS: Signal<CriticalSectionRawMutex, PinLevels> = Signal::new();

/// Debounced override button state (true = held), published by the button task
pub static OVERRIDE_STATE: AtomicBool = AtomicBool::new(false);
