//! Lid state machine
//!
//! Defines the authoritative runtime behavior of the door. The machine is
//! explicit, finite, and deterministic: one synchronous `step` per control
//! tick, motor commands issued only on state entry.

pub mod machine;

pub use machine::{FaultKind, LidState, LidStateMachine};
