//! Board-agnostic decision logic for the Roostgate coop door controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Lid state machine (open/close decisions, motor pin mapping)
//! - Schedule evaluator (should the lid be open right now?)
//! - Safety watchdog (motor overrun detection)
//! - Configuration type definitions
//!
//! The control loop is single-threaded and non-blocking: once per tick the
//! host evaluates the schedule, samples the debounced override input, and
//! calls [`state::LidStateMachine::step`] with a monotonic millisecond
//! timestamp. Motor commands are emitted through the [`motor::MotorOutput`]
//! trait, so hosts and tests decide how pin levels reach hardware.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod motor;
pub mod safety;
pub mod schedule;
pub mod state;
