//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod button;
pub mod controller;
pub mod motor;
pub mod tick;

pub use button::button_task;
pub use controller::controller_task;
pub use motor::motor_task;
pub use tick::tick_task;
