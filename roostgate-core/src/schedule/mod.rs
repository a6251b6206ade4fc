//! Schedule evaluation
//!
//! Decides whether the door should currently be open, from a static
//! ordered list of open windows. Does not do the opening/closing.

pub mod evaluator;
pub mod table;

pub use evaluator::ScheduleEvaluator;
pub use table::{OpenInterval, ScheduleTable, MINUTES_PER_DAY};
