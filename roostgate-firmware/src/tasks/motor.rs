//! Motor output task
//!
//! Waits for commanded pin levels and writes the two H-bridge GPIO pins.
//! One of the pins doubles as the status LED, so levels are applied
//! exactly as commanded, never remapped here.

use defmt::*;
use embassy_rp::gpio::{Level, Output};

use crate::channels::MOTOR_LEVELS;

/// Motor task - drives the two motor pins
#[embassy_executor::task]
pub async fn motor_task(mut motor1: Output<'static>, mut motor2: Output<'static>) {
    info!("Motor task started");

    loop {
        let levels = MOTOR_LEVELS.wait().await;
        debug!("Motor pins: {} {}", levels.motor1, levels.motor2);

        motor1.set_level(Level::from(levels.motor1));
        motor2.set_level(Level::from(levels.motor2));
    }
}
