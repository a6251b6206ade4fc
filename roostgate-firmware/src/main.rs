//! Roostgate - Motorized Coop Door Firmware
//!
//! Main firmware binary for RP2040-based coop door controllers. A small
//! state machine opens and closes the door on a fixed daily schedule, with
//! a manual override button that holds it open.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod clock;
mod config;
mod controller;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Roostgate firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Motor H-bridge pins. Both low is the steady-closed level, which is
    // also the safe power-on default.
    // Pin assignments are board-specific: MOTOR1=GPIO2, MOTOR2=GPIO3
    let motor1 = Output::new(p.PIN_2, Level::Low);
    let motor2 = Output::new(p.PIN_3, Level::Low);

    // Override button on GPIO4, active low with internal pull-up
    let button = Input::new(p.PIN_4, Pull::Up);

    info!("GPIO initialized");

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::motor_task(motor1, motor2)).unwrap();
    spawner.spawn(tasks::controller_task()).unwrap();

    info!("All tasks spawned");
}
