//! Main controller task
//!
//! Runs one control tick per tick signal: schedule evaluation, override
//! sampling, state machine step, watchdog check.

use defmt::*;
use portable_atomic::Ordering;

use roostgate_core::state::LidState;

use crate::channels::OVERRIDE_STATE;
use crate::config;
use crate::controller::Controller;
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    let mut controller =
        Controller::new(config::SCHEDULE, config::TIMING, config::BOOT_MINUTE_OF_DAY);
    let mut last_state: Option<LidState> = None;

    loop {
        let now_ms = TICK_SIGNAL.wait().await;
        let override_on = OVERRIDE_STATE.load(Ordering::Relaxed);

        let state = controller.tick(now_ms, override_on);

        if last_state != Some(state) {
            info!("Door state: {}", state.label());
            last_state = Some(state);
        }
    }
}
