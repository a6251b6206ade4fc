//! Override button task
//!
//! Samples the override input and publishes a debounced state. The button
//! is wired active-low with the internal pull-up enabled.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use crate::channels::OVERRIDE_STATE;

/// Sample interval in milliseconds
const SAMPLE_INTERVAL_MS: u64 = 10;

/// Consecutive identical samples required before a level change is accepted
const STABLE_SAMPLES: u8 = 3;

/// Button task - debounces the override input
#[embassy_executor::task]
pub async fn button_task(button: Input<'static>) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut last_raw = false;
    let mut stable: u8 = 0;
    let mut debounced = false;

    loop {
        ticker.next().await;

        let raw = button.is_low(); // active low
        if raw == last_raw {
            stable = stable.saturating_add(1);
        } else {
            stable = 0;
            last_raw = raw;
        }

        if stable >= STABLE_SAMPLES && raw != debounced {
            debounced = raw;
            if debounced {
                info!("Override pressed");
            } else {
                info!("Override released");
            }
            OVERRIDE_STATE.store(debounced, Ordering::Relaxed);
        }
    }
}
