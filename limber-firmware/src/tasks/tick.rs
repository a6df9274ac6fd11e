//! Countdown clock
//!
//! Emits one tick per second for the pose countdown. Ticks do not queue: if
//! the controller has not taken the previous one, the second is lost and
//! logged.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::TICK_SIGNAL;

/// One countdown step
const TICK_PERIOD: Duration = Duration::from_secs(1);

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Countdown clock started");

    let mut ticker = Ticker::every(TICK_PERIOD);

    loop {
        ticker.next().await;

        if TICK_SIGNAL.signaled() {
            warn!("Controller missed a countdown tick");
        }
        TICK_SIGNAL.signal(());
    }
}
