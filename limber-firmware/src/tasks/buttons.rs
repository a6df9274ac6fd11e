//! Button polling task
//!
//! Samples the three buttons, debounces them and forwards presses to the
//! controller.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use limber_drivers::ButtonPanel;

use crate::channels::INPUT_CHANNEL;
use crate::pins::RpInput;

/// Sampling period, well below the debounce window
const POLL_INTERVAL_MS: u64 = 5;

#[embassy_executor::task]
pub async fn button_task(mut panel: ButtonPanel<RpInput>) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;

        let now_ms = Instant::now().as_millis() as u32;
        for button in panel.poll(now_ms) {
            debug!("Button pressed: {:?}", button);
            if INPUT_CHANNEL.try_send(button).is_err() {
                warn!("Input channel full, dropping {:?}", button);
            }
        }
    }
}
