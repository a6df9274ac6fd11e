//! Display task
//!
//! Draws the latest published screen onto the OLED.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use limber_display::{render, DisplayError};

use crate::channels::{SCREEN_BUFFER, SCREEN_UPDATE};
use crate::display::Sh1106;

/// Panel type used by the watch
pub type Panel = Sh1106<I2c<'static, I2C0, Async>>;

#[embassy_executor::task]
pub async fn display_task(mut display: Panel) {
    info!("Display task started");

    if let Err(e) = display.init().await {
        error!("Display init failed: {:?}", e);
    }

    loop {
        SCREEN_UPDATE.wait().await;

        {
            let screen = SCREEN_BUFFER.lock().await;
            trace!("Redraw: {}", *screen);
            match render(&screen, &mut display) {
                Ok(()) => {}
                // The frame is complete apart from the cut lines
                Err(DisplayError::TextOverflow) => warn!("Screen text cut off: {}", *screen),
                Err(e) => {
                    warn!("Render failed: {:?}", e);
                    continue;
                }
            }
        }

        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
