//! GPIO adapters
//!
//! Wraps embassy-rp pins in the `limber-hal` traits so the drivers can be
//! shared with host tests.

use embassy_rp::gpio::{Input, Output};
use limber_hal::{InputPin, OutputPin};

/// Input pin backed by an embassy-rp [`Input`]
pub struct RpInput(pub Input<'static>);

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Output pin backed by an embassy-rp [`Output`]
pub struct RpOutput(pub Output<'static>);

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
