//! Vibration motor task
//!
//! Runs each requested pulse to completion on the motor pin.

use defmt::*;
use embassy_time::{Instant, Timer};

use limber_core::Haptic;
use limber_drivers::VibrationMotor;

use crate::channels::HAPTIC_PULSE;
use crate::pins::RpOutput;

/// Haptic request that wakes the motor task
///
/// The controller cannot own the motor because the pulse has to be stopped
/// while the controller is waiting for input.
pub struct SignalHaptic;

impl Haptic for SignalHaptic {
    fn short_pulse(&mut self) {
        HAPTIC_PULSE.signal(());
    }
}

#[embassy_executor::task]
pub async fn haptic_task(mut motor: VibrationMotor<RpOutput>) {
    info!("Haptic task started ({}ms pulse)", motor.pulse_ms());

    loop {
        HAPTIC_PULSE.wait().await;
        trace!("Vibration pulse");

        motor.update(now_ms());
        motor.short_pulse();

        while motor.is_active() {
            Timer::after_millis(motor.pulse_ms() as u64).await;
            motor.update(now_ms());
        }
    }
}

fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
