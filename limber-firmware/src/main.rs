//! Limber - Stretching Watch Firmware
//!
//! Main firmware binary for RP2040-based watch boards. Shows a catalog of
//! stretching poses on an SH1106 OLED, cycles through them on a timer and
//! buzzes the vibration motor at every change.
//!
//! Wiring:
//! - OLED: I2C0, SDA=GPIO4, SCL=GPIO5
//! - Buttons (active low, internal pull-up): up=GPIO13, select=GPIO14,
//!   down=GPIO15
//! - Vibration motor: GPIO16, active high

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use limber_core::{PoseCatalog, TimerConfig};
use limber_drivers::{ButtonPanel, VibrationMotor};

use crate::display::Sh1106;
use crate::pins::{RpInput, RpOutput};

mod channels;
mod display;
mod pins;
mod poses;
mod tasks;

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Limber firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // poses.toml is checked by build.rs; these only fail if the limits drift
    let catalog = match PoseCatalog::new(poses::POSES) {
        Ok(catalog) => catalog,
        Err(e) => defmt::panic!("Invalid pose catalog: {:?}", e),
    };
    let timer = match TimerConfig::new(poses::INTERVAL_S, poses::PULSE_MS) {
        Ok(timer) => timer,
        Err(e) => defmt::panic!("Invalid timer config: {:?}", e),
    };
    info!(
        "Catalog loaded: {} poses, {}s interval, {}ms pulse",
        catalog.len(),
        timer.interval_s,
        timer.pulse_ms
    );

    // OLED on I2C0
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);
    let display = Sh1106::new(i2c);
    info!("I2C initialized for OLED");

    // Buttons pull the pin low when pressed
    let buttons = ButtonPanel::new(
        RpInput(Input::new(p.PIN_13, Pull::Up)),
        RpInput(Input::new(p.PIN_14, Pull::Up)),
        RpInput(Input::new(p.PIN_15, Pull::Up)),
    );

    let motor = VibrationMotor::new_active_high(
        RpOutput(Output::new(p.PIN_16, Level::Low)),
        timer.pulse_ms,
    );

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::button_task(buttons)).unwrap();
    spawner.spawn(tasks::haptic_task(motor)).unwrap();
    spawner.spawn(tasks::display_task(display)).unwrap();
    spawner
        .spawn(tasks::controller_task(catalog, timer))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
