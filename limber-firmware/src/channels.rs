//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use limber_core::Button;
use limber_display::Screen;

/// Channel capacity for button presses
const INPUT_CHANNEL_SIZE: usize = 8;

/// Debounced button presses from the button task
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Button, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// One-second countdown tick from the tick task
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that a new screen is ready to be drawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that the pose timer wants a vibration pulse
pub static HAPTIC_PULSE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Latest screen published by the controller
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());
