//! Hardware driver implementations
//!
//! Concrete implementations of the collaborators used by `limber-core`,
//! written against the `limber-hal` pin traits:
//!
//! - Debounced push buttons (input source)
//! - Vibration motor (haptic feedback)

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod vibration;

pub use button::{ButtonPanel, DebouncedButton, DEBOUNCE_MS};
pub use vibration::VibrationMotor;
