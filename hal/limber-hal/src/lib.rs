//! Limber Hardware Abstraction Layer
//!
//! Pin-level traits implemented by chip-specific code so that the
//! button and vibration drivers can be tested on the host.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  limber-drivers (buttons, vibration)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  limber-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  limber-firmware (embassy-rp adapters)  │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, OutputPin};
