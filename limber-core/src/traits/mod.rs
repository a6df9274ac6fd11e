//! Collaborator traits
//!
//! The controller talks to the screen and the vibration motor only through
//! these traits, so it can be driven by firmware tasks or by test doubles.

pub mod haptic;
pub mod surface;

pub use haptic::Haptic;
pub use surface::{DisplaySurface, Region, TextStyle};
