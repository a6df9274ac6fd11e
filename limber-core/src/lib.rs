//! Board-agnostic core logic for the Limber stretching watch
//!
//! This crate contains all application logic that does not depend on
//! specific hardware:
//!
//! - Pose catalog with build-time limits
//! - Pose cycle controller (index, run flag, countdown)
//! - Title screen / cycling state machine
//! - Timer configuration
//! - Collaborator traits for the display surface and haptic feedback
//! - Watch face text layout
//! - Pose manifest parsing for build scripts (`manifest` feature, needs std)

#![cfg_attr(not(any(test, feature = "manifest")), no_std)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod layout;
#[cfg(any(test, feature = "manifest"))]
pub mod manifest;
pub mod state;
pub mod text;
pub mod traits;

pub use catalog::{CatalogError, Pose, PoseCatalog};
pub use config::{ConfigError, TimerConfig};
pub use controller::{ControllerState, PoseController, TickOutcome};
pub use state::{Button, Direction, Event, State};
pub use traits::{DisplaySurface, Haptic, Region, TextStyle};
