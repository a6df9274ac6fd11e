//! Title screen / cycling state machine
//!
//! The screen starts on the title page and leaves it permanently on the
//! first navigation. Everything else (running flag, countdown, index) is
//! tracked by the controller.

pub mod events;
pub mod machine;

pub use events::{Button, Direction, Event};
pub use machine::State;
