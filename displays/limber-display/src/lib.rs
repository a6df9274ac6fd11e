//! Display abstraction and shared rendering for Limber
//!
//! This crate provides:
//! - `Screen`, a fixed-capacity buffer for the header, description and
//!   footer regions that implements `limber_core::DisplaySurface`
//! - `DisplayBackend` trait for concrete panels (OLED, LCD, ...)
//! - `render`, which lays a `Screen` out on any backend
//!
//! # Architecture
//!
//! The controller writes text into a `Screen`. The firmware copies the screen
//! to the display task, which calls [`render`] on its panel driver. Only the
//! panel driver knows about pixels and fonts; the renderer works in
//! character cells reported by [`DisplayBackend::grid`].

#![no_std]

pub mod backend;
pub mod render;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, Grid};
pub use render::render;
pub use screen::Screen;
