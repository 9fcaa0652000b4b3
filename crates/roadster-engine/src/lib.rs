//! Roadster engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo: the
//! wgpu device/surface layer, the winit event loop runtime, input, frame
//! timing, and the box/axes renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
