//! Readmore engine crate.
//!
//! Owns the renderer-agnostic pieces used by the widget layer: geometry,
//! the paint model, the recorded draw stream, text measurement, and frame
//! timing.

pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod text;
