//! Time subsystem.
//!
//! Frame timing without coupling to a runtime: call `tick()` once per frame
//! to obtain the clamped delta that drives UI animations.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
