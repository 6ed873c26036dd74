//! Animation helpers for widget transitions.
//!
//! A [`Transition`] is advanced by the frame delta carried on
//! [`UiEvent::Tick`](crate::event::UiEvent::Tick). Its progress is shaped by an
//! [`Easing`] curve and it reports [`TransitionStep::Finished`] exactly once,
//! which is where owners run their completion logic.
//!
//! ```rust,ignore
//! let mut t = Transition::new(Duration::from_millis(700));
//! t.start();
//! match t.advance(dt) {
//!     TransitionStep::Running { progress } => alpha = lerp(1.0, 0.0, progress),
//!     TransitionStep::Finished => on_complete(),
//!     TransitionStep::Idle => {}
//! }
//! ```

mod easing;
mod transition;

pub use easing::{ease, lerp, Easing};
pub use transition::{Transition, TransitionStep};
