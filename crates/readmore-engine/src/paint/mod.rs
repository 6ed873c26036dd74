//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Same paint with every color scaled by `opacity`.
    #[must_use]
    pub fn with_opacity(&self, opacity: f32) -> Self {
        match self {
            Paint::Solid(c) => Paint::Solid(c.with_opacity(opacity)),
            Paint::LinearGradient(g) => Paint::LinearGradient(g.with_opacity(opacity)),
        }
    }

    /// True when nothing would be visible (every color fully transparent).
    pub fn is_invisible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a <= 0.0,
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a <= 0.0),
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            // Conservative: a gradient is opaque only if every stop is.
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.is_opaque()),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}
