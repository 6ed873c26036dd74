//! Text measurement.
//!
//! Glyph rasterization is the renderer's concern; this module only lays text
//! out far enough to report its bounding size.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, FALLBACK_LINE_HEIGHT};
