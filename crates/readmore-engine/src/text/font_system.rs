use std::fmt;

use crate::coords::Vec2;

/// Line height as a multiple of font size, used when no glyphs can be laid out.
pub const FALLBACK_LINE_HEIGHT: f32 = 1.2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(usize);

impl FontId {
    /// Handle for the `index`-th loaded font.
    ///
    /// Ids that were never loaded are valid to pass around; measurement falls
    /// back to a single line of `size * FALLBACK_LINE_HEIGHT`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font #{}", id.0);
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the bounding size of `text` laid out at `size`, wrapped at
    /// `max_width` when given.
    ///
    /// Layout runs at `size * scale` and the result is divided back to
    /// logical pixels so widths match what a renderer at that scale draws.
    #[must_use]
    pub fn measure_text(
        &self,
        text: &str,
        id: FontId,
        size: f32,
        max_width: Option<f32>,
        scale: f32,
    ) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let fallback = Vec2::new(0.0, size * FALLBACK_LINE_HEIGHT);
        let Some(font) = self.get(id) else {
            return fallback;
        };

        let scale = scale.max(0.01);
        let phys_size = size * scale;
        let phys_max = max_width.map(|w| w * scale);

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width: phys_max, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, phys_size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return fallback;
        }

        // Pen position after each glyph, not the bitmap edge: fontdue wraps on
        // advance width, so the measured width must cover advances.
        let w = glyphs.iter().map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, phys_size);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        }).fold(0.0f32, f32::max) / scale;
        let h = layout.height().max(phys_size) / scale;
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_falls_back_to_one_line() {
        let fs = FontSystem::new();
        let size = fs.measure_text("anything at all", FontId::from_index(3), 10.0, Some(50.0), 1.0);
        assert_eq!(size, Vec2::new(0.0, 10.0 * FALLBACK_LINE_HEIGHT));
    }

    #[test]
    fn invalid_bytes_are_rejected() {
        let mut fs = FontSystem::new();
        let err = fs.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }
}
