use readmore_engine::coords::{Rect, Vec2};
use readmore_engine::text::FontSystem;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding, text container inset).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Box constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Not to be confused with
/// [`SizeConstraint`](crate::priority::SizeConstraint), which is a
/// prioritized height rule owned by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Shrink max inward by `edges`. Min becomes zero.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            min: Vec2::zero(),
            max: Vec2::new(
                (self.max.x - edges.h()).max(0.0),
                (self.max.y - edges.v()).max(0.0),
            ),
        }
    }

    /// Replace the height constraint with `f32::INFINITY` (measure natural height).
    #[inline]
    #[must_use]
    pub fn with_infinite_height(self) -> Self {
        Self { max: Vec2::new(self.max.x, f32::INFINITY), ..self }
    }

    /// Finite max width, or `None` when unbounded.
    #[inline]
    pub fn max_width(self) -> Option<f32> {
        self.max.x.is_finite().then_some(self.max.x)
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure)
/// and [`Widget::on_event`](crate::widget::Widget::on_event).
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Physical-to-logical pixel ratio; forwarded to text measurement.
    pub scale: f32,
}

impl LayoutCtx<'_> {
    #[inline]
    pub fn measure_text(
        &self,
        text: &str,
        font: readmore_engine::text::FontId,
        size: f32,
        max_width: Option<f32>,
    ) -> Vec2 {
        self.fonts.measure_text(text, font, size, max_width, self.scale)
    }
}

// ── rect helper ──────────────────────────────────────────────────────────

/// Shrink a rect by `edges`.
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constraints ───────────────────────────────────────────────────────

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn shrink_clamps_to_zero() {
        let s = Constraints::loose(Vec2::new(5.0, 5.0)).shrink(Edges::all(20.0));
        assert_eq!(s.max, Vec2::zero());
    }

    #[test]
    fn infinite_height_keeps_width() {
        let c = Constraints::loose(Vec2::new(120.0, 40.0)).with_infinite_height();
        assert_eq!(c.max_width(), Some(120.0));
        assert!(c.max.y.is_infinite());
    }

    // ── inset_rect ────────────────────────────────────────────────────────

    #[test]
    fn inset_rect_asymmetric_padding() {
        let rect = Rect::new(5.0, 5.0, 100.0, 60.0);
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        assert_eq!(inset_rect(rect, edges), Rect::new(11.0, 9.0, 84.0, 48.0));
    }

    #[test]
    fn inset_rect_never_negative() {
        let inner = inset_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Edges::all(8.0));
        assert_eq!(inner.size, Vec2::zero());
    }
}
