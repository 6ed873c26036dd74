use readmore_engine::coords::{Rect, Vec2};
use readmore_engine::paint::Color;
use readmore_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// A single-run, wrapping text widget.
///
/// Wrapping is controlled by the width constraint from the parent.
///
/// # Example
/// ```rust,ignore
/// Text::new("Hello, world!", font, 16.0, Color::gray(0.1, 1.0))
/// ```
pub struct Text {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self { text: text.into(), font, size, color }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let size = ctx.measure_text(&self.text, self.font, self.size, constraints.max_width());
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let max_w = (rect.size.x > 0.0).then_some(rect.size.x);
        painter.text(&self.text, self.font, self.size, self.color, rect.origin, max_w);
    }
}
