use std::cell::Cell;

use readmore_engine::coords::{Rect, Vec2};
use readmore_engine::paint::{Color, Paint};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A clipping single-child container with optional wheel scrolling.
///
/// The child is measured at unbounded height so it can report its natural
/// size; content taller than the allocated rect is clipped. When scrolling
/// is disabled the content stays pinned to the top and wheel events pass
/// through to the parent.
///
/// # Example
/// ```rust,ignore
/// ScrollView::new(Text::new(long_text, font, 14.0, black))
///     .line_height(20.0)
///     .scroll_enabled(false)
/// ```
pub struct ScrollView {
    child: Element,
    /// Current scroll offset in logical pixels (>=0, content shifted up by this amount).
    scroll_offset: f32,
    scroll_enabled: bool,
    /// Pixels scrolled per wheel-delta unit.
    line_height: f32,
    show_scrollbar: bool,
    /// Content height from the most recent measure/paint pass.
    cached_content_height: Cell<f32>,
}

impl ScrollView {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            scroll_offset: 0.0,
            scroll_enabled: true,
            line_height: 24.0,
            show_scrollbar: true,
            cached_content_height: Cell::new(0.0),
        }
    }

    pub fn line_height(mut self, v: f32) -> Self {
        self.line_height = v;
        self
    }

    pub fn show_scrollbar(mut self, v: bool) -> Self {
        self.show_scrollbar = v;
        self
    }

    pub fn scroll_enabled(mut self, v: bool) -> Self {
        self.set_scroll_enabled(v);
        self
    }

    /// Enable or disable wheel scrolling. Disabling resets the offset to 0.
    pub fn set_scroll_enabled(&mut self, v: bool) {
        self.scroll_enabled = v;
        if !v {
            self.scroll_offset = 0.0;
        }
    }

    #[inline]
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Natural height of the child laid out at `width`.
    pub fn content_height(&self, width: f32, ctx: &LayoutCtx) -> f32 {
        let h = self.measure_content(width, ctx).y;
        self.cached_content_height.set(h);
        h
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn measure_content(&self, viewport_w: f32, ctx: &LayoutCtx) -> Vec2 {
        let c = Constraints::loose(Vec2::new(viewport_w, f32::INFINITY));
        self.child.measure(c, ctx)
    }

    fn clamped_offset(&self, content_h: f32, viewport_h: f32) -> f32 {
        let max = (content_h - viewport_h).max(0.0);
        self.scroll_offset.clamp(0.0, max)
    }

    fn content_rect(&self, rect: Rect, content_h: f32) -> Rect {
        let offset = self.clamped_offset(content_h, rect.size.y);
        Rect::new(rect.origin.x, rect.origin.y - offset, rect.size.x, content_h)
    }

    fn scrollbar_thumb(&self, rect: Rect, content_h: f32) -> Option<Rect> {
        if !self.scroll_enabled || !self.show_scrollbar || content_h <= rect.size.y {
            return None;
        }
        let bar_w: f32 = 4.0;
        let ratio = rect.size.y / content_h;
        let thumb_h = (rect.size.y * ratio).max(24.0);
        let offset = self.clamped_offset(content_h, rect.size.y);
        let scroll_range = content_h - rect.size.y;
        let thumb_y = rect.origin.y + (offset / scroll_range) * (rect.size.y - thumb_h);
        Some(Rect::new(rect.origin.x + rect.size.x - bar_w, thumb_y, bar_w, thumb_h))
    }

    fn apply_scroll(&mut self, delta: f32, content_h: f32, viewport_h: f32) {
        let max = (content_h - viewport_h).max(0.0);
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max);
    }
}

impl Widget for ScrollView {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_w = constraints.max_width().unwrap_or(0.0);
        let content = self.measure_content(max_w, ctx);
        self.cached_content_height.set(content.y);
        constraints.constrain(content)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        let content_h = self.content_height(rect.size.x, &ctx);
        let content_rect = self.content_rect(rect, content_h);

        painter.push_clip(rect);
        self.child.paint(painter, content_rect);
        painter.pop_clip();

        if let Some(thumb) = self.scrollbar_thumb(rect, content_h) {
            let thumb_color = Paint::Solid(Color::gray(0.5, 0.8));
            painter.fill_rounded_rect(thumb, 2.0, thumb_color, None);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let content_h = self.cached_content_height.get();

        match event {
            UiEvent::ScrollWheel { delta } if self.scroll_enabled => {
                self.apply_scroll(*delta * self.line_height, content_h, rect.size.y);
                EventResult::Consumed
            }
            UiEvent::ScrollWheel { .. } => EventResult::Ignored,
            other => {
                // Hit-test the child in content-space coordinates.
                let content_rect = self.content_rect(rect, content_h);
                self.child.on_event(other, content_rect, ctx)
            }
        }
    }
}
