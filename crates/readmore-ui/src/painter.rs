use readmore_engine::coords::{CornerRadii, Rect, Vec2};
use readmore_engine::paint::{Color, Paint};
use readmore_engine::scene::shapes::text::TextCmd;
use readmore_engine::scene::{Border, DrawList, ZIndex};
use readmore_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API, tracks clip and
/// opacity scopes, and exposes per-frame pointer state so widgets can
/// express hover / pressed visuals directly in paint.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    z: i32,
    /// Product of all pushed opacities; the top is the effective value.
    opacity_stack: Vec<f32>,
    /// Current mouse position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        mouse_pos: Vec2,
        mouse_pressed: bool,
        scale: f32,
    ) -> Self {
        Self {
            draw_list,
            font_system,
            scale,
            z: 0,
            opacity_stack: Vec::new(),
            mouse_pos,
            mouse_pressed,
        }
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && rect.contains(self.mouse_pos)
    }

    // ── layout context ────────────────────────────────────────────────────

    /// A [`LayoutCtx`] borrowing this painter's font system, for containers
    /// that re-measure children during paint.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { fonts: self.font_system, scale: self.scale }
    }

    // ── opacity ───────────────────────────────────────────────────────────

    /// Effective opacity applied to everything drawn right now.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    /// Multiply subsequent draws by `opacity`. Must be paired with [`pop_opacity`](Self::pop_opacity).
    pub fn push_opacity(&mut self, opacity: f32) {
        let effective = self.opacity() * opacity.clamp(0.0, 1.0);
        self.opacity_stack.push(effective);
    }

    pub fn pop_opacity(&mut self) {
        if self.opacity_stack.pop().is_none() {
            log::warn!("pop_opacity called without matching push_opacity");
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Axis-aligned rectangle filled with a solid color or gradient.
    ///
    /// Fully transparent fills are not recorded.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let Some(paint) = self.visible(paint.into()) else { return };
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint);
    }

    /// Rounded rectangle with optional border. `radius = 0.0` for sharp corners.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let opacity = self.opacity();
        let border = border
            .map(|b| Border::new(b.width, b.color.with_opacity(opacity)))
            .filter(|b| b.color.a > 0.0);
        let paint = paint.into().with_opacity(opacity);
        if paint.is_invisible() && border.is_none() {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, CornerRadii::all(radius), paint, border);
    }

    /// Text at `origin` (top-left of the first line), wrapped at `max_width`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let color = color.with_opacity(self.opacity());
        if color.a <= 0.0 {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_text(z, TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
            max_width,
        });
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn visible(&self, paint: Paint) -> Option<Paint> {
        let opacity = self.opacity();
        let paint = if opacity < 1.0 { paint.with_opacity(opacity) } else { paint };
        (!paint.is_invisible()).then_some(paint)
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
