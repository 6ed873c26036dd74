use readmore_engine::coords::{Rect, Vec2};
use readmore_engine::scene::DrawList;
use readmore_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Construct this from the host's input and `FrameClock` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    /// Accumulated scroll wheel delta this frame (positive = scroll down).
    pub scroll_delta: f32,
    /// Seconds since the previous frame. Drives running animations.
    pub dt: f32,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` populated each frame by
/// [`frame_ref`](Self::frame_ref). The root widget stays with the caller so
/// its state (expanded flag, running animation) survives between frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(include_bytes!("my_font.ttf"))?;
///
/// // Once per frame:
/// let ft = clock.tick();
/// let draw_list = ui.frame_ref(&mut root, viewport, &UiInput { dt: ft.dt, ..Default::default() });
/// ```
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame_ref`](Self::frame_ref) call.
    pub draw_list: DrawList,
    /// Physical-to-logical pixel ratio forwarded to measurement and paint.
    pub scale: f32,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new(), scale: 1.0 }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Measure, paint, and route this frame's input through `root`.
    ///
    /// The root is laid out at its measured size, anchored at the top-left
    /// of the viewport. Events are routed after paint, in order: hover,
    /// click, scroll wheel, tick. The returned list is valid until the next
    /// call.
    #[must_use]
    pub fn frame_ref(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let size = {
            let ctx = LayoutCtx { fonts: &self.font_system, scale: self.scale };
            root.measure(Constraints::loose(viewport), &ctx)
        };
        let rect = Rect::from_origin_size(Vec2::zero(), size);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                input.mouse_pos,
                input.mouse_pressed,
                self.scale,
            );
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        {
            let ctx = LayoutCtx { fonts: &self.font_system, scale: self.scale };
            let _ = root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect, &ctx);
            if input.mouse_clicked {
                let _ = root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect, &ctx);
            }
            if input.scroll_delta != 0.0 {
                let _ = root.on_event(&UiEvent::ScrollWheel { delta: input.scroll_delta }, rect, &ctx);
            }
            if input.dt > 0.0 {
                let _ = root.on_event(&UiEvent::Tick { dt: input.dt }, rect, &ctx);
            }
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
