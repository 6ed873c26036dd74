use readmore_engine::coords::{Rect, Vec2};
use readmore_engine::paint::{Color, Paint};
use readmore_engine::scene::Border;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A clickable widget that wraps any child content.
///
/// Visual state (hover, press) is read from `Painter` during `paint`.
///
/// # Example
/// ```rust,ignore
/// Button::new(Text::new("Read more", font, 14.0, blue))
///     .background(Color::white())
///     .padding_all(6.0)
///     .on_click(|| log::info!("pressed"))
/// ```
pub struct Button {
    child: Element,
    on_click: Option<Box<dyn FnMut()>>,

    background: Color,
    hover_background: Color,
    press_background: Color,
    border: Option<Border>,
    corner_radius: f32,
    padding: Edges,
}

impl Button {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            on_click: None,
            background: Color::transparent(),
            hover_background: Color::transparent(),
            press_background: Color::transparent(),
            border: None,
            corner_radius: 0.0,
            padding: Edges::default(),
        }
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.set_on_click(f);
        self
    }

    /// Replace the click callback on an already-built button.
    ///
    /// Used by owners that wire a button they were handed.
    pub fn set_on_click(&mut self, f: impl FnMut() + 'static) {
        if self.on_click.is_some() {
            log::debug!("button: replacing existing on_click handler");
        }
        self.on_click = Some(Box::new(f));
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Background color when the cursor is over the button.
    pub fn hover_background(mut self, color: Color) -> Self {
        self.hover_background = color;
        self
    }

    /// Background color while the primary button is held.
    pub fn press_background(mut self, color: Color) -> Self {
        self.press_background = color;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }
}

impl Widget for Button {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner = constraints.shrink(self.padding);
        let child_size = self.child.measure(inner, ctx);
        constraints.constrain(Vec2::new(
            child_size.x + self.padding.h(),
            child_size.y + self.padding.v(),
        ))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let bg = if painter.is_pressed(rect) {
            self.press_background
        } else if painter.is_hovered(rect) {
            self.hover_background
        } else {
            self.background
        };

        painter.fill_rounded_rect(rect, self.corner_radius, Paint::Solid(bg), self.border.clone());
        self.child.paint(painter, inset_rect(rect, self.padding));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        if let UiEvent::Click { pos } = event {
            if rect.contains(*pos) {
                if let Some(f) = &mut self.on_click {
                    f();
                }
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}
