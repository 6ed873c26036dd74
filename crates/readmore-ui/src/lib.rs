//! Readmore UI: retained widget tree on top of `readmore-engine`, and the
//! expandable "read more" text component built on it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use readmore_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//!
//! let trimmed = SizeConstraint::fixed(80.0, LayoutPriority::HIGH);
//! let extended = SizeConstraint::content(LayoutPriority::LOW);
//! let mut root: Element = {
//!     let mut view = ExpandableTextView::new(Text::new(body, font, 14.0, black), Default::default())
//!         .toggle_control(Button::new(Text::new("Read more", font, 14.0, blue)))
//!         .trimmed_constraint(Rc::clone(&trimmed))
//!         .extended_constraint(Rc::clone(&extended));
//!     view.load(Rect::new(0.0, 0.0, 320.0, 80.0));
//!     view.into()
//! };
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_clicked, dt, ..Default::default() };
//! let draw_list = scene.frame_ref(&mut root, viewport, &input);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type, then use it anywhere an [`Element`] is accepted:
//!
//! ```rust,ignore
//! use readmore_ui::prelude::*;
//!
//! pub struct Swatch(Color);
//!
//! impl Widget for Swatch {
//!     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         constraints.constrain(Vec2::new(40.0, 40.0))
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_rounded_rect(rect, 4.0, self.0, None);
//!     }
//! }
//! ```

pub mod animation;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod priority;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use widget::{Element, Widget};

/// Everything you need to build and host the component. Import this in your app code.
pub mod prelude {
    pub use crate::animation::{Easing, Transition, TransitionStep};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::priority::{LayoutPriority, SizeConstraint, SizeTarget};
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        expandable_text::{
            ExpandableTextConfig, ExpandableTextDelegate, ExpandableTextView, ToggleAction,
        },
        gradient_overlay::{GradientLayer, GradientOverlay, GradientOverlayConfig},
        scroll::ScrollView,
        text::Text,
    };

    // Re-export the engine primitives everyone needs.
    pub use readmore_engine::coords::{CornerRadii, Rect, Vec2};
    pub use readmore_engine::paint::{Color, ColorStop, LinearGradient, Paint};
    pub use readmore_engine::scene::Border;
    pub use readmore_engine::text::FontId;
}
