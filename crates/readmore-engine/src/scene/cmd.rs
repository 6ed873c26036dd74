use crate::paint::Paint;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Fill paint for shape commands; `None` for text.
    pub fn paint(&self) -> Option<&Paint> {
        match self {
            DrawCmd::Rect(c) => Some(&c.paint),
            DrawCmd::RoundedRect(c) => Some(&c.paint),
            DrawCmd::Text(_) => None,
        }
    }
}
