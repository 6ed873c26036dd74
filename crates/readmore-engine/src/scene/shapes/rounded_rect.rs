use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, paint, border }));
    }
}
