use readmore_engine::coords::Vec2;

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Mouse moved to `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Mouse wheel / trackpad scroll.
    ///
    /// `delta` > 0 → scroll down (reveal content below); < 0 → scroll up.
    ScrollWheel { delta: f32 },
    /// Frame time advanced by `dt` seconds. Routed to every widget once per
    /// frame so running animations can make progress.
    Tick { dt: f32 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
