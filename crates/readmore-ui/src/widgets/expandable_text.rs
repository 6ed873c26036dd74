use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use readmore_engine::coords::{Rect, Vec2};
use readmore_engine::paint::Color;

use crate::animation::{lerp, Easing, Transition, TransitionStep};
use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::priority::{resolve_height, LayoutPriority, SizeConstraint};
use crate::widget::{Element, Widget};
use crate::widgets::button::Button;
use crate::widgets::gradient_overlay::{GradientOverlay, GradientOverlayConfig};
use crate::widgets::scroll::ScrollView;

/// Length of the expand / collapse fade.
pub const TOGGLE_ANIMATION_DURATION: Duration = Duration::from_millis(700);

// ── Delegate ──────────────────────────────────────────────────────────────

/// Receives a call when an expand or collapse has fully finished.
///
/// Both calls happen after the size rules were re-prioritized, so this is
/// the place for a host to re-measure whatever contains the view.
pub trait ExpandableTextDelegate {
    fn expand_finished(&mut self);
    fn collapse_finished(&mut self);
}

// ── Config ────────────────────────────────────────────────────────────────

/// Declarative settings for an [`ExpandableTextView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandableTextConfig {
    /// Attach a gradient overlay at load time. Default: `true`.
    pub use_gradient_overlay: bool,
    /// Kept for hosts that read it; the view itself does not act on it.
    /// Default: `false`.
    pub remove_toggle_control_on_expand: bool,
    /// Opaque fill behind the text; also the color the overlay fades to.
    /// Default: white.
    pub background: Color,
    /// Inset between the view edge and the text. Default: none.
    pub text_inset: Edges,
    /// Default: [`TOGGLE_ANIMATION_DURATION`].
    pub animation_duration: Duration,
    /// Default: ease-in-out.
    pub easing: Easing,
}

impl Default for ExpandableTextConfig {
    fn default() -> Self {
        Self {
            use_gradient_overlay: true,
            remove_toggle_control_on_expand: false,
            background: Color::white(),
            text_inset: Edges::default(),
            animation_duration: TOGGLE_ANIMATION_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

// ── Toggle dispatch ───────────────────────────────────────────────────────

/// Which animation a toggle press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    ExpandWithConstraints,
    CollapseWithConstraints,
    /// Resize via explicit frame changes. Not implemented; no-op.
    ExpandFrame,
    /// Resize via explicit frame changes. Not implemented; no-op.
    CollapseFrame,
}

/// Route a toggle press on `(size rules wired, currently expanded)`.
pub fn toggle_action(using_constraints: bool, is_expanded: bool) -> ToggleAction {
    match (using_constraints, is_expanded) {
        (true, true) => ToggleAction::CollapseWithConstraints,
        (true, false) => ToggleAction::ExpandWithConstraints,
        (false, true) => ToggleAction::CollapseFrame,
        (false, false) => ToggleAction::ExpandFrame,
    }
}

/// Completion to run when the running transition finishes, plus the alpha
/// endpoints it animates between.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Expand { toggle_from: f32, overlay_from: f32 },
    Collapse { toggle_from: f32, overlay_from: f32 },
}

impl Pending {
    fn target_alpha(self) -> f32 {
        match self {
            Pending::Expand { .. } => 0.0,
            Pending::Collapse { .. } => 1.0,
        }
    }

    fn from_alphas(self) -> (f32, f32) {
        match self {
            Pending::Expand { toggle_from, overlay_from }
            | Pending::Collapse { toggle_from, overlay_from } => (toggle_from, overlay_from),
        }
    }
}

// ── ExpandableTextView ────────────────────────────────────────────────────

/// Text that shows trimmed with a fade and a "read more" control, and
/// animates to its full height when the control is pressed.
///
/// Height comes from two host-owned [`SizeConstraint`]s: whichever has the
/// higher priority wins. Expanding swaps their priorities once the fade has
/// finished; nothing changes size mid-animation.
///
/// ```rust,ignore
/// let trimmed  = SizeConstraint::fixed(80.0, LayoutPriority::HIGH);
/// let extended = SizeConstraint::content(LayoutPriority::LOW);
///
/// let mut view = ExpandableTextView::new(Text::new(body, font, 14.0, ink), Default::default())
///     .toggle_control(Button::new(Text::new("Read more", font, 14.0, link)))
///     .trimmed_constraint(Rc::clone(&trimmed))
///     .extended_constraint(Rc::clone(&extended))
///     .delegate(MyRowReloader);
/// view.load(Rect::new(0.0, 0.0, 320.0, 80.0));
/// ```
pub struct ExpandableTextView {
    content: ScrollView,
    config: ExpandableTextConfig,
    is_expanded: bool,
    loaded: bool,

    toggle_control: Option<Button>,
    toggle_alpha: f32,
    /// Set by the toggle's click handler once wired in `load`.
    toggle_pressed: Rc<Cell<bool>>,

    trimmed_constraint: Option<Rc<SizeConstraint>>,
    extended_constraint: Option<Rc<SizeConstraint>>,

    gradient_overlay: Option<GradientOverlay>,
    delegate: Option<Box<dyn ExpandableTextDelegate>>,

    transition: Transition,
    pending: Option<Pending>,
    needs_layout: Cell<bool>,
}

impl ExpandableTextView {
    pub fn new(content: impl Into<Element>, config: ExpandableTextConfig) -> Self {
        Self {
            content: ScrollView::new(content).show_scrollbar(false),
            config,
            is_expanded: false,
            loaded: false,
            toggle_control: None,
            toggle_alpha: 1.0,
            toggle_pressed: Rc::new(Cell::new(false)),
            trimmed_constraint: None,
            extended_constraint: None,
            gradient_overlay: None,
            delegate: None,
            transition: Transition::new(config.animation_duration).with_easing(config.easing),
            pending: None,
            needs_layout: Cell::new(true),
        }
    }

    /// The control that toggles between trimmed and extended. Wired in [`load`](Self::load).
    pub fn toggle_control(mut self, button: Button) -> Self {
        self.toggle_control = Some(button);
        self
    }

    /// Height rule for the trimmed state.
    pub fn trimmed_constraint(mut self, c: Rc<SizeConstraint>) -> Self {
        self.trimmed_constraint = Some(c);
        self
    }

    /// Height rule for the extended state.
    pub fn extended_constraint(mut self, c: Rc<SizeConstraint>) -> Self {
        self.extended_constraint = Some(c);
        self
    }

    pub fn delegate(mut self, d: impl ExpandableTextDelegate + 'static) -> Self {
        self.set_delegate(d);
        self
    }

    pub fn set_delegate(&mut self, d: impl ExpandableTextDelegate + 'static) {
        self.delegate = Some(Box::new(d));
    }

    // ── state queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    #[inline]
    pub fn config(&self) -> &ExpandableTextConfig {
        &self.config
    }

    #[inline]
    pub fn gradient_overlay(&self) -> Option<&GradientOverlay> {
        self.gradient_overlay.as_ref()
    }

    #[inline]
    pub fn toggle_alpha(&self) -> f32 {
        self.toggle_alpha
    }

    #[inline]
    pub fn is_scroll_enabled(&self) -> bool {
        self.content.is_scroll_enabled()
    }

    /// True once a size rule changed and the host has not measured since.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout.get()
    }

    /// Both size rules are wired, so resizing goes through their priorities.
    pub fn is_using_constraints(&self) -> bool {
        self.trimmed_constraint.is_some() && self.extended_constraint.is_some()
    }

    // ── setup ─────────────────────────────────────────────────────────────

    /// One-time setup once the view has its initial `frame`.
    ///
    /// Creates the gradient overlay (unless disabled), turns off scrolling,
    /// and wires the toggle control. Later calls are ignored.
    pub fn load(&mut self, frame: Rect) {
        if self.loaded {
            log::debug!("expandable text: load called twice; ignoring");
            return;
        }
        self.loaded = true;

        self.setup_gradient_overlay(frame);
        self.content.set_scroll_enabled(false);

        if let Some(toggle) = &mut self.toggle_control {
            let pressed = Rc::clone(&self.toggle_pressed);
            toggle.set_on_click(move || pressed.set(true));
        }
    }

    fn setup_gradient_overlay(&mut self, frame: Rect) {
        if !self.config.use_gradient_overlay {
            return;
        }

        let overlay = GradientOverlay::with_frame(frame, GradientOverlayConfig {
            top_color: Color::transparent(),
            bottom_color: self.config.background,
            ..Default::default()
        });
        overlay.configure();
        self.gradient_overlay = Some(overlay);
    }

    // ── toggling ──────────────────────────────────────────────────────────

    /// Start the expand or collapse matching the current state.
    ///
    /// Returns the action taken, or `None` while a previous toggle is still
    /// animating (the running animation is left to finish).
    pub fn on_toggle_pressed(&mut self) -> Option<ToggleAction> {
        if self.transition.is_running() {
            log::debug!("expandable text: toggle pressed mid-animation; ignoring");
            return None;
        }

        let action = toggle_action(self.is_using_constraints(), self.is_expanded);
        log::debug!("expandable text: toggle -> {action:?}");
        match action {
            ToggleAction::CollapseWithConstraints => self.animate_collapse_with_constraints(),
            ToggleAction::ExpandWithConstraints => self.animate_expand_with_constraints(),
            ToggleAction::CollapseFrame => self.animate_collapse_frame(),
            ToggleAction::ExpandFrame => self.animate_expand_frame(),
        }
        Some(action)
    }

    fn animate_expand_with_constraints(&mut self) {
        self.start(Pending::Expand {
            toggle_from: self.toggle_alpha,
            overlay_from: self.overlay_alpha(),
        });
    }

    fn animate_collapse_with_constraints(&mut self) {
        self.start(Pending::Collapse {
            toggle_from: self.toggle_alpha,
            overlay_from: self.overlay_alpha(),
        });
    }

    fn animate_expand_frame(&mut self) {
        log::debug!("expandable text: frame-based expand not implemented");
    }

    fn animate_collapse_frame(&mut self) {
        log::debug!("expandable text: frame-based collapse not implemented");
    }

    fn start(&mut self, pending: Pending) {
        self.pending = Some(pending);
        self.transition.start();
    }

    /// Advance the running animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        match self.transition.advance(dt) {
            TransitionStep::Idle => {}
            TransitionStep::Running { progress } => {
                if let Some(pending) = self.pending {
                    self.apply_alphas(pending, progress);
                }
            }
            TransitionStep::Finished => {
                if let Some(pending) = self.pending.take() {
                    self.apply_alphas(pending, 1.0);
                    self.finish(pending);
                }
            }
        }
    }

    fn apply_alphas(&mut self, pending: Pending, progress: f32) {
        let to = pending.target_alpha();
        let (toggle_from, overlay_from) = pending.from_alphas();
        if self.toggle_control.is_some() {
            self.toggle_alpha = lerp(toggle_from, to, progress);
        }
        if let Some(overlay) = &mut self.gradient_overlay {
            overlay.set_alpha(lerp(overlay_from, to, progress));
        }
    }

    fn finish(&mut self, pending: Pending) {
        let (trimmed, extended, expanded) = match pending {
            Pending::Expand { .. } => (LayoutPriority::LOW, LayoutPriority::HIGH, true),
            Pending::Collapse { .. } => (LayoutPriority::HIGH, LayoutPriority::LOW, false),
        };
        if let Some(c) = &self.trimmed_constraint {
            c.set_priority(trimmed);
        }
        if let Some(c) = &self.extended_constraint {
            c.set_priority(extended);
        }
        self.needs_layout.set(true);
        self.is_expanded = expanded;
        log::debug!("expandable text: finished, expanded = {expanded}");

        if let Some(delegate) = &mut self.delegate {
            if expanded {
                delegate.expand_finished();
            } else {
                delegate.collapse_finished();
            }
        }
    }

    // ── layout helpers ────────────────────────────────────────────────────

    fn overlay_alpha(&self) -> f32 {
        self.gradient_overlay.as_ref().map_or(1.0, GradientOverlay::alpha)
    }

    /// The toggle sits in the bottom-right corner, on top of the fade.
    fn toggle_rect(toggle: &Button, rect: Rect, ctx: &LayoutCtx) -> Rect {
        let size = toggle.measure(Constraints::loose(rect.size), ctx);
        let max = rect.max();
        Rect::new(max.x - size.x, max.y - size.y, size.x, size.y)
    }
}

impl Widget for ExpandableTextView {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let width = constraints.max_width().unwrap_or(constraints.min.x);
        let inset = self.config.text_inset;
        let content_h = self.content.content_height((width - inset.h()).max(0.0), ctx) + inset.v();

        let rules = [self.trimmed_constraint.as_deref(), self.extended_constraint.as_deref()];
        let height = resolve_height(&rules, content_h).unwrap_or(content_h);
        self.needs_layout.set(false);
        constraints.constrain(Vec2::new(width, height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.config.background);

        // Bottom-most child: the text draws over the fade.
        if let Some(overlay) = &self.gradient_overlay {
            overlay.paint(painter, rect);
        }

        self.content.paint(painter, inset_rect(rect, self.config.text_inset));

        if let Some(toggle) = &self.toggle_control {
            let toggle_rect = Self::toggle_rect(toggle, rect, &painter.layout_ctx());
            painter.push_opacity(self.toggle_alpha);
            toggle.paint(painter, toggle_rect);
            painter.pop_opacity();
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        if let UiEvent::Tick { dt } = event {
            self.tick(*dt);
            return self.content.on_event(event, inset_rect(rect, self.config.text_inset), ctx);
        }

        if let Some(toggle) = &mut self.toggle_control {
            let toggle_rect = Self::toggle_rect(toggle, rect, ctx);
            if toggle.on_event(event, toggle_rect, ctx).is_consumed() {
                // Only a wired toggle (after load) raises the flag.
                if self.toggle_pressed.replace(false) {
                    let _ = self.on_toggle_pressed();
                }
                return EventResult::Consumed;
            }
        }

        self.content.on_event(event, inset_rect(rect, self.config.text_inset), ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use readmore_engine::scene::{DrawCmd, DrawList};
    use readmore_engine::text::{FontId, FontSystem};

    use super::*;
    use crate::priority::SizeTarget;
    use crate::scene::{UiInput, UiScene};
    use crate::widgets::text::Text;

    const FRAME: Rect = Rect::new(0.0, 0.0, 200.0, 60.0);

    /// Content with a fixed natural height.
    struct Block(f32);

    impl Widget for Block {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(Vec2::new(10.0, self.0))
        }
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.fill_rect(rect.with_height(self.0), Color::gray(0.1, 1.0));
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<&'static str>>>);

    impl Recorder {
        fn calls(&self) -> Vec<&'static str> {
            self.0.borrow().clone()
        }
    }

    impl ExpandableTextDelegate for Recorder {
        fn expand_finished(&mut self) {
            self.0.borrow_mut().push("expand");
        }
        fn collapse_finished(&mut self) {
            self.0.borrow_mut().push("collapse");
        }
    }

    fn toggle() -> Button {
        Button::new(Text::new("Read more", FontId::from_index(0), 10.0, Color::gray(0.0, 1.0)))
            .padding_all(4.0)
    }

    struct Fixture {
        view: ExpandableTextView,
        trimmed: Rc<SizeConstraint>,
        extended: Rc<SizeConstraint>,
        recorder: Recorder,
    }

    fn fixture(config: ExpandableTextConfig) -> Fixture {
        let trimmed = SizeConstraint::fixed(60.0, LayoutPriority::HIGH);
        let extended = SizeConstraint::content(LayoutPriority::LOW);
        let recorder = Recorder::default();
        let mut view = ExpandableTextView::new(Block(300.0), config)
            .toggle_control(toggle())
            .trimmed_constraint(Rc::clone(&trimmed))
            .extended_constraint(Rc::clone(&extended))
            .delegate(recorder.clone());
        view.load(FRAME);
        Fixture { view, trimmed, extended, recorder }
    }

    fn run_to_end(view: &mut ExpandableTextView) {
        view.tick(1.0);
    }

    fn measure(view: &ExpandableTextView) -> Vec2 {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        view.measure(Constraints::loose(Vec2::new(200.0, 1000.0)), &ctx)
    }

    fn paint(view: &ExpandableTextView, rect: Rect) -> DrawList {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, &fonts, Vec2::new(-1.0, -1.0), false, 1.0);
            view.paint(&mut painter, rect);
        }
        list
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn dispatch_table() {
        assert_eq!(toggle_action(true, true), ToggleAction::CollapseWithConstraints);
        assert_eq!(toggle_action(true, false), ToggleAction::ExpandWithConstraints);
        assert_eq!(toggle_action(false, true), ToggleAction::CollapseFrame);
        assert_eq!(toggle_action(false, false), ToggleAction::ExpandFrame);
    }

    #[test]
    fn one_constraint_is_not_constraint_mode() {
        let mut view = ExpandableTextView::new(Block(300.0), Default::default())
            .trimmed_constraint(SizeConstraint::fixed(60.0, LayoutPriority::HIGH));
        view.load(FRAME);
        assert!(!view.is_using_constraints());
        assert_eq!(view.on_toggle_pressed(), Some(ToggleAction::ExpandFrame));
    }

    // ── setup ─────────────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let c = ExpandableTextConfig::default();
        assert!(c.use_gradient_overlay);
        assert!(!c.remove_toggle_control_on_expand);
        assert_eq!(c.animation_duration, Duration::from_millis(700));
    }

    #[test]
    fn load_creates_overlay_fading_to_background() {
        let f = fixture(ExpandableTextConfig {
            background: Color::from_srgb_u8(250, 240, 230, 255),
            ..Default::default()
        });
        let overlay = f.view.gradient_overlay().expect("overlay");
        let layer = overlay.layer();
        assert_eq!(layer.stops[0].color, Color::transparent());
        assert_eq!(layer.stops[1].color, Color::from_srgb_u8(250, 240, 230, 255));
        assert_eq!(layer.bounds, FRAME);
        assert!(layer.attached);
    }

    #[test]
    fn load_disables_scrolling() {
        let mut view = ExpandableTextView::new(Block(300.0), Default::default());
        assert!(view.is_scroll_enabled());
        view.load(FRAME);
        assert!(!view.is_scroll_enabled());
    }

    #[test]
    fn load_runs_once() {
        let mut f = fixture(Default::default());
        f.view.load(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(f.view.gradient_overlay().unwrap().layer().bounds, FRAME);
    }

    #[test]
    fn no_overlay_when_disabled_and_toggle_still_works() {
        let mut f = fixture(ExpandableTextConfig { use_gradient_overlay: false, ..Default::default() });
        assert!(f.view.gradient_overlay().is_none());

        assert_eq!(f.view.on_toggle_pressed(), Some(ToggleAction::ExpandWithConstraints));
        run_to_end(&mut f.view);
        assert!(f.view.is_expanded());
        assert_eq!(f.trimmed.priority(), LayoutPriority::LOW);
        assert_eq!(f.extended.priority(), LayoutPriority::HIGH);
    }

    // ── expand / collapse ─────────────────────────────────────────────────

    #[test]
    fn expand_swaps_priorities_and_notifies_once() {
        let mut f = fixture(Default::default());
        assert_eq!(f.view.on_toggle_pressed(), Some(ToggleAction::ExpandWithConstraints));
        run_to_end(&mut f.view);
        f.view.tick(1.0);

        assert_eq!(f.trimmed.priority(), LayoutPriority(250));
        assert_eq!(f.extended.priority(), LayoutPriority(750));
        assert!(f.view.is_expanded());
        assert_eq!(f.recorder.calls(), vec!["expand"]);
        assert_eq!(f.view.toggle_alpha(), 0.0);
        assert_eq!(f.view.gradient_overlay().unwrap().alpha(), 0.0);
    }

    #[test]
    fn state_only_changes_on_completion() {
        let mut f = fixture(Default::default());
        let _ = f.view.on_toggle_pressed();
        f.view.tick(0.35);

        assert!(!f.view.is_expanded());
        assert!(f.view.is_animating());
        assert_eq!(f.trimmed.priority(), LayoutPriority::HIGH);
        assert!(f.recorder.calls().is_empty());
        let alpha = f.view.toggle_alpha();
        assert!(alpha > 0.0 && alpha < 1.0, "alpha mid-fade: {alpha}");
    }

    #[test]
    fn expand_then_collapse_restores_priorities() {
        let mut f = fixture(Default::default());
        let _ = f.view.on_toggle_pressed();
        run_to_end(&mut f.view);
        assert_eq!(f.view.on_toggle_pressed(), Some(ToggleAction::CollapseWithConstraints));
        run_to_end(&mut f.view);

        assert_eq!(f.trimmed.priority(), LayoutPriority(750));
        assert_eq!(f.extended.priority(), LayoutPriority(250));
        assert!(!f.view.is_expanded());
        assert_eq!(f.recorder.calls(), vec!["expand", "collapse"]);
        assert_eq!(f.view.toggle_alpha(), 1.0);
        assert_eq!(f.view.gradient_overlay().unwrap().alpha(), 1.0);
    }

    #[test]
    fn press_during_animation_is_ignored() {
        let mut f = fixture(Default::default());
        let _ = f.view.on_toggle_pressed();
        f.view.tick(0.1);
        assert_eq!(f.view.on_toggle_pressed(), None);
        run_to_end(&mut f.view);
        assert!(f.view.is_expanded());
        assert_eq!(f.recorder.calls(), vec!["expand"]);
    }

    #[test]
    fn frame_mode_is_a_no_op() {
        let recorder = Recorder::default();
        let mut view = ExpandableTextView::new(Block(300.0), Default::default())
            .toggle_control(toggle())
            .delegate(recorder.clone());
        view.load(FRAME);

        assert_eq!(view.on_toggle_pressed(), Some(ToggleAction::ExpandFrame));
        assert!(!view.is_animating());
        view.tick(1.0);
        assert!(!view.is_expanded());
        assert_eq!(view.toggle_alpha(), 1.0);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn completes_without_delegate_or_toggle() {
        let trimmed = SizeConstraint::fixed(60.0, LayoutPriority::HIGH);
        let extended = SizeConstraint::content(LayoutPriority::LOW);
        let mut view = ExpandableTextView::new(Block(300.0), Default::default())
            .trimmed_constraint(Rc::clone(&trimmed))
            .extended_constraint(Rc::clone(&extended));
        view.load(FRAME);
        let _ = view.on_toggle_pressed();
        run_to_end(&mut view);
        assert!(view.is_expanded());
        assert_eq!(extended.priority(), LayoutPriority::HIGH);
    }

    #[test]
    fn remove_toggle_flag_has_no_effect() {
        let mut f = fixture(ExpandableTextConfig {
            remove_toggle_control_on_expand: true,
            ..Default::default()
        });
        let _ = f.view.on_toggle_pressed();
        run_to_end(&mut f.view);
        assert!(f.view.config().remove_toggle_control_on_expand);
        let list = paint(&f.view, FRAME);
        // Toggle is still owned; it is simply fully transparent.
        assert!(f.view.toggle_control.is_some());
        assert!(list.items().iter().all(|i| !matches!(i.cmd, DrawCmd::Text(_))));
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn height_follows_winning_constraint() {
        let mut f = fixture(Default::default());
        assert_eq!(measure(&f.view).y, 60.0);

        let _ = f.view.on_toggle_pressed();
        run_to_end(&mut f.view);
        assert!(f.view.needs_layout());
        assert_eq!(f.extended.target(), SizeTarget::Content);
        assert_eq!(measure(&f.view).y, 300.0);
        assert!(!f.view.needs_layout());
    }

    #[test]
    fn without_constraints_uses_content_height() {
        let view = ExpandableTextView::new(Block(120.0), ExpandableTextConfig {
            text_inset: Edges::symmetric(8.0, 0.0),
            ..Default::default()
        });
        assert_eq!(measure(&view).y, 136.0);
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paints_background_fade_text_then_toggle() {
        let f = fixture(Default::default());
        let list = paint(&f.view, FRAME);
        let kinds: Vec<&str> = list
            .items()
            .iter()
            .map(|i| match (&i.cmd, i.cmd.paint()) {
                (DrawCmd::Text(_), _) => "text",
                (DrawCmd::RoundedRect(_), _) => "rounded",
                (_, Some(readmore_engine::paint::Paint::LinearGradient(_))) => "gradient",
                _ => "rect",
            })
            .collect();
        // background, fade, content block (clipped), toggle label.
        assert_eq!(kinds, vec!["rect", "gradient", "rect", "text"]);
        assert_eq!(list.items()[2].clip_rect, Some(FRAME));
    }

    #[test]
    fn expanded_view_hides_fade() {
        let mut f = fixture(Default::default());
        let _ = f.view.on_toggle_pressed();
        run_to_end(&mut f.view);
        let list = paint(&f.view, FRAME.with_height(300.0));
        assert!(list.items().iter().all(|i| !matches!(
            i.cmd.paint(),
            Some(readmore_engine::paint::Paint::LinearGradient(_))
        )));
    }

    // ── events ────────────────────────────────────────────────────────────

    fn send(view: &mut ExpandableTextView, event: UiEvent) -> EventResult {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        view.on_event(&event, FRAME, &ctx)
    }

    #[test]
    fn click_on_toggle_expands() {
        let mut f = fixture(Default::default());
        // Bottom-right corner is inside the toggle.
        let r = send(&mut f.view, UiEvent::Click { pos: Vec2::new(199.0, 59.0) });
        assert!(r.is_consumed());
        assert!(f.view.is_animating());

        let _ = send(&mut f.view, UiEvent::Tick { dt: 1.0 });
        assert!(f.view.is_expanded());
        assert_eq!(f.recorder.calls(), vec!["expand"]);
    }

    #[test]
    fn click_outside_toggle_does_nothing() {
        let mut f = fixture(Default::default());
        let r = send(&mut f.view, UiEvent::Click { pos: Vec2::new(1.0, 1.0) });
        assert_eq!(r, EventResult::Ignored);
        assert!(!f.view.is_animating());
    }

    #[test]
    fn toggle_is_not_wired_before_load() {
        let mut view = ExpandableTextView::new(Block(300.0), Default::default())
            .toggle_control(toggle())
            .trimmed_constraint(SizeConstraint::fixed(60.0, LayoutPriority::HIGH))
            .extended_constraint(SizeConstraint::content(LayoutPriority::LOW));
        let _ = send(&mut view, UiEvent::Click { pos: Vec2::new(199.0, 59.0) });
        assert!(!view.is_animating());
    }

    #[test]
    fn wheel_does_not_scroll_after_load() {
        let mut f = fixture(Default::default());
        let r = send(&mut f.view, UiEvent::ScrollWheel { delta: 2.0 });
        assert_eq!(r, EventResult::Ignored);
    }

    // ── hosted in a scene ─────────────────────────────────────────────────

    /// Root that forwards to a view the test keeps a handle on.
    struct Hosted(Rc<RefCell<ExpandableTextView>>);

    impl Widget for Hosted {
        fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
            self.0.borrow().measure(constraints, ctx)
        }
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            self.0.borrow().paint(painter, rect);
        }
        fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
            self.0.borrow_mut().on_event(event, rect, ctx)
        }
    }

    /// Runs one frame and returns the drawn view height.
    fn run_frame(scene: &mut UiScene, root: &mut Element, click: Option<Vec2>, dt: f32) -> f32 {
        let input = UiInput {
            mouse_pos: click.unwrap_or(Vec2::new(-1.0, -1.0)),
            mouse_clicked: click.is_some(),
            dt,
            ..Default::default()
        };
        let list = scene.frame_ref(root, Vec2::new(200.0, 1000.0), &input);
        match &list.items()[0].cmd {
            DrawCmd::Rect(r) => r.rect.max().y,
            other => panic!("expected background rect first, got {other:?}"),
        }
    }

    #[test]
    fn toggle_clicks_expand_then_collapse_across_resize() {
        let f = fixture(Default::default());
        let view = Rc::new(RefCell::new(f.view));
        let mut root: Element = Hosted(Rc::clone(&view)).into();
        let mut scene = UiScene::new();

        assert_eq!(run_frame(&mut scene, &mut root, None, 0.0), 60.0);

        // Toggle sits in the bottom-right corner of the trimmed view.
        let _ = run_frame(&mut scene, &mut root, Some(Vec2::new(199.0, 59.0)), 0.016);
        assert!(view.borrow().is_animating());
        let _ = run_frame(&mut scene, &mut root, None, 1.0);
        assert!(view.borrow().is_expanded());

        let height = run_frame(&mut scene, &mut root, None, 0.0);
        assert_eq!(height, 300.0);

        // The toggle moved with the resized view.
        let _ = run_frame(&mut scene, &mut root, Some(Vec2::new(199.0, height - 1.0)), 0.016);
        assert!(view.borrow().is_animating());
        let _ = run_frame(&mut scene, &mut root, None, 1.0);

        assert_eq!(f.trimmed.priority(), LayoutPriority(750));
        assert_eq!(f.extended.priority(), LayoutPriority(250));
        assert!(!view.borrow().is_expanded());
        assert_eq!(f.recorder.calls(), vec!["expand", "collapse"]);
        assert_eq!(run_frame(&mut scene, &mut root, None, 0.0), 60.0);
    }

    #[test]
    fn click_at_stale_trimmed_position_misses_expanded_toggle() {
        let f = fixture(Default::default());
        let view = Rc::new(RefCell::new(f.view));
        let mut root: Element = Hosted(Rc::clone(&view)).into();
        let mut scene = UiScene::new();

        let _ = run_frame(&mut scene, &mut root, Some(Vec2::new(199.0, 59.0)), 1.0);
        assert!(view.borrow().is_expanded());

        // Same point as before, but the view is now 300 tall.
        let _ = run_frame(&mut scene, &mut root, Some(Vec2::new(199.0, 59.0)), 0.016);
        assert!(!view.borrow().is_animating());
        assert_eq!(f.recorder.calls(), vec!["expand"]);
    }
}
