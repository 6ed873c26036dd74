use std::cell::{Cell, RefCell};

use readmore_engine::coords::{Rect, Vec2};
use readmore_engine::paint::{Color, ColorStop, LinearGradient, Paint};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Declarative settings for a [`GradientOverlay`].
///
/// Points are in unit space: `(0, 0)` is the top-left of the overlay,
/// `(1, 1)` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientOverlayConfig {
    /// Color at the start point. Default: transparent.
    pub top_color: Color,
    /// Color at the end point. Default: black at 60% alpha.
    pub bottom_color: Color,
    /// Default: top center `(0.5, 0.0)`.
    pub start_point: Vec2,
    /// Default: bottom center `(0.5, 1.0)`.
    pub end_point: Vec2,
}

impl Default for GradientOverlayConfig {
    fn default() -> Self {
        Self {
            top_color: Color::transparent(),
            bottom_color: Color::gray(0.0, 0.6),
            start_point: Vec2::new(0.5, 0.0),
            end_point: Vec2::new(0.5, 1.0),
        }
    }
}

/// The rendering primitive behind a [`GradientOverlay`].
///
/// Holds what a renderer needs: stops, direction, and the rect to fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientLayer {
    pub stops: Vec<ColorStop>,
    pub start_point: Vec2,
    pub end_point: Vec2,
    pub bounds: Rect,
    /// Set once the layer has been configured and added to its view.
    pub attached: bool,
}

impl GradientLayer {
    /// The layer as a fill over its bounds, or `None` if it cannot draw.
    pub fn to_paint(&self) -> Option<Paint> {
        if !self.attached || self.bounds.is_empty() {
            return None;
        }
        let gradient = LinearGradient::new(
            self.bounds.point_at(self.start_point),
            self.bounds.point_at(self.end_point),
            self.stops.clone(),
        );
        gradient.is_valid().then_some(Paint::LinearGradient(gradient))
    }
}

/// A view that paints a two-stop linear gradient across its bounds.
///
/// Call [`configure`](Self::configure) once the config is final; after that
/// every layout pass keeps the layer sized to the view.
///
/// # Example
/// ```rust,ignore
/// let overlay = GradientOverlay::new(GradientOverlayConfig {
///     bottom_color: Color::white(),
///     ..Default::default()
/// });
/// overlay.configure();
/// ```
#[derive(Debug)]
pub struct GradientOverlay {
    config: GradientOverlayConfig,
    bounds: Cell<Rect>,
    layer: RefCell<GradientLayer>,
    alpha: f32,
}

impl GradientOverlay {
    pub fn new(config: GradientOverlayConfig) -> Self {
        Self::with_frame(Rect::default(), config)
    }

    /// Overlay that starts out sized to `frame`.
    pub fn with_frame(frame: Rect, config: GradientOverlayConfig) -> Self {
        Self {
            config,
            bounds: Cell::new(frame),
            layer: RefCell::new(GradientLayer::default()),
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn config(&self) -> &GradientOverlayConfig {
        &self.config
    }

    /// Replace the config. Takes effect on the next [`configure`](Self::configure).
    pub fn set_config(&mut self, config: GradientOverlayConfig) {
        self.config = config;
    }

    /// Ordered stops `[top_color, bottom_color]` at `t = 0` and `t = 1`.
    pub fn color_stops(&self) -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, self.config.top_color),
            ColorStop::new(1.0, self.config.bottom_color),
        ]
    }

    /// Apply the current config to the layer and attach it.
    ///
    /// Safe to call again: every field is re-derived from the config and the
    /// current bounds.
    pub fn configure(&self) {
        let mut layer = self.layer.borrow_mut();
        layer.stops = self.color_stops();
        layer.start_point = self.config.start_point;
        layer.end_point = self.config.end_point;
        layer.bounds = self.bounds.get();
        layer.attached = true;
    }

    /// Bounds-change hook. Always resizes the layer, including on the first pass.
    pub fn layout(&self, bounds: Rect) {
        self.bounds.set(bounds);
        self.layer.borrow_mut().bounds = bounds;
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Snapshot of the rendering primitive.
    pub fn layer(&self) -> GradientLayer {
        self.layer.borrow().clone()
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

impl Widget for GradientOverlay {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        // Fills whatever finite space it is given.
        let fill = |max: f32, min: f32| if max.is_finite() { max } else { min };
        Vec2::new(
            fill(constraints.max.x, constraints.min.x),
            fill(constraints.max.y, constraints.min.y),
        )
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.layout(rect);
        let Some(paint) = self.layer.borrow().to_paint() else {
            return;
        };
        painter.push_opacity(self.alpha);
        painter.fill_rect(rect, paint);
        painter.pop_opacity();
    }
}
