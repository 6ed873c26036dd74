use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]. Colors outside the first/last stop pad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors, ordered by `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Evenly spaced stops over `colors`, first at `t = 0`, last at `t = 1`.
    pub fn evenly_spaced(start: Vec2, end: Vec2, colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, c)| ColorStop::new(i as f32 / last, *c))
            .collect();
        Self::new(start, end, stops)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Same geometry, every stop scaled by `opacity`.
    #[must_use]
    pub fn with_opacity(&self, opacity: f32) -> Self {
        Self {
            start: self.start,
            end: self.end,
            stops: self
                .stops
                .iter()
                .map(|s| ColorStop::new(s.t, s.color.with_opacity(opacity)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_two_colors_hit_both_ends() {
        let g = LinearGradient::evenly_spaced(
            Vec2::zero(),
            Vec2::new(0.0, 10.0),
            &[Color::transparent(), Color::white()],
        );
        assert_eq!(g.stops, vec![
            ColorStop::new(0.0, Color::transparent()),
            ColorStop::new(1.0, Color::white()),
        ]);
        assert!(g.is_valid());
    }

    #[test]
    fn degenerate_direction_is_invalid() {
        let g = LinearGradient::evenly_spaced(
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 5.0),
            &[Color::transparent(), Color::white()],
        );
        assert!(!g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = LinearGradient::evenly_spaced(Vec2::zero(), Vec2::new(1.0, 1.0), &[Color::white()]);
        assert!(!g.is_valid());
    }

    #[test]
    fn with_opacity_scales_stops_only() {
        let g = LinearGradient::evenly_spaced(
            Vec2::zero(),
            Vec2::new(0.0, 10.0),
            &[Color::transparent(), Color::white()],
        )
        .with_opacity(0.5);
        assert_eq!(g.end, Vec2::new(0.0, 10.0));
        assert_eq!(g.stops[1].color.a, 0.5);
    }
}
