use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Maps a unit-space point (`0..1` on both axes) into this rectangle.
    ///
    /// `(0, 0)` is the top-left corner, `(1, 1)` the bottom-right. Values
    /// outside the unit square extrapolate past the edges.
    #[inline]
    pub fn point_at(self, unit: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * unit.x,
            self.origin.y + self.size.y * unit.y,
        )
    }

    /// Same origin and width, different height.
    #[inline]
    #[must_use]
    pub fn with_height(self, h: f32) -> Self {
        Self::new(self.origin.x, self.origin.y, self.size.x, h)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (mut x, mut w) = (self.origin.x, self.size.x);
        let (mut y, mut h) = (self.origin.y, self.size.y);

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = a.max().x.min(b.max().x);
        let y1 = a.max().y.min(b.max().y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── point_at ──────────────────────────────────────────────────────────

    #[test]
    fn point_at_maps_unit_corners() {
        let rect = r(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.point_at(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 20.0));
        assert_eq!(rect.point_at(Vec2::new(1.0, 1.0)), Vec2::new(110.0, 70.0));
    }

    #[test]
    fn point_at_maps_top_center() {
        let rect = r(0.0, 0.0, 200.0, 80.0);
        assert_eq!(rect.point_at(Vec2::new(0.5, 0.0)), Vec2::new(100.0, 0.0));
        assert_eq!(rect.point_at(Vec2::new(0.5, 1.0)), Vec2::new(100.0, 80.0));
    }

    // ── normalized / contains ─────────────────────────────────────────────

    #[test]
    fn normalized_negative_height() {
        let n = r(0.0, 10.0, 5.0, -3.0).normalized();
        assert_eq!(n.origin.y, 7.0);
        assert_eq!(n.size.y, 3.0);
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0)).unwrap();
        assert_eq!(i, r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn with_height_keeps_origin_and_width() {
        let rect = r(3.0, 4.0, 50.0, 10.0).with_height(90.0);
        assert_eq!(rect, r(3.0, 4.0, 50.0, 90.0));
    }
}
