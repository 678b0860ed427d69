// =============================================================================
// GEOMETRY.RS: Hit-testing primitives for touch controls
//
// Everything here works in logical (unscaled) game coordinates:
// - Axis-aligned rectangles (chat input box, buttons, bubbles)
// - Circle containment (joystick base, jump button)
// - Radius clamping (joystick knob)
// =============================================================================

use glam::Vec2;

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 { self.x + self.w }

    #[inline]
    pub fn bottom(&self) -> f32 { self.y + self.h }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Point-in-rectangle test with closed bounds on every edge, so a touch
    /// landing exactly on a button's border still counts as a hit.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Returns true if `p` lies inside (or on) the circle at `center` with `radius`.
#[inline]
pub fn circle_contains(center: Vec2, radius: f32, p: Vec2) -> bool {
    center.distance_squared(p) <= radius * radius
}

/// Clamp `offset` so its length never exceeds `radius`.
///
/// Offsets already inside the circle are returned untouched; longer ones
/// keep their direction and land exactly on the rim.
pub fn clamp_to_radius(offset: Vec2, radius: f32) -> Vec2 {
    let len = offset.length();
    if len > radius && len > 0.0 {
        offset * (radius / len)
    } else {
        offset
    }
}

/// Linear interpolation between `a` and `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
