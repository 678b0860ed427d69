// ── Immediate-mode shape list ────────────────────────────────────────────────

pub mod font;
pub mod hud;

use glam::Vec2;

use crate::engine::Color;
use crate::geometry::Rect;
use crate::renderer::shape_pipeline::ShapeVertex;

/// Segments used to approximate a full circle.
pub const CIRCLE_SEGMENTS: usize = 32;

/// How a batch is composited onto what is already drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Blend {
    #[default]
    Alpha,
    Additive,
    Multiply,
}

/// Consecutive triangles sharing one blend mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawBatch {
    pub blend: Blend,
    pub vertices: Vec<ShapeVertex>,
}

/// Per-frame list of colored triangles in logical screen coordinates.
///
/// Plain CPU data with no GPU state, so everything a frame draws can be
/// inspected in tests. Draw order is preserved: switching blend mode starts
/// a new batch rather than reordering.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    batches: Vec<DrawBatch>,
    blend: Blend,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.batches.clear();
        self.blend = Blend::Alpha;
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    pub fn blend(&self) -> Blend {
        self.blend
    }

    /// Blend mode for everything drawn until the next call.
    pub fn set_blend(&mut self, blend: Blend) {
        self.blend = blend;
    }

    /// Run `draw` with `blend` active, then restore the previous mode.
    pub fn with_blend(&mut self, blend: Blend, draw: impl FnOnce(&mut Self)) {
        let previous = self.blend;
        self.blend = blend;
        draw(self);
        self.blend = previous;
    }

    fn current(&mut self) -> &mut Vec<ShapeVertex> {
        let needs_new = self.batches.last().is_none_or(|b| b.blend != self.blend);
        if needs_new {
            self.batches.push(DrawBatch { blend: self.blend, vertices: Vec::new() });
        }
        let last = self.batches.len() - 1;
        &mut self.batches[last].vertices
    }

    // ── Primitives ─────────────────────────────────────────────────────────

    pub fn triangle_colored(&mut self, a: Vec2, b: Vec2, c: Vec2, colors: [Color; 3]) {
        let out = self.current();
        out.push(ShapeVertex::new(a.into(), colors[0].0));
        out.push(ShapeVertex::new(b.into(), colors[1].0));
        out.push(ShapeVertex::new(c.into(), colors[2].0));
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.triangle_colored(a, b, c, [color; 3]);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let tl = Vec2::new(rect.x, rect.y);
        let tr = Vec2::new(rect.right(), rect.y);
        let bl = Vec2::new(rect.x, rect.bottom());
        let br = Vec2::new(rect.right(), rect.bottom());
        self.triangle(tl, tr, br, color);
        self.triangle(tl, br, bl, color);
    }

    /// Outline drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        let t = thickness.min(rect.w * 0.5).min(rect.h * 0.5);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y + t, t, rect.h - 2.0 * t), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y + t, t, rect.h - 2.0 * t), color);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.radial_gradient(center, radius, color, color);
    }

    /// Disc whose color fades from `inner` at the center to `outer` at the rim.
    pub fn radial_gradient(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color) {
        if radius <= 0.0 {
            return;
        }
        let step = std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
        for i in 0..CIRCLE_SEGMENTS {
            let a0 = i as f32 * step;
            let a1 = a0 + step;
            let p0 = center + Vec2::new(a0.cos(), a0.sin()) * radius;
            let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radius;
            self.triangle_colored(center, p0, p1, [inner, outer, outer]);
        }
    }

    /// Straight segment from `a` to `b` as a quad `thickness` wide.
    pub fn line(&mut self, a: Vec2, b: Vec2, thickness: f32, color: Color) {
        let dir = b - a;
        if dir.length_squared() == 0.0 {
            return;
        }
        let n = dir.normalize().perp() * (thickness * 0.5);
        self.triangle(a + n, b + n, b - n, color);
        self.triangle(a + n, b - n, a - n, color);
    }

    // ── Text ───────────────────────────────────────────────────────────────

    /// Draw `text` with its top-left corner at `pos`, one quad per lit
    /// font pixel.
    pub fn text(&mut self, pos: Vec2, text: &str, scale: f32, color: Color) {
        let mut x = pos.x;
        for ch in text.chars() {
            for row in 0..font::GLYPH_H {
                for col in 0..font::GLYPH_W {
                    if font::pixel(ch, col, row) {
                        self.fill_rect(
                            Rect::new(x + col as f32 * scale, pos.y + row as f32 * scale, scale, scale),
                            color,
                        );
                    }
                }
            }
            x += font::ADVANCE as f32 * scale;
        }
    }

    /// Size `text` would occupy at `scale`.
    pub fn measure_text(text: &str, scale: f32) -> Vec2 {
        let (w, h) = font::measure(text, scale);
        Vec2::new(w, h)
    }

    /// Draw `text` centered on `center`.
    pub fn text_centered(&mut self, center: Vec2, text: &str, scale: f32, color: Color) {
        let size = Self::measure_text(text, scale);
        self.text(center - size * 0.5, text, scale, color);
    }
}
