use glam::Vec2;

/// Projection uniform uploaded to the GPU; maps logical pixel coordinates
/// to clip space.
///
/// Layout (column-major, matching WGSL `mat4x4<f32>`):
/// ```text
/// col0: [2/w,  0,   0, 0]
/// col1: [0,   -2/h, 0, 0]
/// col2: [0,    0,   1, 0]
/// col3: [-1,   1,   0, 1]
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Plain orthographic projection: `[0..w] × [0..h]`, y down.
    pub fn ortho(width: f32, height: f32) -> Self {
        let sx = 2.0 / width;
        let sy = -2.0 / height;
        Self {
            view_proj: [
                [sx,   0.0,  0.0, 0.0], // col0
                [0.0,  sy,   0.0, 0.0], // col1
                [0.0,  0.0,  1.0, 0.0], // col2
                [-1.0, 1.0,  0.0, 1.0], // col3
            ],
        }
    }
}

/// Horizontal follow camera for a side-scroller.
///
/// Only `x` scrolls; the world is exactly one screen tall. The player is
/// kept at 40 % of the screen width from the left edge except near the
/// world bounds, where the camera stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// World x of the left screen edge.
    pub x: f32,
    screen_w: f32,
    world_w: f32,
}

impl Camera {
    /// Fraction of the screen width kept to the left of the player.
    pub const LEAD: f32 = 0.4;

    pub fn new(screen_w: f32, world_w: f32) -> Self {
        Self { x: 0.0, screen_w, world_w }
    }

    /// Re-center on `player_x`, clamped to `[0, world_w - screen_w]`.
    pub fn follow(&mut self, player_x: f32) {
        let max_x = (self.world_w - self.screen_w).max(0.0);
        self.x = (player_x - self.screen_w * Self::LEAD).clamp(0.0, max_x);
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x - self.x, world.y)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x + self.x, screen.y)
    }

    /// Parallax offset for a background layer scrolling at `factor` of the
    /// camera speed (0 = fixed to the sky, 1 = moves with the ground).
    pub fn parallax(&self, factor: f32) -> f32 {
        -self.x * factor
    }
}
