use glam::Vec2;

use crate::config::DayNightConfig;
use crate::engine::Color;
use crate::geometry::{lerp, Rect};
use crate::ui::{Blend, DrawList};

pub const SUN_RADIUS: f32 = 220.0;
pub const MOON_RADIUS: f32 = 160.0;

/// Day turns to night as the player walks across the middle of the world.
#[derive(Clone, Debug)]
pub struct DayNight {
    config: DayNightConfig,
    center: f32,
    t: f32,
}

impl DayNight {
    pub fn new(config: DayNightConfig, world_width: f32) -> Self {
        Self { config, center: world_width * 0.5, t: 0.0 }
    }

    /// Recompute the transition for the player's world x.
    pub fn update(&mut self, player_x: f32) {
        let width = self.config.transition_width.max(f32::EPSILON);
        let start = self.center - width * 0.5;
        self.t = ((player_x - start) / width).clamp(0.0, 1.0);
    }

    /// 0 in full day, 1 in full night.
    pub fn night(&self) -> f32 { self.t }

    pub fn day(&self) -> f32 { 1.0 - self.t }

    /// Opacity of the darkening overlay.
    pub fn ambient(&self) -> f32 {
        lerp(self.config.day_ambient, self.config.night_ambient, self.t)
    }

    /// The sun sinks on the right while the moon rises on the left.
    pub fn sun_position(&self, screen_w: f32, screen_h: f32) -> Vec2 {
        Vec2::new(screen_w - 80.0, lerp(80.0, screen_h + 120.0, self.t))
    }

    pub fn moon_position(&self, screen_h: f32) -> Vec2 {
        Vec2::new(80.0, lerp(screen_h + 120.0, 100.0, self.t))
    }

    pub fn draw_overlay(&self, list: &mut DrawList, screen_w: f32, screen_h: f32) {
        list.with_blend(Blend::Multiply, |list| {
            list.fill_rect(
                Rect::new(0.0, 0.0, screen_w, screen_h),
                Color::BLACK.fade(self.ambient()),
            );
        });
    }

    pub fn draw_lights(&self, list: &mut DrawList, screen_w: f32, screen_h: f32) {
        list.radial_gradient(
            self.sun_position(screen_w, screen_h),
            SUN_RADIUS,
            Color::YELLOW.fade(self.day()),
            Color::TRANSPARENT,
        );
        list.radial_gradient(
            self.moon_position(screen_h),
            MOON_RADIUS,
            Color::WHITE.fade(self.night()),
            Color::TRANSPARENT,
        );
    }
}
