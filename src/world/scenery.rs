use glam::Vec2;

use crate::engine::Color;
use crate::ui::{Blend, DrawList};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub phase: f32,
    pub speed: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    /// Pixels per second.
    pub speed: f32,
    pub phase: f32,
}

const fn star(x: f32, y: f32, phase: f32, speed: f32) -> Star {
    Star { pos: Vec2::new(x, y), phase, speed }
}

const fn bird(x: f32, y: f32, speed: f32, phase: f32) -> Bird {
    Bird { x, y, speed: speed * 60.0, phase }
}

pub const STARS: [Star; 18] = [
    star(40.0, 60.0, 0.0, 1.2), star(120.0, 90.0, 1.1, 0.9), star(200.0, 50.0, 2.3, 1.4),
    star(280.0, 110.0, 0.7, 1.0), star(360.0, 70.0, 2.9, 0.8), star(430.0, 100.0, 1.6, 1.3),
    star(90.0, 160.0, 2.1, 0.7), star(170.0, 140.0, 0.4, 1.1), star(260.0, 180.0, 1.8, 0.9),
    star(350.0, 150.0, 2.6, 1.2), star(420.0, 200.0, 0.9, 0.8),
    star(60.0, 240.0, 1.5, 1.0), star(140.0, 260.0, 2.8, 0.7), star(220.0, 230.0, 0.2, 1.4),
    star(310.0, 270.0, 1.9, 0.9), star(390.0, 250.0, 0.6, 1.1), star(450.0, 300.0, 2.4, 0.8),
    star(300.0, 60.0, 1.3, 1.0),
];

pub const BIRDS: [Bird; 6] = [
    bird(-60.0, 120.0, 0.9, 0.0),
    bird(-220.0, 160.0, 0.7, 1.2),
    bird(-140.0, 95.0, 1.1, 2.1),
    bird(-360.0, 140.0, 0.8, 0.6),
    bird(-520.0, 110.0, 1.0, 2.7),
    bird(-680.0, 150.0, 0.75, 1.8),
];

/// Birds re-enter from here after leaving the right edge.
pub const BIRD_RESPAWN_X: f32 = -100.0;
pub const BIRD_EXIT_MARGIN: f32 = 80.0;

const MOUNTAINS: Color = Color([0.44, 0.12, 0.49, 1.0]);
const HILLS: Color = Color([0.0, 0.32, 0.67, 1.0]);

/// Decorative sky: twinkling stars at night, birds by day, and two
/// parallax ridges. Nothing here affects gameplay.
#[derive(Clone, Debug)]
pub struct Scenery {
    pub stars: Vec<Star>,
    pub birds: Vec<Bird>,
    screen_w: f32,
}

impl Scenery {
    pub fn new(screen_w: f32) -> Self {
        Self { stars: STARS.to_vec(), birds: BIRDS.to_vec(), screen_w }
    }

    /// Move the birds; `time` is seconds since start.
    pub fn update(&mut self, dt: f32, time: f32) {
        for bird in &mut self.birds {
            bird.x += bird.speed * dt;
            bird.y += (time * 1.2 + bird.phase).sin() * 18.0 * dt;
            if bird.x > self.screen_w + BIRD_EXIT_MARGIN {
                bird.x = BIRD_RESPAWN_X;
            }
        }
    }

    /// Star brightness at `time` for a night fraction of `night`.
    pub fn star_alpha(star: &Star, night: f32, time: f32) -> f32 {
        let twinkle = 0.6 + 0.4 * (time * star.speed + star.phase).sin();
        night * twinkle
    }

    pub fn draw_parallax(&self, list: &mut DrawList, camera_x: f32) {
        let far_x = -camera_x * 0.2;
        for i in -1..12 {
            let x = far_x + i as f32 * 400.0;
            list.triangle(
                Vec2::new(x + 200.0, 240.0),
                Vec2::new(x, 400.0),
                Vec2::new(x + 400.0, 400.0),
                MOUNTAINS,
            );
        }

        let mid_x = -camera_x * 0.4;
        for i in -1..16 {
            list.fill_circle(Vec2::new(mid_x + i as f32 * 260.0, 420.0), 160.0, HILLS);
        }
    }

    pub fn draw_birds(&self, list: &mut DrawList, day: f32, time: f32) {
        if day <= 0.01 {
            return;
        }
        let color = Color::BLACK.fade(day * 0.8);
        for bird in &self.birds {
            let flap = 1.0 + (time * 6.0 + bird.phase).sin();
            let tip = Vec2::new(bird.x + 6.0, bird.y + flap);
            list.line(Vec2::new(bird.x, bird.y), tip, 1.0, color);
            list.line(tip, Vec2::new(bird.x + 12.0, bird.y), 1.0, color);
        }
    }

    pub fn draw_stars(&self, list: &mut DrawList, night: f32, time: f32) {
        if night <= 0.01 {
            return;
        }
        list.with_blend(Blend::Additive, |list| {
            for star in &self.stars {
                list.fill_circle(star.pos, 2.0, Color::WHITE.fade(Self::star_alpha(star, night, time)));
            }
        });
    }
}
