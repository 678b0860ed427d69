use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::controls::ControlOutput;
use crate::engine::Color;
use crate::geometry::Rect;
use crate::ui::DrawList;

const SHIRT: Color = Color::GREEN;
const PANTS: Color = Color::DARK_GREEN;
const SKIN: Color = Color::BEIGE;

/// The stick figure the controls drive. `position` is the hip, in world
/// coordinates; standing means `position.y == ground_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub velocity_y: f32,
    grounded: bool,
    /// +1 facing right, -1 facing left.
    facing: f32,
    /// `|move_x|` of the last step, drives the walk animation speed.
    speed: f32,
    walk_phase: f32,
}

impl Player {
    pub fn new(spawn_x: f32, ground_y: f32) -> Self {
        Self {
            position: Vec2::new(spawn_x, ground_y),
            velocity_y: 0.0,
            grounded: true,
            facing: 1.0,
            speed: 0.0,
            walk_phase: 0.0,
        }
    }

    pub fn is_grounded(&self) -> bool { self.grounded }
    pub fn facing(&self) -> f32 { self.facing }
    pub fn speed(&self) -> f32 { self.speed }
    pub fn walk_phase(&self) -> f32 { self.walk_phase }

    /// Advance one fixed step. Returns true while the player stands on the
    /// ground after the step.
    pub fn update(&mut self, dt: f32, control: &ControlOutput, physics: &PhysicsConfig) -> bool {
        self.speed = control.move_x.abs();
        if control.move_x != 0.0 {
            self.position.x += control.move_x * physics.move_speed * dt;
            self.facing = if control.move_x >= 0.0 { 1.0 } else { -1.0 };
        }
        self.walk_phase += dt * 8.0 * self.speed.clamp(0.0, 1.0);

        if control.jump {
            self.velocity_y = physics.jump_velocity;
            self.grounded = false;
        }

        self.velocity_y += physics.gravity * dt;
        self.position.y += self.velocity_y * dt;

        if self.position.y >= physics.ground_y {
            self.position.y = physics.ground_y;
            self.velocity_y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        self.position.x = self.position.x.clamp(0.0, physics.world_width);
        self.grounded
    }

    /// Draw at screen position `pos` (the hip).
    pub fn draw(&self, list: &mut DrawList, pos: Vec2) {
        let f = self.facing;
        let leg_swing = self.walk_phase.sin() * 8.0;
        let arm_swing = (self.walk_phase + std::f32::consts::PI).sin() * 6.0;

        let hip = pos;
        let torso = Vec2::new(pos.x, pos.y - 10.0);
        let head = Vec2::new(pos.x, pos.y - 36.0);

        list.line(hip, Vec2::new(hip.x + f * 6.0 + leg_swing * f, hip.y + 22.0), 4.0, PANTS);
        list.line(hip, Vec2::new(hip.x - f * 6.0 - leg_swing * f, hip.y + 22.0), 4.0, PANTS);

        list.fill_rect(Rect::new(torso.x - 9.0, torso.y - 14.0, 18.0, 28.0), SHIRT);

        list.line(
            Vec2::new(torso.x + f * 9.0, torso.y - 6.0),
            Vec2::new(torso.x + f * (15.0 + arm_swing), torso.y + 6.0),
            3.0,
            SHIRT,
        );
        list.line(
            Vec2::new(torso.x - f * 9.0, torso.y - 6.0),
            Vec2::new(torso.x - f * (15.0 + arm_swing), torso.y + 6.0),
            3.0,
            SHIRT,
        );

        list.fill_circle(head, 10.0, SKIN);
        list.fill_circle(Vec2::new(head.x + f * 10.0, head.y), 3.0, Color::ORANGE);
        list.fill_circle(Vec2::new(head.x + f * 4.0, head.y - 2.0), 1.5, Color::BLACK);
    }
}
