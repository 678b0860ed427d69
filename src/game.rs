use glam::Vec2;
use tracing::info;

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::controls::{ControlOutput, InputArbiter};
use crate::engine::{Color, Engine, Game};
use crate::geometry::Rect;
use crate::ui::hud;
use crate::world::{DayNight, Player, Scenery};

/// Depth of the dirt band drawn under the ground line.
const GROUND_DEPTH: f32 = 200.0;
/// The feet sit this far below the hip.
const FOOT_OFFSET: f32 = 24.0;

/// Portrait side-scroller: walk with the stick, double-jump with the
/// button, chat through the row at the bottom.
pub struct Platformer {
    pub controls: InputArbiter,
    pub player: Player,
    pub camera: Camera,
    pub daynight: DayNight,
    pub scenery: Scenery,
    last_output: ControlOutput,
    screen_w: f32,
    screen_h: f32,
}

impl Platformer {
    pub fn new(config: &GameConfig) -> Self {
        let (w, h) = config.screen_size();
        let physics = &config.physics;
        let mut camera = Camera::new(w, physics.world_width);
        camera.follow(physics.spawn_x);
        Self {
            controls: InputArbiter::from_config(&config.controls, &config.chat, w, h),
            player: Player::new(physics.spawn_x, physics.ground_y),
            camera,
            daynight: DayNight::new(config.daynight.clone(), physics.world_width),
            scenery: Scenery::new(w),
            last_output: ControlOutput::default(),
            screen_w: w,
            screen_h: h,
        }
    }

    /// Controls requested by the most recent update.
    pub fn last_output(&self) -> ControlOutput {
        self.last_output
    }
}

impl Game for Platformer {
    fn on_enter(&mut self, engine: &mut Engine) {
        info!(
            width = self.screen_w,
            height = self.screen_h,
            world = engine.config.physics.world_width,
            "platformer ready"
        );
    }

    fn update(&mut self, engine: &mut Engine) {
        let dt = engine.dt();
        let frame = engine.input.touches.clone();
        let output = self
            .controls
            .step(&frame, &mut engine.input, dt, &mut engine.platform);

        if self.player.update(dt, &output, &engine.config.physics) {
            self.controls.land();
        }
        self.camera.follow(self.player.position.x);
        self.daynight.update(self.player.position.x);
        self.scenery.update(dt, engine.time() as f32);
        self.last_output = output;
    }

    fn render(&mut self, engine: &mut Engine) {
        let (w, h) = (self.screen_w, self.screen_h);
        let time = engine.time();
        let t = time as f32;
        let physics = &engine.config.physics;
        let knob_radius = engine.config.controls.knob_radius;
        let list = &mut engine.draw;

        list.fill_rect(Rect::new(0.0, 0.0, w, h), Color::SKY_BLUE);
        self.scenery.draw_parallax(list, self.camera.x);
        self.scenery.draw_birds(list, self.daynight.day(), t);

        list.fill_rect(
            Rect::new(-self.camera.x, physics.ground_y + FOOT_OFFSET, physics.world_width, GROUND_DEPTH),
            Color::DARK_BROWN,
        );
        let player_screen = self.camera.world_to_screen(self.player.position);
        self.player.draw(list, player_screen);

        self.daynight.draw_overlay(list, w, h);
        self.scenery.draw_stars(list, self.daynight.night(), t);
        self.daynight.draw_lights(list, w, h);

        hud::draw_joystick(list, &self.controls.joystick, knob_radius);
        hud::draw_jump_button(list, &self.controls.jump);

        let chat = &self.controls.chat;
        if let Some(anchor) = chat.bubble_anchor(self.player.position, self.camera.x) {
            hud::draw_bubble(list, chat.sent(), anchor);
        }
        hud::draw_chat(list, &chat.view(time));

        if engine.config.debug {
            let line = format!(
                "X {:.0} JUMPS {}/{}",
                self.player.position.x,
                self.controls.jump.charges_used(),
                self.controls.jump.max_jumps()
            );
            list.text(Vec2::new(8.0, 8.0), &line, 2.0, Color::WHITE);
        }
    }
}
