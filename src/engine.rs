use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, Ime, KeyEvent, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
pub use winit::keyboard::KeyCode;
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use crate::config::GameConfig;
use crate::input::{FingerId, InputState, TouchTracker, MOUSE_FINGER};
use crate::platform::Platform;
use crate::renderer::{Renderer, RendererError};
use crate::ui::DrawList;
use crate::window::{apply_window_settings, window_attributes, WindowConfig};

/// Longest frame the fixed-step accumulator will catch up on.
pub const MAX_FRAME_TIME: f32 = 0.25;

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const GRAY: Self = Self([0.51, 0.51, 0.51, 1.0]);
    pub const DARK_GRAY: Self = Self([0.31, 0.31, 0.31, 1.0]);
    pub const GREEN: Self = Self([0.0, 0.89, 0.19, 1.0]);
    pub const DARK_GREEN: Self = Self([0.0, 0.46, 0.17, 1.0]);
    pub const DARK_BLUE: Self = Self([0.0, 0.32, 0.67, 1.0]);
    pub const YELLOW: Self = Self([0.99, 0.98, 0.0, 1.0]);
    pub const ORANGE: Self = Self([1.0, 0.63, 0.0, 1.0]);
    pub const BEIGE: Self = Self([0.83, 0.69, 0.51, 1.0]);
    pub const SKY_BLUE: Self = Self([0.4, 0.75, 1.0, 1.0]);
    pub const DARK_BROWN: Self = Self([0.3, 0.25, 0.18, 1.0]);
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);

    /// Same color with its alpha multiplied by `alpha` (clamped to `[0, 1]`).
    pub fn fade(self, alpha: f32) -> Self {
        let [r, g, b, a] = self.0;
        Self([r, g, b, a * alpha.clamp(0.0, 1.0)])
    }
}

// ── Game trait ──────────────────────────────────────────────────────────────

pub trait Game {
    fn on_enter(&mut self, _engine: &mut Engine) {}
    /// One fixed simulation step of `engine.dt()` seconds.
    fn update(&mut self, engine: &mut Engine);
    /// Fill `engine.draw` for the next presented frame.
    fn render(&mut self, engine: &mut Engine);
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Everything a [`Game`] sees. Holds no GPU state, so a game can be driven
/// step by step in tests with a headless platform.
pub struct Engine {
    pub config: GameConfig,
    pub input: InputState,
    pub touch_tracker: TouchTracker,
    pub draw: DrawList,
    pub platform: Platform,
    pub window: WindowConfig,
    dt: f32,
    tick: u64,
    time: f64,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn new(config: GameConfig, platform: Platform) -> Self {
        let window = config.window.clone();
        let dt = 1.0 / config.target_ups.max(1) as f32;
        Self {
            config,
            input: InputState::new(),
            touch_tracker: TouchTracker::new(),
            draw: DrawList::new(),
            platform,
            window,
            dt,
            tick: 0,
            time: 0.0,
        }
    }

    /// No window, no soft keyboard, no vibration.
    pub fn headless(config: GameConfig) -> Self {
        Self::new(config, Platform::headless())
    }

    pub fn dt(&self) -> f32 { self.dt }
    pub fn tick(&self) -> u64 { self.tick }
    /// Simulated seconds since start.
    pub fn time(&self) -> f64 { self.time }

    pub fn screen_size(&self) -> (f32, f32) {
        (self.window.logical_width as f32, self.window.logical_height as f32)
    }

    // ── Raw events ─────────────────────────────────────────────────────────

    /// A platform touch event at physical pixel `(x, y)`.
    pub fn touch(&mut self, phase: TouchPhase, id: u64, x: f64, y: f64) {
        let finger = FingerId(id);
        let pos = self.window.to_logical(x, y);
        match phase {
            TouchPhase::Started => self.touch_tracker.touch_started(finger, pos),
            TouchPhase::Moved => self.touch_tracker.touch_moved(finger, pos),
            TouchPhase::Ended | TouchPhase::Cancelled => self.touch_tracker.touch_ended(finger),
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        let pos = self.window.to_logical(x, y);
        self.input.mouse_pos = pos.into();
        if self.config.controls.mouse_emulates_touch && self.input.is_mouse_held(MouseButton::Left) {
            self.touch_tracker.touch_moved(MOUSE_FINGER, pos);
        }
    }

    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.input.mouse_held.insert(button);
        } else {
            self.input.mouse_held.remove(&button);
        }

        if button == MouseButton::Left && self.config.controls.mouse_emulates_touch {
            if pressed {
                let [x, y] = self.input.mouse_pos;
                self.touch_tracker.touch_started(MOUSE_FINGER, glam::Vec2::new(x, y));
            } else {
                self.touch_tracker.touch_ended(MOUSE_FINGER);
            }
        }
    }

    /// A physical key event; `text` is what the key typed, if anything.
    pub fn key(&mut self, code: KeyCode, pressed: bool, text: Option<&str>) {
        if pressed {
            self.input.press_key(code);
            if let Some(t) = text {
                self.input.type_text(t);
            }
        } else {
            self.input.release_key(code);
        }
    }

    /// Text committed by the IME (the soft keyboard on mobile).
    pub fn ime_commit(&mut self, text: &str) {
        self.input.type_text(text);
    }

    /// Focus lost: every finger, key and button counts as lifted.
    pub fn focus_lost(&mut self) {
        debug!(fingers = self.touch_tracker.active_count(), "focus lost, cancelling input");
        self.touch_tracker.cancel_all();
        self.input.keys_held.clear();
        self.input.mouse_held.clear();
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        self.window.set_physical_size(width, height);
    }

    // ── Stepping ───────────────────────────────────────────────────────────

    /// Run one fixed update of `game`: snapshot touches, update, then drop
    /// this step's edge-triggered input.
    pub fn step(&mut self, game: &mut dyn Game) {
        self.tick += 1;
        self.time += self.dt as f64;
        self.input.touches = self.touch_tracker.snapshot();
        game.update(self);
        self.input.clear_frame_state();
    }

    /// Rebuild the draw list for presentation.
    pub fn render(&mut self, game: &mut dyn Game) {
        self.draw.clear();
        game.render(self);
    }
}

// ── EngineBuilder ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct EngineBuilder {
    config: GameConfig,
}

impl EngineBuilder {
    pub fn with_config(mut self, config: GameConfig) -> Self { self.config = config; self }
    pub fn with_title(mut self, title: &str) -> Self { self.config.title = title.into(); self }
    pub fn with_ups(mut self, ups: u32) -> Self { self.config.target_ups = ups; self }
    pub fn with_debug(mut self, debug: bool) -> Self { self.config.debug = debug; self }

    pub fn run(self, game: impl Game + 'static) -> Result<(), EngineError> {
        let event_loop = EventLoop::new()?;
        let fixed_dt = 1.0 / self.config.target_ups.max(1) as f32;
        info!(title = %self.config.title, ups = self.config.target_ups, "starting");
        let mut app = App {
            engine: Engine::headless(self.config),
            game: Box::new(game),
            renderer: None,
            last_instant: None,
            accumulator: 0.0,
            fixed_dt,
            error: None,
        };
        event_loop.run_app(&mut app)?;
        match app.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    engine: Engine,
    game: Box<dyn Game>,
    renderer: Option<Renderer>,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
    error: Option<EngineError>,
}

impl App {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let config = &self.engine.config;
        let window = Arc::new(event_loop.create_window(window_attributes(&config.title, &config.window))?);
        apply_window_settings(&window, &config.window);

        let size = window.inner_size();
        self.engine.resized(size.width, size.height);
        let (w, h) = self.engine.screen_size();

        let renderer = pollster::block_on(Renderer::new(Arc::clone(&window), w, h))?;
        self.engine.platform = Platform::from_config(&self.engine.config.platform, Some(window));
        self.renderer = Some(renderer);

        self.game.on_enter(&mut self.engine);
        Ok(())
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = match self.last_instant {
            Some(prev) => now.duration_since(prev).as_secs_f32().min(MAX_FRAME_TIME),
            None => self.fixed_dt,
        };
        self.last_instant = Some(now);
        self.accumulator += elapsed;

        while self.accumulator >= self.fixed_dt {
            self.engine.step(self.game.as_mut());
            self.accumulator -= self.fixed_dt;
        }

        self.engine.render(self.game.as_mut());

        let Some(renderer) = self.renderer.as_mut() else { return };
        match renderer.render(&self.engine.draw) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.recover_surface(),
            Err(e) => warn!(error = %e, "render error"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!(error = %e, "startup failed");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let engine = &mut self.engine;

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
                engine.resized(size.width, size.height);
            }

            WindowEvent::Focused(false) => engine.focus_lost(),

            WindowEvent::Touch(touch) => {
                engine.touch(touch.phase, touch.id, touch.location.x, touch.location.y);
            }

            WindowEvent::CursorMoved { position, .. } => engine.cursor_moved(position.x, position.y),

            WindowEvent::MouseInput { button, state, .. } => {
                engine.mouse_button(button, state == ElementState::Pressed);
            }

            WindowEvent::Ime(Ime::Commit(text)) => engine.ime_commit(&text),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ref text,
                        repeat,
                        ..
                    },
                ..
            } => {
                if state == ElementState::Pressed && repeat {
                    // Auto-repeat still types, but is not a fresh press.
                    if let Some(t) = text {
                        engine.ime_commit(t);
                    }
                    return;
                }
                engine.key(code, state == ElementState::Pressed, text.as_deref());
            }

            WindowEvent::RedrawRequested => self.frame(),

            _ => {}
        }
    }
}
