//! Capability bridges to the host platform.
//!
//! The input core only ever asks for two things: show/hide the soft keyboard
//! and fire a short vibration. Both are fire-and-forget and may silently do
//! nothing. Which implementation backs them is decided once at startup from
//! [`PlatformConfig`](crate::config::PlatformConfig).

use std::sync::Arc;

use tracing::debug;
use winit::window::Window;

use crate::config::{HapticsKind, PlatformConfig, SoftKeyboardKind};

/// Soft (on-screen) keyboard control.
pub trait SoftKeyboard {
    fn show_soft_input(&mut self);
    fn hide_soft_input(&mut self);
}

/// Vibration motor.
pub trait Haptics {
    fn vibrate(&mut self, duration_ms: u32);
}

/// Does nothing. Used on hosts without a soft keyboard or vibration motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct Noop;

impl SoftKeyboard for Noop {
    fn show_soft_input(&mut self) {}
    fn hide_soft_input(&mut self) {}
}

impl Haptics for Noop {
    fn vibrate(&mut self, _duration_ms: u32) {}
}

/// Raises the soft keyboard by toggling IME input on the window. On mobile
/// targets winit shows/hides the system keyboard in response; on desktop it
/// only enables IME composition.
pub struct WindowIme {
    window: Arc<Window>,
}

impl WindowIme {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl SoftKeyboard for WindowIme {
    fn show_soft_input(&mut self) {
        self.window.set_ime_allowed(true);
    }

    fn hide_soft_input(&mut self) {
        self.window.set_ime_allowed(false);
    }
}

/// Haptics stand-in that only logs each pulse.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn vibrate(&mut self, duration_ms: u32) {
        debug!(duration_ms, "vibrate");
    }
}

/// The pair of bridges handed to the controls every frame.
pub struct Platform {
    pub keyboard: Box<dyn SoftKeyboard>,
    pub haptics: Box<dyn Haptics>,
}

impl Platform {
    /// Both bridges disabled.
    pub fn headless() -> Self {
        Self { keyboard: Box::new(Noop), haptics: Box::new(Noop) }
    }

    pub fn new(keyboard: Box<dyn SoftKeyboard>, haptics: Box<dyn Haptics>) -> Self {
        Self { keyboard, haptics }
    }

    /// Pick bridge implementations from configuration. `window` is `None`
    /// before a window exists; the keyboard then falls back to [`Noop`].
    pub fn from_config(config: &PlatformConfig, window: Option<Arc<Window>>) -> Self {
        let keyboard: Box<dyn SoftKeyboard> = match (config.soft_keyboard, window) {
            (SoftKeyboardKind::WindowIme, Some(w)) => Box::new(WindowIme::new(w)),
            _ => Box::new(Noop),
        };
        let haptics: Box<dyn Haptics> = match config.haptics {
            HapticsKind::Log => Box::new(LogHaptics),
            HapticsKind::None => Box::new(Noop),
        };
        debug!(
            soft_keyboard = ?config.soft_keyboard,
            haptics = ?config.haptics,
            "platform bridges selected"
        );
        Self { keyboard, haptics }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::headless()
    }
}
