//! Game configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock portrait game. Partial files override only what they
//! name.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::window::WindowConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Sections ─────────────────────────────────────────────────────────────────

/// Virtual joystick and jump button placement and tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Joystick base, measured from the bottom-left corner (x right, y up).
    pub joystick_offset: [f32; 2],
    pub joystick_radius: f32,
    /// Drawn knob radius; purely visual.
    pub knob_radius: f32,
    /// `|delta.x|` below this counts as no movement and no haptic feedback.
    pub deadzone: f32,
    pub joystick_haptic_ms: u32,
    /// Minimum seconds between two joystick haptic pulses.
    pub joystick_haptic_cooldown: f32,
    /// Jump button center, measured from the bottom-right corner (x left, y up).
    pub jump_offset: [f32; 2],
    pub jump_radius: f32,
    /// Jumps allowed before the player must touch ground again.
    pub max_jumps: u32,
    pub jump_haptic_ms: u32,
    /// Let the left mouse button act as a finger.
    pub mouse_emulates_touch: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            joystick_offset: [120.0, 120.0],
            joystick_radius: 60.0,
            knob_radius: 25.0,
            deadzone: 0.1,
            joystick_haptic_ms: 12,
            joystick_haptic_cooldown: 1.0,
            jump_offset: [120.0, 120.0],
            jump_radius: 40.0,
            max_jumps: 2,
            jump_haptic_ms: 25,
            mouse_emulates_touch: true,
        }
    }
}

impl ControlsConfig {
    pub fn joystick_center(&self, screen_h: f32) -> Vec2 {
        Vec2::new(self.joystick_offset[0], screen_h - self.joystick_offset[1])
    }

    pub fn jump_center(&self, screen_w: f32, screen_h: f32) -> Vec2 {
        Vec2::new(screen_w - self.jump_offset[0], screen_h - self.jump_offset[1])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Buffer capacity including the terminator slot; the draft holds at
    /// most `capacity - 1` characters.
    pub capacity: usize,
    /// How long a sent message stays above the player, in seconds.
    pub bubble_seconds: f32,
    /// Backspace hold time before continuous deletion starts, in seconds.
    pub backspace_repeat_delay: f32,
    /// Also accept text from raw key codes. Only for soft keyboards that
    /// never produce characters; with a physical keyboard it doubles input.
    pub keycode_fallback: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            capacity: 128,
            bubble_seconds: 5.0,
            backspace_repeat_delay: 0.5,
            keycode_fallback: false,
        }
    }
}

/// Player physics, all in logical pixels and seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Vertical velocity set by a jump impulse (negative is up).
    pub jump_velocity: f32,
    /// Horizontal speed at full joystick deflection.
    pub move_speed: f32,
    pub ground_y: f32,
    pub world_width: f32,
    pub spawn_x: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6 * 3600.0,
            jump_velocity: -12.0 * 60.0,
            move_speed: 5.5 * 60.0,
            ground_y: 520.0,
            world_width: 4000.0,
            spawn_x: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayNightConfig {
    pub day_ambient: f32,
    pub night_ambient: f32,
    /// Width of the dusk band centered on the middle of the world.
    pub transition_width: f32,
}

impl Default for DayNightConfig {
    fn default() -> Self {
        Self { day_ambient: 0.40, night_ambient: 0.75, transition_width: 600.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SoftKeyboardKind {
    #[default]
    WindowIme,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HapticsKind {
    #[default]
    Log,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub soft_keyboard: SoftKeyboardKind,
    pub haptics: HapticsKind,
}

// ── GameConfig ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub window: WindowConfig,
    pub controls: ControlsConfig,
    pub chat: ChatConfig,
    pub physics: PhysicsConfig,
    pub daynight: DayNightConfig,
    pub platform: PlatformConfig,
    /// Fixed simulation rate in updates per second.
    pub target_ups: u32,
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "U-MG (Portrait)".into(),
            window: WindowConfig::default(),
            controls: ControlsConfig::default(),
            chat: ChatConfig::default(),
            physics: PhysicsConfig::default(),
            daynight: DayNightConfig::default(),
            platform: PlatformConfig::default(),
            target_ups: 60,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.to_string()))
        };

        if self.window.logical_width == 0 || self.window.logical_height == 0 {
            return invalid("window.logical_width and window.logical_height must be > 0");
        }
        if self.target_ups == 0 {
            return invalid("target_ups must be > 0");
        }
        if self.controls.joystick_radius <= 0.0 || self.controls.jump_radius <= 0.0 {
            return invalid("controls.joystick_radius and controls.jump_radius must be > 0");
        }
        if !(0.0..1.0).contains(&self.controls.deadzone) {
            return invalid("controls.deadzone must be in [0, 1)");
        }
        if self.chat.capacity < 2 {
            return invalid("chat.capacity must be >= 2");
        }
        if self.chat.bubble_seconds <= 0.0 {
            return invalid("chat.bubble_seconds must be > 0");
        }
        if self.chat.backspace_repeat_delay < 0.0 {
            return invalid("chat.backspace_repeat_delay must be >= 0");
        }
        if self.physics.gravity <= 0.0 {
            return invalid("physics.gravity must be > 0");
        }
        if self.physics.jump_velocity >= 0.0 {
            return invalid("physics.jump_velocity must be < 0 (negative is up)");
        }
        if self.physics.world_width < self.window.logical_width as f32 {
            return invalid("physics.world_width must be at least the logical screen width");
        }
        Ok(())
    }

    pub fn screen_size(&self) -> (f32, f32) {
        (self.window.logical_width as f32, self.window.logical_height as f32)
    }
}
