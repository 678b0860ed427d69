use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── WindowMode ────────────────────────────────────────────────────────────────

/// Controls how the OS window is presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Standard decorated window at the configured resolution.
    #[default]
    Windowed,
    /// Exclusive hardware fullscreen at the configured resolution.
    Fullscreen,
    /// Borderless window sized to match the monitor's native resolution.
    Borderless,
}

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// - **physical** dimensions are the actual pixel size of the OS window
///   (accounts for HiDPI scaling and fullscreen mode).
/// - **logical** dimensions are the internal game resolution. Touches,
///   layout and drawing all happen in logical coordinates; the frame is
///   stretched to the physical window when presented.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Actual window width in physical pixels.
    pub physical_width: u32,
    /// Actual window height in physical pixels.
    pub physical_height: u32,
    /// Internal game resolution width.
    pub logical_width: u32,
    /// Internal game resolution height.
    pub logical_height: u32,
    /// Active window mode.
    pub mode: WindowMode,
}

impl Default for WindowConfig {
    /// 480 × 800 portrait, windowed, 1:1 physical to logical.
    fn default() -> Self {
        Self {
            physical_width:  480,
            physical_height: 800,
            logical_width:   480,
            logical_height:  800,
            mode:            WindowMode::Windowed,
        }
    }
}

impl WindowConfig {
    /// Aspect ratio of the **logical** resolution (`logical_width / logical_height`).
    ///
    /// Returns `0.0` when `logical_height` is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.logical_height == 0 {
            return 0.0;
        }
        self.logical_width as f32 / self.logical_height as f32
    }

    /// Record a new physical window size (after a resize event).
    pub fn set_physical_size(&mut self, width: u32, height: u32) {
        self.physical_width = width;
        self.physical_height = height;
    }

    /// Map a physical window position (device pixels) to logical game
    /// coordinates. A zero-sized window maps everything to the origin.
    pub fn to_logical(&self, physical_x: f64, physical_y: f64) -> Vec2 {
        if self.physical_width == 0 || self.physical_height == 0 {
            return Vec2::ZERO;
        }
        let sx = self.logical_width as f64 / self.physical_width as f64;
        let sy = self.logical_height as f64 / self.physical_height as f64;
        Vec2::new((physical_x * sx) as f32, (physical_y * sy) as f32)
    }
}
