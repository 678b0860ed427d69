pub mod config;

pub use config::{WindowConfig, WindowMode};

use tracing::debug;
use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

/// Initial attributes for the game window: fixed portrait size, not resizable
/// in windowed mode.
pub fn window_attributes(title: &str, config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(config.physical_width, config.physical_height))
        .with_resizable(false)
}

/// Apply `config.mode` to an already created `window`.
///
/// The logical resolution is never changed here: touches are rescaled
/// through [`WindowConfig::to_logical`] using whatever physical size the OS
/// ends up granting, which arrives later as a `Resized` event.
///
/// `Fullscreen` picks the monitor video mode whose pixel area is closest to
/// the configured physical size, falling back to borderless when the
/// monitor cannot be queried (headless, some Wayland setups).
pub fn apply_window_settings(window: &Window, config: &WindowConfig) {
    let fullscreen = match config.mode {
        WindowMode::Windowed => None,
        WindowMode::Borderless => Some(Fullscreen::Borderless(None)),
        WindowMode::Fullscreen => {
            let target = config.physical_width as u64 * config.physical_height as u64;
            let best = window.current_monitor().map(|monitor| {
                monitor
                    .video_modes()
                    .min_by_key(|vm| {
                        let s = vm.size();
                        (s.width as u64 * s.height as u64).abs_diff(target)
                    })
                    .map(Fullscreen::Exclusive)
                    .unwrap_or(Fullscreen::Borderless(Some(monitor)))
            });
            Some(best.unwrap_or(Fullscreen::Borderless(None)))
        }
    };

    debug!(mode = ?config.mode, "applying window mode");
    window.set_fullscreen(fullscreen.clone());

    if fullscreen.is_none() {
        window.set_decorations(true);
        let _ = window.request_inner_size(PhysicalSize::new(
            config.physical_width,
            config.physical_height,
        ));
    }
}
