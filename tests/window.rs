use glam::Vec2;
use umg::window::*;

#[test]
fn default_is_480x800_portrait_windowed() {
    let cfg = WindowConfig::default();
    assert_eq!(cfg.physical_width,  480);
    assert_eq!(cfg.physical_height, 800);
    assert_eq!(cfg.logical_width,   480);
    assert_eq!(cfg.logical_height,  800);
    assert_eq!(cfg.mode, WindowMode::Windowed);
}

#[test]
fn aspect_ratio_portrait() {
    let ratio = WindowConfig::default().aspect_ratio();
    assert!((ratio - 0.6).abs() < 1e-5, "expected 3/5, got {ratio}");
}

#[test]
fn aspect_ratio_zero_height_returns_zero() {
    let cfg = WindowConfig {
        physical_width: 0, physical_height: 0,
        logical_width: 480, logical_height: 0,
        mode: WindowMode::Windowed,
    };
    assert_eq!(cfg.aspect_ratio(), 0.0);
}

#[test]
fn to_logical_is_identity_at_native_size() {
    let cfg = WindowConfig::default();
    assert_eq!(cfg.to_logical(120.0, 680.0), Vec2::new(120.0, 680.0));
}

#[test]
fn to_logical_scales_hidpi_window() {
    let mut cfg = WindowConfig::default();
    cfg.set_physical_size(1080, 1800);
    let p = cfg.to_logical(1080.0, 900.0);
    assert!((p.x - 480.0).abs() < 1e-3);
    assert!((p.y - 400.0).abs() < 1e-3);
}

#[test]
fn to_logical_zero_window_maps_to_origin() {
    let mut cfg = WindowConfig::default();
    cfg.set_physical_size(0, 0);
    assert_eq!(cfg.to_logical(10.0, 10.0), Vec2::ZERO);
}

#[test]
fn mode_deserializes_snake_case() {
    let cfg: WindowConfig = serde_json::from_str(r#"{ "mode": "borderless" }"#).unwrap();
    assert_eq!(cfg.mode, WindowMode::Borderless);
    assert_eq!(cfg.logical_width, 480);
}
