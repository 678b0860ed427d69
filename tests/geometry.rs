use glam::Vec2;
use umg::camera::{Camera, CameraUniform};
use umg::geometry::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), Vec2::new(25.0, 40.0));
}

#[test]
fn rect_contains_is_closed_on_every_edge() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Vec2::new(0.0, 0.0)));
    assert!(r.contains(Vec2::new(10.0, 10.0)));
    assert!(r.contains(Vec2::new(5.0, 10.0)));
    assert!(!r.contains(Vec2::new(10.01, 5.0)));
    assert!(!r.contains(Vec2::new(5.0, -0.01)));
}

#[test]
fn circle_contains_includes_rim() {
    let c = Vec2::new(100.0, 100.0);
    assert!(circle_contains(c, 40.0, Vec2::new(140.0, 100.0)));
    assert!(!circle_contains(c, 40.0, Vec2::new(140.1, 100.0)));
    assert!(circle_contains(c, 40.0, c));
}

#[test]
fn clamp_to_radius_keeps_short_offsets() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(clamp_to_radius(v, 10.0), v);
}

#[test]
fn clamp_to_radius_shortens_long_offsets() {
    let v = clamp_to_radius(Vec2::new(30.0, 40.0), 10.0);
    assert!((v.length() - 10.0).abs() < 1e-5);
    assert!((v.x - 6.0).abs() < 1e-5 && (v.y - 8.0).abs() < 1e-5);
}

#[test]
fn clamp_to_radius_zero_offset() {
    assert_eq!(clamp_to_radius(Vec2::ZERO, 10.0), Vec2::ZERO);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(0.4, 0.75, 0.0), 0.4);
    assert_eq!(lerp(0.4, 0.75, 1.0), 0.75);
    assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-6);
}

// ── Camera ─────────────────────────────────────────────────────────────────

#[test]
fn camera_keeps_player_at_forty_percent() {
    let mut cam = Camera::new(480.0, 4000.0);
    cam.follow(1000.0);
    assert!((cam.x - (1000.0 - 192.0)).abs() < 1e-4);
    assert_eq!(cam.world_to_screen(Vec2::new(1000.0, 520.0)).x, 192.0);
}

#[test]
fn camera_clamps_to_world_edges() {
    let mut cam = Camera::new(480.0, 4000.0);
    cam.follow(50.0);
    assert_eq!(cam.x, 0.0);
    cam.follow(3990.0);
    assert_eq!(cam.x, 3520.0);
}

#[test]
fn camera_round_trips_screen_and_world() {
    let mut cam = Camera::new(480.0, 4000.0);
    cam.follow(2000.0);
    let world = Vec2::new(2100.0, 300.0);
    assert_eq!(cam.screen_to_world(cam.world_to_screen(world)), world);
    assert_eq!(cam.parallax(0.5), -cam.x * 0.5);
}

#[test]
fn ortho_maps_corners_to_clip_space() {
    let m = glam::Mat4::from_cols_array_2d(&CameraUniform::ortho(480.0, 800.0).view_proj);
    let tl = m * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let br = m * glam::Vec4::new(480.0, 800.0, 0.0, 1.0);
    assert!((tl.x + 1.0).abs() < 1e-6 && (tl.y - 1.0).abs() < 1e-6);
    assert!((br.x - 1.0).abs() < 1e-6 && (br.y + 1.0).abs() < 1e-6);
}
