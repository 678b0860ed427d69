mod common;

use common::*;
use glam::Vec2;
use proptest::prelude::*;
use umg::controls::VirtualJoystick;
use umg::input::{FingerId, TouchFrame};

fn stick() -> VirtualJoystick {
    VirtualJoystick::new(STICK, 60.0).with_deadzone(0.1).with_haptics(12, 1.0)
}

#[test]
fn captures_touch_inside_base() {
    let mut js = stick();
    assert!(js.try_capture(&hold(1, STICK + Vec2::new(20.0, 10.0))));
    assert!(js.is_active());
    assert_eq!(js.owner(), Some(FingerId(1)));
}

#[test]
fn rejects_touch_outside_base() {
    let mut js = stick();
    assert!(!js.try_capture(&press(1, STICK + Vec2::new(61.0, 0.0))));
    assert!(!js.is_active());
}

#[test]
fn second_finger_cannot_steal_capture() {
    let mut js = stick();
    js.try_capture(&press(1, STICK));
    assert!(!js.try_capture(&press(2, STICK)));
    assert_eq!(js.owner(), Some(FingerId(1)));
}

#[test]
fn delta_scales_with_offset() {
    let mut js = stick();
    let mut haptics = RecordingHaptics::default();
    let touch = hold(1, STICK + Vec2::new(30.0, 0.0));
    js.try_capture(&touch);
    js.track(&touch, &mut haptics);

    assert!((js.normalized_delta().x - 0.5).abs() < 1e-6);
    assert_eq!(js.normalized_delta().y, 0.0);
    assert_eq!(js.knob(), STICK + Vec2::new(30.0, 0.0));
}

#[test]
fn track_ignores_other_fingers() {
    let mut js = stick();
    let mut haptics = RecordingHaptics::default();
    js.try_capture(&hold(1, STICK));
    js.track(&hold(2, STICK + Vec2::new(50.0, 0.0)), &mut haptics);
    assert_eq!(js.knob(), STICK);
    assert_eq!(js.normalized_delta(), Vec2::ZERO);
}

#[test]
fn deadzone_suppresses_movement_and_haptics() {
    let mut js = stick();
    let mut haptics = RecordingHaptics::default();
    let touch = hold(1, STICK + Vec2::new(3.0, 0.0));
    js.try_capture(&touch);
    js.track(&touch, &mut haptics);

    assert!(js.normalized_delta().x > 0.0);
    assert_eq!(js.horizontal(), 0.0);
    assert_eq!(haptics.pulses(), 0);
}

#[test]
fn haptic_feedback_is_rate_limited() {
    let mut js = stick();
    let mut haptics = RecordingHaptics::default();
    let touch = hold(1, STICK + Vec2::new(-50.0, 0.0));
    js.try_capture(&touch);

    js.track(&touch, &mut haptics);
    js.tick(DT);
    js.track(&touch, &mut haptics);
    assert_eq!(haptics.pulses(), 1);
    assert_eq!(haptics.0.borrow()[0], 12);

    js.tick(1.0);
    js.track(&touch, &mut haptics);
    assert_eq!(haptics.pulses(), 2);
}

#[test]
fn release_recenters_knob() {
    let mut js = stick();
    let mut haptics = RecordingHaptics::default();
    let touch = hold(1, STICK + Vec2::new(40.0, -20.0));
    js.try_capture(&touch);
    js.track(&touch, &mut haptics);

    js.release_missing(&frame(&[touch]));
    assert!(js.is_active());

    js.release_missing(&TouchFrame::default());
    assert!(!js.is_active());
    assert_eq!(js.knob(), js.base());
    assert_eq!(js.normalized_delta(), Vec2::ZERO);
}

proptest! {
    #[test]
    fn knob_never_leaves_base_circle(angle in 0.0f32..std::f32::consts::TAU, dist in 60.0f32..2000.0) {
        let mut js = stick();
        let mut haptics = RecordingHaptics::default();
        js.try_capture(&hold(1, STICK));
        let target = STICK + Vec2::new(angle.cos(), angle.sin()) * dist;
        js.track(&hold(1, target), &mut haptics);

        let reach = js.knob().distance(js.base());
        prop_assert!((reach - 60.0).abs() < 1e-3, "knob at {reach}");
        prop_assert!(js.normalized_delta().length() <= 1.0 + 1e-5);
    }
}
