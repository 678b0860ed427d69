mod common;

use common::*;
use glam::Vec2;
use umg::controls::JumpControl;
use umg::input::{FingerId, TouchFrame};

fn button() -> JumpControl {
    JumpControl::new(JUMP, 40.0).with_max_jumps(2).with_haptic_ms(25)
}

/// Press with a fresh finger, then lift it.
fn tap(jump: &mut JumpControl, id: u64, haptics: &mut RecordingHaptics) -> bool {
    jump.begin_frame();
    let fired = jump.try_activate(&press(id, JUMP), None, haptics);
    jump.release_missing(&TouchFrame::default());
    fired
}

#[test]
fn two_charges_then_refuses() {
    let mut jump = button();
    let mut haptics = RecordingHaptics::default();

    assert!(tap(&mut jump, 1, &mut haptics));
    assert!(tap(&mut jump, 2, &mut haptics));
    assert!(!tap(&mut jump, 3, &mut haptics));

    assert_eq!(jump.charges_used(), 2);
    assert_eq!(haptics.pulses(), 2);
    assert_eq!(*haptics.0.borrow(), vec![25, 25]);
}

#[test]
fn landing_restores_charges() {
    let mut jump = button();
    let mut haptics = RecordingHaptics::default();
    tap(&mut jump, 1, &mut haptics);
    tap(&mut jump, 2, &mut haptics);
    assert!(!jump.can_jump());
    assert!(!jump.is_grounded());

    jump.land();
    assert!(jump.is_grounded());
    assert_eq!(jump.charges_used(), 0);
    assert!(tap(&mut jump, 3, &mut haptics));
}

#[test]
fn holding_the_button_fires_once() {
    let mut jump = button();
    let mut haptics = RecordingHaptics::default();

    jump.begin_frame();
    assert!(jump.try_activate(&press(1, JUMP), None, &mut haptics));
    assert!(jump.fired());

    for _ in 0..30 {
        jump.begin_frame();
        assert!(!jump.try_activate(&hold(1, JUMP), None, &mut haptics));
        jump.release_missing(&frame(&[hold(1, JUMP)]));
        assert!(!jump.fired());
    }
    assert_eq!(jump.charges_used(), 1);
    assert_eq!(jump.owner(), Some(FingerId(1)));
}

#[test]
fn requires_a_fresh_press() {
    let mut jump = button();
    let mut haptics = RecordingHaptics::default();
    assert!(!jump.try_activate(&hold(1, JUMP), None, &mut haptics));
    assert_eq!(jump.charges_used(), 0);
}

#[test]
fn refuses_the_joystick_finger() {
    let mut jump = button();
    let mut haptics = RecordingHaptics::default();
    assert!(!jump.try_activate(&press(7, JUMP), Some(FingerId(7)), &mut haptics));
    assert_eq!(haptics.pulses(), 0);
}

#[test]
fn refuses_touch_outside_button() {
    let mut jump = button();
    let mut haptics = RecordingHaptics::default();
    assert!(!jump.try_activate(&press(1, JUMP + Vec2::new(0.0, 41.0)), None, &mut haptics));
}

#[test]
fn second_finger_waits_for_owner_to_lift() {
    let mut jump = button();
    let mut haptics = RecordingHaptics::default();
    jump.try_activate(&press(1, JUMP), None, &mut haptics);
    assert!(!jump.try_activate(&press(2, JUMP), None, &mut haptics));

    jump.release_missing(&frame(&[hold(2, JUMP)]));
    assert_eq!(jump.owner(), None);
    assert!(jump.try_activate(&press(3, JUMP), None, &mut haptics));
}
