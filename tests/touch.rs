use glam::Vec2;
use umg::input::*;

#[test]
fn first_appearance_is_a_press() {
    let mut tracker = TouchTracker::new();
    tracker.touch_started(FingerId(1), Vec2::new(10.0, 20.0));

    let first = tracker.snapshot();
    assert_eq!(first.len(), 1);
    assert!(first.points()[0].pressed);

    let second = tracker.snapshot();
    assert!(!second.points()[0].pressed);
    assert_eq!(second.points()[0].position, Vec2::new(10.0, 20.0));
}

#[test]
fn moves_update_position() {
    let mut tracker = TouchTracker::new();
    tracker.touch_started(FingerId(1), Vec2::ZERO);
    tracker.snapshot();
    tracker.touch_moved(FingerId(1), Vec2::new(5.0, 6.0));
    let frame = tracker.snapshot();
    assert_eq!(frame.get(FingerId(1)).unwrap().position, Vec2::new(5.0, 6.0));
}

#[test]
fn lifted_finger_disappears() {
    let mut tracker = TouchTracker::new();
    tracker.touch_started(FingerId(1), Vec2::ZERO);
    tracker.snapshot();
    tracker.touch_ended(FingerId(1));
    assert!(tracker.snapshot().is_empty());
}

#[test]
fn tap_between_frames_is_seen_once() {
    let mut tracker = TouchTracker::new();
    tracker.touch_started(FingerId(4), Vec2::new(1.0, 1.0));
    tracker.touch_ended(FingerId(4));

    let frame = tracker.snapshot();
    assert!(frame.contains(FingerId(4)));
    assert!(frame.points()[0].pressed);
    assert!(tracker.snapshot().is_empty());
}

#[test]
fn reused_id_is_a_fresh_press() {
    let mut tracker = TouchTracker::new();
    tracker.touch_started(FingerId(0), Vec2::new(1.0, 1.0));
    tracker.snapshot();

    tracker.touch_ended(FingerId(0));
    tracker.touch_started(FingerId(0), Vec2::new(9.0, 9.0));
    let frame = tracker.snapshot();
    let point = frame.get(FingerId(0)).unwrap();
    assert!(point.pressed);
    assert_eq!(point.position, Vec2::new(9.0, 9.0));

    let next = tracker.snapshot();
    assert!(!next.get(FingerId(0)).unwrap().pressed);
}

#[test]
fn reused_id_tapped_between_frames_is_seen_once() {
    let mut tracker = TouchTracker::new();
    tracker.touch_started(FingerId(0), Vec2::ZERO);
    tracker.snapshot();

    tracker.touch_ended(FingerId(0));
    tracker.touch_started(FingerId(0), Vec2::ONE);
    tracker.touch_ended(FingerId(0));

    let frame = tracker.snapshot();
    assert!(frame.get(FingerId(0)).unwrap().pressed);
    assert!(tracker.snapshot().is_empty());
}

#[test]
fn cancel_all_drops_every_finger() {
    let mut tracker = TouchTracker::new();
    tracker.touch_started(FingerId(1), Vec2::ZERO);
    tracker.touch_started(FingerId(2), Vec2::ONE);
    tracker.snapshot();
    tracker.cancel_all();
    assert_eq!(tracker.active_count(), 0);
    assert!(tracker.snapshot().is_empty());
}

#[test]
fn frame_keeps_input_order() {
    let previous = TouchFrame::new(vec![TouchPoint::new(2, 0.0, 0.0)]);
    let frame = TouchFrame::from_positions(
        &previous,
        &[(FingerId(3), Vec2::ZERO), (FingerId(2), Vec2::ONE)],
    );
    let ids: Vec<u64> = frame.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![3, 2]);
    assert!(frame.get(FingerId(3)).unwrap().pressed);
    assert!(!frame.get(FingerId(2)).unwrap().pressed);
}

#[test]
fn unknown_finger_is_absent() {
    let frame = TouchFrame::new(vec![TouchPoint::new(1, 0.0, 0.0)]);
    assert!(!frame.contains(FingerId(99)));
    assert!(frame.get(FingerId(99)).is_none());
}

#[test]
fn keycode_text_mapping() {
    assert_eq!(keycode_to_char(KeyCode::KeyA, false), Some('a'));
    assert_eq!(keycode_to_char(KeyCode::KeyZ, true), Some('Z'));
    assert_eq!(keycode_to_char(KeyCode::Digit7, true), Some('7'));
    assert_eq!(keycode_to_char(KeyCode::Space, false), Some(' '));
    assert_eq!(keycode_to_char(KeyCode::Enter, false), None);
}

#[test]
fn caps_lock_inverts_shift() {
    let mut input = InputState::new();
    assert!(!input.uppercase());
    input.press_key(KeyCode::CapsLock);
    assert!(input.uppercase());
    input.press_key(KeyCode::ShiftLeft);
    assert!(!input.uppercase());
}

#[test]
fn text_and_keys_share_one_ordered_queue() {
    let mut input = InputState::new();
    input.type_text("a\rb");
    input.press_key(KeyCode::Enter);
    input.type_text("c");
    assert_eq!(
        input.text,
        vec![
            TextEvent::Char('a'),
            TextEvent::Char('b'),
            TextEvent::Key(KeyCode::Enter),
            TextEvent::Char('c'),
        ]
    );
}

#[test]
fn held_key_is_pressed_only_once() {
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyA);
    input.clear_frame_state();
    input.press_key(KeyCode::KeyA);
    assert!(input.is_key_held(KeyCode::KeyA));
    assert!(!input.is_key_pressed(KeyCode::KeyA));
    assert!(input.text.is_empty());
}
