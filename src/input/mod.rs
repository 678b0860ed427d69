pub mod touch;

use std::collections::HashSet;
pub use winit::keyboard::KeyCode;
pub use winit::event::MouseButton;

pub use touch::{FingerId, TouchFrame, TouchPoint, TouchTracker, MOUSE_FINGER};

/// One entry of the ordered text stream: a printable character or a fresh
/// key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextEvent {
    Char(char),
    Key(KeyCode),
}

/// Raw hardware state for a single frame.
///
/// Filled by the event loop between updates and cleared after each fixed
/// update. `text` is meant to be drained by whoever owns text focus.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    /// Toggled by every Caps Lock press.
    pub caps_lock: bool,

    pub mouse_pos: [f32; 2],
    pub mouse_held: HashSet<MouseButton>,

    /// Characters (keyboard text and IME commits) and fresh key presses,
    /// in arrival order.
    pub text: Vec<TextEvent>,
    /// Snapshot of every finger that is down this frame.
    pub touches: TouchFrame,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.text.clear();
    }

    /// Record a key going down. Repeats while held do not count as presses.
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
            self.text.push(TextEvent::Key(key));
            if key == KeyCode::CapsLock {
                self.caps_lock = !self.caps_lock;
            }
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Queue the printable characters of `text`; control characters such as
    /// the `\r` winit reports for Enter are dropped.
    pub fn type_text(&mut self, text: &str) {
        self.text
            .extend(text.chars().filter(|c| !c.is_control()).map(TextEvent::Char));
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }

    pub fn is_shift_held(&self) -> bool {
        self.is_key_held(KeyCode::ShiftLeft) || self.is_key_held(KeyCode::ShiftRight)
    }

    /// Letter case for key-code text entry: Shift inverts Caps Lock.
    pub fn uppercase(&self) -> bool {
        self.is_shift_held() != self.caps_lock
    }
}

const LETTER_KEYS: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
    KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
    KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
    KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
    KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];

/// Map a raw key code to the character it types, if it is a letter, digit
/// or space. Everything else (Enter, Backspace, arrows, ...) yields `None`.
pub fn keycode_to_char(key: KeyCode, uppercase: bool) -> Option<char> {
    if key == KeyCode::Space {
        return Some(' ');
    }
    if let Some(i) = LETTER_KEYS.iter().position(|&k| k == key) {
        let base = if uppercase { b'A' } else { b'a' };
        return Some((base + i as u8) as char);
    }
    DIGIT_KEYS
        .iter()
        .position(|&k| k == key)
        .map(|i| (b'0' + i as u8) as char)
}
