#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use umg::config::{ChatConfig, ControlsConfig};
use umg::controls::{ChatController, InputArbiter};
use umg::input::{TouchFrame, TouchPoint};
use umg::platform::{Haptics, Platform, SoftKeyboard};

pub const W: f32 = 480.0;
pub const H: f32 = 800.0;
pub const DT: f32 = 1.0 / 60.0;

/// Joystick base and jump button centers for the default 480×800 layout.
pub const STICK: Vec2 = Vec2::new(120.0, 680.0);
pub const JUMP: Vec2 = Vec2::new(360.0, 680.0);

#[derive(Debug, Default)]
pub struct KeyboardLog {
    pub shown: u32,
    pub hidden: u32,
}

#[derive(Clone, Default)]
pub struct RecordingKeyboard(pub Rc<RefCell<KeyboardLog>>);

impl RecordingKeyboard {
    pub fn shown(&self) -> u32 { self.0.borrow().shown }
    pub fn hidden(&self) -> u32 { self.0.borrow().hidden }
}

impl SoftKeyboard for RecordingKeyboard {
    fn show_soft_input(&mut self) { self.0.borrow_mut().shown += 1; }
    fn hide_soft_input(&mut self) { self.0.borrow_mut().hidden += 1; }
}

#[derive(Clone, Default)]
pub struct RecordingHaptics(pub Rc<RefCell<Vec<u32>>>);

impl RecordingHaptics {
    pub fn pulses(&self) -> usize { self.0.borrow().len() }
}

impl Haptics for RecordingHaptics {
    fn vibrate(&mut self, duration_ms: u32) { self.0.borrow_mut().push(duration_ms); }
}

pub fn recording_platform() -> (Platform, RecordingKeyboard, RecordingHaptics) {
    let keyboard = RecordingKeyboard::default();
    let haptics = RecordingHaptics::default();
    let platform = Platform::new(Box::new(keyboard.clone()), Box::new(haptics.clone()));
    (platform, keyboard, haptics)
}

pub fn chat() -> ChatController {
    ChatController::new(ChatConfig::default(), W, H)
}

pub fn arbiter() -> InputArbiter {
    InputArbiter::from_config(&ControlsConfig::default(), &ChatConfig::default(), W, H)
}

pub fn press(id: u64, at: Vec2) -> TouchPoint {
    TouchPoint::new(id, at.x, at.y).pressed()
}

pub fn hold(id: u64, at: Vec2) -> TouchPoint {
    TouchPoint::new(id, at.x, at.y)
}

pub fn frame(points: &[TouchPoint]) -> TouchFrame {
    TouchFrame::new(points.to_vec())
}
