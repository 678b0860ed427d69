use glam::Vec2;
use tracing::debug;

use crate::geometry::{circle_contains, clamp_to_radius};
use crate::input::{FingerId, TouchFrame, TouchPoint};
use crate::platform::Haptics;

/// Fixed-base virtual thumbstick.
///
/// A finger landing inside the base circle captures the stick and keeps it
/// until lifted, wherever it drags. The knob follows the finger but never
/// leaves the base circle.
#[derive(Clone, Debug)]
pub struct VirtualJoystick {
    base: Vec2,
    knob: Vec2,
    radius: f32,
    owner: Option<FingerId>,
    /// Knob offset divided by the radius; each component in `[-1, 1]`.
    delta: Vec2,
    deadzone: f32,
    haptic_ms: u32,
    haptic_interval: f32,
    /// Seconds until the next haptic pulse is allowed.
    haptic_cooldown: f32,
}

impl VirtualJoystick {
    pub fn new(base: Vec2, radius: f32) -> Self {
        Self {
            base,
            knob: base,
            radius,
            owner: None,
            delta: Vec2::ZERO,
            deadzone: 0.1,
            haptic_ms: 12,
            haptic_interval: 1.0,
            haptic_cooldown: 0.0,
        }
    }

    pub fn with_deadzone(mut self, deadzone: f32) -> Self { self.deadzone = deadzone; self }

    /// Pulse length and minimum spacing of the drag feedback.
    pub fn with_haptics(mut self, duration_ms: u32, interval: f32) -> Self {
        self.haptic_ms = duration_ms;
        self.haptic_interval = interval;
        self
    }

    pub fn base(&self) -> Vec2 { self.base }
    pub fn knob(&self) -> Vec2 { self.knob }
    pub fn radius(&self) -> f32 { self.radius }
    pub fn owner(&self) -> Option<FingerId> { self.owner }
    pub fn is_active(&self) -> bool { self.owner.is_some() }
    pub fn normalized_delta(&self) -> Vec2 { self.delta }
    pub fn deadzone(&self) -> f32 { self.deadzone }

    /// Horizontal input with the deadzone applied.
    pub fn horizontal(&self) -> f32 {
        if self.delta.x.abs() < self.deadzone { 0.0 } else { self.delta.x }
    }

    /// Bind `touch` if the stick is free and the touch is on the base.
    pub fn try_capture(&mut self, touch: &TouchPoint) -> bool {
        if self.owner.is_some() || !circle_contains(self.base, self.radius, touch.position) {
            return false;
        }
        self.owner = Some(touch.id);
        debug!(finger = touch.id.0, "joystick captured");
        true
    }

    /// Move the knob to follow the owning finger. Touches from any other
    /// finger are ignored.
    pub fn track(&mut self, touch: &TouchPoint, haptics: &mut dyn Haptics) {
        if self.owner != Some(touch.id) {
            return;
        }
        let offset = clamp_to_radius(touch.position - self.base, self.radius);
        self.knob = self.base + offset;
        self.delta = (offset / self.radius).clamp(Vec2::splat(-1.0), Vec2::splat(1.0));

        if self.delta.x.abs() > self.deadzone && self.haptic_cooldown <= 0.0 {
            haptics.vibrate(self.haptic_ms);
            self.haptic_cooldown = self.haptic_interval;
        }
    }

    /// Count down the haptic cooldown.
    pub fn tick(&mut self, dt: f32) {
        self.haptic_cooldown = (self.haptic_cooldown - dt).max(0.0);
    }

    /// Drop the owner and re-center once its finger is gone from `frame`.
    pub fn release_missing(&mut self, frame: &TouchFrame) {
        if self.owner.is_some_and(|id| !frame.contains(id)) {
            self.release();
        }
    }

    pub fn release_finger(&mut self, finger: FingerId) {
        if self.owner == Some(finger) {
            self.release();
        }
    }

    pub fn release(&mut self) {
        if let Some(id) = self.owner.take() {
            debug!(finger = id.0, "joystick released");
        }
        self.knob = self.base;
        self.delta = Vec2::ZERO;
    }
}
