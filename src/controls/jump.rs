use glam::Vec2;
use tracing::debug;

use crate::geometry::circle_contains;
use crate::input::{FingerId, TouchFrame, TouchPoint};
use crate::platform::Haptics;

/// Round on-screen jump button with a multi-jump budget.
///
/// Each fresh press on the button spends one charge and fires exactly one
/// impulse, no matter how long the finger stays down. Charges come back
/// only when the physics reports a landing.
#[derive(Clone, Debug)]
pub struct JumpControl {
    center: Vec2,
    radius: f32,
    owner: Option<FingerId>,
    charges_used: u32,
    max_jumps: u32,
    grounded: bool,
    haptic_ms: u32,
    /// Set by a successful activation, cleared by `begin_frame`.
    fired: bool,
}

impl JumpControl {
    pub const DEFAULT_MAX_JUMPS: u32 = 2;

    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            owner: None,
            charges_used: 0,
            max_jumps: Self::DEFAULT_MAX_JUMPS,
            grounded: true,
            haptic_ms: 25,
            fired: false,
        }
    }

    pub fn with_max_jumps(mut self, max_jumps: u32) -> Self { self.max_jumps = max_jumps; self }
    pub fn with_haptic_ms(mut self, ms: u32) -> Self { self.haptic_ms = ms; self }

    pub fn center(&self) -> Vec2 { self.center }
    pub fn radius(&self) -> f32 { self.radius }
    pub fn owner(&self) -> Option<FingerId> { self.owner }
    pub fn charges_used(&self) -> u32 { self.charges_used }
    pub fn max_jumps(&self) -> u32 { self.max_jumps }
    pub fn is_grounded(&self) -> bool { self.grounded }

    /// A charge is left for another jump.
    pub fn can_jump(&self) -> bool { self.charges_used < self.max_jumps }

    /// True in the frame an impulse fired.
    pub fn fired(&self) -> bool { self.fired }

    /// Clear last frame's edge.
    pub fn begin_frame(&mut self) {
        self.fired = false;
    }

    /// Attempt a jump with `touch`.
    ///
    /// Requires a fresh press inside the button, no current owner, a finger
    /// that is not driving the joystick, and a charge left.
    pub fn try_activate(
        &mut self,
        touch: &TouchPoint,
        joystick_owner: Option<FingerId>,
        haptics: &mut dyn Haptics,
    ) -> bool {
        if self.owner.is_some()
            || !touch.pressed
            || joystick_owner == Some(touch.id)
            || !self.can_jump()
            || !circle_contains(self.center, self.radius, touch.position)
        {
            return false;
        }

        self.owner = Some(touch.id);
        self.charges_used += 1;
        self.grounded = false;
        self.fired = true;
        haptics.vibrate(self.haptic_ms);
        debug!(finger = touch.id.0, charges_used = self.charges_used, "jump");
        true
    }

    /// Ground contact reported by the physics: restore every charge.
    pub fn land(&mut self) {
        if !self.grounded {
            debug!("landed");
        }
        self.grounded = true;
        self.charges_used = 0;
    }

    pub fn release_missing(&mut self, frame: &TouchFrame) {
        if let Some(id) = self.owner.filter(|&id| !frame.contains(id)) {
            self.release_finger(id);
        }
    }

    pub fn release_finger(&mut self, finger: FingerId) {
        if self.owner == Some(finger) {
            self.owner = None;
        }
    }
}
