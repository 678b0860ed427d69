use tracing::trace;

use crate::config::{ChatConfig, ControlsConfig};
use crate::input::{FingerId, InputState, TouchFrame};
use crate::platform::Platform;

use super::chat::ChatController;
use super::joystick::VirtualJoystick;
use super::jump::JumpControl;

/// What the controls ask of the physics this frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ControlOutput {
    /// Horizontal input in `[-1, 1]`, deadzone applied.
    pub move_x: f32,
    /// A jump fired this frame.
    pub jump: bool,
}

/// Which control holds a finger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Owner {
    Chat,
    Joystick,
    Jump,
}

/// Routes each frame's touches to the chat and the two gameplay controls.
///
/// Chat gets first refusal on every touch so it can swallow taps that land
/// over the stick or the jump button. A finger bound to one control is never
/// handed to another until it lifts, and a finger the chat swallowed without
/// binding (tap-away, send) stays away from the gameplay controls until it
/// lifts.
pub struct InputArbiter {
    pub chat: ChatController,
    pub joystick: VirtualJoystick,
    pub jump: JumpControl,
    swallowed: Vec<FingerId>,
}

impl InputArbiter {
    pub fn new(chat: ChatController, joystick: VirtualJoystick, jump: JumpControl) -> Self {
        Self { chat, joystick, jump, swallowed: Vec::new() }
    }

    /// Place every control for a `screen_w` x `screen_h` logical screen.
    pub fn from_config(
        controls: &ControlsConfig,
        chat: &ChatConfig,
        screen_w: f32,
        screen_h: f32,
    ) -> Self {
        let joystick = VirtualJoystick::new(controls.joystick_center(screen_h), controls.joystick_radius)
            .with_deadzone(controls.deadzone)
            .with_haptics(controls.joystick_haptic_ms, controls.joystick_haptic_cooldown);
        let jump = JumpControl::new(controls.jump_center(screen_w, screen_h), controls.jump_radius)
            .with_max_jumps(controls.max_jumps)
            .with_haptic_ms(controls.jump_haptic_ms);
        Self::new(ChatController::new(chat.clone(), screen_w, screen_h), joystick, jump)
    }

    pub fn owner_of(&self, finger: FingerId) -> Option<Owner> {
        if self.chat.owner() == Some(finger) {
            Some(Owner::Chat)
        } else if self.joystick.owner() == Some(finger) {
            Some(Owner::Joystick)
        } else if self.jump.owner() == Some(finger) {
            Some(Owner::Jump)
        } else {
            None
        }
    }

    /// Whether `finger` was swallowed by the chat and is still down.
    pub fn is_swallowed(&self, finger: FingerId) -> bool {
        self.swallowed.contains(&finger)
    }

    /// How many controls claim `finger`. Never more than one.
    pub fn owner_count(&self, finger: FingerId) -> usize {
        [self.chat.owner(), self.joystick.owner(), self.jump.owner()]
            .into_iter()
            .filter(|&o| o == Some(finger))
            .count()
    }

    /// Offer every touch in `frame` to the controls, in frame order, then
    /// release any control whose finger is gone.
    pub fn route_touches(&mut self, frame: &TouchFrame, platform: &mut Platform) {
        self.jump.begin_frame();

        // A press under a known id is a new contact; the old gesture ended.
        for touch in frame.iter().filter(|t| t.pressed) {
            self.chat.release_finger(touch.id);
            self.joystick.release_finger(touch.id);
            self.jump.release_finger(touch.id);
            self.swallowed.retain(|&id| id != touch.id);
        }

        for touch in frame.iter() {
            if self.chat.handle_touch(touch, platform.keyboard.as_mut()) {
                trace!(finger = touch.id.0, "touch consumed by chat");
                if self.chat.owner() != Some(touch.id) && !self.swallowed.contains(&touch.id) {
                    self.swallowed.push(touch.id);
                }
                continue;
            }
            if self.swallowed.contains(&touch.id) {
                continue;
            }

            if self.joystick.owner() == Some(touch.id) {
                self.joystick.track(touch, platform.haptics.as_mut());
                continue;
            }
            if self.jump.owner() == Some(touch.id) {
                continue;
            }

            if self.joystick.try_capture(touch) {
                self.joystick.track(touch, platform.haptics.as_mut());
                continue;
            }
            self.jump
                .try_activate(touch, self.joystick.owner(), platform.haptics.as_mut());
        }

        self.chat.release_missing(frame);
        self.joystick.release_missing(frame);
        self.jump.release_missing(frame);
        self.swallowed.retain(|&id| frame.contains(id));
    }

    /// One full input step: route touches, update the chat with this
    /// frame's text and timers, tick the haptic cooldown.
    pub fn step(
        &mut self,
        frame: &TouchFrame,
        input: &mut InputState,
        dt: f32,
        platform: &mut Platform,
    ) -> ControlOutput {
        self.route_touches(frame, platform);
        self.chat.update(dt, input, platform.keyboard.as_mut());
        self.joystick.tick(dt);

        ControlOutput {
            move_x: self.joystick.horizontal(),
            jump: self.jump.fired(),
        }
    }

    /// Physics reported ground contact.
    pub fn land(&mut self) {
        self.jump.land();
    }
}
