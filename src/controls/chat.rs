//! In-game chat: a single-line text entry row along the bottom edge and a
//! speech bubble above the player showing the last sent message.
//!
//! The row is an input box, a CHAT/SEND toggle and, while open, a backspace
//! key. Opening chat lifts the row to mid-screen so the soft keyboard does
//! not cover it.

use glam::Vec2;
use tracing::{debug, info};

use crate::config::ChatConfig;
use crate::geometry::Rect;
use crate::input::{keycode_to_char, FingerId, InputState, KeyCode, TextEvent, TouchFrame, TouchPoint};
use crate::platform::SoftKeyboard;

pub const INPUT_HEIGHT: f32 = 44.0;
pub const ROW_PADDING: f32 = 10.0;
pub const SEND_WIDTH: f32 = 70.0;
pub const BACKSPACE_WIDTH: f32 = 50.0;

/// Height of the bubble's top edge above the player's hip.
pub const BUBBLE_RISE: f32 = 90.0;
pub const BUBBLE_PADDING: f32 = 8.0;

/// Characters the chat accepts: printable ASCII from space through `}`.
pub fn is_chat_char(ch: char) -> bool {
    (' '..='}').contains(&ch)
}

/// Caret blink phase: on for half a second, off for half a second.
pub fn caret_visible(time: f64) -> bool {
    ((time * 2.0).floor() as i64).rem_euclid(2) == 0
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChatRegion {
    InputBox,
    Send,
    Backspace,
}

/// Screen-space placement of the chat row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChatLayout {
    pub input_box: Rect,
    pub send_button: Rect,
    /// Only present (and only hit-testable) while chat is open.
    pub backspace_button: Option<Rect>,
}

impl ChatLayout {
    /// Lay the row out for the given state and logical screen size.
    ///
    /// Closed: anchored to the bottom edge. Open: the row's bottom sits
    /// `ROW_PADDING` above the vertical middle of the screen.
    pub fn compute(open: bool, screen_w: f32, screen_h: f32) -> Self {
        let y = if open {
            screen_h * 0.5 - INPUT_HEIGHT - ROW_PADDING
        } else {
            screen_h - INPUT_HEIGHT - ROW_PADDING
        };
        let input_w = (screen_w - ROW_PADDING * 4.0 - SEND_WIDTH - BACKSPACE_WIDTH).max(0.0);

        let input_box = Rect::new(ROW_PADDING, y, input_w, INPUT_HEIGHT);
        let send_button = Rect::new(input_box.right() + ROW_PADDING, y, SEND_WIDTH, INPUT_HEIGHT);
        let backspace_button = open.then(|| {
            Rect::new(send_button.right() + ROW_PADDING, y, BACKSPACE_WIDTH, INPUT_HEIGHT)
        });

        Self { input_box, send_button, backspace_button }
    }

    /// Which chat region, if any, contains `p`. Backspace wins over send,
    /// send over the input box.
    pub fn hit(&self, p: Vec2) -> Option<ChatRegion> {
        if self.backspace_button.is_some_and(|r| r.contains(p)) {
            Some(ChatRegion::Backspace)
        } else if self.send_button.contains(p) {
            Some(ChatRegion::Send)
        } else if self.input_box.contains(p) {
            Some(ChatRegion::InputBox)
        } else {
            None
        }
    }
}

// ── Draw state ────────────────────────────────────────────────────────────────

/// The sent message while its bubble is showing.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleView<'a> {
    pub text: &'a str,
    /// Remaining display time as a fraction of the full duration, `(0, 1]`.
    pub fraction: f32,
}

/// Read-only snapshot handed to the renderer once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatView<'a> {
    pub open: bool,
    pub layout: ChatLayout,
    pub draft: &'a str,
    pub caret_visible: bool,
    /// `"<len>/<max>"`, e.g. `"5/127"`.
    pub char_count: String,
    pub backspace_held: bool,
    pub bubble: Option<BubbleView<'a>>,
}

impl ChatView<'_> {
    pub fn send_label(&self) -> &'static str {
        if self.open { "SEND" } else { "CHAT" }
    }
}

// ── ChatController ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Closed,
    Open,
}

pub struct ChatController {
    phase: ChatPhase,
    draft: String,
    sent: String,
    /// Seconds left on the sent-message bubble; 0 when none is showing.
    bubble_timer: f32,
    owner: Option<FingerId>,
    backspace_held: bool,
    backspace_hold_timer: f32,
    config: ChatConfig,
    screen_w: f32,
    screen_h: f32,
}

impl ChatController {
    pub fn new(config: ChatConfig, screen_w: f32, screen_h: f32) -> Self {
        let capacity = config.capacity;
        Self {
            phase: ChatPhase::Closed,
            draft: String::with_capacity(capacity),
            sent: String::with_capacity(capacity),
            bubble_timer: 0.0,
            owner: None,
            backspace_held: false,
            backspace_hold_timer: 0.0,
            config,
            screen_w,
            screen_h,
        }
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn phase(&self) -> ChatPhase { self.phase }
    pub fn is_open(&self) -> bool { self.phase == ChatPhase::Open }
    pub fn draft(&self) -> &str { &self.draft }
    pub fn draft_len(&self) -> usize { self.draft.len() }
    pub fn sent(&self) -> &str { &self.sent }
    pub fn sent_len(&self) -> usize { self.sent.len() }
    pub fn bubble_timer(&self) -> f32 { self.bubble_timer }
    pub fn owner(&self) -> Option<FingerId> { self.owner }
    pub fn is_backspace_held(&self) -> bool { self.backspace_held }
    pub fn backspace_hold_timer(&self) -> f32 { self.backspace_hold_timer }

    /// Longest draft the buffer accepts (`capacity - 1`).
    pub fn max_len(&self) -> usize {
        self.config.capacity.saturating_sub(1)
    }

    /// Current layout. Recomputed on every call, never cached.
    pub fn layout(&self) -> ChatLayout {
        ChatLayout::compute(self.is_open(), self.screen_w, self.screen_h)
    }

    pub fn bubble_active(&self) -> bool {
        self.bubble_timer > 0.0 && !self.sent.is_empty()
    }

    /// Where the speech bubble's top-center goes on screen: above the
    /// player, shifted by the camera. `None` while no bubble is showing.
    pub fn bubble_anchor(&self, player: Vec2, camera_x: f32) -> Option<Vec2> {
        self.bubble_active()
            .then(|| Vec2::new(player.x - camera_x, player.y - BUBBLE_RISE))
    }

    pub fn view(&self, time: f64) -> ChatView<'_> {
        let bubble = self.bubble_active().then(|| BubbleView {
            text: &self.sent,
            fraction: (self.bubble_timer / self.config.bubble_seconds).clamp(0.0, 1.0),
        });
        ChatView {
            open: self.is_open(),
            layout: self.layout(),
            draft: &self.draft,
            caret_visible: self.is_open() && caret_visible(time),
            char_count: format!("{}/{}", self.draft.len(), self.max_len()),
            backspace_held: self.backspace_held,
            bubble,
        }
    }

    // ── Text buffer ────────────────────────────────────────────────────────

    /// Append one character. Non-chat characters and anything past
    /// capacity are dropped; returns whether the draft changed.
    pub fn push_char(&mut self, ch: char) -> bool {
        if !is_chat_char(ch) || self.draft.len() >= self.max_len() {
            return false;
        }
        self.draft.push(ch);
        true
    }

    /// Delete the last character; a no-op on an empty draft.
    pub fn delete_last(&mut self) -> bool {
        self.draft.pop().is_some()
    }

    // ── Transitions ────────────────────────────────────────────────────────

    /// Closed → Open. Requests the soft keyboard.
    pub fn open(&mut self, keyboard: &mut dyn SoftKeyboard) {
        if self.is_open() {
            return;
        }
        self.phase = ChatPhase::Open;
        keyboard.show_soft_input();
        info!("chat opened");
    }

    /// Open → Closed without sending. Releases the keyboard and the finger.
    pub fn close(&mut self, keyboard: &mut dyn SoftKeyboard) {
        self.owner = None;
        self.backspace_held = false;
        self.backspace_hold_timer = 0.0;
        if !self.is_open() {
            return;
        }
        self.phase = ChatPhase::Closed;
        keyboard.hide_soft_input();
        info!("chat closed");
    }

    /// Commit the draft as the sent message and close.
    ///
    /// An empty draft just closes; the previous bubble (if any) is left
    /// alone. Returns whether a message was committed.
    pub fn send(&mut self, keyboard: &mut dyn SoftKeyboard) -> bool {
        let committed = !self.draft.is_empty();
        if committed {
            self.sent.clear();
            self.sent.push_str(&self.draft);
            self.draft.clear();
            self.bubble_timer = self.config.bubble_seconds;
            info!(len = self.sent.len(), "chat message sent");
        }
        self.close(keyboard);
        committed
    }

    // ── Touch handling ─────────────────────────────────────────────────────

    /// Offer a touch to the chat. Returns true when the chat consumes it,
    /// in which case no gameplay control may look at it this frame.
    ///
    /// Only presses trigger actions. A finger the chat already owns is
    /// consumed on every frame it stays down; any other finger is ignored
    /// while an owner is bound.
    pub fn handle_touch(&mut self, touch: &TouchPoint, keyboard: &mut dyn SoftKeyboard) -> bool {
        if let Some(owner) = self.owner {
            return owner == touch.id;
        }
        if !touch.pressed {
            return false;
        }

        match self.layout().hit(touch.position) {
            Some(ChatRegion::Backspace) => {
                self.delete_last();
                self.backspace_held = true;
                self.backspace_hold_timer = 0.0;
                self.owner = Some(touch.id);
                debug!(finger = touch.id.0, "backspace pressed");
            }
            Some(ChatRegion::Send) => {
                if self.is_open() {
                    self.send(keyboard);
                } else {
                    self.open(keyboard);
                    self.owner = Some(touch.id);
                }
            }
            Some(ChatRegion::InputBox) => {
                self.open(keyboard);
                self.owner = Some(touch.id);
            }
            // Tap-away: swallow the touch so it cannot also start a
            // gameplay gesture on the frame that closed the chat.
            None if self.is_open() => self.close(keyboard),
            None => return false,
        }
        true
    }

    /// Unbind the owning finger once it is no longer in the frame.
    pub fn release_missing(&mut self, frame: &TouchFrame) {
        if let Some(owner) = self.owner {
            if !frame.contains(owner) {
                self.release_finger(owner);
            }
        }
    }

    /// Unbind `finger` if it is the owner.
    pub fn release_finger(&mut self, finger: FingerId) {
        if self.owner == Some(finger) {
            self.owner = None;
            self.backspace_held = false;
            self.backspace_hold_timer = 0.0;
            debug!(finger = finger.0, "chat finger released");
        }
    }

    // ── Per-frame update ───────────────────────────────────────────────────

    /// Advance timers and, while open, consume this frame's text input.
    ///
    /// Text events apply in arrival order: characters append, Backspace
    /// deletes one character, Enter sends, Escape closes. Anything queued
    /// after Enter or Escape is dropped along with the rest of the frame.
    /// Held on-screen backspace deletes one character per call once held
    /// longer than the repeat delay.
    pub fn update(&mut self, dt: f32, input: &mut InputState, keyboard: &mut dyn SoftKeyboard) {
        if self.bubble_timer > 0.0 {
            self.bubble_timer = (self.bubble_timer - dt).max(0.0);
            if self.bubble_timer <= 0.0 {
                self.sent.clear();
                debug!("chat bubble expired");
            }
        }

        if !self.is_open() {
            return;
        }

        if self.backspace_held {
            self.backspace_hold_timer += dt;
            if self.backspace_hold_timer > self.config.backspace_repeat_delay {
                self.delete_last();
            }
        }

        let uppercase = input.uppercase();
        for event in std::mem::take(&mut input.text) {
            match event {
                TextEvent::Char(ch) => {
                    self.push_char(ch);
                }
                TextEvent::Key(KeyCode::Enter | KeyCode::NumpadEnter) => {
                    self.send(keyboard);
                    return;
                }
                TextEvent::Key(KeyCode::Escape) => {
                    self.close(keyboard);
                    return;
                }
                TextEvent::Key(KeyCode::Backspace) => {
                    self.delete_last();
                }
                TextEvent::Key(key) if self.config.keycode_fallback => {
                    if let Some(ch) = keycode_to_char(key, uppercase) {
                        self.push_char(ch);
                    }
                }
                TextEvent::Key(_) => {}
            }
        }
    }
}
