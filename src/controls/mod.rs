//! Touch controls: chat row, thumbstick and jump button, plus the arbiter
//! that decides which of them owns each finger.

pub mod arbiter;
pub mod chat;
pub mod joystick;
pub mod jump;

pub use arbiter::{ControlOutput, InputArbiter, Owner};
pub use chat::{caret_visible, ChatController, ChatLayout, ChatPhase, ChatRegion, ChatView};
pub use joystick::VirtualJoystick;
pub use jump::JumpControl;
