//! On-screen controls and chat widgets.

use glam::Vec2;

use crate::controls::chat::{ChatView, BUBBLE_PADDING};
use crate::controls::{JumpControl, VirtualJoystick};
use crate::engine::Color;
use crate::geometry::Rect;

use super::{font, DrawList};

pub const DRAFT_SCALE: f32 = 2.0;
pub const LABEL_SCALE: f32 = 2.0;
pub const COUNT_SCALE: f32 = 1.0;
pub const BUBBLE_SCALE: f32 = 2.0;

const INPUT_FILL: Color = Color([0.78, 0.78, 0.78, 1.0]);
const BACKSPACE_IDLE: Color = Color([0.9, 0.16, 0.22, 1.0]);
const BACKSPACE_HELD: Color = Color([0.75, 0.13, 0.22, 1.0]);
const BUBBLE_FILL: Color = Color([0.96, 0.96, 0.96, 0.95]);

/// Longest suffix of `text` that fits in `width` pixels at `scale`.
pub fn visible_tail(text: &str, width: f32, scale: f32) -> &str {
    let advance = font::ADVANCE as f32 * scale;
    let fits = if advance > 0.0 { (width / advance).floor().max(0.0) as usize } else { 0 };
    let skip = text.len().saturating_sub(fits);
    text.get(skip..).unwrap_or("")
}

pub fn draw_joystick(list: &mut DrawList, stick: &VirtualJoystick, knob_radius: f32) {
    list.fill_circle(stick.base(), stick.radius(), Color::DARK_GRAY.fade(0.5));
    list.fill_circle(stick.knob(), knob_radius, Color::GRAY);
}

/// Green while a jump is available, grey otherwise.
pub fn draw_jump_button(list: &mut DrawList, jump: &JumpControl) {
    let color = if jump.can_jump() {
        Color::GREEN.fade(0.6)
    } else {
        Color::GRAY.fade(0.4)
    };
    list.fill_circle(jump.center(), jump.radius(), color);
    list.text_centered(jump.center(), "JUMP", LABEL_SCALE, Color::BLACK);
}

/// The chat row: input box, caret and counter, toggle and backspace keys.
pub fn draw_chat(list: &mut DrawList, view: &ChatView<'_>) {
    let layout = &view.layout;
    let input = layout.input_box;

    list.fill_rect(input, INPUT_FILL);
    list.stroke_rect(input, 2.0, if view.open { Color::BLACK } else { Color::GRAY });

    let text_pos = Vec2::new(input.x + 5.0, input.y + (input.h - font::GLYPH_H as f32 * DRAFT_SCALE) * 0.5);
    let shown = visible_tail(view.draft, input.w - 12.0, DRAFT_SCALE);
    list.text(text_pos, shown, DRAFT_SCALE, Color::BLACK);

    let send = layout.send_button;
    list.fill_rect(send, if view.open { Color::GREEN } else { Color::DARK_BLUE });
    list.stroke_rect(send, 2.0, Color::BLACK);
    list.text_centered(send.center(), view.send_label(), LABEL_SCALE, Color::WHITE);

    if let Some(back) = layout.backspace_button {
        list.fill_rect(back, if view.backspace_held { BACKSPACE_HELD } else { BACKSPACE_IDLE });
        list.stroke_rect(back, 2.0, Color::BLACK);
        list.text_centered(back.center(), "<-", LABEL_SCALE, Color::WHITE);
    }

    if view.open {
        list.text(
            Vec2::new(input.x, input.y - 12.0),
            &view.char_count,
            COUNT_SCALE,
            Color::DARK_GRAY,
        );
        if view.caret_visible {
            let text_w = DrawList::measure_text(shown, DRAFT_SCALE).x;
            list.fill_rect(Rect::new(text_pos.x + text_w + 1.0, input.y + 8.0, 2.0, input.h - 16.0), Color::BLACK);
        }
    }
}

/// Speech bubble whose top edge is centered on `anchor`.
pub fn draw_bubble(list: &mut DrawList, text: &str, anchor: Vec2) {
    let size = DrawList::measure_text(text, BUBBLE_SCALE);
    let bubble = Rect::new(
        anchor.x - size.x * 0.5 - BUBBLE_PADDING,
        anchor.y,
        size.x + BUBBLE_PADDING * 2.0,
        size.y + BUBBLE_PADDING * 2.0,
    );
    list.fill_rect(bubble, BUBBLE_FILL);
    list.stroke_rect(bubble, 2.0, Color::BLACK);
    list.text(
        Vec2::new(bubble.x + BUBBLE_PADDING, bubble.y + BUBBLE_PADDING),
        text,
        BUBBLE_SCALE,
        Color::BLACK,
    );
}
