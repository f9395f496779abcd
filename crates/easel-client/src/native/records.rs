use std::mem::{align_of, offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::coords::{Color, Point};
use crate::input::Event;

/// Tag of a keyboard record.
pub const EVENT_KEY: i32 = 0;
/// Tag of a pointer-move record.
pub const EVENT_MOUSE_MOVE: i32 = 1;
/// Tag of a button press/release record.
pub const EVENT_MOUSE_CLICK: i32 = 2;

/// Event record as laid out by the native library.
///
/// `{ type: i32, keyCode: i32, mouseX: f32, mouseY: f32, mouseButton: i32,
/// isPressed: bool }`. The C `bool` is read as a byte so that a non-0/1 value
/// written by foreign code can never produce an invalid Rust `bool`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RawEvent {
    pub kind: i32,
    pub key_code: i32,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub mouse_button: i32,
    pub is_pressed: u8,
    pub _pad: [u8; 3],
}

const _: () = {
    assert!(size_of::<RawEvent>() == 24);
    assert!(align_of::<RawEvent>() == 4);
    assert!(offset_of!(RawEvent, kind) == 0);
    assert!(offset_of!(RawEvent, key_code) == 4);
    assert!(offset_of!(RawEvent, mouse_x) == 8);
    assert!(offset_of!(RawEvent, mouse_y) == 12);
    assert!(offset_of!(RawEvent, mouse_button) == 16);
    assert!(offset_of!(RawEvent, is_pressed) == 20);

    assert!(size_of::<Color>() == 16);
    assert!(offset_of!(Color, r) == 0);
    assert!(offset_of!(Color, g) == 4);
    assert!(offset_of!(Color, b) == 8);
    assert!(offset_of!(Color, a) == 12);

    assert!(size_of::<Point>() == 8);
    assert!(offset_of!(Point, x) == 0);
    assert!(offset_of!(Point, y) == 4);
};

impl RawEvent {
    pub fn key(code: i32, pressed: bool) -> Self {
        Self {
            kind: EVENT_KEY,
            key_code: code,
            is_pressed: pressed as u8,
            ..Self::default()
        }
    }

    pub fn mouse(kind: i32, x: f32, y: f32, button: i32, pressed: bool) -> Self {
        Self {
            kind,
            mouse_x: x,
            mouse_y: y,
            mouse_button: button,
            is_pressed: pressed as u8,
            ..Self::default()
        }
    }

    /// Copies the record into a safe [`Event`].
    ///
    /// Returns `None` for an unrecognized tag.
    pub fn decode(&self) -> Option<Event> {
        let pressed = self.is_pressed != 0;
        match self.kind {
            EVENT_KEY => Some(Event::Key {
                code: self.key_code,
                pressed,
            }),
            EVENT_MOUSE_MOVE | EVENT_MOUSE_CLICK => Some(Event::Mouse {
                x: self.mouse_x,
                y: self.mouse_y,
                button: self.mouse_button,
                pressed,
            }),
            _ => None,
        }
    }
}
