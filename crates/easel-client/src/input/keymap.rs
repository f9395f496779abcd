//! Native virtual key code translation.
//!
//! The native library reports macOS virtual key codes (`kVK_*`). Codes are
//! keyboard-position based (ANSI layout).

use super::types::Key;

pub(crate) fn map_virtual_keycode(code: i32) -> Key {
    match code {
        0x35 => Key::Escape,
        0x24 | 0x4C => Key::Enter,
        0x30 => Key::Tab,
        0x33 => Key::Backspace,
        0x31 => Key::Space,

        0x72 => Key::Insert,
        0x75 => Key::Delete,
        0x73 => Key::Home,
        0x77 => Key::End,
        0x74 => Key::PageUp,
        0x79 => Key::PageDown,

        0x7E => Key::ArrowUp,
        0x7D => Key::ArrowDown,
        0x7B => Key::ArrowLeft,
        0x7C => Key::ArrowRight,

        0x38 | 0x3C => Key::Shift,
        0x3B | 0x3E => Key::Control,
        0x3A | 0x3D => Key::Alt,
        0x37 | 0x36 => Key::Meta,
        0x39 => Key::CapsLock,

        0x00 => Key::A,
        0x0B => Key::B,
        0x08 => Key::C,
        0x02 => Key::D,
        0x0E => Key::E,
        0x03 => Key::F,
        0x05 => Key::G,
        0x04 => Key::H,
        0x22 => Key::I,
        0x26 => Key::J,
        0x28 => Key::K,
        0x25 => Key::L,
        0x2E => Key::M,
        0x2D => Key::N,
        0x1F => Key::O,
        0x23 => Key::P,
        0x0C => Key::Q,
        0x0F => Key::R,
        0x01 => Key::S,
        0x11 => Key::T,
        0x20 => Key::U,
        0x09 => Key::V,
        0x0D => Key::W,
        0x07 => Key::X,
        0x10 => Key::Y,
        0x06 => Key::Z,

        0x1D => Key::Digit0,
        0x12 => Key::Digit1,
        0x13 => Key::Digit2,
        0x14 => Key::Digit3,
        0x15 => Key::Digit4,
        0x17 => Key::Digit5,
        0x16 => Key::Digit6,
        0x1A => Key::Digit7,
        0x1C => Key::Digit8,
        0x19 => Key::Digit9,

        0x7A => Key::F1,
        0x78 => Key::F2,
        0x63 => Key::F3,
        0x76 => Key::F4,
        0x60 => Key::F5,
        0x61 => Key::F6,
        0x62 => Key::F7,
        0x64 => Key::F8,
        0x65 => Key::F9,
        0x6D => Key::F10,
        0x67 => Key::F11,
        0x6F => Key::F12,

        other => Key::Unknown(other),
    }
}
