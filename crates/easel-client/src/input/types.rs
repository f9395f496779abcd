use std::fmt;

use super::keymap;

/// One input event drained from the native queue.
///
/// Values are copied out of the native record before it is released, so an
/// `Event` owns no native memory.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    Key {
        /// Platform virtual key code, forwarded untouched.
        code: i32,
        pressed: bool,
    },
    Mouse {
        x: f32,
        y: f32,
        /// Native button index: 0 left, 1 right, 2 other.
        button: i32,
        pressed: bool,
    },
}

impl Event {
    /// Platform-agnostic key for a `Key` event.
    pub fn key(&self) -> Option<Key> {
        match *self {
            Event::Key { code, .. } => Some(Key::from_native(code)),
            Event::Mouse { .. } => None,
        }
    }

    /// Button for a `Mouse` event.
    pub fn mouse_button(&self) -> Option<MouseButton> {
        match *self {
            Event::Mouse { button, .. } => Some(MouseButton::from_native(button)),
            Event::Key { .. } => None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        match *self {
            Event::Key { pressed, .. } | Event::Mouse { pressed, .. } => pressed,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Event::Key { code, pressed } => {
                write!(f, "key {} ({code}) pressed={pressed}", Key::from_native(code))
            }
            Event::Mouse { x, y, button, pressed } => {
                write!(f, "mouse ({x}, {y}) button={button} pressed={pressed}")
            }
        }
    }
}

/// Keyboard key identifier.
///
/// Native codes without a variant map to `Key::Unknown` carrying the code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(i32),
}

impl Key {
    #[inline]
    pub fn from_native(code: i32) -> Self {
        keymap::map_virtual_keycode(code)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(i32),
}

impl MouseButton {
    pub fn from_native(button: i32) -> Self {
        match button {
            0 => MouseButton::Left,
            1 => MouseButton::Right,
            2 => MouseButton::Middle,
            other => MouseButton::Other(other),
        }
    }
}
