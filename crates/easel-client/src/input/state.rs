use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{Event, Key, MouseButton};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Last reported pointer position.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies one event and records transitions into `frame`.
    ///
    /// Repeated presses of an already-held key/button are not transitions.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: Event) {
        match ev {
            Event::Key { code, pressed } => {
                let key = Key::from_native(code);
                if pressed {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                } else if self.keys_down.remove(&key) {
                    frame.keys_released.insert(key);
                }
            }

            Event::Mouse { x, y, button, pressed } => {
                self.pointer_pos = Some((x, y));

                let button = MouseButton::from_native(button);
                if pressed {
                    if self.buttons_down.insert(button) {
                        frame.buttons_pressed.insert(button);
                    }
                } else if self.buttons_down.remove(&button) {
                    frame.buttons_released.insert(button);
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_and_release_transitions() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, Event::Key { code: 0x31, pressed: true });
        st.apply_event(&mut fr, Event::Key { code: 0x31, pressed: true });
        assert!(st.key_down(Key::Space));
        assert_eq!(fr.keys_pressed.len(), 1);
        assert_eq!(fr.events.len(), 2);

        fr.clear();
        st.apply_event(&mut fr, Event::Key { code: 0x31, pressed: false });
        assert!(!st.key_down(Key::Space));
        assert!(fr.keys_released.contains(&Key::Space));
    }

    #[test]
    fn release_without_press_is_not_a_transition() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, Event::Mouse { x: 0.0, y: 0.0, button: 2, pressed: false });
        assert!(fr.buttons_released.is_empty());
        assert_eq!(st.pointer_pos, Some((0.0, 0.0)));
    }

    #[test]
    fn mouse_tracks_pointer_and_buttons() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, Event::Mouse { x: 12.5, y: 3.25, button: 0, pressed: true });
        assert_eq!(st.pointer_pos, Some((12.5, 3.25)));
        assert!(st.button_down(MouseButton::Left));
        assert!(fr.buttons_pressed.contains(&MouseButton::Left));
    }
}
