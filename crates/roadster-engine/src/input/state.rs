use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and
    /// writes transition deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear the held set. Avoids stuck keys
                    // when the release event goes to another window.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    let inserted = self.keys_down.insert(key);
                    if inserted {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    let removed = self.keys_down.remove(&key);
                    if removed {
                        frame.keys_released.insert(key);
                    }
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            code: 0,
            repeat: false,
        }
    }

    #[test]
    fn press_and_release_track_held_set() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::W, KeyState::Pressed));
        assert!(state.key_down(Key::W));
        assert!(frame.keys_pressed.contains(&Key::W));

        state.apply_event(&mut frame, key_event(Key::W, KeyState::Released));
        assert!(!state.key_down(Key::W));
        assert!(frame.keys_released.contains(&Key::W));
    }

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::F, KeyState::Pressed));
        frame.clear();
        // OS key-repeat delivers Pressed again while already held.
        state.apply_event(&mut frame, key_event(Key::F, KeyState::Pressed));
        assert!(state.key_down(Key::F));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::W, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.key_down(Key::W));
    }
}
