use std::collections::HashSet;

use super::types::Key;

/// Per-frame input transitions.
///
/// `InputState` provides the current held set; `InputFrame` provides the
/// keys that went down or up since the previous frame, for edge-triggered
/// actions.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
