//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. Runtime
//! code is responsible for translating platform events into `InputEvent`s.
//! Events are applied on the event-loop thread between frames, so a frame
//! callback always reads a coherent snapshot without synchronization.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
