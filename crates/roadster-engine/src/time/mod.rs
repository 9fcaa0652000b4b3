//! Time subsystem.
//!
//! Frame timing (`FrameClock`) and the fixed-timestep simulation pacing
//! (`TickAccumulator`), decoupled from the runtime so both are testable.
//!
//! Intended usage:
//! - one `FrameClock` per render loop; call `tick()` once per presented frame
//! - one `TickAccumulator` per simulation; feed it each frame's delta time
//!   and run the integrator once per tick it reports

mod frame_clock;
mod tick;

pub use frame_clock::{FrameClock, FrameTime};
pub use tick::TickAccumulator;
