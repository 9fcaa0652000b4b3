//! Simulation core for the roadster demo.
//!
//! Everything here is plain math over `glam` types: the hierarchical
//! transform stack, the per-tick vehicle integrator, the fixed car part
//! list, and the chase camera. The engine crate consumes the output; this
//! crate never touches the GPU or the window system.

pub mod camera;
pub mod car;
pub mod stack;
pub mod vehicle;

pub use camera::ChaseCamera;
pub use car::{scene_parts, Part};
pub use stack::MatrixStack;
pub use vehicle::{step, Controls, DoorToggle, TickConfig, VehicleState};
