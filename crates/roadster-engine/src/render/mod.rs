//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines,
//! buffers).
//!
//! Convention:
//! - geometry is in world units; vertex shaders apply model/view/projection
//! - all passes share the depth buffer; visibility comes from depth testing,
//!   not draw order

mod common;
mod ctx;
mod globals;

pub mod axes;
pub mod boxes;

pub use ctx::{RenderCtx, RenderTarget};
pub use globals::SceneGlobals;
