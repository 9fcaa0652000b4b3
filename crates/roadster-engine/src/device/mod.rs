//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) and the depth buffer
//! - acquiring frames and providing encoders/views for rendering

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::{Gpu, DEPTH_FORMAT};
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
