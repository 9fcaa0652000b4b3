//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one frame
//! - preserve the submission order (depth testing resolves visibility)
//! - keep allocations reusable across frames

mod cmd;
mod list;

pub use cmd::BoxCmd;
pub use list::DrawList;
