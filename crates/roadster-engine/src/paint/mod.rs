//! Material color type shared by renderers and the clear pass.

mod color;

pub use color::Color;
