use glam::Mat4;

use crate::paint::Color;

/// One unit-cube draw: a world transform, its normal transform, a material
/// color, and the shading path.
///
/// The normal transform is the model's inverse-transpose, supplied by the
/// scene producer; the renderer uploads both matrices verbatim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxCmd {
    pub model: Mat4,
    pub normal: Mat4,
    pub color: Color,
    /// `true` routes through the directional-light diffuse path; `false`
    /// passes the color through unshaded.
    pub lit: bool,
}
