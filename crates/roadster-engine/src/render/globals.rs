use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Per-frame scene parameters shared by all 3D passes: camera matrices and
/// the single directional light.
#[derive(Debug, Copy, Clone)]
pub struct SceneGlobals {
    pub view: Mat4,
    pub proj: Mat4,
    pub light_color: Vec3,
    /// World-space direction toward the light; normalized on upload.
    pub light_dir: Vec3,
}

impl Default for SceneGlobals {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
            light_color: Vec3::ONE,
            light_dir: Vec3::new(1.0, 3.0, 4.0),
        }
    }
}

impl SceneGlobals {
    pub(super) fn to_uniform(self) -> GlobalsUniform {
        let dir = self.light_dir.normalize_or_zero();
        GlobalsUniform {
            view: self.view.to_cols_array_2d(),
            proj: self.proj.to_cols_array_2d(),
            light_color: [self.light_color.x, self.light_color.y, self.light_color.z, 0.0],
            light_dir: [dir.x, dir.y, dir.z, 0.0],
        }
    }
}

/// std140-compatible uniform block mirrored by the WGSL `Globals` struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct GlobalsUniform {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub light_color: [f32; 4],
    pub light_dir: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_direction_is_normalized_on_upload() {
        let u = SceneGlobals::default().to_uniform();
        let len = (u.light_dir[0].powi(2) + u.light_dir[1].powi(2) + u.light_dir[2].powi(2)).sqrt();
        assert!((len - 1.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_block_size_is_stable() {
        // Two mat4x4 + two vec4: 160 bytes, 16-byte aligned.
        assert_eq!(std::mem::size_of::<GlobalsUniform>(), 160);
    }
}
