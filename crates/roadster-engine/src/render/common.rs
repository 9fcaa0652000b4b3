//! Shared GPU types and geometry used by the 3D renderers.

use bytemuck::{Pod, Zeroable};

use crate::device::DEPTH_FORMAT;

use super::globals::GlobalsUniform;

// ── depth ─────────────────────────────────────────────────────────────────

/// Depth state shared by every 3D pipeline: standard less-than test with
/// writes enabled.
pub(super) fn depth_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

// ── globals bind group ────────────────────────────────────────────────────

/// Returns the `wgpu` minimum binding size for the scene globals uniform.
///
/// `GlobalsUniform` is 160 bytes by construction, so the size is always
/// non-zero. Centralising this avoids `.unwrap()` at each renderer's
/// pipeline-creation site.
pub(super) fn globals_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<GlobalsUniform>() as u64)
        .expect("GlobalsUniform has non-zero size by construction")
}

/// Bind group layout with the scene globals at binding 0, visible to the
/// vertex stage. Shared shape between the box and axes pipelines.
pub(super) fn globals_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(globals_ubo_min_binding_size()),
            },
            count: None,
        }],
    })
}

// ── unit cube mesh ────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct CubeVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(pos: [f32; 3], normal: [f32; 3]) -> CubeVertex {
    CubeVertex { pos, normal }
}

/// Unit cube centered at the origin, four vertices per face so each face
/// carries its own flat normal.
///
/// ```text
///     v6----- v5
///    /|      /|
///   v1------v0|
///   | |     | |
///   | |v7---|-|v4
///   |/      |/
///   v2------v3
/// ```
pub(super) const CUBE_VERTICES: [CubeVertex; 24] = [
    // front (+z)
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    // right (+x)
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0]),
    // up (+y)
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    // left (-x)
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0]),
    // down (-y)
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    // back (-z)
    v([0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
];

pub(super) const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // right
    8, 9, 10, 8, 10, 11, // up
    12, 13, 14, 12, 14, 15, // left
    16, 17, 18, 16, 18, 19, // down
    20, 21, 22, 20, 22, 23, // back
];
