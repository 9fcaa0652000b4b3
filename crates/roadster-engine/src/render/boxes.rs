use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::scene::DrawList;

use super::common::{
    depth_state, globals_bind_group_layout, CubeVertex, CUBE_INDICES, CUBE_VERTICES,
};
use super::globals::GlobalsUniform;
use super::{RenderCtx, RenderTarget, SceneGlobals};

/// Instanced unit-cube renderer.
///
/// Every box in the draw list becomes one instance of the shared cube mesh;
/// the model and normal matrices, material color, and lighting flag travel
/// as per-instance vertex attributes, so a whole frame's boxes go out in a
/// single draw call. Shading is the classic per-vertex directional diffuse.
#[derive(Default)]
pub struct BoxRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    globals_ubo: Option<wgpu::Buffer>,

    cube_vbo: Option<wgpu::Buffer>,
    cube_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl BoxRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all boxes in `draw_list` into `target`.
    ///
    /// The color and depth attachments are loaded, not cleared; the frame's
    /// clear pass has already run.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        globals: &SceneGlobals,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        let instances: Vec<BoxInstance> = draw_list
            .boxes()
            .iter()
            .map(|cmd| BoxInstance {
                model: cmd.model.to_cols_array_2d(),
                normal: cmd.normal.to_cols_array_2d(),
                // w carries the lighting-enabled flag.
                color: [
                    cmd.color.r,
                    cmd.color.g,
                    cmd.color.b,
                    if cmd.lit { 1.0 } else { 0.0 },
                ],
            })
            .collect();

        if instances.is_empty() {
            return;
        }

        // Mutating methods must happen before borrowing pipeline/buffers
        // immutably.
        self.write_globals(ctx, globals);
        self.ensure_instance_capacity(ctx, instances.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(cube_vbo) = self.cube_vbo.as_ref() else { return };
        let Some(cube_ibo) = self.cube_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("roadster box pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, cube_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(cube_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/box.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("roadster box shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout = globals_bind_group_layout(ctx.device, "roadster box bgl");

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("roadster box pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("roadster box pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[CubeVertex::layout(), BoxInstance::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None, // opaque geometry
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: Some(depth_state()),
                multisample: wgpu::MultisampleState::default(),

                multiview_mask: None,
                cache: None,
            });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.globals_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.globals_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let globals_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("roadster box globals ubo"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("roadster box bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_ubo.as_entire_binding(),
            }],
        });

        self.globals_ubo = Some(globals_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.cube_vbo.is_some() && self.cube_ibo.is_some() {
            return;
        }

        self.cube_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("roadster cube vbo"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.cube_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("roadster cube ibo"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_globals(&mut self, ctx: &RenderCtx<'_>, globals: &SceneGlobals) {
        let Some(ubo) = self.globals_ubo.as_ref() else { return };
        ctx.queue
            .write_buffer(ubo, 0, bytemuck::bytes_of(&globals.to_uniform()));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required_instances: usize) {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required_instances.next_power_of_two().max(32);
        let new_size = (new_cap * std::mem::size_of::<BoxInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("roadster box instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct BoxInstance {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
    /// rgb = material color, w = lighting-enabled flag.
    color: [f32; 4],
}

impl BoxInstance {
    const ATTRS: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        2 => Float32x4, // model col 0
        3 => Float32x4, // model col 1
        4 => Float32x4, // model col 2
        5 => Float32x4, // model col 3
        6 => Float32x4, // normal col 0
        7 => Float32x4, // normal col 1
        8 => Float32x4, // normal col 2
        9 => Float32x4, // normal col 3
        10 => Float32x4 // color + lit flag
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
