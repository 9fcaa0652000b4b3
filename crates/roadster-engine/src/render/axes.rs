use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::common::{depth_state, globals_bind_group_layout};
use super::globals::GlobalsUniform;
use super::{RenderCtx, RenderTarget, SceneGlobals};

/// Half-length of each world axis line.
const AXIS_EXTENT: f32 = 20.0;

/// World coordinate axes renderer: three white lines through the origin,
/// depth-tested but unlit. Geometry is static; only the camera uniforms
/// change per frame.
#[derive(Default)]
pub struct AxesRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    globals_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
}

impl AxesRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the axes into `target`. Attachments are loaded, not cleared.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        globals: &SceneGlobals,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx);
        self.write_globals(ctx, globals);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("roadster axes pass"),
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
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..AXES_VERTICES.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/axes.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("roadster axes shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout = globals_bind_group_layout(ctx.device, "roadster axes bgl");

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("roadster axes pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("roadster axes pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[LineVertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
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

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_none() {
            self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("roadster axes vbo"),
                contents: bytemuck::cast_slice(&AXES_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            }));
        }

        if self.bind_group.is_some() && self.globals_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let globals_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("roadster axes globals ubo"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("roadster axes bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_ubo.as_entire_binding(),
            }],
        });

        self.globals_ubo = Some(globals_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_globals(&mut self, ctx: &RenderCtx<'_>, globals: &SceneGlobals) {
        let Some(ubo) = self.globals_ubo.as_ref() else { return };
        ctx.queue
            .write_buffer(ubo, 0, bytemuck::bytes_of(&globals.to_uniform()));
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineVertex {
    pos: [f32; 3],
    color: [f32; 3],
}

impl LineVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

const AXES_VERTICES: [LineVertex; 6] = [
    LineVertex { pos: [-AXIS_EXTENT, 0.0, 0.0], color: WHITE },
    LineVertex { pos: [AXIS_EXTENT, 0.0, 0.0], color: WHITE },
    LineVertex { pos: [0.0, AXIS_EXTENT, 0.0], color: WHITE },
    LineVertex { pos: [0.0, -AXIS_EXTENT, 0.0], color: WHITE },
    LineVertex { pos: [0.0, 0.0, -AXIS_EXTENT], color: WHITE },
    LineVertex { pos: [0.0, 0.0, AXIS_EXTENT], color: WHITE },
];
