use super::helpers::{self, DEPTH_FORMAT};
use crate::core::{uv_sphere, MeshVertex, PlanetStyle};
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    // xyz: unit vector towards the light, w: directional intensity
    pub(crate) light_dir: [f32; 4],
    // x: ambient intensity, y: exposure, z: roughness, w: metalness
    pub(crate) lighting: [f32; 4],
    // xyz: camera eye, w: time
    pub(crate) camera_pos: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PlanetInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) base_seed: [f32; 4],
    pub(crate) accent_banding: [f32; 4],
    pub(crate) highlight: [f32; 4],
}

impl PlanetInstance {
    pub(crate) fn new(model: Mat4, style: &PlanetStyle) -> Self {
        let [br, bg, bb] = style.base;
        let [ar, ag, ab] = style.accent;
        let [hr, hg, hb] = style.highlight;
        Self {
            model: model.to_cols_array_2d(),
            base_seed: [br, bg, bb, style.seed],
            accent_banding: [ar, ag, ab, style.banding],
            highlight: [hr, hg, hb, 0.0],
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4,
    8 => Float32x4,
    9 => Float32x4
];

pub(crate) struct PlanetResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_capacity: usize,
}

pub(crate) fn create_planet_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    segments: u32,
    instance_capacity: usize,
) -> PlanetResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("planets_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PLANETS_WGSL.into()),
    });
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "planets_uniforms",
        std::mem::size_of::<SceneUniforms>(),
    );
    let (bgl, bind_group) = helpers::uniform_bind_group(
        device,
        "planets_bg",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        &uniform_buffer,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("planets_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("planets_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_planet"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<PlanetInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_planet"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let mesh = uv_sphere(segments);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("planet_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("planet_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("planet_instances"),
        size: (std::mem::size_of::<PlanetInstance>() * instance_capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    PlanetResources {
        pipeline,
        uniform_buffer,
        bind_group,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        instance_buffer,
        instance_capacity: instance_capacity.max(1),
    }
}
