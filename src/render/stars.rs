use super::helpers::{self, DEPTH_FORMAT};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarsUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) intensity: f32,
    pub(crate) density: f32,
    pub(crate) exposure: f32,
    pub(crate) _pad: [f32; 2],
}

pub(crate) struct StarsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

/// Full-screen starfield drawn first in the scene pass. It ignores and does
/// not write depth, so planets always draw over it.
pub(crate) fn create_stars_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> StarsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
    });
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "stars_uniforms",
        std::mem::size_of::<StarsUniforms>(),
    );
    let (bgl, bind_group) = helpers::uniform_bind_group(
        device,
        "stars_bg",
        wgpu::ShaderStages::FRAGMENT,
        &uniform_buffer,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("stars_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_stars"),
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

    StarsResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
