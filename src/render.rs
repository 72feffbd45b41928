use crate::constants::*;
use crate::core::{Camera, PlanetStyle, SceneSnapshot, PLANET_RADIUS, PLANET_SEGMENTS};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod planets;
mod stars;

use planets::{create_planet_resources, PlanetInstance, PlanetResources, SceneUniforms};
use stars::{create_stars_resources, StarsResources, StarsUniforms};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    stars: StarsResources,
    planets: PlanetResources,
    styles: Vec<PlanetStyle>,

    width: u32,
    height: u32,
    camera: Camera,
    time_accum: f32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        camera: Camera,
        styles: Vec<PlanetStyle>,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let stars = create_stars_resources(&device, format);
        let planets = create_planet_resources(&device, format, PLANET_SEGMENTS, styles.len());
        log::info!(
            "[gpu] surface {}x{} format={:?} planets={}",
            width,
            height,
            format,
            styles.len()
        );

        let mut camera = camera;
        camera.set_viewport(width, height);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
            stars,
            planets,
            styles,
            width,
            height,
            camera,
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self.depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
            self.camera.set_viewport(width, height);
        }
    }

    fn write_uniforms(&self, snapshot: &SceneSnapshot) {
        let light = Vec3::from_array(DIRECTIONAL_POSITION).normalize();
        let eye = self.camera.eye;
        let scene = SceneUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            light_dir: [light.x, light.y, light.z, DIRECTIONAL_INTENSITY],
            lighting: [
                AMBIENT_INTENSITY,
                TONE_MAPPING_EXPOSURE,
                PLANET_ROUGHNESS,
                PLANET_METALNESS,
            ],
            camera_pos: [eye.x, eye.y, eye.z, self.time_accum],
        };
        self.queue
            .write_buffer(&self.planets.uniform_buffer, 0, bytemuck::bytes_of(&scene));

        let stars = StarsUniforms {
            resolution: [self.width as f32, self.height as f32],
            time: self.time_accum,
            intensity: BACKGROUND_INTENSITY,
            density: STAR_DENSITY,
            exposure: TONE_MAPPING_EXPOSURE,
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.stars.uniform_buffer, 0, bytemuck::bytes_of(&stars));

        let instances: Vec<PlanetInstance> = snapshot
            .planet_transforms(PLANET_RADIUS)
            .into_iter()
            .zip(self.styles.iter())
            .take(self.planets.instance_capacity)
            .map(|(model, style)| PlanetInstance::new(model, style))
            .collect();
        self.queue.write_buffer(
            &self.planets.instance_buffer,
            0,
            bytemuck::cast_slice(&instances),
        );
    }

    pub fn render(&mut self, dt_sec: f32, snapshot: &SceneSnapshot) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.write_uniforms(snapshot);
        let instance_count = snapshot
            .positions
            .len()
            .min(self.styles.len())
            .min(self.planets.instance_capacity) as u32;

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.stars.pipeline);
            rpass.set_bind_group(0, &self.stars.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            if instance_count > 0 {
                rpass.set_pipeline(&self.planets.pipeline);
                rpass.set_bind_group(0, &self.planets.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.planets.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.planets.instance_buffer.slice(..));
                rpass.set_index_buffer(
                    self.planets.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(0..self.planets.index_count, 0, 0..instance_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
