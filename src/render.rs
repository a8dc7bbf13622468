use crate::constants::{CLEAR_COLOR, PLACEHOLDER_TEXEL, STAR_COLOR};
use globe_core::{
    generate_sphere, MeshData, ATMOSPHERE_COLOR, ATMOSPHERE_WGSL, GLOBE_HEIGHT_SEGMENTS,
    GLOBE_RADIUS, GLOBE_WGSL, GLOBE_WIDTH_SEGMENTS, STARS_WGSL,
};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod mesh;
mod mips;
mod targets;
mod texture;

use helpers::{MeshPipelineDesc, ADDITIVE_BLENDING};
use mesh::{GpuMesh, GpuPoints, MeshPass, MeshUniforms, MESH_VERTEX_LAYOUT, POINT_VERTEX_LAYOUT};
use targets::{DepthTarget, MsaaTarget};
use texture::GlobeTexture;

/// Per-frame transforms handed over by the frame loop.
pub struct SceneFrame {
    pub view: Mat4,
    pub view_proj: Mat4,
    pub globe_model: Mat4,
    pub atmosphere_model: Mat4,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    msaa: MsaaTarget,

    // The globe and atmosphere share one sphere mesh
    sphere: GpuMesh,
    stars: GpuPoints,
    globe_pass: MeshPass,
    atmosphere_pass: MeshPass,
    stars_pass: MeshPass,
    globe_texture: GlobeTexture,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        star_positions: &[[f32; 3]],
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, config.width, config.height);
        let msaa = MsaaTarget::new(&device, config.width, config.height, format);

        let sphere_data: MeshData =
            generate_sphere(GLOBE_RADIUS, GLOBE_WIDTH_SEGMENTS, GLOBE_HEIGHT_SEGMENTS);
        let sphere = GpuMesh::upload(&device, "sphere", &sphere_data);
        let stars = GpuPoints::upload(&device, "stars", star_positions);
        log::info!(
            "[gpu] format={:?} sphere tris={} stars={}",
            format,
            sphere_data.triangle_count(),
            stars.count
        );

        let globe_texture = GlobeTexture::placeholder(&device, &queue, PLACEHOLDER_TEXEL);
        let uniform_bgl = mesh::create_uniform_bgl(&device);

        let globe_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(GLOBE_WGSL.into()),
        });
        let atmosphere_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("atmosphere_shader"),
            source: wgpu::ShaderSource::Wgsl(ATMOSPHERE_WGSL.into()),
        });
        let stars_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(STARS_WGSL.into()),
        });

        let pl_textured = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_globe"),
            bind_group_layouts: &[&uniform_bgl, &globe_texture.bgl],
            push_constant_ranges: &[],
        });
        let pl_plain = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_plain"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });

        let globe_pipeline = helpers::make_mesh_pipeline(
            &device,
            &MeshPipelineDesc {
                label: "globe_pipeline",
                layout: &pl_textured,
                shader: &globe_shader,
                color_format: format,
                vertex_buffers: &[MESH_VERTEX_LAYOUT],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: None,
                depth_write: true,
            },
        );
        // Back faces only, so the glow rings the silhouette instead of covering the globe
        let atmosphere_pipeline = helpers::make_mesh_pipeline(
            &device,
            &MeshPipelineDesc {
                label: "atmosphere_pipeline",
                layout: &pl_plain,
                shader: &atmosphere_shader,
                color_format: format,
                vertex_buffers: &[MESH_VERTEX_LAYOUT],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Front),
                blend: Some(ADDITIVE_BLENDING),
                depth_write: false,
            },
        );
        let stars_pipeline = helpers::make_mesh_pipeline(
            &device,
            &MeshPipelineDesc {
                label: "stars_pipeline",
                layout: &pl_plain,
                shader: &stars_shader,
                color_format: format,
                vertex_buffers: &[POINT_VERTEX_LAYOUT],
                topology: wgpu::PrimitiveTopology::PointList,
                cull_mode: None,
                blend: None,
                depth_write: true,
            },
        );

        let globe_pass = MeshPass::new(&device, "globe_uniforms", &uniform_bgl, globe_pipeline);
        let atmosphere_pass = MeshPass::new(
            &device,
            "atmosphere_uniforms",
            &uniform_bgl,
            atmosphere_pipeline,
        );
        let stars_pass = MeshPass::new(&device, "stars_uniforms", &uniform_bgl, stars_pipeline);

        Ok(Self {
            width: config.width,
            height: config.height,
            surface,
            device,
            queue,
            config,
            depth,
            msaa,
            sphere,
            stars,
            globe_pass,
            atmosphere_pass,
            stars_pass,
            globe_texture,
            clear_color: CLEAR_COLOR,
        })
    }

    /// Replace the placeholder with a decoded RGBA8 image.
    pub fn set_globe_texture(&mut self, rgba: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
        let max_dim = self.device.limits().max_texture_dimension_2d;
        if width == 0 || height == 0 || width > max_dim || height > max_dim {
            anyhow::bail!("texture {}x{} outside 1..={}", width, height, max_dim);
        }
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            anyhow::bail!(
                "texture data is {} bytes, expected {}x{}x4",
                rgba.len(),
                width,
                height
            );
        }
        let base = image::RgbaImage::from_raw(width, height, rgba.to_vec())
            .ok_or_else(|| anyhow::anyhow!("texture buffer does not fit {}x{}", width, height))?;
        self.globe_texture.upload(&self.device, &self.queue, base);
        Ok(())
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
            self.depth.recreate(&self.device, width, height);
            self.msaa.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, frame: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let [ar, ag, ab] = ATMOSPHERE_COLOR;
        self.globe_pass.write(
            &self.queue,
            &MeshUniforms::new(frame.view, frame.view_proj, frame.globe_model, [ar, ag, ab, 1.0]),
        );
        self.atmosphere_pass.write(
            &self.queue,
            &MeshUniforms::new(
                frame.view,
                frame.view_proj,
                frame.atmosphere_model,
                [ar, ag, ab, 1.0],
            ),
        );
        self.stars_pass.write(
            &self.queue,
            &MeshUniforms::new(frame.view, frame.view_proj, Mat4::IDENTITY, STAR_COLOR),
        );

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
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
                    view: &self.msaa.view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        // only the resolved image is kept
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.stars_pass.pipeline);
            rpass.set_bind_group(0, &self.stars_pass.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.stars.vertex_buffer.slice(..));
            rpass.draw(0..self.stars.count, 0..1);

            rpass.set_pipeline(&self.globe_pass.pipeline);
            rpass.set_bind_group(0, &self.globe_pass.bind_group, &[]);
            rpass.set_bind_group(1, &self.globe_texture.bind_group, &[]);
            self.sphere.draw(&mut rpass);

            // Additive glow last so it blends over stars and globe edge
            rpass.set_pipeline(&self.atmosphere_pass.pipeline);
            rpass.set_bind_group(0, &self.atmosphere_pass.bind_group, &[]);
            self.sphere.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
