mod helpers;
mod post;
mod targets;

use crate::cancel::CancelToken;
use post::{PostBindGroups, PostResources};
use site_core::scene::{OceanUniforms, PostUniforms, SolidUniforms};
use site_core::{Mesh, MeshVertex, SceneState};
use std::cell::RefCell;
use targets::{RenderTargets, HDR_FORMAT};
use web_sys as web;
use wgpu::util::DeviceExt;

/// One mesh on the GPU with its own uniform block.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    fn new<U: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::BindGroupLayout,
        vertices: &[MeshVertex],
        indices: &[u32],
        dynamic: bool,
    ) -> Self {
        let mut usage = wgpu::BufferUsages::VERTEX;
        if dynamic {
            usage |= wgpu::BufferUsages::COPY_DST;
        }
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniforms = helpers::uniform_buffer::<U>(device, label);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            uniforms,
            bind_group,
        }
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

fn mesh_vertices(mesh: &Mesh) -> Vec<MeshVertex> {
    let mut out = Vec::with_capacity(mesh.vertex_count());
    mesh.vertices_into(&mut out);
    out
}

/// WebGPU renderer for the 3D background: terrain wireframes, the animated
/// ocean wireframe and the sun, drawn into an HDR target and bloomed onto
/// the canvas.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    line_pipeline: wgpu::RenderPipeline,
    sun_pipeline: wgpu::RenderPipeline,
    ocean_pipeline: wgpu::RenderPipeline,
    terrain: Vec<GpuMesh>,
    ocean: GpuMesh,
    ocean_scratch: Vec<MeshVertex>,
    sun: GpuMesh,

    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,

    width: u32,
    height: u32,
}

impl GpuState {
    /// Acquire an adapter and device for `canvas`, then upload `scene`. The
    /// scene is only borrowed after the last await. No device is requested
    /// once `cancel` has fired.
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        scene: &RefCell<SceneState>,
        cancel: &CancelToken,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        if cancel.is_cancelled() {
            anyhow::bail!("background unmounted before device request");
        }
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;

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
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);

        let solid_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("solid_bgl"),
            entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let solid_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("solid_pl"),
            bind_group_layouts: &[&solid_bgl],
            push_constant_ranges: &[],
        });
        let terrain_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("terrain_shader"),
            source: wgpu::ShaderSource::Wgsl(site_core::TERRAIN_WGSL.into()),
        });
        let ocean_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ocean_shader"),
            source: wgpu::ShaderSource::Wgsl(site_core::OCEAN_WGSL.into()),
        });
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(site_core::POST_WGSL.into()),
        });

        let line_pipeline = helpers::make_mesh_pipeline(
            &device,
            "terrain_pipeline",
            &solid_pl,
            &terrain_shader,
            wgpu::PrimitiveTopology::LineList,
            HDR_FORMAT,
        );
        let sun_pipeline = helpers::make_mesh_pipeline(
            &device,
            "sun_pipeline",
            &solid_pl,
            &terrain_shader,
            wgpu::PrimitiveTopology::TriangleList,
            HDR_FORMAT,
        );
        let ocean_pipeline = helpers::make_mesh_pipeline(
            &device,
            "ocean_pipeline",
            &solid_pl,
            &ocean_shader,
            wgpu::PrimitiveTopology::LineList,
            HDR_FORMAT,
        );

        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_groups = post.bind_groups(&device, &targets);

        let scene = scene.borrow();
        let terrain: Vec<GpuMesh> = scene
            .terrain()
            .iter()
            .map(|t| {
                GpuMesh::new::<SolidUniforms>(
                    &device,
                    t.zone.name(),
                    &solid_bgl,
                    &mesh_vertices(&t.mesh),
                    &t.mesh.line_indices(),
                    false,
                )
            })
            .collect();
        let ocean_mesh = scene.ocean().mesh();
        let ocean_scratch = mesh_vertices(ocean_mesh);
        let ocean = GpuMesh::new::<OceanUniforms>(
            &device,
            "ocean",
            &solid_bgl,
            &ocean_scratch,
            &ocean_mesh.line_indices(),
            true,
        );
        let sun = GpuMesh::new::<SolidUniforms>(
            &device,
            "sun",
            &solid_bgl,
            &mesh_vertices(scene.sun()),
            &scene.sun().indices,
            false,
        );
        log::info!(
            "[gpu] ready {}x{} {:?}, {} terrain zones",
            width,
            height,
            format,
            terrain.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            line_pipeline,
            sun_pipeline,
            ocean_pipeline,
            terrain,
            ocean,
            ocean_scratch,
            sun,
            targets,
            post,
            post_groups,
            width,
            height,
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
            self.targets.recreate(&self.device, width, height);
            self.post_groups = self.post.bind_groups(&self.device, &self.targets);
        }
    }

    /// Reconfigure after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn upload(&mut self, scene: &mut SceneState) {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        for (mesh, u) in self.terrain.iter().zip(scene.terrain_uniforms(aspect)) {
            self.queue.write_buffer(&mesh.uniforms, 0, bytemuck::bytes_of(&u));
        }
        self.queue
            .write_buffer(&self.sun.uniforms, 0, bytemuck::bytes_of(&scene.sun_uniforms(aspect)));
        self.queue.write_buffer(
            &self.ocean.uniforms,
            0,
            bytemuck::bytes_of(&scene.ocean_uniforms(aspect)),
        );
        if scene.ocean_mut().take_dirty() {
            scene.ocean().mesh().vertices_into(&mut self.ocean_scratch);
            self.queue.write_buffer(
                &self.ocean.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.ocean_scratch),
            );
        }

        let bloom = scene.bloom();
        let (bw, bh) = self.targets.bloom_size;
        let pack = |texel: [f32; 2]| PostUniforms {
            texel,
            threshold: bloom.threshold,
            strength: bloom.strength,
        };
        self.queue
            .write_buffer(&self.post.base_uniforms, 0, bytemuck::bytes_of(&pack([0.0, 0.0])));
        self.queue.write_buffer(
            &self.post.blur_h_uniforms,
            0,
            bytemuck::bytes_of(&pack([1.0 / bw as f32, 0.0])),
        );
        self.queue.write_buffer(
            &self.post.blur_v_uniforms,
            0,
            bytemuck::bytes_of(&pack([0.0, 1.0 / bh as f32])),
        );
    }

    pub fn render(&mut self, scene: &mut SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.upload(scene);

        let [r, g, b] = scene.clear_color();
        let clear = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Back to front: sun, land, then the translucent sea over both.
            rpass.set_pipeline(&self.sun_pipeline);
            self.sun.draw(&mut rpass);
            rpass.set_pipeline(&self.line_pipeline);
            for zone in &self.terrain {
                zone.draw(&mut rpass);
            }
            rpass.set_pipeline(&self.ocean_pipeline);
            self.ocean.draw(&mut rpass);
        }

        let black = wgpu::Color::BLACK;
        let groups = &self.post_groups;
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            black,
            &self.post.bright_pipeline,
            &groups.hdr,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            black,
            &self.post.blur_pipeline,
            &groups.blur_h_from_a,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            black,
            &self.post.blur_pipeline,
            &groups.blur_v_from_b,
            None,
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            clear,
            &self.post.composite_pipeline,
            &groups.hdr,
            Some(&groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
