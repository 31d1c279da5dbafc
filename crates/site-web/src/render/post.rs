use super::helpers;
use super::targets::RenderTargets;
use site_core::scene::PostUniforms;

/// Bloom chain: bright pass, separable blur, composite onto the swapchain.
///
/// The horizontal and vertical blur each read their own uniform buffer, so
/// the queue writes for one frame never overwrite each other.
pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex + sampler + uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex + sampler
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) base_uniforms: wgpu::Buffer,
    pub(crate) blur_h_uniforms: wgpu::Buffer,
    pub(crate) blur_v_uniforms: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

/// Bind groups that reference the current render targets.
pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) blur_h_from_a: wgpu::BindGroup,
    pub(crate) blur_v_from_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            helpers::uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = helpers::make_post_pipeline(
        device,
        "bright_pipeline",
        &pl_bright_blur,
        post_shader,
        "fs_bright",
        bloom_format,
        None,
    );
    let blur_pipeline = helpers::make_post_pipeline(
        device,
        "blur_pipeline",
        &pl_bright_blur,
        post_shader,
        "fs_blur",
        bloom_format,
        None,
    );
    let composite_pipeline = helpers::make_post_pipeline(
        device,
        "composite_pipeline",
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        sampler,
        base_uniforms: helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms"),
        blur_h_uniforms: helpers::uniform_buffer::<PostUniforms>(device, "blur_h_uniforms"),
        blur_v_uniforms: helpers::uniform_buffer::<PostUniforms>(device, "blur_v_uniforms"),
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

impl PostResources {
    fn source_group(
        &self,
        device: &wgpu::Device,
        label: &str,
        view: &wgpu::TextureView,
        uniforms: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniforms.as_entire_binding(),
                },
            ],
        })
    }

    pub(crate) fn bind_groups(&self, device: &wgpu::Device, targets: &RenderTargets) -> PostBindGroups {
        PostBindGroups {
            hdr: self.source_group(device, "bg_hdr", &targets.hdr_view, &self.base_uniforms),
            blur_h_from_a: self.source_group(device, "bg_blur_h", &targets.bloom_a_view, &self.blur_h_uniforms),
            blur_v_from_b: self.source_group(device, "bg_blur_v", &targets.bloom_b_view, &self.blur_v_uniforms),
            bloom_a_only: device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("bg_bloom_a_only"),
                layout: &self.bgl1,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            }),
        }
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
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
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
