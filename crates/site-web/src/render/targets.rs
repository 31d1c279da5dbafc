use super::helpers;
use crate::constants::HDR_DOWNSCALE;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen colour targets: the full-resolution HDR scene and two reduced
/// bloom ping-pong buffers.
pub(crate) struct RenderTargets {
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) bloom_size: (u32, u32),
    _textures: [wgpu::Texture; 3],
}

pub(crate) fn bloom_size(width: u32, height: u32) -> (u32, u32) {
    (
        (width.max(1) / HDR_DOWNSCALE).max(1),
        (height.max(1) / HDR_DOWNSCALE).max(1),
    )
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width.max(1), height.max(1), HDR_FORMAT, usage);
        let (bw, bh) = bloom_size(width, height);
        let (bloom_a, bloom_a_view) = helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, usage);
        let (bloom_b, bloom_b_view) = helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, usage);
        Self {
            hdr_view,
            bloom_a_view,
            bloom_b_view,
            bloom_size: (bw, bh),
            _textures: [hdr_tex, bloom_a, bloom_b],
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
