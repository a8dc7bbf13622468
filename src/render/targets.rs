use super::helpers;
use wgpu;

/// Depth buffer matching the surface size and sample count.
///
/// Recreated whenever the canvas backing store changes size so the depth
/// attachment always matches the swapchain texture.
pub(crate) struct DepthTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_depth_texture(device, width, height);
        Self { tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.tex.destroy();
        (self.tex, self.view) = helpers::create_depth_texture(device, width, height);
    }
}

/// Multisampled color buffer the scene pass draws into.
pub(crate) struct MsaaTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    format: wgpu::TextureFormat,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let (tex, view) = helpers::create_msaa_color_texture(device, width, height, format);
        Self { tex, view, format }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.tex.destroy();
        (self.tex, self.view) =
            helpers::create_msaa_color_texture(device, width, height, self.format);
    }
}
