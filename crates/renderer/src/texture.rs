use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{info, warn};
use wgpu::util::DeviceExt;

use crate::gpu::PipelineLayouts;

/// RGBA8 pixels handed back by a decode thread.
pub(crate) struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

/// Decodes images on named background threads and hands the results to the
/// frame loop over a channel. Decode failures log a warning and leave the
/// current texture untouched.
pub(crate) struct TextureLoader {
    sender: Sender<DecodedImage>,
    receiver: Receiver<DecodedImage>,
}

impl TextureLoader {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn request(&self, path: PathBuf) {
        let sender = self.sender.clone();
        let spawn_result = thread::Builder::new()
            .name("warpview-decode".into())
            .spawn(move || match image::open(&path) {
                Ok(decoded) => {
                    let rgba = decoded.to_rgba8();
                    let (width, height) = rgba.dimensions();
                    let _ = sender.send(DecodedImage {
                        pixels: rgba.into_raw(),
                        width,
                        height,
                        path,
                    });
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to decode image");
                }
            });
        if let Err(err) = spawn_result {
            warn!(error = %err, "failed to spawn decode thread");
        }
    }

    /// Polled once per event-loop turn; non-blocking.
    pub fn poll(&self) -> Option<DecodedImage> {
        self.receiver.try_recv().ok()
    }
}

/// GPU-resident source image plus the readiness flag the shader branches
/// on. Starts as a 1x1 placeholder so the bind group layout is satisfied
/// before any image arrives; `ready` flips only after a full upload.
pub(crate) struct TextureBinding {
    sampler: wgpu::Sampler,
    bind_group: wgpu::BindGroup,
    ready: bool,
}

impl TextureBinding {
    pub fn new_placeholder(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layouts: &PipelineLayouts,
    ) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("source sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group = create_bind_group(
            device,
            queue,
            layouts,
            &sampler,
            &[200, 200, 200, 255],
            1,
            1,
            Some("placeholder texture"),
        );

        Self {
            sampler,
            bind_group,
            ready: false,
        }
    }

    /// Uploads a decoded image and rebuilds the bind group. The readiness
    /// flag flips only after the upload is queued in full, so no frame ever
    /// samples a partially-initialized texture.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layouts: &PipelineLayouts,
        decoded: &DecodedImage,
    ) {
        self.bind_group = create_bind_group(
            device,
            queue,
            layouts,
            &self.sampler,
            &decoded.pixels,
            decoded.width,
            decoded.height,
            Some("source texture"),
        );
        self.ready = true;
        info!(
            path = %decoded.path.display(),
            width = decoded.width,
            height = decoded.height,
            "image uploaded"
        );
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    pub fn ready(&self) -> bool {
        self.ready
    }
}

#[allow(clippy::too_many_arguments)]
fn create_bind_group(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layouts: &PipelineLayouts,
    sampler: &wgpu::Sampler,
    pixels: &[u8],
    width: u32,
    height: u32,
    label: Option<&str>,
) -> wgpu::BindGroup {
    let texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label,
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        pixels,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label,
        layout: &layouts.texture_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
