use std::sync::Arc;

use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use warpcore::FrameParams;

use crate::texture::{DecodedImage, TextureBinding, TextureLoader};

use super::context::GpuContext;
use super::pipeline::{PipelineLayouts, WarpPipeline};
use super::uniforms::WarpUniforms;

/// Aggregates the GPU side of one window: surface, warp pipeline, and the
/// current source texture.
pub(crate) struct GpuState {
    context: GpuContext,
    layouts: PipelineLayouts,
    pipeline: WarpPipeline,
    texture: TextureBinding,
    loader: TextureLoader,
}

impl GpuState {
    pub(crate) fn new(window: Arc<Window>, vsync: bool) -> Result<Self> {
        let context = GpuContext::new(window, vsync)?;
        let layouts = PipelineLayouts::new(&context.device);
        let pipeline = WarpPipeline::new(&context.device, &layouts, context.surface_format);
        let texture = TextureBinding::new_placeholder(&context.device, &context.queue, &layouts);

        Ok(Self {
            context,
            layouts,
            pipeline,
            texture,
            loader: TextureLoader::new(),
        })
    }

    pub(crate) fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
    }

    pub(crate) fn reconfigure_surface(&self) {
        self.context.reconfigure();
    }

    /// Starts a background decode; the result lands via [`Self::poll_uploads`].
    pub(crate) fn load_image(&self, path: std::path::PathBuf) {
        self.loader.request(path);
    }

    /// Uploads any freshly decoded image; called once per event-loop turn.
    pub(crate) fn poll_uploads(&mut self) {
        while let Some(decoded) = self.loader.poll() {
            self.upload(&decoded);
        }
    }

    pub(crate) fn has_texture(&self) -> bool {
        self.texture.ready()
    }

    fn upload(&mut self, decoded: &DecodedImage) {
        self.texture.upload(
            &self.context.device,
            &self.context.queue,
            &self.layouts,
            decoded,
        );
    }

    /// Draws one frame with the given parameter record.
    pub(crate) fn render(&mut self, params: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let uniforms = WarpUniforms::from_params(params);
        self.context.queue.write_buffer(
            &self.pipeline.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

        let frame = self.context.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("warp encoder"),
                });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("warp pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_bind_group(0, &self.pipeline.uniform_bind_group, &[]);
            pass.set_bind_group(1, self.texture.bind_group(), &[]);
            pass.draw(0..3, 0..1);
        }

        self.context.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
