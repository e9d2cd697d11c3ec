//! wgpu/winit presentation for the interactive distortion engine: window
//! and event-loop plumbing, GPU surface negotiation, the warp render
//! pipeline, uniform packing, and background texture loading.

mod gpu;
mod runtime;
mod texture;
mod types;
mod window;

pub use runtime::FrameScheduler;
pub use types::RendererConfig;

use anyhow::Result;

/// Opens the window and runs the frame loop until the window closes or
/// Escape is pressed.
pub fn run(config: RendererConfig) -> Result<()> {
    window::run(config)
}
