use bytemuck::{Pod, Zeroable};
use warpcore::FrameParams;

/// CPU mirror of the uniform block in `shaders/warp.wgsl`: three vec4s,
/// std140-compatible.
#[repr(C, align(16))]
#[derive(Clone, Copy)]
pub(crate) struct WarpUniforms {
    /// surface width, surface height, aspect ratio, unused
    pub resolution: [f32; 4],
    /// amplitude, frequency, phase, elapsed seconds
    pub wave: [f32; 4],
    /// touch x, touch y, spring strength, has-texture flag
    pub touch: [f32; 4],
}

unsafe impl Zeroable for WarpUniforms {}
unsafe impl Pod for WarpUniforms {}

impl WarpUniforms {
    pub fn from_params(params: &FrameParams) -> Self {
        let (width, height) = params.surface_size;
        Self {
            resolution: [width, height, width / height.max(1.0), 0.0],
            wave: [
                params.wave.amplitude,
                params.wave.frequency,
                params.wave.phase,
                params.elapsed_seconds,
            ],
            touch: [
                params.touch_location[0],
                params.touch_location[1],
                params.touch_strength,
                if params.has_texture { 1.0 } else { 0.0 },
            ],
        }
    }
}
