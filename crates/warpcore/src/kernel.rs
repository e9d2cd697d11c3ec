//! Scalar mirror of the WGSL distortion kernel.
//!
//! The fragment shader in the renderer crate applies the same constants in
//! the same order; keeping this copy on the CPU makes every stage of the
//! per-pixel remapping testable without a GPU device. The two must be kept
//! in lockstep when either changes.

use crate::engine::FrameParams;

/// Bulge falloff radius in UV units.
pub const BULGE_RADIUS: f32 = 0.3;
/// Fraction of the bulge displacement applied to the sample coordinate.
pub const BULGE_PULL: f32 = 0.5;
/// Gain converting the wave value into horizontal breathing scale.
pub const WAVE_SCALE_GAIN: f32 = 4.0;
/// Flat color emitted while no image is loaded.
pub const PLACEHOLDER_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// Result of remapping one output pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelOutput {
    /// No image loaded; the pixel takes [`PLACEHOLDER_COLOR`].
    Placeholder,
    /// Sample the source image at this UV with bilinear filtering and
    /// edge-clamped addressing.
    Sample([f32; 2]),
}

/// Hermite falloff of the bulge: 1 at the touch point, 0 at [`BULGE_RADIUS`].
///
/// Written as an explicit `h(clamp(1 - d/R))` rather than a descending-edge
/// `smoothstep`, which GLSL and WGSL leave formally undefined.
pub fn bulge_influence(dist: f32) -> f32 {
    let t = (1.0 - dist / BULGE_RADIUS).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Flooring fractional wrap applied only once a component leaves `[0,1]`,
/// so `-0.2` maps to `0.8` and an exact `1.0` passes through.
fn wrap(value: f32) -> f32 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        value - value.floor()
    }
}

/// Remaps one normalized output coordinate through the bulge and wave
/// stages. `uv` has origin top-left; inputs outside `[0,1]` are valid.
pub fn warp_uv(uv: [f32; 2], params: &FrameParams) -> KernelOutput {
    if !params.has_texture {
        return KernelOutput::Placeholder;
    }

    let [mut x, mut y] = uv;
    let [touch_x, touch_y] = params.touch_location;

    // Bulge: pull the sample coordinate toward the touch point, which reads
    // from closer pixels and magnifies. Negative strength (release
    // overshoot) momentarily pushes instead.
    let dx = x - touch_x;
    let dy = y - touch_y;
    let dist = (dx * dx + dy * dy).sqrt();
    let influence = bulge_influence(dist);
    x -= dx * influence * params.touch_strength * BULGE_PULL;
    y -= dy * influence * params.touch_strength * BULGE_PULL;

    // Wave: horizontal shift plus breathing scale about the center column.
    let wave = params.wave.frequency.mul_add(y, params.wave.phase + params.elapsed_seconds);
    let wave = wave.sin();
    let shift = wave * params.wave.amplitude;
    let scale = 1.0 + wave * params.wave.amplitude * WAVE_SCALE_GAIN;
    x = (x - 0.5) * scale + 0.5;
    x += shift;

    KernelOutput::Sample([wrap(x), wrap(y)])
}
