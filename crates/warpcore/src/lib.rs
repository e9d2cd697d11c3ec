//! Interactive distortion engine: spring-driven bulge strength, pointer
//! interaction state, auto-oscillating wave parameters, and a scalar mirror
//! of the GPU distortion kernel.
//!
//! Everything in this crate is plain math and state transitions with no GPU
//! or windowing dependencies, so the per-pixel formula and the spring
//! dynamics can be exercised directly in unit tests.

mod engine;
mod kernel;
mod spring;
mod touch;
mod wave;

pub use engine::{EngineTuning, FrameClock, FrameParams, TimeSample, WarpEngine};
pub use kernel::{
    bulge_influence, warp_uv, KernelOutput, BULGE_PULL, BULGE_RADIUS, PLACEHOLDER_COLOR,
    WAVE_SCALE_GAIN,
};
pub use spring::{SpringState, SpringTuning};
pub use touch::InteractionState;
pub use wave::{WaveParams, WaveTuning};
