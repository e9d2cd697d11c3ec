use std::path::PathBuf;

use warpcore::EngineTuning;

/// Immutable configuration passed to the renderer at start-up.
///
/// `RendererConfig` mirrors CLI flags and the optional tuning file: which
/// image to load first, how large the window should be, and how frames are
/// paced.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Initial window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Optional image decoded and uploaded at start-up; more can be dropped
    /// onto the window at runtime.
    pub image: Option<PathBuf>,
    /// Optional FPS cap; None renders every vsync callback.
    pub fps_cap: Option<f32>,
    /// Whether presentation waits for vertical sync.
    pub vsync: bool,
    /// Spring and wave constants driving the distortion engine.
    pub tuning: EngineTuning,
}

impl Default for RendererConfig {
    /// Provides a 720p vsynced configuration with no image selected.
    fn default() -> Self {
        Self {
            surface_size: (1280, 720),
            image: None,
            fps_cap: None,
            vsync: true,
            tuning: EngineTuning::default(),
        }
    }
}
