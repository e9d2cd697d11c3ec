use std::time::Instant;

use crate::spring::{SpringState, SpringTuning};
use crate::touch::InteractionState;
use crate::wave::{WaveParams, WaveTuning};

/// Snapshot of the animation clock for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Elapsed seconds since the first frame.
    pub seconds: f32,
    /// Monotonic frame counter for the running session.
    pub frame_index: u64,
}

/// Elapsed-time source for the frame loop. The epoch is captured on the
/// first sample, so the first frame always reports zero seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    epoch: Option<Instant>,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, now: Instant) -> TimeSample {
        let epoch = *self.epoch.get_or_insert(now);
        let sample = TimeSample {
            seconds: now.saturating_duration_since(epoch).as_secs_f32(),
            frame_index: self.frame,
        };
        self.frame = self.frame.saturating_add(1);
        sample
    }
}

/// Combined tuning for one engine instance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineTuning {
    pub spring: SpringTuning,
    pub wave: WaveTuning,
}

/// The full per-frame parameter record handed to the distortion kernel,
/// host-side via [`crate::warp_uv`] and GPU-side as a uniform block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub elapsed_seconds: f32,
    pub wave: WaveParams,
    pub surface_size: (f32, f32),
    pub has_texture: bool,
    pub touch_location: [f32; 2],
    pub touch_strength: f32,
}

/// Owns all mutable distortion state and advances it once per frame.
///
/// Input adapters call the pointer methods from the windowing event loop;
/// the frame driver calls [`WarpEngine::tick`] once per redraw. Both run on
/// the same thread, so no synchronization is involved.
#[derive(Debug, Default)]
pub struct WarpEngine {
    touch: InteractionState,
    spring: SpringState,
    clock: FrameClock,
    tuning: EngineTuning,
}

impl WarpEngine {
    pub fn new(tuning: EngineTuning, surface_width: u32, surface_height: u32) -> Self {
        Self {
            touch: InteractionState::new(surface_width, surface_height),
            spring: SpringState::new(),
            clock: FrameClock::new(),
            tuning,
        }
    }

    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.touch.set_surface_size(width, height);
    }

    /// Press at device coordinates.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.touch.begin(x, y);
    }

    /// Move at device coordinates; tracked only while engaged.
    pub fn update(&mut self, x: f32, y: f32) {
        self.touch.update(x, y);
    }

    /// Release; the last touch location stays anchored.
    pub fn end(&mut self) {
        self.touch.end();
    }

    pub fn touch_strength(&self) -> f32 {
        self.spring.position
    }

    /// Advances one frame: samples the clock, steps the spring against the
    /// current engagement, evaluates the wave oscillation, and assembles the
    /// kernel parameter set.
    pub fn tick(&mut self, now: Instant, surface_size: (u32, u32), has_texture: bool) -> FrameParams {
        let time = self.clock.sample(now);
        self.spring.step(self.touch.engaged(), &self.tuning.spring);
        let wave = WaveParams::at(time.seconds, &self.tuning.wave);

        FrameParams {
            elapsed_seconds: time.seconds,
            wave,
            surface_size: (surface_size.0.max(1) as f32, surface_size.1.max(1) as f32),
            has_texture,
            touch_location: self.touch.position(),
            touch_strength: self.spring.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clock_starts_at_zero_and_never_decreases() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        let first = clock.sample(start);
        assert_eq!(first.seconds, 0.0);
        assert_eq!(first.frame_index, 0);

        let mut last = first.seconds;
        for step in 1..=10 {
            let sample = clock.sample(start + Duration::from_millis(step * 16));
            assert!(sample.seconds >= last);
            assert_eq!(sample.frame_index, step);
            last = sample.seconds;
        }
    }

    #[test]
    fn clock_tolerates_a_timestamp_before_the_epoch() {
        let mut clock = FrameClock::new();
        let start = Instant::now() + Duration::from_secs(1);
        clock.sample(start);
        let sample = clock.sample(start - Duration::from_millis(5));
        assert_eq!(sample.seconds, 0.0);
    }

    #[test]
    fn tick_assembles_the_frame_parameter_record() {
        let mut engine = WarpEngine::new(EngineTuning::default(), 400, 300);
        engine.begin(100.0, 150.0);

        let start = Instant::now();
        let params = engine.tick(start, (400, 300), true);
        assert_eq!(params.elapsed_seconds, 0.0);
        assert_eq!(params.touch_location, [0.25, 0.5]);
        assert_eq!(params.surface_size, (400.0, 300.0));
        assert!(params.has_texture);
        assert!(params.touch_strength > 0.0, "spring stepped while engaged");
    }

    #[test]
    fn press_then_release_traces_the_spring_scenario() {
        let mut engine = WarpEngine::new(EngineTuning::default(), 100, 100);
        let start = Instant::now();
        let frame = Duration::from_millis(16);

        engine.begin(20.0, 20.0);
        let mut now = start;
        let mut params = engine.tick(now, (100, 100), true);
        for _ in 0..61 {
            now += frame;
            params = engine.tick(now, (100, 100), true);
        }
        assert!(params.touch_strength > 1.0);

        engine.end();
        for _ in 0..(3 * 62) {
            now += frame;
            params = engine.tick(now, (100, 100), true);
        }
        assert!(params.touch_strength.abs() < 0.01);
        // Anchor point survives the release.
        assert_eq!(params.touch_location, [0.2, 0.2]);
    }
}
