/// Rates and bases for the self-running wave animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveTuning {
    /// Resting horizontal shift amplitude.
    pub base_amplitude: f32,
    /// How far the amplitude sways around its base.
    pub amplitude_sway: f32,
    /// Sway rate of the amplitude in radians per second.
    pub amplitude_sway_rate: f32,
    /// Resting vertical wave frequency.
    pub base_frequency: f32,
    /// How far the frequency sways around its base.
    pub frequency_sway: f32,
    /// Sway rate of the frequency in radians per second.
    pub frequency_sway_rate: f32,
    /// Phase advance in radians per second.
    pub phase_rate: f32,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            base_amplitude: 0.08,
            amplitude_sway: 0.05,
            amplitude_sway_rate: 0.5,
            base_frequency: 10.0,
            frequency_sway: 5.0,
            frequency_sway_rate: 0.3,
            phase_rate: 2.0,
        }
    }
}

/// Per-frame wave parameters handed to the distortion kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl WaveParams {
    /// Evaluates the auto-oscillation at elapsed time `t`. Pure function of
    /// `t` and the tuning; interaction never feeds into it.
    pub fn at(t: f32, tuning: &WaveTuning) -> Self {
        let amplitude =
            tuning.base_amplitude + (t * tuning.amplitude_sway_rate).sin() * tuning.amplitude_sway;
        let frequency =
            tuning.base_frequency + (t * tuning.frequency_sway_rate).sin() * tuning.frequency_sway;
        Self {
            amplitude,
            frequency,
            phase: t * tuning.phase_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_zero_yields_base_values() {
        let params = WaveParams::at(0.0, &WaveTuning::default());
        assert!((params.amplitude - 0.08).abs() < 1e-6);
        assert!((params.frequency - 10.0).abs() < 1e-6);
        assert!((params.phase - 0.0).abs() < 1e-6);
    }

    #[test]
    fn sway_peaks_at_quarter_period() {
        let tuning = WaveTuning::default();
        // sin(t * 0.5) peaks at t = pi.
        let params = WaveParams::at(std::f32::consts::PI, &tuning);
        assert!((params.amplitude - 0.13).abs() < 1e-6);
    }

    #[test]
    fn phase_advances_linearly() {
        let tuning = WaveTuning::default();
        let params = WaveParams::at(1.25, &tuning);
        assert!((params.phase - 2.5).abs() < 1e-6);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let tuning = WaveTuning::default();
        assert_eq!(WaveParams::at(7.3, &tuning), WaveParams::at(7.3, &tuning));
    }
}
