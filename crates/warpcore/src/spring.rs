use tracing::warn;

/// Constants for the two-regime driven oscillator behind the bulge strength.
///
/// Pressing uses a heavily damped spring pulled toward a high target, so the
/// bulge grows with a slow viscous rise and no overshoot. Releasing swaps in
/// a stiff, lightly damped spring aimed back at zero, which rings through a
/// few visible bounces before settling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTuning {
    /// Stiffness while the pointer is held down.
    pub engaged_stiffness: f32,
    /// Damping while the pointer is held down (high: no overshoot).
    pub engaged_damping: f32,
    /// Strength the spring is driven toward while engaged.
    pub engaged_target: f32,
    /// Stiffness after release (high: fast snap-back).
    pub released_stiffness: f32,
    /// Damping after release (low: oscillatory decay).
    pub released_damping: f32,
    /// Integration step in seconds. This is a nominal 60 Hz step applied
    /// once per frame regardless of the real frame interval, so perceived
    /// spring speed tracks the frame rate away from 60 Hz.
    pub timestep: f32,
    /// Absolute position beyond which the state is considered diverged and
    /// reset to rest.
    pub reset_threshold: f32,
}

impl Default for SpringTuning {
    fn default() -> Self {
        Self {
            engaged_stiffness: 50.0,
            engaged_damping: 20.0,
            engaged_target: 2.0,
            released_stiffness: 150.0,
            released_damping: 4.0,
            timestep: 0.016,
            reset_threshold: 10.0,
        }
    }
}

/// 1-D damped spring state; `position` is the bulge strength fed to the
/// distortion kernel. Zero means no bulge; values above 1 and brief negative
/// excursions after release are normal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
}

impl SpringState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the spring by one semi-implicit Euler step. The regime is
    /// selected solely by `engaged`; the released regime drives toward zero.
    pub fn step(&mut self, engaged: bool, tuning: &SpringTuning) {
        let (stiffness, damping, target) = if engaged {
            (
                tuning.engaged_stiffness,
                tuning.engaged_damping,
                tuning.engaged_target,
            )
        } else {
            (tuning.released_stiffness, tuning.released_damping, 0.0)
        };

        let dt = tuning.timestep;
        let force = stiffness * (target - self.position) - damping * self.velocity;
        self.velocity += force * dt;
        self.position += self.velocity * dt;

        if self.position.abs() > tuning.reset_threshold {
            warn!(
                position = self.position,
                velocity = self.velocity,
                "spring state diverged; resetting to rest"
            );
            self.position = 0.0;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKS_PER_SECOND: usize = 62; // 1.0 / 0.016, truncated

    fn run_ticks(state: &mut SpringState, engaged: bool, ticks: usize, tuning: &SpringTuning) {
        for _ in 0..ticks {
            state.step(engaged, tuning);
        }
    }

    #[test]
    fn engaged_spring_rises_toward_target_without_overshoot() {
        let tuning = SpringTuning::default();
        let mut state = SpringState::new();
        let mut max_position = 0.0_f32;
        for _ in 0..2000 {
            state.step(true, &tuning);
            max_position = max_position.max(state.position);
        }
        assert!(max_position <= tuning.engaged_target * 1.01);
        assert!((state.position - tuning.engaged_target).abs() < 1e-3);
    }

    #[test]
    fn one_second_press_drives_strength_above_one() {
        let tuning = SpringTuning::default();
        let mut state = SpringState::new();
        run_ticks(&mut state, true, TICKS_PER_SECOND, &tuning);
        assert!(state.position > 1.0);
        // Pinned against an offline evaluation of the difference equations.
        assert!((state.position - 1.8646).abs() < 1e-3);
    }

    #[test]
    fn released_spring_oscillates_with_decaying_envelope() {
        let tuning = SpringTuning::default();
        let mut state = SpringState::new();
        run_ticks(&mut state, true, TICKS_PER_SECOND, &tuning);

        let mut positions = Vec::new();
        let mut sign_changes = 0;
        let mut prev_velocity = state.velocity;
        for _ in 0..400 {
            state.step(false, &tuning);
            if prev_velocity != 0.0 && (state.velocity < 0.0) != (prev_velocity < 0.0) {
                sign_changes += 1;
            }
            prev_velocity = state.velocity;
            positions.push(state.position.abs());
        }
        assert!(sign_changes >= 1, "release must ring at least once");

        let peaks: Vec<f32> = positions
            .windows(3)
            .filter(|w| w[1] >= w[0] && w[1] >= w[2] && w[1] > 1e-6)
            .map(|w| w[1])
            .collect();
        assert!(peaks.len() >= 3);
        for pair in peaks.windows(2) {
            assert!(pair[1] < pair[0], "oscillation envelope must shrink");
        }
    }

    #[test]
    fn released_spring_settles_near_zero_within_three_seconds() {
        let tuning = SpringTuning::default();
        let mut state = SpringState::new();
        run_ticks(&mut state, true, TICKS_PER_SECOND, &tuning);
        run_ticks(&mut state, false, 3 * TICKS_PER_SECOND, &tuning);
        assert!(state.position.abs() < 0.01);
        // And it stays settled.
        for _ in 0..TICKS_PER_SECOND {
            state.step(false, &tuning);
            assert!(state.position.abs() < 0.01);
        }
    }

    #[test]
    fn divergent_state_resets_to_rest_in_both_regimes() {
        let tuning = SpringTuning::default();
        for engaged in [true, false] {
            let mut state = SpringState {
                position: 11.0,
                velocity: 0.0,
            };
            state.step(engaged, &tuning);
            assert_eq!(state, SpringState::default());
        }
    }
}
