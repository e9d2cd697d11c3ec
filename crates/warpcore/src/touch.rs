/// Pointer/touch interaction state in normalized surface coordinates.
///
/// Device-pixel coordinates arrive from the windowing layer and are divided
/// by the current surface size, so `position` lives in `[0,1]` with origin
/// top-left while the pointer is over the surface. No clamping is applied;
/// a pointer dragged past the surface edge produces out-of-range values the
/// distortion kernel absorbs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    position: [f32; 2],
    engaged: bool,
    surface: (f32, f32),
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            position: [0.5, 0.5],
            engaged: false,
            surface: (1.0, 1.0),
        }
    }
}

impl InteractionState {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        let mut state = Self::default();
        state.set_surface_size(surface_width, surface_height);
        state
    }

    /// Updates the rectangle used to normalize device coordinates. Called on
    /// every resize; zero-sized surfaces are guarded against.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.surface = (width.max(1) as f32, height.max(1) as f32);
    }

    /// Press: engages the interaction and records the contact point.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.engaged = true;
        self.position = self.normalize(x, y);
    }

    /// Move: tracks the pointer only while engaged, matching a drag gesture.
    pub fn update(&mut self, x: f32, y: f32) {
        if self.engaged {
            self.position = self.normalize(x, y);
        }
    }

    /// Release: disengages but keeps the last position, so the bulge stays
    /// anchored where the pointer let go while its strength decays.
    pub fn end(&mut self) {
        self.engaged = false;
    }

    pub fn position(&self) -> [f32; 2] {
        self.position
    }

    pub fn engaged(&self) -> bool {
        self.engaged
    }

    fn normalize(&self, x: f32, y: f32) -> [f32; 2] {
        [x / self.surface.0, y / self.surface.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_engages_and_normalizes() {
        let mut state = InteractionState::new(200, 100);
        state.begin(50.0, 25.0);
        assert!(state.engaged());
        assert_eq!(state.position(), [0.25, 0.25]);
    }

    #[test]
    fn update_is_ignored_while_disengaged() {
        let mut state = InteractionState::new(100, 100);
        state.update(10.0, 10.0);
        assert_eq!(state.position(), [0.5, 0.5]);

        state.begin(20.0, 20.0);
        state.update(40.0, 60.0);
        assert_eq!(state.position(), [0.4, 0.6]);
    }

    #[test]
    fn end_retains_last_position() {
        let mut state = InteractionState::new(100, 100);
        state.begin(80.0, 30.0);
        state.end();
        assert!(!state.engaged());
        assert_eq!(state.position(), [0.8, 0.3]);

        // Further moves no longer track.
        state.update(0.0, 0.0);
        assert_eq!(state.position(), [0.8, 0.3]);
    }

    #[test]
    fn positions_outside_the_surface_are_not_clamped() {
        let mut state = InteractionState::new(100, 100);
        state.begin(150.0, -20.0);
        assert_eq!(state.position(), [1.5, -0.2]);
    }

    #[test]
    fn zero_surface_does_not_divide_by_zero() {
        let mut state = InteractionState::new(0, 0);
        state.begin(5.0, 5.0);
        assert_eq!(state.position(), [5.0, 5.0]);
    }
}
