//! Input Collector
//!
//! Reference [`InputSource`] implementation: the embedding application
//! pushes move axes, camera-look deltas and the jump-held flag as they
//! arrive, and `sample()` produces the per-frame snapshot. Camera deltas
//! accumulate between samples and drain on each sample, so look input is
//! never lost or double-counted across frames of uneven length.

use glam::Vec2;

use crate::input::{InputSample, InputSource};

/// Accumulates application input between frames.
///
/// Held state (move axes, jump) persists until explicitly changed; the
/// camera delta is an accumulator that resets every sample.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    /// Current move axes (x = strafe right, y = forward)
    move_axes: Vec2,
    /// Camera look delta accumulated since the last sample
    camera_delta: Vec2,
    /// Whether the jump button is currently held
    jump_held: bool,
}

impl InputCollector {
    /// Create a collector with all inputs released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current move axes. Values are passed through as-is; the
    /// motion core clamps the vector to unit length before use.
    pub fn set_move_axes(&mut self, axes: Vec2) {
        self.move_axes = axes;
    }

    /// Accumulate a camera look delta (positive x = look right,
    /// positive y = look down).
    pub fn add_camera_delta(&mut self, delta_x: f32, delta_y: f32) {
        self.camera_delta.x += delta_x;
        self.camera_delta.y += delta_y;
    }

    /// Set whether the jump button is held.
    pub fn set_jump_held(&mut self, held: bool) {
        self.jump_held = held;
    }

    /// Get the current move axes.
    pub fn move_axes(&self) -> Vec2 {
        self.move_axes
    }

    /// Get the camera delta accumulated so far without draining it.
    pub fn pending_camera_delta(&self) -> Vec2 {
        self.camera_delta
    }

    /// Check whether the jump button is held.
    pub fn jump_held(&self) -> bool {
        self.jump_held
    }

    /// Release all inputs and drop any pending camera delta.
    ///
    /// Use this when the application loses focus and held keys can no
    /// longer be trusted.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl InputSource for InputCollector {
    fn sample(&mut self) -> InputSample {
        let sample = InputSample::new(self.move_axes, self.camera_delta, self.jump_held);
        self.camera_delta = Vec2::ZERO;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_is_neutral() {
        let mut input = InputCollector::new();
        let sample = input.sample();
        assert!(!sample.has_move_input);
        assert_eq!(sample.camera_input, Vec2::ZERO);
        assert!(!sample.jump_input);
    }

    #[test]
    fn test_move_axes_persist_across_samples() {
        let mut input = InputCollector::new();
        input.set_move_axes(Vec2::new(0.0, 1.0));

        let first = input.sample();
        let second = input.sample();

        assert!(first.has_move_input);
        assert!(second.has_move_input);
        assert_eq!(second.move_input, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_camera_delta_accumulates_then_drains() {
        let mut input = InputCollector::new();
        input.add_camera_delta(1.0, 0.5);
        input.add_camera_delta(0.5, 0.25);

        let first = input.sample();
        assert_eq!(first.camera_input, Vec2::new(1.5, 0.75));

        // Drained after the sample.
        let second = input.sample();
        assert_eq!(second.camera_input, Vec2::ZERO);
    }

    #[test]
    fn test_jump_held_persists() {
        let mut input = InputCollector::new();
        input.set_jump_held(true);

        assert!(input.sample().jump_input);
        assert!(input.sample().jump_input);

        input.set_jump_held(false);
        assert!(!input.sample().jump_input);
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut input = InputCollector::new();
        input.set_move_axes(Vec2::splat(1.0));
        input.add_camera_delta(3.0, 3.0);
        input.set_jump_held(true);

        input.reset();
        let sample = input.sample();

        assert!(!sample.has_move_input);
        assert_eq!(sample.camera_input, Vec2::ZERO);
        assert!(!sample.jump_input);
    }
}
