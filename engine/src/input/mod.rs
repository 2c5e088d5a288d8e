//! Input Module
//!
//! Per-tick input snapshots for the motion core. This module is decoupled
//! from any windowing system or device layer: the embedding application
//! turns raw events into move axes, look deltas and a jump-held flag, and
//! the core consumes an immutable [`InputSample`] per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use strider_motion::input::{InputCollector, InputSource};
//! use glam::Vec2;
//!
//! let mut input = InputCollector::new();
//!
//! // Each frame, push whatever the application gathered:
//! input.set_move_axes(Vec2::new(0.0, 1.0)); // full forward
//! input.add_camera_delta(12.0, -3.0);
//! input.set_jump_held(true);
//!
//! // One snapshot per frame; camera deltas drain on sample.
//! let sample = input.sample();
//! ```

use glam::Vec2;

pub mod collector;

// Re-export commonly used types at module level
pub use collector::InputCollector;

/// Immutable input snapshot consumed by the motion core.
///
/// A sample is taken once per frame and stays stable for every fixed tick
/// run during that frame. Axis conventions: `move_input.x` is strafe
/// (positive = right), `move_input.y` is forward (positive = forward);
/// `camera_input` is a look delta in input units (positive x = look right,
/// positive y = look down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Move axes, each nominally in [-1, 1]
    pub move_input: Vec2,
    /// Whether `move_input` is non-zero
    pub has_move_input: bool,
    /// Camera look delta accumulated since the previous sample
    pub camera_input: Vec2,
    /// Whether the jump button is held
    pub jump_input: bool,
}

impl InputSample {
    /// Build a sample, deriving `has_move_input` from the move vector.
    pub fn new(move_input: Vec2, camera_input: Vec2, jump_input: bool) -> Self {
        Self {
            move_input,
            has_move_input: move_input != Vec2::ZERO,
            camera_input,
            jump_input,
        }
    }
}

/// Capability producing one [`InputSample`] per frame.
///
/// Implementations may drain internal accumulators when sampled; the
/// returned snapshot must remain valid for the whole frame it was taken
/// for, including every fixed tick run within that frame.
pub trait InputSource {
    /// Take the snapshot for the upcoming frame.
    fn sample(&mut self) -> InputSample;
}
