//! Locomotion Integrators
//!
//! Scalar speed integration for character movement. Both integrators are
//! bounded ramps: a value moves toward its target by at most rate * dt and
//! never overshoots, so speeds stay in range by construction instead of by
//! after-the-fact validation.
//!
//! # Physics Model
//!
//! - Horizontal: accelerate toward `input magnitude * max speed`, brake
//!   toward zero with a separate deceleration rate
//! - Vertical: grounded rest force, jump launch, jump-abort deceleration,
//!   then gravity toward a terminal fall speed

use glam::{Vec2, Vec3};

use crate::settings::{GravitySettings, MovementSettings};

/// Discrete locomotion state derived each tick from ground contact and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    /// Grounded with zero velocity
    #[default]
    Idle,
    /// Grounded and moving
    Running,
    /// No ground contact
    Airborne,
}

impl LocomotionState {
    /// Classify from ground contact and world-space velocity.
    ///
    /// Lack of support always wins: an airborne character is `Airborne` no
    /// matter how fast it moves. On the ground, any nonzero velocity counts
    /// as `Running`.
    pub fn classify(grounded: bool, velocity: Vec3) -> Self {
        if !grounded {
            Self::Airborne
        } else if velocity.length_squared() > 0.0 {
            Self::Running
        } else {
            Self::Idle
        }
    }
}

/// Move a scalar toward a target by at most `max_delta`, never overshooting.
fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else if diff > 0.0 {
        current + max_delta
    } else {
        current - max_delta
    }
}

/// Advance the horizontal speed one tick.
///
/// The target is the clamped input magnitude scaled by the max speed, so
/// partial analog deflection walks slower than full deflection. Rate is
/// asymmetric: acceleration while input is held, deceleration while
/// braking to a stop.
pub fn integrate_horizontal_speed(
    current_speed: f32,
    move_input: Vec2,
    has_move_input: bool,
    settings: &MovementSettings,
    dt: f32,
) -> f32 {
    let target_speed = move_input.length().min(1.0) * settings.max_horizontal_speed;
    let rate = if has_move_input {
        settings.acceleration
    } else {
        settings.deceleration
    };

    move_toward(current_speed, target_speed, rate * dt)
}

/// Result of one vertical integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalIntegration {
    /// Updated vertical speed in m/s, positive = upward
    pub vertical_speed: f32,
    /// Ground contact after the step; a launch clears it immediately
    pub grounded: bool,
}

/// Advance the vertical speed one tick.
///
/// Grounded: a constant rest force presses the character into the ground
/// so the move solver keeps reporting contact on slopes and steps. A jump
/// replaces it with the launch speed outright and marks the character
/// airborne for the rest of this tick, so the launch reaches the solver
/// before gravity ever touches it.
///
/// Airborne: releasing jump while still ascending applies an extra
/// deceleration toward the fall-speed floor before gravity, which is what
/// turns hold duration into jump height. Gravity then ramps toward the
/// floor, and the floor is reasserted last.
pub fn integrate_vertical_speed(
    current_speed: f32,
    grounded: bool,
    jump_input: bool,
    movement: &MovementSettings,
    gravity: &GravitySettings,
    dt: f32,
) -> VerticalIntegration {
    let fall_floor = -gravity.max_fall_speed;

    if grounded {
        if jump_input {
            return VerticalIntegration {
                vertical_speed: movement.jump_launch_speed,
                grounded: false,
            };
        }
        return VerticalIntegration {
            vertical_speed: (-gravity.grounded_rest_force).max(fall_floor),
            grounded: true,
        };
    }

    let mut speed = current_speed;
    if !jump_input && speed > 0.0 {
        speed = move_toward(speed, fall_floor, movement.jump_abort_rate * dt);
    }
    speed = move_toward(speed, fall_floor, gravity.gravity * dt);

    VerticalIntegration {
        vertical_speed: speed.max(fall_floor),
        grounded: false,
    }
}
