//! Body Facing
//!
//! Turns the character body toward its horizontal movement direction. The
//! body faces -Z at identity, matching the camera convention, and rotates
//! about world-up only so the character never tilts off its feet.

use glam::{Quat, Vec3};

use crate::settings::RotationSettings;

/// The model-space forward direction at identity facing.
pub const MODEL_FORWARD: Vec3 = Vec3::NEG_Z;

/// Yaw-only rotation that points [`MODEL_FORWARD`] along `direction`.
///
/// Only the horizontal components of `direction` are used; callers pass
/// movement vectors that may carry a vertical part.
pub fn facing_toward(direction: Vec3) -> Quat {
    // from_rotation_y maps -Z onto (-sin a, 0, -cos a).
    Quat::from_rotation_y((-direction.x).atan2(-direction.z))
}

/// Advance the body facing one tick toward the horizontal movement vector.
///
/// No-op when orientation-to-movement is disabled or the horizontal
/// movement is zero, so the body keeps its last facing while idle or
/// coasting to a stop straight down. Rotation speed zero snaps; any
/// positive speed slerps by `speed * dt`, capped at reaching the target.
pub fn align_to_movement(
    current: Quat,
    movement: Vec3,
    settings: &RotationSettings,
    dt: f32,
) -> Quat {
    if !settings.orient_to_movement {
        return current;
    }

    let flat = Vec3::new(movement.x, 0.0, movement.z);
    if flat.length_squared() <= 0.0 {
        return current;
    }

    let target = facing_toward(flat);
    if settings.body_rotation_speed == 0.0 {
        return target;
    }

    let t = (settings.body_rotation_speed * dt).min(1.0);
    current.slerp(target, t)
}
