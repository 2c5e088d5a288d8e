//! Camera Module
//!
//! Provides the camera-look state and the camera capability consumed by the
//! motion core. This module is window-system agnostic - it only deals with
//! camera state and math.

use glam::Vec3;

pub mod control;
pub mod follow;

pub use control::ControlRotation;
pub use follow::{FollowCamera, FOLLOW_DISTANCE, FOLLOW_HEIGHT};

/// Camera capability consumed by the motion core.
///
/// The core pushes the accumulated control rotation into the rig once per
/// frame and the character position once per fixed tick, and reads back a
/// yaw-only horizontal basis for resolving movement input into world space.
pub trait CameraRig {
    /// Receive the accumulated control rotation for this frame.
    fn set_control_rotation(&mut self, rotation: ControlRotation);

    /// Receive the character position after a fixed tick.
    fn set_follow_position(&mut self, position: Vec3);

    /// Unit forward vector projected onto the horizontal plane.
    ///
    /// Derived from yaw alone; pitch must not influence it, so movement
    /// input keeps its full magnitude while the camera looks up or down.
    fn horizontal_forward(&self) -> Vec3;

    /// Unit right vector on the horizontal plane, perpendicular to
    /// [`horizontal_forward`](CameraRig::horizontal_forward).
    fn horizontal_right(&self) -> Vec3;
}
