//! Follow Camera
//!
//! Reference third-person camera rig: orbits a followed point at a fixed
//! distance and height using the accumulated control rotation. The
//! horizontal basis it hands back to the motion core is derived from yaw
//! alone, so looking up or down never shrinks movement input.

use glam::Vec3;

use super::{CameraRig, ControlRotation};

/// Default orbit distance behind the followed point in meters
pub const FOLLOW_DISTANCE: f32 = 4.5;
/// Default pivot height above the followed point in meters
pub const FOLLOW_HEIGHT: f32 = 1.8;

/// Third-person orbit camera driven by the motion core.
///
/// Receives the control rotation once per frame and the character position
/// once per fixed tick, and derives both the world-space eye position and
/// the yaw-only horizontal basis from them.
#[derive(Debug, Clone, Copy)]
pub struct FollowCamera {
    rotation: ControlRotation,
    target: Vec3,
    distance: f32,
    height: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            rotation: ControlRotation::default(),
            target: Vec3::ZERO,
            distance: FOLLOW_DISTANCE,
            height: FOLLOW_HEIGHT,
        }
    }
}

impl FollowCamera {
    /// Create a follow camera with the default orbit offsets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a follow camera with custom orbit offsets.
    pub fn with_offsets(distance: f32, height: f32) -> Self {
        Self {
            distance,
            height,
            ..Default::default()
        }
    }

    /// Get the control rotation last pushed into the rig.
    #[inline]
    pub fn rotation(&self) -> ControlRotation {
        self.rotation
    }

    /// Get the followed point in world space.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Direction the camera is looking, derived from yaw and pitch.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        let yaw = self.rotation.yaw_radians();
        let pitch = self.rotation.pitch_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    /// World-space eye position: opposite the look direction from a pivot
    /// raised `height` above the followed point.
    pub fn eye_position(&self) -> Vec3 {
        let pivot = self.target + Vec3::Y * self.height;
        pivot - self.look_direction() * self.distance
    }
}

impl CameraRig for FollowCamera {
    fn set_control_rotation(&mut self, rotation: ControlRotation) {
        self.rotation = rotation;
    }

    fn set_follow_position(&mut self, position: Vec3) {
        self.target = position;
    }

    fn horizontal_forward(&self) -> Vec3 {
        let yaw = self.rotation.yaw_radians();
        // Yaw only: at yaw=0 forward is -Z, at yaw=90 deg it is +X.
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    fn horizontal_right(&self) -> Vec3 {
        let forward = self.horizontal_forward();
        // forward.cross(Y) gives right in this coordinate system.
        Vec3::new(-forward.z, 0.0, forward.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::settings::RotationSettings;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_horizontal_basis_at_zero_yaw() {
        let camera = FollowCamera::new();
        assert_vec3_near(camera.horizontal_forward(), Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_near(camera.horizontal_right(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_horizontal_basis_quarter_turn() {
        let mut camera = FollowCamera::new();
        camera.set_control_rotation(ControlRotation::new(0.0, 90.0));

        assert_vec3_near(camera.horizontal_forward(), Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_near(camera.horizontal_right(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_pitch_does_not_affect_horizontal_basis() {
        let mut camera = FollowCamera::new();
        camera.set_control_rotation(ControlRotation::new(0.0, 30.0));
        let level_forward = camera.horizontal_forward();

        camera.set_control_rotation(ControlRotation::new(-60.0, 30.0));
        let tilted_forward = camera.horizontal_forward();

        assert_vec3_near(tilted_forward, level_forward);
        assert!((tilted_forward.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let mut camera = FollowCamera::new();
        let mut rotation = ControlRotation::default();
        rotation.apply_look(Vec2::new(123.0, -17.0), &RotationSettings::default());
        camera.set_control_rotation(rotation);

        let forward = camera.horizontal_forward();
        let right = camera.horizontal_right();
        assert!((forward.length() - 1.0).abs() < EPSILON);
        assert!((right.length() - 1.0).abs() < EPSILON);
        assert!(forward.dot(right).abs() < EPSILON);
        assert_eq!(forward.y, 0.0);
        assert_eq!(right.y, 0.0);
    }

    #[test]
    fn test_eye_sits_behind_and_above_target() {
        let mut camera = FollowCamera::with_offsets(4.0, 2.0);
        camera.set_follow_position(Vec3::new(10.0, 0.0, -5.0));

        // At zero rotation the camera looks toward -Z, so the eye backs
        // off along +Z from the raised pivot.
        assert_vec3_near(camera.eye_position(), Vec3::new(10.0, 2.0, -1.0));
    }

    #[test]
    fn test_eye_rises_when_looking_down() {
        let mut camera = FollowCamera::with_offsets(4.0, 2.0);
        camera.set_follow_position(Vec3::ZERO);
        camera.set_control_rotation(ControlRotation::new(-45.0, 0.0));

        let eye = camera.eye_position();
        // Looking down pulls the eye up above the pivot.
        assert!(eye.y > 2.0);
        assert!((eye.distance(Vec3::Y * 2.0) - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_follow_position_moves_eye() {
        let mut camera = FollowCamera::new();
        let before = camera.eye_position();
        camera.set_follow_position(Vec3::new(3.0, 0.0, 3.0));
        let after = camera.eye_position();

        assert_vec3_near(after - before, Vec3::new(3.0, 0.0, 3.0));
    }
}
