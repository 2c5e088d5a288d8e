//! Camera Control Rotation
//!
//! Accumulated camera-look angles (pitch, yaw) in degrees, fully decoupled
//! from the character body's facing. Yaw wraps into [0, 360); pitch is
//! wrapped modulo a full revolution and then hard-clamped into the
//! configured range on every update, with the clamp always last so limits
//! dominate wrapping.

use glam::Vec2;

use crate::settings::RotationSettings;

/// Camera-look angles in degrees.
///
/// `yaw` stays in [0, 360) after every update; `pitch` stays inside the
/// configured `[min_pitch, max_pitch]` range. Positive pitch looks up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRotation {
    /// Vertical look angle in degrees, positive = looking up
    pub pitch: f32,
    /// Horizontal look angle in degrees, in [0, 360)
    pub yaw: f32,
}

impl ControlRotation {
    /// Create a control rotation from explicit angles in degrees.
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Apply a camera-look delta.
    ///
    /// `look_delta.x` turns right for positive values; `look_delta.y`
    /// lowers the view for positive values (inverted axis). The pitch is
    /// wrapped modulo 360 before clamping so multi-revolution deltas
    /// cannot skip past the limits, and the clamp runs unconditionally
    /// even when the delta is zero.
    pub fn apply_look(&mut self, look_delta: Vec2, settings: &RotationSettings) {
        self.yaw = (self.yaw + look_delta.x * settings.camera_sensitivity).rem_euclid(360.0);

        self.pitch -= look_delta.y * settings.camera_sensitivity;
        // Wrap first (sign-preserving remainder), clamp last.
        self.pitch %= 360.0;
        self.pitch = self.pitch.clamp(settings.min_pitch, settings.max_pitch);
    }

    /// Get the yaw in radians.
    #[inline]
    pub fn yaw_radians(&self) -> f32 {
        self.yaw.to_radians()
    }

    /// Get the pitch in radians.
    #[inline]
    pub fn pitch_radians(&self) -> f32 {
        self.pitch.to_radians()
    }
}
