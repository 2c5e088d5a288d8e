//! Motion Tuning Settings
//!
//! Centralized configuration for the character motion core: horizontal
//! movement rates, gravity and fall behavior, and body/camera rotation.
//! Settings are immutable for the lifetime of a character; validation
//! happens once when a bundle is built or loaded, never per tick.
//!
//! # Loading
//!
//! ```rust,ignore
//! use strider_motion::settings::MotionSettings;
//!
//! // Defaults tuned for a walkable third-person character:
//! let settings = MotionSettings::default();
//!
//! // Or from a JSON file (missing fields fall back to defaults):
//! let settings = MotionSettings::from_json_file("motion.json".as_ref())?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

// ============================================================================
// TUNING CONSTANTS
// ============================================================================

/// Horizontal acceleration in meters per second squared
pub const ACCELERATION: f32 = 50.0;

/// Horizontal deceleration (braking) in meters per second squared
pub const DECELERATION: f32 = 30.0;

/// Maximum horizontal speed in meters per second
pub const MAX_HORIZONTAL_SPEED: f32 = 5.0;

/// Upward speed applied at the instant a jump launches, in meters per second
pub const JUMP_LAUNCH_SPEED: f32 = 8.0;

/// Extra downward ramp while ascending with the jump button released,
/// in meters per second squared
pub const JUMP_ABORT_RATE: f32 = 30.0;

/// Gravity acceleration in meters per second squared
pub const GRAVITY: f32 = 20.0;

/// Constant downward speed while grounded, in meters per second.
/// Keeps the character pressed onto slopes and steps through the move solver.
pub const GROUNDED_REST_FORCE: f32 = 2.0;

/// Terminal fall speed in meters per second
pub const MAX_FALL_SPEED: f32 = 30.0;

/// Body turn rate toward the movement direction, per second (0 = snap)
pub const BODY_ROTATION_SPEED: f32 = 10.0;

/// Camera look sensitivity in degrees per input unit
pub const CAMERA_SENSITIVITY: f32 = 0.15;

/// Lowest allowed camera pitch in degrees
pub const MIN_PITCH: f32 = -75.0;

/// Highest allowed camera pitch in degrees
pub const MAX_PITCH: f32 = 75.0;

// ============================================================================
// SETTINGS GROUPS
// ============================================================================

/// Horizontal movement and jump tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Acceleration toward the target speed in m/s^2
    pub acceleration: f32,
    /// Deceleration toward a stop in m/s^2
    pub deceleration: f32,
    /// Speed reached at full input deflection in m/s
    pub max_horizontal_speed: f32,
    /// Vertical speed applied when a jump launches in m/s
    pub jump_launch_speed: f32,
    /// Extra downward ramp while ascending with jump released in m/s^2
    pub jump_abort_rate: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            max_horizontal_speed: MAX_HORIZONTAL_SPEED,
            jump_launch_speed: JUMP_LAUNCH_SPEED,
            jump_abort_rate: JUMP_ABORT_RATE,
        }
    }
}

impl MovementSettings {
    /// Validate that all rates and speeds are finite and non-negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_non_negative("movement.acceleration", self.acceleration)?;
        check_non_negative("movement.deceleration", self.deceleration)?;
        check_non_negative("movement.max_horizontal_speed", self.max_horizontal_speed)?;
        check_non_negative("movement.jump_launch_speed", self.jump_launch_speed)?;
        check_non_negative("movement.jump_abort_rate", self.jump_abort_rate)?;
        Ok(())
    }
}

/// Gravity and fall tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravitySettings {
    /// Gravity acceleration in m/s^2
    pub gravity: f32,
    /// Constant downward speed while grounded in m/s
    pub grounded_rest_force: f32,
    /// Terminal fall speed in m/s
    pub max_fall_speed: f32,
}

impl Default for GravitySettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            grounded_rest_force: GROUNDED_REST_FORCE,
            max_fall_speed: MAX_FALL_SPEED,
        }
    }
}

impl GravitySettings {
    /// Validate that all magnitudes are finite and non-negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_non_negative("gravity.gravity", self.gravity)?;
        check_non_negative("gravity.grounded_rest_force", self.grounded_rest_force)?;
        check_non_negative("gravity.max_fall_speed", self.max_fall_speed)?;
        Ok(())
    }
}

/// Body facing and camera control tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationSettings {
    /// Turn rate toward the movement direction, per second. 0 snaps instantly.
    pub body_rotation_speed: f32,
    /// Whether the body turns to face the movement direction at all
    pub orient_to_movement: bool,
    /// Camera look sensitivity in degrees per input unit
    pub camera_sensitivity: f32,
    /// Lowest allowed camera pitch in degrees
    pub min_pitch: f32,
    /// Highest allowed camera pitch in degrees
    pub max_pitch: f32,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            body_rotation_speed: BODY_ROTATION_SPEED,
            orient_to_movement: true,
            camera_sensitivity: CAMERA_SENSITIVITY,
            min_pitch: MIN_PITCH,
            max_pitch: MAX_PITCH,
        }
    }
}

impl RotationSettings {
    /// Validate rotation tuning: finite values, non-negative turn rate,
    /// and an ordered pitch range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_non_negative("rotation.body_rotation_speed", self.body_rotation_speed)?;
        check_finite("rotation.camera_sensitivity", self.camera_sensitivity)?;
        check_finite("rotation.min_pitch", self.min_pitch)?;
        check_finite("rotation.max_pitch", self.max_pitch)?;
        if self.min_pitch > self.max_pitch {
            return Err(SettingsError::PitchRangeInverted(
                self.min_pitch,
                self.max_pitch,
            ));
        }
        Ok(())
    }
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Complete motion tuning bundle consumed by the motion core.
///
/// `Default` returns the named tuning constants above. Loaded bundles are
/// validated before they are handed out; a character constructed from a
/// validated bundle never re-checks its settings at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Horizontal movement and jump tuning
    pub movement: MovementSettings,
    /// Gravity and fall tuning
    pub gravity: GravitySettings,
    /// Body facing and camera control tuning
    pub rotation: RotationSettings,
}

impl MotionSettings {
    /// Validate every settings group.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.movement.validate()?;
        self.gravity.validate()?;
        self.rotation.validate()?;
        Ok(())
    }

    /// Parse a bundle from a JSON string and validate it.
    ///
    /// Missing fields fall back to their defaults, so a partial file that
    /// only overrides a few values is accepted.
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        let settings: MotionSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load a bundle from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::info!("loaded motion settings from {}", path.display());
        Ok(settings)
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors produced while validating or loading a settings bundle.
#[derive(Debug)]
pub enum SettingsError {
    /// A rate or magnitude field is negative.
    NegativeSetting(&'static str, f32),
    /// A field is NaN or infinite.
    NonFiniteSetting(&'static str),
    /// `min_pitch` is greater than `max_pitch`.
    PitchRangeInverted(f32, f32),
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NegativeSetting(field, value) => {
                write!(f, "setting {field} must be non-negative, got {value}")
            }
            SettingsError::NonFiniteSetting(field) => {
                write!(f, "setting {field} must be finite")
            }
            SettingsError::PitchRangeInverted(min, max) => {
                write!(f, "min_pitch {min} exceeds max_pitch {max}")
            }
            SettingsError::IoError(e) => write!(f, "IO error: {e}"),
            SettingsError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::JsonError(e)
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NonFiniteSetting(field));
    }
    if value < 0.0 {
        return Err(SettingsError::NegativeSetting(field, value));
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NonFiniteSetting(field));
    }
    Ok(())
}
