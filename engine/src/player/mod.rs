//! Player Module
//!
//! Provides the character motion core: locomotion state, speed
//! integration, body facing, and the per-tick driver that composes them.
//!
//! # Components
//!
//! - [`CharacterMotion`] - Owns the motion state and runs the fixed-tick
//!   update against the move solver and camera rig
//! - [`MotionState`] - Speeds, ground contact, locomotion state, and the
//!   accumulated control rotation for one character
//! - [`LocomotionState`] - Idle / Running / Airborne classification
//! - [`locomotion`] - Bounded-ramp speed integrators
//! - [`facing`] - Yaw-only body orientation toward movement

pub mod facing;
pub mod locomotion;
pub mod motion;

pub use facing::{MODEL_FORWARD, align_to_movement, facing_toward};
pub use locomotion::{
    LocomotionState, VerticalIntegration, integrate_horizontal_speed, integrate_vertical_speed,
};
pub use motion::{CharacterMotion, MotionState};
