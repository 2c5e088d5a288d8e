//! Physics module
//!
//! This module defines the collision-and-support capability the motion core
//! delegates to. The core computes a desired per-tick displacement; a
//! [`MoveSolver`] turns it into the displacement the world actually allows
//! and reports whether the character ended the tick supported by ground.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`planar`] - Reference solver for an infinite horizontal ground plane

use glam::Vec3;

pub mod planar;

pub use planar::PlanarGround;

/// Result of resolving one tick of desired motion against the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Displacement actually applied, after collision clipping
    pub translation: Vec3,
    /// Whether the character ended the tick supported by ground
    pub grounded: bool,
}

impl MoveOutcome {
    /// Creates a new MoveOutcome with the given parameters.
    pub fn new(translation: Vec3, grounded: bool) -> Self {
        Self {
            translation,
            grounded,
        }
    }
}

/// Collision-and-support capability consumed once per fixed tick.
///
/// Implementations own the groundedness rule: the core never inspects
/// geometry, it only trusts the returned [`MoveOutcome`]. The returned
/// translation may be shorter than the desired displacement but must never
/// exceed it.
pub trait MoveSolver {
    /// Resolve a desired displacement from `position` over `dt` seconds.
    fn resolve(&mut self, position: Vec3, desired: Vec3, dt: f32) -> MoveOutcome;
}
