//! Planar ground solver
//!
//! Reference [`MoveSolver`] for an infinite horizontal ground plane. Motion
//! above the plane passes through untouched; any displacement that would end
//! below the plane is clipped so the character rests exactly on it, and that
//! contact is what marks the character grounded.

use glam::Vec3;

use super::{MoveOutcome, MoveSolver};

/// Infinite horizontal ground plane at a configurable height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanarGround {
    ground_height: f32,
}

impl PlanarGround {
    /// Create a ground plane at height zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ground plane at a custom height.
    pub fn at_height(ground_height: f32) -> Self {
        Self { ground_height }
    }

    /// Get the plane height in world space.
    #[inline]
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }
}

impl MoveSolver for PlanarGround {
    fn resolve(&mut self, position: Vec3, desired: Vec3, _dt: f32) -> MoveOutcome {
        let mut end = position + desired;
        let mut grounded = false;

        // Ending at or below the plane means contact; clip to the surface.
        if end.y <= self.ground_height {
            end.y = self.ground_height;
            grounded = true;
        }

        MoveOutcome::new(end - position, grounded)
    }
}
