//! Strider Motion Library
//!
//! A third-person character motion core: fixed-tick locomotion with
//! bounded-ramp speed integration, jump and gravity handling, body facing,
//! and camera-relative movement. Collision and camera presentation stay
//! behind narrow capability traits, so the core runs against anything from
//! a full character sweep system to the bundled flat-ground solver.
//!
//! # Modules
//!
//! - [`settings`] - Tuning constants, serde-loadable settings, validation
//! - [`input`] - Input snapshot, source capability, and a value collector
//! - [`camera`] - Control rotation, camera rig capability, follow camera
//! - [`physics`] - Move solver capability and the planar ground solver
//! - [`player`] - Locomotion state, integrators, the character driver
//! - [`sim`] - Fixed-timestep simulation harness
//!
//! # Example
//!
//! ```ignore
//! use strider_motion::{
//!     CharacterMotion, FollowCamera, InputSample, MotionSettings, PlanarGround,
//! };
//! use glam::Vec2;
//!
//! let mut character = CharacterMotion::new(MotionSettings::default());
//! let mut ground = PlanarGround::new();
//! let mut camera = FollowCamera::new();
//!
//! // Per rendered frame: accumulate camera look.
//! let input = InputSample::new(Vec2::new(0.0, 1.0), Vec2::ZERO, false);
//! character.frame(&input, &mut camera);
//!
//! // Per fixed tick: integrate and resolve movement.
//! character.tick(&input, &mut ground, &mut camera, 1.0 / 120.0);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod settings;
pub mod sim;

// Re-export the working set at crate level for convenience
pub use camera::{CameraRig, ControlRotation, FollowCamera};
pub use input::{InputCollector, InputSample, InputSource};
pub use physics::{MoveOutcome, MoveSolver, PlanarGround};
pub use player::{CharacterMotion, LocomotionState, MotionState};
pub use settings::{MotionSettings, SettingsError};
pub use sim::{FIXED_TICK_STEP_S, MAX_FIXED_TICKS_PER_FRAME, Simulation};
