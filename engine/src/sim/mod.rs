//! Simulation Harness
//!
//! Owns one character and its collaborators, and splits wall-clock time
//! into the two update cadences the motion core expects: a variable-rate
//! camera phase once per frame and a fixed-timestep physics phase.
//!
//! # Update Loop
//!
//! Each [`advance`](Simulation::advance) call samples input exactly once;
//! that snapshot feeds the frame phase and every fixed tick the frame
//! triggers. Frame deltas are clamped and the tick accumulator is capped,
//! so a long stall runs at most [`MAX_FIXED_TICKS_PER_FRAME`] ticks
//! instead of spiraling.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strider_motion::camera::FollowCamera;
//! use strider_motion::physics::PlanarGround;
//! use strider_motion::settings::MotionSettings;
//! use strider_motion::sim::Simulation;
//!
//! let mut sim = Simulation::new(
//!     MotionSettings::default(),
//!     Box::new(gamepad),
//!     Box::new(PlanarGround::new()),
//!     Box::new(FollowCamera::new()),
//! );
//!
//! loop {
//!     let ticks = sim.advance(frame_delta_s);
//!     render(sim.character().position(), ticks);
//! }
//! ```

use crate::camera::CameraRig;
use crate::input::InputSource;
use crate::physics::MoveSolver;
use crate::player::CharacterMotion;
use crate::settings::MotionSettings;

/// Fixed physics tick length in seconds
pub const FIXED_TICK_STEP_S: f32 = 1.0 / 120.0;

/// Most fixed ticks a single frame may run; excess time is dropped
pub const MAX_FIXED_TICKS_PER_FRAME: usize = 8;

/// Largest wall-clock frame delta accepted, in seconds
pub const MAX_FRAME_DELTA_S: f32 = 0.1;

static_assertions::const_assert!(FIXED_TICK_STEP_S > 0.0);
static_assertions::const_assert!(MAX_FIXED_TICKS_PER_FRAME > 0);
static_assertions::const_assert!(MAX_FRAME_DELTA_S >= FIXED_TICK_STEP_S);

/// Fixed-timestep driver for one character and its capabilities.
///
/// Input source, move solver, and camera rig are injected at construction
/// and owned for the lifetime of the simulation.
pub struct Simulation {
    character: CharacterMotion,
    input: Box<dyn InputSource>,
    solver: Box<dyn MoveSolver>,
    rig: Box<dyn CameraRig>,
    accumulator_s: f32,
}

impl Simulation {
    /// Create a simulation with a character spawned at the world origin.
    pub fn new(
        settings: MotionSettings,
        input: Box<dyn InputSource>,
        solver: Box<dyn MoveSolver>,
        rig: Box<dyn CameraRig>,
    ) -> Self {
        Self::with_character(CharacterMotion::new(settings), input, solver, rig)
    }

    /// Create a simulation around an already configured character.
    pub fn with_character(
        character: CharacterMotion,
        input: Box<dyn InputSource>,
        solver: Box<dyn MoveSolver>,
        rig: Box<dyn CameraRig>,
    ) -> Self {
        Self {
            character,
            input,
            solver,
            rig,
            accumulator_s: 0.0,
        }
    }

    /// Get the simulated character.
    #[inline]
    pub fn character(&self) -> &CharacterMotion {
        &self.character
    }

    /// Get mutable access to the simulated character.
    #[inline]
    pub fn character_mut(&mut self) -> &mut CharacterMotion {
        &mut self.character
    }

    /// Get the camera rig, e.g., for building a view matrix.
    #[inline]
    pub fn rig(&self) -> &dyn CameraRig {
        self.rig.as_ref()
    }

    /// Simulation time banked for future ticks, in seconds.
    #[inline]
    pub fn pending_time_s(&self) -> f32 {
        self.accumulator_s
    }

    /// Advance the simulation by one frame of wall-clock time.
    ///
    /// Runs the camera phase once, then as many whole fixed ticks as the
    /// banked time affords, up to the per-frame cap. Returns the number of
    /// fixed ticks that ran.
    pub fn advance(&mut self, frame_delta_s: f32) -> usize {
        let delta = frame_delta_s.clamp(0.0, MAX_FRAME_DELTA_S);
        let sample = self.input.sample();

        self.character.frame(&sample, self.rig.as_mut());

        self.accumulator_s = (self.accumulator_s + delta)
            .min(FIXED_TICK_STEP_S * MAX_FIXED_TICKS_PER_FRAME as f32);

        let mut ticks = 0usize;
        while self.accumulator_s >= FIXED_TICK_STEP_S && ticks < MAX_FIXED_TICKS_PER_FRAME {
            self.character.tick(
                &sample,
                self.solver.as_mut(),
                self.rig.as_mut(),
                FIXED_TICK_STEP_S,
            );
            self.accumulator_s -= FIXED_TICK_STEP_S;
            ticks += 1;
        }
        ticks
    }
}
