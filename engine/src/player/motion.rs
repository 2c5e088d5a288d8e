//! Character Motion Core
//!
//! Owns the per-character motion state and runs the fixed-tick update:
//! classify locomotion, integrate horizontal and vertical speed, hand the
//! composed displacement to the move solver, then turn the body toward the
//! movement. Camera-look accumulation runs separately once per rendered
//! frame.
//!
//! # Tick Contract
//!
//! Ground contact for tick N is the solver's verdict from tick N-1: the
//! solver runs exactly once per tick and its outcome is cached for the next
//! classification. Jump input is read once at the top of the tick and that
//! one sample feeds both the grounded launch check and the airborne abort
//! check.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strider_motion::physics::PlanarGround;
//! use strider_motion::camera::FollowCamera;
//! use strider_motion::player::CharacterMotion;
//! use strider_motion::settings::MotionSettings;
//!
//! let mut character = CharacterMotion::new(MotionSettings::default());
//! let mut ground = PlanarGround::new();
//! let mut camera = FollowCamera::new();
//!
//! // Once per rendered frame:
//! character.frame(&input, &mut camera);
//! // Once per fixed tick:
//! character.tick(&input, &mut ground, &mut camera, tick_dt);
//! ```

use glam::{Quat, Vec3};
use log::debug;

use crate::camera::{CameraRig, ControlRotation};
use crate::input::InputSample;
use crate::physics::MoveSolver;
use crate::player::facing::align_to_movement;
use crate::player::locomotion::{
    LocomotionState, integrate_horizontal_speed, integrate_vertical_speed,
};
use crate::settings::MotionSettings;

/// Per-character motion state, mutated only by the tick sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Speed along the current movement direction in m/s, never negative
    pub horizontal_speed: f32,
    /// Signed vertical speed in m/s, positive = upward
    pub vertical_speed: f32,
    /// Ground contact as sampled at the top of the current tick
    pub is_grounded: bool,
    /// Locomotion state recomputed every tick
    pub locomotion_state: LocomotionState,
    /// Locomotion state of the previous tick, for edge-triggered consumers
    pub previous_locomotion_state: LocomotionState,
    /// Accumulated camera-look angles in degrees
    pub control_rotation: ControlRotation,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            horizontal_speed: 0.0,
            vertical_speed: 0.0,
            is_grounded: false,
            locomotion_state: LocomotionState::Idle,
            previous_locomotion_state: LocomotionState::Idle,
            control_rotation: ControlRotation::default(),
        }
    }
}

/// Character motion driver: state plus the fixed-tick and per-frame updates.
///
/// Collaborators are passed in by the owning loop on every call; the driver
/// itself never reaches for globals. Spawns at rest, not grounded, so the
/// first tick free-falls until the solver reports contact.
#[derive(Debug, Clone)]
pub struct CharacterMotion {
    settings: MotionSettings,
    state: MotionState,
    position: Vec3,
    facing: Quat,
    /// Unit horizontal direction of travel, or zero when stopped.
    /// Persists while input is absent so the character coasts straight.
    movement_direction: Vec3,
    last_translation: Vec3,
    last_tick_dt: f32,
    /// Solver verdict from the last tick, sampled by the next one.
    last_grounded: bool,
}

impl CharacterMotion {
    /// Create a character at the world origin.
    pub fn new(settings: MotionSettings) -> Self {
        Self::with_position(settings, Vec3::ZERO)
    }

    /// Create a character at a custom spawn position.
    pub fn with_position(settings: MotionSettings, position: Vec3) -> Self {
        Self {
            settings,
            state: MotionState::default(),
            position,
            facing: Quat::IDENTITY,
            movement_direction: Vec3::ZERO,
            last_translation: Vec3::ZERO,
            last_tick_dt: 0.0,
            last_grounded: false,
        }
    }

    /// Get the world position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport to a new world position without touching velocities.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Get the body facing rotation.
    #[inline]
    pub fn facing(&self) -> Quat {
        self.facing
    }

    /// Get the motion state.
    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Get the current horizontal speed in m/s.
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.state.horizontal_speed
    }

    /// Set the horizontal speed directly (e.g., for knockback).
    pub fn set_horizontal_speed(&mut self, speed: f32) {
        self.state.horizontal_speed = speed;
    }

    /// Get the current vertical speed in m/s.
    #[inline]
    pub fn vertical_speed(&self) -> f32 {
        self.state.vertical_speed
    }

    /// Set the vertical speed directly.
    pub fn set_vertical_speed(&mut self, speed: f32) {
        self.state.vertical_speed = speed;
    }

    /// Check whether the character is grounded.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded
    }

    /// Override the grounded flag, e.g., when spawning on known ground.
    ///
    /// Also seeds the cached solver verdict so the next tick samples the
    /// same value instead of the outcome of a tick that never ran.
    pub fn set_grounded(&mut self, grounded: bool) {
        self.state.is_grounded = grounded;
        self.last_grounded = grounded;
    }

    /// Get the locomotion state.
    #[inline]
    pub fn locomotion_state(&self) -> LocomotionState {
        self.state.locomotion_state
    }

    /// Get the locomotion state of the previous tick.
    #[inline]
    pub fn previous_locomotion_state(&self) -> LocomotionState {
        self.state.previous_locomotion_state
    }

    /// Get the accumulated control rotation.
    #[inline]
    pub fn control_rotation(&self) -> ControlRotation {
        self.state.control_rotation
    }

    /// Get the persisted horizontal movement direction (unit or zero).
    #[inline]
    pub fn movement_direction(&self) -> Vec3 {
        self.movement_direction
    }

    /// Get the settings the character was built with.
    #[inline]
    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    /// World-space velocity over the last tick, derived from what the
    /// solver actually applied. Zero before the first tick.
    pub fn world_velocity(&self) -> Vec3 {
        if self.last_tick_dt > 0.0 {
            self.last_translation / self.last_tick_dt
        } else {
            Vec3::ZERO
        }
    }

    /// Variable-rate update, once per rendered frame.
    ///
    /// Accumulates the camera-look delta into the control rotation and
    /// pushes the result into the rig. The same input snapshot is expected
    /// to feed every fixed tick of the frame.
    pub fn frame(&mut self, input: &InputSample, rig: &mut dyn CameraRig) {
        self.state
            .control_rotation
            .apply_look(input.camera_input, &self.settings.rotation);
        rig.set_control_rotation(self.state.control_rotation);
    }

    /// Fixed-rate update, once per physics tick.
    pub fn tick(
        &mut self,
        input: &InputSample,
        solver: &mut dyn MoveSolver,
        rig: &mut dyn CameraRig,
        dt: f32,
    ) {
        // One jump sample per tick, shared by launch and abort checks.
        let jump_held = input.jump_input;

        // 1. Sample ground contact from the previous tick's solver verdict.
        self.state.is_grounded = self.last_grounded;

        // 2. Classify locomotion.
        self.state.previous_locomotion_state = self.state.locomotion_state;
        self.state.locomotion_state =
            LocomotionState::classify(self.state.is_grounded, self.world_velocity());
        if self.state.locomotion_state != self.state.previous_locomotion_state {
            debug!(
                "locomotion {:?} -> {:?}",
                self.state.previous_locomotion_state, self.state.locomotion_state
            );
        }

        // 3. Horizontal: resolve direction, then ramp the speed.
        self.movement_direction = self.resolve_movement_direction(input, rig);
        self.state.horizontal_speed = integrate_horizontal_speed(
            self.state.horizontal_speed,
            input.move_input,
            input.has_move_input,
            &self.settings.movement,
            dt,
        );

        // 4. Vertical: rest force, launch, abort, gravity.
        let vertical = integrate_vertical_speed(
            self.state.vertical_speed,
            self.state.is_grounded,
            jump_held,
            &self.settings.movement,
            &self.settings.gravity,
            dt,
        );
        if self.state.is_grounded && !vertical.grounded {
            debug!("jump launched at {:.1} m/s", vertical.vertical_speed);
        }
        self.state.vertical_speed = vertical.vertical_speed;
        // A launch flips the flag mid-tick so this tick's displacement
        // already carries the character upward.
        self.state.is_grounded = vertical.grounded;

        // 5. Compose the displacement and let the solver resolve it.
        let horizontal_velocity = self.movement_direction * self.state.horizontal_speed;
        let desired = (horizontal_velocity + Vec3::Y * self.state.vertical_speed) * dt;
        let outcome = solver.resolve(self.position, desired, dt);
        self.position += outcome.translation;
        self.last_translation = outcome.translation;
        self.last_tick_dt = dt;
        self.last_grounded = outcome.grounded;

        // 6. Turn the body toward this tick's horizontal movement.
        self.facing =
            align_to_movement(self.facing, horizontal_velocity, &self.settings.rotation, dt);

        // 7. The rig follows the resolved position.
        rig.set_follow_position(self.position);
    }

    /// Resolve this tick's movement direction.
    ///
    /// With input: input axes against the rig's yaw-only horizontal basis,
    /// normalized to unit length. Without input: the persisted direction,
    /// so the character brakes along a straight line.
    fn resolve_movement_direction(&self, input: &InputSample, rig: &dyn CameraRig) -> Vec3 {
        if !input.has_move_input {
            return self.movement_direction;
        }
        let world = rig.horizontal_right() * input.move_input.x
            + rig.horizontal_forward() * input.move_input.y;
        world.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::camera::FollowCamera;
    use crate::physics::PlanarGround;
    use crate::settings::{GravitySettings, MovementSettings};

    const TICK: f32 = 1.0 / 120.0;
    const EPSILON: f32 = 1e-5;

    fn test_settings() -> MotionSettings {
        MotionSettings {
            movement: MovementSettings {
                acceleration: 50.0,
                deceleration: 30.0,
                max_horizontal_speed: 5.0,
                jump_launch_speed: 10.0,
                jump_abort_rate: 10.0,
            },
            gravity: GravitySettings {
                gravity: 20.0,
                grounded_rest_force: 2.0,
                max_fall_speed: 30.0,
            },
            ..Default::default()
        }
    }

    fn grounded_character() -> (CharacterMotion, PlanarGround, FollowCamera) {
        let mut character = CharacterMotion::new(test_settings());
        character.set_grounded(true);
        (character, PlanarGround::new(), FollowCamera::new())
    }

    fn move_sample(x: f32, y: f32) -> InputSample {
        InputSample::new(Vec2::new(x, y), Vec2::ZERO, false)
    }

    fn jump_sample() -> InputSample {
        InputSample::new(Vec2::ZERO, Vec2::ZERO, true)
    }

    #[test]
    fn test_spawn_state() {
        let character = CharacterMotion::new(test_settings());
        assert_eq!(character.position(), Vec3::ZERO);
        assert_eq!(character.facing(), Quat::IDENTITY);
        assert_eq!(character.horizontal_speed(), 0.0);
        assert_eq!(character.vertical_speed(), 0.0);
        assert!(!character.is_grounded());
        assert_eq!(character.locomotion_state(), LocomotionState::Idle);
        assert_eq!(character.world_velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_forward_input_moves_along_camera_forward() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..60 {
            character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        }

        // Camera yaw zero looks toward -Z, so forward input walks -Z.
        assert!(character.position().z < -1.0);
        assert!(character.position().x.abs() < EPSILON);
        assert_eq!(character.horizontal_speed(), 5.0);
    }

    #[test]
    fn test_camera_yaw_steers_movement() {
        let (mut character, mut ground, mut camera) = grounded_character();
        camera.set_control_rotation(ControlRotation::new(0.0, 90.0));

        for _ in 0..60 {
            character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        }

        // Yaw 90 degrees turns camera forward to +X.
        assert!(character.position().x > 1.0);
        assert!(character.position().z.abs() < 1e-3);
    }

    #[test]
    fn test_strafe_uses_camera_right() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..60 {
            character.tick(&move_sample(1.0, 0.0), &mut ground, &mut camera, TICK);
        }

        assert!(character.position().x > 1.0);
        assert!(character.position().z.abs() < EPSILON);
    }

    #[test]
    fn test_no_input_coasts_straight_then_stops() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..60 {
            character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        }
        let direction = character.movement_direction();
        assert!((direction - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);

        // Release input: direction holds while speed bleeds off.
        let idle = InputSample::default();
        character.tick(&idle, &mut ground, &mut camera, TICK);
        assert_eq!(character.movement_direction(), direction);
        assert!(character.horizontal_speed() < 5.0);
        assert!(character.horizontal_speed() > 0.0);

        for _ in 0..120 {
            character.tick(&idle, &mut ground, &mut camera, TICK);
        }
        assert_eq!(character.horizontal_speed(), 0.0);
        assert_eq!(character.movement_direction(), direction);
    }

    #[test]
    fn test_jump_launches_same_tick() {
        let (mut character, mut ground, mut camera) = grounded_character();

        character.tick(&jump_sample(), &mut ground, &mut camera, TICK);

        // Launch speed lands unmodified and support drops within the tick,
        // so the very first displacement is upward.
        assert_eq!(character.vertical_speed(), 10.0);
        assert!(!character.is_grounded());
        assert!((character.position().y - 10.0 * TICK).abs() < EPSILON);
    }

    #[test]
    fn test_grounded_rest_force_holds_position_on_ground() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..10 {
            character.tick(&InputSample::default(), &mut ground, &mut camera, TICK);
        }

        assert_eq!(character.position().y, 0.0);
        assert!(character.is_grounded());
        assert_eq!(character.vertical_speed(), -2.0);
    }

    #[test]
    fn test_landing_has_one_tick_lag() {
        let settings = test_settings();
        let mut character = CharacterMotion::with_position(settings, Vec3::new(0.0, 0.001, 0.0));
        let mut ground = PlanarGround::new();
        let mut camera = FollowCamera::new();
        let idle = InputSample::default();

        // Falling from just above the plane: the solver clips this tick...
        character.tick(&idle, &mut ground, &mut camera, TICK);
        assert_eq!(character.position().y, 0.0);
        assert!(!character.is_grounded());
        assert_eq!(character.locomotion_state(), LocomotionState::Airborne);

        // ...and the contact becomes visible one tick later.
        character.tick(&idle, &mut ground, &mut camera, TICK);
        assert!(character.is_grounded());
    }

    #[test]
    fn test_transition_records_previous_state() {
        let (mut character, mut ground, mut camera) = grounded_character();

        character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        assert_eq!(character.locomotion_state(), LocomotionState::Idle);

        // Velocity becomes observable next tick, flipping Idle -> Running.
        character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        assert_eq!(character.locomotion_state(), LocomotionState::Running);
        assert_eq!(
            character.previous_locomotion_state(),
            LocomotionState::Idle
        );
    }

    #[test]
    fn test_jump_abort_decelerates_faster_than_gravity() {
        let settings = test_settings();
        let dt = 0.1;

        let mut held = CharacterMotion::with_position(settings, Vec3::new(0.0, 50.0, 0.0));
        held.set_vertical_speed(5.0);
        let mut released = CharacterMotion::with_position(settings, Vec3::new(0.0, 50.0, 0.0));
        released.set_vertical_speed(5.0);

        let mut ground = PlanarGround::new();
        let mut camera = FollowCamera::new();
        held.tick(&jump_sample(), &mut ground, &mut camera, dt);
        released.tick(&InputSample::default(), &mut ground, &mut camera, dt);

        // Held keeps gravity-only decay, release stacks the abort on top.
        assert_eq!(held.vertical_speed(), 3.0);
        assert_eq!(released.vertical_speed(), 2.0);
    }

    #[test]
    fn test_facing_turns_toward_travel() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..240 {
            character.tick(&move_sample(1.0, 0.0), &mut ground, &mut camera, TICK);
        }

        let forward = character.facing() * crate::player::facing::MODEL_FORWARD;
        assert!((forward - Vec3::X).length() < 1e-3);
    }

    #[test]
    fn test_facing_survives_stop() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..240 {
            character.tick(&move_sample(1.0, 0.0), &mut ground, &mut camera, TICK);
        }

        // Brake to a full stop, then capture the facing.
        for _ in 0..120 {
            character.tick(&InputSample::default(), &mut ground, &mut camera, TICK);
        }
        assert_eq!(character.horizontal_speed(), 0.0);
        let facing = character.facing();

        // With zero movement the facing update is a no-op.
        for _ in 0..60 {
            character.tick(&InputSample::default(), &mut ground, &mut camera, TICK);
        }
        assert_eq!(character.facing(), facing);
    }

    #[test]
    fn test_world_velocity_matches_applied_motion() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..60 {
            character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        }

        let velocity = character.world_velocity();
        assert!((velocity.length() - 5.0).abs() < 1e-3);
        assert!(velocity.z < 0.0);
    }

    #[test]
    fn test_frame_accumulates_look_and_feeds_rig() {
        let mut character = CharacterMotion::new(MotionSettings::default());
        let mut camera = FollowCamera::new();
        let look = InputSample::new(Vec2::ZERO, Vec2::new(100.0, -40.0), false);

        character.frame(&look, &mut camera);

        let rotation = character.control_rotation();
        assert!(rotation.yaw > 0.0);
        assert!(rotation.pitch > 0.0);
        assert_eq!(camera.rotation(), rotation);
    }

    #[test]
    fn test_rig_follows_position() {
        let (mut character, mut ground, mut camera) = grounded_character();

        for _ in 0..60 {
            character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        }

        assert_eq!(camera.target(), character.position());
    }

    #[test]
    fn test_airborne_keeps_steering() {
        let (mut character, mut ground, mut camera) = grounded_character();

        character.tick(&jump_sample(), &mut ground, &mut camera, TICK);
        assert!(!character.is_grounded());

        // Air control: horizontal ramp still listens to input while airborne.
        for _ in 0..30 {
            character.tick(&move_sample(0.0, 1.0), &mut ground, &mut camera, TICK);
        }
        assert!(character.horizontal_speed() > 0.0);
        assert!(character.position().z < 0.0);
    }
}
