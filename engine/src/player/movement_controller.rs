//! Player Movement Controller
//!
//! Kinematic integrator for the first-person player. Movement is relative to
//! the camera yaw; vertical motion is a single velocity under constant
//! gravity. Collision against blocks and the grounding test are selected by
//! [`CollisionStrategy`] and [`GroundingPolicy`].
//!
//! # Frame order
//!
//! 1. Horizontal move, resolved by the collision strategy
//! 2. Grounded/Airborne transition from the support test
//! 3. Jump, if grounded and the space above is free
//! 4. Gravity and vertical move while airborne (skipped on the jump frame)
//! 5. Respawn below the kill height
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut player = PlayerController::new(PhysicsConfig::default());
//!
//! // Each frame:
//! let outcome = player.update(&input.movement, camera.yaw, frame_time, &world);
//! camera.set_position(player.position);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::fps_controller::{yaw_forward, yaw_right};
use crate::input::MovementKeys;
use crate::physics::collision::{
    BodyDimensions, CollisionStrategy, collides_with_world, penetration_depth, resolve_penetration,
};
use crate::physics::grounding::{
    GroundingPolicy, SUPPORT_TOLERANCE, find_support_level, is_supported,
};
use crate::world::World;
use crate::world::grid::{column_of, column_on_board};

/// Vertical acceleration in units per second squared (negative is down)
pub const GRAVITY: f32 = -35.0;

/// Initial upward velocity of a jump in units per second
pub const JUMP_VELOCITY: f32 = 10.0;

/// Walk speed in units per second
pub const MOVE_SPEED: f32 = 4.0;

/// Falling below this height teleports the player back to spawn
pub const RESPAWN_Y_THRESHOLD: f32 = -10.0;

/// Eye position at startup and after a respawn
pub const SPAWN_POSITION: Vec3 = Vec3::new(50.0, 2.0, 50.0);

/// Per-tick duration used by the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timestep {
    /// Use the measured frame time.
    #[default]
    Variable,
    /// Advance by a fixed number of seconds per tick, regardless of frame time.
    Fixed(f32),
}

impl Timestep {
    /// Seconds to integrate for a frame that took `frame_time`.
    #[inline]
    pub fn resolve(self, frame_time: f32) -> f32 {
        match self {
            Timestep::Variable => frame_time,
            Timestep::Fixed(step) => step,
        }
    }
}

/// Tunables for the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub move_speed: f32,
    pub respawn_threshold: f32,
    pub spawn_position: Vec3,
    pub body: BodyDimensions,
    pub timestep: Timestep,
    pub collision: CollisionStrategy,
    pub grounding: GroundingPolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            respawn_threshold: RESPAWN_Y_THRESHOLD,
            spawn_position: SPAWN_POSITION,
            body: BodyDimensions::default(),
            timestep: Timestep::Variable,
            collision: CollisionStrategy::PushOut,
            grounding: GroundingPolicy::FeetBox,
        }
    }
}

/// Vertical state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    Grounded,
    Airborne,
}

/// What happened during one [`PlayerController::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub jumped: bool,
    pub landed: bool,
    pub respawned: bool,
}

/// The single player body driven by keyboard input.
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Eye (camera) position
    pub position: Vec3,
    /// Current vertical velocity in units/s (positive = upward)
    pub vertical_velocity: f32,
    pub state: MovementState,
    config: PhysicsConfig,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl PlayerController {
    /// Player at the configured spawn point, grounded and at rest.
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            position: config.spawn_position,
            vertical_velocity: 0.0,
            state: MovementState::Grounded,
            config,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.state == MovementState::Grounded
    }

    /// Advance one tick. `frame_time` is ignored under [`Timestep::Fixed`].
    pub fn update(
        &mut self,
        keys: &MovementKeys,
        yaw: f32,
        frame_time: f32,
        world: &World,
    ) -> StepOutcome {
        let dt = self.config.timestep.resolve(frame_time);
        let mut outcome = StepOutcome::default();

        self.move_horizontal(keys, yaw, dt, world);
        outcome.landed = self.update_grounding(world);

        if self.is_grounded() && keys.jump {
            outcome.jumped = self.try_jump(dt, world);
        }

        if self.state == MovementState::Airborne && !outcome.jumped {
            outcome.landed |= self.integrate_vertical(dt, world);
        }

        outcome.respawned = self.check_respawn();
        outcome
    }

    /// Walk direction for the held keys, normalized, or zero.
    pub fn wish_direction(keys: &MovementKeys, yaw: f32) -> Vec3 {
        let direction = yaw_forward(yaw) * keys.forward_axis() as f32
            + yaw_right(yaw) * keys.right_axis() as f32;
        direction.normalize_or_zero()
    }

    fn move_horizontal(&mut self, keys: &MovementKeys, yaw: f32, dt: f32, world: &World) {
        let direction = Self::wish_direction(keys, yaw);
        if direction == Vec3::ZERO {
            return;
        }

        let body = self.config.body;
        let candidate = self.position + direction * self.config.move_speed * dt;

        match self.config.collision {
            CollisionStrategy::PushOut => {
                let correction = resolve_penetration(&body.aabb_at(candidate), world);
                self.position = candidate + Vec3::new(correction.x, 0.0, correction.z);
            }
            CollisionStrategy::BlockMove => {
                let next = body.aabb_at(candidate);
                let blocked = collides_with_world(&next, world) && {
                    // A player who is already stuck may move, but never deeper.
                    let current = body.aabb_at(self.position);
                    !collides_with_world(&current, world)
                        || penetration_depth(&next, world) > penetration_depth(&current, world)
                };
                if !blocked {
                    self.position = candidate;
                }
            }
        }
    }

    /// Returns true when the player just landed.
    fn update_grounding(&mut self, world: &World) -> bool {
        let supported = is_supported(self.config.grounding, self.position, &self.config.body, world);

        match self.state {
            MovementState::Grounded if !supported => {
                self.state = MovementState::Airborne;
                false
            }
            MovementState::Airborne if supported && self.vertical_velocity <= 0.0 => {
                self.land();
                true
            }
            _ => false,
        }
    }

    fn try_jump(&mut self, dt: f32, world: &World) -> bool {
        let probe = self.position + Vec3::Y * self.config.jump_velocity * dt;
        if collides_with_world(&self.config.body.aabb_at(probe), world) {
            return false;
        }

        self.vertical_velocity = self.config.jump_velocity;
        self.state = MovementState::Airborne;
        true
    }

    /// Gravity plus vertical move. Returns true when the player landed.
    fn integrate_vertical(&mut self, dt: f32, world: &World) -> bool {
        self.vertical_velocity += self.config.gravity * dt;
        let candidate = self.position + Vec3::Y * self.vertical_velocity * dt;
        let body = self.config.body;

        match self.config.collision {
            CollisionStrategy::PushOut => {
                let correction = resolve_penetration(&body.aabb_at(candidate), world);
                self.position = candidate;
                if correction.y == 0.0 {
                    return false;
                }
                self.position.y += correction.y;
                self.vertical_velocity = 0.0;
                if correction.y > 0.0 {
                    self.state = MovementState::Grounded;
                    return true;
                }
                false
            }
            CollisionStrategy::BlockMove => {
                let colliding = collides_with_world(&body.aabb_at(candidate), world);
                let falling = self.vertical_velocity <= 0.0;

                if falling {
                    // Only surfaces under the feet before this step can catch the fall.
                    let support = find_support_level(
                        candidate,
                        self.position.y - body.eye_height + SUPPORT_TOLERANCE,
                        world,
                    );
                    let rest = support + body.eye_height;
                    let over_board = column_on_board(column_of(candidate));
                    if (over_board && candidate.y <= rest) || colliding {
                        if rest >= candidate.y {
                            self.position.y = rest;
                        }
                        self.land();
                        return true;
                    }
                } else if colliding {
                    self.vertical_velocity = 0.0;
                    return false;
                }

                self.position = candidate;
                false
            }
        }
    }

    fn land(&mut self) {
        self.state = MovementState::Grounded;
        self.vertical_velocity = 0.0;
    }

    fn check_respawn(&mut self) -> bool {
        if self.position.y >= self.config.respawn_threshold {
            return false;
        }
        log::debug!("player fell to y={:.1}, respawning", self.position.y);
        self.respawn();
        true
    }

    /// Back to spawn, at rest.
    pub fn respawn(&mut self) {
        self.position = self.config.spawn_position;
        self.land();
    }
}
