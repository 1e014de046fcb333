//! Player Module
//!
//! The single first-person player body.
//!
//! # Components
//!
//! - [`PlayerController`] - Yaw-relative WASD movement, jump and gravity with
//!   configurable collision and grounding
//! - [`PhysicsConfig`] - Tunables and policy selection for the integrator
//! - [`Timestep`] - Variable or fixed per-tick duration

pub mod movement_controller;

pub use movement_controller::{
    MovementState, PhysicsConfig, PlayerController, StepOutcome, Timestep,
    GRAVITY, JUMP_VELOCITY, MOVE_SPEED, RESPAWN_Y_THRESHOLD, SPAWN_POSITION,
};
