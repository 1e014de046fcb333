//! Physics module
//!
//! Hand-written box collision for the block sandbox. No physics library is
//! involved; everything is axis-aligned boxes against unit cubes.
//!
//! # Unit System
//!
//! **1 unit = 1 block edge.** Velocities are units per second, gravity is
//! units per second squared and negative (Y is up).
//!
//! # Submodules
//!
//! - [`types`] - Math types re-exported from glam
//! - [`collision`] - Box overlap, penetration correction and ray/box tests
//! - [`grounding`] - Ground level lookup and support policies

pub mod collision;
pub mod grounding;
pub mod types;

pub use collision::{
    Aabb, BodyDimensions, CollisionStrategy, Ray, aabb_surface_normal, boxes_overlap,
    collides_with_world, penetration_depth, resolve_penetration,
};
pub use grounding::{
    GroundingPolicy, OUT_OF_BOUNDS_GROUND, find_ground_level, find_support_level, is_supported,
    support_under,
};
pub use types::Vec3;
