//! Collision Detection
//!
//! Axis-aligned box tests between the player body and the unit cubes of the
//! world, plus ray/box intersection for picking.
//!
//! # Conventions
//!
//! - Overlap is inclusive: boxes that only share a face overlap.
//! - Blocks are unit cubes centered on their position.
//! - The player body is a box centered on the camera position.
//!
//! # Penetration resolution
//!
//! [`resolve_penetration`] scans blocks in storage order and resolves against
//! the FIRST block the player overlaps, not the deepest one. The push is along
//! the axis with the smallest overlap depth (ties prefer X, then Y, then Z)
//! and towards the nearer face.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::World;
use crate::world::grid::HALF_TILE;

/// Horizontal half-width of the player body.
pub const PLAYER_RADIUS: f32 = 0.3;

/// Full height of the player body.
pub const PLAYER_HEIGHT: f32 = 2.0;

/// Camera height above the ground the player stands on.
pub const CAMERA_HEIGHT: f32 = 2.0;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box of a block centered at `center`.
    pub fn unit_cube(center: Vec3) -> Self {
        Self::from_center_half_extents(center, Vec3::splat(HALF_TILE))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive overlap on all three axes.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.min.x <= other.max.x && self.max.x >= other.min.x)
            && (self.min.y <= other.max.y && self.max.y >= other.min.y)
            && (self.min.z <= other.max.z && self.max.z >= other.min.z)
    }

    /// Same box moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Inclusive box overlap test. Symmetric in its arguments.
#[inline]
pub fn boxes_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Size of the player body relative to the camera position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDimensions {
    /// Horizontal half-width of the body box
    pub radius: f32,
    /// Half of the body box height; the box is centered on the camera
    pub half_height: f32,
    /// Camera height above the ground level used by height-match grounding
    pub eye_height: f32,
}

impl Default for BodyDimensions {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            half_height: PLAYER_HEIGHT / 2.0,
            eye_height: CAMERA_HEIGHT,
        }
    }
}

impl BodyDimensions {
    /// Body box for a camera at `position`.
    pub fn aabb_at(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(
            position,
            Vec3::new(self.radius, self.half_height, self.radius),
        )
    }

    /// Y of the bottom of the body box.
    #[inline]
    pub fn feet_y(&self, position: Vec3) -> f32 {
        position.y - self.half_height
    }
}

/// How the integrator reacts to a move that collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionStrategy {
    /// Apply the minimum-translation correction from [`resolve_penetration`].
    #[default]
    PushOut,
    /// Refuse the move outright and snap to the ground level when landing.
    BlockMove,
}

/// Correction that pushes `player` out of a single overlapping `block` box.
///
/// Returns zero if the boxes do not overlap.
pub fn penetration_against(player: &Aabb, block: &Aabb) -> Vec3 {
    if !player.overlaps(block) {
        return Vec3::ZERO;
    }

    let depth_below = player.max - block.min;
    let depth_above = block.max - player.min;
    let overlap = depth_below.min(depth_above);

    // Negative when the player's far side is the shallower one.
    let push = |axis: usize| {
        if depth_below[axis] < depth_above[axis] {
            -overlap[axis]
        } else {
            overlap[axis]
        }
    };

    if overlap.x <= overlap.y && overlap.x <= overlap.z {
        Vec3::new(push(0), 0.0, 0.0)
    } else if overlap.y <= overlap.z {
        Vec3::new(0.0, push(1), 0.0)
    } else {
        Vec3::new(0.0, 0.0, push(2))
    }
}

/// Correction for the first active block (in storage order) that overlaps
/// `player`. Zero if nothing overlaps.
pub fn resolve_penetration(player: &Aabb, world: &World) -> Vec3 {
    world
        .active_blocks()
        .map(|(_, block)| Aabb::unit_cube(block.position))
        .find(|block_box| player.overlaps(block_box))
        .map(|block_box| penetration_against(player, &block_box))
        .unwrap_or(Vec3::ZERO)
}

/// Total correction depth of `bounds` against every active block it overlaps.
/// Zero when free or only touching.
pub fn penetration_depth(bounds: &Aabb, world: &World) -> f32 {
    world
        .active_blocks()
        .map(|(_, block)| penetration_against(bounds, &Aabb::unit_cube(block.position)))
        .map(|correction| correction.abs().max_element())
        .sum()
}

/// Whether `bounds` overlaps any active block.
pub fn collides_with_world(bounds: &Aabb, world: &World) -> bool {
    world
        .active_blocks()
        .any(|(_, block)| bounds.overlaps(&Aabb::unit_cube(block.position)))
}

/// A half-line used for picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab-method intersection with `bounds`.
    ///
    /// Returns the distance to the entry point, the exit point when the ray
    /// starts inside the box, or `None` when the box is missed or behind.
    pub fn intersect_aabb(&self, bounds: &Aabb) -> Option<f32> {
        let inv = |d: f32| {
            if d.abs() > 1e-10 {
                1.0 / d
            } else {
                f32::MAX * d.signum()
            }
        };
        let inv_dir = Vec3::new(inv(self.direction.x), inv(self.direction.y), inv(self.direction.z));

        let t1 = (bounds.min - self.origin) * inv_dir;
        let t2 = (bounds.max - self.origin) * inv_dir;

        let t_min = t1.min(t2).max_element();
        let t_max = t1.max(t2).min_element();

        if t_max >= t_min && t_max >= 0.0 {
            if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
        } else {
            None
        }
    }
}

/// Outward unit normal of the face of `bounds` closest to `point`.
pub fn aabb_surface_normal(point: Vec3, bounds: &Aabb) -> Vec3 {
    let half_extents = (bounds.max - bounds.min) * 0.5;
    let local = (point - bounds.center()) / half_extents;
    let abs = local.abs();

    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::new(local.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.z {
        Vec3::new(0.0, local.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, local.z.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BlockType;

    #[test]
    fn test_overlap_is_inclusive() {
        let a = Aabb::unit_cube(Vec3::ZERO);
        let b = Aabb::unit_cube(Vec3::new(1.0, 0.0, 0.0));
        assert!(boxes_overlap(&a, &b));
        let c = Aabb::unit_cube(Vec3::new(1.01, 0.0, 0.0));
        assert!(!boxes_overlap(&a, &c));
    }

    #[test]
    fn test_penetration_zero_when_apart() {
        let player = Aabb::unit_cube(Vec3::new(5.0, 0.0, 0.0));
        let block = Aabb::unit_cube(Vec3::ZERO);
        assert_eq!(penetration_against(&player, &block), Vec3::ZERO);
    }

    #[test]
    fn test_penetration_ties_prefer_x() {
        let block = Aabb::unit_cube(Vec3::ZERO);
        let player = Aabb::unit_cube(Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(penetration_against(&player, &block), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_penetration_y_beats_z_on_tie() {
        let block = Aabb::unit_cube(Vec3::ZERO);
        let player = Aabb::unit_cube(Vec3::new(0.0, 0.75, 0.75));
        assert_eq!(penetration_against(&player, &block), Vec3::new(0.0, 0.25, 0.0));
    }

    #[test]
    fn test_penetration_depth_sums_overlaps() {
        let mut world = World::with_seed(1);
        world.insert_block(Vec3::new(5.0, 0.5, 5.0), BlockType::Stone);
        world.insert_block(Vec3::new(4.0, 0.5, 5.0), BlockType::Stone);

        let free = BodyDimensions::default().aabb_at(Vec3::new(8.0, 0.5, 5.0));
        assert_eq!(penetration_depth(&free, &world), 0.0);

        let stuck = BodyDimensions::default().aabb_at(Vec3::new(4.4, 0.5, 5.0));
        assert!((penetration_depth(&stuck, &world) - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_ray_starts_inside_box() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = ray.intersect_aabb(&Aabb::unit_cube(Vec3::ZERO));
        assert!(t.is_some_and(|t| (t - 0.5).abs() < 0.001));
    }

    #[test]
    fn test_ray_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(ray.intersect_aabb(&Aabb::unit_cube(Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_ray_parallel_outside_slab_misses() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, -5.0), Vec3::Z);
        assert!(ray.intersect_aabb(&Aabb::unit_cube(Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_surface_normal_faces() {
        let cube = Aabb::unit_cube(Vec3::ZERO);
        assert_eq!(aabb_surface_normal(Vec3::new(0.5, 0.1, 0.0), &cube), Vec3::X);
        assert_eq!(aabb_surface_normal(Vec3::new(0.0, -0.5, 0.2), &cube), Vec3::NEG_Y);
        assert_eq!(aabb_surface_normal(Vec3::new(0.1, 0.0, 0.5), &cube), Vec3::Z);
    }
}
