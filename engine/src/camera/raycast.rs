//! Raycast Module
//!
//! Screen-center picking for block placement and removal. The ray leaves the
//! eye along the camera forward vector and is tested against every active
//! block, then against the ground slab.

use glam::Vec3;

use crate::physics::collision::{Aabb, Ray, aabb_surface_normal};
use crate::physics::grounding::find_ground_level;
use crate::world::grid::{
    BOARD_SIZE, GROUND_SLAB_BOTTOM, GROUND_SLAB_TOP, HALF_TILE, column_of, column_on_board,
};
use crate::world::{BlockHandle, World};

/// Hits farther than this are ignored.
pub const MAX_PICK_DISTANCE: f32 = 10000.0;

/// The block face under the crosshair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockHit {
    pub handle: BlockHandle,
    /// Axis-aligned outward normal of the hit face
    pub normal: Vec3,
    pub distance: f32,
}

/// Result of picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Cell where a new block would go
    pub cell: Vec3,
    /// Block that would be broken; `None` when the ray hit the ground
    pub hit: Option<BlockHit>,
}

/// Box covering the whole ground slab under the board.
pub fn ground_slab() -> Aabb {
    let far = BOARD_SIZE as f32 - HALF_TILE;
    Aabb::new(
        Vec3::new(-HALF_TILE, GROUND_SLAB_BOTTOM, -HALF_TILE),
        Vec3::new(far, GROUND_SLAB_TOP, far),
    )
}

/// Closest active block along `ray` within [`MAX_PICK_DISTANCE`].
///
/// Ties keep the block that comes first in storage order.
pub fn raycast_blocks(ray: &Ray, world: &World) -> Option<BlockHit> {
    let mut closest: Option<(usize, f32, Aabb)> = None;

    for (index, block) in world.active_blocks() {
        let bounds = Aabb::unit_cube(block.position);
        let Some(distance) = ray.intersect_aabb(&bounds) else {
            continue;
        };
        let best = closest.map_or(MAX_PICK_DISTANCE, |(_, d, _)| d);
        if distance < best {
            closest = Some((index, distance, bounds));
        }
    }

    closest.map(|(index, distance, bounds)| BlockHit {
        handle: world.handle(index),
        normal: aabb_surface_normal(ray.at(distance), &bounds).round(),
        distance,
    })
}

/// What the crosshair points at from `origin` looking along `direction`.
pub fn pick_target(world: &World, origin: Vec3, direction: Vec3) -> Option<Target> {
    let ray = Ray::new(origin, direction);

    if let Some(hit) = raycast_blocks(&ray, world) {
        let block = world.block(hit.handle)?;
        return Some(Target {
            cell: block.position + hit.normal,
            hit: Some(hit),
        });
    }

    let distance = ray.intersect_aabb(&ground_slab())?;
    if distance >= MAX_PICK_DISTANCE {
        return None;
    }
    let point = ray.at(distance);
    let column = column_of(point);
    if !column_on_board(column) {
        return None;
    }

    let cell_x = column.x as f32;
    let cell_z = column.y as f32;
    let ground = find_ground_level(Vec3::new(cell_x, 0.0, cell_z), world);
    Some(Target {
        cell: Vec3::new(cell_x, ground + HALF_TILE, cell_z),
        hit: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BlockType;

    #[test]
    fn test_pick_block_top_face() {
        let mut world = World::with_seed(1);
        let handle = world.insert_block(Vec3::new(10.0, 0.5, 10.0), BlockType::Stone);

        let target = pick_target(&world, Vec3::new(10.0, 5.0, 10.0), Vec3::NEG_Y)
            .expect("block below the eye");
        assert_eq!(target.cell, Vec3::new(10.0, 1.5, 10.0));
        let hit = target.hit.expect("block hit");
        assert_eq!(hit.handle, handle);
        assert_eq!(hit.normal, Vec3::Y);
        assert!((hit.distance - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_pick_side_face() {
        let mut world = World::with_seed(1);
        world.insert_block(Vec3::new(10.0, 0.5, 10.0), BlockType::Stone);

        let target = pick_target(&world, Vec3::new(10.0, 0.5, 15.0), Vec3::NEG_Z)
            .expect("block ahead");
        assert_eq!(target.cell, Vec3::new(10.0, 0.5, 11.0));
    }

    #[test]
    fn test_closest_block_wins() {
        let mut world = World::with_seed(1);
        world.insert_block(Vec3::new(10.0, 0.5, 5.0), BlockType::Stone);
        let near = world.insert_block(Vec3::new(10.0, 0.5, 8.0), BlockType::Wood);

        let target = pick_target(&world, Vec3::new(10.0, 0.5, 12.0), Vec3::NEG_Z)
            .expect("blocks ahead");
        assert_eq!(target.hit.map(|hit| hit.handle), Some(near));
    }

    #[test]
    fn test_pick_ground() {
        let world = World::with_seed(1);
        let target = pick_target(&world, Vec3::new(20.2, 2.0, 30.0), Vec3::new(0.0, -1.0, -0.5))
            .expect("ground ahead");
        assert!(target.hit.is_none());
        assert_eq!(target.cell, Vec3::new(20.0, 0.5, 29.0));
    }

    #[test]
    fn test_pick_sky_is_none() {
        let world = World::with_seed(1);
        assert!(pick_target(&world, Vec3::new(50.0, 2.0, 50.0), Vec3::Y).is_none());
    }

    #[test]
    fn test_pick_off_board_is_none() {
        let world = World::with_seed(1);
        assert!(pick_target(&world, Vec3::new(-5.0, 2.0, 50.0), Vec3::NEG_Y).is_none());
    }
}
