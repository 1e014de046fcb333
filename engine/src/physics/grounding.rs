//! Grounding
//!
//! Answers two questions for the integrator: how high is the ground under a
//! column, and is the player standing on something right now.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, BodyDimensions};
use crate::world::World;
use crate::world::grid::{
    GROUND_SLAB_BOTTOM, GROUND_SLAB_TOP, HALF_TILE, column_of, column_on_board,
    position_over_board,
};

/// Ground level reported for columns off the board.
pub const OUT_OF_BOUNDS_GROUND: f32 = -1000.0;

/// Thickness of the feet band and of a block's top band.
pub const FEET_BAND: f32 = 0.1;

/// Allowed distance between the eye and `ground + eye_height` for
/// [`GroundingPolicy::HeightMatch`].
pub const SUPPORT_TOLERANCE: f32 = 0.15;

/// How "standing on something" is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundingPolicy {
    /// A thin band under the feet overlaps a block top or the ground slab.
    #[default]
    FeetBox,
    /// The eye sits at eye height above the highest block top under the feet.
    HeightMatch,
}

/// Highest walkable surface in the column under `position`.
///
/// `0.0` for an empty board column, [`OUT_OF_BOUNDS_GROUND`] off the board.
pub fn find_ground_level(position: Vec3, world: &World) -> f32 {
    let column = column_of(position);
    if !column_on_board(column) {
        return OUT_OF_BOUNDS_GROUND;
    }

    world
        .active_blocks()
        .filter(|(_, block)| column_of(block.position) == column)
        .map(|(_, block)| block.top())
        .fold(0.0, f32::max)
}

/// Highest walkable surface in the column under `position` that is not above
/// `max_height`. Blocks overhead are ignored.
///
/// `0.0` when nothing qualifies, [`OUT_OF_BOUNDS_GROUND`] off the board.
pub fn find_support_level(position: Vec3, max_height: f32, world: &World) -> f32 {
    let column = column_of(position);
    if !column_on_board(column) {
        return OUT_OF_BOUNDS_GROUND;
    }

    world
        .active_blocks()
        .filter(|(_, block)| column_of(block.position) == column)
        .map(|(_, block)| block.top())
        .filter(|&top| top <= max_height)
        .fold(0.0, f32::max)
}

/// Support level under a player whose eye is at `position`: the highest top
/// within [`SUPPORT_TOLERANCE`] above the feet.
pub fn support_under(position: Vec3, body: &BodyDimensions, world: &World) -> f32 {
    find_support_level(position, position.y - body.eye_height + SUPPORT_TOLERANCE, world)
}

/// Band just below the player's feet.
pub fn feet_band(position: Vec3, body: &BodyDimensions) -> Aabb {
    let feet = body.feet_y(position);
    Aabb::new(
        Vec3::new(position.x - body.radius, feet - FEET_BAND, position.z - body.radius),
        Vec3::new(position.x + body.radius, feet, position.z + body.radius),
    )
}

fn top_band(block_position: Vec3) -> Aabb {
    let top = block_position.y + HALF_TILE;
    Aabb::new(
        Vec3::new(block_position.x - HALF_TILE, top - FEET_BAND, block_position.z - HALF_TILE),
        Vec3::new(block_position.x + HALF_TILE, top, block_position.z + HALF_TILE),
    )
}

/// Whether the player at `position` is supported under `policy`.
pub fn is_supported(
    policy: GroundingPolicy,
    position: Vec3,
    body: &BodyDimensions,
    world: &World,
) -> bool {
    match policy {
        GroundingPolicy::FeetBox => {
            let band = feet_band(position, body);
            let on_block = world
                .active_blocks()
                .any(|(_, block)| band.overlaps(&top_band(block.position)));
            if on_block {
                return true;
            }
            band.min.y <= GROUND_SLAB_TOP
                && band.max.y >= GROUND_SLAB_BOTTOM
                && position_over_board(position)
        }
        GroundingPolicy::HeightMatch => {
            if !column_on_board(column_of(position)) {
                return false;
            }
            let ground = support_under(position, body, world);
            (position.y - (ground + body.eye_height)).abs() < SUPPORT_TOLERANCE
        }
    }
}
