//! Block placement and removal.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::block::{Block, BlockHandle, BlockType};
use super::effects::BreakEffect;
use super::grid::{cell_center_y, same_cell, snap_to_grid};
use super::World;
use crate::physics::collision::{Aabb, BodyDimensions};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// An active block already sits in the target cell.
    Occupied,
    /// The new block would end up inside the player.
    ObstructedByPlayer,
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceError::Occupied => write!(f, "target cell is already occupied"),
            PlaceError::ObstructedByPlayer => write!(f, "target cell intersects the player"),
        }
    }
}

impl std::error::Error for PlaceError {}

/// How the player's own body blocks placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementGuard {
    /// Reject when the new cube overlaps the player's bounding box.
    #[default]
    PlayerBox,
    /// Reject when the new cube is one of the grid cells between the
    /// player's feet and eyes.
    PlayerCells,
}

impl PlacementGuard {
    /// Whether a cube at `cell` would collide with the player.
    pub fn obstructs(self, cell: Vec3, player_position: Vec3, body: &BodyDimensions) -> bool {
        match self {
            PlacementGuard::PlayerBox => {
                Aabb::unit_cube(cell).overlaps(&body.aabb_at(player_position))
            }
            PlacementGuard::PlayerCells => player_cells(player_position, body)
                .any(|occupied| same_cell(occupied, cell)),
        }
    }
}

/// Grid cells spanned by the player from the feet up to the eye.
pub fn player_cells(player_position: Vec3, body: &BodyDimensions) -> impl Iterator<Item = Vec3> {
    let column = snap_to_grid(player_position);
    let feet = cell_center_y(player_position.y - body.eye_height);
    let head = cell_center_y(player_position.y);
    let layers = ((head - feet).round().max(0.0)) as i32;
    (0..=layers).map(move |layer| Vec3::new(column.x, feet + layer as f32, column.z))
}

impl World {
    /// Handle of the active block occupying `cell`, if any.
    pub fn block_at(&self, cell: Vec3) -> Option<BlockHandle> {
        self.active_blocks()
            .find(|(_, block)| same_cell(block.position, cell))
            .map(|(index, _)| self.handle(index))
    }

    /// Whether an active block occupies `cell` (0.1 tolerance per axis).
    pub fn is_occupied(&self, cell: Vec3) -> bool {
        self.block_at(cell).is_some()
    }

    /// Place a block of `kind` at `cell` for a player standing at
    /// `player_position`.
    pub fn place_block(
        &mut self,
        cell: Vec3,
        kind: BlockType,
        guard: PlacementGuard,
        player_position: Vec3,
        body: &BodyDimensions,
    ) -> Result<BlockHandle, PlaceError> {
        if guard.obstructs(cell, player_position, body) {
            return Err(PlaceError::ObstructedByPlayer);
        }
        if self.is_occupied(cell) {
            return Err(PlaceError::Occupied);
        }

        let handle = self.insert_block(cell, kind);
        log::debug!("placed {} block at {:?} (#{})", kind.name(), cell, handle.index);
        Ok(handle)
    }

    /// Remove the block behind `handle`, leave `effect` behind and compact.
    ///
    /// Returns the removed block, or `None` when the handle is stale. All
    /// previously issued handles are invalid afterwards.
    pub fn break_block(&mut self, handle: BlockHandle, effect: BreakEffect) -> Option<Block> {
        let block = self.deactivate_block(handle)?;
        self.spawn_break_effect(&block, effect);
        self.compact();
        log::debug!("broke {} block at {:?}", block.kind.name(), block.position);
        Some(block)
    }
}
