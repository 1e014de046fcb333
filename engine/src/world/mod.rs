//! World Module
//!
//! Owns every entity array of the sandbox: placed blocks, fading ghosts and
//! debris. All arrays are flat [`SlotArray`]s; removal tombstones an entry and
//! [`World::compact`] reclaims the slots.
//!
//! ## Board
//! The world sits on a fixed 100x100 board (see [`grid`]). Height is
//! unbounded and nothing is persisted between runs.

pub mod block;
pub mod effects;
pub mod grid;
pub mod mutation;
pub mod slots;

pub use block::{Block, BlockHandle, BlockType};
pub use effects::{
    BreakEffect, Debris, FadingBlock, DEBRIS_PER_BLOCK, FADE_TIME, MAX_FADING_BLOCKS,
};
pub use grid::{BOARD_SIZE, TILE_SIZE, column_of, column_on_board, snap_to_grid};
pub use mutation::{PlaceError, PlacementGuard};
pub use slots::{Slot, SlotArray};

use glam::Vec3;
use static_assertions::const_assert;

/// Starting capacity of the block array.
pub const INITIAL_BLOCK_CAPACITY: usize = 100;

const_assert!(INITIAL_BLOCK_CAPACITY > 0);
const_assert!(MAX_FADING_BLOCKS > 0);
const_assert!(BOARD_SIZE > 0);

/// The process-wide world state, owned by the frame loop.
#[derive(Debug, Clone)]
pub struct World {
    blocks: SlotArray<Block>,
    fading: SlotArray<FadingBlock>,
    debris: SlotArray<Debris>,
    rng: fastrand::Rng,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Empty world with an entropy-seeded debris RNG.
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Empty world with a fixed debris seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            blocks: SlotArray::with_capacity(INITIAL_BLOCK_CAPACITY),
            fading: SlotArray::with_capacity(MAX_FADING_BLOCKS),
            debris: SlotArray::with_capacity(INITIAL_BLOCK_CAPACITY),
            rng,
        }
    }

    /// Append an active block without any occupancy check.
    ///
    /// Use [`World::place_block`] for player placement.
    pub fn insert_block(&mut self, position: Vec3, kind: BlockType) -> BlockHandle {
        let index = self.blocks.push(Block::new(position, kind));
        self.handle(index)
    }

    /// Tombstone a block. Returns the block as it was, or `None` for a stale
    /// or inactive handle. The slot is reclaimed by the next compaction.
    pub fn deactivate_block(&mut self, handle: BlockHandle) -> Option<Block> {
        let block = *self.block(handle)?;
        self.blocks.deactivate(handle.index);
        Some(block)
    }

    /// Handle for a block index under the current generation.
    #[inline]
    pub fn handle(&self, index: usize) -> BlockHandle {
        BlockHandle {
            index,
            generation: self.blocks.generation(),
        }
    }

    /// Resolve a handle to an active block.
    pub fn block(&self, handle: BlockHandle) -> Option<&Block> {
        if handle.generation != self.blocks.generation() {
            return None;
        }
        self.blocks.get(handle.index).filter(|block| block.active)
    }

    /// Raw block storage.
    #[inline]
    pub fn blocks(&self) -> &SlotArray<Block> {
        &self.blocks
    }

    /// Active blocks with their indices, in storage order.
    pub fn active_blocks(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.blocks.iter_active()
    }

    /// Number of block slots in use (equals the active count after compaction).
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Live fading ghosts.
    #[inline]
    pub fn fading_blocks(&self) -> &SlotArray<FadingBlock> {
        &self.fading
    }

    /// Live debris pieces.
    #[inline]
    pub fn debris(&self) -> &SlotArray<Debris> {
        &self.debris
    }

    /// Age fading ghosts and integrate debris. Expired entries are tombstoned.
    pub fn update_effects(&mut self, delta_time: f32, gravity: f32) {
        for ghost in self.fading.iter_active_mut() {
            ghost.update(delta_time);
        }
        for piece in self.debris.iter_active_mut() {
            piece.update(delta_time, gravity);
        }
    }

    /// Reclaim every inactive slot in all entity arrays.
    ///
    /// O(n) over all arrays. Invalidates every [`BlockHandle`] issued before
    /// if any block was removed. Returns the number of blocks reclaimed.
    pub fn compact(&mut self) -> usize {
        let removed = self.blocks.compact();
        self.fading.compact();
        self.debris.compact();
        removed
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.fading.clear();
        self.debris.clear();
    }

    fn spawn_break_effect(&mut self, block: &Block, effect: BreakEffect) {
        match effect {
            BreakEffect::Fade => {
                if self.fading.len() < MAX_FADING_BLOCKS {
                    self.fading.push(FadingBlock::new(block.position, block.kind));
                }
            }
            BreakEffect::Debris => {
                let pieces =
                    effects::spawn_debris(&mut self.rng, block.position, block.kind, DEBRIS_PER_BLOCK);
                for piece in pieces {
                    self.debris.push(piece);
                }
            }
            BreakEffect::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_resolve() {
        let mut world = World::with_seed(1);
        let handle = world.insert_block(Vec3::new(1.0, 0.5, 1.0), BlockType::Stone);
        assert_eq!(world.block(handle).map(|b| b.kind), Some(BlockType::Stone));
        assert_eq!(world.block_count(), 1);
    }

    #[test]
    fn test_handle_goes_stale_after_compaction() {
        let mut world = World::with_seed(1);
        let first = world.insert_block(Vec3::new(1.0, 0.5, 1.0), BlockType::Stone);
        let second = world.insert_block(Vec3::new(2.0, 0.5, 1.0), BlockType::Wood);

        assert!(world.deactivate_block(first).is_some());
        assert_eq!(world.compact(), 1);

        assert!(world.block(second).is_none());
        let moved = world.handle(0);
        assert_eq!(world.block(moved).map(|b| b.kind), Some(BlockType::Wood));
    }

    #[test]
    fn test_deactivate_inactive_handle_is_none() {
        let mut world = World::with_seed(1);
        let handle = world.insert_block(Vec3::ZERO, BlockType::Dirt);
        assert!(world.deactivate_block(handle).is_some());
        assert!(world.deactivate_block(handle).is_none());
    }

    #[test]
    fn test_fade_effect_is_capped() {
        let mut world = World::with_seed(1);
        let block = Block::new(Vec3::ZERO, BlockType::Stone);
        for _ in 0..MAX_FADING_BLOCKS + 5 {
            world.spawn_break_effect(&block, BreakEffect::Fade);
        }
        assert_eq!(world.fading_blocks().len(), MAX_FADING_BLOCKS);
    }

    #[test]
    fn test_effects_expire_and_compact() {
        let mut world = World::with_seed(9);
        let block = Block::new(Vec3::new(4.0, 0.5, 4.0), BlockType::Grass);
        world.spawn_break_effect(&block, BreakEffect::Fade);
        world.spawn_break_effect(&block, BreakEffect::Debris);
        assert_eq!(world.debris().len(), DEBRIS_PER_BLOCK);

        for _ in 0..200 {
            world.update_effects(1.0 / 60.0, -35.0);
            world.compact();
        }
        assert!(world.fading_blocks().is_empty());
        assert!(world.debris().is_empty());
    }
}
