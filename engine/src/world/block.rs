//! Block records stored in the world's slot array.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::slots::Slot;

/// Material of a placed block. Discriminants match the 1-4 selector keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    #[default]
    Stone = 1,
    Grass = 2,
    Dirt = 3,
    Wood = 4,
}

impl BlockType {
    /// All selectable types in slot order.
    pub const ALL: [BlockType; 4] = [
        BlockType::Stone,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Wood,
    ];

    /// Type bound to a 1-based selector slot.
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(BlockType::Stone),
            2 => Some(BlockType::Grass),
            3 => Some(BlockType::Dirt),
            4 => Some(BlockType::Wood),
            _ => None,
        }
    }

    /// 1-based selector slot.
    pub fn slot(self) -> u8 {
        self as u8
    }

    /// Display name used by the HUD line.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Stone => "Stone",
            BlockType::Grass => "Grass",
            BlockType::Dirt => "Dirt",
            BlockType::Wood => "Wood",
        }
    }

    /// Flat RGBA tint for untextured drawing and debris.
    pub fn color(self) -> [f32; 4] {
        match self {
            BlockType::Stone => [0.55, 0.55, 0.58, 1.0],
            BlockType::Grass => [0.30, 0.62, 0.25, 1.0],
            BlockType::Dirt => [0.50, 0.35, 0.22, 1.0],
            BlockType::Wood => [0.62, 0.45, 0.25, 1.0],
        }
    }
}

/// A unit cube in the world. Identity is positional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Center of the cube
    pub position: Vec3,
    pub active: bool,
    pub kind: BlockType,
}

impl Block {
    pub fn new(position: Vec3, kind: BlockType) -> Self {
        Self {
            position,
            active: true,
            kind,
        }
    }

    /// Y of the top face.
    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y + 0.5
    }
}

impl Slot for Block {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Generation-checked reference to a block slot.
///
/// Compaction moves entries, so a handle only resolves while the block array
/// generation it was issued under is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHandle {
    pub index: usize,
    pub generation: u32,
}
