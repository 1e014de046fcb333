//! Break Effects
//!
//! Cosmetic entities left behind when a block is removed. They never collide
//! with the player and are reclaimed by the same compaction pass as blocks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::block::BlockType;
use super::slots::Slot;

/// Seconds a fading ghost stays visible.
pub const FADE_TIME: f32 = 0.1;

/// Cap on simultaneously live fading ghosts.
pub const MAX_FADING_BLOCKS: usize = 100;

/// Debris pieces spawned per broken block.
pub const DEBRIS_PER_BLOCK: usize = 8;

/// Debris below this height is removed.
pub const DEBRIS_DESPAWN_Y: f32 = 0.0;

/// Seconds a debris piece lives at most.
pub const DEBRIS_LIFETIME: f32 = 2.0;

/// Edge length of a debris cube.
pub const DEBRIS_SIZE: f32 = 0.2;

/// What a broken block leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEffect {
    /// A single ghost cube that fades out over [`FADE_TIME`].
    #[default]
    Fade,
    /// A burst of [`DEBRIS_PER_BLOCK`] gravity-affected pieces.
    Debris,
    /// Nothing.
    None,
}

/// Ghost of a removed block, fading out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadingBlock {
    pub position: Vec3,
    pub kind: BlockType,
    pub fade_timer: f32,
    pub active: bool,
}

impl FadingBlock {
    pub fn new(position: Vec3, kind: BlockType) -> Self {
        Self {
            position,
            kind,
            fade_timer: FADE_TIME,
            active: true,
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        if !self.active {
            return;
        }
        self.fade_timer -= delta_time;
        if self.fade_timer <= 0.0 {
            self.active = false;
        }
    }
}

impl Slot for FadingBlock {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A small cube flung out of a broken block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debris {
    pub position: Vec3,
    pub velocity: Vec3,
    pub kind: BlockType,
    pub lifetime: f32,
    pub active: bool,
}

impl Debris {
    pub fn new(position: Vec3, velocity: Vec3, kind: BlockType) -> Self {
        Self {
            position,
            velocity,
            kind,
            lifetime: DEBRIS_LIFETIME,
            active: true,
        }
    }

    /// Integrate under `gravity` (negative is down).
    pub fn update(&mut self, delta_time: f32, gravity: f32) {
        if !self.active {
            return;
        }

        self.lifetime -= delta_time;
        self.velocity.y += gravity * delta_time;
        self.position += self.velocity * delta_time;

        if self.position.y < DEBRIS_DESPAWN_Y || self.lifetime <= 0.0 {
            self.active = false;
        }
    }

    /// Remaining life as a 0..1 fraction, for alpha.
    pub fn life_fraction(&self) -> f32 {
        (self.lifetime / DEBRIS_LIFETIME).clamp(0.0, 1.0)
    }
}

impl Slot for Debris {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Spawn `count` debris pieces around `position` with randomized outward
/// velocity: 1-3 u/s horizontally in a random direction, 2-5 u/s upward.
pub fn spawn_debris(
    rng: &mut fastrand::Rng,
    position: Vec3,
    kind: BlockType,
    count: usize,
) -> Vec<Debris> {
    let mut pieces = Vec::with_capacity(count);

    for _ in 0..count {
        let angle = rng.f32() * std::f32::consts::TAU;
        let speed = 1.0 + rng.f32() * 2.0;
        let lift = 2.0 + rng.f32() * 3.0;

        let velocity = Vec3::new(angle.cos() * speed, lift, angle.sin() * speed);
        let offset = Vec3::new(
            rng.f32() - 0.5,
            rng.f32() - 0.5,
            rng.f32() - 0.5,
        ) * 0.5;

        pieces.push(Debris::new(position + offset, velocity, kind));
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fading_block_expires_after_fade_time() {
        let mut ghost = FadingBlock::new(Vec3::ZERO, BlockType::Stone);
        ghost.update(0.05);
        assert!(ghost.active);
        ghost.update(0.05);
        assert!(!ghost.active);
    }

    #[test]
    fn test_debris_falls_and_despawns() {
        let mut piece = Debris::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, BlockType::Wood);
        let mut frames = 0;
        while piece.active && frames < 1000 {
            piece.update(1.0 / 60.0, -35.0);
            frames += 1;
        }
        assert!(!piece.active);
        assert!(frames < 60, "should hit the floor well before lifetime, took {frames}");
    }

    #[test]
    fn test_debris_lifetime_expires_without_falling() {
        let mut piece = Debris::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, BlockType::Wood);
        piece.update(DEBRIS_LIFETIME + 0.01, 0.0);
        assert!(!piece.active);
    }

    #[test]
    fn test_spawn_debris_moves_outward_and_up() {
        let mut rng = fastrand::Rng::with_seed(7);
        let pieces = spawn_debris(&mut rng, Vec3::new(5.0, 0.5, 5.0), BlockType::Grass, 8);
        assert_eq!(pieces.len(), 8);
        for piece in &pieces {
            let horizontal = Vec3::new(piece.velocity.x, 0.0, piece.velocity.z).length();
            assert!((1.0..=3.0001).contains(&horizontal));
            assert!(piece.velocity.y >= 2.0 && piece.velocity.y <= 5.0);
            assert!((piece.position - Vec3::new(5.0, 0.5, 5.0)).abs().max_element() <= 0.25);
            assert_eq!(piece.kind, BlockType::Grass);
        }
    }

    #[test]
    fn test_spawn_debris_is_reproducible_with_seed() {
        let a = spawn_debris(&mut fastrand::Rng::with_seed(3), Vec3::ZERO, BlockType::Dirt, 4);
        let b = spawn_debris(&mut fastrand::Rng::with_seed(3), Vec3::ZERO, BlockType::Dirt, 4);
        assert_eq!(a, b);
    }
}
