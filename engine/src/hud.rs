//! HUD numbers
//!
//! Values the presentation layer draws: the throttled FPS readout, the
//! pulsing alpha of the placement ghost, fade alpha of broken blocks and the
//! one-line status text.

use crate::world::BlockType;
use crate::world::effects::FADE_TIME;

/// Seconds between FPS readout refreshes.
pub const FPS_UPDATE_INTERVAL: f32 = 0.1;

/// FPS shown before the first refresh.
pub const INITIAL_FPS: u32 = 60;

pub const GHOST_BLOCK_MIN_ALPHA: f32 = 0.3;
pub const GHOST_BLOCK_MAX_ALPHA: f32 = 0.7;
/// Pulses per second of the placement ghost
pub const GHOST_BLOCK_SPEED: f32 = 2.0;

/// Frame-rate readout that only changes every [`FPS_UPDATE_INTERVAL`].
#[derive(Debug, Clone)]
pub struct FpsCounter {
    timer: f32,
    frames: u32,
    displayed: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            timer: 0.0,
            frames: 0,
            displayed: INITIAL_FPS,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame. Returns true when the readout changed.
    pub fn tick(&mut self, frame_time: f32) -> bool {
        self.timer += frame_time;
        self.frames += 1;
        if self.timer < FPS_UPDATE_INTERVAL {
            return false;
        }

        let fps = (self.frames as f32 / self.timer).round() as u32;
        self.timer = 0.0;
        self.frames = 0;
        let changed = fps != self.displayed;
        self.displayed = fps;
        changed
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }
}

/// Ghost alpha at `time` seconds: a triangle wave between the min and max.
pub fn ghost_alpha(time: f32) -> f32 {
    let t = (time * GHOST_BLOCK_SPEED).rem_euclid(1.0);
    let triangle = if t < 0.5 { t * 2.0 } else { 1.0 - (t - 0.5) * 2.0 };
    GHOST_BLOCK_MIN_ALPHA + (GHOST_BLOCK_MAX_ALPHA - GHOST_BLOCK_MIN_ALPHA) * triangle
}

/// Opacity of a fading ghost with `fade_timer` seconds left.
pub fn fade_alpha(fade_timer: f32) -> f32 {
    (fade_timer / FADE_TIME).clamp(0.0, 1.0)
}

/// `FPS: n | Blocks: n | <Type>`
pub fn status_line(fps: u32, blocks: usize, selected: BlockType) -> String {
    format!("FPS: {fps} | Blocks: {blocks} | {}", selected.name())
}
