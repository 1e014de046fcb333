//! Frame orchestration
//!
//! [`Sandbox`] owns the world, the player, the camera and the cursor state and
//! advances all of them by one frame in [`Sandbox::tick`]:
//!
//! 1. Block selection and cursor capture from this frame's keys
//! 2. Click filtering through the cursor manager
//! 3. Mouse look (captured only)
//! 4. Player integration
//! 5. Picking from the new eye position
//! 6. Placement (left click) then removal (right click)
//! 7. Effect aging and compaction of every entity array

use glam::Vec3;

use crate::camera::{FPSCameraController, Target, pick_target};
use crate::config::SandboxConfig;
use crate::hud::{self, FpsCounter};
use crate::input::{ClickDisposition, CursorManager, FrameInput, MouseButton};
use crate::player::{PlayerController, StepOutcome};
use crate::world::{Block, BlockHandle, BlockType, PlaceError, World};

/// What one tick did, for presentation and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Crosshair target after this frame's movement
    pub target: Option<Target>,
    /// Outcome of a placement attempt, if the left click reached the world
    pub placed: Option<Result<BlockHandle, PlaceError>>,
    /// Block removed by a right click
    pub broken: Option<Block>,
    pub step: StepOutcome,
    /// Seconds the integrator advanced
    pub dt: f32,
}

/// The whole simulation state of one sandbox window.
#[derive(Debug, Clone)]
pub struct Sandbox {
    config: SandboxConfig,
    world: World,
    player: PlayerController,
    camera: FPSCameraController,
    cursor: CursorManager,
    selected: BlockType,
    target: Option<Target>,
    fps: FpsCounter,
    elapsed: f32,
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Self {
        let world = match config.world.seed {
            Some(seed) => World::with_seed(seed),
            None => World::new(),
        };
        Self::with_world(config, world)
    }

    /// Sandbox over an existing world, e.g. one prepared by a test.
    pub fn with_world(config: SandboxConfig, world: World) -> Self {
        let player = PlayerController::new(config.physics);
        let camera =
            FPSCameraController::with_position_and_sensitivity(player.position, config.mouse_sensitivity);
        Self {
            config,
            world,
            player,
            camera,
            cursor: CursorManager::new(),
            selected: BlockType::default(),
            target: None,
            fps: FpsCounter::new(),
            elapsed: 0.0,
        }
    }

    /// Advance one frame that took `frame_time` seconds of wall clock.
    pub fn tick(&mut self, input: &FrameInput, frame_time: f32) -> FrameReport {
        self.elapsed += frame_time;
        self.fps.tick(frame_time);

        if let Some(kind) = input.select_slot.and_then(BlockType::from_slot) {
            self.selected = kind;
        }
        if input.toggle_capture {
            self.cursor.toggle_capture();
        }

        let (place, remove) = self.filter_clicks(input);

        if self.cursor.mouse_look_enabled() {
            self.camera.apply_mouse_delta(input.look_delta.0, input.look_delta.1);
        }

        let step = self
            .player
            .update(&input.movement, self.camera.yaw, frame_time, &self.world);
        self.camera.set_position(self.player.position);

        self.target = pick_target(&self.world, self.camera.position, self.camera.get_forward());

        let placed = if place {
            self.target.map(|target| self.place_at(target.cell))
        } else {
            None
        };

        // Placement never compacts, so the picked handle is still current.
        let broken = match self.target.and_then(|target| target.hit) {
            Some(hit) if remove => {
                let effect = self.config.world.break_effect;
                self.world.break_block(hit.handle, effect)
            }
            _ => None,
        };

        let dt = self.player.config().timestep.resolve(frame_time);
        self.world.update_effects(dt, self.player.config().gravity);
        self.world.compact();

        if placed.is_some() || broken.is_some() {
            self.target = pick_target(&self.world, self.camera.position, self.camera.get_forward());
        }

        FrameReport {
            target: self.target,
            placed,
            broken,
            step,
            dt,
        }
    }

    /// Which clicks reach the world this frame. A frame in which a click
    /// recaptures the cursor drops all of its clicks.
    fn filter_clicks(&mut self, input: &FrameInput) -> (bool, bool) {
        if !self.cursor.is_captured() {
            if input.clicks.left {
                self.cursor.handle_click(MouseButton::Left, input.cursor_inside);
            }
            return (false, false);
        }

        let place = input.clicks.left
            && self.cursor.handle_click(MouseButton::Left, input.cursor_inside)
                == ClickDisposition::Pass;
        let remove = input.clicks.right
            && self.cursor.handle_click(MouseButton::Right, input.cursor_inside)
                == ClickDisposition::Pass;
        (place, remove)
    }

    fn place_at(&mut self, cell: Vec3) -> Result<BlockHandle, PlaceError> {
        let result = self.world.place_block(
            cell,
            self.selected,
            self.config.world.placement_guard,
            self.player.position,
            &self.config.physics.body,
        );
        if let Err(e) = &result {
            log::debug!("placement at {cell:?} refused: {e}");
        }
        result
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn camera(&self) -> &FPSCameraController {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FPSCameraController {
        &mut self.camera
    }

    pub fn cursor(&self) -> &CursorManager {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CursorManager {
        &mut self.cursor
    }

    pub fn selected(&self) -> BlockType {
        self.selected
    }

    /// Current crosshair target.
    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// Alpha of the placement ghost, or `None` when it is hidden.
    pub fn ghost_alpha(&self) -> Option<f32> {
        if self.cursor.is_captured() && self.target.is_some() {
            Some(hud::ghost_alpha(self.elapsed))
        } else {
            None
        }
    }

    /// `FPS: n | Blocks: n | <Type>`
    pub fn status_line(&self) -> String {
        hud::status_line(self.fps.displayed(), self.world.block_count(), self.selected)
    }
}
