//! Block Sandbox Engine
//!
//! Core of a first-person voxel sandbox on a fixed 100x100 board: walk, jump,
//! place and break unit cubes. Everything here is window-system agnostic
//! except [`app`], the thin winit shell used by the binaries.
//!
//! # Modules
//!
//! - [`world`] - Block storage, break effects, placement and compaction
//! - [`physics`] - Box collision, penetration correction and grounding
//! - [`player`] - The player integrator
//! - [`camera`] - FPS orientation and screen-center picking
//! - [`input`] - Keyboard, mouse and cursor capture state
//! - [`sandbox`] - Per-frame orchestration
//! - [`hud`] - FPS counter, ghost alpha and status line
//! - [`config`] - Serde-backed configuration and the two variant presets
//! - [`app`] - winit window shell
//!
//! # Example
//!
//! ```ignore
//! use block_sandbox_engine::config::SandboxConfig;
//! use block_sandbox_engine::input::FrameInput;
//! use block_sandbox_engine::sandbox::Sandbox;
//!
//! let mut sandbox = Sandbox::new(SandboxConfig::block_world());
//! let report = sandbox.tick(&FrameInput::default(), 1.0 / 60.0);
//! if let Some(target) = report.target {
//!     // draw the ghost block at target.cell
//! }
//! ```

pub mod app;
pub mod camera;
pub mod config;
pub mod hud;
pub mod input;
pub mod physics;
pub mod player;
pub mod sandbox;
pub mod world;

// Re-export the types most callers need
pub use config::{ConfigError, SandboxConfig};
pub use input::{FrameInput, InputState, KeyCode};
pub use sandbox::{FrameReport, Sandbox};
pub use world::{BlockType, World};
