//! Sandbox Configuration
//!
//! Every tunable of a sandbox run in one serde-backed struct. The two
//! binaries start from a preset and let an optional JSON file in the working
//! directory override any subset of fields.
//!
//! ```json
//! { "physics": { "gravity": -20.0, "collision": "block_move" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::camera::MOUSE_SENSITIVITY;
use crate::physics::{CollisionStrategy, GroundingPolicy};
use crate::player::{PhysicsConfig, Timestep};
use crate::world::{BreakEffect, PlacementGuard};

/// Window shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial title; replaced by the HUD line once frames run
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Vertical field of view handed to the renderer
    pub fov_degrees: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "box".to_string(),
            width: 800,
            height: 600,
            fov_degrees: 100.0,
        }
    }
}

/// World editing rules.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub placement_guard: PlacementGuard,
    pub break_effect: BreakEffect,
    /// Fixed debris seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

/// Complete configuration of a sandbox run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub world: WorldConfig,
    /// Radians of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self::block_world()
    }
}

impl SandboxConfig {
    /// Textured-cube world: push-out collision, feet-box grounding, fading
    /// ghosts on break, variable timestep.
    pub fn block_world() -> Self {
        Self {
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            world: WorldConfig::default(),
            mouse_sensitivity: MOUSE_SENSITIVITY,
        }
    }

    /// Debris world: move-rejecting collision, height-match grounding,
    /// debris bursts on break, fixed 60 Hz tick.
    pub fn block_debris() -> Self {
        Self {
            window: WindowConfig {
                title: "box debris".to_string(),
                ..WindowConfig::default()
            },
            physics: PhysicsConfig {
                collision: CollisionStrategy::BlockMove,
                grounding: GroundingPolicy::HeightMatch,
                timestep: Timestep::Fixed(1.0 / 60.0),
                ..PhysicsConfig::default()
            },
            world: WorldConfig {
                placement_guard: PlacementGuard::PlayerCells,
                break_effect: BreakEffect::Debris,
                seed: None,
            },
            mouse_sensitivity: MOUSE_SENSITIVITY,
        }
    }

    /// Parse a JSON document. Missing fields take the block-world defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON document over `base`. Fields the document names replace
    /// the base's, objects are merged key by key.
    pub fn from_json_over(json: &str, base: &Self) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(base)?;
        merge_json(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }

    /// Read a JSON config file. Missing fields take the block-world defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_over(path, &Self::default())
    }

    /// Read a JSON config file over `base`.
    pub fn load_over(path: impl AsRef<Path>, base: &Self) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_over(&json, base)
    }

    /// Read `path` over `preset` if it exists, else use `preset`. A file that
    /// fails to parse is reported and ignored.
    pub fn load_or(path: impl AsRef<Path>, preset: Self) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no {} found, using built-in preset", path.display());
            return preset;
        }

        match Self::load_over(path, &preset) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                preset
            }
        }
    }
}

fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_json(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Why a config file could not be used.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// Malformed JSON or a field of the wrong type.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_in_policies() {
        let world = SandboxConfig::block_world();
        let debris = SandboxConfig::block_debris();

        assert_eq!(world.physics.collision, CollisionStrategy::PushOut);
        assert_eq!(world.physics.grounding, GroundingPolicy::FeetBox);
        assert_eq!(world.world.break_effect, BreakEffect::Fade);
        assert_eq!(world.window.title, "box");

        assert_eq!(debris.physics.collision, CollisionStrategy::BlockMove);
        assert_eq!(debris.physics.grounding, GroundingPolicy::HeightMatch);
        assert_eq!(debris.world.placement_guard, PlacementGuard::PlayerCells);
        assert_eq!(debris.physics.timestep, Timestep::Fixed(1.0 / 60.0));
        assert_eq!(debris.window.title, "box debris");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SandboxConfig::from_json(
            r#"{ "physics": { "gravity": -20.0, "collision": "block_move" } }"#,
        )
        .expect("valid json");
        assert_eq!(config.physics.gravity, -20.0);
        assert_eq!(config.physics.collision, CollisionStrategy::BlockMove);
        assert_eq!(config.physics.jump_velocity, 10.0);
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn test_partial_json_over_debris_preset() {
        let preset = SandboxConfig::block_debris();
        let config = SandboxConfig::from_json_over(
            r#"{ "physics": { "gravity": -20.0 }, "world": { "seed": 7 } }"#,
            &preset,
        )
        .expect("valid json");

        assert_eq!(config.physics.gravity, -20.0);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.physics.collision, CollisionStrategy::BlockMove);
        assert_eq!(config.physics.grounding, GroundingPolicy::HeightMatch);
        assert_eq!(config.physics.timestep, Timestep::Fixed(1.0 / 60.0));
        assert_eq!(config.world.placement_guard, PlacementGuard::PlayerCells);
        assert_eq!(config.world.break_effect, BreakEffect::Debris);
        assert_eq!(config.window.title, "box debris");
    }

    #[test]
    fn test_override_can_switch_enum_variants() {
        let config = SandboxConfig::from_json_over(
            r#"{ "physics": { "timestep": "variable", "collision": "push_out" } }"#,
            &SandboxConfig::block_debris(),
        )
        .expect("valid json");
        assert_eq!(config.physics.timestep, Timestep::Variable);
        assert_eq!(config.physics.collision, CollisionStrategy::PushOut);
        assert_eq!(config.physics.grounding, GroundingPolicy::HeightMatch);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SandboxConfig::block_debris();
        let json = config.to_json().expect("serializable");
        assert_eq!(SandboxConfig::from_json(&json).expect("parses"), config);
    }

    #[test]
    fn test_bad_json_is_error() {
        let err = SandboxConfig::from_json("{ \"physics\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_or_missing_file_uses_preset() {
        let config = SandboxConfig::load_or(
            "definitely/not/here/block_debris.json",
            SandboxConfig::block_debris(),
        );
        assert_eq!(config, SandboxConfig::block_debris());
    }
}
