use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Sprite Runner".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Horizontal speed multiplier applied to the sampled input intent.
    pub run_speed: f32,
    /// Upward velocity applied instantaneously when a grounded jump fires.
    pub jump_height: f32,
    /// Maximum length of the downward ground-probe ray. Must exceed the
    /// player half height or solver-maintained separation reads as airborne.
    pub ground_ray_length: f32,
    /// Collision group bits that classify geometry as ground.
    pub ground_group: u32,
}
impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            run_speed: 220.0,
            jump_height: 300.0,
            ground_ray_length: 24.5,
            ground_group: 0b0010,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -600.0 }
    }
}

/// A single static platform in the demo level (center + half extents).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlatformConfig {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
}
impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: -200.0,
            half_width: 600.0,
            half_height: 16.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LevelConfig {
    pub platforms: Vec<PlatformConfig>,
    pub player_start: (f32, f32),
    pub player_half_extents: (f32, f32),
}
impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            platforms: vec![
                PlatformConfig::default(),
                PlatformConfig {
                    x: 260.0,
                    y: -120.0,
                    half_width: 90.0,
                    half_height: 12.0,
                },
            ],
            player_start: (0.0, -120.0),
            player_half_extents: (12.0, 24.0),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub movement: MovementConfig,
    pub gravity: GravityConfig,
    pub level: LevelConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load the config or fall back to defaults, returning the error (if any)
    /// so the caller can log it.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
