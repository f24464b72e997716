//! Points demo configuration
//!
//! Loaded from `config/points.toml`, `config/points.user.toml` and
//! `POINTS_SECTION__KEY` environment variables. The defaults draw the stock
//! 640x480 scene: 500 stars, a 40px ship and an 80px glow.

use backend::config::{LogConfig, WindowConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
    /// Fixed seed for the point generator; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_window")]
    pub window: WindowConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub ship: ShipConfig,
    #[serde(default)]
    pub glow: GlowConfig,
}

fn default_window() -> WindowConfig {
    WindowConfig {
        title: "examples/renderer/points".to_string(),
        width: 640,
        height: 480,
        resizable: true,
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            window: default_window(),
            log: LogConfig::default(),
            particles: ParticleConfig::default(),
            ship: ShipConfig::default(),
            glow: GlowConfig::default(),
        }
    }
}

/// Star field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Number of points
    pub count: usize,
    /// Slowest point, in pixels per second
    pub min_speed: f32,
    /// Fastest point, in pixels per second
    pub max_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 500,
            min_speed: 30.0,
            max_speed: 960.0,
        }
    }
}

/// Ship and thruster animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipConfig {
    /// Half the width (and height) of the hull triangle
    pub half_size: f32,
    /// Resting rotation in degrees
    pub heading_deg: f32,
    /// Wobble amplitude in radians
    pub wobble_amplitude: f32,
    /// Wobble phase advance per millisecond
    pub wobble_rate: f32,
    /// Mean flame length in pixels
    pub flame_length: f32,
    /// Flame flicker amplitude in pixels
    pub flame_flicker: f32,
    /// Flicker phase advance per millisecond
    pub flame_rate: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            half_size: 20.0,
            heading_deg: -45.0,
            wobble_amplitude: 0.1,
            wobble_rate: 0.005,
            flame_length: 25.0,
            flame_flicker: 6.0,
            flame_rate: 0.02,
        }
    }
}

/// Glow sprite configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowConfig {
    /// Radius of the gradient texture; the texture is twice this wide
    pub radius: u32,
    /// Texture alpha modulation (0 invisible, 255 full bright)
    pub alpha_mod: u8,
    /// Sprite size at the flame tip
    pub thruster_size: f32,
    /// Sprite size over the hull
    pub body_size: f32,
    /// Faint background bloom around the ship
    pub ambient_size: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            radius: 40,
            alpha_mod: 40,
            thruster_size: 80.0,
            body_size: 70.0,
            ambient_size: 240.0,
        }
    }
}
