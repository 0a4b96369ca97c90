//! Game configuration
//!
//! The only configuration surface of the game: playfield size, ball size,
//! hoop placement, gravity and the number of baskets needed to finish.
//! Fixed for the lifetime of a session.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned area where the ball respawns between shots (top-left position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            min: Vec2::new(30.0, 280.0),
            max: Vec2::new(150.0, 350.0),
        }
    }
}

impl SpawnArea {
    pub fn is_empty(&self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y)
    }
}

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Ball diameter; positions are the ball's top-left corner
    pub ball_diameter: f32,
    /// Left edge of the rim
    pub hoop_x: f32,
    /// Top of the rim
    pub hoop_y: f32,
    /// Rim plus bracket, out to the backboard
    pub hoop_outer_width: f32,
    /// Rim opening
    pub hoop_inner_width: f32,
    pub rim_thickness: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    pub target_score: u32,
    /// Ball position before the first respawn
    pub ball_start: Vec2,
    pub spawn_area: SpawnArea,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: 350.0,
            playfield_height: 450.0,
            ball_diameter: 40.0,
            hoop_x: 210.0,
            hoop_y: 100.0,
            hoop_outer_width: 90.0,
            hoop_inner_width: 65.0,
            rim_thickness: 1.0,
            gravity: 0.35,
            target_score: 5,
            ball_start: Vec2::new(50.0, 300.0),
            spawn_area: SpawnArea::default(),
        }
    }
}

impl GameConfig {
    pub fn ball_radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("ball_diameter", self.ball_diameter),
            ("hoop_outer_width", self.hoop_outer_width),
            ("hoop_inner_width", self.hoop_inner_width),
            ("gravity", self.gravity),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be finite and > 0"));
            }
        }
        if !self.rim_thickness.is_finite() || self.rim_thickness < 0.0 {
            return Err("rim_thickness must be finite and >= 0".to_string());
        }
        if !self.hoop_x.is_finite() || !self.hoop_y.is_finite() {
            return Err("hoop position must be finite".to_string());
        }
        if self.hoop_inner_width >= self.hoop_outer_width {
            return Err("hoop_inner_width must be < hoop_outer_width".to_string());
        }
        if self.target_score == 0 {
            return Err("target_score must be >= 1".to_string());
        }
        if !self.ball_start.is_finite() {
            return Err("ball_start must be finite".to_string());
        }
        if !self.spawn_area.min.is_finite()
            || !self.spawn_area.max.is_finite()
            || self.spawn_area.is_empty()
        {
            return Err("spawn_area must be finite with min < max on both axes".to_string());
        }
        Ok(())
    }

    /// Parse and validate a JSON config (missing keys take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}

/// Failure to load a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
