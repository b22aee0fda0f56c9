//! # Engine Configuration
//!
//! Configuration structures for the engine and its physics subsystem. Both
//! serialize to TOML or RON through the [`Config`] trait.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Default edge length of a map tile in world units
pub const DEFAULT_TILE_SIZE: f32 = 64.0;

/// # Physics Configuration
///
/// Tile geometry and movement defaults used by the spatial index and by
/// entities that do not specify their own speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Edge length of a square tile in world units
    pub tile_size: f32,
    /// Speed given to entities created without an explicit speed
    pub default_tiles_per_second: f32,
}

impl PhysicsConfig {
    /// Create a physics configuration with default values
    pub fn new() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            default_tiles_per_second: 4.0,
        }
    }

    /// Set the tile size
    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set the default movement speed
    pub fn with_default_tiles_per_second(mut self, tiles_per_second: f32) -> Self {
        self.default_tiles_per_second = tiles_per_second;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be a positive number, got {}",
                self.tile_size
            )));
        }

        if !self.default_tiles_per_second.is_finite() || self.default_tiles_per_second < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "default_tiles_per_second must be zero or positive, got {}",
                self.default_tiles_per_second
            )));
        }

        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Engine Configuration
///
/// Top-level configuration: logging plus every subsystem's settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Physics configuration
    pub physics: PhysicsConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            physics: PhysicsConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set physics configuration
    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    /// Install the logger with this configuration's level as the default
    pub fn init_logging(&self) {
        crate::foundation::logging::init(&self.log_level);
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level cannot be empty".to_string()));
        }

        self.physics.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}
