//! Movement rate in tiles per second

use crate::core::config::PhysicsConfig;
use crate::foundation::math::utils::round_to;
use crate::foundation::time::GameTime;

/// Decimal places kept on per-axis movement amounts
const MOVEMENT_DECIMALS: i32 = 5;

/// Converts a speed in tiles per second into a per-tick distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSpeed {
    tiles_per_second: f32,
    tile_size: f32,
    total_movement: f32,
}

impl MoveSpeed {
    /// Create a speed; nothing moves until the first [`Self::update`]
    pub fn new(tiles_per_second: f32, tile_size: f32) -> Self {
        Self {
            tiles_per_second,
            tile_size,
            total_movement: 0.0,
        }
    }

    /// Create a speed using the configured tile size and default rate
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::new(config.default_tiles_per_second, config.tile_size)
    }

    /// Tiles per second
    pub fn tiles_per_second(&self) -> f32 {
        self.tiles_per_second
    }

    /// Change the rate; takes effect at the next update
    pub fn set_tiles_per_second(&mut self, tiles_per_second: f32) {
        self.tiles_per_second = tiles_per_second;
    }

    /// Distance covered during the last tick
    pub fn total_movement(&self) -> f32 {
        self.total_movement
    }

    /// Recompute the per-tick distance from the game clock
    pub fn update(&mut self, time: &GameTime) {
        self.update_millis(time.elapsed_millis());
    }

    /// Recompute the per-tick distance from an elapsed time in milliseconds
    pub fn update_millis(&mut self, elapsed_millis: f64) {
        let seconds = elapsed_millis / 1000.0;
        self.total_movement =
            (f64::from(self.tile_size) * f64::from(self.tiles_per_second) * seconds) as f32;
    }

    /// Horizontal share of the per-tick distance along `direction` radians
    pub fn horizontal_movement_amount(&self, direction: f32) -> f32 {
        round_to(self.total_movement * direction.cos(), MOVEMENT_DECIMALS)
    }

    /// Vertical share of the per-tick distance along `direction` radians
    ///
    /// Screen space Y grows downward, so a positive angle moves up.
    pub fn vertical_movement_amount(&self, direction: f32) -> f32 {
        round_to(self.total_movement * -direction.sin(), MOVEMENT_DECIMALS)
    }
}
