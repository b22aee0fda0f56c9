//! Hash-map backed tile grid

use std::collections::HashMap;

use crate::core::config::{PhysicsConfig, DEFAULT_TILE_SIZE};
use crate::foundation::math::Vec2;
use crate::physics::area::Rect;
use crate::physics::collision::CollisionArea;

use super::tile_index::SpatialIndex;

/// Sparse grid of collision areas keyed by `(row, col)`
#[derive(Debug, Clone)]
pub struct TileGrid {
    tile_size: f32,
    cells: HashMap<(i32, i32), CollisionArea>,
}

impl TileGrid {
    /// Create an empty grid; a non-positive tile size falls back to the default
    pub fn new(tile_size: f32) -> Self {
        let tile_size = if tile_size.is_finite() && tile_size > 0.0 {
            tile_size
        } else {
            log::warn!(
                "Invalid tile size {}, using {}",
                tile_size,
                DEFAULT_TILE_SIZE
            );
            DEFAULT_TILE_SIZE
        };

        Self {
            tile_size,
            cells: HashMap::new(),
        }
    }

    /// Create an empty grid using the configured tile size
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::new(config.tile_size)
    }

    /// Place a collision area in a cell, returning the one it replaces
    pub fn insert(&mut self, row: i32, col: i32, area: CollisionArea) -> Option<CollisionArea> {
        self.cells.insert((row, col), area)
    }

    /// Place a collision area in the cell containing a world position
    pub fn insert_at_position(&mut self, position: Vec2, area: CollisionArea) -> Option<CollisionArea> {
        let (row, col) = self.cell_at(position);
        self.insert(row, col, area)
    }

    /// Clear a cell
    pub fn remove(&mut self, row: i32, col: i32) -> Option<CollisionArea> {
        self.cells.remove(&(row, col))
    }

    /// Occupied cells as `((row, col), area)` in no particular order
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &CollisionArea)> {
        self.cells.iter().map(|(cell, area)| (*cell, area))
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// World rectangle covering every occupied cell
    pub fn occupied_bounds(&self) -> Option<Rect> {
        let mut keys = self.cells.keys();
        let &(first_row, first_col) = keys.next()?;
        let (min_row, max_row, min_col, max_col) = keys.fold(
            (first_row, first_row, first_col, first_col),
            |(min_row, max_row, min_col, max_col), &(row, col)| {
                (min_row.min(row), max_row.max(row), min_col.min(col), max_col.max(col))
            },
        );

        let top_left = self.cell_origin(min_row, min_col);
        Some(Rect::from_corner(
            top_left,
            (max_col - min_col + 1) as f32 * self.tile_size,
            (max_row - min_row + 1) as f32 * self.tile_size,
        ))
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}

impl SpatialIndex for TileGrid {
    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn try_get_collision_at(&self, row: i32, col: i32) -> Option<&CollisionArea> {
        self.cells.get(&(row, col))
    }
}
