//! Movement scenarios across areas, collision areas, the tile grid and the
//! resolver

mod movement_resolution;
mod wall_sliding;

use crate::foundation::math::Vec2;
use crate::physics::collision::{CollisionArea, MovementResult, MovementTerrainTypes};
use crate::physics::resolve_movement;
use crate::spatial::TileGrid;

/// Full-tile collision area with the given tags
fn tile(terrain_types: MovementTerrainTypes) -> CollisionArea {
    CollisionArea::simple(64.0, 64.0, terrain_types)
}

/// Grid with blocked tiles in column `col` over the given rows
fn wall_column(col: i32, rows: std::ops::RangeInclusive<i32>) -> TileGrid {
    let mut grid = TileGrid::new(64.0);
    for row in rows {
        grid.insert(row, col, tile(MovementTerrainTypes::BLOCKED));
    }
    grid
}

fn resolve(mover: &CollisionArea, grid: &TileGrid, start: Vec2, dx: f32, dy: f32) -> MovementResult {
    resolve_movement(mover, grid, start, (-dy).atan2(dx), dx, dy)
}
