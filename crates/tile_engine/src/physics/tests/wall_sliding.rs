//! Diagonal movement into obstacles keeps the unblocked component

use approx::assert_abs_diff_eq;

use super::{resolve, tile, wall_column};
use crate::foundation::math::Vec2;
use crate::physics::collision::{CollisionArea, MovementTerrainTypes};
use crate::physics::DOUBLE_COLLISION_EPSILON;
use crate::spatial::TileGrid;

const LAND: MovementTerrainTypes = MovementTerrainTypes::LAND;

#[test]
fn test_diagonal_slides_along_wall() {
    let grid = wall_column(2, -1..=4);
    let mover = CollisionArea::simple(64.0, 64.0, LAND);

    let result = resolve(&mover, &grid, Vec2::zeros(), 100.0, 100.0);

    assert!(result.terrain_collision);
    assert!(result.horizontal_collision);
    assert!(!result.vertical_collision);
    assert_abs_diff_eq!(result.final_position.x, 128.0 - 64.0 - DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
    assert_abs_diff_eq!(result.final_position.y, 100.0, epsilon = 1e-3);
}

#[test]
fn test_diagonal_slides_along_floor() {
    let mut grid = TileGrid::new(64.0);
    for col in -1..=4 {
        grid.insert(2, col, tile(MovementTerrainTypes::BLOCKED));
    }
    let mover = CollisionArea::simple(64.0, 64.0, LAND);

    let result = resolve(&mover, &grid, Vec2::zeros(), 100.0, 100.0);

    assert!(result.vertical_collision);
    assert!(!result.horizontal_collision);
    assert_abs_diff_eq!(result.final_position.x, 100.0, epsilon = 1e-3);
    assert_abs_diff_eq!(result.final_position.y, 128.0 - 64.0 - DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
}

#[test]
fn test_diagonal_slide_up_and_left() {
    let grid = wall_column(0, -5..=5);
    let mover = CollisionArea::simple(32.0, 32.0, LAND);

    let result = resolve(&mover, &grid, Vec2::new(100.0, 100.0), -60.0, -60.0);

    assert!(result.horizontal_collision);
    assert_abs_diff_eq!(result.final_position.x, 64.0 + DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
    assert_abs_diff_eq!(result.final_position.y, 40.0, epsilon = 1e-3);
}

#[test]
fn test_inside_corner_stops_both_axes() {
    let mut grid = wall_column(2, -1..=4);
    for col in -1..=1 {
        grid.insert(2, col, tile(MovementTerrainTypes::BLOCKED));
    }
    let mover = CollisionArea::simple(64.0, 64.0, LAND);

    let result = resolve(&mover, &grid, Vec2::zeros(), 100.0, 100.0);

    assert!(result.horizontal_collision);
    assert!(result.vertical_collision);
    assert!(result.final_position.x < 64.0);
    assert!(result.final_position.y < 64.0);
    assert!(result.final_position.x > 63.0);
    assert!(result.final_position.y > 63.0);
}
