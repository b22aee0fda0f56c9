//! Straight-line sweeps: free movement, hard stops and tunnelling

use approx::assert_abs_diff_eq;

use super::{resolve, tile, wall_column};
use crate::foundation::math::Vec2;
use crate::physics::area::{AreaCollection, ComplexArea, OffsetArea, SimpleArea};
use crate::physics::collision::{
    CollisionArea, CollisionAreaCollection, CollisionInformation, ComplexCollisionArea,
    MovementTerrainTypes,
};
use crate::physics::DOUBLE_COLLISION_EPSILON;
use crate::spatial::TileGrid;

const LAND: MovementTerrainTypes = MovementTerrainTypes::LAND;

#[test]
fn test_no_collision_reaches_destination() {
    let grid = wall_column(10, 0..=0);
    let mover = CollisionArea::simple(32.0, 32.0, LAND);
    let start = Vec2::new(10.0, 200.0);

    for (dx, dy) in [(1.5, 0.0), (0.0, -250.0), (300.0, 0.0), (-77.7, 13.25), (400.0, 400.0)] {
        let result = resolve(&mover, &grid, start, dx, dy);
        assert!(!result.movement_collision(), "({dx}, {dy}) collided");
        assert_abs_diff_eq!(result.final_position.x, start.x + dx, epsilon = 1e-3);
        assert_abs_diff_eq!(result.final_position.y, start.y + dy, epsilon = 1e-3);
    }
}

#[test]
fn test_hard_stop_at_wall() {
    let grid = wall_column(2, 0..=0);
    let mover = CollisionArea::simple(64.0, 64.0, LAND);

    let result = resolve(&mover, &grid, Vec2::zeros(), 100.0, 0.0);

    assert!(result.terrain_collision);
    assert!(result.horizontal_collision);
    assert!(!result.vertical_collision);
    assert_abs_diff_eq!(
        result.final_position.x,
        128.0 - 64.0 - DOUBLE_COLLISION_EPSILON,
        epsilon = 1e-3
    );
    assert_eq!(result.final_position.y, 0.0);
}

#[test]
fn test_hard_stop_moving_left() {
    let grid = wall_column(2, 0..=0);
    let mover = CollisionArea::simple(64.0, 64.0, LAND);

    let result = resolve(&mover, &grid, Vec2::new(300.0, 0.0), -200.0, 0.0);

    assert!(result.terrain_collision);
    assert_abs_diff_eq!(result.final_position.x, 192.0 + DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
}

#[test]
fn test_hard_stop_moving_down() {
    let mut grid = TileGrid::new(64.0);
    grid.insert(3, 0, tile(MovementTerrainTypes::BLOCKED));
    let mover = CollisionArea::simple(32.0, 32.0, LAND);

    let result = resolve(&mover, &grid, Vec2::new(8.0, 0.0), 0.0, 500.0);

    assert!(result.vertical_collision);
    assert_abs_diff_eq!(result.final_position.y, 192.0 - 32.0 - DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
    assert_eq!(result.final_position.x, 8.0);
}

#[test]
fn test_fast_mover_does_not_tunnel_through_thin_obstacle() {
    let mut grid = TileGrid::new(64.0);
    // 4 units wide sliver in the middle of cell (0, 3)
    grid.insert(0, 3, CollisionArea::offset(30.0, 0.0, 4.0, 64.0, MovementTerrainTypes::BLOCKED));
    let mover = CollisionArea::simple(16.0, 16.0, LAND);

    let result = resolve(&mover, &grid, Vec2::new(0.0, 16.0), 500.0, 0.0);

    assert!(result.terrain_collision);
    assert_abs_diff_eq!(result.final_position.x, 222.0 - 16.0 - DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
}

#[test]
fn test_split_mover_steps_by_its_smallest_part() {
    let mut grid = TileGrid::new(64.0);
    grid.insert(0, 1, CollisionArea::offset(0.0, 0.0, 4.0, 64.0, MovementTerrainTypes::BLOCKED));
    let mover = CollisionArea::from(ComplexCollisionArea::new(
        ComplexArea::new(vec![
            OffsetArea::new(0.0, 0.0, 8.0, 8.0),
            OffsetArea::new(200.0, 0.0, 8.0, 8.0),
        ]),
        vec![LAND, LAND],
    ));

    let result = resolve(&mover, &grid, Vec2::new(0.0, 8.0), 200.0, 0.0);

    assert!(result.terrain_collision);
    assert!(result.horizontal_collision);
    assert_abs_diff_eq!(
        result.final_position.x,
        64.0 - 8.0 - DOUBLE_COLLISION_EPSILON,
        epsilon = 1e-3
    );
    assert_abs_diff_eq!(result.final_position.y, 8.0);
}

#[test]
fn test_collection_mover_stops_on_nested_part() {
    let grid = wall_column(2, 0..=0);
    let mover = CollisionArea::from(CollisionAreaCollection::new(
        AreaCollection::new(vec![
            SimpleArea::new(16.0, 16.0).into(),
            ComplexArea::new(vec![OffsetArea::new(40.0, 0.0, 8.0, 8.0)]).into(),
        ]),
        vec![LAND, LAND],
    ));

    let first = resolve(&mover, &grid, Vec2::zeros(), 100.0, 0.0);
    let second = resolve(&mover, &grid, first.final_position, 100.0, 0.0);

    assert!(first.terrain_collision);
    assert_abs_diff_eq!(
        first.final_position.x,
        128.0 - 48.0 - DOUBLE_COLLISION_EPSILON,
        epsilon = 1e-3
    );
    assert_abs_diff_eq!(second.final_position.x, first.final_position.x, epsilon = 1e-3);
}

#[test]
fn test_tile_within_epsilon_of_mover_edge_is_checked() {
    let mut grid = TileGrid::new(64.0);
    grid.insert(0, 0, tile(MovementTerrainTypes::BLOCKED));
    let mover = CollisionArea::simple(32.0, 32.0, LAND);
    let start = Vec2::new(64.005, 100.0);

    let result = resolve(&mover, &grid, start, 0.0, -100.0);

    assert!(result.terrain_collision);
    assert!(result.vertical_collision);
    assert_abs_diff_eq!(result.final_position.x, start.x);
    assert_abs_diff_eq!(
        result.final_position.y,
        64.0 + DOUBLE_COLLISION_EPSILON,
        epsilon = 1e-3
    );
}

#[test]
fn test_offset_mover_stops_on_its_own_edge() {
    let grid = wall_column(2, 0..=0);
    let mover = CollisionArea::offset(8.0, 8.0, 48.0, 48.0, LAND);

    let result = resolve(&mover, &grid, Vec2::zeros(), 100.0, 0.0);

    assert_abs_diff_eq!(result.final_position.x, 128.0 - 56.0 - DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
}

#[test]
fn test_resolving_again_from_result_is_idempotent() {
    let grid = wall_column(2, 0..=0);
    let mover = CollisionArea::simple(64.0, 64.0, LAND);
    let first = resolve(&mover, &grid, Vec2::zeros(), 100.0, 0.0);

    let again = resolve(&mover, &grid, first.final_position, 0.0, 0.0);

    assert_eq!(again.final_position, first.final_position);
    assert!(!again.terrain_collision);
    assert!(!again.entity_collision);
    assert!(!again.event_collision);
}

#[test]
fn test_stopped_mover_cannot_advance_further() {
    let grid = wall_column(2, 0..=0);
    let mover = CollisionArea::simple(64.0, 64.0, LAND);
    let first = resolve(&mover, &grid, Vec2::zeros(), 100.0, 0.0);

    let second = resolve(&mover, &grid, first.final_position, 10.0, 0.0);

    assert!(second.terrain_collision);
    assert_abs_diff_eq!(second.final_position.x, first.final_position.x, epsilon = 1e-3);
}

#[test]
fn test_entities_block_and_set_entity_flag() {
    let grid = TileGrid::new(64.0);
    let mover = CollisionArea::simple(32.0, 32.0, LAND);
    let other = CollisionArea::simple(32.0, 32.0, MovementTerrainTypes::ENTITY);
    let others = [other.at(Vec2::new(100.0, 0.0))];

    let result = CollisionInformation::new(&mover, &grid, Vec2::zeros(), 0.0, 200.0, 0.0)
        .with_entities(&others)
        .resolve();

    assert!(result.entity_collision);
    assert!(!result.terrain_collision);
    assert!(result.movement_collision());
    assert_abs_diff_eq!(result.final_position.x, 100.0 - 32.0 - DOUBLE_COLLISION_EPSILON, epsilon = 1e-3);
}

#[test]
fn test_entities_sharing_a_tag_overlap() {
    let grid = TileGrid::new(64.0);
    let mover = CollisionArea::simple(32.0, 32.0, MovementTerrainTypes::ENTITY);
    let other = CollisionArea::simple(32.0, 32.0, MovementTerrainTypes::ENTITY);
    let others = [other.at(Vec2::new(100.0, 0.0))];

    let result = CollisionInformation::new(&mover, &grid, Vec2::zeros(), 0.0, 200.0, 0.0)
        .with_entities(&others)
        .resolve();

    assert!(!result.movement_collision());
    assert_abs_diff_eq!(result.final_position.x, 200.0, epsilon = 1e-3);
}

#[test]
fn test_triggers_never_block() {
    let grid = TileGrid::new(64.0);
    let mover = CollisionArea::simple(32.0, 32.0, LAND);
    let trigger = CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::BLOCKED);

    let passed = [trigger.at(Vec2::new(64.0, 0.0))];
    let result = CollisionInformation::new(&mover, &grid, Vec2::zeros(), 0.0, 256.0, 0.0)
        .with_triggers(&passed)
        .resolve();
    assert!(!result.event_collision);
    assert!(!result.movement_collision());
    assert_abs_diff_eq!(result.final_position.x, 256.0, epsilon = 1e-3);

    let reached = [trigger.at(Vec2::new(240.0, 0.0))];
    let result = CollisionInformation::new(&mover, &grid, Vec2::zeros(), 0.0, 256.0, 0.0)
        .with_triggers(&reached)
        .resolve();
    assert!(result.event_collision);
    assert!(!result.movement_collision());
}
