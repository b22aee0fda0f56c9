//! Physics module for tile-based movement and collision resolution
//!
//! Provides axis-aligned area geometry, terrain-permission tagged collision
//! areas and the swept resolver that moves an area through a tile map
//! without tunnelling through thin obstacles.

pub mod position;
pub mod area;
pub mod collision;
pub mod move_speed;

#[cfg(test)]
mod tests;

pub use position::{Position, PositionHandle, PositionStore};
pub use area::{
    Area,
    AreaCollection,
    ComplexArea,
    OffsetArea,
    PlacedArea,
    Rect,
    SimpleArea,
};
pub use collision::{
    CollisionArea,
    CollisionAreaCollection,
    CollisionCheck,
    CollisionInformation,
    ComplexCollisionArea,
    MovementResult,
    MovementTerrainTypes,
    OffsetCollisionArea,
    PlacedCollisionArea,
    ResolverState,
    SimpleCollisionArea,
    resolve_movement,
};
pub use move_speed::MoveSpeed;

/// Slack applied to every rectangle overlap test
///
/// Edges closer than this count as touching; edges this far apart or more
/// count as separated.
pub const COLLISION_EPSILON: f32 = 0.01;

/// Gap left between a resolved mover and the obstacle that stopped it
///
/// Also the granularity of the contact bisection.
pub const DOUBLE_COLLISION_EPSILON: f32 = 2.0 * COLLISION_EPSILON;
