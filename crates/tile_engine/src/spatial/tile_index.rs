//! Abstract tile lookup interface used by the movement resolver

use crate::foundation::math::Vec2;
use crate::physics::collision::CollisionArea;

/// Grid-keyed lookup from a map cell to the collision area occupying it
///
/// Lookups must be cheap and must not allocate; the resolver queries every
/// cell under the mover for every candidate position.
pub trait SpatialIndex {
    /// Edge length of a square cell in world units
    fn tile_size(&self) -> f32;

    /// Collision area occupying the cell, if any
    fn try_get_collision_at(&self, row: i32, col: i32) -> Option<&CollisionArea>;

    /// World position of the cell's top-left corner
    fn cell_origin(&self, row: i32, col: i32) -> Vec2 {
        let tile_size = self.tile_size();
        Vec2::new(col as f32 * tile_size, row as f32 * tile_size)
    }

    /// Cell `(row, col)` containing a world position
    fn cell_at(&self, position: Vec2) -> (i32, i32) {
        let tile_size = self.tile_size();
        (
            (position.y / tile_size).floor() as i32,
            (position.x / tile_size).floor() as i32,
        )
    }
}
