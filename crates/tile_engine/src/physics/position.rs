//! Positions owned by a single store and referenced by handle
//!
//! An entity and every area attached to it read the same position through a
//! [`PositionHandle`]. Moving the position through the store moves all of
//! them together.

use crate::foundation::collections::{new_key_type, HandleMap};
use crate::foundation::math::Vec2;

use super::collision::{CollisionArea, PlacedCollisionArea};

new_key_type! {
    /// Handle to a [`Position`] inside a [`PositionStore`]
    pub struct PositionHandle;
}

/// Mutable 2D coordinate in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate, growing to the right
    pub x: f32,
    /// Vertical coordinate, growing downward
    pub y: f32,
}

impl Position {
    /// Create a position
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position as a vector
    pub fn to_vec(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Move by the given displacement
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Overwrite with the given coordinate
    pub fn set(&mut self, value: Vec2) {
        self.x = value.x;
        self.y = value.y;
    }
}

impl From<Vec2> for Position {
    fn from(value: Vec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Position> for Vec2 {
    fn from(position: Position) -> Self {
        position.to_vec()
    }
}

/// Single owner of every position in a world
#[derive(Debug, Default)]
pub struct PositionStore {
    positions: HandleMap<PositionHandle, Position>,
}

impl PositionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position and return its handle
    pub fn insert(&mut self, position: impl Into<Position>) -> PositionHandle {
        self.positions.insert(position.into())
    }

    /// Remove a position; the handle becomes stale
    pub fn remove(&mut self, handle: PositionHandle) -> Option<Position> {
        self.positions.remove(handle)
    }

    /// Read a position
    pub fn get(&self, handle: PositionHandle) -> Option<Position> {
        self.positions.get(handle).copied()
    }

    /// Mutable access to a position
    pub fn get_mut(&mut self, handle: PositionHandle) -> Option<&mut Position> {
        self.positions.get_mut(handle)
    }

    /// Place a collision area at the position behind `handle`
    pub fn place<'a>(
        &self,
        handle: PositionHandle,
        area: &'a CollisionArea,
    ) -> Option<PlacedCollisionArea<'a>> {
        self.get(handle).map(|position| area.at(position.to_vec()))
    }

    /// Number of live positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the store holds no positions
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::MovementTerrainTypes;

    #[test]
    fn test_store_mutation_is_visible_through_handle() {
        let mut store = PositionStore::new();
        let handle = store.insert(Position::new(1.0, 2.0));

        if let Some(position) = store.get_mut(handle) {
            position.translate(Vec2::new(3.0, -1.0));
        }

        assert_eq!(store.get(handle), Some(Position::new(4.0, 1.0)));
    }

    #[test]
    fn test_removed_handle_is_stale() {
        let mut store = PositionStore::new();
        let handle = store.insert(Vec2::new(0.0, 0.0));
        assert!(store.remove(handle).is_some());

        let other = store.insert(Vec2::new(5.0, 5.0));
        assert_ne!(handle, other);
        assert_eq!(store.get(handle), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_place_reads_current_position() {
        let mut store = PositionStore::new();
        let handle = store.insert(Vec2::new(10.0, 20.0));
        let area = CollisionArea::simple(8.0, 8.0, MovementTerrainTypes::LAND);

        let placed = store.place(handle, &area).unwrap();
        assert_eq!(placed.origin(), Vec2::new(10.0, 20.0));

        if let Some(position) = store.get_mut(handle) {
            position.set(Vec2::new(0.0, 0.0));
        }
        let placed = store.place(handle, &area).unwrap();
        assert_eq!(placed.origin(), Vec2::zeros());
    }
}
