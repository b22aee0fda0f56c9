//! Entity implementation

use crate::foundation::collections::new_key_type;
use crate::foundation::math::Vec2;
use crate::physics::collision::CollisionArea;
use crate::physics::move_speed::MoveSpeed;
use crate::physics::position::PositionHandle;
use crate::physics::COLLISION_EPSILON;

new_key_type! {
    /// Entity identifier
    pub struct EntityId;
}

/// Facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Facing up the screen
    Upward,
    /// Facing down the screen
    #[default]
    Downward,
    /// Facing left
    Left,
    /// Facing right
    Right,
}

/// A movable thing in the world
#[derive(Debug, Clone)]
pub struct Entity {
    position: PositionHandle,
    collision_area: CollisionArea,
    move_speed: MoveSpeed,
    orientation: Orientation,
    moving: bool,
}

impl Entity {
    pub(super) fn new(position: PositionHandle, collision_area: CollisionArea, move_speed: MoveSpeed) -> Self {
        Self {
            position,
            collision_area,
            move_speed,
            orientation: Orientation::default(),
            moving: false,
        }
    }

    /// Handle to the entity's position
    pub fn position_handle(&self) -> PositionHandle {
        self.position
    }

    /// Collision area, relative to the position
    pub fn collision_area(&self) -> &CollisionArea {
        &self.collision_area
    }

    /// Replace the collision area
    pub fn set_collision_area(&mut self, collision_area: CollisionArea) {
        self.collision_area = collision_area;
    }

    /// Movement rate
    pub fn move_speed(&self) -> &MoveSpeed {
        &self.move_speed
    }

    /// Mutable movement rate
    pub fn move_speed_mut(&mut self) -> &mut MoveSpeed {
        &mut self.move_speed
    }

    /// Facing direction
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the last movement request displaced the entity
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub(super) fn set_idle(&mut self) {
        self.moving = false;
    }

    /// Update facing and moving state from the displacement actually made
    pub(super) fn record_movement(&mut self, displacement: Vec2) {
        if displacement.x == 0.0 && displacement.y == 0.0 {
            self.moving = false;
            return;
        }

        self.orientation = if displacement.x.abs() >= displacement.y.abs() - COLLISION_EPSILON {
            if displacement.x >= 0.0 { Orientation::Right } else { Orientation::Left }
        } else if displacement.y >= 0.0 {
            Orientation::Downward
        } else {
            Orientation::Upward
        };
        self.moving = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::Key;
    use crate::physics::collision::MovementTerrainTypes;

    fn entity() -> Entity {
        Entity::new(
            PositionHandle::null(),
            CollisionArea::simple(32.0, 32.0, MovementTerrainTypes::LAND),
            MoveSpeed::new(4.0, 64.0),
        )
    }

    #[test]
    fn test_new_entity_is_idle_facing_down() {
        let entity = entity();
        assert_eq!(entity.orientation(), Orientation::Downward);
        assert!(!entity.is_moving());
    }

    #[test]
    fn test_orientation_follows_dominant_axis() {
        let mut entity = entity();

        entity.record_movement(Vec2::new(3.0, 1.0));
        assert_eq!(entity.orientation(), Orientation::Right);
        assert!(entity.is_moving());

        entity.record_movement(Vec2::new(-3.0, 1.0));
        assert_eq!(entity.orientation(), Orientation::Left);

        entity.record_movement(Vec2::new(0.5, -4.0));
        assert_eq!(entity.orientation(), Orientation::Upward);

        entity.record_movement(Vec2::new(0.0, 2.0));
        assert_eq!(entity.orientation(), Orientation::Downward);
    }

    #[test]
    fn test_equal_axes_face_horizontally() {
        let mut entity = entity();
        entity.record_movement(Vec2::new(-2.0, 2.0));
        assert_eq!(entity.orientation(), Orientation::Left);

        // Within epsilon of equal still counts as horizontal.
        entity.record_movement(Vec2::new(2.0, 2.005));
        assert_eq!(entity.orientation(), Orientation::Right);
    }

    #[test]
    fn test_zero_displacement_keeps_orientation() {
        let mut entity = entity();
        entity.record_movement(Vec2::new(-1.0, 0.0));
        entity.record_movement(Vec2::zeros());

        assert_eq!(entity.orientation(), Orientation::Left);
        assert!(!entity.is_moving());
    }
}
