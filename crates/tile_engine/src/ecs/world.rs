//! World implementation

use crate::core::config::PhysicsConfig;
use crate::foundation::collections::HandleMap;
use crate::foundation::math::Vec2;
use crate::foundation::time::GameTime;
use crate::physics::collision::{
    CollisionArea,
    CollisionInformation,
    MovementResult,
    PlacedCollisionArea,
};
use crate::physics::move_speed::MoveSpeed;
use crate::physics::position::{Position, PositionStore};
use crate::spatial::SpatialIndex;

use super::entity::{Entity, EntityId};

/// World errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// The id does not name a live entity
    #[error("Unknown entity {0:?}")]
    UnknownEntity(EntityId),

    /// The entity's position handle is stale
    #[error("Entity {0:?} has no position")]
    MissingPosition(EntityId),
}

/// World containing all entities, their positions and trigger areas
pub struct World {
    config: PhysicsConfig,
    positions: PositionStore,
    entities: HandleMap<EntityId, Entity>,
    triggers: Vec<(Vec2, CollisionArea)>,
}

impl World {
    /// Create an empty world
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            positions: PositionStore::new(),
            entities: HandleMap::with_key(),
            triggers: Vec::new(),
        }
    }

    /// Physics configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Add an entity moving at the configured default speed
    pub fn spawn(&mut self, position: Vec2, collision_area: CollisionArea) -> EntityId {
        let speed = MoveSpeed::from_config(&self.config);
        self.spawn_with_speed(position, collision_area, speed)
    }

    /// Add an entity with its own speed
    pub fn spawn_with_speed(
        &mut self,
        position: Vec2,
        collision_area: CollisionArea,
        move_speed: MoveSpeed,
    ) -> EntityId {
        let handle = self.positions.insert(position);
        self.entities.insert(Entity::new(handle, collision_area, move_speed))
    }

    /// Remove an entity and its position
    pub fn despawn(&mut self, id: EntityId) -> Result<Entity, WorldError> {
        let entity = self.entities.remove(id).ok_or(WorldError::UnknownEntity(id))?;
        self.positions.remove(entity.position_handle());
        Ok(entity)
    }

    /// Add an area that reports overlaps without blocking
    pub fn add_trigger(&mut self, position: Vec2, area: CollisionArea) {
        self.triggers.push((position, area));
    }

    /// Look up an entity
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Look up an entity mutably
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// All entities
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }

    /// Number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Current position of an entity
    pub fn position(&self, id: EntityId) -> Result<Vec2, WorldError> {
        let entity = self.entities.get(id).ok_or(WorldError::UnknownEntity(id))?;
        self.positions
            .get(entity.position_handle())
            .map(Position::to_vec)
            .ok_or(WorldError::MissingPosition(id))
    }

    /// Teleport an entity
    pub fn set_position(&mut self, id: EntityId, position: Vec2) -> Result<(), WorldError> {
        let entity = self.entities.get(id).ok_or(WorldError::UnknownEntity(id))?;
        let slot = self
            .positions
            .get_mut(entity.position_handle())
            .ok_or(WorldError::MissingPosition(id))?;
        slot.set(position);
        Ok(())
    }

    /// Advance one tick: recompute every entity's per-tick distance
    pub fn update(&mut self, time: &GameTime) {
        for (_, entity) in self.entities.iter_mut() {
            entity.move_speed_mut().update(time);
        }
        log::debug!(
            "Updated {} move speeds for a {:.3} ms tick",
            self.entities.len(),
            time.elapsed_millis()
        );
    }

    /// Move an entity one tick's worth along `direction` radians
    ///
    /// `None` or a zero distance leaves the entity idle. A forced move skips
    /// collision resolution; otherwise the entity is stopped by `index` and
    /// by every other entity.
    pub fn move_entity<I: SpatialIndex + ?Sized>(
        &mut self,
        id: EntityId,
        direction: Option<f32>,
        forced: bool,
        index: &I,
    ) -> Result<MovementResult, WorldError> {
        let start = self.position(id)?;
        let result = match direction {
            Some(direction) => self.plan_movement(id, start, direction, forced, index)?,
            None => MovementResult::stationary(start),
        };

        self.set_position(id, result.final_position)?;
        let entity = self.entities.get_mut(id).ok_or(WorldError::UnknownEntity(id))?;
        if direction.is_some() {
            entity.record_movement(result.final_position - start);
        } else {
            entity.set_idle();
        }

        Ok(result)
    }

    fn plan_movement<I: SpatialIndex + ?Sized>(
        &self,
        id: EntityId,
        start: Vec2,
        direction: f32,
        forced: bool,
        index: &I,
    ) -> Result<MovementResult, WorldError> {
        let entity = self.entities.get(id).ok_or(WorldError::UnknownEntity(id))?;
        let dx = entity.move_speed().horizontal_movement_amount(direction);
        let dy = entity.move_speed().vertical_movement_amount(direction);

        if dx == 0.0 && dy == 0.0 {
            return Ok(MovementResult::stationary(start));
        }
        if forced {
            return Ok(MovementResult::stationary(start + Vec2::new(dx, dy)));
        }

        let others: Vec<PlacedCollisionArea<'_>> = self
            .entities
            .iter()
            .filter(|(other, _)| *other != id)
            .filter_map(|(_, other)| {
                self.positions
                    .place(other.position_handle(), other.collision_area())
            })
            .collect();
        let triggers: Vec<PlacedCollisionArea<'_>> = self
            .triggers
            .iter()
            .map(|(position, area)| area.at(*position))
            .collect();

        let result = CollisionInformation::new(entity.collision_area(), index, start, direction, dx, dy)
            .with_entities(&others)
            .with_triggers(&triggers)
            .resolve();
        Ok(result)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}
