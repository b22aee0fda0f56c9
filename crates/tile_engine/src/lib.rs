//! # Tile Engine
//!
//! Core of a 2D tile-based game engine: axis-aligned area geometry, terrain
//! permission tags and a swept movement resolver that stops movers flush
//! against obstacles without tunnelling through them.
//!
//! ## Features
//!
//! - **Area Geometry**: Simple, offset, complex and collection areas
//! - **Terrain Permissions**: Overlapping areas only block when they share no tag
//! - **Swept Resolution**: Stepped sweep, contact bisection and wall sliding
//! - **Tile Grid**: Sparse `(row, col)` spatial index
//! - **World**: Entities with per-tick speeds, orientation and triggers
//!
//! ## Quick Start
//!
//! ```rust
//! use tile_engine::prelude::*;
//!
//! let config = EngineConfig::default();
//! config.init_logging();
//! let mut grid = TileGrid::from_config(&config.physics);
//! grid.insert(0, 2, CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::BLOCKED));
//!
//! let mut world = World::new(config.physics.clone());
//! let player = world.spawn(Vec2::zeros(), CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::LAND));
//!
//! let mut timer = Timer::new();
//! world.update(&timer.advance(std::time::Duration::from_millis(500)));
//! let result = world.move_entity(player, Some(0.0), false, &grid)?;
//!
//! assert!(result.terrain_collision);
//! # Ok::<(), WorldError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod physics;
pub mod spatial;
pub mod ecs;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{EngineConfig, PhysicsConfig, Config, ConfigError},
        foundation::{
            math::{Vec2, Point2},
            time::{GameTime, Timer},
        },
        physics::{
            Area, CollisionArea, CollisionInformation, MoveSpeed, MovementResult,
            MovementTerrainTypes, Position, Rect, resolve_movement,
            COLLISION_EPSILON, DOUBLE_COLLISION_EPSILON,
        },
        spatial::{SpatialIndex, TileGrid},
        ecs::{World, WorldError, Entity, EntityId, Orientation},
    };
}
