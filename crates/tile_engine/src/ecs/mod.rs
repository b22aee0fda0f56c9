//! Entities and the world that moves them
//!
//! Each entity owns one position (held by the world's position store) and a
//! collision area read through that position.

pub mod entity;
pub mod world;

pub use entity::{Entity, EntityId, Orientation};
pub use world::{World, WorldError};
