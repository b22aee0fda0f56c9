//! Terrain-permission collision areas and the swept movement resolver

mod terrain;
mod area;
mod resolver;

pub use terrain::MovementTerrainTypes;
pub use area::{
    CollisionArea,
    CollisionAreaCollection,
    CollisionCheck,
    ComplexCollisionArea,
    OffsetCollisionArea,
    Overlap,
    PlacedCollisionArea,
    SimpleCollisionArea,
};
pub use resolver::{resolve_movement, CollisionInformation, MovementResult, ResolverState};
