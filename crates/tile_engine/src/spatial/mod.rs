//! Spatial indexing of static collision geometry
//!
//! The resolver only sees the [`SpatialIndex`] trait, so any tile layer can
//! back it. [`TileGrid`] is the hash-map backed implementation.

mod tile_index;
mod tile_grid;

pub use tile_index::SpatialIndex;
pub use tile_grid::TileGrid;
