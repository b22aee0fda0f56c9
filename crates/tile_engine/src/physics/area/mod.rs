//! Axis-aligned area geometry
//!
//! Areas are stored relative to their owner's position (model space) and
//! placed in the world on demand with [`Area::at`].

mod rect;
mod shape;

pub use rect::Rect;
pub use shape::{
    Area,
    AreaCollection,
    ComplexArea,
    OffsetArea,
    PlacedArea,
    SimpleArea,
    WorldPoint,
};
