//! Terrain permission tags
//!
//! A tag names a kind of surface or entity a mover may coexist with. Two
//! overlapping collision areas only impede each other when they share no
//! tag at all.

use bitflags::bitflags;

bitflags! {
    /// Terrain permission tag set
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MovementTerrainTypes: u8 {
        /// Impassable; never counts as a shared tag
        const BLOCKED = 1 << 0;
        /// Other entities
        const ENTITY = 1 << 1;
        /// Walkable ground
        const LAND = 1 << 2;
        /// Water surfaces
        const WATER = 1 << 3;
        /// Open air
        const AIR = 1 << 4;
        /// Fire or lava
        const FIRE = 1 << 5;
    }
}

impl MovementTerrainTypes {
    /// Whether the two sets share a tag that permits coexistence
    ///
    /// `BLOCKED` is never a shared tag and an empty set shares nothing.
    pub fn shares_permission(self, other: Self) -> bool {
        !((self & other) - Self::BLOCKED).is_empty()
    }

    /// Whether an area with these tags lets nothing through
    pub fn is_impassable(self) -> bool {
        (self - Self::BLOCKED).is_empty()
    }
}
