//! Collision areas: area geometry paired with terrain permission tags

use crate::foundation::math::Vec2;
use crate::physics::area::{
    AreaCollection,
    ComplexArea,
    OffsetArea,
    Rect,
    SimpleArea,
    WorldPoint,
};

use super::terrain::MovementTerrainTypes;

/// Simple area with one tag set
#[derive(Debug, Clone)]
pub struct SimpleCollisionArea {
    area: SimpleArea,
    terrain_types: MovementTerrainTypes,
}

impl SimpleCollisionArea {
    /// Create a simple collision area
    pub fn new(area: SimpleArea, terrain_types: MovementTerrainTypes) -> Self {
        Self { area, terrain_types }
    }

    /// Geometry
    pub fn area(&self) -> &SimpleArea {
        &self.area
    }

    /// Tag set
    pub fn terrain_types(&self) -> MovementTerrainTypes {
        self.terrain_types
    }
}

/// Offset area with one tag set
#[derive(Debug, Clone)]
pub struct OffsetCollisionArea {
    area: OffsetArea,
    terrain_types: MovementTerrainTypes,
}

impl OffsetCollisionArea {
    /// Create an offset collision area
    pub fn new(area: OffsetArea, terrain_types: MovementTerrainTypes) -> Self {
        Self { area, terrain_types }
    }

    /// Geometry
    pub fn area(&self) -> &OffsetArea {
        &self.area
    }

    /// Tag set
    pub fn terrain_types(&self) -> MovementTerrainTypes {
        self.terrain_types
    }
}

// Missing tag sets are padded with the empty set, which blocks everything.
fn align_tags(mut tags: Vec<MovementTerrainTypes>, len: usize) -> Vec<MovementTerrainTypes> {
    if tags.len() < len {
        log::warn!(
            "Collision area has {} sub-areas but only {} tag sets; padding with empty sets",
            len,
            tags.len()
        );
        tags.resize(len, MovementTerrainTypes::empty());
    } else if tags.len() > len {
        log::warn!(
            "Collision area has {} sub-areas but {} tag sets; extra sets ignored",
            len,
            tags.len()
        );
        tags.truncate(len);
    }
    tags
}

/// Complex area with one tag set per sub-area
#[derive(Debug, Clone)]
pub struct ComplexCollisionArea {
    area: ComplexArea,
    terrain_types: Vec<MovementTerrainTypes>,
}

impl ComplexCollisionArea {
    /// Create a complex collision area; tag sets are aligned by index
    pub fn new(area: ComplexArea, terrain_types: Vec<MovementTerrainTypes>) -> Self {
        let terrain_types = align_tags(terrain_types, area.sub_areas().len());
        Self { area, terrain_types }
    }

    /// Geometry
    pub fn area(&self) -> &ComplexArea {
        &self.area
    }

    /// Tag sets, one per sub-area
    pub fn terrain_types(&self) -> &[MovementTerrainTypes] {
        &self.terrain_types
    }

    /// Append a sub-area with its tag set
    pub fn push(&mut self, area: OffsetArea, terrain_types: MovementTerrainTypes) {
        self.area.push(area);
        self.terrain_types.push(terrain_types);
    }

    /// Remove the sub-area at `index` with its tag set
    pub fn remove(&mut self, index: usize) -> Option<(OffsetArea, MovementTerrainTypes)> {
        let area = self.area.remove(index)?;
        Some((area, self.terrain_types.remove(index)))
    }
}

/// Area collection with one tag set per member
#[derive(Debug, Clone)]
pub struct CollisionAreaCollection {
    area: AreaCollection,
    terrain_types: Vec<MovementTerrainTypes>,
}

impl CollisionAreaCollection {
    /// Create a collision area collection; tag sets are aligned by index
    pub fn new(area: AreaCollection, terrain_types: Vec<MovementTerrainTypes>) -> Self {
        let terrain_types = align_tags(terrain_types, area.sub_areas().len());
        Self { area, terrain_types }
    }

    /// Geometry
    pub fn area(&self) -> &AreaCollection {
        &self.area
    }

    /// Tag sets, one per member
    pub fn terrain_types(&self) -> &[MovementTerrainTypes] {
        &self.terrain_types
    }
}

/// Collision area variants
#[derive(Debug, Clone)]
pub enum CollisionArea {
    /// Tagged simple area
    Simple(SimpleCollisionArea),
    /// Tagged offset area
    Offset(OffsetCollisionArea),
    /// Complex area tagged per sub-area
    Complex(ComplexCollisionArea),
    /// Area collection tagged per member
    Collection(CollisionAreaCollection),
}

impl CollisionArea {
    /// Shorthand for a tagged simple area
    pub fn simple(width: f32, height: f32, terrain_types: MovementTerrainTypes) -> Self {
        Self::Simple(SimpleCollisionArea::new(SimpleArea::new(width, height), terrain_types))
    }

    /// Shorthand for a tagged offset area
    pub fn offset(
        horizontal_offset: f32,
        vertical_offset: f32,
        width: f32,
        height: f32,
        terrain_types: MovementTerrainTypes,
    ) -> Self {
        Self::Offset(OffsetCollisionArea::new(
            OffsetArea::new(horizontal_offset, vertical_offset, width, height),
            terrain_types,
        ))
    }

    /// Width of the underlying area
    pub fn width(&self) -> f32 {
        match self {
            Self::Simple(c) => c.area.width(),
            Self::Offset(c) => c.area.width(),
            Self::Complex(c) => c.area.width(),
            Self::Collection(c) => c.area.width(),
        }
    }

    /// Height of the underlying area
    pub fn height(&self) -> f32 {
        match self {
            Self::Simple(c) => c.area.height(),
            Self::Offset(c) => c.area.height(),
            Self::Complex(c) => c.area.height(),
            Self::Collection(c) => c.area.height(),
        }
    }

    /// Union of every tag set on this area
    pub fn terrain_types(&self) -> MovementTerrainTypes {
        match self {
            Self::Simple(c) => c.terrain_types,
            Self::Offset(c) => c.terrain_types,
            Self::Complex(c) => c.terrain_types.iter().copied().collect(),
            Self::Collection(c) => c.terrain_types.iter().copied().collect(),
        }
    }

    /// Place this area with its owner at `origin`
    pub fn at(&self, origin: Vec2) -> PlacedCollisionArea<'_> {
        PlacedCollisionArea { area: self, origin }
    }

    /// Append the world rectangles of this area with their tag sets
    pub fn collect_tagged_rects(&self, origin: Vec2, out: &mut Vec<(Rect, MovementTerrainTypes)>) {
        match self {
            Self::Simple(c) => out.push((
                Rect::from_corner(origin, c.area.width(), c.area.height()),
                c.terrain_types,
            )),
            Self::Offset(c) => out.push((c.area.rect_at(origin), c.terrain_types)),
            Self::Complex(c) => out.extend(
                c.area
                    .sub_areas()
                    .iter()
                    .zip(&c.terrain_types)
                    .map(|(sub, tags)| (sub.rect_at(origin), *tags)),
            ),
            Self::Collection(c) => {
                for (member, tags) in c.area.sub_areas().iter().zip(&c.terrain_types) {
                    member.for_each_rect(origin, &mut |rect| out.push((rect, *tags)));
                }
            }
        }
    }
}

impl From<SimpleCollisionArea> for CollisionArea {
    fn from(area: SimpleCollisionArea) -> Self {
        Self::Simple(area)
    }
}

impl From<OffsetCollisionArea> for CollisionArea {
    fn from(area: OffsetCollisionArea) -> Self {
        Self::Offset(area)
    }
}

impl From<ComplexCollisionArea> for CollisionArea {
    fn from(area: ComplexCollisionArea) -> Self {
        Self::Complex(area)
    }
}

impl From<CollisionAreaCollection> for CollisionArea {
    fn from(area: CollisionAreaCollection) -> Self {
        Self::Collection(area)
    }
}

/// Outcome of a collision test between two placed collision areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionCheck {
    /// Some overlapping pair shares no permission tag
    pub blocks: bool,
    /// Some overlapping pair shares a permission tag
    pub shared_permission: bool,
}

impl CollisionCheck {
    /// No overlapping pair blocks
    pub fn is_clear(&self) -> bool {
        !self.blocks
    }
}

/// A single overlapping pair of rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Rectangle of the area the test was called on
    pub own: Rect,
    /// Its tag set
    pub own_terrain: MovementTerrainTypes,
    /// Rectangle of the other area
    pub other: Rect,
    /// Its tag set
    pub other_terrain: MovementTerrainTypes,
}

impl Overlap {
    /// The pair shares no permission tag
    pub fn blocks(&self) -> bool {
        !self.own_terrain.shares_permission(self.other_terrain)
    }

    /// Visit every overlapping pair between two sets of tagged rectangles
    pub fn for_each_between(
        own: &[(Rect, MovementTerrainTypes)],
        other: &[(Rect, MovementTerrainTypes)],
        mut visit: impl FnMut(Self),
    ) {
        for (own_rect, own_terrain) in own {
            for (other_rect, other_terrain) in other {
                if own_rect.intersects(other_rect) {
                    visit(Self {
                        own: *own_rect,
                        own_terrain: *own_terrain,
                        other: *other_rect,
                        other_terrain: *other_terrain,
                    });
                }
            }
        }
    }
}

/// A collision area placed in the world
#[derive(Debug, Clone, Copy)]
pub struct PlacedCollisionArea<'a> {
    area: &'a CollisionArea,
    origin: Vec2,
}

impl<'a> PlacedCollisionArea<'a> {
    /// The placed collision area
    pub fn area(&self) -> &'a CollisionArea {
        self.area
    }

    /// Owner position
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Same area with its owner moved to `origin`
    pub fn moved_to(&self, origin: Vec2) -> Self {
        Self { area: self.area, origin }
    }

    /// World rectangles with their tag sets
    pub fn tagged_rects(&self) -> Vec<(Rect, MovementTerrainTypes)> {
        let mut rects = Vec::new();
        self.area.collect_tagged_rects(self.origin, &mut rects);
        rects
    }

    /// Box covering every rectangle, if there is any
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.tagged_rects().iter().map(|(rect, _)| rect))
    }

    /// Inclusive point test against any part of the area
    pub fn contains(&self, point: impl WorldPoint) -> bool {
        let point = point.to_world();
        self.tagged_rects().iter().any(|(rect, _)| rect.contains(point))
    }

    /// Visit every overlapping rectangle pair
    pub fn for_each_overlap(&self, other: &PlacedCollisionArea<'_>, visit: impl FnMut(Overlap)) {
        Overlap::for_each_between(&self.tagged_rects(), &other.tagged_rects(), visit);
    }

    /// Geometric overlap, ignoring tags
    pub fn overlaps(&self, other: &PlacedCollisionArea<'_>) -> bool {
        let mut found = false;
        self.for_each_overlap(other, |_| found = true);
        found
    }

    /// Geometry plus permission test, OR-ed over every sub-area pair
    pub fn intersects(&self, other: &PlacedCollisionArea<'_>) -> CollisionCheck {
        let mut check = CollisionCheck::default();
        self.for_each_overlap(other, |overlap| {
            if overlap.blocks() {
                check.blocks = true;
            } else {
                check.shared_permission = true;
            }
        });
        check
    }

    /// [`Self::intersects`] with `other` moved to `candidate` when one is given
    pub fn intersects_at(
        &self,
        other: &PlacedCollisionArea<'_>,
        candidate: Option<Vec2>,
    ) -> CollisionCheck {
        match candidate {
            Some(origin) => self.intersects(&other.moved_to(origin)),
            None => self.intersects(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND: MovementTerrainTypes = MovementTerrainTypes::LAND;
    const WATER: MovementTerrainTypes = MovementTerrainTypes::WATER;
    const AIR: MovementTerrainTypes = MovementTerrainTypes::AIR;

    #[test]
    fn test_shared_tags_pass() {
        let mover = CollisionArea::simple(32.0, 32.0, AIR);
        let tile = CollisionArea::simple(64.0, 64.0, AIR | WATER);

        let check = mover.at(Vec2::new(16.0, 16.0)).intersects(&tile.at(Vec2::zeros()));
        assert!(!check.blocks);
        assert!(check.shared_permission);
        assert!(check.is_clear());
    }

    #[test]
    fn test_disjoint_tags_block() {
        let mover = CollisionArea::simple(32.0, 32.0, LAND);
        let tile = CollisionArea::simple(64.0, 64.0, WATER);

        let check = mover.at(Vec2::new(16.0, 16.0)).intersects(&tile.at(Vec2::zeros()));
        assert!(check.blocks);
        assert!(!check.shared_permission);
    }

    #[test]
    fn test_no_geometric_overlap_is_clear() {
        let mover = CollisionArea::simple(32.0, 32.0, LAND);
        let tile = CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::BLOCKED);

        let check = mover.at(Vec2::new(100.0, 0.0)).intersects(&tile.at(Vec2::zeros()));
        assert_eq!(check, CollisionCheck::default());
    }

    #[test]
    fn test_empty_tag_set_blocks() {
        let mover = CollisionArea::simple(32.0, 32.0, MovementTerrainTypes::all());
        let tile = CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::empty());

        assert!(mover.at(Vec2::zeros()).intersects(&tile.at(Vec2::zeros())).blocks);
    }

    #[test]
    fn test_complex_checks_each_sub_area() {
        // Left half is water, right half is land.
        let tile = CollisionArea::from(ComplexCollisionArea::new(
            ComplexArea::new(vec![
                OffsetArea::new(0.0, 0.0, 32.0, 64.0),
                OffsetArea::new(32.0, 0.0, 32.0, 64.0),
            ]),
            vec![WATER, LAND],
        ));
        let swimmer = CollisionArea::simple(16.0, 16.0, WATER);
        let placed_tile = tile.at(Vec2::zeros());

        assert!(swimmer.at(Vec2::new(4.0, 4.0)).intersects(&placed_tile).is_clear());
        assert!(swimmer.at(Vec2::new(40.0, 4.0)).intersects(&placed_tile).blocks);

        let straddling = swimmer.at(Vec2::new(24.0, 4.0)).intersects(&placed_tile);
        assert!(straddling.blocks);
        assert!(straddling.shared_permission);
    }

    #[test]
    fn test_missing_tags_are_padded_and_block() {
        let tile = ComplexCollisionArea::new(
            ComplexArea::new(vec![
                OffsetArea::new(0.0, 0.0, 32.0, 32.0),
                OffsetArea::new(32.0, 0.0, 32.0, 32.0),
            ]),
            vec![LAND],
        );
        assert_eq!(tile.terrain_types(), &[LAND, MovementTerrainTypes::empty()]);

        let tile = CollisionArea::from(tile);
        let walker = CollisionArea::simple(8.0, 8.0, LAND);
        assert!(walker.at(Vec2::new(40.0, 4.0)).intersects(&tile.at(Vec2::zeros())).blocks);
    }

    #[test]
    fn test_collection_tags_apply_to_whole_member() {
        let collection = CollisionArea::from(CollisionAreaCollection::new(
            AreaCollection::new(vec![
                ComplexArea::new(vec![
                    OffsetArea::new(0.0, 0.0, 10.0, 10.0),
                    OffsetArea::new(20.0, 0.0, 10.0, 10.0),
                ])
                .into(),
                OffsetArea::new(0.0, 40.0, 10.0, 10.0).into(),
            ]),
            vec![WATER, LAND],
        ));

        let rects = collection.at(Vec2::zeros()).tagged_rects();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].1, WATER);
        assert_eq!(rects[1].1, WATER);
        assert_eq!(rects[2].1, LAND);
        assert_eq!(collection.terrain_types(), WATER | LAND);
    }

    #[test]
    fn test_intersects_at_moves_other() {
        let wall = CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::BLOCKED);
        let mover = CollisionArea::simple(32.0, 32.0, LAND);
        let placed_wall = wall.at(Vec2::new(128.0, 0.0));
        let placed_mover = mover.at(Vec2::zeros());

        assert!(placed_wall.intersects_at(&placed_mover, None).is_clear());
        assert!(placed_wall.intersects_at(&placed_mover, Some(Vec2::new(110.0, 0.0))).blocks);
    }

    #[test]
    fn test_contains_and_bounds() {
        let area = CollisionArea::offset(10.0, 10.0, 20.0, 20.0, LAND);
        let placed = area.at(Vec2::new(100.0, 100.0));
        assert!(placed.contains(Vec2::new(110.0, 130.0)));
        assert!(!placed.contains(Vec2::new(105.0, 105.0)));
        assert_eq!(placed.bounds(), Some(Rect::new(110.0, 110.0, 20.0, 20.0)));
    }
}
