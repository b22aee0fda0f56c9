//! Area variants
//!
//! Every variant stores its geometry relative to the owning position and is
//! placed in the world with [`Area::at`] when a test needs it.

use std::cell::Cell;

use crate::foundation::math::{utils::point_to_vec, Point2, Vec2};
use crate::physics::position::Position;

use super::rect::Rect;

fn non_negative(value: f32, what: &str) -> f32 {
    if value < 0.0 {
        log::warn!("Negative area {} {} clamped to 0", what, value);
        0.0
    } else {
        value
    }
}

/// Rectangle whose top-left corner is the owning position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimpleArea {
    width: f32,
    height: f32,
}

impl SimpleArea {
    /// Create a simple area; negative dimensions become zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: non_negative(width, "width"),
            height: non_negative(height, "height"),
        }
    }

    /// Width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Rectangle displaced from the owning position by a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetArea {
    offset: Vec2,
    width: f32,
    height: f32,
}

impl OffsetArea {
    /// Create an offset area; negative offsets and dimensions become zero
    pub fn new(horizontal_offset: f32, vertical_offset: f32, width: f32, height: f32) -> Self {
        Self {
            offset: Vec2::new(
                non_negative(horizontal_offset, "horizontal offset"),
                non_negative(vertical_offset, "vertical offset"),
            ),
            width: non_negative(width, "width"),
            height: non_negative(height, "height"),
        }
    }

    /// Offset from the owning position
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// World rectangle for the given owner position
    pub fn rect_at(&self, origin: Vec2) -> Rect {
        Rect::from_corner(origin + self.offset, self.width, self.height)
    }

    fn extent(&self) -> Vec2 {
        self.offset + Vec2::new(self.width, self.height)
    }
}

/// Union of offset rectangles sharing one owner position
///
/// Width and height are the furthest `offset + size` reached by any
/// sub-area. They are cached and recomputed after the sub-areas change.
#[derive(Debug, Clone, Default)]
pub struct ComplexArea {
    sub_areas: Vec<OffsetArea>,
    extent: Cell<Option<Vec2>>,
}

impl ComplexArea {
    /// Create a complex area from its parts
    pub fn new(sub_areas: Vec<OffsetArea>) -> Self {
        Self {
            sub_areas,
            extent: Cell::new(None),
        }
    }

    /// Sub-areas in insertion order
    pub fn sub_areas(&self) -> &[OffsetArea] {
        &self.sub_areas
    }

    /// Mutable access to the sub-areas
    pub fn sub_areas_mut(&mut self) -> &mut [OffsetArea] {
        self.invalidate();
        &mut self.sub_areas
    }

    /// Append a sub-area
    pub fn push(&mut self, area: OffsetArea) {
        self.sub_areas.push(area);
        self.invalidate();
    }

    /// Replace the sub-area at `index`, returning the previous one
    pub fn set(&mut self, index: usize, area: OffsetArea) -> Option<OffsetArea> {
        let slot = self.sub_areas.get_mut(index)?;
        let previous = std::mem::replace(slot, area);
        self.invalidate();
        Some(previous)
    }

    /// Remove the sub-area at `index`
    pub fn remove(&mut self, index: usize) -> Option<OffsetArea> {
        if index >= self.sub_areas.len() {
            return None;
        }
        let removed = self.sub_areas.remove(index);
        self.invalidate();
        Some(removed)
    }

    /// Bounding width measured from the owner position
    pub fn width(&self) -> f32 {
        self.extent().x
    }

    /// Bounding height measured from the owner position
    pub fn height(&self) -> f32 {
        self.extent().y
    }

    fn extent(&self) -> Vec2 {
        if let Some(extent) = self.extent.get() {
            return extent;
        }
        let extent = self
            .sub_areas
            .iter()
            .map(OffsetArea::extent)
            .fold(Vec2::zeros(), |acc, e| Vec2::new(acc.x.max(e.x), acc.y.max(e.y)));
        self.extent.set(Some(extent));
        extent
    }

    fn invalidate(&mut self) {
        self.extent.set(None);
    }
}

/// Group of arbitrary areas drawn together
///
/// Width and height are the largest member width and height.
#[derive(Debug, Clone, Default)]
pub struct AreaCollection {
    sub_areas: Vec<Area>,
}

impl AreaCollection {
    /// Create a collection
    pub fn new(sub_areas: Vec<Area>) -> Self {
        Self { sub_areas }
    }

    /// Members in insertion order
    pub fn sub_areas(&self) -> &[Area] {
        &self.sub_areas
    }

    /// Append a member
    pub fn push(&mut self, area: impl Into<Area>) {
        self.sub_areas.push(area.into());
    }

    /// Largest member width
    pub fn width(&self) -> f32 {
        self.sub_areas.iter().map(Area::width).fold(0.0, f32::max)
    }

    /// Largest member height
    pub fn height(&self) -> f32 {
        self.sub_areas.iter().map(Area::height).fold(0.0, f32::max)
    }
}

/// Axis-aligned area in model space
#[derive(Debug, Clone)]
pub enum Area {
    /// Rectangle at the owner position
    Simple(SimpleArea),
    /// Rectangle at a fixed offset from the owner position
    Offset(OffsetArea),
    /// Union of offset rectangles
    Complex(ComplexArea),
    /// Group of areas
    Collection(AreaCollection),
}

impl Area {
    /// Shorthand for a simple area
    pub fn simple(width: f32, height: f32) -> Self {
        Self::Simple(SimpleArea::new(width, height))
    }

    /// Shorthand for an offset area
    pub fn offset(horizontal_offset: f32, vertical_offset: f32, width: f32, height: f32) -> Self {
        Self::Offset(OffsetArea::new(horizontal_offset, vertical_offset, width, height))
    }

    /// Width of the variant
    pub fn width(&self) -> f32 {
        match self {
            Self::Simple(area) => area.width(),
            Self::Offset(area) => area.width(),
            Self::Complex(area) => area.width(),
            Self::Collection(area) => area.width(),
        }
    }

    /// Height of the variant
    pub fn height(&self) -> f32 {
        match self {
            Self::Simple(area) => area.height(),
            Self::Offset(area) => area.height(),
            Self::Complex(area) => area.height(),
            Self::Collection(area) => area.height(),
        }
    }

    /// Place this area with its owner at `origin`
    pub fn at(&self, origin: Vec2) -> PlacedArea<'_> {
        PlacedArea { area: self, origin }
    }

    /// Append the world rectangles making up this area
    pub fn collect_rects(&self, origin: Vec2, out: &mut Vec<Rect>) {
        self.for_each_rect(origin, &mut |rect| out.push(rect));
    }

    /// Visit every world rectangle making up this area
    pub fn for_each_rect(&self, origin: Vec2, visit: &mut impl FnMut(Rect)) {
        match self {
            Self::Simple(area) => visit(Rect::from_corner(origin, area.width, area.height)),
            Self::Offset(area) => visit(area.rect_at(origin)),
            Self::Complex(area) => area.sub_areas.iter().for_each(|sub| visit(sub.rect_at(origin))),
            Self::Collection(area) => {
                for member in &area.sub_areas {
                    member.for_each_rect(origin, visit);
                }
            }
        }
    }

    /// World rectangles making up this area
    pub fn rects(&self, origin: Vec2) -> Vec<Rect> {
        let mut rects = Vec::new();
        self.collect_rects(origin, &mut rects);
        rects
    }
}

impl From<SimpleArea> for Area {
    fn from(area: SimpleArea) -> Self {
        Self::Simple(area)
    }
}

impl From<OffsetArea> for Area {
    fn from(area: OffsetArea) -> Self {
        Self::Offset(area)
    }
}

impl From<ComplexArea> for Area {
    fn from(area: ComplexArea) -> Self {
        Self::Complex(area)
    }
}

impl From<AreaCollection> for Area {
    fn from(area: AreaCollection) -> Self {
        Self::Collection(area)
    }
}

/// Anything usable as a world-space point
pub trait WorldPoint {
    /// Convert to a float vector
    fn to_world(self) -> Vec2;
}

impl WorldPoint for Vec2 {
    fn to_world(self) -> Vec2 {
        self
    }
}

impl WorldPoint for Point2 {
    fn to_world(self) -> Vec2 {
        point_to_vec(self)
    }
}

impl WorldPoint for Position {
    fn to_world(self) -> Vec2 {
        self.to_vec()
    }
}

impl WorldPoint for (f32, f32) {
    fn to_world(self) -> Vec2 {
        Vec2::new(self.0, self.1)
    }
}

/// An area placed in the world (temporary, for testing only)
#[derive(Debug, Clone, Copy)]
pub struct PlacedArea<'a> {
    area: &'a Area,
    origin: Vec2,
}

impl<'a> PlacedArea<'a> {
    /// The placed area
    pub fn area(&self) -> &'a Area {
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

    /// Top-left corner
    pub fn top_left(&self) -> Vec2 {
        match self.area {
            Area::Offset(area) => self.origin + area.offset(),
            _ => self.origin,
        }
    }

    /// Center of the width/height box
    pub fn center(&self) -> Vec2 {
        self.top_left() + Vec2::new(self.area.width(), self.area.height()) * 0.5
    }

    /// Bottom-right corner of the width/height box
    pub fn bottom_right(&self) -> Vec2 {
        self.top_left() + Vec2::new(self.area.width(), self.area.height())
    }

    /// World rectangles making up the area
    pub fn rects(&self) -> Vec<Rect> {
        self.area.rects(self.origin)
    }

    /// Box covering every rectangle, if there is any
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(&self.rects())
    }

    /// Inclusive point test against any part of the area
    pub fn contains(&self, point: impl WorldPoint) -> bool {
        let point = point.to_world();
        self.rects().iter().any(|rect| rect.contains(point))
    }

    /// Whether any part of this area overlaps any part of `other`
    pub fn intersects(&self, other: &PlacedArea<'_>) -> bool {
        let own = self.rects();
        let theirs = other.rects();
        own.iter().any(|a| theirs.iter().any(|b| a.intersects(b)))
    }

    /// Overlap test with `other` moved to `candidate` when one is given
    pub fn intersects_at(&self, other: &PlacedArea<'_>, candidate: Option<Vec2>) -> bool {
        match candidate {
            Some(origin) => self.intersects(&other.moved_to(origin)),
            None => self.intersects(other),
        }
    }
}
