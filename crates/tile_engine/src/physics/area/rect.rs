//! World-space rectangle primitive

use crate::foundation::math::Vec2;
use crate::physics::COLLISION_EPSILON;

/// Axis-aligned rectangle in world space
///
/// `x`/`y` is the top-left corner; Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width, never negative
    pub width: f32,
    /// Height, never negative
    pub height: f32,
}

impl Rect {
    /// Create a rectangle; negative dimensions become zero
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_corner(top_left: Vec2, width: f32, height: f32) -> Self {
        Self::new(top_left.x, top_left.y, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Whether either dimension is zero
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Inclusive point test
    pub fn contains(&self, point: Vec2) -> bool {
        self.x <= point.x && point.x <= self.right() && self.y <= point.y && point.y <= self.bottom()
    }

    /// Overlap test with [`COLLISION_EPSILON`] slack
    ///
    /// Two rectangles are apart once an edge is at least epsilon past the
    /// opposite edge of the other; anything closer counts as touching.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x >= other.right() + COLLISION_EPSILON
            || other.x >= self.right() + COLLISION_EPSILON
            || self.y >= other.bottom() + COLLISION_EPSILON
            || other.y >= self.bottom() + COLLISION_EPSILON)
    }

    /// The same rectangle moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Smallest rectangle covering every rectangle in the iterator
    pub fn bounding<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Option<Self> {
        rects.into_iter().fold(None, |acc, rect| match acc {
            None => Some(*rect),
            Some(bounds) => Some(bounds.union(rect)),
        })
    }
}
