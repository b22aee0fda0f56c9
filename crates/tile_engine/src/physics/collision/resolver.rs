//! Swept movement resolver
//!
//! Moves a collision area through a tile map in steps no longer than the
//! smallest part of the mover, so a fast mover cannot skip over a thin
//! obstacle. The first blocked step is refined by bisection down to
//! [`DOUBLE_COLLISION_EPSILON`] and a diagonal stop is decomposed into per-axis sweeps, which lets the
//! mover slide along walls.

use crate::foundation::math::Vec2;
use crate::physics::area::Rect;
use crate::physics::{COLLISION_EPSILON, DOUBLE_COLLISION_EPSILON};
use crate::spatial::SpatialIndex;

use super::area::{CollisionArea, Overlap, PlacedCollisionArea};
use super::terrain::MovementTerrainTypes;

/// Resolver progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    /// Stepping along the requested displacement
    Sweeping,
    /// A blocked step was found and is being refined
    Bisecting,
    /// The final position is known
    Resolved,
}

/// Outcome of one movement request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementResult {
    /// Farthest reachable position
    pub final_position: Vec2,
    /// A tile blocked the mover
    pub terrain_collision: bool,
    /// Another entity blocked the mover
    pub entity_collision: bool,
    /// The final position overlaps a trigger area
    pub event_collision: bool,
    /// The horizontal component was cut short
    pub horizontal_collision: bool,
    /// The vertical component was cut short
    pub vertical_collision: bool,
    /// Tags of every tile the mover overlapped, passable or not
    pub terrain_types_collided_with: MovementTerrainTypes,
}

impl MovementResult {
    /// Result of a request that did not move
    pub fn stationary(position: Vec2) -> Self {
        Self {
            final_position: position,
            terrain_collision: false,
            entity_collision: false,
            event_collision: false,
            horizontal_collision: false,
            vertical_collision: false,
            terrain_types_collided_with: MovementTerrainTypes::empty(),
        }
    }

    /// Something physical stopped the mover
    pub fn movement_collision(&self) -> bool {
        self.terrain_collision || self.entity_collision
    }
}

#[derive(Debug, Clone, Copy)]
struct Contact {
    mover: Rect,
    blocker: Rect,
}

/// Per-request movement resolver
///
/// Created for a single movement attempt, resolved once, then discarded.
///
/// ```
/// use tile_engine::foundation::math::Vec2;
/// use tile_engine::physics::{CollisionArea, CollisionInformation, MovementTerrainTypes};
/// use tile_engine::spatial::TileGrid;
///
/// let mut grid = TileGrid::new(64.0);
/// grid.insert(0, 2, CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::BLOCKED));
///
/// let mover = CollisionArea::simple(64.0, 64.0, MovementTerrainTypes::LAND);
/// let mut info = CollisionInformation::new(&mover, &grid, Vec2::zeros(), 0.0, 100.0, 0.0);
/// let result = info.resolve();
///
/// assert!(result.terrain_collision);
/// assert!((result.final_position.x - 63.98).abs() < 1e-3);
/// ```
pub struct CollisionInformation<'a, I: SpatialIndex + ?Sized> {
    mover: &'a CollisionArea,
    index: &'a I,
    start: Vec2,
    direction: f32,
    displacement: Vec2,
    entities: &'a [PlacedCollisionArea<'a>],
    triggers: &'a [PlacedCollisionArea<'a>],
    extent: Vec2,
    state: ResolverState,
    result: MovementResult,
    contacts: Vec<Contact>,
    // Mover parts relative to its position, filled once per resolve
    mover_rects: Vec<(Rect, MovementTerrainTypes)>,
    // Scratch buffers reused by every candidate check
    placed_rects: Vec<(Rect, MovementTerrainTypes)>,
    obstacle_rects: Vec<(Rect, MovementTerrainTypes)>,
}

impl<'a, I: SpatialIndex + ?Sized> CollisionInformation<'a, I> {
    /// Prepare a movement of `mover` from `start` by `(dx, dy)`
    ///
    /// `direction` is the heading in radians; it is carried along for the
    /// caller and does not affect the sweep.
    pub fn new(
        mover: &'a CollisionArea,
        index: &'a I,
        start: Vec2,
        direction: f32,
        dx: f32,
        dy: f32,
    ) -> Self {
        Self {
            mover,
            index,
            start,
            direction,
            displacement: Vec2::new(dx, dy),
            entities: &[],
            triggers: &[],
            extent: Vec2::zeros(),
            state: ResolverState::Sweeping,
            result: MovementResult::stationary(start),
            contacts: Vec::new(),
            mover_rects: Vec::new(),
            placed_rects: Vec::new(),
            obstacle_rects: Vec::new(),
        }
    }

    /// Other entities that block like tiles but set the entity flag
    pub fn with_entities(mut self, entities: &'a [PlacedCollisionArea<'a>]) -> Self {
        self.entities = entities;
        self
    }

    /// Trigger areas that never block
    pub fn with_triggers(mut self, triggers: &'a [PlacedCollisionArea<'a>]) -> Self {
        self.triggers = triggers;
        self
    }

    /// Current state
    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// Starting position
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Heading in radians
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Requested displacement
    pub fn displacement(&self) -> Vec2 {
        self.displacement
    }

    /// Resolved position; the start until [`Self::resolve`] has run
    pub fn final_position(&self) -> Vec2 {
        self.result.final_position
    }

    /// A tile blocked the mover
    pub fn terrain_collision(&self) -> bool {
        self.result.terrain_collision
    }

    /// Another entity blocked the mover
    pub fn entity_collision(&self) -> bool {
        self.result.entity_collision
    }

    /// The final position overlaps a trigger
    pub fn event_collision(&self) -> bool {
        self.result.event_collision
    }

    /// A tile or entity blocked the mover
    pub fn movement_collision(&self) -> bool {
        self.result.movement_collision()
    }

    /// Snapshot of everything accumulated so far
    pub fn result(&self) -> MovementResult {
        self.result
    }

    /// Run the sweep; calling it again returns the same result
    pub fn resolve(&mut self) -> MovementResult {
        if self.state == ResolverState::Resolved {
            return self.result;
        }

        if self.displacement.x == 0.0 && self.displacement.y == 0.0 {
            return self.finish(self.start);
        }

        if !self.displacement.x.is_finite() || !self.displacement.y.is_finite() {
            log::warn!(
                "Non-finite displacement ({}, {}); movement ignored",
                self.displacement.x,
                self.displacement.y
            );
            return self.finish(self.start);
        }

        self.mover_rects.clear();
        self.mover.collect_tagged_rects(Vec2::zeros(), &mut self.mover_rects);
        match self.step_extent() {
            Some(extent) => self.extent = extent,
            None => {
                log::warn!("Mover has a degenerate footprint; movement ignored");
                return self.finish(self.start);
            }
        }

        let final_position = self.sweep(self.start, self.displacement, true);
        self.finish(final_position)
    }

    /// Smallest part width and height; a step never exceeds either
    fn step_extent(&self) -> Option<Vec2> {
        let footprint = Rect::bounding(self.mover_rects.iter().map(|(rect, _)| rect))?;
        if footprint.is_degenerate() {
            return None;
        }

        let smallest = |size: fn(&Rect) -> f32| {
            self.mover_rects
                .iter()
                .map(|(rect, _)| size(rect))
                .filter(|&extent| extent > 0.0)
                .reduce(f32::min)
        };
        let width = smallest(|rect: &Rect| rect.width)?;
        let height = smallest(|rect: &Rect| rect.height)?;

        // Parts thinner than the bisection granularity step at that granularity.
        Some(Vec2::new(
            width.max(DOUBLE_COLLISION_EPSILON),
            height.max(DOUBLE_COLLISION_EPSILON),
        ))
    }

    fn finish(&mut self, final_position: Vec2) -> MovementResult {
        self.result.final_position = final_position;

        let placed = self.mover.at(final_position);
        self.result.event_collision = self.triggers.iter().any(|trigger| placed.overlaps(trigger));
        self.state = ResolverState::Resolved;

        if self.result.movement_collision() {
            log::debug!(
                "Movement from ({:.2}, {:.2}) by ({:.2}, {:.2}) stopped at ({:.2}, {:.2})",
                self.start.x,
                self.start.y,
                self.displacement.x,
                self.displacement.y,
                final_position.x,
                final_position.y
            );
        }

        self.result
    }

    /// Step from `from` by `delta`, never advancing further than the
    /// smallest mover part along the dominant axis in one step
    fn sweep(&mut self, from: Vec2, delta: Vec2, decompose: bool) -> Vec2 {
        let (extent, distance) = if delta.x.abs() >= delta.y.abs() {
            (self.extent.x, delta.x.abs())
        } else {
            (self.extent.y, delta.y.abs())
        };
        let factor = (extent / distance).min(1.0);

        let mut safe = from;
        let mut step = 1u32;
        while factor * (step as f32) < 1.0 {
            let candidate = from + delta * (factor * step as f32);
            if self.check_candidate(candidate) {
                return self.stop(from, safe, candidate, delta, decompose);
            }
            safe = candidate;
            step += 1;
        }

        // Increments rarely land exactly on the destination.
        let destination = from + delta;
        if self.check_candidate(destination) {
            self.stop(from, safe, destination, delta, decompose)
        } else {
            destination
        }
    }

    /// Test the mover at `candidate` against the tiles under it and the
    /// other entities; records blocking contacts
    fn check_candidate(&mut self, candidate: Vec2) -> bool {
        let mut contacts = std::mem::take(&mut self.contacts);
        let mut placed = std::mem::take(&mut self.placed_rects);
        let mut obstacle = std::mem::take(&mut self.obstacle_rects);
        contacts.clear();
        placed.clear();
        placed.extend(
            self.mover_rects
                .iter()
                .map(|(rect, tags)| (rect.translated(candidate), *tags)),
        );

        let mut terrain_types = MovementTerrainTypes::empty();
        let mut terrain_blocked = false;
        let mut entity_blocked = false;

        if let Some(bounds) = Rect::bounding(placed.iter().map(|(rect, _)| rect)) {
            // Cells within epsilon of an edge still count as touching.
            let tile_size = self.index.tile_size();
            let first_row = ((bounds.y - COLLISION_EPSILON) / tile_size).floor() as i32;
            let last_row = ((bounds.bottom() + COLLISION_EPSILON) / tile_size).ceil() as i32;
            let first_col = ((bounds.x - COLLISION_EPSILON) / tile_size).floor() as i32;
            let last_col = ((bounds.right() + COLLISION_EPSILON) / tile_size).ceil() as i32;

            for row in first_row..=last_row {
                for col in first_col..=last_col {
                    let Some(tile) = self.index.try_get_collision_at(row, col) else {
                        continue;
                    };
                    obstacle.clear();
                    tile.collect_tagged_rects(self.index.cell_origin(row, col), &mut obstacle);
                    Overlap::for_each_between(&placed, &obstacle, |overlap| {
                        terrain_types |= overlap.other_terrain;
                        if overlap.blocks() {
                            terrain_blocked = true;
                            contacts.push(Contact {
                                mover: overlap.own,
                                blocker: overlap.other,
                            });
                        }
                    });
                }
            }

            for entity in self.entities {
                obstacle.clear();
                entity.area().collect_tagged_rects(entity.origin(), &mut obstacle);
                Overlap::for_each_between(&placed, &obstacle, |overlap| {
                    if overlap.blocks() {
                        entity_blocked = true;
                        contacts.push(Contact {
                            mover: overlap.own,
                            blocker: overlap.other,
                        });
                    }
                });
            }
        }

        self.result.terrain_types_collided_with |= terrain_types;
        self.result.terrain_collision |= terrain_blocked;
        self.result.entity_collision |= entity_blocked;
        self.contacts = contacts;
        self.placed_rects = placed;
        self.obstacle_rects = obstacle;

        let blocked = terrain_blocked || entity_blocked;
        if blocked {
            log::trace!("Candidate at ({:.3}, {:.3}) blocked", candidate.x, candidate.y);
        }
        blocked
    }

    /// Handle the first blocked step of a sweep from `from` by `delta`
    fn stop(&mut self, from: Vec2, safe: Vec2, colliding: Vec2, delta: Vec2, decompose: bool) -> Vec2 {
        self.state = ResolverState::Bisecting;
        let contacts = std::mem::take(&mut self.contacts);
        let refined = self.bisect(safe, colliding);

        if delta.x == 0.0 || delta.y == 0.0 {
            if delta.x != 0.0 {
                self.result.horizontal_collision = true;
            } else {
                self.result.vertical_collision = true;
            }
            return self
                .snap_flush(refined, colliding, delta, &contacts)
                .unwrap_or(refined);
        }

        if !decompose {
            return refined;
        }

        // Slide: continue what is left of the request one axis at a time,
        // the larger remaining component first.
        let remaining = from + delta - refined;
        let horizontal = Vec2::new(remaining.x, 0.0);
        let vertical = Vec2::new(0.0, remaining.y);
        let axes = if remaining.x.abs() >= remaining.y.abs() {
            [horizontal, vertical]
        } else {
            [vertical, horizontal]
        };

        let mut position = refined;
        for part in axes {
            if part.x != 0.0 || part.y != 0.0 {
                position = self.sweep(position, part, false);
            }
        }
        position
    }

    /// Binary search in steps of [`DOUBLE_COLLISION_EPSILON`] for the last
    /// clear position between `safe` and `colliding`
    fn bisect(&mut self, safe: Vec2, colliding: Vec2) -> Vec2 {
        let segment = colliding - safe;
        let steps = (segment.norm() / DOUBLE_COLLISION_EPSILON).floor() as u32;
        if steps < 2 {
            return safe;
        }

        let (mut low, mut high) = (0u32, steps);
        while high - low >= 2 {
            let mid = low + (high - low) / 2;
            let candidate = safe + segment * (mid as f32 / steps as f32);
            if self.check_candidate(candidate) {
                high = mid;
            } else {
                low = mid;
            }
        }

        safe + segment * (low as f32 / steps as f32)
    }

    /// Flush position against the nearest blocking edge of a single-axis
    /// move, if it is clear and lies between the start and `colliding`
    fn snap_flush(
        &mut self,
        refined: Vec2,
        colliding: Vec2,
        delta: Vec2,
        contacts: &[Contact],
    ) -> Option<Vec2> {
        let horizontal = delta.x != 0.0;
        let positive = if horizontal { delta.x > 0.0 } else { delta.y > 0.0 };
        let pick: fn(f32, f32) -> f32 = if positive { f32::min } else { f32::max };

        let snapped = contacts
            .iter()
            .map(|contact| {
                let (mover_min, mover_max, blocker_min, blocker_max, origin) = if horizontal {
                    (contact.mover.x, contact.mover.right(), contact.blocker.x, contact.blocker.right(), colliding.x)
                } else {
                    (contact.mover.y, contact.mover.bottom(), contact.blocker.y, contact.blocker.bottom(), colliding.y)
                };
                if positive {
                    blocker_min - (mover_max - origin) - DOUBLE_COLLISION_EPSILON
                } else {
                    blocker_max - (mover_min - origin) + DOUBLE_COLLISION_EPSILON
                }
            })
            .reduce(pick)?;

        let (start, end) = if horizontal {
            (self.start.x, colliding.x)
        } else {
            (self.start.y, colliding.y)
        };
        if snapped < start.min(end) || snapped > start.max(end) {
            return None;
        }

        let candidate = if horizontal {
            Vec2::new(snapped, refined.y)
        } else {
            Vec2::new(refined.x, snapped)
        };
        if self.check_candidate(candidate) {
            None
        } else {
            Some(candidate)
        }
    }
}

/// Resolve a movement against a spatial index in one call
pub fn resolve_movement<I: SpatialIndex + ?Sized>(
    mover: &CollisionArea,
    index: &I,
    start: Vec2,
    direction: f32,
    dx: f32,
    dy: f32,
) -> MovementResult {
    CollisionInformation::new(mover, index, start, direction, dx, dy).resolve()
}
