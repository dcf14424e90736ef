//! Axis-aligned bounding box geometry
//!
//! All collision detection in the game reduces to AABB queries. `collides`
//! is the cheap partial-overlap test; `intersects` is the rigorous version
//! that also reports which axis to resolve on and where the moving box
//! should be placed so it no longer overlaps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Resolution axis for an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Outcome of a rigorous intersection test
///
/// `pos` is the coordinate on `axis` that the *other* (moving) box should
/// snap to so the boxes are separated by one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub axis: Axis,
    pub pos: f32,
}

/// A rectangular region in 2D space, sides parallel to the axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// X coordinate of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Y coordinate of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point of the box
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check whether an (x, y) coordinate is within the box (inclusive)
    pub fn in_bounds(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }

    /// Check whether a point is within the box boundary (inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.in_bounds(point.x, point.y)
    }

    /// Partial-overlap test. Strict comparisons: boxes that only share an
    /// edge do not collide.
    pub fn collides(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Full-enclosure test (strict): `other` lies entirely inside `self`.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.x < other.x
            && self.y < other.y
            && self.right() > other.right()
            && self.bottom() > other.bottom()
    }

    /// Rigorous intersection test with minimal-translation resolution.
    ///
    /// For each axis the penetration depth is computed from both directions
    /// and the smaller one picked, together with the non-overlapping
    /// coordinate one unit past the boundary. A negative penetration on
    /// either axis means the boxes don't intersect. The axis with the
    /// strictly smaller penetration wins; ties resolve to Y.
    pub fn intersects(&self, other: &BoundingBox) -> Option<Contact> {
        // Penetration through the left and right sides
        let x1 = other.right() - self.x;
        let x2 = self.right() - other.x;
        let (x, x_pos) = if x1 < x2 {
            (x1, self.x - (other.w + 1.0))
        } else {
            (x2, self.right() + 1.0)
        };
        if x < 0.0 {
            return None;
        }

        // Penetration through the top and bottom sides
        let y1 = other.bottom() - self.y;
        let y2 = self.bottom() - other.y;
        let (y, y_pos) = if y1 < y2 {
            (y1, self.y - (other.h + 1.0))
        } else {
            (y2, self.bottom() + 1.0)
        };
        if y < 0.0 {
            return None;
        }

        if x < y {
            Some(Contact { axis: Axis::X, pos: x_pos })
        } else {
            Some(Contact { axis: Axis::Y, pos: y_pos })
        }
    }
}
