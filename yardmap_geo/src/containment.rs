// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-polygon and point-in-box tests for yard boundaries.
//!
//! Polygons are rings of [`GeoPoint`]s in `(longitude, latitude)` space, implicitly
//! closed from the last point back to the first. Containment uses the even-odd
//! rule: a horizontal ray is cast from the query point and edge crossings are
//! counted. Points exactly on an edge may resolve either way.

use alloc::vec::Vec;

use crate::frame::ReferenceFrame;
use crate::types::{GeoBounds, GeoPoint};

/// A closed boundary ring of at least three points.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<GeoPoint>,
}

impl Polygon {
    /// Build a polygon. Returns `None` for fewer than three points.
    pub fn new(points: impl Into<Vec<GeoPoint>>) -> Option<Self> {
        let points = points.into();
        (points.len() >= 3).then_some(Self { points })
    }

    /// Ring vertices in order. The closing edge is implicit.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Even-odd containment.
    pub fn contains(&self, p: GeoPoint) -> bool {
        ray_cast(&self.points, p)
    }

    /// Bounding box of the vertices.
    pub fn bounds(&self) -> GeoBounds {
        let first = GeoBounds::from_corners(self.points[0], self.points[0]);
        self.points[1..].iter().fold(first, |acc, &p| {
            acc.union(&GeoBounds::from_corners(p, p))
        })
    }
}

/// Even-odd ray cast of `p` against the closed ring `ring`.
///
/// Rings with fewer than three points contain nothing. Edges that do not straddle
/// the ray's latitude are skipped before the intersection is computed, so a
/// horizontal edge never reaches the division.
pub fn ray_cast(ring: &[GeoPoint], p: GeoPoint) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let (x, y) = (p.longitude, p.latitude);
    let mut inside = false;
    let mut prev = ring[ring.len() - 1];
    for &cur in ring {
        let (xi, yi) = (cur.longitude, cur.latitude);
        let (xj, yj) = (prev.longitude, prev.latitude);
        // Straddling implies yi != yj.
        if (yi > y) != (yj > y) {
            let x_cross = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x < x_cross {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}

/// Whether `p` lies within the frame's operative boundary.
///
/// Uses the frame's polygon when one is set, otherwise the inclusive,
/// order-normalized box between `top_left` and `bottom_right`.
pub fn is_inside(p: GeoPoint, frame: &ReferenceFrame) -> bool {
    match frame.boundary() {
        Some(polygon) => polygon.contains(p),
        None => frame.bounds().contains(p),
    }
}
