// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yard zones described by four GPS corners.

use alloc::string::String;

use kurbo::BezPath;

use crate::containment::ray_cast;
use crate::frame::project_ring;
use crate::transform::GeoTransform;
use crate::types::{GeoBounds, GeoPoint};

/// A named yard subdivision. In the GPS model one zone is one stack position.
///
/// Corners are stored in ring order: up-left, up-right, down-right, down-left.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneFootprint {
    /// Stable identifier, used as the partition key when grouping stacks.
    pub id: String,
    /// Display name.
    pub name: String,
    corners: [GeoPoint; 4],
}

impl ZoneFootprint {
    /// Create a zone from its four corners.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        up_left: GeoPoint,
        up_right: GeoPoint,
        down_right: GeoPoint,
        down_left: GeoPoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            corners: [up_left, up_right, down_right, down_left],
        }
    }

    /// Corners in ring order.
    pub fn corners(&self) -> &[GeoPoint; 4] {
        &self.corners
    }

    /// Even-odd containment against the corner ring.
    pub fn contains(&self, p: GeoPoint) -> bool {
        ray_cast(&self.corners, p)
    }

    /// Mean of the four corners.
    pub fn center(&self) -> GeoPoint {
        let (lat, lon) = self
            .corners
            .iter()
            .fold((0.0, 0.0), |(lat, lon), c| (lat + c.latitude, lon + c.longitude));
        GeoPoint::new(lat / 4.0, lon / 4.0)
    }

    /// Bounding box of the corners.
    pub fn bounds(&self) -> GeoBounds {
        let [a, b, c, d] = self.corners;
        GeoBounds::from_corners(a, c).union(&GeoBounds::from_corners(b, d))
    }

    /// Footprint projected into pixel space as a closed path.
    pub fn pixel_outline(&self, transform: &GeoTransform) -> BezPath {
        project_ring(transform, &self.corners)
    }
}
