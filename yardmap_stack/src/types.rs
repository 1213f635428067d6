// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned entities, groups, and the payload seam for zone-keyed grouping.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use yardmap_geo::{GeoPoint, GeoTransform};

/// Orientation hint for drawing a container. Has no effect on any transform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// Long side along the canvas x axis.
    #[default]
    Deg0,
    /// Long side along the canvas y axis.
    Deg90,
}

impl Rotation {
    /// Rotation in degrees.
    pub const fn degrees(self) -> f64 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg90 => 90.0,
        }
    }

    /// Rotation in radians, for building canvas transforms.
    pub const fn radians(self) -> f64 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg90 => core::f64::consts::FRAC_PI_2,
        }
    }
}

/// A payload placed in the yard: its GPS position, derived pixel position, and
/// orientation hint.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedEntity<P> {
    payload: P,
    geo: GeoPoint,
    pixel: Point,
    rotation: Rotation,
}

impl<P> PositionedEntity<P> {
    /// Place a payload, deriving its pixel position from `transform`.
    pub fn place(payload: P, geo: GeoPoint, rotation: Rotation, transform: &GeoTransform) -> Self {
        Self {
            payload,
            geo,
            pixel: transform.to_pixel(geo),
            rotation,
        }
    }

    /// Create an entity with an already computed pixel position.
    pub fn new(payload: P, geo: GeoPoint, pixel: Point, rotation: Rotation) -> Self {
        Self {
            payload,
            geo,
            pixel,
            rotation,
        }
    }

    /// The carried record.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// GPS position.
    pub fn geo(&self) -> GeoPoint {
        self.geo
    }

    /// Canvas position in pixels.
    pub fn pixel(&self) -> Point {
        self.pixel
    }

    /// Orientation hint.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Unwrap the carried record.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

/// A stack: one or more entities grouped by proximity or by partition key.
///
/// Groups are computed fresh by each grouping call and never updated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Group<P, K> {
    /// Group identity: the input index of the seed entity for proximity groups,
    /// the partition key for partition groups.
    pub key: K,
    /// Members, never empty. Proximity groups list the seed first and then its
    /// neighbors in input order; partition groups are sorted by ascending rank.
    pub members: Vec<PositionedEntity<P>>,
    /// Where the group is drawn: the centroid for proximity groups, the
    /// lowest-ranked member's pixel for partition groups.
    pub position: Point,
    /// Rotation of the representative member.
    pub rotation: Rotation,
}

impl<P, K> Group<P, K> {
    /// Member count.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for groups produced by this crate.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The member whose rotation (and, for partition groups, position) represents the group.
    pub fn representative(&self) -> Option<&PositionedEntity<P>> {
        self.members.first()
    }
}

/// Groups produced by [`group_by_proximity`](crate::group_by_proximity), keyed by seed index.
pub type ProximityGroup<P> = Group<P, usize>;

/// Groups produced by [`group_by_partition`](crate::group_by_partition).
pub type PartitionGroup<P> = Group<P, <P as StackMember>::Key>;

/// Payloads that belong to an explicit partition, such as a container in a zone.
pub trait StackMember {
    /// Partition identifier, for example a zone id.
    type Key: Ord + Clone;

    /// The partition this payload belongs to.
    fn partition_key(&self) -> Self::Key;

    /// Position within the partition; lower ranks sort first (stack level 1 is the bottom).
    fn rank(&self) -> u32;
}

/// Arithmetic mean of the members' pixel positions. `None` for an empty slice.
pub fn centroid<P>(members: &[PositionedEntity<P>]) -> Option<Point> {
    if members.is_empty() {
        return None;
    }
    let sum = members
        .iter()
        .fold(Vec2::ZERO, |acc, m| acc + m.pixel.to_vec2());
    let n = members.len() as f64;
    Some((sum / n).to_point())
}
