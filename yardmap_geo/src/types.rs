// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic primitives: points and order-normalized bounding boxes.

use core::cmp::Ordering;

/// A geographic coordinate in decimal degrees.
///
/// No validity range is enforced. For interpolation the pair is treated as a flat
/// Euclidean `(longitude, latitude)` pair; only [`distance_meters`](Self::distance_meters)
/// treats it as a point on a sphere.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude, in that order.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// See [`distance_meters`](crate::distance_meters).
    pub fn distance_meters(self, other: Self) -> f64 {
        crate::transform::distance_meters(self, other)
    }

    /// Whether both components are finite.
    pub fn is_finite(self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Axis-aligned box in `(longitude, latitude)` space.
///
/// Corners are normalized on construction, so a box built from a top-left and a
/// bottom-right corner contains the same points whichever corner carries the
/// larger latitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    /// Smallest longitude (west edge).
    pub min_lon: f64,
    /// Smallest latitude (south edge).
    pub min_lat: f64,
    /// Largest longitude (east edge).
    pub max_lon: f64,
    /// Largest latitude (north edge).
    pub max_lat: f64,
}

impl GeoBounds {
    /// Bounds spanned by two opposite corners, in any order.
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            min_lon: min_f(a.longitude, b.longitude),
            min_lat: min_f(a.latitude, b.latitude),
            max_lon: max_f(a.longitude, b.longitude),
            max_lat: max_f(a.latitude, b.latitude),
        }
    }

    /// Whether the point lies inside or on the boundary. NaN components are never inside.
    pub fn contains(&self, p: GeoPoint) -> bool {
        le(self.min_lon, p.longitude)
            && le(p.longitude, self.max_lon)
            && le(self.min_lat, p.latitude)
            && le(p.latitude, self.max_lat)
    }

    /// Smallest bounds covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_lon: min_f(self.min_lon, other.min_lon),
            min_lat: min_f(self.min_lat, other.min_lat),
            max_lon: max_f(self.max_lon, other.max_lon),
            max_lat: max_f(self.max_lat, other.max_lat),
        }
    }

    /// Center of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            0.5 * (self.min_lat + self.max_lat),
            0.5 * (self.min_lon + self.max_lon),
        )
    }

    /// East-west extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// North-south extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

fn min_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

fn max_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

fn le(a: f64, b: f64) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}
