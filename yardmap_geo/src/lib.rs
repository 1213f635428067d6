// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yardmap Geo: GPS ⇄ canvas transforms and yard boundary containment.
//!
//! This crate is the coordinate layer of a container-yard map.
//!
//! - Map geographic coordinates onto a pixel canvas and back with a validated, linear
//!   [`GeoTransform`].
//! - Measure great-circle distances with [`distance_meters`] (Haversine).
//! - Decide whether a coordinate lies inside the yard with [`is_inside`], using the
//!   yard polygon when one is configured and the bounding box otherwise.
//!
//! A [`ReferenceFrame`] bundles the transform with the optional boundary polygon.
//! Frames are validated on construction: zero-extent frames fail with a
//! [`FrameError`] instead of producing `NaN` or infinite pixels later.
//!
//! Interpolation is linear in degrees. Latitude and longitude are treated as a flat
//! `(longitude, latitude)` plane everywhere except in [`distance_meters`], which is
//! adequate at yard scale.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use yardmap_geo::{GeoPoint, ReferenceFrame};
//!
//! let frame = ReferenceFrame::new(
//!     GeoPoint::new(-6.2000, 106.8000),
//!     GeoPoint::new(-6.2100, 106.8100),
//!     1200.0,
//!     800.0,
//! )
//! .unwrap();
//!
//! let gate = GeoPoint::new(-6.2050, 106.8050);
//! let px = frame.to_pixel(gate);
//! assert!((px - Point::new(600.0, 400.0)).hypot() < 1e-6);
//!
//! let back = frame.to_geo(px);
//! assert!((back.latitude - gate.latitude).abs() < 1e-12);
//! assert!(frame.contains(gate));
//! ```
//!
//! With a boundary polygon, containment follows the polygon instead of the box:
//!
//! ```rust
//! use yardmap_geo::{GeoPoint, ReferenceFrame};
//!
//! let pt = GeoPoint::new;
//! let frame = ReferenceFrame::new(pt(10.0, 0.0), pt(0.0, 10.0), 100.0, 100.0)
//!     .unwrap()
//!     .with_polygon(vec![
//!         GeoPoint::new(0.0, 0.0),
//!         GeoPoint::new(10.0, 0.0),
//!         GeoPoint::new(0.0, 10.0),
//!     ]);
//!
//! assert!(frame.contains(GeoPoint::new(2.0, 2.0)));
//! assert!(!frame.contains(GeoPoint::new(8.0, 8.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use `std` for floating point math.
//! - `libm`: `no_std` floating point math through Kurbo's `libm` support.
//! - `serde` (default): (de)serialize [`GeoPoint`], [`FrameConfig`], and
//!   [`ReferenceFrame`]. Deserializing a frame validates it.
//!
//! Without `std` this crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod containment;
pub mod error;
pub mod frame;
pub mod transform;
pub mod types;
pub mod zone;

pub use containment::{Polygon, is_inside, ray_cast};
pub use error::FrameError;
pub use frame::{FrameConfig, ReferenceFrame};
pub use transform::{EARTH_RADIUS_METERS, GeoTransform, distance_meters};
pub use types::{GeoBounds, GeoPoint};
pub use zone::ZoneFootprint;
