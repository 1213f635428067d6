// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yardmap Stack: group GPS-placed containers into stacks.
//!
//! Containers reported close together are drawn as one stack. This crate provides two
//! strategies for forming those stacks, plus a search over the result.
//!
//! - [`group_by_proximity`]: greedy, seed-ordered grouping of entities whose pixel
//!   positions are strictly closer than a threshold ([`DEFAULT_PROXIMITY_THRESHOLD`]
//!   is 35 px). The group sits at the members' centroid and takes the seed's rotation.
//! - [`group_by_partition`]: one group per explicit key (a zone id, say), members sorted
//!   by rank, positioned at the lowest-ranked member.
//! - [`search::find_group`]: the first group holding a container that matches a
//!   [`StackQuery`].
//!
//! Neighbor lookup during proximity grouping goes through the [`NeighborSearch`]
//! trait. [`UniformGrid`] is the default; [`LinearScan`] is a brute-force reference.
//! Both produce identical groups.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use yardmap_geo::{GeoPoint, GeoTransform};
//! use yardmap_stack::{PositionedEntity, Rotation, group_by_proximity};
//!
//! let transform = GeoTransform::new(
//!     GeoPoint::new(-6.2000, 106.8000),
//!     GeoPoint::new(-6.2100, 106.8100),
//!     Size::new(1200.0, 800.0),
//! )
//! .unwrap();
//!
//! let reports = [
//!     ("MSCU1", GeoPoint::new(-6.20500, 106.80500), Rotation::Deg90),
//!     ("MSCU2", GeoPoint::new(-6.20501, 106.80501), Rotation::Deg0),
//!     ("TEMU3", GeoPoint::new(-6.20900, 106.80100), Rotation::Deg0),
//! ];
//! let entities: Vec<_> = reports
//!     .into_iter()
//!     .map(|(id, geo, rot)| PositionedEntity::place(id, geo, rot, &transform))
//!     .collect();
//!
//! let stacks = group_by_proximity(&entities, 35.0).unwrap();
//! assert_eq!(stacks.len(), 2);
//! assert_eq!(stacks[0].len(), 2);
//! assert_eq!(stacks[0].rotation, Rotation::Deg90);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use `std` for floating point math.
//! - `libm`: `no_std` floating point math through Kurbo's `libm` support.
//! - `serde` (default): (de)serialize [`Rotation`] and [`GroupingConfig`].
//!
//! Without `std` this crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod error;
pub mod partition;
pub mod proximity;
pub mod search;
pub mod types;

pub use backend::NeighborSearch;
pub use backends::{LinearScan, UniformGrid};
pub use error::{GroupingError, SearchError};
pub use partition::group_by_partition;
pub use proximity::{
    DEFAULT_PROXIMITY_THRESHOLD, GroupingConfig, group_by_proximity, group_by_proximity_with,
};
pub use search::{ContainerRecord, StackMatcher, StackQuery, find_group};
pub use types::{
    Group, PartitionGroup, PositionedEntity, ProximityGroup, Rotation, StackMember, centroid,
};
