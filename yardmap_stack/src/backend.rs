// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Neighbor-search trait used by proximity grouping.

use alloc::boxed::Box;
use core::fmt::Debug;

use kurbo::Point;

/// Spatial backend answering "which slots might lie within `radius` of a point".
///
/// Slots are input indices. Queries may return false positives (callers apply the
/// exact distance test) but must never miss a slot within the radius, and must
/// not return removed slots.
pub trait NeighborSearch: Debug {
    /// Create an empty backend tuned for queries of about `radius`.
    fn with_radius(radius: f64) -> Self
    where
        Self: Sized;

    /// Insert a slot at a point.
    fn insert(&mut self, slot: usize, point: Point);

    /// Remove a slot. Removing an absent slot is a no-op.
    fn remove(&mut self, slot: usize);

    /// Remove all slots.
    fn clear(&mut self);

    /// Candidate slots within `radius` of `center`, in no particular order.
    fn query_radius<'a>(
        &'a self,
        center: Point,
        radius: f64,
    ) -> Box<dyn Iterator<Item = usize> + 'a>;
}
