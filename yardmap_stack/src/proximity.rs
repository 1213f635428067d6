// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy proximity grouping in pixel space.
//!
//! Entities are visited in input order. Each entity not yet assigned seeds a new
//! group and claims every unassigned entity strictly closer than the threshold.
//! Claiming is not chained: a neighbor's own neighbors outside the seed's radius are
//! left for later seeds. The result therefore depends on input order when radii
//! overlap, and is fully determined by it.

use alloc::vec;
use alloc::vec::Vec;

use crate::backend::NeighborSearch;
use crate::backends::UniformGrid;
use crate::error::GroupingError;
use crate::types::{Group, PositionedEntity, ProximityGroup, centroid};

/// Pixel distance below which two containers belong to the same stack.
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 35.0;

/// Group entities by proximity using the [`UniformGrid`] backend.
///
/// ```
/// use kurbo::Point;
/// use yardmap_geo::GeoPoint;
/// use yardmap_stack::{PositionedEntity, Rotation, group_by_proximity};
///
/// let at = |id, x, y| {
///     PositionedEntity::new(id, GeoPoint::default(), Point::new(x, y), Rotation::Deg0)
/// };
/// let entities = [at("a", 0.0, 0.0), at("b", 5.0, 5.0), at("c", 100.0, 100.0)];
///
/// let groups = group_by_proximity(&entities, 35.0).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].position, Point::new(2.5, 2.5));
/// assert_eq!(groups[1].len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`GroupingError::InvalidThreshold`] for a negative or non-finite threshold.
pub fn group_by_proximity<P: Clone>(
    entities: &[PositionedEntity<P>],
    threshold: f64,
) -> Result<Vec<ProximityGroup<P>>, GroupingError> {
    group_by_proximity_with::<UniformGrid, P>(entities, threshold)
}

/// Group entities by proximity using the backend `B`.
///
/// Every backend yields the same groups.
///
/// # Errors
///
/// Returns [`GroupingError::InvalidThreshold`] for a negative or non-finite threshold.
pub fn group_by_proximity_with<B: NeighborSearch, P: Clone>(
    entities: &[PositionedEntity<P>],
    threshold: f64,
) -> Result<Vec<ProximityGroup<P>>, GroupingError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(GroupingError::InvalidThreshold(threshold));
    }

    let mut search = B::with_radius(threshold);
    for (i, e) in entities.iter().enumerate() {
        search.insert(i, e.pixel());
    }

    let mut assigned = vec![false; entities.len()];
    let mut groups = Vec::new();
    for (seed_idx, seed) in entities.iter().enumerate() {
        if assigned[seed_idx] {
            continue;
        }
        assigned[seed_idx] = true;
        search.remove(seed_idx);

        let mut neighbors: Vec<usize> = search
            .query_radius(seed.pixel(), threshold)
            .filter(|&j| !assigned[j] && (entities[j].pixel() - seed.pixel()).hypot() < threshold)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();

        let mut members = Vec::with_capacity(neighbors.len() + 1);
        members.push(seed.clone());
        for &j in &neighbors {
            assigned[j] = true;
            search.remove(j);
            members.push(entities[j].clone());
        }

        let position = centroid(&members).unwrap_or(seed.pixel());
        groups.push(Group {
            key: seed_idx,
            members,
            position,
            rotation: seed.rotation(),
        });
    }

    log::trace!(
        "proximity grouping: {} entities -> {} groups (threshold {threshold})",
        entities.len(),
        groups.len()
    );
    Ok(groups)
}

/// Grouping parameters, loadable from configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GroupingConfig {
    /// Pixel distance below which entities join the same group.
    pub proximity_threshold: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
        }
    }
}

impl GroupingConfig {
    /// Run [`group_by_proximity`] with this configuration.
    ///
    /// # Errors
    ///
    /// See [`group_by_proximity`].
    pub fn group<P: Clone>(
        &self,
        entities: &[PositionedEntity<P>],
    ) -> Result<Vec<ProximityGroup<P>>, GroupingError> {
        group_by_proximity(entities, self.proximity_threshold)
    }
}
