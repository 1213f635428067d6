// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping by explicit partition key (one zone = one stack).

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::types::{Group, PartitionGroup, PositionedEntity, StackMember};

/// Group entities by [`StackMember::partition_key`].
///
/// Groups come out in ascending key order and members in ascending
/// [`rank`](StackMember::rank). Each group is drawn at, and takes its rotation
/// from, its lowest-ranked member.
///
/// The result is independent of input order only while ranks within a key are
/// distinct. Equal ranks keep their input order, so the first of the tied
/// lowest-ranked members becomes the representative.
pub fn group_by_partition<P>(entities: &[PositionedEntity<P>]) -> Vec<PartitionGroup<P>>
where
    P: StackMember + Clone,
{
    let mut buckets: BTreeMap<P::Key, Vec<PositionedEntity<P>>> = BTreeMap::new();
    for e in entities {
        buckets
            .entry(e.payload().partition_key())
            .or_default()
            .push(e.clone());
    }

    let groups: Vec<_> = buckets
        .into_iter()
        .map(|(key, mut members)| {
            members.sort_by_key(|m| m.payload().rank());
            let base = &members[0];
            let (position, rotation) = (base.pixel(), base.rotation());
            Group {
                key,
                members,
                position,
                rotation,
            }
        })
        .collect();

    log::trace!(
        "partition grouping: {} entities -> {} groups",
        entities.len(),
        groups.len()
    );
    groups
}
