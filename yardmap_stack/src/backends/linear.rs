// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::backend::NeighborSearch;

/// Flat vector backend. Every query visits every live slot.
#[derive(Clone, Default)]
pub struct LinearScan {
    entries: Vec<Option<Point>>,
}

impl Debug for LinearScan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("LinearScan")
            .field("total_slots", &total)
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl NeighborSearch for LinearScan {
    fn with_radius(_radius: f64) -> Self {
        Self::default()
    }

    fn insert(&mut self, slot: usize, point: Point) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(point);
    }

    fn remove(&mut self, slot: usize) {
        if let Some(e) = self.entries.get_mut(slot) {
            *e = None;
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn query_radius<'a>(
        &'a self,
        center: Point,
        radius: f64,
    ) -> Box<dyn Iterator<Item = usize> + 'a> {
        Box::new(
            self.entries
                .iter()
                .enumerate()
                .filter_map(move |(i, slot)| match slot {
                    Some(p) if (*p - center).hypot() <= radius => Some(i),
                    _ => None,
                }),
        )
    }
}
