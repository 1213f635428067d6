// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend keyed by integer cell coordinates.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::backend::NeighborSearch;

/// Uniform grid backend.
///
/// Points are bucketed into square cells of side `cell`. With the cell equal to the
/// query radius, a query touches at most nine cells. Negative coordinates are
/// fine; cells are addressed by floor division.
#[derive(Clone)]
pub struct UniformGrid {
    cell: f64,
    entries: Vec<Option<(i64, i64)>>,
    cells: BTreeMap<(i64, i64), Vec<usize>>,
    points: Vec<Point>,
}

impl UniformGrid {
    /// Create a grid with the given cell side. Non-positive or non-finite sides fall
    /// back to one pixel.
    pub fn new(cell: f64) -> Self {
        let cell = if cell.is_finite() && cell > 0.0 {
            cell
        } else {
            1.0
        };
        Self {
            cell,
            entries: Vec::new(),
            cells: BTreeMap::new(),
            points: Vec::new(),
        }
    }

    /// Cell side in pixels.
    pub fn cell_size(&self) -> f64 {
        self.cell
    }

    /// Floor to a cell index, saturating at the `i64` range. NaN maps to 0.
    ///
    /// Monotone in `v`, so a query's cell range always covers its radius.
    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The cast saturates; out-of-range coordinates collapse into the edge cells."
        )]
        let i = v as i64;
        if (i as f64) > v { i.saturating_sub(1) } else { i }
    }

    fn key_for(&self, p: Point) -> (i64, i64) {
        (
            Self::floor_to_i64(p.x / self.cell),
            Self::floor_to_i64(p.y / self.cell),
        )
    }
}

impl NeighborSearch for UniformGrid {
    fn with_radius(radius: f64) -> Self {
        Self::new(radius)
    }

    fn insert(&mut self, slot: usize, point: Point) {
        self.remove(slot);
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
            self.points.resize(slot + 1, Point::ORIGIN);
        }
        let key = self.key_for(point);
        self.entries[slot] = Some(key);
        self.points[slot] = point;
        self.cells.entry(key).or_default().push(slot);
    }

    fn remove(&mut self, slot: usize) {
        let Some(key) = self.entries.get_mut(slot).and_then(Option::take) else {
            return;
        };
        if let Some(slots) = self.cells.get_mut(&key) {
            if let Some(pos) = slots.iter().position(|&s| s == slot) {
                slots.swap_remove(pos);
            }
            if slots.is_empty() {
                self.cells.remove(&key);
            }
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.cells.clear();
        self.points.clear();
    }

    fn query_radius<'a>(
        &'a self,
        center: Point,
        radius: f64,
    ) -> Box<dyn Iterator<Item = usize> + 'a> {
        let (min_x, min_y) = self.key_for(Point::new(center.x - radius, center.y - radius));
        let (max_x, max_y) = self.key_for(Point::new(center.x + radius, center.y + radius));
        let mut set = BTreeSet::new();
        for (_, slots) in self.cells.range((min_x, min_y)..=(max_x, max_y)) {
            for &s in slots {
                set.insert(s);
            }
        }
        // The lexicographic range covers whole columns between min_x and max_x.
        Box::new(set.into_iter().filter(move |&s| {
            self.entries[s].is_some_and(|(_, cy)| (min_y..=max_y).contains(&cy))
                && (self.points[s] - center).hypot() <= radius
        }))
    }
}

impl Debug for UniformGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("UniformGrid")
            .field("cell", &self.cell)
            .field("total_slots", &total)
            .field("alive", &alive)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}
