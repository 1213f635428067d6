// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Neighbor-search backends.
//!
//! - `linear`: flat vector with linear scans. Fine for a few hundred containers.
//! - `grid`: uniform grid with cells the size of the query radius, so a query only
//!   inspects the 3×3 block of cells around its center.
//!
//! Both answer with the same exact neighbor sets once callers apply the distance
//! test, so grouping results never depend on the backend.

pub mod grid;
pub mod linear;

pub use grid::UniformGrid;
pub use linear::LinearScan;
