// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference grid drawn under the yard.

use alloc::vec::Vec;

use kurbo::{Line, Point, Size};

/// Spacing of the reference grid, in canvas pixels.
pub const DEFAULT_GRID_SPACING: f64 = 100.0;

/// Grid lines covering `canvas` every `spacing` pixels.
///
/// Vertical lines come first, left to right, then horizontal lines top to bottom.
/// Both include the line at 0 and any line landing exactly on the far edge.
/// A non-positive or non-finite spacing yields no lines.
///
/// ```
/// use kurbo::Size;
/// use yardmap_view::grid_lines;
///
/// let lines = grid_lines(Size::new(1200.0, 800.0), 100.0);
/// assert_eq!(lines.len(), 13 + 9);
/// ```
pub fn grid_lines(canvas: Size, spacing: f64) -> Vec<Line> {
    if !spacing.is_finite() || spacing <= 0.0 {
        log::debug!("grid spacing {spacing} is unusable, drawing no grid");
        return Vec::new();
    }
    let mut lines = Vec::new();
    for x in steps(canvas.width, spacing) {
        lines.push(Line::new(Point::new(x, 0.0), Point::new(x, canvas.height)));
    }
    for y in steps(canvas.height, spacing) {
        lines.push(Line::new(Point::new(0.0, y), Point::new(canvas.width, y)));
    }
    lines
}

/// `0, spacing, 2 * spacing, ...` up to and including `extent`.
fn steps(extent: f64, spacing: f64) -> impl Iterator<Item = f64> {
    (0_u32..)
        .map(move |i| f64::from(i) * spacing)
        .take_while(move |&v| v <= extent)
}
