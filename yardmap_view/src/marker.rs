// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container marker geometry and picking.
//!
//! A marker is a rectangle centered on its group's canvas position and rotated by
//! the group's [`Rotation`]. Markers are drawn in group order, so later markers
//! cover earlier ones.

use kurbo::{Affine, Point, Rect, Size};
use yardmap_stack::{Group, Rotation};

/// Size of a container marker on the canvas, in pixels.
pub const DEFAULT_MARKER_SIZE: Size = Size::new(60.0, 24.0);

/// Marker shape shared by every group on the map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerStyle {
    /// Unrotated width and height.
    pub size: Size,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_MARKER_SIZE,
        }
    }
}

impl MarkerStyle {
    /// The marker rectangle in its own coordinate space, centered on the origin.
    pub fn local_rect(&self) -> Rect {
        Rect::from_center_size(Point::ORIGIN, self.size)
    }

    /// Marker-local to canvas transform for a marker at `position`.
    pub fn footprint(&self, position: Point, rotation: Rotation) -> Affine {
        Affine::translate(position.to_vec2()) * Affine::rotate(rotation.radians())
    }

    /// Axis-aligned canvas bounds of a marker. Conservative for rotated markers.
    pub fn bounds(&self, position: Point, rotation: Rotation) -> Rect {
        self.footprint(position, rotation)
            .transform_rect_bbox(self.local_rect())
    }

    /// Whether the marker at `position` covers the canvas point `pt`.
    pub fn contains(&self, position: Point, rotation: Rotation, pt: Point) -> bool {
        let local = self.footprint(position, rotation).inverse() * pt;
        self.local_rect().contains(local)
    }

    /// Index of the topmost group whose marker covers the canvas point `pt`.
    ///
    /// When markers overlap, the one drawn last (highest index) wins.
    ///
    /// ```
    /// use kurbo::Point;
    /// use yardmap_stack::{Group, Rotation};
    /// use yardmap_view::MarkerStyle;
    ///
    /// let at = |x: f64, rotation| Group::<(), usize> {
    ///     key: 0,
    ///     members: Vec::new(),
    ///     position: Point::new(x, 100.0),
    ///     rotation,
    /// };
    /// let groups = [at(100.0, Rotation::Deg0), at(120.0, Rotation::Deg90)];
    ///
    /// let style = MarkerStyle::default();
    /// assert_eq!(style.hit_test(&groups, Point::new(115.0, 100.0)), Some(1));
    /// assert_eq!(style.hit_test(&groups, Point::new(75.0, 100.0)), Some(0));
    /// assert_eq!(style.hit_test(&groups, Point::new(120.0, 140.0)), None);
    /// ```
    pub fn hit_test<P, K>(&self, groups: &[Group<P, K>], pt: Point) -> Option<usize> {
        groups
            .iter()
            .rposition(|g| self.contains(g.position, g.rotation, pt))
    }
}

/// How full a stack is, used to pick its marker color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Occupancy {
    /// No containers.
    Empty,
    /// One container.
    One,
    /// Two containers.
    Two,
    /// Three containers.
    Three,
    /// Four or more containers.
    Full,
}

impl Occupancy {
    /// Occupancy tier for a stack of `count` containers.
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            _ => Self::Full,
        }
    }

    /// Occupancy tier of a group.
    pub fn of<P, K>(group: &Group<P, K>) -> Self {
        Self::from_count(group.len())
    }

    /// Fill color as `[r, g, b]`.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Empty => [0x9e, 0x9e, 0x9e],
            Self::One => [0xae, 0xd5, 0x81],
            Self::Two => [0x66, 0xbb, 0x6a],
            Self::Three => [0x26, 0xa6, 0x9a],
            Self::Full => [0x42, 0xa5, 0xf5],
        }
    }

    /// Whether the marker shows a count badge and drop shadow.
    pub const fn is_stacked(self) -> bool {
        !matches!(self, Self::Empty | Self::One)
    }
}
