// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yardmap View: the interactive surface of a container-yard map, minus the renderer.
//!
//! - [`Viewport`]: button and wheel zoom within `[0.5, 5]`, panning, and centering on a
//!   stack.
//! - [`MarkerStyle`]: marker footprints for stacks, and hit testing where the last drawn
//!   marker wins.
//! - [`Occupancy`]: the color tier of a stack.
//! - [`grid_lines`]: the reference grid.
//!
//! All geometry is expressed with Kurbo types. Canvas space is the pixel space of
//! `yardmap_geo`; screen space is canvas space after the [`Viewport`] transform.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use yardmap_stack::{Group, Rotation};
//! use yardmap_view::{MarkerStyle, Viewport};
//!
//! let stacks = [Group::<(), usize> {
//!     key: 0,
//!     members: Vec::new(),
//!     position: Point::new(600.0, 400.0),
//!     rotation: Rotation::Deg0,
//! }];
//!
//! let mut view = Viewport::default();
//! view.zoom_in();
//! view.center_on(stacks[0].position, Size::new(800.0, 600.0));
//!
//! // A click in the middle of the stage lands on the stack.
//! let click = view.screen_to_canvas(Point::new(400.0, 300.0));
//! assert_eq!(MarkerStyle::default().hit_test(&stacks, click), Some(0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use `std` for floating point math.
//! - `libm`: `no_std` floating point math through Kurbo's `libm` support.
//! - `serde` (default): (de)serialize [`MarkerStyle`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod grid;
pub mod marker;
pub mod viewport;

pub use grid::{DEFAULT_GRID_SPACING, grid_lines};
pub use marker::{DEFAULT_MARKER_SIZE, MarkerStyle, Occupancy};
pub use viewport::{BUTTON_ZOOM_STEP, MAX_SCALE, MIN_SCALE, Viewport, WHEEL_ZOOM_STEP};
