// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and zoom state for the yard canvas.
//!
//! A [`Viewport`] maps canvas coordinates (the pixel space produced by the geo
//! transform) to screen coordinates: `screen = canvas * scale + offset`.

use kurbo::{Affine, Point, Size, Vec2};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.5;

/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 5.0;

/// Multiplier applied by [`Viewport::zoom_in`] and [`Viewport::zoom_out`].
pub const BUTTON_ZOOM_STEP: f64 = 1.2;

/// Multiplier applied per wheel notch by [`Viewport::wheel_zoom`].
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Uniform scale plus translation from canvas to screen space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Viewport {
    /// Current zoom factor, always within `[MIN_SCALE, MAX_SCALE]`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen position of the canvas origin.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Move the canvas origin to `offset`.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Shift the view by `delta` screen pixels, as a drag would.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom in one button step, clamped to [`MAX_SCALE`].
    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * BUTTON_ZOOM_STEP).min(MAX_SCALE);
    }

    /// Zoom out one button step, clamped to [`MIN_SCALE`].
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / BUTTON_ZOOM_STEP).max(MIN_SCALE);
    }

    /// Restore a scale of 1. The offset is left alone.
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// Zoom by one wheel notch, keeping the canvas point under `pointer` fixed.
    ///
    /// Positive `delta_y` (scrolling down) zooms out. A zero delta is a no-op.
    /// Steps that would leave `[MIN_SCALE, MAX_SCALE]` are refused and the viewport
    /// is unchanged.
    ///
    /// Returns `true` if the viewport changed.
    ///
    /// ```
    /// use kurbo::Point;
    /// use yardmap_view::Viewport;
    ///
    /// let mut view = Viewport::default();
    /// let pointer = Point::new(300.0, 200.0);
    /// let before = view.screen_to_canvas(pointer);
    /// assert!(view.wheel_zoom(pointer, -120.0));
    /// assert!((view.screen_to_canvas(pointer) - before).hypot() < 1e-9);
    /// ```
    pub fn wheel_zoom(&mut self, pointer: Point, delta_y: f64) -> bool {
        if delta_y == 0.0 || delta_y.is_nan() {
            return false;
        }
        let new_scale = if delta_y > 0.0 {
            self.scale / WHEEL_ZOOM_STEP
        } else {
            self.scale * WHEEL_ZOOM_STEP
        };
        if !(MIN_SCALE..=MAX_SCALE).contains(&new_scale) {
            log::debug!("wheel zoom to {new_scale} refused, staying at {}", self.scale);
            return false;
        }
        let anchor = self.screen_to_canvas(pointer);
        self.scale = new_scale;
        self.offset = pointer.to_vec2() - anchor.to_vec2() * new_scale;
        true
    }

    /// Pan so that `canvas_point` sits at the center of a stage of `stage_size`,
    /// keeping the current scale.
    pub fn center_on(&mut self, canvas_point: Point, stage_size: Size) {
        self.offset = -canvas_point.to_vec2() * self.scale + stage_size.to_vec2() * 0.5;
    }

    /// Canvas to screen transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Map a screen position (for example a pointer) onto the canvas.
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Map a canvas position onto the screen.
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        (canvas.to_vec2() * self.scale + self.offset).to_point()
    }
}
