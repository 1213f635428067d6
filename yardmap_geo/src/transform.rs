// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear GPS ⇄ pixel mapping and great-circle distance.
//!
//! The mapping interpolates longitude onto the canvas x axis and latitude onto the
//! y axis. It does not clamp: coordinates outside the geographic box land outside
//! the canvas, possibly at negative pixels.

use kurbo::{Affine, Point, Size};
use num_traits::Float;

use crate::error::FrameError;
use crate::types::{GeoBounds, GeoPoint};

/// Mean Earth radius used by [`distance_meters`], in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Validated linear map between a geographic box and a pixel canvas.
///
/// `top_left` maps to pixel `(0, 0)` and `bottom_right` to `(width, height)`.
/// Either corner may hold the larger latitude; the only requirement is that the
/// spans on both axes are non-zero, which [`GeoTransform::new`] checks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoTransform {
    top_left: GeoPoint,
    bottom_right: GeoPoint,
    lon_span: f64,
    lat_span: f64,
    canvas: Size,
}

impl GeoTransform {
    /// Build a transform, rejecting degenerate frames.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if any input is non-finite, if either span is zero,
    /// or if the canvas has no positive extent.
    pub fn new(
        top_left: GeoPoint,
        bottom_right: GeoPoint,
        canvas: Size,
    ) -> Result<Self, FrameError> {
        if !top_left.is_finite()
            || !bottom_right.is_finite()
            || !canvas.width.is_finite()
            || !canvas.height.is_finite()
        {
            return Err(FrameError::NonFinite);
        }
        let lon_span = bottom_right.longitude - top_left.longitude;
        let lat_span = bottom_right.latitude - top_left.latitude;
        if !lon_span.is_finite() || !lat_span.is_finite() {
            return Err(FrameError::NonFinite);
        }
        if lon_span == 0.0 {
            return Err(FrameError::ZeroLongitudeSpan);
        }
        if lat_span == 0.0 {
            return Err(FrameError::ZeroLatitudeSpan);
        }
        if canvas.width <= 0.0 || canvas.height <= 0.0 {
            return Err(FrameError::EmptyCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
            lon_span,
            lat_span,
            canvas,
        })
    }

    /// Corner mapped to pixel `(0, 0)`.
    pub fn top_left(&self) -> GeoPoint {
        self.top_left
    }

    /// Corner mapped to pixel `(width, height)`.
    pub fn bottom_right(&self) -> GeoPoint {
        self.bottom_right
    }

    /// Canvas extent in pixels.
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Order-normalized geographic box covered by the canvas.
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::from_corners(self.top_left, self.bottom_right)
    }

    /// Project a geographic point onto the canvas.
    pub fn to_pixel(&self, p: GeoPoint) -> Point {
        let nx = (p.longitude - self.top_left.longitude) / self.lon_span;
        let ny = (p.latitude - self.top_left.latitude) / self.lat_span;
        Point::new(nx * self.canvas.width, ny * self.canvas.height)
    }

    /// Inverse of [`to_pixel`](Self::to_pixel).
    pub fn to_geo(&self, px: Point) -> GeoPoint {
        GeoPoint::new(
            self.top_left.latitude + (px.y / self.canvas.height) * self.lat_span,
            self.top_left.longitude + (px.x / self.canvas.width) * self.lon_span,
        )
    }

    /// The same mapping as an affine transform from `(longitude, latitude)` points.
    ///
    /// Useful for projecting whole paths at once:
    ///
    /// ```
    /// use kurbo::{Point, Size};
    /// use yardmap_geo::{GeoPoint, GeoTransform};
    ///
    /// let t = GeoTransform::new(
    ///     GeoPoint::new(10.0, 0.0),
    ///     GeoPoint::new(0.0, 20.0),
    ///     Size::new(200.0, 100.0),
    /// )
    /// .unwrap();
    /// let p = t.affine() * Point::new(5.0, 5.0);
    /// assert!((p - t.to_pixel(GeoPoint::new(5.0, 5.0))).hypot() < 1e-9);
    /// ```
    pub fn affine(&self) -> Affine {
        let sx = self.canvas.width / self.lon_span;
        let sy = self.canvas.height / self.lat_span;
        Affine::new([
            sx,
            0.0,
            0.0,
            sy,
            -self.top_left.longitude * sx,
            -self.top_left.latitude * sy,
        ])
    }
}

/// Haversine great-circle distance between two points, in meters.
///
/// Uses a spherical Earth of radius [`EARTH_RADIUS_METERS`]. Symmetric in its
/// arguments and zero for identical points.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let sin_phi = Float::sin(d_phi * 0.5);
    let sin_lambda = Float::sin(d_lambda * 0.5);
    let h = sin_phi * sin_phi + Float::cos(phi1) * Float::cos(phi2) * sin_lambda * sin_lambda;
    let c = 2.0 * Float::atan2(Float::sqrt(h), Float::sqrt(1.0 - h));
    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yard() -> GeoTransform {
        GeoTransform::new(
            GeoPoint::new(-6.2000, 106.8000),
            GeoPoint::new(-6.2100, 106.8100),
            Size::new(1200.0, 800.0),
        )
        .unwrap()
    }

    fn rel_close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn corners_map_to_canvas_corners() {
        let t = yard();
        let tl = t.to_pixel(t.top_left());
        let br = t.to_pixel(t.bottom_right());
        assert!(tl.x.abs() < 1e-9 && tl.y.abs() < 1e-9);
        assert!((br.x - 1200.0).abs() < 1e-6 && (br.y - 800.0).abs() < 1e-6);
    }

    #[test]
    fn inverted_latitude_axis_grows_downward() {
        let t = yard();
        let upper = t.to_pixel(GeoPoint::new(-6.2010, 106.8050));
        let lower = t.to_pixel(GeoPoint::new(-6.2090, 106.8050));
        assert!(lower.y > upper.y, "south should be further down the canvas");
        assert!((upper.x - 600.0).abs() < 1e-6);
    }

    #[test]
    fn round_trip_inside_bounds() {
        let t = yard();
        for i in 0..=10 {
            for j in 0..=10 {
                let p = GeoPoint::new(
                    -6.2000 - 0.001 * f64::from(i),
                    106.8000 + 0.001 * f64::from(j),
                );
                let back = t.to_geo(t.to_pixel(p));
                assert!(rel_close(back.latitude, p.latitude), "{p:?} -> {back:?}");
                assert!(rel_close(back.longitude, p.longitude), "{p:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn outside_points_are_not_clamped() {
        let t = yard();
        let px = t.to_pixel(GeoPoint::new(-6.1990, 106.7990));
        assert!(px.x < 0.0 && px.y < 0.0, "expected negative pixel, got {px:?}");
        let far = t.to_pixel(GeoPoint::new(-6.2200, 106.8200));
        assert!(far.x > 1200.0 && far.y > 800.0, "expected overflow, got {far:?}");
    }

    #[test]
    fn degenerate_frames_are_rejected() {
        let size = Size::new(100.0, 100.0);
        let a = GeoPoint::new(1.0, 1.0);
        assert_eq!(
            GeoTransform::new(a, GeoPoint::new(2.0, 1.0), size),
            Err(FrameError::ZeroLongitudeSpan)
        );
        assert_eq!(
            GeoTransform::new(a, GeoPoint::new(1.0, 2.0), size),
            Err(FrameError::ZeroLatitudeSpan)
        );
        assert_eq!(
            GeoTransform::new(a, GeoPoint::new(2.0, 2.0), Size::new(0.0, 10.0)),
            Err(FrameError::EmptyCanvas {
                width: 0.0,
                height: 10.0
            })
        );
        assert_eq!(
            GeoTransform::new(a, GeoPoint::new(f64::NAN, 2.0), size),
            Err(FrameError::NonFinite)
        );
        assert_eq!(
            GeoTransform::new(a, GeoPoint::new(2.0, 2.0), Size::new(f64::INFINITY, 1.0)),
            Err(FrameError::NonFinite)
        );
    }

    #[test]
    fn affine_agrees_with_to_pixel() {
        let t = yard();
        let p = GeoPoint::new(-6.2042, 106.8077);
        let via_affine = t.affine() * Point::new(p.longitude, p.latitude);
        let direct = t.to_pixel(p);
        assert!((via_affine - direct).hypot() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        let a = GeoPoint::new(-6.2013, 106.8021);
        let b = GeoPoint::new(-6.2087, 106.8093);
        assert_eq!(distance_meters(a, b), distance_meters(b, a));
        assert_eq!(distance_meters(a, a), 0.0);
        assert!(distance_meters(a, b) > 0.0);
    }

    #[test]
    fn distance_matches_reference_values() {
        let one_degree = distance_meters(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((one_degree - 111_195.0).abs() < 0.01 * 111_195.0, "{one_degree}");

        let hundredth = distance_meters(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.01, 0.0));
        assert!((hundredth - 1_112.0).abs() < 0.01 * 1_112.0, "{hundredth}");

        // Method form delegates to the same formula.
        let a = GeoPoint::new(0.0, 0.0);
        assert_eq!(a.distance_meters(GeoPoint::new(0.0, 1.0)), one_degree);
    }
}
