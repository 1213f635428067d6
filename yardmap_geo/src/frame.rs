// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference frames: a validated GPS ⇄ canvas mapping plus an optional yard boundary.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Shape, Size};

use crate::containment::{Polygon, is_inside};
use crate::error::FrameError;
use crate::transform::GeoTransform;
use crate::types::{GeoBounds, GeoPoint};

/// The mapping domain for a yard: bounding box, canvas extent, and boundary.
///
/// A frame is always valid once constructed. Degenerate configurations are
/// rejected by [`ReferenceFrame::new`] (or by deserialization, which goes through
/// [`FrameConfig`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FrameConfig", into = "FrameConfig")
)]
pub struct ReferenceFrame {
    transform: GeoTransform,
    boundary: Option<Polygon>,
}

impl ReferenceFrame {
    /// Create a frame without a boundary polygon.
    ///
    /// # Errors
    ///
    /// See [`GeoTransform::new`].
    pub fn new(
        top_left: GeoPoint,
        bottom_right: GeoPoint,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<Self, FrameError> {
        let transform = GeoTransform::new(
            top_left,
            bottom_right,
            Size::new(canvas_width, canvas_height),
        )?;
        Ok(Self {
            transform,
            boundary: None,
        })
    }

    /// Replace the boundary polygon.
    ///
    /// Fewer than three points is treated as "no polygon": the frame falls back to
    /// its bounding box for containment.
    pub fn with_polygon(mut self, points: impl Into<Vec<GeoPoint>>) -> Self {
        let points = points.into();
        let count = points.len();
        self.boundary = Polygon::new(points);
        if self.boundary.is_none() && count > 0 {
            log::debug!("discarding {count}-point yard polygon; using bounding box");
        }
        self
    }

    /// The GPS ⇄ pixel mapping.
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// Boundary polygon, if one with at least three points was supplied.
    pub fn boundary(&self) -> Option<&Polygon> {
        self.boundary.as_ref()
    }

    /// Order-normalized bounding box.
    pub fn bounds(&self) -> GeoBounds {
        self.transform.bounds()
    }

    /// Canvas extent in pixels.
    pub fn canvas_size(&self) -> Size {
        self.transform.canvas_size()
    }

    /// See [`GeoTransform::to_pixel`].
    pub fn to_pixel(&self, p: GeoPoint) -> Point {
        self.transform.to_pixel(p)
    }

    /// See [`GeoTransform::to_geo`].
    pub fn to_geo(&self, px: Point) -> GeoPoint {
        self.transform.to_geo(px)
    }

    /// Whether `p` lies within the yard boundary. See [`is_inside`].
    pub fn contains(&self, p: GeoPoint) -> bool {
        is_inside(p, self)
    }

    /// Yard boundary in pixel space.
    ///
    /// The projected polygon when present, otherwise the canvas rectangle.
    pub fn outline(&self) -> BezPath {
        match &self.boundary {
            Some(polygon) => project_ring(&self.transform, polygon.points()),
            None => Rect::from_origin_size(Point::ORIGIN, self.canvas_size()).to_path(0.1),
        }
    }
}

/// Project a closed GPS ring into a closed pixel path.
pub(crate) fn project_ring(transform: &GeoTransform, ring: &[GeoPoint]) -> BezPath {
    let mut path = BezPath::new();
    let mut points = ring.iter().map(|&p| transform.to_pixel(p));
    if let Some(first) = points.next() {
        path.move_to(first);
        for p in points {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

/// Serializable yard configuration.
///
/// This is the on-disk shape of a [`ReferenceFrame`]. Converting it validates the
/// mapping.
///
/// ```
/// use yardmap_geo::{FrameConfig, GeoPoint, ReferenceFrame};
///
/// let config = FrameConfig {
///     top_left: GeoPoint::new(-6.2000, 106.8000),
///     bottom_right: GeoPoint::new(-6.2100, 106.8100),
///     canvas_width: 1200.0,
///     canvas_height: 800.0,
///     polygon_points: Vec::new(),
/// };
/// let frame = ReferenceFrame::try_from(config).unwrap();
/// assert!(frame.contains(GeoPoint::new(-6.2050, 106.8050)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FrameConfig {
    /// Corner mapped to pixel `(0, 0)`.
    pub top_left: GeoPoint,
    /// Corner mapped to pixel `(canvas_width, canvas_height)`.
    pub bottom_right: GeoPoint,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// Optional boundary ring; fewer than three points means none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub polygon_points: Vec<GeoPoint>,
}

impl TryFrom<FrameConfig> for ReferenceFrame {
    type Error = FrameError;

    fn try_from(config: FrameConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(
            config.top_left,
            config.bottom_right,
            config.canvas_width,
            config.canvas_height,
        )?
        .with_polygon(config.polygon_points))
    }
}

impl From<ReferenceFrame> for FrameConfig {
    fn from(frame: ReferenceFrame) -> Self {
        let canvas = frame.canvas_size();
        Self {
            top_left: frame.transform.top_left(),
            bottom_right: frame.transform.bottom_right(),
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            polygon_points: frame
                .boundary
                .map(|p| p.points().to_vec())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::PathEl;

    fn notched_yard() -> ReferenceFrame {
        ReferenceFrame::new(
            GeoPoint::new(-6.2000, 106.8000),
            GeoPoint::new(-6.2100, 106.8100),
            1200.0,
            800.0,
        )
        .unwrap()
        .with_polygon(vec![
            GeoPoint::new(-6.2000, 106.8000),
            GeoPoint::new(-6.2000, 106.8040),
            GeoPoint::new(-6.2010, 106.8040),
            GeoPoint::new(-6.2010, 106.8060),
            GeoPoint::new(-6.2000, 106.8060),
            GeoPoint::new(-6.2000, 106.8100),
            GeoPoint::new(-6.2100, 106.8100),
            GeoPoint::new(-6.2100, 106.8000),
        ])
    }

    #[test]
    fn short_polygon_falls_back_to_bounds() {
        let pt = GeoPoint::new;
        let frame = ReferenceFrame::new(pt(0.0, 0.0), pt(10.0, 10.0), 100.0, 100.0)
            .unwrap()
            .with_polygon(vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)]);
        assert!(frame.boundary().is_none());
        assert!(frame.contains(GeoPoint::new(5.0, 5.0)));
    }

    #[test]
    fn degenerate_frame_fails_fast() {
        let pt = GeoPoint::new;
        let err = ReferenceFrame::new(pt(0.0, 0.0), pt(0.0, 10.0), 100.0, 100.0);
        assert_eq!(err, Err(FrameError::ZeroLatitudeSpan));
    }

    #[test]
    fn outline_follows_polygon() {
        let frame = notched_yard();
        let path = frame.outline();
        let elements = path.elements();
        // move + 7 lines + close
        assert_eq!(elements.len(), 9);
        assert!(matches!(elements[0], PathEl::MoveTo(p) if p.x.abs() < 1e-6 && p.y.abs() < 1e-6));
        assert!(matches!(elements[8], PathEl::ClosePath));
        let notch = frame.to_pixel(GeoPoint::new(-6.2010, 106.8040));
        assert!((notch.x - 480.0).abs() < 1e-6 && (notch.y - 80.0).abs() < 1e-6);
    }

    #[test]
    fn outline_without_polygon_is_canvas() {
        let pt = GeoPoint::new;
        let frame = ReferenceFrame::new(pt(0.0, 0.0), pt(10.0, 10.0), 300.0, 200.0).unwrap();
        let bbox = frame.outline().bounding_box();
        assert_eq!(bbox, Rect::new(0.0, 0.0, 300.0, 200.0));
    }

    #[test]
    fn config_round_trip_preserves_frame() {
        let frame = notched_yard();
        let config = FrameConfig::from(frame.clone());
        assert_eq!(config.polygon_points.len(), 8);
        assert_eq!(ReferenceFrame::try_from(config), Ok(frame));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_validates() {
        let json = r#"{
            "topLeft": { "latitude": -6.2, "longitude": 106.8 },
            "bottomRight": { "latitude": -6.21, "longitude": 106.81 },
            "canvasWidth": 1200,
            "canvasHeight": 800
        }"#;
        let frame: ReferenceFrame = serde_json::from_str(json).unwrap();
        assert!(frame.boundary().is_none());
        assert_eq!(frame.canvas_size(), Size::new(1200.0, 800.0));

        let degenerate = r#"{
            "topLeft": { "latitude": -6.2, "longitude": 106.8 },
            "bottomRight": { "latitude": -6.21, "longitude": 106.8 },
            "canvasWidth": 1200,
            "canvasHeight": 800
        }"#;
        let err = serde_json::from_str::<ReferenceFrame>(degenerate).unwrap_err();
        assert!(err.to_string().contains("zero longitude span"), "{err}");
    }
}
