// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors for reference frames.

/// A reference frame that cannot map between GPS and pixel space.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// Both corners share a longitude, so the x axis has no extent.
    #[error("reference frame has zero longitude span")]
    ZeroLongitudeSpan,
    /// Both corners share a latitude, so the y axis has no extent.
    #[error("reference frame has zero latitude span")]
    ZeroLatitudeSpan,
    /// Canvas width or height is not positive.
    #[error("canvas must have positive extent, got {width}x{height}")]
    EmptyCanvas {
        /// Requested canvas width in pixels.
        width: f64,
        /// Requested canvas height in pixels.
        height: f64,
    },
    /// A corner coordinate or canvas extent is NaN or infinite.
    #[error("reference frame contains a non-finite value")]
    NonFinite,
}
