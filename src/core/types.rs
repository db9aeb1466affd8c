use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};

/// Logical width used when the host reports a zero-width surface.
pub const DEFAULT_LOGICAL_WIDTH: u32 = 600;
/// Lower bound for the logical chart height.
pub const MIN_LOGICAL_HEIGHT: u32 = 220;
/// Logical height as a fraction of logical width.
pub const HEIGHT_TO_WIDTH_RATIO: f64 = 0.52;

/// Drawing-surface size in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> ProjectionResult<Self> {
        if !self.is_valid() {
            return Err(ProjectionError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Logical viewport plus the backing-store resolution used to draw it.
///
/// Layout math always runs in logical pixels; backends scale by
/// `pixel_ratio` so strokes stay crisp on dense displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub logical: Viewport,
    pub pixel_ratio: u32,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceLayout {
    pub fn new(logical: Viewport, pixel_ratio: u32) -> ProjectionResult<Self> {
        let logical = logical.ensure_valid()?;
        let pixel_ratio = pixel_ratio.max(1);
        Ok(Self {
            logical,
            pixel_ratio,
            backing_width: logical.width.saturating_mul(pixel_ratio),
            backing_height: logical.height.saturating_mul(pixel_ratio),
        })
    }

    /// Derives the chart surface from the host element width.
    ///
    /// Height follows the width (`max(220, round(width * 0.52))`) and the
    /// device pixel ratio is floored to a whole number no smaller than 1.
    #[must_use]
    pub fn for_host_width(css_width: u32, device_pixel_ratio: f64) -> Self {
        let width = if css_width == 0 {
            DEFAULT_LOGICAL_WIDTH
        } else {
            css_width
        };
        let height = ((f64::from(width) * HEIGHT_TO_WIDTH_RATIO).round() as u32)
            .max(MIN_LOGICAL_HEIGHT);
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio >= 1.0 {
            device_pixel_ratio.floor() as u32
        } else {
            1
        };

        Self {
            logical: Viewport::new(width, height),
            pixel_ratio,
            backing_width: width.saturating_mul(pixel_ratio),
            backing_height: height.saturating_mul(pixel_ratio),
        }
    }

    #[must_use]
    pub fn scale_factor(self) -> f64 {
        f64::from(self.pixel_ratio)
    }
}
