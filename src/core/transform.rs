//! Data-space to pixel-space mapping for one viewport.
//!
//! ```text
//! pixel_x = left   + (x - x_min) * width  / (x_max - x_min)
//! pixel_y = bottom - (y - y_min) * height / (y_max - y_min)
//! ```
//!
//! Construction fails for degenerate ranges, so every live transform maps
//! finite inputs to finite outputs.

use crate::core::scale::LinearScale;
use crate::core::types::{Axis, DataRange, ViewportRect};
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    rect: ViewportRect,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl CoordinateTransform {
    pub fn new(rect: ViewportRect, x_range: DataRange, y_range: DataRange) -> ChartResult<Self> {
        rect.validate()?;
        let x_scale = LinearScale::new(x_range, rect.left, rect.width, Axis::X)?;
        let y_scale = LinearScale::new(y_range, rect.bottom, -rect.height, Axis::Y)?;
        Ok(Self {
            rect,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn rect(&self) -> ViewportRect {
        self.rect
    }

    #[must_use]
    pub fn x_range(&self) -> DataRange {
        self.x_scale.domain()
    }

    #[must_use]
    pub fn y_range(&self) -> DataRange {
        self.y_scale.domain()
    }

    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_to_pixel(x), self.y_to_pixel(y))
    }

    #[must_use]
    pub fn to_data(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        (
            self.x_scale.pixel_to_domain(pixel_x),
            self.y_scale.pixel_to_domain(pixel_y),
        )
    }

    #[must_use]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        self.x_scale.domain_to_pixel(x)
    }

    #[must_use]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        self.y_scale.domain_to_pixel(y)
    }
}
