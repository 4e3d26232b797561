use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{CoordinateTransform, DataBounds, DataRange, TickRequest};
use crate::error::ChartResult;
use crate::render::RenderSurface;

use super::ViewportManager;

/// Partial range change; `None` bounds keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeUpdate {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl RangeUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn x(mut self, min: f64, max: f64) -> Self {
        self.x_min = Some(min);
        self.x_max = Some(max);
        self
    }

    #[must_use]
    pub fn y(mut self, min: f64, max: f64) -> Self {
        self.y_min = Some(min);
        self.y_max = Some(max);
        self
    }

    #[must_use]
    pub fn x_min(mut self, value: f64) -> Self {
        self.x_min = Some(value);
        self
    }

    #[must_use]
    pub fn x_max(mut self, value: f64) -> Self {
        self.x_max = Some(value);
        self
    }

    #[must_use]
    pub fn y_min(mut self, value: f64) -> Self {
        self.y_min = Some(value);
        self
    }

    #[must_use]
    pub fn y_max(mut self, value: f64) -> Self {
        self.y_max = Some(value);
        self
    }

    /// Update adopting a plot's bounding box on both axes.
    #[must_use]
    pub fn fit(bounds: DataBounds) -> Self {
        Self::new()
            .x(bounds.x.min, bounds.x.max)
            .y(bounds.y.min, bounds.y.max)
    }

    #[must_use]
    pub fn apply(self, x_range: DataRange, y_range: DataRange) -> (DataRange, DataRange) {
        (
            DataRange::new(
                self.x_min.unwrap_or(x_range.min),
                self.x_max.unwrap_or(x_range.max),
            ),
            DataRange::new(
                self.y_min.unwrap_or(y_range.min),
                self.y_max.unwrap_or(y_range.max),
            ),
        )
    }
}

impl<S: RenderSurface> ViewportManager<S> {
    /// Changes the visible data ranges, then redraws every plot and the
    /// default ticks.
    ///
    /// A result whose `max <= min` on either axis is rejected and nothing
    /// changes.
    pub fn set_ranges(&mut self, update: RangeUpdate) -> ChartResult<()> {
        let (x_range, y_range) = update.apply(self.x_range(), self.y_range());
        let transform = match CoordinateTransform::new(self.rect(), x_range, y_range) {
            Ok(transform) => transform,
            Err(err) => {
                warn!(error = %err, "rejecting range update");
                return Err(err);
            }
        };

        self.transform = transform;
        debug!(
            x_min = x_range.min,
            x_max = x_range.max,
            y_min = y_range.min,
            y_max = y_range.max,
            plots = self.plots.len(),
            "viewport ranges updated"
        );

        for plot in &mut self.plots {
            plot.redraw(&self.transform, &mut self.surface)?;
        }
        self.compute_ticks(TickRequest::default())?;
        Ok(())
    }
}
