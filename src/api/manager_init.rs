use tracing::debug;

use crate::core::{CoordinateTransform, TickRequest, TickSet};
use crate::error::ChartResult;
use crate::render::RenderSurface;

use super::{ViewportConfig, ViewportManager};

impl<S: RenderSurface> ViewportManager<S> {
    /// Creates a viewport drawing into `surface`.
    ///
    /// Axis decorations and ticks get their groups before any plot exists,
    /// so every plot is drawn in front of them.
    pub fn new(mut surface: S, config: ViewportConfig) -> ChartResult<Self> {
        config.validate()?;
        let transform = CoordinateTransform::new(config.rect, config.x_range, config.y_range)?;

        let axis_group = surface.create_group();
        let tick_group = surface.create_group();

        let mut manager = Self {
            surface,
            transform,
            plots: Vec::new(),
            next_plot_id: 0,
            axis_group,
            tick_group,
            labels: config.labels.clone(),
            label_shapes: Vec::new(),
            ticks: TickSet::default(),
        };
        manager.draw_axes()?;
        manager.draw_axis_labels(config.labels)?;
        manager.compute_ticks(TickRequest::default())?;

        debug!(
            left = config.rect.left,
            bottom = config.rect.bottom,
            width = config.rect.width,
            height = config.rect.height,
            "viewport created"
        );
        Ok(manager)
    }
}
