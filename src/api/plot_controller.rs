use tracing::{debug, warn};

use crate::core::{
    DataBounds, Plot, PlotColor, PlotId, PlotKind, ReconcileStats, horizontal_bar_slots,
    validate_series, vertical_bar_slots,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{GroupId, RenderSurface};

use super::{RangeUpdate, ViewportManager};

/// Per-plot creation options.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub color: PlotColor,
    /// Adopt the new plot's bounding box as the viewport ranges.
    pub resize_to_fit: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            color: PlotColor::default(),
            resize_to_fit: true,
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<PlotColor>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_resize_to_fit(mut self, resize_to_fit: bool) -> Self {
        self.resize_to_fit = resize_to_fit;
        self
    }
}

impl<S: RenderSurface> ViewportManager<S> {
    /// Creates, draws and takes ownership of a new plot.
    ///
    /// Rejected without side effects when the series differ in length, hold
    /// non-finite values, or when `resize_to_fit` would produce a degenerate
    /// range. A per-point color list of the wrong length falls back to black.
    pub fn create_plot(
        &mut self,
        x_data: Vec<f64>,
        y_data: Vec<f64>,
        kind: PlotKind,
        options: PlotOptions,
    ) -> ChartResult<PlotId> {
        if let Err(err) = validate_series(&x_data, &y_data) {
            warn!(error = %err, %kind, "data lists rejected; cannot plot");
            return Err(err);
        }
        let color = options.color.fitted_to(x_data.len());

        if options.resize_to_fit {
            self.set_ranges(RangeUpdate::fit(DataBounds::from_series(&x_data, &y_data)))?;
        }

        let id = PlotId::new(self.next_plot_id);
        let group = self.surface.create_group();
        let mut plot = Plot::new(id, kind, x_data, y_data, color, group);
        if let Err(err) = plot.render(&self.transform, &mut self.surface) {
            warn!(plot = %id, error = %err, "plot render failed; discarding its group");
            self.discard_group(group);
            return Err(err);
        }
        self.next_plot_id += 1;
        debug!(plot = %id, %kind, points = plot.len(), "plot created");
        self.plots.push(plot);
        self.restack_plots()?;
        Ok(id)
    }

    pub fn plot_points(
        &mut self,
        x_data: Vec<f64>,
        y_data: Vec<f64>,
        options: PlotOptions,
    ) -> ChartResult<PlotId> {
        self.create_plot(x_data, y_data, PlotKind::Scatter, options)
    }

    pub fn plot_lines(
        &mut self,
        x_data: Vec<f64>,
        y_data: Vec<f64>,
        options: PlotOptions,
    ) -> ChartResult<PlotId> {
        self.create_plot(x_data, y_data, PlotKind::Line, options)
    }

    /// Bars growing right from the left edge. Missing `y_positions` become
    /// evenly spaced pixel slots, top to bottom.
    pub fn plot_horizontal_bars(
        &mut self,
        x_data: Vec<f64>,
        y_positions: Option<Vec<f64>>,
        options: PlotOptions,
    ) -> ChartResult<PlotId> {
        let y_positions =
            y_positions.unwrap_or_else(|| horizontal_bar_slots(self.rect(), x_data.len()));
        self.create_plot(x_data, y_positions, PlotKind::HorizontalBar, options)
    }

    /// Bars growing up from the bottom edge. Missing `x_positions` become
    /// evenly spaced pixel slots, left to right.
    pub fn plot_vertical_bars(
        &mut self,
        y_data: Vec<f64>,
        x_positions: Option<Vec<f64>>,
        options: PlotOptions,
    ) -> ChartResult<PlotId> {
        let x_positions =
            x_positions.unwrap_or_else(|| vertical_bar_slots(self.rect(), y_data.len()));
        self.create_plot(x_positions, y_data, PlotKind::VerticalBar, options)
    }

    /// Replaces a plot's data, reusing its shapes by index.
    ///
    /// With `resize_to_fit` the viewport adopts the new bounding box first,
    /// which redraws every plot it owns, not only this one.
    pub fn update_plot_data(
        &mut self,
        id: PlotId,
        x_data: Option<Vec<f64>>,
        y_data: Option<Vec<f64>>,
        resize_to_fit: bool,
    ) -> ChartResult<ReconcileStats> {
        let index = self.owned_plot_index(id)?;
        let (x_data, y_data) = match self.plots[index].resolve_update(x_data, y_data, self.rect()) {
            Ok(series) => series,
            Err(err) => {
                warn!(plot = %id, error = %err, "plot data update rejected");
                return Err(err);
            }
        };

        if resize_to_fit {
            self.set_ranges(RangeUpdate::fit(DataBounds::from_series(&x_data, &y_data)))?;
        }

        self.plots[index].reconcile(x_data, y_data, &self.transform, &mut self.surface)
    }

    /// Assigns a new color and recolors every existing shape.
    pub fn update_plot_color(&mut self, id: PlotId, color: impl Into<PlotColor>) -> ChartResult<()> {
        let index = self.owned_plot_index(id)?;
        let plot = &mut self.plots[index];
        let color = color.into().fitted_to(plot.len());
        plot.apply_color(color, &mut self.surface)
    }

    /// Unlinks a plot and hides its shapes, handing the detached plot back.
    ///
    /// Removing a plot this viewport does not own changes nothing. A plot whose
    /// group cannot be hidden stays owned.
    pub fn remove_plot(&mut self, id: PlotId) -> ChartResult<Plot> {
        let index = self.owned_plot_index(id)?;
        self.plots[index].hide(&mut self.surface)?;
        let plot = self.plots.remove(index);
        debug!(plot = %id, remaining = self.plots.len(), "plot removed");
        Ok(plot)
    }

    fn owned_plot_index(&self, id: PlotId) -> ChartResult<usize> {
        self.plot_index(id).ok_or_else(|| {
            warn!(plot = %id, "plot does not exist");
            ChartError::UnknownPlot(id)
        })
    }

    /// Best-effort cleanup of a group whose plot never made it into the list.
    fn discard_group(&mut self, group: GroupId) {
        let cleared = self
            .surface
            .clear_group(group)
            .and_then(|()| self.surface.set_group_visible(group, false));
        if let Err(err) = cleared {
            warn!(%group, error = %err, "failed to discard plot group");
        }
    }

    /// Brings plot groups forward in list order, keeping decorations behind.
    fn restack_plots(&mut self) -> ChartResult<()> {
        for plot in &self.plots {
            self.surface.bring_to_front(plot.group())?;
        }
        Ok(())
    }
}
