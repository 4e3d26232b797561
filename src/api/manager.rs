use crate::core::{CoordinateTransform, DataRange, Plot, PlotId, TickSet, ViewportRect};
use crate::render::{GroupId, RenderSurface, ShapeId};

use super::AxisLabels;

/// Owns one viewport's geometry, data ranges, axis decorations and plots.
///
/// Plots are kept in insertion order, which is also their draw order. Every
/// range change funnels through `set_ranges` so all plots stay consistent with
/// the current transform.
pub struct ViewportManager<S: RenderSurface> {
    pub(super) surface: S,
    pub(super) transform: CoordinateTransform,
    pub(super) plots: Vec<Plot>,
    pub(super) next_plot_id: u64,
    pub(super) axis_group: GroupId,
    pub(super) tick_group: GroupId,
    pub(super) labels: AxisLabels,
    pub(super) label_shapes: Vec<ShapeId>,
    pub(super) ticks: TickSet,
}

impl<S: RenderSurface> ViewportManager<S> {
    #[must_use]
    pub fn rect(&self) -> ViewportRect {
        self.transform.rect()
    }

    #[must_use]
    pub fn x_range(&self) -> DataRange {
        self.transform.x_range()
    }

    #[must_use]
    pub fn y_range(&self) -> DataRange {
        self.transform.y_range()
    }

    #[must_use]
    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Owned plots in draw order, back to front.
    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    #[must_use]
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    #[must_use]
    pub fn plot(&self, id: PlotId) -> Option<&Plot> {
        self.plots.iter().find(|plot| plot.id() == id)
    }

    #[must_use]
    pub fn contains_plot(&self, id: PlotId) -> bool {
        self.plot(id).is_some()
    }

    /// Tick set drawn by the most recent tick pass.
    #[must_use]
    pub fn ticks(&self) -> &TickSet {
        &self.ticks
    }

    #[must_use]
    pub fn axis_labels(&self) -> &AxisLabels {
        &self.labels
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub(super) fn plot_index(&self, id: PlotId) -> Option<usize> {
        self.plots.iter().position(|plot| plot.id() == id)
    }
}
