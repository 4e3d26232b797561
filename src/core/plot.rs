use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::layout::{horizontal_bar_slots, vertical_bar_slots};
use crate::core::plot_shapes::{build_shape, styled_color};
use crate::core::transform::CoordinateTransform;
use crate::core::types::{DataRange, PlotId, ViewportRect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, GroupId, RenderSurface, Shape, ShapeId};

/// How a series is drawn. Fixed for the lifetime of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    Scatter,
    Line,
    HorizontalBar,
    VerticalBar,
}

impl PlotKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Line => "line",
            Self::HorizontalBar => "horizontal_bar",
            Self::VerticalBar => "vertical_bar",
        }
    }

    /// Datum stored for the point at `current`, given the point before it.
    #[must_use]
    pub fn datum(self, previous: (f64, f64), current: (f64, f64)) -> Datum {
        match self {
            Self::Line => Datum::Segment {
                from: previous,
                to: current,
            },
            Self::Scatter | Self::HorizontalBar | Self::VerticalBar => Datum::Point {
                x: current.0,
                y: current.1,
            },
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotKind {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "scatter" => Ok(Self::Scatter),
            "line" => Ok(Self::Line),
            "horizontal_bar" | "horiz bar" => Ok(Self::HorizontalBar),
            "vertical_bar" | "vert bar" => Ok(Self::VerticalBar),
            _ => {
                warn!(kind = input, "invalid plot type");
                Err(ChartError::UnknownPlotKind(input.to_owned()))
            }
        }
    }
}

/// One color for the whole series, or one color per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlotColor {
    Single(Color),
    PerPoint(Vec<Color>),
}

impl PlotColor {
    pub const DEFAULT: Color = Color::BLACK;

    /// Per-point lookup; indexes past a per-point list fall back to black.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        match self {
            Self::Single(color) => *color,
            Self::PerPoint(colors) => colors.get(index).copied().unwrap_or(Self::DEFAULT),
        }
    }

    /// Returns the color to store for a series of `len` points.
    ///
    /// A per-point list of the wrong length is replaced by the default color.
    #[must_use]
    pub fn fitted_to(self, len: usize) -> Self {
        match self {
            Self::PerPoint(colors) if colors.len() != len => {
                warn!(
                    colors = colors.len(),
                    points = len,
                    "color list and data were not the same length; using default color"
                );
                Self::Single(Self::DEFAULT)
            }
            other => other,
        }
    }
}

impl Default for PlotColor {
    fn default() -> Self {
        Self::Single(Self::DEFAULT)
    }
}

impl From<Color> for PlotColor {
    fn from(color: Color) -> Self {
        Self::Single(color)
    }
}

impl From<Vec<Color>> for PlotColor {
    fn from(colors: Vec<Color>) -> Self {
        Self::PerPoint(colors)
    }
}

/// Min/max box of a series. Empty series yield `(0, 1)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub x: DataRange,
    pub y: DataRange,
}

impl DataBounds {
    #[must_use]
    pub fn from_series(x_data: &[f64], y_data: &[f64]) -> Self {
        Self {
            x: DataRange::enclosing(x_data).unwrap_or_default(),
            y: DataRange::enclosing(y_data).unwrap_or_default(),
        }
    }
}

/// Data a shape was built from; what a range change re-projects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Datum {
    Point { x: f64, y: f64 },
    Segment { from: (f64, f64), to: (f64, f64) },
}

/// A rendered shape together with the datum it draws.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedShape {
    pub datum: Datum,
    pub shape: Shape,
    pub id: ShapeId,
}

/// Shape counts touched by one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub updated: usize,
    pub added: usize,
    pub removed: usize,
}

/// One data series and the shapes drawing it, index-aligned.
///
/// Shape `i` draws data point `i`; for lines it is the segment ending at `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    id: PlotId,
    kind: PlotKind,
    x_data: Vec<f64>,
    y_data: Vec<f64>,
    bounds: DataBounds,
    color: PlotColor,
    group: GroupId,
    shapes: Vec<PlottedShape>,
    visible: bool,
}

impl Plot {
    pub(crate) fn new(
        id: PlotId,
        kind: PlotKind,
        x_data: Vec<f64>,
        y_data: Vec<f64>,
        color: PlotColor,
        group: GroupId,
    ) -> Self {
        let bounds = DataBounds::from_series(&x_data, &y_data);
        Self {
            id,
            kind,
            x_data,
            y_data,
            bounds,
            color,
            group,
            shapes: Vec::new(),
            visible: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlotId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    #[must_use]
    pub fn x_data(&self) -> &[f64] {
        &self.x_data
    }

    #[must_use]
    pub fn y_data(&self) -> &[f64] {
        &self.y_data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_data.is_empty()
    }

    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        self.bounds
    }

    #[must_use]
    pub fn x_range(&self) -> DataRange {
        self.bounds.x
    }

    #[must_use]
    pub fn y_range(&self) -> DataRange {
        self.bounds.y
    }

    #[must_use]
    pub fn color(&self) -> &PlotColor {
        &self.color
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.color.color_at(index)
    }

    #[must_use]
    pub fn shapes(&self) -> &[PlottedShape] {
        &self.shapes
    }

    #[must_use]
    pub fn group(&self) -> GroupId {
        self.group
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Completes and validates replacement data without touching the plot.
    ///
    /// A missing category axis of a bar plot is synthesized as evenly spaced
    /// slots; any other missing axis keeps the current data.
    pub fn resolve_update(
        &self,
        new_x: Option<Vec<f64>>,
        new_y: Option<Vec<f64>>,
        rect: ViewportRect,
    ) -> ChartResult<(Vec<f64>, Vec<f64>)> {
        let (x_data, y_data) = match self.kind {
            PlotKind::VerticalBar => {
                let y_data = new_y.unwrap_or_else(|| self.y_data.clone());
                let x_data = new_x.unwrap_or_else(|| vertical_bar_slots(rect, y_data.len()));
                (x_data, y_data)
            }
            PlotKind::HorizontalBar => {
                let x_data = new_x.unwrap_or_else(|| self.x_data.clone());
                let y_data = new_y.unwrap_or_else(|| horizontal_bar_slots(rect, x_data.len()));
                (x_data, y_data)
            }
            PlotKind::Scatter | PlotKind::Line => (
                new_x.unwrap_or_else(|| self.x_data.clone()),
                new_y.unwrap_or_else(|| self.y_data.clone()),
            ),
        };

        validate_series(&x_data, &y_data)?;
        if x_data.is_empty() {
            return Err(ChartError::EmptyData);
        }
        Ok((x_data, y_data))
    }

    /// Draws every data point from scratch. Used once, right after creation.
    pub(crate) fn render<S: RenderSurface + ?Sized>(
        &mut self,
        transform: &CoordinateTransform,
        surface: &mut S,
    ) -> ChartResult<()> {
        for stale in self.shapes.drain(..) {
            surface.remove(stale.id)?;
        }

        let Some(mut previous) = self.point(0) else {
            return Ok(());
        };
        for index in 0..self.len() {
            let current = (self.x_data[index], self.y_data[index]);
            let plotted = self.draw_datapoint(index, previous, current, transform, surface)?;
            self.shapes.push(plotted);
            previous = current;
        }
        Ok(())
    }

    /// Re-projects every stored datum through `transform`; data and count stay.
    pub(crate) fn redraw<S: RenderSurface + ?Sized>(
        &mut self,
        transform: &CoordinateTransform,
        surface: &mut S,
    ) -> ChartResult<()> {
        let count = self.len();
        let kind = self.kind;
        let color = &self.color;
        for (index, plotted) in self.shapes.iter_mut().enumerate() {
            let shape = build_shape(kind, plotted.datum, transform, count, color.color_at(index));
            surface.update(plotted.id, shape.clone())?;
            plotted.shape = shape;
        }
        Ok(())
    }

    /// Replaces the series and updates shapes in place by index.
    ///
    /// Existing shapes keep their ids; missing ones are appended and surplus
    /// ones past the new length are removed. Callers validate the data with
    /// `resolve_update` first.
    pub(crate) fn reconcile<S: RenderSurface + ?Sized>(
        &mut self,
        x_data: Vec<f64>,
        y_data: Vec<f64>,
        transform: &CoordinateTransform,
        surface: &mut S,
    ) -> ChartResult<ReconcileStats> {
        self.x_data = x_data;
        self.y_data = y_data;
        self.refresh_bounds();

        let mut stats = ReconcileStats::default();
        let count = self.len();
        if let Some(mut previous) = self.point(0) {
            for index in 0..count {
                let current = (self.x_data[index], self.y_data[index]);
                if index < self.shapes.len() {
                    let datum = self.kind.datum(previous, current);
                    let shape =
                        build_shape(self.kind, datum, transform, count, self.color_at(index));
                    let plotted = &mut self.shapes[index];
                    surface.update(plotted.id, shape.clone())?;
                    plotted.datum = datum;
                    plotted.shape = shape;
                    stats.updated += 1;
                } else {
                    let plotted =
                        self.draw_datapoint(index, previous, current, transform, surface)?;
                    self.shapes.push(plotted);
                    stats.added += 1;
                }
                previous = current;
            }
        }

        for surplus in self.shapes.drain(count..) {
            surface.remove(surplus.id)?;
            stats.removed += 1;
        }

        trace!(
            plot = %self.id,
            updated = stats.updated,
            added = stats.added,
            removed = stats.removed,
            "reconciled plot shapes"
        );
        Ok(stats)
    }

    /// Stores `color` (already fitted to the series) and recolors every shape.
    pub(crate) fn apply_color<S: RenderSurface + ?Sized>(
        &mut self,
        color: PlotColor,
        surface: &mut S,
    ) -> ChartResult<()> {
        self.color = color;
        let kind = self.kind;
        for (index, plotted) in self.shapes.iter_mut().enumerate() {
            plotted
                .shape
                .set_color(styled_color(kind, self.color.color_at(index)));
            surface.update(plotted.id, plotted.shape.clone())?;
        }
        Ok(())
    }

    pub(crate) fn hide<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<()> {
        surface.set_group_visible(self.group, false)?;
        self.visible = false;
        Ok(())
    }

    fn refresh_bounds(&mut self) {
        self.bounds = DataBounds::from_series(&self.x_data, &self.y_data);
    }

    fn point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x_data.get(index)?, *self.y_data.get(index)?))
    }

    fn draw_datapoint<S: RenderSurface + ?Sized>(
        &self,
        index: usize,
        previous: (f64, f64),
        current: (f64, f64),
        transform: &CoordinateTransform,
        surface: &mut S,
    ) -> ChartResult<PlottedShape> {
        let datum = self.kind.datum(previous, current);
        let shape = build_shape(self.kind, datum, transform, self.len(), self.color_at(index));
        let id = surface.insert(self.group, shape.clone())?;
        Ok(PlottedShape { datum, shape, id })
    }
}

/// Checks that two axis series pair up and hold only finite values.
pub fn validate_series(x_data: &[f64], y_data: &[f64]) -> ChartResult<()> {
    if x_data.len() != y_data.len() {
        return Err(ChartError::LengthMismatch {
            x_len: x_data.len(),
            y_len: y_data.len(),
        });
    }
    if x_data.iter().chain(y_data).any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "data values must be finite".to_owned(),
        ));
    }
    Ok(())
}
