use serde::{Deserialize, Serialize};

use crate::core::{DataBounds, DataRange, PlotId, PlotKind, TickSet, ViewportRect};
use crate::error::{ChartError, ChartResult};
use crate::render::RenderSurface;

use super::{AxisLabels, ViewportManager};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub id: PlotId,
    pub kind: PlotKind,
    pub points: usize,
    pub shapes: usize,
    pub bounds: DataBounds,
    pub visible: bool,
}

/// Serializable view of a viewport's state for diagnostics and fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub rect: ViewportRect,
    pub x_range: DataRange,
    pub y_range: DataRange,
    pub labels: AxisLabels,
    pub plots: Vec<PlotSnapshot>,
    pub ticks: TickSet,
}

impl ViewportSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize viewport snapshot: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse viewport snapshot: {e}"))
        })
    }
}

impl<S: RenderSurface> ViewportManager<S> {
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            rect: self.rect(),
            x_range: self.x_range(),
            y_range: self.y_range(),
            labels: self.labels.clone(),
            plots: self
                .plots
                .iter()
                .map(|plot| PlotSnapshot {
                    id: plot.id(),
                    kind: plot.kind(),
                    points: plot.len(),
                    shapes: plot.shapes().len(),
                    bounds: plot.bounds(),
                    visible: plot.is_visible(),
                })
                .collect(),
            ticks: self.ticks.clone(),
        }
    }
}
