use thiserror::Error;

use crate::core::{Axis, PlotId};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport geometry: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("data lists differ in length: x={x_len}, y={y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("data series must not be empty")]
    EmptyData,

    #[error("degenerate {axis} range: min={min}, max={max}")]
    DegenerateRange { axis: Axis, min: f64, max: f64 },

    #[error("plot {0} is not owned by this viewport")]
    UnknownPlot(PlotId),

    #[error("unknown plot kind `{0}`")]
    UnknownPlotKind(String),

    #[error("unknown render node: {0}")]
    UnknownNode(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
