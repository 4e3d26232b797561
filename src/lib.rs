//! plotkit: a small retained-mode 2D charting engine.
//!
//! A [`ViewportManager`] maps data space onto a fixed pixel rectangle, draws
//! axis ticks and owns any number of plots (scatter, line, horizontal and
//! vertical bars). Plots keep their shapes index-aligned with their data, so
//! updating a series every frame only touches what changed.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotOptions, RangeUpdate, ViewportConfig, ViewportManager};
pub use error::{ChartError, ChartResult};
