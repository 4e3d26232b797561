mod axis_decorations;
mod config;
mod coordinate_access;
mod manager;
mod manager_init;
mod plot_controller;
mod range_controller;
mod snapshot;
mod tick_controller;

pub use config::{AxisLabels, ViewportConfig};
pub use manager::ViewportManager;
pub use plot_controller::PlotOptions;
pub use range_controller::RangeUpdate;
pub use snapshot::{PlotSnapshot, ViewportSnapshot};
