pub mod layout;
pub mod plot;
pub mod plot_shapes;
pub mod scale;
pub mod ticks;
pub mod transform;
pub mod types;

pub use layout::{category_centers, horizontal_bar_slots, vertical_bar_slots};
pub use plot::{
    DataBounds, Datum, Plot, PlotColor, PlotKind, PlottedShape, ReconcileStats, validate_series,
};
pub use scale::LinearScale;
pub use ticks::{
    DEFAULT_TICK_COUNT, Tick, TickLabel, TickPrecision, TickRequest, TickSet, format_number,
    tick_values, truncate_to_precision,
};
pub use transform::CoordinateTransform;
pub use types::{Axis, DataRange, PlotId, ViewportRect};
