use crate::core::layout::{horizontal_bar_thickness, vertical_bar_thickness};
use crate::core::plot::{Datum, PlotKind};
use crate::core::transform::CoordinateTransform;
use crate::render::{CirclePrimitive, Color, LinePrimitive, Shape};

pub const MARKER_RADIUS_PX: f64 = 5.0;
pub const MARKER_OPACITY: f64 = 0.4;
pub const LINE_STROKE_WIDTH_PX: f64 = 2.0;

/// Builds the drawable for one datum.
///
/// Bar datums carry their category position in pixels; only the value axis
/// goes through the transform. `count` is the series length and sizes bars.
#[must_use]
pub fn build_shape(
    kind: PlotKind,
    datum: Datum,
    transform: &CoordinateTransform,
    count: usize,
    color: Color,
) -> Shape {
    let rect = transform.rect();
    match (kind, datum) {
        (PlotKind::Scatter, Datum::Point { x, y }) => {
            let (center_x, center_y) = transform.to_pixel(x, y);
            Shape::Marker(CirclePrimitive::new(
                center_x,
                center_y,
                MARKER_RADIUS_PX,
                marker_fill(color),
            ))
        }
        (PlotKind::HorizontalBar, Datum::Point { x, y }) => Shape::Segment(LinePrimitive::new(
            rect.left,
            y,
            transform.x_to_pixel(x),
            y,
            horizontal_bar_thickness(rect, count),
            color,
        )),
        (PlotKind::VerticalBar, Datum::Point { x, y }) => Shape::Segment(LinePrimitive::new(
            x,
            rect.bottom,
            x,
            transform.y_to_pixel(y),
            vertical_bar_thickness(rect, count),
            color,
        )),
        (_, Datum::Segment { from, to }) => {
            let (x1, y1) = transform.to_pixel(from.0, from.1);
            let (x2, y2) = transform.to_pixel(to.0, to.1);
            Shape::Segment(LinePrimitive::new(x1, y1, x2, y2, LINE_STROKE_WIDTH_PX, color))
        }
        (PlotKind::Line, Datum::Point { x, y }) => {
            let (px, py) = transform.to_pixel(x, y);
            Shape::Segment(LinePrimitive::new(px, py, px, py, LINE_STROKE_WIDTH_PX, color))
        }
    }
}

/// Fill actually painted for `color` on a plot of `kind`.
#[must_use]
pub fn styled_color(kind: PlotKind, color: Color) -> Color {
    match kind {
        PlotKind::Scatter => marker_fill(color),
        PlotKind::Line | PlotKind::HorizontalBar | PlotKind::VerticalBar => color,
    }
}

fn marker_fill(color: Color) -> Color {
    color.with_alpha(color.alpha * MARKER_OPACITY)
}
