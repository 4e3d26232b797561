use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::transform::CoordinateTransform;
use crate::core::types::DataRange;

/// Tick count used when neither labels nor positions are supplied for an axis.
pub const DEFAULT_TICK_COUNT: usize = 11;

/// Relative error, in ulps of the scaled value, treated as binary noise.
const TRUNCATION_SNAP_ULPS: f64 = 4.0;

/// Label attached to a tick; numbers are formatted with the axis precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickLabel {
    Number(f64),
    Text(String),
}

impl TickLabel {
    #[must_use]
    pub fn format(&self, precision: i32) -> String {
        match self {
            Self::Number(value) => format_number(*value, precision),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for TickLabel {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TickLabel {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for TickLabel {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TickLabel {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Decimal places kept per axis when formatting numeric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickPrecision {
    pub x: i32,
    pub y: i32,
}

impl Default for TickPrecision {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

/// Overrides for one tick pass. Every `None` list is synthesized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickRequest {
    pub x_positions: Option<Vec<f64>>,
    pub x_labels: Option<Vec<TickLabel>>,
    pub y_positions: Option<Vec<f64>>,
    pub y_labels: Option<Vec<TickLabel>>,
    pub precision: TickPrecision,
    pub offset_x: bool,
    pub offset_y: bool,
}

impl TickRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_positions(mut self, positions: Vec<f64>) -> Self {
        self.x_positions = Some(positions);
        self
    }

    #[must_use]
    pub fn with_x_labels<L: Into<TickLabel>>(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.x_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_y_positions(mut self, positions: Vec<f64>) -> Self {
        self.y_positions = Some(positions);
        self
    }

    #[must_use]
    pub fn with_y_labels<L: Into<TickLabel>>(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.y_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_precision(mut self, x: i32, y: i32) -> Self {
        self.precision = TickPrecision { x, y };
        self
    }

    /// Shifts default X ticks by half an interval so they sit mid-bucket.
    #[must_use]
    pub fn with_offset_x(mut self, offset: bool) -> Self {
        self.offset_x = offset;
        self
    }

    #[must_use]
    pub fn with_offset_y(mut self, offset: bool) -> Self {
        self.offset_y = offset;
        self
    }
}

/// One resolved tick: pixel position along its axis plus formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSet {
    pub x: Vec<Tick>,
    pub y: Vec<Tick>,
}

impl TickSet {
    /// Resolves a request against the current transform.
    ///
    /// Y ticks are listed top to bottom, so defaults read in descending data order.
    #[must_use]
    pub fn resolve(request: &TickRequest, transform: &CoordinateTransform) -> Self {
        let x_count = request
            .x_labels
            .as_ref()
            .map_or(DEFAULT_TICK_COUNT, Vec::len);
        let y_count = request
            .y_labels
            .as_ref()
            .map_or(DEFAULT_TICK_COUNT, Vec::len);

        let x_values = tick_values(transform.x_range(), x_count, request.offset_x);
        let mut y_values = tick_values(transform.y_range(), y_count, request.offset_y);
        y_values.reverse();

        let x_positions = request.x_positions.clone().unwrap_or_else(|| {
            x_values
                .iter()
                .map(|value| transform.x_to_pixel(*value))
                .collect()
        });
        let y_positions = request.y_positions.clone().unwrap_or_else(|| {
            y_values
                .iter()
                .map(|value| transform.y_to_pixel(*value))
                .collect()
        });
        let x_labels = request
            .x_labels
            .clone()
            .unwrap_or_else(|| x_values.into_iter().map(TickLabel::Number).collect());
        let y_labels = request
            .y_labels
            .clone()
            .unwrap_or_else(|| y_values.into_iter().map(TickLabel::Number).collect());

        Self {
            x: pair_ticks("x", &x_positions, &x_labels, request.precision.x),
            y: pair_ticks("y", &y_positions, &y_labels, request.precision.y),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len() + self.y.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }
}

fn pair_ticks(axis: &str, positions: &[f64], labels: &[TickLabel], precision: i32) -> Vec<Tick> {
    if positions.len() != labels.len() {
        warn!(
            axis,
            positions = positions.len(),
            labels = labels.len(),
            "tick positions and labels differ in length; pairing up to the shorter list"
        );
    }
    positions
        .iter()
        .zip(labels)
        .map(|(position, label)| Tick {
            position: *position,
            label: label.format(precision),
        })
        .collect()
}

/// Evenly spaced data values across `range`.
///
/// Without offset the `count` values include both ends; with offset they are
/// the centers of `count` equal buckets.
#[must_use]
pub fn tick_values(range: DataRange, count: usize, offset: bool) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let offset = if offset { 0.5 } else { 0.0 };
    let intervals = count as f64 - 2.0 * (0.5 - offset);
    if intervals <= 0.0 {
        return vec![range.min];
    }
    (0..count)
        .map(|i| range.min + (i as f64 + offset) * range.span() / intervals)
        .collect()
}

/// Floors `value` to `precision` decimal places.
///
/// A scaled value within a few ulps of the next step is treated as that step,
/// which absorbs representation error such as `0.29 * 100 = 28.999...`
/// without rounding genuine fractions like `2.9999999995` up.
#[must_use]
pub fn truncate_to_precision(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    let scaled = value * factor;
    let tolerance = scaled.abs() * f64::EPSILON * TRUNCATION_SNAP_ULPS;
    let floored = if (scaled.round() - scaled).abs() <= tolerance {
        scaled.round()
    } else {
        scaled.floor()
    };
    floored / factor
}

#[must_use]
pub fn format_number(value: f64, precision: i32) -> String {
    let truncated = truncate_to_precision(value, precision);
    if precision <= 0 {
        format!("{}", truncated.trunc() as i64)
    } else {
        format!("{truncated:.prec$}", prec = precision as usize)
    }
}
