use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space rectangle anchored at its bottom-left corner.
///
/// `bottom` is the larger pixel Y coordinate; the plotting area extends
/// `height` pixels upward from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    #[must_use]
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.bottom.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.bottom - self.height
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self::new(85.0, 345.0, 300.0, 300.0)
    }
}

/// Closed data-space interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl DataRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The fallback box used for empty series.
    #[must_use]
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// A range is usable for a transform only when it is finite, strictly
    /// increasing, and its span does not overflow.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.min.is_finite()
            || !self.max.is_finite()
            || self.max <= self.min
            || !self.span().is_finite()
    }

    pub fn validate(self, axis: Axis) -> ChartResult<()> {
        if self.is_degenerate() {
            return Err(ChartError::DegenerateRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Running min/max over `values`; `None` for an empty slice.
    #[must_use]
    pub fn enclosing(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let mut range = Self::new(*first, *first);
        for &value in rest {
            if value < range.min {
                range.min = value;
            }
            if value > range.max {
                range.max = value;
            }
        }
        Some(range)
    }
}

impl Default for DataRange {
    fn default() -> Self {
        Self::unit()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Caller-facing handle for a plot owned by a `ViewportManager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlotId(u64);

impl PlotId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
