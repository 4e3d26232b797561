use serde::{Deserialize, Serialize};

use crate::core::{Axis, DataRange, ViewportRect};
use crate::error::{ChartError, ChartResult};

/// Title and axis captions drawn around the plotting area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl AxisLabels {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

/// Public viewport bootstrap configuration.
///
/// Serializable so host applications can persist and load a chart setup
/// without inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub rect: ViewportRect,
    pub x_range: DataRange,
    pub y_range: DataRange,
    pub labels: AxisLabels,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            rect: ViewportRect::default(),
            x_range: DataRange::unit(),
            y_range: DataRange::unit(),
            labels: AxisLabels::default(),
        }
    }
}

impl ViewportConfig {
    #[must_use]
    pub fn new(rect: ViewportRect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = DataRange::new(min, max);
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = DataRange::new(min, max);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: AxisLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.rect.validate()?;
        self.x_range.validate(Axis::X)?;
        self.y_range.validate(Axis::Y)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse viewport config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize viewport config: {e}"))
        })
    }
}
