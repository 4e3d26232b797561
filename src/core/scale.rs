use crate::core::types::{Axis, DataRange};
use crate::error::{ChartError, ChartResult};

/// One-dimensional affine map from a data domain onto a pixel span.
///
/// `pixel_span` may be negative, which is how the Y axis flips: data grows
/// upward while pixel Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_span: f64,
}

impl LinearScale {
    pub fn new(domain: DataRange, pixel_start: f64, pixel_span: f64, axis: Axis) -> ChartResult<Self> {
        domain.validate(axis)?;
        if !pixel_start.is_finite() || !pixel_span.is_finite() || pixel_span == 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel span must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.min,
            domain_end: domain.max,
            pixel_start,
            pixel_span,
        })
    }

    #[must_use]
    pub fn domain(self) -> DataRange {
        DataRange::new(self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        self.pixel_start + (value - self.domain_start) * self.pixel_span / span
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        (pixel - self.pixel_start) * span / self.pixel_span + self.domain_start
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;
    use crate::core::{Axis, DataRange};

    #[test]
    fn rejects_degenerate_domain() {
        assert!(LinearScale::new(DataRange::new(3.0, 3.0), 0.0, 100.0, Axis::X).is_err());
        assert!(LinearScale::new(DataRange::new(0.0, 1.0), 0.0, 0.0, Axis::X).is_err());
    }

    #[test]
    fn negative_span_flips_direction() {
        let scale = LinearScale::new(DataRange::new(0.0, 10.0), 300.0, -200.0, Axis::Y)
            .expect("valid scale");
        assert_eq!(scale.domain_to_pixel(0.0), 300.0);
        assert_eq!(scale.domain_to_pixel(10.0), 100.0);
        assert_eq!(scale.pixel_to_domain(200.0), 5.0);
    }
}
