use crate::error::ChartResult;
use crate::render::Shape;

/// Backend-agnostic scene snapshot for one draw pass, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub shapes: Vec<Shape>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for shape in &self.shapes {
            shape.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Marker(_)))
            .count()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Segment(_)))
            .count()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Label(_)))
            .count()
    }
}
