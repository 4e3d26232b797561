use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderSurface, Shape, TextHAlign, TextPrimitive};

use super::{AxisLabels, ViewportManager};

const AXIS_STROKE_WIDTH_PX: f64 = 3.0;
const AXIS_OVERHANG_PX: f64 = 5.0;
const TITLE_FONT_SIZE_PX: f64 = 14.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;
const TITLE_GAP_PX: f64 = 20.0;
const X_LABEL_GAP_PX: f64 = 30.0;
const Y_LABEL_GAP_PX: f64 = 40.0;

impl<S: RenderSurface> ViewportManager<S> {
    /// Replaces the title and axis captions. Empty strings draw nothing.
    pub fn set_axis_labels(&mut self, labels: AxisLabels) -> ChartResult<()> {
        for id in self.label_shapes.drain(..) {
            self.surface.remove(id)?;
        }
        self.draw_axis_labels(labels)
    }

    pub(super) fn draw_axes(&mut self) -> ChartResult<()> {
        let rect = self.rect();
        self.surface.insert(
            self.axis_group,
            Shape::Segment(LinePrimitive::new(
                rect.left,
                rect.top(),
                rect.left,
                rect.bottom + AXIS_OVERHANG_PX,
                AXIS_STROKE_WIDTH_PX,
                Color::SILVER,
            )),
        )?;
        self.surface.insert(
            self.axis_group,
            Shape::Segment(LinePrimitive::new(
                rect.left - AXIS_OVERHANG_PX,
                rect.bottom,
                rect.right(),
                rect.bottom,
                AXIS_STROKE_WIDTH_PX,
                Color::SILVER,
            )),
        )?;
        Ok(())
    }

    pub(super) fn draw_axis_labels(&mut self, labels: AxisLabels) -> ChartResult<()> {
        let rect = self.rect();
        let center_x = rect.left + rect.width / 2.0;
        let captions = [
            TextPrimitive::new(
                labels.title.clone(),
                center_x,
                rect.top() - TITLE_GAP_PX,
                TITLE_FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Center,
            ),
            TextPrimitive::new(
                labels.x_label.clone(),
                center_x,
                rect.bottom + X_LABEL_GAP_PX,
                LABEL_FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Center,
            ),
            TextPrimitive::new(
                labels.y_label.clone(),
                rect.left - Y_LABEL_GAP_PX,
                rect.bottom - rect.height / 2.0,
                LABEL_FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        ];

        for caption in captions {
            if caption.text.is_empty() {
                continue;
            }
            let id = self.surface.insert(self.axis_group, Shape::Label(caption))?;
            self.label_shapes.push(id);
        }
        self.labels = labels;
        Ok(())
    }
}
