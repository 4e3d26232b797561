use tracing::trace;

use crate::core::{TickRequest, TickSet};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderSurface, Shape, TextHAlign, TextPrimitive, TextVAlign};

use super::ViewportManager;

const TICK_HALF_LENGTH_PX: f64 = 3.0;
const TICK_STROKE_WIDTH_PX: f64 = 1.0;
const TICK_FONT_SIZE_PX: f64 = 12.0;
const X_TICK_LABEL_GAP_PX: f64 = 5.0;
const X_TICK_LABEL_ROTATION_DEG: f64 = -20.0;
const Y_TICK_LABEL_GAP_PX: f64 = 7.0;

impl<S: RenderSurface> ViewportManager<S> {
    /// Resolves `request` against the current ranges and replaces the drawn
    /// tick marks with the result.
    ///
    /// Lists left as `None` in the request are synthesized: 11 evenly spaced
    /// ticks per axis, or one per supplied label.
    pub fn compute_ticks(&mut self, request: TickRequest) -> ChartResult<TickSet> {
        let ticks = TickSet::resolve(&request, &self.transform);
        let rect = self.rect();
        self.surface.clear_group(self.tick_group)?;

        for tick in &ticks.x {
            self.surface.insert(
                self.tick_group,
                Shape::Segment(LinePrimitive::new(
                    tick.position,
                    rect.bottom - TICK_HALF_LENGTH_PX,
                    tick.position,
                    rect.bottom + TICK_HALF_LENGTH_PX,
                    TICK_STROKE_WIDTH_PX,
                    Color::SILVER,
                )),
            )?;
            if !tick.label.is_empty() {
                self.surface.insert(
                    self.tick_group,
                    Shape::Label(
                        TextPrimitive::new(
                            tick.label.clone(),
                            tick.position,
                            rect.bottom + X_TICK_LABEL_GAP_PX,
                            TICK_FONT_SIZE_PX,
                            Color::BLACK,
                            TextHAlign::Center,
                        )
                        .with_v_align(TextVAlign::Top)
                        .with_rotation(X_TICK_LABEL_ROTATION_DEG),
                    ),
                )?;
            }
        }

        for tick in &ticks.y {
            self.surface.insert(
                self.tick_group,
                Shape::Segment(LinePrimitive::new(
                    rect.left - TICK_HALF_LENGTH_PX,
                    tick.position,
                    rect.left + TICK_HALF_LENGTH_PX,
                    tick.position,
                    TICK_STROKE_WIDTH_PX,
                    Color::SILVER,
                )),
            )?;
            if !tick.label.is_empty() {
                self.surface.insert(
                    self.tick_group,
                    Shape::Label(TextPrimitive::new(
                        tick.label.clone(),
                        rect.left - Y_TICK_LABEL_GAP_PX,
                        tick.position,
                        TICK_FONT_SIZE_PX,
                        Color::BLACK,
                        TextHAlign::Right,
                    )),
                )?;
            }
        }

        trace!(x = ticks.x.len(), y = ticks.y.len(), "ticks regenerated");
        self.ticks = ticks.clone();
        Ok(ticks)
    }
}
