use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_marker_count: usize,
    pub last_segment_count: usize,
    pub last_label_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_marker_count = frame.marker_count();
        self.last_segment_count = frame.segment_count();
        self.last_label_count = frame.label_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
