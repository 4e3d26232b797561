mod frame;
mod null_renderer;
mod primitives;
mod scene;
mod surface;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, Shape, TextHAlign, TextPrimitive, TextVAlign,
};
pub use scene::Scene;
pub use surface::{GroupId, RenderSurface, ShapeId};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from viewport and plot logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
