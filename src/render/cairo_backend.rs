use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RenderFrame, Renderer, Shape, TextHAlign,
    TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub markers_drawn: usize,
    pub segments_drawn: usize,
    pub labels_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders either into an owned offscreen image surface through
/// `Renderer::render` or onto an external context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for shape in &frame.shapes {
            match shape {
                Shape::Marker(circle) => {
                    draw_marker(context, circle)?;
                    stats.markers_drawn += 1;
                }
                Shape::Segment(line) => {
                    draw_segment(context, line)?;
                    stats.segments_drawn += 1;
                }
                Shape::Label(text) => {
                    draw_label(context, text)?;
                    stats.labels_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_marker(context: &Context, circle: &CirclePrimitive) -> ChartResult<()> {
    apply_color(context, circle.color);
    context.new_path();
    context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill marker", err))
}

fn draw_segment(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke segment", err))
}

fn draw_label(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -f64::from(text_height) / 2.0,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(text.x, text.y);
    context.rotate(text.rotation_deg.to_radians());
    apply_color(context, text.color);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
