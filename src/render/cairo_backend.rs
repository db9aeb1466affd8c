use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use crate::core::SurfaceLayout;
use crate::error::{ProjectionError, ProjectionResult};
use crate::render::{
    Color, DrawCommand, LineCap, LineJoin, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context owned by the host.
///
/// The host context is expected to already be in logical pixels.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ProjectionResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Offscreen rendering allocates the backing store at
/// `logical size * pixel_ratio` and scales the context, so frames built in
/// logical pixels stay sharp on dense displays.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    layout: SurfaceLayout,
    background: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(layout: SurfaceLayout) -> ProjectionResult<Self> {
        let surface = create_surface(layout)?;
        Ok(Self {
            surface,
            layout,
            background: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    /// Fills the surface with `color` instead of leaving it transparent.
    pub fn set_background(&mut self, color: Option<Color>) -> ProjectionResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: &Path) -> ProjectionResult<()> {
        let mut file = File::create(path).map_err(|err| {
            ProjectionError::InvalidData(format!(
                "failed to create png `{}`: {err}",
                path.display()
            ))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ProjectionError::InvalidData(format!("failed to write png `{}`: {err}", path.display()))
        })
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ProjectionResult<()> {
        frame.validate()?;

        context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        context.set_operator(Operator::Clear);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(Operator::Over);
        if let Some(background) = self.background {
            apply_color(context, background);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to paint background", err))?;
        }

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::GridLine(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke gridline", err))?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::AxisFrame(polyline) | DrawCommand::Series(polyline) => {
                    stroke_polyline(context, polyline)?;
                    stats.polylines_drawn += 1;
                }
                DrawCommand::AxisLabel(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
                DrawCommand::LegendItem(item) => {
                    apply_color(context, item.swatch.fill_color);
                    context.new_sub_path();
                    context.arc(item.swatch.cx, item.swatch.cy, item.swatch.radius, 0.0, TAU);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill legend swatch", err))?;
                    draw_text(context, &item.label);
                    stats.circles_drawn += 1;
                    stats.texts_drawn += 1;
                }
            }
        }
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ProjectionResult<()> {
        if frame.layout != self.layout {
            self.surface = create_surface(frame.layout)?;
            self.layout = frame.layout;
        }
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let scale = self.layout.scale_factor();
        context.scale(scale, scale);
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ProjectionResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(layout: SurfaceLayout) -> ProjectionResult<ImageSurface> {
    let width = i32::try_from(layout.backing_width).ok().filter(|w| *w > 0);
    let height = i32::try_from(layout.backing_height).ok().filter(|h| *h > 0);
    let (Some(width), Some(height)) = (width, height) else {
        return Err(ProjectionError::InvalidViewport {
            width: layout.backing_width,
            height: layout.backing_height,
        });
    };
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn stroke_polyline(context: &Context, polyline: &PolylinePrimitive) -> ProjectionResult<()> {
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context.set_line_join(match polyline.join {
        LineJoin::Miter => cairo::LineJoin::Miter,
        LineJoin::Round => cairo::LineJoin::Round,
    });
    context.set_line_cap(match polyline.cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
    });

    for run in polyline.finite_runs() {
        let Some(((first_x, first_y), rest)) = run.split_first() else {
            continue;
        };
        context.move_to(*first_x, *first_y);
        if rest.is_empty() {
            context.line_to(*first_x, *first_y);
        }
        for (x, y) in rest {
            context.line_to(*x, *y);
        }
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    let y = text.y - f64::from(text_height) / 2.0;

    apply_color(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ProjectionError {
    ProjectionError::InvalidData(format!("{prefix}: {err}"))
}
