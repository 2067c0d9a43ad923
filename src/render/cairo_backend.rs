use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, DrawCommand, LineCap, LinePrimitive, MaskedFillPrimitive, Paint,
    PolylinePrimitive, RectPrimitive, RenderFrame, Renderer, SectorPrimitive, TextHAlign,
    TextPrimitive,
};

/// Number of widening strokes used to approximate the glow blur.
const GLOW_HALO_STEPS: u32 = 8;
/// Peak coverage of the innermost glow halo.
const GLOW_HALO_MAX_ALPHA: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub sectors_drawn: usize,
    pub arcs_drawn: usize,
    pub texts_drawn: usize,
    pub masked_fills_drawn: usize,
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
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
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
            clear_color: Some(Color::WHITE),
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

    /// Background painted before each frame; `None` leaves the target as is.
    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if let Some(clear_color) = self.clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Rect(rect) => {
                    draw_rect(context, rect)?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::Line(line) => {
                    draw_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Polyline(polyline) => {
                    draw_polyline(context, polyline)?;
                    stats.polylines_drawn += 1;
                }
                DrawCommand::Sector(sector) => {
                    draw_sector(context, *sector)?;
                    stats.sectors_drawn += 1;
                }
                DrawCommand::Arc(arc) => {
                    draw_arc(context, *arc)?;
                    stats.arcs_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
                DrawCommand::MaskedFill(fill) => {
                    draw_masked_fill(context, fill)?;
                    stats.masked_fills_drawn += 1;
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

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_paint(context: &Context, paint: &Paint) -> ChartResult<()> {
    match paint {
        Paint::Solid(color) => {
            apply_color(context, *color);
            Ok(())
        }
        Paint::LinearGradient(gradient) => {
            let pattern = cairo::LinearGradient::new(
                gradient.start.x,
                gradient.start.y,
                gradient.end.x,
                gradient.end.y,
            );
            for stop in &gradient.stops {
                pattern.add_color_stop_rgba(
                    stop.offset,
                    stop.color.red,
                    stop.color.green,
                    stop.color.blue,
                    stop.color.alpha,
                );
            }
            context
                .set_source(&pattern)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn apply_line_cap(context: &Context, line_cap: LineCap) {
    context.set_line_cap(match line_cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
    });
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    context.new_path();
    append_rect_path(context, rect);
    apply_paint(context, &rect.paint)?;
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn draw_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_line_cap(cairo::LineCap::Butt);
    context.new_path();
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_polyline(context: &Context, polyline: &PolylinePrimitive) -> ChartResult<()> {
    let Some((first, rest)) = polyline.points.split_first() else {
        return Ok(());
    };
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context.set_line_cap(cairo::LineCap::Round);
    context.set_line_join(cairo::LineJoin::Round);
    context.new_path();
    context.move_to(first.x, first.y);
    for point in rest {
        context.line_to(point.x, point.y);
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err))
}

fn draw_sector(context: &Context, sector: SectorPrimitive) -> ChartResult<()> {
    let center = sector.center;
    context.new_path();
    if sector.inner_radius > 0.0 {
        context.arc(
            center.x,
            center.y,
            sector.radius,
            sector.start_angle,
            sector.end_angle,
        );
        context.arc_negative(
            center.x,
            center.y,
            sector.inner_radius,
            sector.end_angle,
            sector.start_angle,
        );
    } else {
        context.move_to(center.x, center.y);
        context.arc(
            center.x,
            center.y,
            sector.radius,
            sector.start_angle,
            sector.end_angle,
        );
    }
    context.close_path();
    apply_color(context, sector.color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill sector", err))
}

fn append_arc_path(context: &Context, arc: ArcPrimitive) {
    let end_angle = arc.start_angle + arc.sweep_angle;
    if arc.sweep_angle >= 0.0 {
        context.arc(
            arc.center.x,
            arc.center.y,
            arc.radius,
            arc.start_angle,
            end_angle,
        );
    } else {
        context.arc_negative(
            arc.center.x,
            arc.center.y,
            arc.radius,
            arc.start_angle,
            end_angle,
        );
    }
}

fn draw_arc(context: &Context, arc: ArcPrimitive) -> ChartResult<()> {
    context.new_path();
    append_arc_path(context, arc);

    if let Some(fill_color) = arc.fill_color {
        apply_color(context, fill_color);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill arc", err))?;
    }
    if let Some(stroke_color) = arc.stroke_color {
        apply_color(context, stroke_color);
        apply_line_cap(context, arc.line_cap);
        context.set_line_width(arc.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke arc", err))?;
    }
    context.new_path();
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

/// Draws the arc (and its glow halos) into an alpha mask, then composites the
/// paint through it.
fn draw_masked_fill(context: &Context, fill: &MaskedFillPrimitive) -> ChartResult<()> {
    let width = fill.area.width.ceil() as i32;
    let height = fill.area.height.ceil() as i32;
    let mask_surface = ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create mask surface", err))?;
    {
        let mask = Context::new(&mask_surface)
            .map_err(|err| map_backend_error("failed to create mask context", err))?;
        mask.translate(-fill.area.x, -fill.area.y);
        apply_line_cap(&mask, fill.mask.line_cap);

        if fill.glow_blur > 0.0 {
            for step in (1..=GLOW_HALO_STEPS).rev() {
                let spread = fill.glow_blur * f64::from(step) / f64::from(GLOW_HALO_STEPS);
                let alpha = GLOW_HALO_MAX_ALPHA
                    * (1.0 - f64::from(step) / f64::from(GLOW_HALO_STEPS + 1));
                mask.new_path();
                append_arc_path(&mask, fill.mask);
                mask.set_line_width(fill.mask.stroke_width + 2.0 * spread);
                mask.set_source_rgba(0.0, 0.0, 0.0, alpha);
                mask.stroke()
                    .map_err(|err| map_backend_error("failed to stroke glow halo", err))?;
            }
        }

        mask.new_path();
        append_arc_path(&mask, fill.mask);
        mask.set_line_width(fill.mask.stroke_width);
        mask.set_source_rgba(0.0, 0.0, 0.0, 1.0);
        mask.stroke()
            .map_err(|err| map_backend_error("failed to stroke progress mask", err))?;
    }
    mask_surface.flush();

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    apply_paint(context, &fill.paint)?;
    let masked = context
        .mask_surface(&mask_surface, fill.area.x, fill.area.y)
        .map_err(|err| map_backend_error("failed to composite masked fill", err));
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))?;
    masked
}

fn append_rect_path(context: &Context, primitive: &RectPrimitive) {
    let rect = primitive.rect;
    if primitive.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = primitive
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
