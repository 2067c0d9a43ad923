use std::f64::consts::TAU;
use std::sync::Arc;

use tracing::trace;

use crate::core::progress::{percent_text, resolve_progress_fill};
use crate::core::{ProgressFill, Rect, project_progress};
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, Color, DrawCommand, LineCap, MaskedFillPrimitive, Paint, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::CircularProgressConfig;

/// Replaces the default percentage text; receives the drawn angle in degrees.
pub type ProgressTextFormatter = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Share of the view height used as the default center font size.
pub const PROGRESS_FONT_SIZE_RATIO: f64 = 0.2;

/// Builds the draw commands of a circular progress indicator at `angle`
/// degrees.
///
/// Paint order: center text, the track circle (with its inside fill), then
/// the progress fill composited through the progress arc mask.
pub fn build_progress_frame(
    angle: f64,
    config: &CircularProgressConfig,
    bounds: Rect,
    formatter: Option<&ProgressTextFormatter>,
) -> ChartResult<RenderFrame> {
    config.validate()?;
    let geometry = project_progress(angle, config.shape(), bounds)?;
    let mut frame = RenderFrame::new(bounds);

    let text = match formatter {
        Some(formatter) => formatter(angle),
        None => percent_text(angle),
    };
    if !text.is_empty() {
        let font_size = config
            .font_size
            .unwrap_or(bounds.height * PROGRESS_FONT_SIZE_RATIO);
        frame.push(DrawCommand::Text(TextPrimitive::new(
            text,
            geometry.center.x,
            geometry.center.y - font_size / 2.0,
            font_size,
            config.resolved_text_color(),
            TextHAlign::Center,
        )));
    }

    let track_stroke = (geometry.track_line_width > 0.0).then_some(config.track_color);
    if track_stroke.is_some() || config.progress_inside_fill_color.is_some() {
        frame.push(DrawCommand::Arc(ArcPrimitive {
            center: geometry.center,
            radius: geometry.track_radius,
            start_angle: 0.0,
            sweep_angle: TAU,
            stroke_width: geometry.track_line_width,
            stroke_color: track_stroke,
            fill_color: config.progress_inside_fill_color,
            line_cap: LineCap::Butt,
        }));
    }

    if geometry.progress_line_width > 0.0 {
        let fill = resolve_progress_fill(
            &config.colors,
            config.lerp_color_mode,
            config.gradient_rotate_speed,
            angle,
            &geometry,
            config.clockwise,
            bounds,
        );
        let paint = match fill {
            ProgressFill::Solid(color) | ProgressFill::Lerp(color) => Paint::Solid(color),
            ProgressFill::Gradient(gradient) => Paint::LinearGradient(gradient),
        };
        frame.push(DrawCommand::MaskedFill(MaskedFillPrimitive {
            area: bounds,
            mask: ArcPrimitive {
                center: geometry.center,
                radius: geometry.progress_radius,
                start_angle: geometry.start_angle,
                sweep_angle: geometry.sweep_angle,
                stroke_width: geometry.progress_line_width,
                stroke_color: Some(Color::WHITE),
                fill_color: None,
                line_cap: if config.rounded_corners {
                    LineCap::Round
                } else {
                    LineCap::Butt
                },
            },
            glow_blur: geometry.glow_radius,
            paint,
        }));
    }

    trace!(
        angle,
        reduced_angle = geometry.reduced_angle,
        glow = geometry.glow_radius,
        "built progress frame"
    );
    Ok(frame)
}
