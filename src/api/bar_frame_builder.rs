use tracing::trace;

use crate::core::{Graph, NumericValue, Rect, project_bars};
use crate::error::ChartResult;
use crate::render::{
    DrawCommand, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::BarGraphViewConfig;

/// Builds the draw commands of a bar graph.
///
/// Commands come in paint order: the zero baseline, then one bar and its
/// optional label per unit. Zero-height bars are skipped but keep their label.
pub fn build_bar_frame<K, V: NumericValue>(
    graph: &Graph<K, V>,
    config: &BarGraphViewConfig,
    bounds: Rect,
) -> ChartResult<RenderFrame> {
    config.validate()?;
    let projection = project_bars(graph, bounds, config.layout())?;
    let mut frame = RenderFrame::new(bounds);
    if projection.bars.is_empty() {
        return Ok(frame);
    }

    if config.zero_line_visible {
        let y = projection.zero_line_y();
        frame.push(DrawCommand::Line(LinePrimitive::new(
            projection.content.x,
            y,
            projection.content.right(),
            y,
            config.zero_line_width,
            config.resolved_zero_line_color(),
        )));
    }

    let total = graph.total();
    for (bar, unit) in projection.bars.iter().zip(graph.units()) {
        if bar.height > 0.0 && bar.width > 0.0 {
            let rect = bar.rect();
            let mut primitive = RectPrimitive::new(rect, config.fill.paint_for(rect)?);
            if config.rounded_corners {
                primitive = primitive.with_corner_radius(rect.width / 2.0);
            }
            frame.push(DrawCommand::Rect(primitive));
        }

        if !config.text_visible {
            continue;
        }
        let Some(text) = graph.text_for(unit, total) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let label = projection.label_rect(bar, config.font_size);
        frame.push(DrawCommand::Text(TextPrimitive::new(
            text,
            label.center().x,
            label.y,
            config.font_size,
            config.text_color,
            TextHAlign::Center,
        )));
    }

    trace!(
        bars = projection.bars.len(),
        commands = frame.commands.len(),
        "built bar frame"
    );
    Ok(frame)
}
