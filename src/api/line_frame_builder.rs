use tracing::trace;

use crate::core::{Graph, NumericValue, Rect, project_line};
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, DrawCommand, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::LineGraphViewConfig;

/// Gap between a point dot and its label.
pub const LINE_LABEL_MARGIN_PX: f64 = 3.0;

/// Builds the draw commands of a line graph: the polyline, then a dot and an
/// optional label per point.
pub fn build_line_frame<K, V: NumericValue>(
    graph: &Graph<K, V>,
    config: &LineGraphViewConfig,
    bounds: Rect,
) -> ChartResult<RenderFrame> {
    config.validate()?;
    let projection = project_line(graph, bounds, config.content_insets)?;
    let mut frame = RenderFrame::new(bounds);

    if projection.points.len() >= 2 {
        frame.push(DrawCommand::Polyline(PolylinePrimitive {
            points: projection
                .points
                .iter()
                .map(|point| point.position())
                .collect(),
            stroke_width: config.line_width,
            color: config.line_color,
        }));
    }

    let dot_radius = config.dot_diameter / 2.0;
    let total = graph.total();
    for (point, unit) in projection.points.iter().zip(graph.units()) {
        if dot_radius > 0.0 {
            frame.push(DrawCommand::Arc(ArcPrimitive::disc(
                point.position(),
                dot_radius,
                config.resolved_dot_color(),
            )));
        }

        if !config.text_visible {
            continue;
        }
        if let Some(text) = graph.text_for(unit, total).filter(|text| !text.is_empty()) {
            frame.push(DrawCommand::Text(TextPrimitive::new(
                text,
                point.x,
                point.y - dot_radius - LINE_LABEL_MARGIN_PX - config.font_size,
                config.font_size,
                config.text_color,
                TextHAlign::Center,
            )));
        }
    }

    trace!(
        points = projection.points.len(),
        commands = frame.commands.len(),
        "built line frame"
    );
    Ok(frame)
}
