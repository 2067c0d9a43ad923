use tracing::{trace, warn};

use crate::core::{Graph, NumericValue, Rect, project_pie};
use crate::error::ChartResult;
use crate::render::{
    Color, DrawCommand, RenderFrame, SectorPrimitive, TextHAlign, TextPrimitive, palette,
};

use super::PieGraphViewConfig;

/// Sector colors for `count` units: the caller palette when set, otherwise a
/// generated one.
#[must_use]
pub fn resolve_pie_colors(config: &PieGraphViewConfig, count: usize) -> Vec<Color> {
    match config.explicit_colors() {
        Some(colors) => colors.to_vec(),
        None => palette::pie_colors(count, config.color_seed),
    }
}

/// Builds the draw commands of a pie graph with colors resolved from
/// `config`.
///
/// Without caller colors or a seed the generated palette differs between
/// calls; views cache it so redraws stay stable.
pub fn build_pie_frame<K, V: NumericValue>(
    graph: &Graph<K, V>,
    config: &PieGraphViewConfig,
    bounds: Rect,
) -> ChartResult<RenderFrame> {
    let colors = resolve_pie_colors(config, graph.len());
    build_pie_frame_with_colors(graph, config, bounds, &colors)
}

/// Builds the draw commands of a pie graph using `colors` in sector order,
/// cycled when shorter than the sector count.
///
/// Sectors are drawn first, then every label on top. Zero-span sectors are
/// not filled but keep their label.
pub fn build_pie_frame_with_colors<K, V: NumericValue>(
    graph: &Graph<K, V>,
    config: &PieGraphViewConfig,
    bounds: Rect,
    colors: &[Color],
) -> ChartResult<RenderFrame> {
    config.validate()?;
    let projection = project_pie(graph, bounds, config.content_insets, config.donut)?;
    let mut frame = RenderFrame::new(bounds);
    if projection.sectors.is_empty() {
        return Ok(frame);
    }

    if colors.is_empty() {
        warn!(
            sectors = projection.sectors.len(),
            "pie palette is empty; skipping sector fills"
        );
    } else if colors.len() < projection.sectors.len() {
        warn!(
            colors = colors.len(),
            sectors = projection.sectors.len(),
            "pie palette shorter than sector count; cycling colors"
        );
    }

    if !colors.is_empty() && projection.radius > 0.0 {
        for sector in &projection.sectors {
            if sector.sweep() <= 0.0 {
                continue;
            }
            frame.push(DrawCommand::Sector(SectorPrimitive {
                center: sector.center,
                radius: sector.radius,
                inner_radius: sector.inner_radius,
                start_angle: sector.start_angle,
                end_angle: sector.end_angle,
                color: colors[sector.index % colors.len()],
            }));
        }
    }

    let total = graph.non_negative_total();
    for (sector, unit) in projection.sectors.iter().zip(graph.units()) {
        let Some(text) = graph.text_for(unit, total).filter(|text| !text.is_empty()) else {
            continue;
        };
        frame.push(DrawCommand::Text(TextPrimitive::new(
            text,
            sector.label_anchor.x,
            sector.label_anchor.y - config.font_size / 2.0,
            config.font_size,
            config.text_color,
            TextHAlign::Center,
        )));
    }

    trace!(
        sectors = projection.sectors.len(),
        commands = frame.commands.len(),
        "built pie frame"
    );
    Ok(frame)
}
