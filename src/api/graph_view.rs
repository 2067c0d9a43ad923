#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use tracing::debug;

use crate::core::{Graph, GraphKind, NumericValue, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, NullRenderer, RenderFrame, Renderer};

use super::{
    BarGraphViewConfig, GraphStyle, LineGraphViewConfig, PieGraphViewConfig, build_bar_frame,
    build_line_frame, build_pie_frame_with_colors, resolve_pie_colors,
};

/// Generated pie palette kept across redraws.
#[derive(Debug, Clone, PartialEq)]
struct PiePaletteCache {
    count: usize,
    seed: Option<u64>,
    colors: Vec<Color>,
}

/// Stateful view over one graph.
///
/// Stores the latest graph, style and bounds and rebuilds the frame from them
/// on every redraw; the frame builders stay pure.
pub struct GraphView<K, V, R: Renderer> {
    renderer: R,
    graph: Graph<K, V>,
    style: GraphStyle,
    bounds: Rect,
    pie_palette: Option<PiePaletteCache>,
    needs_display: bool,
    frames_rendered: usize,
}

impl<K, V: NumericValue> Graph<K, V> {
    /// Drawable view over this graph with its kind's default style and a
    /// validating headless renderer.
    pub fn view(self, bounds: Rect) -> ChartResult<GraphView<K, V, NullRenderer>> {
        GraphView::new(NullRenderer::default(), self, bounds)
    }

    /// Drawable view rendering through `renderer`.
    pub fn view_with_renderer<R: Renderer>(
        self,
        renderer: R,
        bounds: Rect,
    ) -> ChartResult<GraphView<K, V, R>> {
        GraphView::new(renderer, self, bounds)
    }
}

impl<K, V: NumericValue, R: Renderer> GraphView<K, V, R> {
    pub fn new(renderer: R, graph: Graph<K, V>, bounds: Rect) -> ChartResult<Self> {
        bounds.validate_drawable()?;
        let style = GraphStyle::default_for(graph.kind());
        debug!(
            kind = ?graph.kind(),
            units = graph.len(),
            "create graph view"
        );
        Ok(Self {
            renderer,
            graph,
            style,
            bounds,
            pie_palette: None,
            needs_display: true,
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn graph(&self) -> &Graph<K, V> {
        &self.graph
    }

    /// Replaces the graph, keeping the style when the kind matches.
    pub fn set_graph(&mut self, graph: Graph<K, V>) {
        if graph.kind() != self.style.kind() {
            self.style = GraphStyle::default_for(graph.kind());
        }
        debug!(kind = ?graph.kind(), units = graph.len(), "set graph");
        self.graph = graph;
        self.pie_palette = None;
        self.needs_display = true;
    }

    #[must_use]
    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    /// Replaces the whole style and schedules one redraw.
    ///
    /// The style must match the graph kind.
    pub fn set_style(&mut self, style: impl Into<GraphStyle>) -> ChartResult<()> {
        let style = style.into();
        if style.kind() != self.graph.kind() {
            return Err(ChartError::InvalidData(format!(
                "{:?} style cannot draw a {:?} graph",
                style.kind(),
                self.graph.kind()
            )));
        }
        style.validate()?;
        debug!(kind = ?style.kind(), "set graph style");
        self.style = style;
        self.needs_display = true;
        Ok(())
    }

    pub fn set_bar_config(&mut self, config: BarGraphViewConfig) -> ChartResult<()> {
        self.set_style(config)
    }

    pub fn set_line_config(&mut self, config: LineGraphViewConfig) -> ChartResult<()> {
        self.set_style(config)
    }

    pub fn set_pie_config(&mut self, config: PieGraphViewConfig) -> ChartResult<()> {
        self.set_style(config)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) -> ChartResult<()> {
        bounds.validate_drawable()?;
        self.bounds = bounds;
        self.needs_display = true;
        Ok(())
    }

    #[must_use]
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// Frame for the current graph, style and bounds.
    ///
    /// Pie views generate their palette once per unit count and seed so
    /// repeated frames use the same colors.
    pub fn build_frame(&mut self) -> ChartResult<RenderFrame> {
        match &self.style {
            GraphStyle::Bar(config) => build_bar_frame(&self.graph, config, self.bounds),
            GraphStyle::Line(config) => build_line_frame(&self.graph, config, self.bounds),
            GraphStyle::Pie(config) => {
                if let Some(colors) = config.explicit_colors() {
                    return build_pie_frame_with_colors(&self.graph, config, self.bounds, colors);
                }
                let count = self.graph.len();
                let cached = self
                    .pie_palette
                    .as_ref()
                    .is_some_and(|cache| cache.count == count && cache.seed == config.color_seed);
                if !cached {
                    debug!(count, seed = ?config.color_seed, "generate pie palette");
                    self.pie_palette = Some(PiePaletteCache {
                        count,
                        seed: config.color_seed,
                        colors: resolve_pie_colors(config, count),
                    });
                }
                let colors = self
                    .pie_palette
                    .as_ref()
                    .map(|cache| cache.colors.as_slice())
                    .unwrap_or_default();
                build_pie_frame_with_colors(&self.graph, config, self.bounds, colors)
            }
        }
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.needs_display = false;
        self.frames_rendered += 1;
        Ok(())
    }

    /// Renders only when state changed since the last draw.
    pub fn render_if_needed(&mut self) -> ChartResult<bool> {
        if !self.needs_display {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Renders into an external cairo context, e.g. a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.needs_display = false;
        self.frames_rendered += 1;
        Ok(())
    }

    #[must_use]
    pub fn graph_kind(&self) -> GraphKind {
        self.graph.kind()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
