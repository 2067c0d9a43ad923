mod color;
mod fill;
mod frame;
mod null_renderer;
mod primitives;

pub use color::{Color, palette};
pub use fill::BarFill;
pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::{NullRenderer, RenderStats};
pub use primitives::{
    ArcPrimitive, GradientStop, LineCap, LinePrimitive, LinearGradient, MaskedFillPrimitive,
    Paint, PolylinePrimitive, RectPrimitive, SectorPrimitive, TextHAlign, TextPrimitive,
    gradient_locations,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart data and style resolution.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
