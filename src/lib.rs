//! graph-views: bar, line, pie and circular progress charts.
//!
//! Charts flow through a deterministic pipeline: data (`core::Graph`) is
//! mapped to geometry by the `core` projections, turned into a
//! backend-agnostic `render::RenderFrame` by the `api` frame builders, and
//! drawn by a `render::Renderer`. The stateful views in `api` only store the
//! latest graph, style and bounds and rebuild frames from them.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{CircularProgressView, GraphView};
pub use error::{ChartError, ChartResult};
