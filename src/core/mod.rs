pub mod bar;
pub mod graph;
pub mod line;
pub mod numeric;
pub mod pie;
pub mod progress;
pub mod range;
pub mod types;

pub use bar::{BarGeometry, BarLayout, BarProjection, project_bars};
pub use graph::{Graph, GraphData, GraphKind, GraphUnit, TextDisplayFn};
pub use line::{LinePoint, LineProjection, LineSegment, project_line};
pub use numeric::{NumericValue, sum_values, sum_values_f64};
pub use pie::{PieProjection, PieSector, project_pie};
pub use progress::{
    GlowMode, ProgressFill, ProgressGeometry, ProgressShape, normalize_angle, project_progress,
    wrap_value,
};
pub use range::GraphRange;
pub use types::{EdgeInsets, Point, Rect, content_rect};
