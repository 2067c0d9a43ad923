mod angle_animation;
mod bar_frame_builder;
mod circular_progress_view;
mod graph_view;
mod line_frame_builder;
mod pie_frame_builder;
mod progress_frame_builder;
mod view_config;

pub use angle_animation::{AngleAnimation, AnimationCompletion, AnimationTiming};
pub use bar_frame_builder::build_bar_frame;
pub use circular_progress_view::CircularProgressView;
pub use graph_view::GraphView;
pub use line_frame_builder::{LINE_LABEL_MARGIN_PX, build_line_frame};
pub use pie_frame_builder::{build_pie_frame, build_pie_frame_with_colors, resolve_pie_colors};
pub use progress_frame_builder::{
    PROGRESS_FONT_SIZE_RATIO, ProgressTextFormatter, build_progress_frame,
};
pub use view_config::{
    BarGraphViewConfig, CircularProgressConfig, GraphStyle, JsonConfig, LineGraphViewConfig,
    PieGraphViewConfig,
};
