use graph_views::api::{BarGraphViewConfig, GraphStyle, LineGraphViewConfig, PieGraphViewConfig};
use graph_views::core::{Graph, GraphKind, GraphRange, Rect};
use graph_views::error::ChartError;
use graph_views::render::{Color, NullRenderer, RenderStats};

#[test]
fn graph_view_starts_with_default_style_for_its_kind() {
    let view = Graph::line([1, 2, 3], None)
        .view(Rect::from_size(300.0, 200.0))
        .expect("view");
    assert_eq!(view.graph_kind(), GraphKind::Line);
    assert_eq!(view.style(), &GraphStyle::Line(LineGraphViewConfig::default()));
    assert!(view.needs_display());
}

#[test]
fn render_if_needed_skips_unchanged_views() {
    let mut view = Graph::bar([4, 8], Some(GraphRange::new(0, 10).expect("range")))
        .view(Rect::from_size(200.0, 100.0))
        .expect("view");

    assert!(view.render_if_needed().expect("first render"));
    assert!(!view.render_if_needed().expect("second render"));
    assert_eq!(view.frames_rendered(), 1);
    assert_eq!(
        view.renderer().last_stats,
        RenderStats {
            rects: 2,
            lines: 1,
            texts: 2,
            ..RenderStats::default()
        }
    );

    view.set_bounds(Rect::from_size(400.0, 100.0)).expect("bounds");
    assert!(view.render_if_needed().expect("third render"));
    assert_eq!(view.renderer().frames_rendered, 2);
}

#[test]
fn applying_the_same_config_twice_draws_identical_frames() {
    let mut view = Graph::pie([3, 1, 2])
        .view(Rect::from_size(200.0, 200.0))
        .expect("view");
    let config = PieGraphViewConfig::default().with_donut(true);

    view.set_pie_config(config.clone()).expect("config");
    let first = view.build_frame().expect("frame");
    view.set_pie_config(config).expect("config");
    let second = view.build_frame().expect("frame");
    assert_eq!(first, second);
}

#[test]
fn replacing_pie_units_regenerates_palette_size() {
    let mut view = Graph::pie([3, 1])
        .view(Rect::from_size(200.0, 200.0))
        .expect("view");
    view.set_pie_config(PieGraphViewConfig::default().with_color_seed(2))
        .expect("config");
    assert_eq!(view.build_frame().expect("frame").sectors().count(), 2);

    view.set_graph(Graph::pie([1, 1, 1, 1]));
    let frame = view.build_frame().expect("frame");
    assert_eq!(frame.sectors().count(), 4);
    assert_eq!(view.style().kind(), GraphKind::Pie);
}

#[test]
fn style_must_match_graph_kind() {
    let mut view = Graph::pie([1, 2])
        .view(Rect::from_size(100.0, 100.0))
        .expect("view");
    let err = view
        .set_bar_config(BarGraphViewConfig::default())
        .expect_err("bar style on pie graph must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(view.style().kind(), GraphKind::Pie);
}

#[test]
fn invalid_style_is_rejected_without_replacing_current_one() {
    let mut view = Graph::line([1, 2], None)
        .view(Rect::from_size(100.0, 100.0))
        .expect("view");
    let err = view
        .set_line_config(LineGraphViewConfig {
            line_color: Color::rgb(0.0, -1.0, 0.0),
            ..LineGraphViewConfig::default()
        })
        .expect_err("negative channel must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(view.style(), &GraphStyle::Line(LineGraphViewConfig::default()));
}

#[test]
fn switching_graph_kind_resets_style() {
    let mut view = Graph::bar([1, 2], None)
        .view(Rect::from_size(100.0, 100.0))
        .expect("view");
    view.set_bar_config(BarGraphViewConfig::default().with_bar_width(4.0))
        .expect("config");

    view.set_graph(Graph::line([5, 6], None));
    assert_eq!(view.style(), &GraphStyle::Line(LineGraphViewConfig::default()));
    assert!(view.needs_display());
}

#[test]
fn invalid_bounds_are_rejected() {
    let err = Graph::bar([1], None)
        .view(Rect::from_size(0.0, 10.0))
        .err()
        .expect("zero width must fail");
    assert!(matches!(err, ChartError::InvalidBounds { .. }));

    let mut view = Graph::bar([1], None)
        .view_with_renderer(NullRenderer::default(), Rect::from_size(10.0, 10.0))
        .expect("view");
    assert!(view.set_bounds(Rect::from_size(10.0, f64::NAN)).is_err());
    assert_eq!(view.bounds(), Rect::from_size(10.0, 10.0));
}
