use graph_views::ChartError;
use graph_views::core::{Point, Rect};
use graph_views::render::{
    ArcPrimitive, Color, DrawCommand, LineCap, LinePrimitive, MaskedFillPrimitive, NullRenderer,
    Paint, PolylinePrimitive, RectPrimitive, RenderFrame, RenderStats, Renderer, SectorPrimitive,
    TextHAlign, TextPrimitive,
};

fn sample_frame() -> RenderFrame {
    let bounds = Rect::from_size(100.0, 100.0);
    RenderFrame::new(bounds)
        .with_command(DrawCommand::Line(LinePrimitive::new(
            0.0,
            50.0,
            100.0,
            50.0,
            1.0,
            Color::BLACK,
        )))
        .with_command(DrawCommand::Rect(RectPrimitive::new(
            Rect::new(10.0, 10.0, 20.0, 40.0),
            Paint::Solid(Color::CYAN),
        )))
        .with_command(DrawCommand::Sector(SectorPrimitive {
            center: Point::new(50.0, 50.0),
            radius: 40.0,
            inner_radius: 32.0,
            start_angle: 0.0,
            end_angle: 1.0,
            color: Color::WHITE,
        }))
        .with_command(DrawCommand::Text(TextPrimitive::new(
            "42",
            50.0,
            45.0,
            10.0,
            Color::BLACK,
            TextHAlign::Center,
        )))
        .with_command(DrawCommand::MaskedFill(MaskedFillPrimitive {
            area: bounds,
            mask: ArcPrimitive {
                center: Point::new(50.0, 50.0),
                radius: 45.0,
                start_angle: 0.0,
                sweep_angle: -1.0,
                stroke_width: 10.0,
                stroke_color: Some(Color::WHITE),
                fill_color: None,
                line_cap: LineCap::Round,
            },
            glow_blur: 2.0,
            paint: Paint::Solid(Color::CYAN),
        }))
}

#[test]
fn null_renderer_counts_commands_per_kind() {
    let frame = sample_frame();
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(
        renderer.last_stats,
        RenderStats {
            rects: 1,
            lines: 1,
            sectors: 1,
            texts: 1,
            masked_fills: 1,
            ..RenderStats::default()
        }
    );
    assert_eq!(renderer.last_frame.as_ref(), Some(&frame));
}

#[test]
fn frame_iterators_filter_by_kind_in_paint_order() {
    let frame = sample_frame();
    assert_eq!(frame.rects().count(), 1);
    assert_eq!(frame.lines().count(), 1);
    assert_eq!(frame.polylines().count(), 0);
    assert_eq!(frame.texts().next().map(|text| text.text.as_str()), Some("42"));
    assert!(matches!(frame.commands[0], DrawCommand::Line(_)));
    assert!(!frame.is_empty());
}

#[test]
fn invalid_primitives_are_rejected_before_drawing() {
    let mut renderer = NullRenderer::default();
    let bounds = Rect::from_size(100.0, 100.0);

    let polyline = RenderFrame::new(bounds).with_command(DrawCommand::Polyline(PolylinePrimitive {
        points: vec![Point::new(0.0, 0.0)],
        stroke_width: 1.0,
        color: Color::BLACK,
    }));
    assert!(matches!(renderer.render(&polyline), Err(ChartError::InvalidData(_))));

    let sector = RenderFrame::new(bounds).with_command(DrawCommand::Sector(SectorPrimitive {
        center: Point::new(0.0, 0.0),
        radius: 10.0,
        inner_radius: 10.0,
        start_angle: 0.0,
        end_angle: 1.0,
        color: Color::BLACK,
    }));
    assert!(renderer.render(&sector).is_err());

    let empty_text = RenderFrame::new(bounds).with_command(DrawCommand::Text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        10.0,
        Color::BLACK,
        TextHAlign::Left,
    )));
    assert!(renderer.render(&empty_text).is_err());

    let unmasked = RenderFrame::new(bounds).with_command(DrawCommand::MaskedFill(
        MaskedFillPrimitive {
            area: bounds,
            mask: ArcPrimitive::disc(Point::new(50.0, 50.0), 10.0, Color::WHITE),
            glow_blur: 0.0,
            paint: Paint::Solid(Color::WHITE),
        },
    ));
    assert!(renderer.render(&unmasked).is_err());

    let invisible_arc = RenderFrame::new(bounds).with_command(DrawCommand::Arc(ArcPrimitive {
        stroke_color: None,
        fill_color: None,
        ..ArcPrimitive::disc(Point::new(50.0, 50.0), 10.0, Color::WHITE)
    }));
    assert!(renderer.render(&invisible_arc).is_err());

    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn frame_bounds_must_be_drawable() {
    let mut renderer = NullRenderer::default();
    let err = renderer
        .render(&RenderFrame::new(Rect::from_size(0.0, 10.0)))
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidBounds { .. }));
}
