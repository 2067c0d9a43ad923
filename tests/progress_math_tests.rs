use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use graph_views::api::{CircularProgressConfig, build_progress_frame};
use graph_views::core::progress::{
    glow_amount_for_angle, lerp_color_at, percent_text, progress_gradient_locations,
    resolve_progress_fill,
};
use graph_views::core::{
    GlowMode, ProgressFill, ProgressShape, Rect, normalize_angle, project_progress, wrap_value,
};
use graph_views::error::ChartError;
use graph_views::render::{Color, DrawCommand, LineCap, Paint, TextHAlign};

#[test]
fn angles_wrap_into_a_closed_full_turn() {
    assert_eq!(normalize_angle(-30.0), 330.0);
    assert_eq!(normalize_angle(400.0), 40.0);
    assert_eq!(normalize_angle(360.0), 360.0);
    assert_eq!(normalize_angle(720.0), 360.0);
    assert_eq!(normalize_angle(0.0), 0.0);
    assert_eq!(wrap_value(25.0, 10.0, (0.0, 10.0)), 5.0);
}

#[test]
fn glow_radius_follows_mode() {
    assert_abs_diff_eq!(
        glow_amount_for_angle(180.0, 1.0, GlowMode::Forward, 200.0),
        5.4,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        glow_amount_for_angle(90.0, 1.0, GlowMode::Reverse, 200.0),
        8.1,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        glow_amount_for_angle(10.0, 0.5, GlowMode::Constant, 200.0),
        5.4,
        epsilon = 1e-12
    );
    assert_eq!(glow_amount_for_angle(180.0, 1.0, GlowMode::NoGlow, 200.0), 0.0);
}

#[test]
fn glow_shrinks_radius_to_leave_room_for_halo() {
    let bounds = Rect::from_size(200.0, 200.0);
    let plain = project_progress(90.0, ProgressShape::default(), bounds).expect("geometry");
    assert_abs_diff_eq!(plain.radius, 100.0, epsilon = 1e-12);
    assert_eq!(plain.glow_radius, 0.0);

    let glowing = project_progress(
        180.0,
        ProgressShape {
            glow_mode: GlowMode::Forward,
            glow_amount: 1.0,
            ..ProgressShape::default()
        },
        bounds,
    )
    .expect("geometry");
    assert_abs_diff_eq!(glowing.radius, 80.0, epsilon = 1e-12);
    assert_abs_diff_eq!(glowing.glow_radius, 5.4, epsilon = 1e-12);
}

#[test]
fn geometry_uses_halved_thickness_and_screen_space_angles() {
    let geometry = project_progress(90.0, ProgressShape::default(), Rect::from_size(200.0, 200.0))
        .expect("geometry");

    assert_abs_diff_eq!(geometry.track_line_width, 25.0, epsilon = 1e-12);
    assert_abs_diff_eq!(geometry.track_radius, 87.5, epsilon = 1e-12);
    assert_abs_diff_eq!(geometry.progress_line_width, 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(geometry.progress_radius, 90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(geometry.start_angle, 1.5 * PI, epsilon = 1e-12);
    assert_abs_diff_eq!(geometry.sweep_angle, FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(geometry.end_angle(), 2.0 * PI, epsilon = 1e-12);
}

#[test]
fn counter_clockwise_rings_sweep_negatively() {
    let shape = ProgressShape {
        clockwise: false,
        ..ProgressShape::default()
    };
    let geometry =
        project_progress(450.0, shape, Rect::from_size(100.0, 100.0)).expect("geometry");
    assert_eq!(geometry.reduced_angle, 90.0);
    assert_abs_diff_eq!(geometry.sweep_angle, -FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn out_of_range_thickness_is_clamped() {
    let shape = ProgressShape {
        progress_thickness: 3.0,
        track_thickness: -1.0,
        ..ProgressShape::default()
    };
    let geometry =
        project_progress(10.0, shape, Rect::from_size(100.0, 100.0)).expect("geometry");
    assert_abs_diff_eq!(geometry.progress_line_width, 25.0, epsilon = 1e-12);
    assert_eq!(geometry.track_line_width, 0.0);
}

#[test]
fn zero_sized_bounds_are_rejected() {
    let err = project_progress(90.0, ProgressShape::default(), Rect::from_size(0.0, 100.0))
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidBounds { .. }));
}

#[test]
fn lerp_colors_pick_the_segment_under_progress() {
    let pair = [Color::BLACK, Color::WHITE];
    assert_eq!(lerp_color_at(&pair, 0.0), Color::BLACK);
    assert_eq!(lerp_color_at(&pair, 1.0), Color::WHITE);
    assert_eq!(lerp_color_at(&pair, 0.5), Color::rgb(0.5, 0.5, 0.5));

    let three = [Color::WHITE, Color::BLACK, Color::CYAN];
    assert_eq!(lerp_color_at(&three, 0.75), Color::rgb(0.0, 0.5, 0.5));
    assert_eq!(lerp_color_at(&three, 0.5), Color::BLACK);
}

#[test]
fn fill_priority_is_empty_single_lerp_then_gradient() {
    let bounds = Rect::from_size(200.0, 200.0);
    let geometry = project_progress(180.0, ProgressShape::default(), bounds).expect("geometry");
    let pair = [Color::BLACK, Color::WHITE];

    assert_eq!(
        resolve_progress_fill(&[], true, 0.0, 180.0, &geometry, true, bounds),
        ProgressFill::Solid(Color::WHITE)
    );
    assert_eq!(
        resolve_progress_fill(&[Color::CYAN], true, 0.0, 180.0, &geometry, true, bounds),
        ProgressFill::Solid(Color::CYAN)
    );
    assert_eq!(
        resolve_progress_fill(&pair, true, 0.0, 180.0, &geometry, true, bounds),
        ProgressFill::Lerp(Color::rgb(0.5, 0.5, 0.5))
    );
    assert!(matches!(
        resolve_progress_fill(&pair, false, 0.0, 180.0, &geometry, true, bounds),
        ProgressFill::Gradient(_)
    ));
}

#[test]
fn gradient_locations_land_on_stroke_edges() {
    let geometry = project_progress(90.0, ProgressShape::default(), Rect::from_size(200.0, 200.0))
        .expect("geometry");
    let locations = progress_gradient_locations(2, 200.0, &geometry);
    assert_eq!(locations.len(), 2);
    assert_abs_diff_eq!(locations[0], 0.05, epsilon = 1e-12);
    assert_abs_diff_eq!(locations[1], 0.95, epsilon = 1e-12);

    let three = progress_gradient_locations(3, 200.0, &geometry);
    assert_abs_diff_eq!(three[1], 0.5, epsilon = 1e-12);
    assert!(progress_gradient_locations(0, 200.0, &geometry).is_empty());
}

#[test]
fn unrotated_gradient_runs_top_to_bottom() {
    let bounds = Rect::from_size(200.0, 200.0);
    let geometry = project_progress(90.0, ProgressShape::default(), bounds).expect("geometry");
    let ProgressFill::Gradient(gradient) = resolve_progress_fill(
        &[Color::WHITE, Color::CYAN],
        false,
        0.0,
        90.0,
        &geometry,
        true,
        bounds,
    ) else {
        panic!("two colors without lerp should give a gradient");
    };

    assert_abs_diff_eq!(gradient.start.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(gradient.start.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(gradient.end.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(gradient.end.y, 200.0, epsilon = 1e-9);
    assert_eq!(gradient.stops.len(), 2);
}

#[test]
fn rotating_gradient_turns_with_the_angle() {
    let bounds = Rect::from_size(200.0, 200.0);
    let geometry = project_progress(90.0, ProgressShape::default(), bounds).expect("geometry");
    let ProgressFill::Gradient(gradient) = resolve_progress_fill(
        &[Color::WHITE, Color::CYAN],
        false,
        1.0,
        90.0,
        &geometry,
        true,
        bounds,
    ) else {
        panic!("expected gradient fill");
    };

    // A quarter turn moves the axis start from the top edge to the right edge.
    assert_abs_diff_eq!(gradient.start.x, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(gradient.start.y, 100.0, epsilon = 1e-9);
}

#[test]
fn percent_text_rounds_and_clamps() {
    assert_eq!(percent_text(90.0), "25%");
    assert_eq!(percent_text(-10.0), "0%");
    assert_eq!(percent_text(400.0), "100%");
    assert_eq!(percent_text(179.0), "50%");
}

#[test]
fn default_progress_frame_paints_text_track_then_masked_fill() {
    let bounds = Rect::from_size(200.0, 200.0);
    let frame = build_progress_frame(90.0, &CircularProgressConfig::default(), bounds, None)
        .expect("frame");
    assert_eq!(frame.commands.len(), 3);

    let DrawCommand::Text(text) = &frame.commands[0] else {
        panic!("text must be drawn first");
    };
    assert_eq!(text.text, "25%");
    assert_eq!(text.color, Color::WHITE);
    assert_eq!(text.h_align, TextHAlign::Center);
    assert_abs_diff_eq!(text.font_size_px, 40.0, epsilon = 1e-12);
    assert_abs_diff_eq!(text.y, 80.0, epsilon = 1e-12);

    let DrawCommand::Arc(track) = &frame.commands[1] else {
        panic!("track must follow the text");
    };
    assert_abs_diff_eq!(track.radius, 87.5, epsilon = 1e-12);
    assert_abs_diff_eq!(track.stroke_width, 25.0, epsilon = 1e-12);
    assert_eq!(track.stroke_color, Some(Color::BLACK));
    assert_eq!(track.fill_color, None);

    let DrawCommand::MaskedFill(fill) = &frame.commands[2] else {
        panic!("progress fill must be drawn last");
    };
    assert_eq!(fill.area, bounds);
    assert_abs_diff_eq!(fill.mask.radius, 90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fill.mask.stroke_width, 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(fill.mask.start_angle, 1.5 * PI, epsilon = 1e-12);
    assert_abs_diff_eq!(fill.mask.sweep_angle, FRAC_PI_2, epsilon = 1e-12);
    assert_eq!(fill.mask.line_cap, LineCap::Round);
    assert_eq!(fill.glow_blur, 0.0);
    assert!(matches!(fill.paint, Paint::LinearGradient(_)));
}

#[test]
fn custom_formatter_and_inside_fill_are_honored() {
    let config = CircularProgressConfig {
        progress_inside_fill_color: Some(Color::CYAN),
        track_thickness: 0.0,
        rounded_corners: false,
        font_size: Some(12.0),
        text_color: Some(Color::BLACK),
        ..CircularProgressConfig::default().with_colors(vec![Color::WHITE])
    };
    let formatter: graph_views::api::ProgressTextFormatter =
        std::sync::Arc::new(|angle: f64| format!("{angle:.1} deg"));
    let frame = build_progress_frame(45.0, &config, Rect::from_size(100.0, 100.0), Some(&formatter))
        .expect("frame");

    let text = frame.texts().next().expect("text");
    assert_eq!(text.text, "45.0 deg");
    assert_eq!(text.font_size_px, 12.0);
    assert_eq!(text.color, Color::BLACK);

    let track = frame.arcs().next().expect("inside fill arc");
    assert_eq!(track.stroke_color, None);
    assert_eq!(track.fill_color, Some(Color::CYAN));

    let fill = frame.masked_fills().next().expect("masked fill");
    assert_eq!(fill.mask.line_cap, LineCap::Butt);
    assert_eq!(fill.paint, Paint::Solid(Color::WHITE));
}

#[test]
fn empty_formatter_output_skips_text() {
    let formatter: graph_views::api::ProgressTextFormatter = std::sync::Arc::new(|_: f64| String::new());
    let frame = build_progress_frame(
        45.0,
        &CircularProgressConfig::default(),
        Rect::from_size(100.0, 100.0),
        Some(&formatter),
    )
    .expect("frame");
    assert_eq!(frame.texts().count(), 0);
    assert_eq!(frame.commands.len(), 2);
}
