//! Circular progress math: angle wrapping, glow, arc geometry and fill
//! resolution.
//!
//! Angles the caller supplies are degrees (`0..=360` is `0..=100%`); angles in
//! the produced geometry are radians in screen space, where y grows downward
//! and positive sweeps run clockwise.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::types::{Point, Rect};
use crate::error::ChartResult;
use crate::render::{Color, GradientStop, LinearGradient};

/// Degrees in a full turn; also the angle that represents 100%.
pub const FULL_TURN_DEGREES: f64 = 360.0;
/// Blur radius per pixel of view size and degree of glow.
pub const SIZE_TO_GLOW_RATIO: f64 = 0.00015;
/// Radius factor leaving room for the glow halo.
pub const GLOW_PADDING_RADIUS_FACTOR: f64 = 0.8;

/// Policy controlling how the glow blur follows the progress angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlowMode {
    /// Grows with the angle.
    Forward,
    /// Shrinks as the angle grows.
    Reverse,
    /// Fixed at the full-turn amount.
    Constant,
    #[default]
    NoGlow,
}

/// Wraps `value` into the closed interval `min_max` by whole `range` steps.
///
/// Values already inside are returned untouched, so `360` stays `360` for a
/// `(0, 360)` interval while `400` becomes `40` and `-30` becomes `330`.
/// Non-finite input collapses to the lower bound.
#[must_use]
pub fn wrap_value(value: f64, range: f64, min_max: (f64, f64)) -> f64 {
    let (min, max) = min_max;
    debug_assert!(
        range.abs() <= (max - min).abs(),
        "wrap range must not exceed the interval"
    );
    if !value.is_finite() || !range.is_finite() || range == 0.0 {
        return min;
    }
    if value >= min && value <= max {
        return value;
    }
    let wrapped = min + (value - min).rem_euclid(range.abs());
    if value > max && wrapped == min {
        // Positive multiples of the range stop at the upper bound, matching
        // repeated subtraction.
        return max;
    }
    wrapped
}

/// `wrap_value` over a full turn.
#[must_use]
pub fn normalize_angle(degrees: f64) -> f64 {
    wrap_value(degrees, FULL_TURN_DEGREES, (0.0, FULL_TURN_DEGREES))
}

#[must_use]
pub fn clamp(value: f64, min_max: (f64, f64)) -> f64 {
    let (min, max) = min_max;
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Position of `value` within `min_max` as a fraction.
#[must_use]
pub fn inverse_lerp(value: f64, min_max: (f64, f64)) -> f64 {
    (value - min_max.0) / (min_max.1 - min_max.0)
}

#[must_use]
pub fn lerp(t: f64, min_max: (f64, f64)) -> f64 {
    (min_max.1 - min_max.0) * t + min_max.0
}

/// Blur radius for the progress arc at `angle` degrees.
#[must_use]
pub fn glow_amount_for_angle(angle: f64, glow_amount: f64, glow_mode: GlowMode, size: f64) -> f64 {
    let degrees = match glow_mode {
        GlowMode::Forward => angle,
        GlowMode::Reverse => FULL_TURN_DEGREES - angle,
        GlowMode::Constant => FULL_TURN_DEGREES,
        GlowMode::NoGlow => return 0.0,
    };
    degrees * size * SIZE_TO_GLOW_RATIO * glow_amount
}

/// Caller-facing shape parameters of a circular progress ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressShape {
    /// Degrees; `-90` starts at 12 o'clock.
    pub start_angle: f64,
    pub clockwise: bool,
    /// Fraction of the radius in `[0, 1]`, halved before use.
    pub progress_thickness: f64,
    /// Fraction of the radius in `[0, 1]`, halved before use.
    pub track_thickness: f64,
    pub glow_mode: GlowMode,
    /// In `[0, 1]`.
    pub glow_amount: f64,
}

impl Default for ProgressShape {
    fn default() -> Self {
        Self {
            start_angle: -90.0,
            clockwise: true,
            progress_thickness: 0.4,
            track_thickness: 0.5,
            glow_mode: GlowMode::NoGlow,
            glow_amount: 0.0,
        }
    }
}

/// Geometry of one progress draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressGeometry {
    pub center: Point,
    pub radius: f64,
    pub track_line_width: f64,
    pub progress_line_width: f64,
    /// Stroke center radius of the full-circle track.
    pub track_radius: f64,
    /// Stroke center radius of the progress arc.
    pub progress_radius: f64,
    /// Screen-space start of the progress arc, radians.
    pub start_angle: f64,
    /// Signed sweep, radians; positive when clockwise.
    pub sweep_angle: f64,
    pub glow_radius: f64,
    /// Input angle wrapped into `[0, 360]` degrees.
    pub reduced_angle: f64,
}

impl ProgressGeometry {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

/// Maps the current angle and ring shape into drawable geometry.
pub fn project_progress(
    angle: f64,
    shape: ProgressShape,
    bounds: Rect,
) -> ChartResult<ProgressGeometry> {
    bounds.validate_drawable()?;

    let size = bounds.width;
    let radius_factor = if shape.glow_mode == GlowMode::NoGlow {
        1.0
    } else {
        GLOW_PADDING_RADIUS_FACTOR
    };
    let radius = bounds.width.min(bounds.height) / 2.0 * radius_factor;

    let progress_thickness = clamp(finite_or_zero(shape.progress_thickness), (0.0, 1.0)) / 2.0;
    let track_thickness = clamp(finite_or_zero(shape.track_thickness), (0.0, 1.0)) / 2.0;
    let glow_amount = clamp(finite_or_zero(shape.glow_amount), (0.0, 1.0));

    let track_line_width = radius * track_thickness;
    let progress_line_width = radius * progress_thickness;

    let reduced_angle = normalize_angle(angle);
    let start_degrees = normalize_angle(shape.start_angle);
    let sweep_degrees = if shape.clockwise {
        reduced_angle
    } else {
        -reduced_angle
    };

    Ok(ProgressGeometry {
        center: bounds.center(),
        radius,
        track_line_width,
        progress_line_width,
        track_radius: radius - track_line_width / 2.0,
        progress_radius: radius - progress_line_width / 2.0,
        start_angle: start_degrees.to_radians(),
        sweep_angle: sweep_degrees.to_radians(),
        glow_radius: glow_amount_for_angle(reduced_angle, glow_amount, shape.glow_mode, size),
        reduced_angle,
    })
}

/// Fill applied through the progress arc mask.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressFill {
    Solid(Color),
    /// Color blended between neighbouring stops at the current progress.
    Lerp(Color),
    Gradient(LinearGradient),
}

/// Picks the fill mode: lerp when enabled with two or more colors, otherwise
/// a rotated gradient for two or more colors, otherwise a solid color (white
/// when no colors are configured).
#[must_use]
pub fn resolve_progress_fill(
    colors: &[Color],
    lerp_color_mode: bool,
    gradient_rotate_speed: f64,
    angle: f64,
    geometry: &ProgressGeometry,
    clockwise: bool,
    bounds: Rect,
) -> ProgressFill {
    match colors {
        [] => ProgressFill::Solid(Color::WHITE),
        [color] => ProgressFill::Solid(*color),
        _ if lerp_color_mode => ProgressFill::Lerp(lerp_color_at(
            colors,
            geometry.reduced_angle / FULL_TURN_DEGREES,
        )),
        _ => ProgressFill::Gradient(rotated_gradient(
            colors,
            gradient_rotate_speed,
            angle,
            geometry,
            clockwise,
            bounds,
        )),
    }
}

/// Piecewise color at `t` in `[0, 1]` across evenly spaced `colors`.
#[must_use]
pub fn lerp_color_at(colors: &[Color], t: f64) -> Color {
    match colors {
        [] => Color::WHITE,
        [color] => *color,
        _ => {
            let steps = colors.len() - 1;
            let step = 1.0 / steps as f64;
            let mut resolved = colors[steps];
            for index in 1..=steps {
                let upper = index as f64 * step;
                if t <= upper || index == steps {
                    let local = inverse_lerp(t, ((index - 1) as f64 * step, upper));
                    resolved = colors[index - 1].lerp(colors[index], local);
                    break;
                }
            }
            resolved
        }
    }
}

/// Linear gradient across the view, rotated by `rotate_speed * angle`.
///
/// Stops are placed so the first and last colors land on the outer edges of
/// the progress stroke.
#[must_use]
pub fn rotated_gradient(
    colors: &[Color],
    rotate_speed: f64,
    angle: f64,
    geometry: &ProgressGeometry,
    clockwise: bool,
    bounds: Rect,
) -> LinearGradient {
    let half = bounds.width / 2.0;
    let speed = if clockwise { rotate_speed } else { -rotate_speed };
    let axis_angle = (speed * angle - 90.0).to_radians();
    let opposite = if axis_angle > PI {
        axis_angle - PI
    } else {
        axis_angle + PI
    };
    let start = Point::new(
        bounds.x + axis_angle.cos() * half + half,
        bounds.y + axis_angle.sin() * half + half,
    );
    let end = Point::new(
        bounds.x + opposite.cos() * half + half,
        bounds.y + opposite.sin() * half + half,
    );

    let offsets = progress_gradient_locations(colors.len(), bounds.width, geometry);
    LinearGradient::new(
        start,
        end,
        offsets
            .into_iter()
            .zip(colors)
            .map(|(offset, color)| GradientStop {
                offset,
                color: *color,
            }),
    )
}

/// Gradient stop offsets spanning the progress stroke across `gradient_width`.
#[must_use]
pub fn progress_gradient_locations(
    color_count: usize,
    gradient_width: f64,
    geometry: &ProgressGeometry,
) -> Vec<f64> {
    if color_count == 0 || gradient_width == 0.0 {
        return Vec::new();
    }
    let first = gradient_width / 2.0 - (geometry.radius - geometry.progress_line_width / 2.0);
    if color_count == 1 {
        return vec![first / gradient_width];
    }
    let increment = (gradient_width - 2.0 * first) / (color_count - 1) as f64;
    (0..color_count)
        .map(|index| (first + index as f64 * increment) / gradient_width)
        .collect()
}

/// Default center text: the rounded percentage for `angle` degrees.
#[must_use]
pub fn percent_text(angle: f64) -> String {
    let percent = if angle <= 0.0 {
        0.0
    } else if angle >= FULL_TURN_DEGREES {
        100.0
    } else {
        angle / 3.6
    };
    format!("{percent:.0}%")
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
