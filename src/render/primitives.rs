use smallvec::SmallVec;

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Color stop at `offset` in `[0, 1]` along a gradient axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Stop offsets for `count` evenly spaced colors: `i / (count - 1)`.
///
/// A single color sits at `0.0`.
#[must_use]
pub fn gradient_locations(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count).map(|index| index as f64 / last).collect()
        }
    }
}

/// Linear gradient between two points in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(start: Point, end: Point, stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Self {
            start,
            end,
            stops: stops.into_iter().collect(),
        }
    }

    /// Gradient whose colors are spread evenly from `start` to `end`.
    #[must_use]
    pub fn evenly_spaced(start: Point, end: Point, colors: &[Color]) -> Self {
        let stops = gradient_locations(colors.len())
            .into_iter()
            .zip(colors)
            .map(|(offset, color)| GradientStop {
                offset,
                color: *color,
            });
        Self::new(start, end, stops)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ChartError::InvalidData(
                "gradient axis must be finite".to_owned(),
            ));
        }
        if self.stops.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient needs at least one stop".to_owned(),
            ));
        }
        for stop in &self.stops {
            if !stop.offset.is_finite() {
                return Err(ChartError::InvalidData(
                    "gradient stop offset must be finite".to_owned(),
                ));
            }
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Source used to fill or stroke a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient(gradient) => gradient.validate(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Filled rectangle, optionally with rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub corner_radius: f64,
    pub paint: Paint,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self {
            rect,
            corner_radius: 0.0,
            paint,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.rect.is_finite() || self.rect.width < 0.0 || self.rect.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect must be finite with non-negative size".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.paint.validate()
    }
}

/// One line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Open polyline stroked with round joins.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<Point>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polyline points must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Pie slice: a wedge from the center, or an annular sector when
/// `inner_radius > 0`. Angles are radians in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorPrimitive {
    pub center: Point,
    pub radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color,
}

impl SectorPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() || !self.start_angle.is_finite() || !self.end_angle.is_finite()
        {
            return Err(ChartError::InvalidData(
                "sector geometry must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite()
            || self.radius <= 0.0
            || !self.inner_radius.is_finite()
            || self.inner_radius < 0.0
            || self.inner_radius >= self.radius
        {
            return Err(ChartError::InvalidData(
                "sector radii must satisfy 0 <= inner < outer".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Circular arc from `start_angle` sweeping `sweep_angle` radians; positive
/// sweeps run clockwise on screen.
///
/// The arc is stroked when `stroke_color` is set and its inside filled when
/// `fill_color` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub stroke_width: f64,
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub line_cap: LineCap,
}

impl ArcPrimitive {
    /// Filled disc, used for line-graph dots.
    #[must_use]
    pub fn disc(center: Point, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            start_angle: 0.0,
            sweep_angle: std::f64::consts::TAU,
            stroke_width: 0.0,
            stroke_color: None,
            fill_color: Some(color),
            line_cap: LineCap::Butt,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite()
            || !self.start_angle.is_finite()
            || !self.sweep_angle.is_finite()
        {
            return Err(ChartError::InvalidData(
                "arc geometry must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "arc radius must be finite and >= 0".to_owned(),
            ));
        }
        match (self.stroke_color, self.fill_color) {
            (None, None) => Err(ChartError::InvalidData(
                "arc must be stroked or filled".to_owned(),
            )),
            (stroke, fill) => {
                if let Some(color) = stroke {
                    validate_stroke_width(self.stroke_width)?;
                    color.validate()?;
                }
                if let Some(color) = fill {
                    color.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// One label in pixel space. `y` is the top edge of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Paint clipped through the coverage of a stroked arc.
///
/// Backends draw `mask` (plus a `glow_blur` halo when positive) into an
/// intermediate surface, then composite `paint` over `area` through it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedFillPrimitive {
    pub area: Rect,
    pub mask: ArcPrimitive,
    pub glow_blur: f64,
    pub paint: Paint,
}

impl MaskedFillPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.area.is_finite() || self.area.width <= 0.0 || self.area.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "masked fill area must be finite with positive size".to_owned(),
            ));
        }
        if self.mask.stroke_color.is_none() {
            return Err(ChartError::InvalidData(
                "masked fill requires a stroked arc mask".to_owned(),
            ));
        }
        self.mask.validate()?;
        if !self.glow_blur.is_finite() || self.glow_blur < 0.0 {
            return Err(ChartError::InvalidData(
                "glow blur must be finite and >= 0".to_owned(),
            ));
        }
        self.paint.validate()
    }
}

fn validate_stroke_width(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
