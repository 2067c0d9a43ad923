use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{BarLayout, EdgeInsets, GlowMode, GraphKind, ProgressShape};
use crate::error::{ChartError, ChartResult};
use crate::render::{BarFill, Color, palette};

/// Style of a bar graph view.
///
/// Serializable so host applications can load styles from JSON; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGraphViewConfig {
    #[serde(default)]
    pub fill: BarFill,
    #[serde(default = "palette::bar_text")]
    pub text_color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_bar_width_scale")]
    pub bar_width_scale: f64,
    /// Fixed bar width in pixels; overrides `bar_width_scale`.
    #[serde(default)]
    pub bar_width: Option<f64>,
    #[serde(default = "default_true")]
    pub zero_line_visible: bool,
    /// Defaults to `text_color` when unset.
    #[serde(default)]
    pub zero_line_color: Option<Color>,
    #[serde(default = "default_zero_line_width")]
    pub zero_line_width: f64,
    #[serde(default = "default_true")]
    pub text_visible: bool,
    #[serde(default)]
    pub rounded_corners: bool,
    #[serde(default)]
    pub content_insets: EdgeInsets,
}

impl Default for BarGraphViewConfig {
    fn default() -> Self {
        Self {
            fill: BarFill::default(),
            text_color: palette::bar_text(),
            font_size: default_font_size(),
            bar_width_scale: default_bar_width_scale(),
            bar_width: None,
            zero_line_visible: true,
            zero_line_color: None,
            zero_line_width: default_zero_line_width(),
            text_visible: true,
            rounded_corners: false,
            content_insets: EdgeInsets::ZERO,
        }
    }
}

impl BarGraphViewConfig {
    #[must_use]
    pub fn with_fill(mut self, fill: BarFill) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = Some(bar_width);
        self
    }

    #[must_use]
    pub fn with_content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self
    }

    #[must_use]
    pub fn layout(&self) -> BarLayout {
        BarLayout {
            bar_width_scale: self.bar_width_scale,
            bar_width: self.bar_width,
            insets: self.content_insets,
        }
    }

    #[must_use]
    pub fn resolved_zero_line_color(&self) -> Color {
        self.zero_line_color.unwrap_or(self.text_color)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.fill.validate()?;
        self.text_color.validate()?;
        self.resolved_zero_line_color().validate()?;
        validate_font_size(self.font_size)?;
        if !self.zero_line_width.is_finite() || self.zero_line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "zero line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Style of a line graph view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGraphViewConfig {
    #[serde(default = "palette::line")]
    pub line_color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Diameter of the dot drawn on every point; `0` hides dots.
    #[serde(default = "default_dot_diameter")]
    pub dot_diameter: f64,
    /// Defaults to `line_color` when unset.
    #[serde(default)]
    pub dot_color: Option<Color>,
    #[serde(default = "palette::line_text")]
    pub text_color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_true")]
    pub text_visible: bool,
    #[serde(default)]
    pub content_insets: EdgeInsets,
}

impl Default for LineGraphViewConfig {
    fn default() -> Self {
        Self {
            line_color: palette::line(),
            line_width: default_line_width(),
            dot_diameter: default_dot_diameter(),
            dot_color: None,
            text_color: palette::line_text(),
            font_size: default_font_size(),
            text_visible: true,
            content_insets: EdgeInsets::ZERO,
        }
    }
}

impl LineGraphViewConfig {
    #[must_use]
    pub fn resolved_dot_color(&self) -> Color {
        self.dot_color.unwrap_or(self.line_color)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.line_color.validate()?;
        self.resolved_dot_color().validate()?;
        self.text_color.validate()?;
        validate_font_size(self.font_size)?;
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.dot_diameter.is_finite() || self.dot_diameter < 0.0 {
            return Err(ChartError::InvalidData(
                "dot diameter must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Style of a pie graph view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGraphViewConfig {
    /// Sector colors in unit order, cycled when shorter than the unit count.
    /// `None` or an empty list generates a palette.
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    #[serde(default = "palette::pie_text")]
    pub text_color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub donut: bool,
    #[serde(default)]
    pub content_insets: EdgeInsets,
    /// Seed for the generated palette; unset shuffles differently each time.
    #[serde(default)]
    pub color_seed: Option<u64>,
}

impl Default for PieGraphViewConfig {
    fn default() -> Self {
        Self {
            colors: None,
            text_color: palette::pie_text(),
            font_size: default_font_size(),
            donut: false,
            content_insets: EdgeInsets::ZERO,
            color_seed: None,
        }
    }
}

impl PieGraphViewConfig {
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_donut(mut self, donut: bool) -> Self {
        self.donut = donut;
        self
    }

    #[must_use]
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    /// Caller palette when present and non-empty.
    #[must_use]
    pub fn explicit_colors(&self) -> Option<&[Color]> {
        self.colors.as_deref().filter(|colors| !colors.is_empty())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(colors) = &self.colors {
            colors.iter().try_for_each(|color| color.validate())?;
        }
        self.text_color.validate()?;
        validate_font_size(self.font_size)
    }
}

/// Style of a circular progress view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularProgressConfig {
    /// Degrees; `-90` starts at 12 o'clock.
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,
    #[serde(default = "default_true")]
    pub clockwise: bool,
    #[serde(default = "default_true")]
    pub rounded_corners: bool,
    #[serde(default)]
    pub lerp_color_mode: bool,
    #[serde(default)]
    pub gradient_rotate_speed: f64,
    /// In `[0, 1]`; out-of-range values are clamped when drawing.
    #[serde(default)]
    pub glow_amount: f64,
    #[serde(default)]
    pub glow_mode: GlowMode,
    #[serde(default = "default_progress_thickness")]
    pub progress_thickness: f64,
    #[serde(default = "default_track_thickness")]
    pub track_thickness: f64,
    #[serde(default = "default_track_color")]
    pub track_color: Color,
    #[serde(default)]
    pub progress_inside_fill_color: Option<Color>,
    #[serde(default = "default_progress_colors")]
    pub colors: Vec<Color>,
    /// Defaults to the first progress color, then black.
    #[serde(default)]
    pub text_color: Option<Color>,
    /// Defaults to a fifth of the view height.
    #[serde(default)]
    pub font_size: Option<f64>,
}

impl Default for CircularProgressConfig {
    fn default() -> Self {
        Self {
            start_angle: default_start_angle(),
            clockwise: true,
            rounded_corners: true,
            lerp_color_mode: false,
            gradient_rotate_speed: 0.0,
            glow_amount: 0.0,
            glow_mode: GlowMode::NoGlow,
            progress_thickness: default_progress_thickness(),
            track_thickness: default_track_thickness(),
            track_color: default_track_color(),
            progress_inside_fill_color: None,
            colors: default_progress_colors(),
            text_color: None,
            font_size: None,
        }
    }
}

impl CircularProgressConfig {
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_glow(mut self, glow_mode: GlowMode, glow_amount: f64) -> Self {
        self.glow_mode = glow_mode;
        self.glow_amount = glow_amount;
        self
    }

    #[must_use]
    pub fn shape(&self) -> ProgressShape {
        ProgressShape {
            start_angle: self.start_angle,
            clockwise: self.clockwise,
            progress_thickness: self.progress_thickness,
            track_thickness: self.track_thickness,
            glow_mode: self.glow_mode,
            glow_amount: self.glow_amount,
        }
    }

    #[must_use]
    pub fn resolved_text_color(&self) -> Color {
        self.text_color
            .or_else(|| self.colors.first().copied())
            .unwrap_or(Color::BLACK)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("start angle", self.start_angle),
            ("gradient rotate speed", self.gradient_rotate_speed),
            ("glow amount", self.glow_amount),
            ("progress thickness", self.progress_thickness),
            ("track thickness", self.track_thickness),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("{name} must be finite")));
            }
        }
        self.track_color.validate()?;
        if let Some(color) = self.progress_inside_fill_color {
            color.validate()?;
        }
        self.colors.iter().try_for_each(|color| color.validate())?;
        self.resolved_text_color().validate()?;
        if let Some(font_size) = self.font_size {
            validate_font_size(font_size)?;
        }
        Ok(())
    }
}

/// Style for a graph view, one variant per graph kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphStyle {
    Bar(BarGraphViewConfig),
    Line(LineGraphViewConfig),
    Pie(PieGraphViewConfig),
}

impl GraphStyle {
    /// Default style for `kind`.
    #[must_use]
    pub fn default_for(kind: GraphKind) -> Self {
        match kind {
            GraphKind::Bar => Self::Bar(BarGraphViewConfig::default()),
            GraphKind::Line => Self::Line(LineGraphViewConfig::default()),
            GraphKind::Pie => Self::Pie(PieGraphViewConfig::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> GraphKind {
        match self {
            Self::Bar(_) => GraphKind::Bar,
            Self::Line(_) => GraphKind::Line,
            Self::Pie(_) => GraphKind::Pie,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Bar(config) => config.validate(),
            Self::Line(config) => config.validate(),
            Self::Pie(config) => config.validate(),
        }
    }
}

impl From<BarGraphViewConfig> for GraphStyle {
    fn from(config: BarGraphViewConfig) -> Self {
        Self::Bar(config)
    }
}

impl From<LineGraphViewConfig> for GraphStyle {
    fn from(config: LineGraphViewConfig) -> Self {
        Self::Line(config)
    }
}

impl From<PieGraphViewConfig> for GraphStyle {
    fn from(config: PieGraphViewConfig) -> Self {
        Self::Pie(config)
    }
}

/// JSON persistence shared by the view configs.
pub trait JsonConfig: Serialize + DeserializeOwned {
    /// Parses a config; missing fields take their defaults.
    fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse config json: {e}")))
    }

    fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize config json: {e}"))
        })
    }
}

impl JsonConfig for BarGraphViewConfig {}
impl JsonConfig for LineGraphViewConfig {}
impl JsonConfig for PieGraphViewConfig {}
impl JsonConfig for CircularProgressConfig {}
impl JsonConfig for GraphStyle {}

fn validate_font_size(font_size: f64) -> ChartResult<()> {
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(ChartError::InvalidData(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_font_size() -> f64 {
    10.0
}

fn default_bar_width_scale() -> f64 {
    0.8
}

fn default_zero_line_width() -> f64 {
    1.0
}

fn default_line_width() -> f64 {
    2.0
}

fn default_dot_diameter() -> f64 {
    6.0
}

fn default_start_angle() -> f64 {
    -90.0
}

fn default_progress_thickness() -> f64 {
    0.4
}

fn default_track_thickness() -> f64 {
    0.5
}

fn default_track_color() -> Color {
    Color::BLACK
}

fn default_progress_colors() -> Vec<Color> {
    vec![Color::WHITE, Color::CYAN]
}
