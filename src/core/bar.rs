use serde::{Deserialize, Serialize};

use crate::core::graph::Graph;
use crate::core::numeric::NumericValue;
use crate::core::types::{EdgeInsets, Rect, content_rect};
use crate::error::{ChartError, ChartResult};

/// Gap between a bar end and its label.
pub const BAR_LABEL_MARGIN_PX: f64 = 3.0;

/// Width policy and insets used to lay out bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    /// Fraction of the section width a bar occupies.
    pub bar_width_scale: f64,
    /// Fixed bar width overriding `bar_width_scale`.
    pub bar_width: Option<f64>,
    pub insets: EdgeInsets,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            bar_width_scale: 0.8,
            bar_width: None,
            insets: EdgeInsets::ZERO,
        }
    }
}

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Unit value converted to `f64`.
    pub value: f64,
    pub is_negative: bool,
}

impl BarGeometry {
    #[must_use]
    pub fn rect(self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Height with the sign of the value: positive bars grow up from the
    /// baseline, negative ones down.
    #[must_use]
    pub fn signed_height(self) -> f64 {
        if self.is_negative {
            -self.height
        } else {
            self.height
        }
    }
}

/// Bars for every unit plus the shared layout values they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarProjection {
    pub content: Rect,
    pub section_width: f64,
    pub bar_width: f64,
    /// Pixel offset of the zero baseline relative to the content bottom.
    pub zero_offset: f64,
    pub bars: Vec<BarGeometry>,
}

impl BarProjection {
    /// Y coordinate of the zero baseline.
    #[must_use]
    pub fn zero_line_y(&self) -> f64 {
        self.content.bottom() + self.zero_offset
    }

    /// Horizontal extent of the section hosting bar `index`.
    #[must_use]
    pub fn section_x(&self, index: usize) -> f64 {
        self.content.x + self.section_width * index as f64
    }

    /// Label box for `bar`: the full section width, `label_height` tall, just
    /// above a positive bar or just below a negative one.
    #[must_use]
    pub fn label_rect(&self, bar: &BarGeometry, label_height: f64) -> Rect {
        let y = if bar.is_negative {
            bar.y + bar.height + BAR_LABEL_MARGIN_PX
        } else {
            bar.y - label_height - BAR_LABEL_MARGIN_PX
        };
        Rect::new(self.section_x(bar.index), y, self.section_width, label_height)
    }
}

/// Projects a graph into bar rectangles.
///
/// Each unit owns an equal section of the content width; the bar is centered
/// in it. Heights are `contentHeight * |value| / (max - min)` measured from
/// the zero baseline, which sits `contentHeight / (max - min) * min` below the
/// content bottom (above it for negative minimums).
pub fn project_bars<K, V: NumericValue>(
    graph: &Graph<K, V>,
    bounds: Rect,
    layout: BarLayout,
) -> ChartResult<BarProjection> {
    let range = graph.range();
    let span = range.checked_span()?;
    let content = content_rect(bounds, layout.insets)?;

    if let Some(width) = layout.bar_width {
        if !width.is_finite() || width < 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and >= 0".to_owned(),
            ));
        }
    }
    if !layout.bar_width_scale.is_finite() || layout.bar_width_scale < 0.0 {
        return Err(ChartError::InvalidData(
            "bar width scale must be finite and >= 0".to_owned(),
        ));
    }

    let zero_offset = content.height / span * range.min.to_f64();
    if graph.is_empty() {
        return Ok(BarProjection {
            content,
            section_width: 0.0,
            bar_width: 0.0,
            zero_offset,
            bars: Vec::new(),
        });
    }

    let section_width = content.width / graph.len() as f64;
    let bar_width = layout
        .bar_width
        .unwrap_or(section_width * layout.bar_width_scale);

    let bars = graph
        .units()
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let value = unit.value.to_f64();
            let is_negative = unit.value < V::zero();
            let height = content.height * value.abs() / span;
            let x = content.x + section_width * index as f64 + (section_width - bar_width) / 2.0;
            let top = if is_negative {
                content.height
            } else {
                content.height - height
            };
            let y = top + zero_offset + content.y;
            BarGeometry {
                index,
                x,
                y,
                width: bar_width,
                height,
                value,
                is_negative,
            }
        })
        .collect();

    Ok(BarProjection {
        content,
        section_width,
        bar_width,
        zero_offset,
        bars,
    })
}
