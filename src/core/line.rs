use serde::{Deserialize, Serialize};

use crate::core::graph::Graph;
use crate::core::numeric::NumericValue;
use crate::core::types::{EdgeInsets, Point, Rect, content_rect};

use crate::error::ChartResult;

/// Projected line-graph sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl LinePoint {
    #[must_use]
    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineProjection {
    pub content: Rect,
    pub section_width: f64,
    pub points: Vec<LinePoint>,
}

impl LineProjection {
    /// Adjacent point pairs as segments.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment> {
        self.points
            .windows(2)
            .map(|pair| LineSegment {
                x1: pair[0].x,
                y1: pair[0].y,
                x2: pair[1].x,
                y2: pair[1].y,
            })
            .collect()
    }
}

/// Projects a graph into line points, one per section center.
///
/// Values map linearly so `min` lands on the content bottom and `max` on the
/// content top. The function is deterministic and side-effect free so both
/// rendering and tests consume the exact same geometry.
pub fn project_line<K, V: NumericValue>(
    graph: &Graph<K, V>,
    bounds: Rect,
    insets: EdgeInsets,
) -> ChartResult<LineProjection> {
    let range = graph.range();
    let span = range.checked_span()?;
    let content = content_rect(bounds, insets)?;

    if graph.is_empty() {
        return Ok(LineProjection {
            content,
            section_width: 0.0,
            points: Vec::new(),
        });
    }

    let section_width = content.width / graph.len() as f64;
    let min = range.min.to_f64();
    let points = graph
        .units()
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let value = unit.value.to_f64();
            let normalized = (value - min) / span;
            LinePoint {
                index,
                x: content.x + section_width * index as f64 + section_width / 2.0,
                y: content.bottom() - content.height * normalized,
                value,
            }
        })
        .collect();

    Ok(LineProjection {
        content,
        section_width,
        points,
    })
}
