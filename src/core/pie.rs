use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::graph::Graph;
use crate::core::numeric::NumericValue;
use crate::core::types::{EdgeInsets, Point, Rect, content_rect};
use crate::error::ChartResult;

/// Angle of the first sector edge: 12 o'clock.
pub const PIE_START_ANGLE: f64 = -FRAC_PI_2;
/// Inner radius of a donut as a fraction of the outer radius.
pub const DONUT_RADIUS_RATIO: f64 = 0.8;
/// Distance of label anchors from the center as a fraction of the radius.
pub const LABEL_RADIUS_RATIO: f64 = 0.75;

/// One pie slice. Angles are radians in screen space (clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSector {
    pub index: usize,
    pub center: Point,
    pub radius: f64,
    /// Zero unless the pie is drawn as a donut.
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the non-negative total in `[0, 1]`.
    pub percentage: f64,
    pub label_anchor: Point,
}

impl PieSector {
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn sweep_degrees(self) -> f64 {
        self.sweep().to_degrees()
    }

    #[must_use]
    pub fn mid_angle(self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieProjection {
    pub center: Point,
    pub radius: f64,
    pub inner_radius: f64,
    /// Sum of the values after clamping negatives to zero.
    pub total: f64,
    pub sectors: Vec<PieSector>,
}

/// Projects a graph into contiguous pie sectors.
///
/// Negative values count as zero, so they yield zero-span sectors. A zero
/// total yields no sectors at all.
pub fn project_pie<K, V: NumericValue>(
    graph: &Graph<K, V>,
    bounds: Rect,
    insets: EdgeInsets,
    donut: bool,
) -> ChartResult<PieProjection> {
    let content = content_rect(bounds, insets)?;
    let center = content.center();
    let radius = content.width.min(content.height) / 2.0;
    let inner_radius = if donut {
        radius * DONUT_RADIUS_RATIO
    } else {
        0.0
    };

    let values: Vec<f64> = graph
        .units()
        .iter()
        .map(|unit| unit.value.clamp_non_negative().to_f64())
        .collect();
    let total = graph.non_negative_total_f64();

    if !total.is_finite() || total <= 0.0 {
        return Ok(PieProjection {
            center,
            radius,
            inner_radius,
            total: total.max(0.0),
            sectors: Vec::new(),
        });
    }

    let mut start_angle = PIE_START_ANGLE;
    let sectors = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let percentage = value / total;
            let end_angle = start_angle + TAU * percentage;
            let mid_angle = start_angle + (end_angle - start_angle) / 2.0;
            let sector = PieSector {
                index,
                center,
                radius,
                inner_radius,
                start_angle,
                end_angle,
                percentage,
                label_anchor: center.polar_offset(mid_angle, radius * LABEL_RADIUS_RATIO),
            };
            start_angle = end_angle;
            sector
        })
        .collect();

    Ok(PieProjection {
        center,
        radius,
        inner_radius,
        total,
        sectors,
    })
}
