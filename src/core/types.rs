use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians and `distance` from `self`, in screen space
    /// where y grows downward.
    #[must_use]
    pub fn polar_offset(self, angle: f64, distance: f64) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in pixel space; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Checks that the rectangle can host a drawing: finite with positive size.
    pub fn validate_drawable(self) -> ChartResult<()> {
        if !self.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Shrinks the rectangle by `insets`.
    #[must_use]
    pub fn inset(self, insets: EdgeInsets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.horizontal_total(),
            height: self.height - insets.vertical_total(),
        }
    }
}

/// Content insets applied to the drawable bounds before mapping.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn all(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    #[must_use]
    pub fn vertical_total(self) -> f64 {
        self.top + self.bottom
    }

    #[must_use]
    pub fn horizontal_total(self) -> f64 {
        self.left + self.right
    }
}

/// Resolves the content rect for a mapper, rejecting insets that consume the
/// whole drawable area.
pub fn content_rect(bounds: Rect, insets: EdgeInsets) -> ChartResult<Rect> {
    bounds.validate_drawable()?;
    let content = bounds.inset(insets);
    if !content.is_finite() || content.width <= 0.0 || content.height <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "content insets leave no drawable area: width={}, height={}",
            content.width, content.height
        )));
    }
    Ok(content)
}
