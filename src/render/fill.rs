use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinearGradient, Paint};

/// Fill policy for bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarFill {
    Solid(Color),
    /// Vertical gradient from the bar top to its bottom, colors evenly spaced.
    Gradient(Vec<Color>),
}

impl Default for BarFill {
    fn default() -> Self {
        Self::Solid(crate::render::palette::bar())
    }
}

impl BarFill {
    /// Resolves the paint for a bar occupying `rect`.
    ///
    /// A gradient with a single color collapses to a solid fill.
    pub fn paint_for(&self, rect: Rect) -> ChartResult<Paint> {
        match self {
            Self::Solid(color) => Ok(Paint::Solid(*color)),
            Self::Gradient(colors) => match colors.as_slice() {
                [] => Err(ChartError::InvalidData(
                    "bar gradient needs at least one color".to_owned(),
                )),
                [color] => Ok(Paint::Solid(*color)),
                _ => Ok(Paint::LinearGradient(LinearGradient::evenly_spaced(
                    Point::new(rect.x, rect.y),
                    Point::new(rect.x, rect.bottom()),
                    colors,
                ))),
            },
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient(colors) => {
                if colors.is_empty() {
                    return Err(ChartError::InvalidData(
                        "bar gradient needs at least one color".to_owned(),
                    ));
                }
                colors.iter().try_for_each(|color| color.validate())
            }
        }
    }
}
