use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::numeric::NumericValue;
use crate::core::graph::GraphUnit;
use crate::error::{ChartError, ChartResult};

/// Value domain a bar or line graph is normalized against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphRange<V> {
    pub min: V,
    pub max: V,
}

impl<V: NumericValue> GraphRange<V> {
    /// Creates a range, rejecting `min > max`.
    ///
    /// `min == max` is accepted here; mappers reject it when they need a span.
    pub fn new(min: V, max: V) -> ChartResult<Self> {
        if min > max {
            return Err(ChartError::InvalidRange {
                min: min.to_f64(),
                max: max.to_f64(),
            });
        }
        Ok(Self { min, max })
    }

    /// Default range for `unit_count` units: `[0, unit_count + 1]`, with the
    /// upper bound saturated to what `V` can hold.
    #[must_use]
    pub fn default_for_count(unit_count: usize) -> Self {
        let upper = i64::try_from(unit_count).unwrap_or(i64::MAX - 1) + 1;
        Self {
            min: V::zero(),
            max: V::from_i64(upper),
        }
    }

    /// Smallest range containing zero and every unit value.
    #[must_use]
    pub fn fit<K>(units: &[GraphUnit<K, V>]) -> Self {
        let mut min = V::zero();
        let mut max = V::zero();
        for unit in units {
            if OrderedFloat(unit.value.to_f64()) < OrderedFloat(min.to_f64()) {
                min = unit.value;
            }
            if OrderedFloat(unit.value.to_f64()) > OrderedFloat(max.to_f64()) {
                max = unit.value;
            }
        }
        Self { min, max }
    }

    /// `max - min`, computed in `f64` so narrow integer ranges cannot overflow.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max.to_f64() - self.min.to_f64()
    }

    /// Returns the span, failing when it is zero or not finite.
    pub fn checked_span(self) -> ChartResult<f64> {
        let span = self.span();
        if span < 0.0 {
            return Err(ChartError::InvalidRange {
                min: self.min.to_f64(),
                max: self.max.to_f64(),
            });
        }
        if !span.is_finite() || span == 0.0 {
            return Err(ChartError::DegenerateRange {
                min: self.min.to_f64(),
                max: self.max.to_f64(),
            });
        }
        Ok(span)
    }
}
