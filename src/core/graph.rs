use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::numeric::{NumericValue, sum_values, sum_values_f64};
use crate::core::range::GraphRange;

/// Chart family a graph is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    Bar,
    Line,
    Pie,
}

/// One `(key, value)` data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphUnit<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> GraphUnit<K, V> {
    #[must_use]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Record types that can be turned into graph units.
pub trait GraphData {
    type Key: Clone + Eq + Hash;
    type Value: NumericValue;

    fn key(&self) -> Self::Key;
    fn value(&self) -> Self::Value;
}

impl<K: Clone + Eq + Hash, V: NumericValue> GraphData for GraphUnit<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> K {
        self.key.clone()
    }

    fn value(&self) -> V {
        self.value
    }
}

impl<K: Clone + Eq + Hash, V: NumericValue> GraphData for (K, V) {
    type Key = K;
    type Value = V;

    fn key(&self) -> K {
        self.0.clone()
    }

    fn value(&self) -> V {
        self.1
    }
}

/// Produces label text for a unit given the graph total.
pub type TextDisplayFn<K, V> =
    Arc<dyn Fn(&GraphUnit<K, V>, V) -> Option<String> + Send + Sync + 'static>;

/// Ordered chart data plus the range it is normalized against.
///
/// Units keep input order: it is the x-axis order for bars and lines and the
/// slice order for pies. A graph never changes after construction; views swap
/// their style config instead.
#[derive(Clone)]
pub struct Graph<K, V> {
    kind: GraphKind,
    units: Vec<GraphUnit<K, V>>,
    range: GraphRange<V>,
    text_display: Option<TextDisplayFn<K, V>>,
}

impl<V: NumericValue> Graph<String, V> {
    /// Builds a graph from bare values, keyed by their index.
    pub fn from_sequence(
        kind: GraphKind,
        values: impl IntoIterator<Item = V>,
        range: Option<GraphRange<V>>,
    ) -> Self {
        let units = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| GraphUnit::new(index.to_string(), value))
            .collect();
        Self::from_units(kind, units, range)
    }

    pub fn bar(values: impl IntoIterator<Item = V>, range: Option<GraphRange<V>>) -> Self {
        Self::from_sequence(GraphKind::Bar, values, range)
    }

    pub fn line(values: impl IntoIterator<Item = V>, range: Option<GraphRange<V>>) -> Self {
        Self::from_sequence(GraphKind::Line, values, range)
    }

    pub fn pie(values: impl IntoIterator<Item = V>) -> Self {
        Self::from_sequence(GraphKind::Pie, values, None)
    }
}

impl<K: Clone + Eq + Hash, V: NumericValue> Graph<K, V> {
    /// Builds a graph from `(key, value)` pairs in iteration order.
    ///
    /// No sorting happens here; pass an ordered collection such as a `Vec` or
    /// an `IndexMap` when the order matters. Keys are unique: a repeated key
    /// keeps its first position and takes the last value.
    pub fn from_keyed_collection(
        kind: GraphKind,
        pairs: impl IntoIterator<Item = (K, V)>,
        range: Option<GraphRange<V>>,
    ) -> Self {
        let keyed: IndexMap<K, V> = pairs.into_iter().collect();
        let units = keyed
            .into_iter()
            .map(|(key, value)| GraphUnit::new(key, value))
            .collect();
        Self::from_units(kind, units, range)
    }

    /// Builds a graph from records exposing a key and a value.
    pub fn from_typed_records<R>(
        kind: GraphKind,
        records: impl IntoIterator<Item = R>,
        range: Option<GraphRange<V>>,
    ) -> Self
    where
        R: GraphData<Key = K, Value = V>,
    {
        let units = records
            .into_iter()
            .map(|record| GraphUnit::new(record.key(), record.value()))
            .collect();
        Self::from_units(kind, units, range)
    }
}

impl<K, V: NumericValue> Graph<K, V> {
    fn from_units(
        kind: GraphKind,
        units: Vec<GraphUnit<K, V>>,
        range: Option<GraphRange<V>>,
    ) -> Self {
        let range = range.unwrap_or_else(|| GraphRange::default_for_count(units.len()));
        Self {
            kind,
            units,
            range,
            text_display: None,
        }
    }

    /// Replaces the label handler.
    #[must_use]
    pub fn with_text_display<F>(mut self, handler: F) -> Self
    where
        F: Fn(&GraphUnit<K, V>, V) -> Option<String> + Send + Sync + 'static,
    {
        self.text_display = Some(Arc::new(handler));
        self
    }

    /// Disables labels for every unit.
    #[must_use]
    pub fn without_text(self) -> Self
    where
        K: 'static,
        V: 'static,
    {
        self.with_text_display(|_, _| None)
    }

    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    #[must_use]
    pub fn units(&self) -> &[GraphUnit<K, V>] {
        &self.units
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> GraphRange<V> {
        self.range
    }

    /// Sum of every unit value, negative values included.
    ///
    /// Integer totals saturate at the type bounds; use `total_f64` for math.
    #[must_use]
    pub fn total(&self) -> V {
        sum_values(self.units.iter().map(|unit| unit.value))
    }

    /// Sum of the values with negatives counted as zero.
    #[must_use]
    pub fn non_negative_total(&self) -> V {
        sum_values(self.units.iter().map(|unit| unit.value.clamp_non_negative()))
    }

    #[must_use]
    pub fn total_f64(&self) -> f64 {
        sum_values_f64(self.units.iter().map(|unit| unit.value))
    }

    /// Exact share base for pie sectors, independent of the value type width.
    #[must_use]
    pub fn non_negative_total_f64(&self) -> f64 {
        sum_values_f64(self.units.iter().map(|unit| unit.value.clamp_non_negative()))
    }

    /// Label text for `unit`; a custom handler receives `total`.
    ///
    /// Without a handler bars and lines show the value and pies show the
    /// rounded share of the non-negative total.
    #[must_use]
    pub fn text_for(&self, unit: &GraphUnit<K, V>, total: V) -> Option<String> {
        if let Some(handler) = &self.text_display {
            return handler(unit, total);
        }
        match self.kind {
            GraphKind::Bar | GraphKind::Line => Some(format!("{}", unit.value.to_f64())),
            GraphKind::Pie => {
                let total = self.non_negative_total_f64();
                if total <= 0.0 {
                    return None;
                }
                let share = unit.value.clamp_non_negative().to_f64() / total;
                Some(format!("{:.0}%", share * 100.0))
            }
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Graph<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind)
            .field("units", &self.units)
            .field("range", &self.range)
            .field("has_text_display", &self.text_display.is_some())
            .finish()
    }
}
