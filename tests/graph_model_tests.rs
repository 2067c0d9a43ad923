use graph_views::ChartError;
use graph_views::core::{Graph, GraphData, GraphKind, GraphRange, GraphUnit};
use indexmap::IndexMap;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
struct MonthlySales {
    month: &'static str,
    units_sold: u32,
}

impl GraphData for MonthlySales {
    type Key = &'static str;
    type Value = u32;

    fn key(&self) -> &'static str {
        self.month
    }

    fn value(&self) -> u32 {
        self.units_sold
    }
}

#[test]
fn sequence_graph_keys_units_by_index_in_input_order() {
    let graph = Graph::bar([5, 3, 9], None);

    let keys: Vec<&str> = graph.units().iter().map(|unit| unit.key.as_str()).collect();
    let values: Vec<i32> = graph.units().iter().map(|unit| unit.value).collect();
    assert_eq!(keys, ["0", "1", "2"]);
    assert_eq!(values, [5, 3, 9]);
    assert_eq!(graph.kind(), GraphKind::Bar);
}

#[test]
fn missing_range_defaults_to_zero_through_count_plus_one() {
    let graph = Graph::line([1.0, 2.0, 3.0, 4.0], None);
    assert_eq!(graph.range(), GraphRange { min: 0.0, max: 5.0 });

    let empty = Graph::<String, f64>::bar([], None);
    assert_eq!(empty.range(), GraphRange { min: 0.0, max: 1.0 });
    assert!(empty.is_empty());
}

#[test]
fn keyed_collection_preserves_caller_order_without_sorting() {
    let mut sales = IndexMap::new();
    sales.insert("mar", 7);
    sales.insert("jan", 2);
    sales.insert("feb", 4);

    let graph = Graph::from_keyed_collection(GraphKind::Pie, sales, None);
    let keys: Vec<&str> = graph.units().iter().map(|unit| unit.key).collect();
    assert_eq!(keys, ["mar", "jan", "feb"]);
}

#[test]
fn keyed_collection_keeps_first_position_and_last_value_for_repeated_keys() {
    let graph = Graph::from_keyed_collection(
        GraphKind::Bar,
        vec![("a", 1), ("b", 2), ("a", 3)],
        Some(GraphRange::new(0, 5).expect("valid range")),
    );

    assert_eq!(
        graph.units(),
        &[GraphUnit::new("a", 3), GraphUnit::new("b", 2)]
    );
}

#[test]
fn typed_records_map_through_graph_data() {
    let records = vec![
        MonthlySales {
            month: "jan",
            units_sold: 12,
        },
        MonthlySales {
            month: "feb",
            units_sold: 30,
        },
    ];

    let graph = Graph::from_typed_records(GraphKind::Line, records, None);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.units()[1], GraphUnit::new("feb", 30));
    assert_eq!(graph.total(), 42);
}

#[test]
fn total_sums_every_value_including_negatives() {
    let graph = Graph::pie([10, -4, 6]);
    assert_eq!(graph.total(), 12);
    assert_eq!(graph.non_negative_total(), 16);
}

#[test]
fn narrow_integer_totals_saturate_while_f64_totals_stay_exact() {
    let graph = Graph::pie(vec![100_i8, 100, -50]);
    assert_eq!(graph.total(), i8::MAX);
    assert_eq!(graph.non_negative_total(), i8::MAX);
    assert!((graph.total_f64() - 150.0).abs() <= 1e-9);
    assert!((graph.non_negative_total_f64() - 200.0).abs() <= 1e-9);

    let first = &graph.units()[0];
    assert_eq!(graph.text_for(first, graph.non_negative_total()).as_deref(), Some("50%"));
}

#[test]
fn decimal_values_are_supported() {
    let graph = Graph::bar(
        [Decimal::new(125, 2), Decimal::new(-50, 2)],
        Some(GraphRange::new(Decimal::new(-1, 0), Decimal::new(2, 0)).expect("valid range")),
    );
    assert_eq!(graph.total(), Decimal::new(75, 2));
}

#[test]
fn range_rejects_min_above_max() {
    let err = GraphRange::new(5.0, 1.0).expect_err("inverted range must fail");
    assert!(matches!(err, ChartError::InvalidRange { .. }));
}

#[test]
fn fit_range_always_includes_zero() {
    let units = [GraphUnit::new("a", 4.0), GraphUnit::new("b", 9.0)];
    assert_eq!(GraphRange::fit(&units), GraphRange { min: 0.0, max: 9.0 });

    let units = [GraphUnit::new("a", -3.0), GraphUnit::new("b", -1.0)];
    assert_eq!(GraphRange::fit(&units), GraphRange { min: -3.0, max: 0.0 });
}

#[test]
fn default_text_shows_value_for_bars_and_share_for_pies() {
    let bar = Graph::bar([8.0, -2.5], None);
    let total = bar.total();
    assert_eq!(bar.text_for(&bar.units()[0], total).as_deref(), Some("8"));
    assert_eq!(bar.text_for(&bar.units()[1], total).as_deref(), Some("-2.5"));

    let pie = Graph::pie([75, 25, -5]);
    let total = pie.non_negative_total();
    assert_eq!(pie.text_for(&pie.units()[0], total).as_deref(), Some("75%"));
    assert_eq!(pie.text_for(&pie.units()[2], total).as_deref(), Some("0%"));
}

#[test]
fn text_display_handler_receives_unit_and_total() {
    let graph = Graph::bar([2, 3], None)
        .with_text_display(|unit, total| Some(format!("{}/{total}", unit.value)));
    let total = graph.total();
    assert_eq!(
        graph.text_for(&graph.units()[0], total).as_deref(),
        Some("2/5")
    );

    let silent = Graph::bar([2, 3], None).without_text();
    assert_eq!(silent.text_for(&silent.units()[1], 5), None);
}
