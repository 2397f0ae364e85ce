// End-to-end scenarios for the noise pipeline
//
// Realistic comparisons: flat old/new tables, tiny nanosecond benchmarks,
// throughput metrics where bigger is better, and contaminated geomeans.

use super::*;
use crate::config::Config;
use crate::table::{Change, Metric, MetricTable, Outcome, Row, GEOMEAN_NAME};

fn old_new(rows: Vec<Row>) -> MetricTable {
    MetricTable::new("time/op", vec!["old".into(), "new".into()]).with_rows(rows)
}

fn flat_row(name: &str, old: f64, new: f64, pct: f64) -> Row {
    Row::new(
        name,
        vec![
            Metric::constant(old, 5, "ns/op"),
            Metric::constant(new, 5, "ns/op"),
        ],
    )
    .with_pct_delta(pct)
}

fn pipeline(tables: &mut Vec<MetricTable>, config: &Config) {
    sanitize_tables(tables);
    classify_tables(tables, config);
    if config.filters_by_threshold() {
        *tables = filter_by_severity(std::mem::take(tables), config.threshold, &config.increasing);
    }
}

/// Scenario: 100ns -> 150ns with zero spread on a latency metric
///
/// Expected: noise floor is the 1% buffer, +50% is a regression
#[test]
fn test_clear_latency_regression() {
    let mut tables = vec![old_new(vec![flat_row("BenchmarkFoo", 100.0, 150.0, 50.0)])];
    pipeline(&mut tables, &Config::default());

    let row = &tables[0].rows[0];
    assert_eq!(noise_floor(&row.metrics), 1.0);
    assert_eq!(row.outcome, Some(Outcome::Regressed));
    assert_eq!(row.delta, "+50.00%");
    assert_eq!(row.change, Change::Increase);
}

/// Scenario: 100ns -> 101ns
///
/// Expected: average 100.5 gives epsilon 4, |diff| = 1 is noise
#[test]
fn test_one_nanosecond_is_noise() {
    let mut tables = vec![old_new(vec![flat_row("BenchmarkFoo", 100.0, 101.0, 1.0)])];
    pipeline(&mut tables, &Config::default());

    let row = &tables[0].rows[0];
    assert_eq!(value_epsilon(100.5), 4.0);
    assert_eq!(row.outcome, Some(Outcome::Noise));
    assert_eq!(row.delta, "~");
}

/// Scenario: 3ns -> 4ns is +33% but well within timer resolution
#[test]
fn test_tiny_benchmark_large_percentage_is_noise() {
    let mut tables = vec![old_new(vec![flat_row("BenchmarkNop", 3.0, 4.0, 33.33)])];
    pipeline(&mut tables, &Config::default());

    assert_eq!(tables[0].rows[0].outcome, Some(Outcome::Noise));
}

/// Scenario: a "+0.00%" delta from the engine for an exact zero change
#[test]
fn test_zero_delta_never_colored() {
    let mut row = flat_row("BenchmarkSame", 500.0, 500.0, 0.0);
    row.delta = "+0.00%".to_string();
    let mut tables = vec![old_new(vec![row])];
    pipeline(&mut tables, &Config::default());

    let row = &tables[0].rows[0];
    assert_eq!(row.delta, "~");
    assert_eq!(row.outcome, Some(Outcome::Noise));
}

/// Scenario: throughput drop of 20% with MB/s marked as increasing
///
/// Expected: regression; kept at threshold 10, dropped at threshold 25
#[test]
fn test_throughput_regression_gate() {
    let throughput = || {
        MetricTable::new("speed", vec!["old".into(), "new".into()]).with_rows(vec![Row::new(
            "BenchmarkCopy",
            vec![
                Metric::constant(500.0, 5, "MB/s"),
                Metric::constant(400.0, 5, "MB/s"),
            ],
        )
        .with_pct_delta(-20.0)])
    };

    let mut config = Config::default();
    config.increasing.insert("speed".to_string());
    config.threshold = 10.0;

    let mut tables = vec![throughput()];
    pipeline(&mut tables, &config);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows[0].outcome, Some(Outcome::Regressed));

    config.threshold = 25.0;
    let mut tables = vec![throughput()];
    pipeline(&mut tables, &config);
    assert!(tables.is_empty());
}

/// Scenario: one benchmark runs in ~5ps (reported as 0.005ns)
///
/// Expected: the time/op geomean row disappears, alloc geomean survives
#[test]
fn test_contaminated_geomean_removed_per_unit() {
    let time = old_new(vec![
        flat_row("BenchmarkInlined", 0.005, 0.005, 0.0),
        flat_row("BenchmarkReal", 200.0, 210.0, 5.0),
        flat_row(GEOMEAN_NAME, 1.0, 1.02, 2.0),
    ]);
    let allocs = MetricTable::new("alloc/op", vec!["old".into(), "new".into()]).with_rows(vec![
        Row::new(
            "BenchmarkReal",
            vec![
                Metric::constant(64.0, 5, "B/op"),
                Metric::constant(64.0, 5, "B/op"),
            ],
        ),
        Row::new(
            GEOMEAN_NAME,
            vec![
                Metric::constant(64.0, 0, "B/op"),
                Metric::constant(64.0, 0, "B/op"),
            ],
        ),
    ]);

    let mut tables = vec![time, allocs];
    pipeline(&mut tables, &Config::default());

    assert!(tables[0].rows.iter().all(|r| !r.is_geomean()));
    assert!(tables[1].rows.iter().any(|r| r.is_geomean()));
}

/// Scenario: noisy samples (±20%) hide a +15% change
#[test]
fn test_jittery_samples_hide_change() {
    let row = Row::new(
        "BenchmarkNetwork",
        vec![
            Metric::from_samples(vec![800.0, 1000.0, 1100.0, 1100.0, 1000.0], "ns/op"),
            Metric::from_samples(vec![1000.0, 1150.0, 1200.0, 1200.0, 1200.0], "ns/op"),
        ],
    )
    .with_pct_delta(14.0);
    let mut tables = vec![old_new(vec![row])];
    pipeline(&mut tables, &Config::default());

    assert_eq!(tables[0].rows[0].outcome, Some(Outcome::Noise));
}

/// Scenario: the same jitter cannot hide a 2x slowdown
#[test]
fn test_jittery_samples_do_not_hide_large_change() {
    let row = Row::new(
        "BenchmarkNetwork",
        vec![
            Metric::from_samples(vec![900.0, 1000.0, 1100.0, 1000.0, 1000.0], "ns/op"),
            Metric::from_samples(vec![1900.0, 2000.0, 2100.0, 2000.0, 2000.0], "ns/op"),
        ],
    )
    .with_pct_delta(100.0);
    let mut tables = vec![old_new(vec![row])];
    pipeline(&mut tables, &Config::default());

    assert_eq!(tables[0].rows[0].outcome, Some(Outcome::Regressed));
}

/// Scenario: severity filter sees numeric deltas, classification only paints
#[test]
fn test_threshold_filters_on_numeric_delta() {
    let mut tables = vec![old_new(vec![
        flat_row("BenchmarkBig", 1000.0, 1300.0, 30.0),
        flat_row("BenchmarkSmall", 1000.0, 1020.0, 2.0),
        flat_row("BenchmarkFaster", 1000.0, 700.0, -30.0),
    ])];
    let config = Config {
        threshold: 5.0,
        ..Config::default()
    };
    pipeline(&mut tables, &config);

    let names: Vec<_> = tables[0].rows.iter().map(|r| r.benchmark.as_str()).collect();
    assert_eq!(names, vec!["BenchmarkBig"]);
}
