// Significance classifier: signal or noise, and in which direction
//
// Two floors guard against timing jitter:
// - an absolute epsilon on the difference of means, stepped by magnitude,
//   for pairwise comparisons of small values where percentages mislead
// - a relative floor built from each config's worst-case sample spread
//
// A row passing both is real signal; its sign crossed with the metric's
// directionality decides between improvement and regression.

use crate::config::Config;
use crate::table::{Change, Metric, MetricTable, Outcome, Row, NEUTRAL_DELTA};

/// Means below this (nanoseconds) count as tiny; their noise floor is doubled
const TINY_VALUE_THRESHOLD: f64 = 32.0;

/// Absolute noise epsilon for an average magnitude
///
/// | average | epsilon |
/// |---------|---------|
/// | < 10    | 1       |
/// | < 32    | 2       |
/// | < 80    | 3       |
/// | else    | 4       |
pub fn value_epsilon(avg: f64) -> f64 {
    if avg < 10.0 {
        1.0
    } else if avg < 32.0 {
        2.0
    } else if avg < 80.0 {
        3.0
    } else {
        4.0
    }
}

/// Pairwise means differ by no more than their magnitude's epsilon
///
/// Always false unless exactly two configs are compared.
pub fn is_epsilon_delta(metrics: &[Metric]) -> bool {
    let [old, new] = metrics else {
        return false;
    };
    let avg = (old.mean + new.mean) / 2.0;
    (old.mean - new.mean).abs() <= value_epsilon(avg)
}

/// Every config's mean is below the tiny-value threshold
pub fn is_tiny(metrics: &[Metric]) -> bool {
    metrics.iter().all(|m| m.mean < TINY_VALUE_THRESHOLD)
}

/// Minimum |percentage delta| that counts as real signal
///
/// Sum of spreads (in percent) of configs whose samples vary, doubled for
/// tiny values, plus one percent of buffer.
pub fn noise_floor(metrics: &[Metric]) -> f64 {
    let mut combined: f64 = metrics
        .iter()
        .filter(|m| m.min != m.max)
        .map(|m| 100.0 * m.spread())
        .sum();
    if is_tiny(metrics) {
        combined *= 2.0;
    }
    combined + 1.0
}

/// Judge a row without modifying it
pub fn classify(row: &Row, bigger_is_better: bool) -> Outcome {
    if is_epsilon_delta(&row.metrics) {
        return Outcome::Noise;
    }
    if row.pct_delta.abs() <= noise_floor(&row.metrics) {
        return Outcome::Noise;
    }

    match direction(&row.delta) {
        Some(Change::Increase) if bigger_is_better => Outcome::Improved,
        Some(Change::Increase) => Outcome::Regressed,
        Some(Change::Decrease) if bigger_is_better => Outcome::Regressed,
        Some(Change::Decrease) => Outcome::Improved,
        _ => Outcome::Ambiguous,
    }
}

/// Direction encoded in the printed delta's sign prefix
fn direction(delta: &str) -> Option<Change> {
    if delta.starts_with('+') {
        Some(Change::Increase)
    } else if delta.starts_with('-') {
        Some(Change::Decrease)
    } else {
        None
    }
}

/// Classify a row and record the verdict on it
///
/// Noise rows get the neutral delta and lose their change indicator.
pub fn classify_row(row: &mut Row, bigger_is_better: bool) -> Outcome {
    let outcome = classify(row, bigger_is_better);
    match outcome {
        Outcome::Noise => {
            if row.delta != NEUTRAL_DELTA {
                tracing::debug!(
                    benchmark = %row.benchmark,
                    delta = %row.delta,
                    floor = noise_floor(&row.metrics),
                    "delta within noise"
                );
            }
            row.delta = NEUTRAL_DELTA.to_string();
            row.change = Change::Unchanged;
        }
        Outcome::Improved | Outcome::Regressed => {
            if let Some(change) = direction(&row.delta) {
                row.change = change;
            }
        }
        Outcome::Ambiguous => {}
    }
    row.outcome = Some(outcome);
    outcome
}

/// Classify every row of every table
pub fn classify_tables(tables: &mut [MetricTable], config: &Config) {
    for table in tables.iter_mut() {
        let bigger_is_better = config.is_increasing(&table.metric);
        for row in table.rows.iter_mut() {
            classify_row(row, bigger_is_better);
        }
    }
}
