// Severity filter: keep only rows that regressed past a threshold
//
// Used as a CI gate: with a threshold of 5, only benchmarks that got at
// least 5% worse are reported. Tables left empty are dropped.

use crate::table::MetricTable;
use std::collections::BTreeSet;

/// Row's percentage delta is a regression of at least `threshold` percent
pub fn meets_threshold(pct_delta: f64, threshold: f64, bigger_is_better: bool) -> bool {
    if bigger_is_better {
        -pct_delta >= threshold
    } else {
        pct_delta >= threshold
    }
}

/// Prune rows below the severity threshold
///
/// A threshold of zero disables the filter and returns the tables untouched.
pub fn filter_by_severity(
    tables: Vec<MetricTable>,
    threshold: f64,
    increasing: &BTreeSet<String>,
) -> Vec<MetricTable> {
    if threshold <= 0.0 {
        return tables;
    }

    tables
        .into_iter()
        .filter_map(|mut table| {
            let bigger_is_better = increasing.contains(&table.metric);
            table
                .rows
                .retain(|row| meets_threshold(row.pct_delta, threshold, bigger_is_better));

            if table.rows.is_empty() {
                tracing::debug!(metric = %table.metric, threshold, "no rows past threshold");
                None
            } else {
                Some(table)
            }
        })
        .collect()
}
