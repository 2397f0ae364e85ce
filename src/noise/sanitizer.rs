// Row sanitizer: cosmetic delta fixes and contaminated aggregate removal
//
// A geometric mean over samples that are effectively zero is dominated by
// those samples, so the aggregate row of such a unit is dropped.

use crate::table::{MetricTable, Row, NEUTRAL_DELTA};
use std::collections::HashSet;

/// Samples below this value (in the metric's natural unit) count as zero
pub const SAMPLE_EPSILON: f64 = 0.01;

/// Rows with fewer raw samples trigger an advisory warning
pub const MIN_SAMPLES: usize = 5;

/// What the sanitizer changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeSummary {
    /// Rows whose "+0.00%" delta was replaced by "~"
    pub normalized: usize,
    /// Geomean rows removed because their unit was contaminated
    pub dropped_aggregates: usize,
    /// Benchmarks that carry fewer than [`MIN_SAMPLES`] samples
    pub undersampled: Vec<String>,
}

impl SanitizeSummary {
    fn absorb(&mut self, other: SanitizeSummary) {
        self.normalized += other.normalized;
        self.dropped_aggregates += other.dropped_aggregates;
        self.undersampled.extend(other.undersampled);
    }
}

/// Replace an exact-zero delta printed as "+0.00%" with "~"
///
/// Returns true when the row was modified.
pub fn normalize_zero_delta(row: &mut Row) -> bool {
    if row.pct_delta == 0.0 && row.delta.contains("0.00%") {
        row.delta = NEUTRAL_DELTA.to_string();
        true
    } else {
        false
    }
}

/// Units for which some raw sample is below [`SAMPLE_EPSILON`]
pub fn contaminated_units(rows: &[Row]) -> HashSet<String> {
    rows.iter()
        .flat_map(|row| row.metrics.iter())
        .filter(|m| m.values.iter().any(|&v| v < SAMPLE_EPSILON))
        .map(|m| m.unit.clone())
        .collect()
}

fn is_contaminated_aggregate(row: &Row, contaminated: &HashSet<String>) -> bool {
    row.is_geomean() && row.unit().is_some_and(|unit| contaminated.contains(unit))
}

/// Sanitize one table in place
///
/// First pass collects contaminated units, second pass rebuilds the rows.
pub fn sanitize_table(table: &mut MetricTable) -> SanitizeSummary {
    let mut summary = SanitizeSummary::default();
    let contaminated = contaminated_units(&table.rows);

    let rows = std::mem::take(&mut table.rows);
    for mut row in rows {
        if normalize_zero_delta(&mut row) {
            summary.normalized += 1;
        }

        if is_contaminated_aggregate(&row, &contaminated) {
            tracing::debug!(
                metric = %table.metric,
                unit = row.unit().unwrap_or_default(),
                "dropping geomean row over near-zero samples"
            );
            summary.dropped_aggregates += 1;
            continue;
        }

        if let Some(primary) = row.metrics.first() {
            if primary.values.len() < MIN_SAMPLES && !row.is_geomean() {
                tracing::warn!(
                    "{} needs more samples, re-run with -count={} or higher?",
                    row.benchmark,
                    MIN_SAMPLES
                );
                summary.undersampled.push(row.benchmark.clone());
            }
        }

        table.rows.push(row);
    }

    summary
}

/// Sanitize every table in place
pub fn sanitize_tables(tables: &mut [MetricTable]) -> SanitizeSummary {
    let mut summary = SanitizeSummary::default();
    for table in tables.iter_mut() {
        summary.absorb(sanitize_table(table));
    }
    summary
}
