// Noise classification and filtering for benchmark comparison tables
//
// Benchmark timings jitter. A "+3%" printed by the statistics engine is not
// necessarily a regression, and a geometric mean over near-zero samples is
// not meaningful. This module decides, row by row, what is signal.
//
// Pipeline (strictly sequential, table-local):
// 1. sanitizer   - neutralize "+0.00%" deltas, drop contaminated geomean rows
// 2. order       - optional stable re-sort inside each group
// 3. classifier  - absolute epsilon + sample-spread noise floor per row
// 4. severity    - keep only rows regressing past a configured threshold
//
// Rendering consumes the `Outcome` tags written by the classifier.

mod classifier;
mod order;
mod sanitizer;
mod severity;

pub use classifier::{
    classify, classify_row, classify_tables, is_epsilon_delta, is_tiny, noise_floor,
    value_epsilon,
};
pub use order::{sort_rows, sort_tables};
pub use sanitizer::{
    contaminated_units, normalize_zero_delta, sanitize_table, sanitize_tables, SanitizeSummary,
    MIN_SAMPLES, SAMPLE_EPSILON,
};
pub use severity::{filter_by_severity, meets_threshold};

#[cfg(test)]
mod tests;
