//! Comparison tables produced by the statistics engine
//!
//! One [`MetricTable`] per measured unit, holding one [`Row`] per benchmark.
//! The engine has already computed means, extrema and percentage deltas;
//! this crate only annotates and prunes them.

use crate::scaler::Scaler;
use serde::{Deserialize, Serialize};

/// Reserved benchmark name of the synthetic geometric-mean row
pub const GEOMEAN_NAME: &str = "[Geo mean]";

/// Printed delta of a row with no trustworthy change
pub const NEUTRAL_DELTA: &str = "~";

/// One config's measurement of a benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Raw samples left after outlier removal
    #[serde(default, alias = "rvalues")]
    pub values: Vec<f64>,
    #[serde(default)]
    pub unit: String,
}

impl Metric {
    /// Metric whose every sample equals `mean`
    pub fn constant(mean: f64, samples: usize, unit: &str) -> Self {
        Self {
            mean,
            min: mean,
            max: mean,
            values: vec![mean; samples],
            unit: unit.to_string(),
        }
    }

    /// Build a metric from raw samples
    pub fn from_samples(values: Vec<f64>, unit: &str) -> Self {
        let (mean, min, max) = if values.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let sum: f64 = values.iter().sum();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (sum / values.len() as f64, min, max)
        };
        Self {
            mean,
            min,
            max,
            values,
            unit: unit.to_string(),
        }
    }

    /// Worst-case relative spread of the samples around the mean
    ///
    /// Larger of `1 - min/mean` and `max/mean - 1`; zero when mean or max is zero.
    pub fn spread(&self) -> f64 {
        if self.mean == 0.0 || self.max == 0.0 {
            return 0.0;
        }
        let below = 1.0 - self.min / self.mean;
        let above = self.max / self.mean - 1.0;
        below.max(above)
    }

    pub fn format_mean(&self, scaler: &Scaler) -> String {
        scaler.format(self.mean)
    }

    /// Spread as "N%", empty when it cannot be computed
    pub fn format_diff(&self) -> String {
        if self.mean == 0.0 || self.max == 0.0 {
            return String::new();
        }
        format!("{:.0}%", self.spread() * 100.0)
    }

    /// "mean ± N%" as printed in text tables
    pub fn format(&self, scaler: &Scaler) -> String {
        let mean = self.format_mean(scaler);
        let diff = self.format_diff();
        if diff.is_empty() {
            mean
        } else {
            format!("{} ±{:>3}", mean, diff)
        }
    }
}

/// Direction reported by the statistics engine or assigned by the classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Change {
    Increase,
    Decrease,
    #[default]
    Unchanged,
}

/// Classifier verdict for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Real change in the favorable direction
    Improved,
    /// Real change in the unfavorable direction
    Regressed,
    /// Change indistinguishable from measurement jitter
    Noise,
    /// Real change whose delta carries no sign
    Ambiguous,
}

/// One benchmark's comparison across configs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub benchmark: String,
    #[serde(default)]
    pub group: String,
    pub metrics: Vec<Metric>,
    /// Printed delta, e.g. "+12.34%" or "~"
    #[serde(default = "neutral_delta")]
    pub delta: String,
    #[serde(default)]
    pub pct_delta: f64,
    #[serde(default)]
    pub change: Change,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Scaler>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

fn neutral_delta() -> String {
    NEUTRAL_DELTA.to_string()
}

impl Row {
    /// Row with no delta information yet
    pub fn new(benchmark: impl Into<String>, metrics: Vec<Metric>) -> Self {
        Self {
            benchmark: benchmark.into(),
            group: String::new(),
            metrics,
            delta: neutral_delta(),
            pct_delta: 0.0,
            change: Change::Unchanged,
            note: String::new(),
            scaler: None,
            outcome: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the percentage delta and its printed form ("+12.34%")
    pub fn with_pct_delta(mut self, pct: f64) -> Self {
        self.pct_delta = pct;
        self.delta = format!("{:+.2}%", pct);
        self.change = if pct > 0.0 {
            Change::Increase
        } else if pct < 0.0 {
            Change::Decrease
        } else {
            Change::Unchanged
        };
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn is_geomean(&self) -> bool {
        self.benchmark == GEOMEAN_NAME
    }

    /// Unit of the primary metric, if any
    pub fn unit(&self) -> Option<&str> {
        self.metrics.first().map(|m| m.unit.as_str())
    }

    /// Scaler from the engine, or one derived from the primary metric
    pub fn scaler(&self) -> Scaler {
        match (&self.scaler, self.metrics.first()) {
            (Some(scaler), _) => scaler.clone(),
            (None, Some(m)) => Scaler::for_value(m.mean, &m.unit),
            (None, None) => Scaler::identity(),
        }
    }
}

/// All rows measured in one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    /// Metric name, e.g. "time/op"
    pub metric: String,
    /// Compared variant labels, one column each
    pub configs: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Old-vs-new delta layout; defaults to true for pairwise tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_new_delta: Option<bool>,
}

impl MetricTable {
    pub fn new(metric: impl Into<String>, configs: Vec<String>) -> Self {
        Self {
            metric: metric.into(),
            configs,
            rows: Vec::new(),
            old_new_delta: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn is_old_new_delta(&self) -> bool {
        self.old_new_delta.unwrap_or(self.configs.len() == 2)
    }
}

/// Wrapper accepted alongside a bare table array
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSet {
    pub tables: Vec<MetricTable>,
}
