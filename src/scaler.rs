//! Display scaling for benchmark values
//!
//! Picks an SI prefix so that every printed value carries three significant
//! digits ("1.23ms", "45.6kB", "789MB/s").

use serde::{Deserialize, Serialize};

/// Converts a raw value in its natural unit into a short display string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    /// Raw values are divided by this before printing
    pub divisor: f64,
    /// Digits after the decimal point
    pub precision: usize,
    /// Appended verbatim after the number
    #[serde(default)]
    pub suffix: String,
}

impl Default for Scaler {
    fn default() -> Self {
        Self::identity()
    }
}

impl Scaler {
    /// Scaler that prints the raw value with two decimals
    pub fn identity() -> Self {
        Self {
            divisor: 1.0,
            precision: 2,
            suffix: String::new(),
        }
    }

    /// Choose a scaler for `value` measured in `unit`
    ///
    /// # Example
    /// ```
    /// use benchsift::scaler::Scaler;
    ///
    /// let s = Scaler::for_value(1_234_567.0, "ns/op");
    /// assert_eq!(s.format(1_234_567.0), "1.23ms");
    /// ```
    pub fn for_value(value: f64, unit: &str) -> Self {
        if is_time_unit(unit) {
            return time_scaler(value);
        }

        let prescale = if unit == "MB/s" { 1e6 } else { 1.0 };
        let (precision, scale, prefix) = si_step(value * prescale);

        let mut suffix = prefix.to_string();
        match unit {
            "B/op" => suffix.push('B'),
            "MB/s" => suffix.push_str("B/s"),
            _ => {}
        }

        Self {
            divisor: scale / prescale,
            precision,
            suffix,
        }
    }

    /// Render `value` with this scaler
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}{}", self.precision, value / self.divisor, self.suffix)
    }
}

fn is_time_unit(unit: &str) -> bool {
    matches!(unit, "ns/op" | "ns")
}

/// Precision, scale and prefix for a plain magnitude
fn si_step(x: f64) -> (usize, f64, &'static str) {
    const STEPS: [(f64, f64, &str); 5] = [
        (1e12, 1e12, "T"),
        (1e9, 1e9, "G"),
        (1e6, 1e6, "M"),
        (1e3, 1e3, "k"),
        (1.0, 1.0, ""),
    ];

    for (base, scale, prefix) in STEPS {
        if x >= 99.5 * base {
            return (0, scale, prefix);
        }
        if x >= 9.95 * base {
            return (1, scale, prefix);
        }
        if x >= 0.995 * base && base > 1.0 {
            return (2, scale, prefix);
        }
    }

    (2, 1.0, "")
}

/// Time values are stored in nanoseconds
fn time_scaler(ns: f64) -> Scaler {
    const STEPS: [(f64, f64, &str); 4] = [
        (1e9, 1e9, "s"),
        (1e6, 1e6, "ms"),
        (1e3, 1e3, "µs"),
        (1.0, 1.0, "ns"),
    ];

    for (base, divisor, suffix) in STEPS {
        let precision = if ns >= 99.5 * base {
            0
        } else if ns >= 9.95 * base {
            1
        } else if ns >= 0.995 * base {
            2
        } else {
            continue;
        };
        return Scaler {
            divisor,
            precision,
            suffix: suffix.to_string(),
        };
    }

    Scaler {
        divisor: 1.0,
        precision: 2,
        suffix: "ns".to_string(),
    }
}
