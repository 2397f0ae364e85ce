//! Run configuration for benchsift
//!
//! A plain structure with enumerated options. It can be loaded from a TOML
//! file and is overridden field by field from the command line.

use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Confidence test the statistics engine used to decide significance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeltaTest {
    None,
    /// Mann-Whitney U-test
    #[default]
    UTest,
    /// Welch's t-test
    TTest,
}

impl FromStr for DeltaTest {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(DeltaTest::None),
            "u" | "u-test" | "utest" => Ok(DeltaTest::UTest),
            "t" | "t-test" | "ttest" => Ok(DeltaTest::TTest),
            _ => Err(SiftError::InvalidDeltaTest(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeltaTest {
    type Error = SiftError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DeltaTest> for String {
    fn from(test: DeltaTest) -> Self {
        test.to_string()
    }
}

impl fmt::Display for DeltaTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeltaTest::None => "none",
            DeltaTest::UTest => "utest",
            DeltaTest::TTest => "ttest",
        };
        f.write_str(name)
    }
}

/// Row sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the engine's order
    #[default]
    None,
    Name,
    Delta,
}

/// Display order of rows inside each group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortOrder {
    pub key: SortKey,
    pub reverse: bool,
}

impl FromStr for SortOrder {
    type Err = SiftError;

    /// Parse "name", "delta", "none", optionally prefixed by "-" to reverse
    fn from_str(s: &str) -> Result<Self> {
        let (reverse, name) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let key = match name {
            "none" => SortKey::None,
            "name" => SortKey::Name,
            "delta" => SortKey::Delta,
            _ => return Err(SiftError::InvalidOrder(s.to_string())),
        };
        Ok(Self { key, reverse })
    }
}

impl TryFrom<String> for SortOrder {
    type Error = SiftError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.to_string()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reverse {
            f.write_str("-")?;
        }
        let name = match self.key {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Delta => "delta",
        };
        f.write_str(name)
    }
}

/// Output encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// Aligned plain text (default)
    #[default]
    Text,
    /// Comma-separated values
    Csv,
    /// HTML table
    Html,
    /// Markdown pipe table
    #[value(alias = "md")]
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(SiftError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = SiftError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.to_string()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Configuration for one benchsift run
///
/// # Example
/// ```
/// use benchsift::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.threshold, 0.0); // severity filter disabled
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Confidence test the engine applied; passed through untouched
    pub delta_test: DeltaTest,

    /// Significance level the engine used; passed through untouched
    pub alpha: f64,

    /// Keep the engine's geometric-mean rows
    pub add_geomean: bool,

    /// Labels the engine split benchmarks by; passed through untouched
    pub split: Vec<String>,

    /// Row order inside each group
    pub order: SortOrder,

    /// Severity cutoff in percent, 0 disables the filter
    pub threshold: f64,

    /// Metrics where a larger value is the favorable direction
    pub increasing: BTreeSet<String>,

    /// Paint classifier verdicts in the output
    pub color: bool,

    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delta_test: DeltaTest::UTest,
            alpha: 0.05,
            add_geomean: false,
            split: vec!["pkg".to_string(), "goos".to_string(), "goarch".to_string()],
            order: SortOrder::default(),
            threshold: 0.0,
            increasing: BTreeSet::new(),
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load defaults from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SiftError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|message| SiftError::ConfigFile {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml_str(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Check ranges that the types alone cannot express
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(SiftError::InvalidThreshold(self.threshold));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(SiftError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }

    /// Whether a larger value is favorable for `metric`
    pub fn is_increasing(&self, metric: &str) -> bool {
        self.increasing.contains(metric)
    }

    /// Severity filter is active
    pub fn filters_by_threshold(&self) -> bool {
        self.threshold > 0.0
    }
}
