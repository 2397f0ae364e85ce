//! CLI argument parsing for benchsift

use crate::config::{Config, DeltaTest, OutputFormat, SortOrder};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "benchsift")]
#[command(version)]
#[command(
    about = "Separate real benchmark changes from noise and gate on regressions",
    long_about = None
)]
pub struct Cli {
    /// Significance test the statistics engine applied: utest, ttest, or none
    #[arg(long = "delta-test", value_name = "TEST")]
    pub delta_test: Option<DeltaTest>,

    /// Consider change significant if p < ALPHA
    #[arg(long, value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Keep the geometric mean rows of each table
    #[arg(long)]
    pub geomean: bool,

    /// Labels benchmarks were split by (comma separated)
    #[arg(long, value_name = "LABELS", value_delimiter = ',')]
    pub split: Option<Vec<String>>,

    /// Sort rows by ORDER: [-]delta, [-]name, none
    #[arg(long, value_name = "ORDER", allow_hyphen_values = true)]
    pub sort: Option<SortOrder>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Report only rows that regressed by at least PCT percent (0..100, 0 disables)
    #[arg(long, value_name = "PCT")]
    pub threshold: Option<f64>,

    /// Metric where increasing is better (repeatable or comma separated)
    #[arg(long, value_name = "METRIC", value_delimiter = ',')]
    pub increasing: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML file with default settings; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,

    /// Comparison tables from the statistics engine (JSON), "-" for stdin
    #[arg(value_name = "TABLES")]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Overlay the flags that were given on top of `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(test) = self.delta_test {
            config.delta_test = test;
        }
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if self.geomean {
            config.add_geomean = true;
        }
        if let Some(split) = &self.split {
            config.split = split.clone();
        }
        if let Some(order) = self.sort {
            config.order = order;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        config.increasing.extend(self.increasing.iter().cloned());
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortKey;

    #[test]
    fn test_cli_parses_inputs() {
        let cli = Cli::parse_from(["benchsift", "old_vs_new.json", "-"]);
        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(cli.inputs[1], PathBuf::from("-"));
    }

    #[test]
    fn test_cli_defaults_keep_config() {
        let cli = Cli::parse_from(["benchsift", "tables.json"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn test_cli_threshold_and_increasing() {
        let cli = Cli::parse_from([
            "benchsift",
            "--threshold",
            "5",
            "--increasing",
            "speed,MB/s",
            "--increasing",
            "ops",
            "tables.json",
        ]);
        let config = cli.apply(Config::default());
        assert_eq!(config.threshold, 5.0);
        assert!(config.is_increasing("speed"));
        assert!(config.is_increasing("MB/s"));
        assert!(config.is_increasing("ops"));
    }

    #[test]
    fn test_cli_format_alias() {
        let cli = Cli::parse_from(["benchsift", "--format", "md", "tables.json"]);
        assert_eq!(cli.format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["benchsift", "--format", "xml", "tables.json"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_delta_test() {
        assert!(Cli::try_parse_from(["benchsift", "--delta-test", "z", "tables.json"]).is_err());
    }

    #[test]
    fn test_cli_reverse_sort() {
        let cli = Cli::parse_from(["benchsift", "--sort", "-delta", "tables.json"]);
        let config = cli.apply(Config::default());
        assert_eq!(config.order.key, SortKey::Delta);
        assert!(config.order.reverse);
    }

    #[test]
    fn test_cli_flags_override_file_config() {
        let base = Config {
            color: true,
            threshold: 2.0,
            format: OutputFormat::Html,
            ..Config::default()
        };
        let cli = Cli::parse_from(["benchsift", "--no-color", "--threshold", "7.5", "t.json"]);
        let config = cli.apply(base);
        assert!(!config.color);
        assert_eq!(config.threshold, 7.5);
        // Not given on the command line
        assert_eq!(config.format, OutputFormat::Html);
    }

    #[test]
    fn test_cli_geomean_and_delta_test() {
        let cli = Cli::parse_from(["benchsift", "--geomean", "--delta-test", "t-test", "t.json"]);
        let config = cli.apply(Config::default());
        assert!(config.add_geomean);
        assert_eq!(config.delta_test, DeltaTest::TTest);
    }
}
