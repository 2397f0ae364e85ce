//! Pipeline driver: sanitize, order, classify, filter, render
//!
//! Deterministic and single-pass. Identical tables and configuration always
//! produce identical output.

use crate::config::{Config, OutputFormat};
use crate::csv_output::CsvOutput;
use crate::error::Result;
use crate::html_output::HtmlOutput;
use crate::markdown_output::MarkdownOutput;
use crate::noise::{self, SanitizeSummary};
use crate::table::MetricTable;
use crate::text_output::TextOutput;

/// Final tables plus what the sanitizer observed
#[derive(Debug, Clone)]
pub struct Report {
    pub tables: Vec<MetricTable>,
    pub sanitized: SanitizeSummary,
}

/// Run every stage up to, but excluding, rendering
pub fn process(mut tables: Vec<MetricTable>, config: &Config) -> Result<Report> {
    config.validate()?;
    tracing::debug!(
        delta_test = %config.delta_test,
        alpha = config.alpha,
        split = ?config.split,
        "statistics engine settings"
    );

    if !config.add_geomean {
        for table in tables.iter_mut() {
            table.rows.retain(|row| !row.is_geomean());
        }
    }

    let sanitized = noise::sanitize_tables(&mut tables);
    noise::sort_tables(&mut tables, config.order);
    noise::classify_tables(&mut tables, config);

    if config.filters_by_threshold() {
        tables = noise::filter_by_severity(tables, config.threshold, &config.increasing);
    }

    Ok(Report { tables, sanitized })
}

/// Encode final tables in the configured format
pub fn render(tables: &[MetricTable], config: &Config) -> String {
    match config.format {
        OutputFormat::Text => TextOutput::new(config.color).render(tables),
        OutputFormat::Csv => CsvOutput::new().to_csv(tables),
        OutputFormat::Html => HtmlOutput::new(config.color).to_html(tables),
        OutputFormat::Markdown => MarkdownOutput::new(config.color).to_markdown(tables),
    }
}

/// Process and render in one call
///
/// # Example
/// ```
/// use benchsift::config::{Config, OutputFormat};
/// use benchsift::table::{Metric, MetricTable, Row};
///
/// let row = Row::new(
///     "BenchmarkFoo",
///     vec![Metric::constant(100.0, 5, "ns/op"), Metric::constant(150.0, 5, "ns/op")],
/// )
/// .with_pct_delta(50.0);
/// let table = MetricTable::new("time/op", vec!["old".into(), "new".into()]).with_rows(vec![row]);
///
/// let config = Config { format: OutputFormat::Csv, ..Config::default() };
/// let csv = benchsift::report::run(vec![table], &config).unwrap();
/// assert!(csv.contains("BenchmarkFoo"));
/// ```
pub fn run(tables: Vec<MetricTable>, config: &Config) -> Result<String> {
    let report = process(tables, config)?;
    Ok(render(&report.tables, config))
}
