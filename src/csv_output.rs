//! CSV output format for comparison tables
//!
//! Machine-readable, never colored: one header line per table followed by
//! one line per row, tables separated by a blank line.

use crate::table::{Metric, MetricTable, Row};

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    /// Omit the "±" spread columns
    no_range: bool,
}

impl CsvOutput {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// CSV formatter without spread columns
    pub fn without_range() -> Self {
        Self { no_range: true }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        // If field contains comma, quote, or newline, wrap in quotes and escape quotes
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Mean in full precision, exponent written with sign and two digits ("1.00000E+02")
    fn format_mean(value: f64) -> String {
        let formatted = format!("{:.5E}", value);
        match formatted.split_once('E') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(exp) => {
                    let sign = if exp < 0 { '-' } else { '+' };
                    format!("{}E{}{:02}", mantissa, sign, exp.abs())
                }
                Err(_) => formatted,
            },
            None => formatted,
        }
    }

    /// Header row for one table
    fn header(&self, table: &MetricTable) -> String {
        let mut fields = vec!["name".to_string()];
        for config in &table.configs {
            fields.push(Self::escape_field(&format!("{} ({})", config, table.metric)));
            if !self.no_range {
                fields.push("±".to_string());
            }
        }
        if table.is_old_new_delta() {
            fields.push("delta".to_string());
            fields.push("note".to_string());
        }
        fields.join(",")
    }

    fn metric_fields(&self, metric: &Metric, fields: &mut Vec<String>) {
        fields.push(Self::format_mean(metric.mean));
        if !self.no_range {
            fields.push(metric.format_diff());
        }
    }

    /// Format a row as a CSV line
    fn format_row(&self, table: &MetricTable, row: &Row) -> String {
        let mut fields = vec![Self::escape_field(&row.benchmark)];
        for metric in &row.metrics {
            self.metric_fields(metric, &mut fields);
        }
        if table.is_old_new_delta() {
            fields.push(Self::escape_field(&row.delta));
            fields.push(Self::escape_field(&row.note));
        }
        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self, tables: &[MetricTable]) -> String {
        let mut output = String::new();

        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&self.header(table));
            output.push('\n');

            for row in &table.rows {
                output.push_str(&self.format_row(table, row));
                output.push('\n');
            }
        }

        output
    }
}
