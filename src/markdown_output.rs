//! Markdown output format for comparison tables
//!
//! Pipe tables for pull-request comments. With colors enabled, regressions
//! are printed in bold and improvements in italics.

use crate::table::{MetricTable, Outcome, Row};

/// Markdown output formatter
#[derive(Debug)]
pub struct MarkdownOutput {
    colorized: bool,
}

impl MarkdownOutput {
    /// Create a new Markdown formatter
    pub fn new(colorized: bool) -> Self {
        Self { colorized }
    }

    /// Escape pipes so user text cannot split a cell
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn emphasize(&self, delta: &str, outcome: Option<Outcome>) -> String {
        if !self.colorized {
            return delta.to_string();
        }
        match outcome {
            Some(Outcome::Regressed) => format!("**{}**", delta),
            Some(Outcome::Improved) => format!("_{}_", delta),
            _ => delta.to_string(),
        }
    }

    fn delimiter(columns: usize) -> String {
        let mut line = String::from("|");
        line.push_str(&"--|".repeat(columns));
        line.push('\n');
        line
    }

    fn format_row(&self, row: &Row) -> String {
        let scaler = row.scaler();
        let mut line = format!("| {}", Self::escape_cell(&row.benchmark));
        for metric in &row.metrics {
            line.push_str(&format!(
                " | {} ± {}",
                metric.format_mean(&scaler),
                metric.format_diff()
            ));
        }
        let delta = self.emphasize(&Self::escape_cell(&row.delta), row.outcome);
        line.push_str(&format!(" | {} {} |\n", delta, Self::escape_cell(&row.note)));
        line
    }

    /// Generate the Markdown table, empty when there is nothing to show
    pub fn to_markdown(&self, tables: &[MetricTable]) -> String {
        let Some(first) = tables.first() else {
            return String::new();
        };

        let mut md = String::from("| |");
        for config in &first.configs {
            md.push_str(&format!(" {} |", Self::escape_cell(config)));
        }
        md.push_str(" |\n");
        md.push_str(&Self::delimiter(first.configs.len() + 2));

        for table in tables {
            md.push_str(&format!("| | {} |", Self::escape_cell(&table.metric)));
            for _ in 1..table.configs.len() {
                md.push_str(" |");
            }
            md.push_str(" delta |\n");

            let mut group = "";
            for row in &table.rows {
                if row.group != group {
                    group = &row.group;
                    md.push_str(&format!("| {} |\n", Self::escape_cell(group)));
                }
                md.push_str(&self.format_row(row));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Metric;

    fn row(name: &str, outcome: Outcome, pct: f64) -> Row {
        let mut row = Row::new(
            name,
            vec![
                Metric::constant(100.0, 5, "ns/op"),
                Metric::constant(100.0 + pct, 5, "ns/op"),
            ],
        )
        .with_group("pkg: a")
        .with_pct_delta(pct);
        row.outcome = Some(outcome);
        row
    }

    fn sample_table() -> MetricTable {
        MetricTable::new("time/op", vec!["old".into(), "new".into()]).with_rows(vec![
            row("BenchmarkSlower", Outcome::Regressed, 50.0),
            row("BenchmarkFaster", Outcome::Improved, -40.0),
        ])
    }

    #[test]
    fn test_markdown_layout() {
        let md = MarkdownOutput::new(false).to_markdown(&[sample_table()]);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| | old | new | |");
        assert_eq!(lines[1], "|--|--|--|--|");
        assert_eq!(lines[2], "| | time/op | | delta |");
        assert_eq!(lines[3], "| pkg: a |");
        assert_eq!(lines[4], "| BenchmarkSlower | 100ns ± 0% | 150ns ± 0% | +50.00%  |");
        assert_eq!(lines[5], "| BenchmarkFaster | 100ns ± 0% | 60ns ± 0% | -40.00%  |");
    }

    #[test]
    fn test_markdown_emphasis() {
        let md = MarkdownOutput::new(true).to_markdown(&[sample_table()]);
        assert!(md.contains("| **+50.00%**  |"));
        assert!(md.contains("| _-40.00%_  |"));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let mut table = sample_table();
        table.rows[0].benchmark = "BenchmarkA|B".to_string();
        let md = MarkdownOutput::new(false).to_markdown(&[table]);
        assert!(md.contains("| BenchmarkA\\|B |"));
    }

    #[test]
    fn test_markdown_metric_row_spans_configs() {
        let table = MetricTable::new("time/op", vec!["a".into(), "b".into(), "c".into()]);
        let md = MarkdownOutput::new(false).to_markdown(&[table]);
        assert!(md.contains("| | time/op | | | delta |\n"));
        assert!(md.contains("|--|--|--|--|--|\n"));
    }

    #[test]
    fn test_markdown_empty() {
        assert_eq!(MarkdownOutput::new(true).to_markdown(&[]), "");
    }
}
